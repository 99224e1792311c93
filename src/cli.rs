//! CLI argument definitions for the `gw` command.
//!
//! Defines all subcommands and their arguments using the `clap` derive
//! macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "gw",
    version,
    about = "Inline Gerrit comments for newly introduced static-analysis warnings"
)]
pub struct Cli {
    /// Log debug details to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments that select a build in a recorded build history.
#[derive(Args)]
pub struct BuildArgs {
    /// JSON build history (builds listed oldest first)
    #[arg(long)]
    pub history: PathBuf,

    /// Id of the build to evaluate
    #[arg(long)]
    pub build: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print review comments for the warnings a build introduced
    #[command(long_about = "\
Print review comments for the warnings a build introduced.

The parent commits of the build's checkout are mapped to earlier builds in the
history. Warnings recorded by any of those parent builds are subtracted; what
remains is grouped per file as inline comments.

If no parent build with an analysis result exists, nothing is printed: without
a baseline every warning would look new.")]
    Comments {
        #[command(flatten)]
        build: BuildArgs,

        /// Git checkout to read parent commits from (default: the build's workspace)
        #[arg(long)]
        workspace: Option<PathBuf>,

        /// Config file (default: ./gw.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the parent commits of HEAD in a git checkout
    Parents {
        /// Checkout to inspect (default: current directory)
        path: Option<PathBuf>,
    },

    /// Find the build that produced a commit, walking back from a build
    Owner {
        #[command(flatten)]
        build: BuildArgs,

        /// Full 40-character commit id
        #[arg(long)]
        commit: String,
    },
}
