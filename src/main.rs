mod cli;
mod comments;
mod config;
mod error;
mod git;
mod history;
mod logging;
mod model;
mod novelty;
mod provider;
mod report_helpers;

use std::path::{Path, PathBuf};

use clap::Parser;

use cli::{BuildArgs, Cli, Commands};
use config::Config;
use error::{Error, Result};
use git::{GitParents, ParentSource};
use history::{BuildHistory, FileHistory};
use model::CommitId;
use novelty::BuildCommitIndex;
use provider::CommentProvider;

fn load_history(args: &BuildArgs) -> Result<FileHistory> {
    let history = FileHistory::load(&args.history)?;
    tracing::debug!(
        path = %args.history.display(),
        builds = history.build_count(),
        "loaded build history"
    );
    if !history.contains(&args.build) {
        return Err(Error::UnknownBuild(args.build.clone()));
    }
    Ok(history)
}

fn run_comments(
    args: &BuildArgs,
    workspace: Option<&Path>,
    config: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = Config::load(config)?;
    let history = load_history(args)?;
    let index = BuildCommitIndex::new();

    let provider = CommentProvider::new(&history, GitParents, &index, &config);
    let files = provider.file_comments(&args.build, workspace);
    tracing::debug!(cached_commits = index.cached_commits(), "comment evaluation finished");

    if json {
        comments::report::print_json(&files)
    } else {
        comments::report::print_report(&args.build, &files);
        Ok(())
    }
}

fn run_parents(path: &Path) -> Result<()> {
    for parent in GitParents.parents(path) {
        println!("{parent}");
    }
    Ok(())
}

fn run_owner(args: &BuildArgs, commit: &str) -> Result<()> {
    let commit: CommitId = commit.parse()?;
    let history = load_history(args)?;
    let index = BuildCommitIndex::new();
    match index.resolve_build_for_commit(&commit, &args.build, &history) {
        Some(build) => println!("{build}"),
        None => println!("not found"),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Comments {
            build,
            workspace,
            config,
            json,
        } => run_comments(&build, workspace.as_deref(), config.as_deref(), json),
        Commands::Parents { path } => {
            let target = path.unwrap_or_else(|| PathBuf::from("."));
            run_parents(&target)
        }
        Commands::Owner { build, commit } => run_owner(&build, &commit),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
