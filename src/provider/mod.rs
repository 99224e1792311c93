//! Per-build entry point: from a finished build to the inline comments the
//! review system should receive.

use std::path::Path;

use crate::comments;
use crate::config::Config;
use crate::git::ParentSource;
use crate::history::BuildHistory;
use crate::model::CommentedFile;
use crate::novelty::{self, AnnotationCollector, BuildCommitIndex};

pub struct CommentProvider<'a, P> {
    history: &'a dyn BuildHistory,
    parents: P,
    index: &'a BuildCommitIndex,
    config: &'a Config,
}

impl<'a, P: ParentSource> CommentProvider<'a, P> {
    pub fn new(
        history: &'a dyn BuildHistory,
        parents: P,
        index: &'a BuildCommitIndex,
        config: &'a Config,
    ) -> Self {
        Self {
            history,
            parents,
            index,
            config,
        }
    }

    /// Comments for the warnings `build` introduced. `checkout` overrides the
    /// build's recorded workspace as the place to read parent commits from.
    ///
    /// Never fails: every problem along the way degrades to fewer comments.
    pub fn file_comments(&self, build: &str, checkout: Option<&Path>) -> Vec<CommentedFile> {
        if !self.config.analysis_collector {
            tracing::debug!(build, "analysis collector not installed, nothing to report");
            return Vec::new();
        }

        let collector =
            AnnotationCollector::new(self.history, self.config.paths.workspace_root.clone());
        let current = collector.collect(build);
        if current.is_empty() {
            return Vec::new();
        }

        let Some(checkout) = checkout.or_else(|| self.history.workspace(build)) else {
            tracing::debug!(build, "no checkout to read parent commits from");
            return Vec::new();
        };
        let mut parents = self.parents.parents(checkout);
        if let Some(limit) = self.config.parents.limit {
            parents.truncate(limit);
        }

        let novel = novelty::compute_new_annotations(
            self.history,
            build,
            &current,
            &parents,
            self.index,
            &collector,
        );
        tracing::debug!(
            build,
            warnings = current.len(),
            new = novel.len(),
            parents = parents.len(),
            "novelty computed"
        );
        comments::assemble(&novel)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
