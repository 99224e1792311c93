//! Decide which warnings of a build are new relative to its parent builds.
//!
//! A Gerrit change's commit has 0..N parents. Each parent commit may map to
//! an earlier build of the project; the warnings of every such build form the
//! baseline, and only warnings absent from the whole baseline are new.
//!
//! If no parent build with an analysis result can be found, nothing is
//! reported. Treating every warning as new would flood the review with
//! pre-existing findings.

pub mod collector;
pub mod index;
pub mod path;

use crate::history::BuildHistory;
use crate::model::{AnnotationSet, CommitId};

pub use collector::AnnotationCollector;
pub use index::BuildCommitIndex;

/// Union of the warning sets of every parent build that could be resolved
/// and carries an analysis result. `None` when there is no such parent.
pub fn baseline(
    history: &dyn BuildHistory,
    build: &str,
    parents: &[CommitId],
    index: &BuildCommitIndex,
    collector: &AnnotationCollector,
) -> Option<AnnotationSet> {
    let mut union: Option<AnnotationSet> = None;
    for parent in parents {
        let Some(parent_build) = index.resolve_build_for_commit(parent, build, history) else {
            tracing::debug!(build, commit = %parent, "parent commit has no build");
            continue;
        };
        let Some(annotations) = collector.try_collect(&parent_build) else {
            tracing::debug!(
                build,
                parent_build = %parent_build,
                "parent build has no analysis result, excluded from baseline"
            );
            continue;
        };
        union.get_or_insert_with(AnnotationSet::new).extend(annotations);
    }
    union
}

/// Warnings in `current` that none of the resolved parent builds recorded.
///
/// Returns the empty set when no parent build could be resolved.
pub fn compute_new_annotations(
    history: &dyn BuildHistory,
    build: &str,
    current: &AnnotationSet,
    parents: &[CommitId],
    index: &BuildCommitIndex,
    collector: &AnnotationCollector,
) -> AnnotationSet {
    let Some(existing) = baseline(history, build, parents, index, collector) else {
        if !current.is_empty() {
            tracing::info!(
                build,
                warnings = current.len(),
                parents = parents.len(),
                "no previous analysis result for any parent, suppressing comments"
            );
        }
        return AnnotationSet::new();
    };
    current.difference(&existing).cloned().collect()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
