use std::collections::HashSet;

use dashmap::DashMap;

use crate::history::BuildHistory;
use crate::model::{BuildId, CommitId};

/// Memoized commit -> build lookup over the project's build chain.
///
/// One instance lives for the whole process and is shared by every build
/// evaluation. Entries are never invalidated: once a commit has been built by
/// some build, that stays true. A cached miss is also kept.
#[derive(Default)]
pub struct BuildCommitIndex {
    cache: DashMap<CommitId, Option<BuildId>>,
}

impl BuildCommitIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent build before `from` that built `commit`.
    ///
    /// A cached build id is checked against the history again, so a build
    /// that has since been deleted resolves to `None`.
    pub fn resolve_build_for_commit(
        &self,
        commit: &CommitId,
        from: &str,
        history: &dyn BuildHistory,
    ) -> Option<BuildId> {
        let cached = self.cache.get(commit).map(|entry| entry.value().clone());
        let id = match cached {
            Some(id) => id,
            None => {
                // Walk without holding a shard lock; racing walkers agree on
                // the first value inserted.
                let found = find_in_chain(commit, from, history);
                self.cache.entry(*commit).or_insert(found).value().clone()
            }
        };

        let id = id?;
        if history.contains(&id) {
            Some(id)
        } else {
            tracing::debug!(commit = %commit, build = %id, "cached build no longer exists");
            None
        }
    }

    pub fn cached_commits(&self) -> usize {
        self.cache.len()
    }
}

/// Walk predecessors of `from`, newest first, and return the first build whose
/// recorded commit is `commit`.
fn find_in_chain(commit: &CommitId, from: &str, history: &dyn BuildHistory) -> Option<BuildId> {
    let mut seen = HashSet::new();
    let mut cursor = history.previous(from);
    while let Some(build) = cursor {
        if !seen.insert(build.clone()) {
            tracing::warn!(build = %build, "build chain loops back on itself, stopping walk");
            return None;
        }
        if history.last_built_commit(&build).as_ref() == Some(commit) {
            tracing::debug!(commit = %commit, build = %build, "commit resolved to build");
            return Some(build);
        }
        cursor = history.previous(&build);
    }
    tracing::debug!(commit = %commit, from, "no earlier build for commit");
    None
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
