use std::path::Path;

use git2::Repository;

use crate::error::{Error, Result};
use crate::model::CommitId;

/// Source of the parent commits of whatever a checkout currently has
/// checked out.
pub trait ParentSource {
    /// Parent ids of the newest commit in `checkout`. An unreadable
    /// checkout yields an empty list.
    fn parents(&self, checkout: &Path) -> Vec<CommitId>;
}

/// Reads parents straight from the git repository in the checkout.
pub struct GitParents;

impl ParentSource for GitParents {
    fn parents(&self, checkout: &Path) -> Vec<CommitId> {
        match GitRepo::open(checkout).and_then(|repo| repo.head_parents()) {
            Ok(parents) => parents,
            Err(err) => {
                tracing::debug!(
                    checkout = %checkout.display(),
                    error = %err,
                    "commit graph unavailable, treating as no parents"
                );
                Vec::new()
            }
        }
    }
}

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)?;
        if repo.is_bare() {
            return Err(Error::Git(git2::Error::from_str(
                "bare repositories are not supported",
            )));
        }
        Ok(Self { repo })
    }

    /// Parents of HEAD, in the order git records them (first parent first).
    /// A root commit has none; a merge has two or more.
    pub fn head_parents(&self) -> Result<Vec<CommitId>> {
        let head = self.repo.head()?.peel_to_commit()?;
        Ok(head.parent_ids().map(CommitId::from).collect())
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
