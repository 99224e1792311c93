//! Read-only view of a project's build history.
//!
//! The CI host owns the real history; `BuildHistory` is the slice of it the
//! novelty pipeline needs. `FileHistory` is a JSON-backed implementation
//! used by the `gw` command line and by tests.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{AnalysisResult, BuildId, CommitId};

pub trait BuildHistory {
    /// The build that ran immediately before `id` in the project, if any.
    fn previous(&self, id: &str) -> Option<BuildId>;

    /// Whether the project still knows a build with this id.
    fn contains(&self, id: &str) -> bool;

    /// The commit recorded as built by `id`.
    fn last_built_commit(&self, id: &str) -> Option<CommitId>;

    /// The aggregated static-analysis result attached to `id`, if any.
    fn analysis(&self, id: &str) -> Option<&AnalysisResult>;

    /// The workspace directory `id` was built in.
    fn workspace(&self, id: &str) -> Option<&Path>;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildRecord {
    pub id: BuildId,
    #[serde(default)]
    pub commit: Option<CommitId>,
    #[serde(default)]
    pub workspace: Option<PathBuf>,
    #[serde(default)]
    pub analysis: Option<AnalysisResult>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct HistoryDocument {
    builds: Vec<BuildRecord>,
}

/// Build history kept in memory, oldest build first.
pub struct FileHistory {
    builds: Vec<BuildRecord>,
    positions: HashMap<BuildId, usize>,
}

impl FileHistory {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let doc: HistoryDocument = serde_json::from_str(text)?;
        Self::from_records(doc.builds)
    }

    pub fn from_records(builds: Vec<BuildRecord>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(builds.len());
        for (pos, build) in builds.iter().enumerate() {
            if positions.insert(build.id.clone(), pos).is_some() {
                return Err(Error::DuplicateBuild(build.id.clone()));
            }
        }
        Ok(Self { builds, positions })
    }

    pub fn get(&self, id: &str) -> Option<&BuildRecord> {
        self.positions.get(id).map(|&pos| &self.builds[pos])
    }

    pub fn build_count(&self) -> usize {
        self.builds.len()
    }
}

impl BuildHistory for FileHistory {
    fn previous(&self, id: &str) -> Option<BuildId> {
        let pos = *self.positions.get(id)?;
        pos.checked_sub(1).map(|prev| self.builds[prev].id.clone())
    }

    fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    fn last_built_commit(&self, id: &str) -> Option<CommitId> {
        self.get(id)?.commit
    }

    fn analysis(&self, id: &str) -> Option<&AnalysisResult> {
        self.get(id)?.analysis.as_ref()
    }

    fn workspace(&self, id: &str) -> Option<&Path> {
        self.get(id)?.workspace.as_deref()
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
