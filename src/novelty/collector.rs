use crate::history::BuildHistory;
use crate::model::AnnotationSet;

use super::path::{normalize, workspace_root};

/// Extracts the normalized warning set of a build.
///
/// The stored analysis result is read-only here; each annotation is copied
/// with its rewritten path.
pub struct AnnotationCollector<'a> {
    history: &'a dyn BuildHistory,
    root_override: Option<String>,
}

impl<'a> AnnotationCollector<'a> {
    pub fn new(history: &'a dyn BuildHistory, root_override: Option<String>) -> Self {
        Self {
            history,
            root_override,
        }
    }

    /// Normalized annotations of `build`, or `None` when the build carries
    /// no analysis result at all.
    pub fn try_collect(&self, build: &str) -> Option<AnnotationSet> {
        let Some(result) = self.history.analysis(build) else {
            tracing::debug!(build, "no analysis result attached");
            return None;
        };
        let root = self.root_for(build);
        let set = result
            .annotations
            .iter()
            .map(|a| match &root {
                Some(root) => a.with_path(normalize(&a.file_path, root)),
                None => a.clone(),
            })
            .collect();
        Some(set)
    }

    pub fn collect(&self, build: &str) -> AnnotationSet {
        self.try_collect(build).unwrap_or_default()
    }

    fn root_for(&self, build: &str) -> Option<String> {
        if let Some(root) = &self.root_override {
            return Some(root.clone());
        }
        self.history.workspace(build).map(workspace_root)
    }
}

#[cfg(test)]
#[path = "collector_test.rs"]
mod tests;
