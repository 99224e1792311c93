//! Value types shared by the novelty pipeline.
//!
//! Everything here is plain data: annotations compare by value, commit ids
//! by byte content, and the output types serialize to the review sink's
//! `{path, comments: [{line, message}]}` shape.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Identifier of a build as the host knows it (e.g. `"41"`).
pub type BuildId = String;

/// A 20-byte source-control commit identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId([u8; 20]);

impl CommitId {
    pub const LEN: usize = 20;
}

impl From<git2::Oid> for CommitId {
    fn from(oid: git2::Oid) -> Self {
        let raw = oid.as_bytes();
        let mut bytes = [0u8; Self::LEN];
        let n = raw.len().min(Self::LEN);
        bytes[..n].copy_from_slice(&raw[..n]);
        Self(bytes)
    }
}

impl FromStr for CommitId {
    type Err = Error;

    /// Parse a full 40-character hex id. Abbreviated ids are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != Self::LEN * 2 {
            return Err(Error::InvalidCommit(s.to_string()));
        }
        let oid = git2::Oid::from_str(s).map_err(|_| Error::InvalidCommit(s.to_string()))?;
        Ok(Self::from(oid))
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl Serialize for CommitId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CommitId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One static-analysis finding. Two annotations are the same warning when
/// all three fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(alias = "file_name")]
    pub file_path: String,
    pub line: u32,
    pub message: String,
}

impl Annotation {
    /// Copy of this annotation with `file_path` replaced.
    pub fn with_path(&self, file_path: String) -> Self {
        Self {
            file_path,
            line: self.line,
            message: self.message.clone(),
        }
    }
}

/// Annotations of one build, deduplicated by value. Ordered so that
/// iteration (and therefore comment output) is stable run-to-run.
pub type AnnotationSet = BTreeSet<Annotation>;

/// The aggregated static-analysis result a host attaches to a build.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisResult {
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineComment {
    pub line: u32,
    pub message: String,
}

/// All new-warning comments for one file, ready for the review sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentedFile {
    pub path: String,
    pub comments: Vec<LineComment>,
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
