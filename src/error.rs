use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("git error: {0}")]
    Git(#[from] git2::Error),
    #[error("invalid commit id {0:?} (expected 40 hex characters)")]
    InvalidCommit(String),
    #[error("unknown build: {0}")]
    UnknownBuild(String),
    #[error("duplicate build id in history: {0}")]
    DuplicateBuild(String),
    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
