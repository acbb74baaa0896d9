//! Error type shared by the inspector, prompts, merger and writer.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfiguratorError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed ESLint configuration {path}: {reason}")]
    MalformedConfiguration { path: PathBuf, reason: String },

    #[error("malformed manifest {path}: {reason}")]
    MalformedManifest { path: PathBuf, reason: String },

    #[error("malformed settings file {path}: {reason}")]
    MalformedSettings { path: PathBuf, reason: String },

    #[error("failed to get user input: {0}")]
    Prompt(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize ESLint configuration: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write to stdout: {0}")]
    Output(#[source] std::io::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, ConfiguratorError>;

impl From<dialoguer::Error> for ConfiguratorError {
    fn from(e: dialoguer::Error) -> Self {
        ConfiguratorError::Prompt(e.to_string())
    }
}
