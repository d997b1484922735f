//! Error types for field normalization.

use std::path::PathBuf;

use lmcat_model::FieldId;
use thiserror::Error;

/// Raw cell text that does not match any recognized pattern for its field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    /// A language variety token outside the controlled vocabulary.
    #[error("{field}: unknown language variety '{token}' in '{text}'")]
    UnknownVariety {
        field: FieldId,
        token: String,
        text: String,
    },
}

/// Errors raised while loading a normalizer configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, NormalizationError>;
