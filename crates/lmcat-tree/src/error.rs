use std::path::PathBuf;

/// Errors raised while loading or merging the metadata forest.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    // === Loading ===
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML record {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // === Merging ===
    /// An attribute is defined both by a node (or its ancestors) and by a child.
    #[error("attributes [{}] redefined at {path} (below '{name}')", .keys.join(", "))]
    Conflict {
        /// Nearest `name` above the conflicting child.
        name: String,
        /// Slash-joined identifiers of the conflicting child.
        path: String,
        keys: Vec<String>,
    },

    /// A leaf has no `name`, even after inheriting from its ancestors.
    #[error("entity at {path} has no name")]
    MissingIdentity { path: String },
}

impl TreeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TreeError>;
