use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown field identifier: {0}")]
    UnknownField(String),
    #[error("unknown language variety code: {0}")]
    UnknownVariety(String),
    #[error("unknown cutoff type: {0}")]
    UnknownCutOffType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
