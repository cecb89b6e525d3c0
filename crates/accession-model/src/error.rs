use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown modification '{modification}' for source field '{source_field}'")]
    UnknownModification {
        source_field: String,
        modification: String,
    },
    #[error("malformed local identifier: {0}")]
    InvalidIdentifier(String),
    #[error("invalid collection config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
