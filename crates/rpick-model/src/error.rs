use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error("primary runner label list is empty")]
    EmptyPrimaryLabels,

    #[error("fallback runner identifier is empty")]
    EmptyFallback,

    #[error("invalid primaries-required value: {0:?} (expected a non-negative integer)")]
    InvalidQuorum(String),

    #[error("Cannot specify both organization and enterprise")]
    ConflictingScope,

    #[error("invalid repository: {0:?} (expected owner/repo)")]
    InvalidRepository(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
