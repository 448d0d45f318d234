use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid utc offset: {0} minutes")]
    InvalidOffset(i32),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
