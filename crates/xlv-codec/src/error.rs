//! Error types for the codec crate.

/// Errors that can occur while decoding a leaf value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The input was not valid hexadecimal.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// The decoded bytes are not printable text.
    #[error("decoded bytes are not printable text")]
    NotPrintable,

    /// The timestamp cannot be represented.
    #[error("timestamp out of range: {0}")]
    TimeOutOfRange(u64),

    /// The configured zone offset is not a valid UTC offset.
    #[error("invalid zone offset: {0} minutes")]
    InvalidZone(i32),

    /// The configured time format could not be applied.
    #[error("invalid time format: {0:?}")]
    InvalidTimeFormat(String),
}

/// Convenience alias for codec results.
pub type CodecResult<T> = Result<T, CodecError>;
