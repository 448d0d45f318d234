//! Error types for the flatten crate.

/// Failures that abort a whole report.
///
/// Field-level problems never reach this type: malformed values are
/// omitted and undecodable text falls back to its raw form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlattenError {
    /// The response (or its `result`) is not a JSON object.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// The response carries neither a transaction envelope nor metadata.
    #[error("response contains no transaction or metadata")]
    MissingTransaction,

    /// Nesting exceeds the configured depth limit.
    #[error("nesting exceeds {0} levels")]
    DepthExceeded(usize),

    /// The display configuration is unusable.
    #[error("invalid display configuration: {0}")]
    Config(#[from] xlv_types::TypeError),
}

/// Convenience alias for flatten results.
pub type FlattenResult<T> = Result<T, FlattenError>;

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
