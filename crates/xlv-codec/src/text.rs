//! Hex-encoded text fields (memos, domains, URIs).

use tracing::warn;

use crate::error::{CodecError, CodecResult};

/// Decode a hex string into printable UTF-8 text.
///
/// Control characters (including newlines) are rejected so that a decoded
/// value always fits on one report line.
pub fn decode_hex_text(raw: &str) -> CodecResult<String> {
    let bytes = hex::decode(raw).map_err(|e| CodecError::InvalidHex(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|_| CodecError::NotPrintable)?;
    if text.chars().any(char::is_control) {
        return Err(CodecError::NotPrintable);
    }
    Ok(text)
}

/// Decode a hex field, falling back to the raw hex on failure.
pub fn hex_text_or_raw(field: &str, raw: &str) -> String {
    match decode_hex_text(raw) {
        Ok(text) => text,
        Err(e) => {
            warn!(field, error = %e, "hex decode failed; showing raw value");
            raw.to_string()
        }
    }
}
