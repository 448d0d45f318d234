//! Currency code display.
//!
//! Standard codes are three characters and pass through unchanged. Longer
//! symbols are packed into 20 bytes and travel as 40 hex characters padded
//! with NULs. AMM liquidity-provider tokens also use a 40-hex code, but one
//! derived from a hash rather than from text.

use tracing::debug;

/// Length of a packed (non-standard) currency code in hex characters.
pub const PACKED_CURRENCY_LEN: usize = 40;

/// Longest decoded symbol still treated as a real currency code.
pub const MAX_SYMBOL_LEN: usize = 10;

/// Returns `true` if `code` is exactly 40 hex characters.
pub fn is_packed_currency(code: &str) -> bool {
    code.len() == PACKED_CURRENCY_LEN && code.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Render a currency code for display.
///
/// Packed codes that decode to at most ten printable ASCII characters are
/// shown as that symbol. Anything else is labelled `LP-{CODE}`.
///
/// The length test is a heuristic, not a protocol rule: the ledger does not
/// mark LP-token codes as such.
pub fn display_currency(code: &str) -> String {
    if !is_packed_currency(code) {
        return code.to_string();
    }
    match decode_symbol(code) {
        Some(symbol) if symbol.is_empty() => "XRP".to_string(),
        Some(symbol) if symbol.len() <= MAX_SYMBOL_LEN => symbol,
        _ => {
            debug!(code, "packed currency is not a symbol; labelling as LP token");
            format!("LP-{}", code.to_ascii_uppercase())
        }
    }
}

fn decode_symbol(code: &str) -> Option<String> {
    let bytes = hex::decode(code).ok()?;
    let trimmed: &[u8] = {
        let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
        let end = bytes.iter().rposition(|b| *b != 0).map_or(start, |i| i + 1);
        &bytes[start..end]
    };
    if !trimmed.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        return None;
    }
    String::from_utf8(trimmed.to_vec()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_codes_pass_through() {
        assert_eq!(display_currency("USD"), "USD");
        assert_eq!(display_currency("BOB"), "BOB");
        assert_eq!(display_currency(""), "");
    }

    #[test]
    fn packed_symbol_is_decoded() {
        assert_eq!(
            display_currency("534F4C4F00000000000000000000000000000000"),
            "SOLO"
        );
    }

    #[test]
    fn lowercase_packed_symbol() {
        let code = format!("4d414e41474552{}", "0".repeat(26));
        assert_eq!(display_currency(&code), "MANAGER");
    }

    #[test]
    fn ten_character_symbol_is_kept() {
        let code = format!("{}{}", hex::encode("ABCDEFGHIJ"), "00".repeat(10));
        assert_eq!(display_currency(&code), "ABCDEFGHIJ");
    }

    #[test]
    fn long_text_is_labelled_lp() {
        let code = hex::encode("ABCDEFGHIJKLMNOPQRST");
        assert_eq!(code.len(), 40);
        assert_eq!(display_currency(&code), format!("LP-{}", code.to_uppercase()));
    }

    #[test]
    fn binary_code_is_labelled_lp() {
        let code = "03930d02208264e2e40ec1b0c09e4db96ee197b1";
        assert_eq!(
            display_currency(code),
            "LP-03930D02208264E2E40EC1B0C09E4DB96EE197B1"
        );
    }

    #[test]
    fn all_zero_code_is_native() {
        assert_eq!(display_currency(&"0".repeat(40)), "XRP");
    }

    #[test]
    fn wrong_length_hex_passes_through() {
        assert_eq!(display_currency("534F4C4F"), "534F4C4F");
    }
}
