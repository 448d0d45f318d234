//! NFT flag bitmask.

use serde_json::Value;

/// Named NFT flag bits, in display order.
pub const NFT_FLAGS: &[(u32, &str)] = &[
    (0x0000_0001, "Burnable"),
    (0x0000_0002, "OnlyXRP"),
    (0x0000_0008, "Transferable"),
    (0x0000_0010, "Mutable"),
];

/// Render a flag word as a comma-joined list of names, or `"None"` when no
/// named bit is set. Unnamed bits are ignored.
pub fn decode_nft_flags(bits: u32) -> String {
    let names: Vec<&str> = NFT_FLAGS
        .iter()
        .filter(|(bit, _)| bits & bit != 0)
        .map(|(_, name)| *name)
        .collect();
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}

/// Extract a flag word from a number or numeric string.
pub fn flags_from_value(raw: &Value) -> Option<u32> {
    match raw {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn zero_is_none() {
        assert_eq!(decode_nft_flags(0), "None");
    }

    #[test]
    fn single_flags() {
        assert_eq!(decode_nft_flags(1), "Burnable");
        assert_eq!(decode_nft_flags(2), "OnlyXRP");
        assert_eq!(decode_nft_flags(8), "Transferable");
        assert_eq!(decode_nft_flags(16), "Mutable");
    }

    #[test]
    fn combined_flags_keep_bit_order() {
        assert_eq!(decode_nft_flags(0x1 | 0x8), "Burnable, Transferable");
        assert_eq!(
            decode_nft_flags(0x1F),
            "Burnable, OnlyXRP, Transferable, Mutable"
        );
    }

    #[test]
    fn unnamed_bits_are_ignored() {
        assert_eq!(decode_nft_flags(0x4), "None");
        assert_eq!(decode_nft_flags(0x4 | 0x2), "OnlyXRP");
    }

    #[test]
    fn value_extraction() {
        assert_eq!(flags_from_value(&json!(9)), Some(9));
        assert_eq!(flags_from_value(&json!("8")), Some(8));
        assert_eq!(flags_from_value(&json!(null)), None);
        assert_eq!(flags_from_value(&json!(u64::MAX)), None);
    }
}
