//! Ledger amounts.
//!
//! An amount is either a bare string of native-currency drops or a record
//! describing an issued token: `{currency, issuer, value}` for trust-line
//! tokens and `{mpt_issuance_id, value}` for multi-purpose tokens.

use std::fmt;

use serde_json::Value;

use crate::currency::display_currency;

/// Drops in one XRP.
pub const DROPS_PER_XRP: u64 = 1_000_000;

/// A parsed ledger amount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Amount {
    /// Native currency, in drops.
    Drops(u64),
    /// A trust-line token.
    Issued {
        value: String,
        currency: String,
        issuer: Option<String>,
    },
    /// A multi-purpose token.
    Mpt { value: String, issuance_id: String },
}

impl Amount {
    /// Parse an amount from a raw JSON value.
    ///
    /// Returns `None` for anything that is not amount-shaped: strings that
    /// are not all digits, negative numbers, or records without `value`.
    pub fn from_value(raw: &Value) -> Option<Self> {
        match raw {
            Value::String(s) => parse_drops(s).map(Self::Drops),
            Value::Number(n) => n.as_u64().map(Self::Drops),
            Value::Object(map) => {
                let value = scalar_text(map.get("value")?)?;
                if let Some(currency) = map.get("currency").and_then(Value::as_str) {
                    return Some(Self::Issued {
                        value,
                        currency: currency.to_string(),
                        issuer: map
                            .get("issuer")
                            .and_then(Value::as_str)
                            .map(str::to_string),
                    });
                }
                let issuance_id = map.get("mpt_issuance_id").and_then(Value::as_str)?;
                Some(Self::Mpt {
                    value,
                    issuance_id: issuance_id.to_string(),
                })
            }
            _ => None,
        }
    }

    /// Returns `true` if the value is a record shaped like a token amount.
    pub fn is_amount_record(raw: &Value) -> bool {
        matches!(raw, Value::Object(_)) && Self::from_value(raw).is_some()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drops(drops) => f.write_str(&format_drops(*drops)),
            Self::Issued {
                value,
                currency,
                issuer,
            } => {
                write!(f, "{} {}", value, display_currency(currency))?;
                if let Some(issuer) = issuer {
                    write!(f, " (Issuer: {issuer})")?;
                }
                Ok(())
            }
            Self::Mpt { value, issuance_id } => write!(f, "{value} MPT ({issuance_id})"),
        }
    }
}

/// Render drops as whole XRP with six decimal places.
///
/// Integer arithmetic keeps the conversion exact for every `u64`.
pub fn format_drops(drops: u64) -> String {
    format!(
        "{}.{:06} XRP",
        drops / DROPS_PER_XRP,
        drops % DROPS_PER_XRP
    )
}

/// Format a raw amount, or `None` when the value is absent or not an amount.
pub fn format_amount(raw: &Value) -> Option<String> {
    Amount::from_value(raw).map(|amount| amount.to_string())
}

fn parse_drops(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn scalar_text(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
