//! Field descriptors and per-kind formatting.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use xlv_codec::{
    decode_nft_flags, display_currency, flags_from_value, format_amount, format_ripple_time,
    hex_text_or_raw, ripple_time_from_value,
};
use xlv_types::DisplayConfig;

/// How a field's raw value is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    /// Addresses, hashes, counters: scalars shown as-is.
    Text,
    /// Drops string or token amount record.
    Amount,
    /// Seconds since the ripple epoch.
    RippleTime,
    /// Hex-encoded text.
    Hex,
    /// Currency code, possibly packed into 40 hex characters.
    Currency,
    /// NFT flag bitmask.
    NftFlags,
    /// Object rendered as a sub-section.
    Nested,
    /// Array rendered as numbered sub-sections or lines.
    List,
    /// Transaction memos.
    Memos,
    /// Schema-less field: objects and arrays become compact JSON.
    Generic,
}

impl FieldKind {
    /// Guess the kind of a field that has no schema entry, from its name.
    pub fn infer(name: &str) -> Self {
        match name {
            "Amount" | "Amount2" | "Balance" | "BidMax" | "BidMin" | "DeliverMax"
            | "DeliverMin" | "DeliveredAmount" | "EPrice" | "Fee" | "HighLimit"
            | "LimitAmount" | "LowLimit" | "LPTokenBalance" | "LPTokenIn" | "LPTokenOut"
            | "NFTokenBrokerFee" | "Price" | "SendMax" | "TakerGets" | "TakerPays"
            | "delivered_amount" | "taker_gets" | "taker_pays" => Self::Amount,
            "CancelAfter" | "Expiration" | "FinishAfter" | "close_time" | "date"
            | "expiration" => Self::RippleTime,
            "Domain" | "MemoData" | "MemoFormat" | "MemoType" | "URI" => Self::Hex,
            "Currency" | "TakerGetsCurrency" | "TakerPaysCurrency" | "currency" => {
                Self::Currency
            }
            "Memos" => Self::Memos,
            _ => Self::Text,
        }
    }

    /// Format a raw value as a single display line.
    ///
    /// Returns `None` when the value is absent (null) or has a shape this
    /// kind cannot show on one line; callers omit the field in that case.
    /// Objects and arrays are only formatted here by [`FieldKind::Generic`]
    /// and by [`FieldKind::Amount`] for token amount records.
    pub fn format(&self, name: &str, raw: &Value, config: &DisplayConfig) -> Option<String> {
        match (self, raw) {
            (_, Value::Null) => None,
            (Self::Generic, Value::Object(_) | Value::Array(_)) => {
                serde_json::to_string(raw).ok()
            }
            (Self::Amount, _) => format_amount(raw).or_else(|| scalar_text(raw)),
            (_, Value::Object(_) | Value::Array(_)) => {
                debug!(field = name, "non-scalar value has no single-line form");
                None
            }
            (Self::RippleTime, _) => {
                let Some(secs) = ripple_time_from_value(raw) else {
                    debug!(field = name, "time field is not numeric; omitting");
                    return None;
                };
                match format_ripple_time(secs, config) {
                    Ok(text) => Some(text),
                    Err(e) => {
                        warn!(field = name, error = %e, "time formatting failed; showing raw value");
                        Some(secs.to_string())
                    }
                }
            }
            (Self::Hex, Value::String(s)) => Some(hex_text_or_raw(name, s)),
            (Self::Currency, Value::String(s)) => Some(display_currency(s)),
            (Self::NftFlags, _) => match flags_from_value(raw) {
                Some(bits) => Some(decode_nft_flags(bits)),
                None => scalar_text(raw),
            },
            _ => scalar_text(raw),
        }
    }
}

/// A named field in a schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: Cow<'static, str>,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// A field declared in a static schema table.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind,
        }
    }

    /// A field discovered at runtime.
    pub fn dynamic(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            kind,
        }
    }

    /// Format a raw value with this field's kind.
    pub fn format(&self, raw: &Value, config: &DisplayConfig) -> Option<String> {
        self.kind.format(&self.name, raw, config)
    }
}

/// Single-line text for a scalar; `None` for null, objects, and arrays.
pub fn scalar_text(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
