//! Leaf value codecs for XRPL Ledger View.
//!
//! Every formatter in this crate is total from the caller's point of view:
//! decode failures are logged and degrade to the raw input rather than
//! surfacing an error to report builders.
//!
//! - [`amount`]: Native drops, issued-currency, and MPT amounts
//! - [`time`]: Ripple-epoch timestamps rendered in an explicit zone
//! - [`text`]: Hex blobs (memos, domains, URIs) decoded to printable text
//! - [`currency`]: Three-letter and packed 40-hex currency codes
//! - [`flags`]: NFT flag bitmask names

pub mod amount;
pub mod currency;
pub mod error;
pub mod flags;
pub mod text;
pub mod time;

pub use amount::{format_amount, format_drops, Amount, DROPS_PER_XRP};
pub use currency::{display_currency, is_packed_currency};
pub use error::{CodecError, CodecResult};
pub use flags::{decode_nft_flags, flags_from_value, NFT_FLAGS};
pub use text::{decode_hex_text, hex_text_or_raw};
pub use time::{format_ripple_time, ripple_time_from_value, ripple_to_unix, RIPPLE_EPOCH_OFFSET};
