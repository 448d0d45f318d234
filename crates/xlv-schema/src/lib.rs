//! Entry-schema registry for XRPL Ledger View.
//!
//! Maps ledger entry and transaction tags to ordered field layouts. Each
//! field carries a [`FieldKind`] deciding how its raw JSON value is shown;
//! records with unregistered tags fall back to a generic schema built from
//! the record itself.
//!
//! # Key Types
//!
//! - [`EntrySchemaRegistry`] / [`Schema`]: Tag lookup with generic fallback
//! - [`LedgerEntryType`]: Closed set of ledger entry shapes
//! - [`TransactionType`]: Closed set of transaction shapes
//! - [`FieldSpec`] / [`FieldKind`]: Field name plus per-kind formatter

pub mod entry;
pub mod field;
pub mod registry;
pub mod transaction;

pub use entry::LedgerEntryType;
pub use field::{scalar_text, FieldKind, FieldSpec};
pub use registry::{EntrySchemaRegistry, Schema};
pub use transaction::{TransactionType, COMMON_FIELDS};
