//! # xlv-flatten
//!
//! Turns raw ledger-API responses into readable reports.
//!
//! Two input shapes are understood: ledger-object listings (every top-level
//! array is a collection of tagged records) and transaction lookups
//! (envelope, metadata and affected-node diffs). Either is built into a
//! [`SectionTree`] and then handed to a [`ReportSink`]: [`TextSink`] folds
//! it into indented lines, [`TreeSink`] returns it as is.
//!
//! [`Flattener`] is the boundary. It never fails: a report that cannot be
//! built comes back as a message starting with `Error`, in the same output
//! channel as a successful one.

pub mod error;
pub mod listing;
pub mod sink;
pub mod transaction;
pub mod traverse;

#[cfg(test)]
mod testdata;

pub use error::{FlattenError, FlattenResult};
pub use listing::{build_listing, group_records, record_tag, RecordGroup, LEDGER_INFO_TITLE};
pub use sink::{text_lines, ReportSink, TextLine, TextSink, TreeSink};
pub use transaction::{
    AffectedNode, NodeKind, Provenance, TransactionEnvelope, TransactionMeta, TransactionReport,
};
pub use traverse::RecordRenderer;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use xlv_schema::EntrySchemaRegistry;
use xlv_types::{DisplayConfig, SectionTree};

/// Which input shape to expect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Decide from the input.
    #[default]
    Auto,
    /// A ledger-object listing.
    Listing,
    /// A transaction lookup.
    Transaction,
}

impl ReportKind {
    /// Transaction if the (unwrapped) response carries `tx_json`, `meta` or
    /// a `TransactionType`; listing otherwise.
    pub fn detect(response: &Value) -> Self {
        let root = listing::unwrap_result(response);
        let is_transaction = ["tx_json", "meta", "TransactionType"]
            .iter()
            .any(|key| root.get(*key).is_some());
        if is_transaction {
            Self::Transaction
        } else {
            Self::Listing
        }
    }

    /// This kind, with `Auto` resolved against `response`.
    pub fn resolve(self, response: &Value) -> Self {
        match self {
            Self::Auto => Self::detect(response),
            other => other,
        }
    }

    /// Name of the operation, for error messages.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Auto => "report",
            Self::Listing => "ledger object listing",
            Self::Transaction => "transaction report",
        }
    }
}

/// Builds reports from responses.
#[derive(Clone, Debug, Default)]
pub struct Flattener {
    registry: EntrySchemaRegistry,
    config: DisplayConfig,
}

impl Flattener {
    /// A flattener using the built-in schemas.
    pub fn new(config: DisplayConfig) -> Self {
        Self::with_registry(EntrySchemaRegistry::new(), config)
    }

    pub fn with_registry(registry: EntrySchemaRegistry, config: DisplayConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn registry(&self) -> &EntrySchemaRegistry {
        &self.registry
    }

    /// Build a report's section tree, surfacing failures.
    pub fn build(&self, response: &Value, kind: ReportKind) -> FlattenResult<SectionTree> {
        self.config.validate()?;
        let renderer = RecordRenderer::new(&self.registry, &self.config);
        match kind.resolve(response) {
            ReportKind::Transaction => TransactionReport::from_value(response)?.build(&renderer),
            ReportKind::Listing | ReportKind::Auto => build_listing(&renderer, response),
        }
    }

    /// Build a report and hand it to `sink`. Failures reach the sink as an
    /// `Error: ...` message.
    pub fn flatten<S: ReportSink>(&self, response: &Value, kind: ReportKind, sink: &mut S) -> S::Output {
        let kind = kind.resolve(response);
        match self.build(response, kind) {
            Ok(tree) => {
                debug!(operation = kind.operation(), sections = tree.sections.len(), "report built");
                sink.finish(tree)
            }
            Err(e) => {
                warn!(operation = kind.operation(), error = %e, "report failed");
                sink.fail(format!("Error: {} failed: {e}", kind.operation()))
            }
        }
    }

    fn text(&self, response: &Value, kind: ReportKind) -> String {
        self.flatten(response, kind, &mut TextSink::new(self.config.indent_width))
    }

    fn sections(&self, response: &Value, kind: ReportKind) -> SectionTree {
        self.flatten(response, kind, &mut TreeSink)
    }

    /// Text report of a ledger-object listing.
    pub fn ledger_objects_text(&self, response: &Value) -> String {
        self.text(response, ReportKind::Listing)
    }

    /// Section tree of a ledger-object listing.
    pub fn ledger_objects_sections(&self, response: &Value) -> SectionTree {
        self.sections(response, ReportKind::Listing)
    }

    /// Text report of a transaction lookup.
    pub fn transaction_text(&self, response: &Value) -> String {
        self.text(response, ReportKind::Transaction)
    }

    /// Section tree of a transaction lookup.
    pub fn transaction_sections(&self, response: &Value) -> SectionTree {
        self.sections(response, ReportKind::Transaction)
    }

    /// Text report of either shape.
    pub fn render_text(&self, response: &Value) -> String {
        self.text(response, ReportKind::Auto)
    }

    /// Section tree of either shape.
    pub fn render_sections(&self, response: &Value) -> SectionTree {
        self.sections(response, ReportKind::Auto)
    }
}
