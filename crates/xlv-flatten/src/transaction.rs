//! Transaction reports: envelope, metadata and affected-node diffs.
//!
//! The report model borrows from the response it was parsed from. Parsing
//! is lenient: anything missing is simply absent from the report, and only
//! a response with neither an envelope nor metadata is rejected.

use std::fmt;

use serde_json::{Map, Value};
use tracing::debug;
use xlv_codec::format_amount;
use xlv_schema::{scalar_text, TransactionType};
use xlv_types::{Section, SectionTree};

use crate::error::{json_type_name, FlattenError, FlattenResult};
use crate::listing::unwrap_result;
use crate::traverse::RecordRenderer;

pub const TRANSACTION_TITLE: &str = "Transaction";
pub const DETAILS_TITLE: &str = "Transaction Details";
pub const METADATA_TITLE: &str = "Metadata";
pub const AFFECTED_NODES_TITLE: &str = "Affected Nodes";
pub const PREVIOUS_FIELDS_TITLE: &str = "PreviousFields";

/// Response keys describing where a transaction landed rather than what it
/// did. Hidden from the details when the envelope is the response itself.
const PROVENANCE_KEYS: &[&str] = &[
    "hash",
    "ledger_hash",
    "ledger_index",
    "close_time_iso",
    "validated",
    "meta",
    "metaData",
    "meta_blob",
    "tx_blob",
];

/// Nesting depth of node fields: Metadata > Affected Nodes > node.
const NODE_DEPTH: usize = 3;

/// The change a transaction made to one ledger entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Created,
    Modified,
    Deleted,
}

impl NodeKind {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Created => "CreatedNode",
            Self::Modified => "ModifiedNode",
            Self::Deleted => "DeletedNode",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "CreatedNode" => Some(Self::Created),
            "ModifiedNode" => Some(Self::Modified),
            "DeletedNode" => Some(Self::Deleted),
            _ => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One entry of `meta.AffectedNodes`.
#[derive(Clone, Debug, PartialEq)]
pub struct AffectedNode<'v> {
    pub kind: NodeKind,
    pub entry_type: &'v str,
    pub ledger_index: Option<&'v str>,
    pub new_fields: Option<&'v Map<String, Value>>,
    pub final_fields: Option<&'v Map<String, Value>>,
    pub previous_fields: Option<&'v Map<String, Value>>,
}

impl<'v> AffectedNode<'v> {
    /// Parse a `{"ModifiedNode": {...}}` wrapper.
    pub fn from_value(raw: &'v Value) -> Option<Self> {
        let (tag, body) = raw.as_object()?.iter().next()?;
        let kind = NodeKind::from_tag(tag)?;
        let body = body.as_object()?;
        let object = |key: &str| body.get(key).and_then(Value::as_object);
        Some(Self {
            kind,
            entry_type: body
                .get("LedgerEntryType")
                .and_then(Value::as_str)
                .unwrap_or("Unknown"),
            ledger_index: body.get("LedgerIndex").and_then(Value::as_str),
            new_fields: object("NewFields"),
            final_fields: object("FinalFields"),
            previous_fields: object("PreviousFields"),
        })
    }

    /// The entry's state after the transaction: `FinalFields` merged over
    /// `NewFields`.
    pub fn current_fields(&self) -> Map<String, Value> {
        let mut merged = self.new_fields.cloned().unwrap_or_default();
        if let Some(fields) = self.final_fields {
            merged.extend(fields.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        merged
    }

    /// `PreviousFields`, if at least one of its values is present.
    pub fn changed_fields(&self) -> Option<&'v Map<String, Value>> {
        self.previous_fields
            .filter(|fields| fields.values().any(|v| !v.is_null()))
    }
}

/// `meta` of a validated transaction.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionMeta<'v> {
    pub result: Option<&'v str>,
    pub index: Option<String>,
    pub delivered_amount: Option<&'v Value>,
    pub affected_nodes: Vec<AffectedNode<'v>>,
}

impl<'v> TransactionMeta<'v> {
    pub fn from_map(meta: &'v Map<String, Value>) -> Self {
        let affected_nodes = meta
            .get("AffectedNodes")
            .and_then(Value::as_array)
            .map(|nodes| nodes.iter().filter_map(AffectedNode::from_value).collect())
            .unwrap_or_default();
        Self {
            result: meta.get("TransactionResult").and_then(Value::as_str),
            index: meta.get("TransactionIndex").and_then(scalar_text),
            delivered_amount: meta
                .get("delivered_amount")
                .or_else(|| meta.get("DeliveredAmount"))
                .filter(|v| !v.is_null()),
            affected_nodes,
        }
    }
}

/// The signed transaction itself.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionEnvelope<'v> {
    pub tx_type: TransactionType,
    pub fields: &'v Map<String, Value>,
    /// Keys of `fields` that belong to the response, not the transaction.
    pub hidden: &'static [&'static str],
}

impl<'v> TransactionEnvelope<'v> {
    fn new(fields: &'v Map<String, Value>, hidden: &'static [&'static str]) -> Self {
        let tx_type = fields
            .get("TransactionType")
            .and_then(Value::as_str)
            .map(TransactionType::from_tag)
            .unwrap_or_else(|| TransactionType::Unknown("Unknown".into()));
        Self {
            tx_type,
            fields,
            hidden,
        }
    }
}

/// Where and when the transaction was recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Provenance {
    pub hash: Option<String>,
    pub ledger_index: Option<String>,
    pub ledger_hash: Option<String>,
    pub close_time_iso: Option<String>,
    pub validated: Option<String>,
}

impl Provenance {
    pub fn from_map(result: &Map<String, Value>) -> Self {
        let text = |key: &str| result.get(key).and_then(scalar_text);
        Self {
            hash: text("hash"),
            ledger_index: text("ledger_index"),
            ledger_hash: text("ledger_hash"),
            close_time_iso: text("close_time_iso"),
            validated: text("validated"),
        }
    }

    fn lines(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("Hash", self.hash.as_deref()),
            ("Ledger Index", self.ledger_index.as_deref()),
            ("Ledger Hash", self.ledger_hash.as_deref()),
            ("Close Time", self.close_time_iso.as_deref()),
            ("Validated", self.validated.as_deref()),
        ]
    }
}

/// A parsed transaction-lookup response.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionReport<'v> {
    pub envelope: Option<TransactionEnvelope<'v>>,
    pub meta: Option<TransactionMeta<'v>>,
    pub provenance: Provenance,
}

impl<'v> TransactionReport<'v> {
    /// Parse a response, unwrapping a JSON-RPC `result` envelope.
    ///
    /// The transaction is read from `tx_json` (or `tx`), or from the
    /// response itself when it carries a `TransactionType`.
    pub fn from_value(response: &'v Value) -> FlattenResult<Self> {
        let root = unwrap_result(response);
        let result = root
            .as_object()
            .ok_or(FlattenError::NotAnObject(json_type_name(root)))?;

        let envelope = ["tx_json", "tx"]
            .iter()
            .find_map(|key| result.get(*key).and_then(Value::as_object))
            .map(|tx| TransactionEnvelope::new(tx, &[]))
            .or_else(|| {
                result
                    .contains_key("TransactionType")
                    .then(|| TransactionEnvelope::new(result, PROVENANCE_KEYS))
            });
        let meta = ["meta", "metaData"]
            .iter()
            .find_map(|key| result.get(*key).and_then(Value::as_object))
            .map(TransactionMeta::from_map);

        if envelope.is_none() && meta.is_none() {
            return Err(FlattenError::MissingTransaction);
        }
        Ok(Self {
            envelope,
            meta,
            provenance: Provenance::from_map(result),
        })
    }

    /// Build the report's section tree.
    pub fn build(&self, renderer: &RecordRenderer<'_>) -> FlattenResult<SectionTree> {
        let mut tree = SectionTree::new();

        let mut provenance = Section::new(TRANSACTION_TITLE);
        for (label, value) in self.provenance.lines() {
            if let Some(value) = value {
                provenance.push(label, value);
            }
        }
        tree.push(provenance);

        if let Some(envelope) = &self.envelope {
            let schema = renderer.registry.transaction(&envelope.tx_type);
            debug!(tx_type = %envelope.tx_type, "transaction details");
            tree.push(renderer.record(DETAILS_TITLE, &schema, envelope.fields, envelope.hidden, 1)?);
        }

        if let Some(meta) = &self.meta {
            tree.push(meta_section(renderer, meta)?);
        }
        Ok(tree)
    }
}

fn meta_section(renderer: &RecordRenderer<'_>, meta: &TransactionMeta<'_>) -> FlattenResult<Section> {
    let mut section = Section::new(METADATA_TITLE);
    if let Some(result) = meta.result {
        section.push("Result", result);
    }
    if let Some(index) = &meta.index {
        section.push("Transaction Index", index.as_str());
    }
    if let Some(text) = meta
        .delivered_amount
        .and_then(|raw| format_amount(raw).or_else(|| scalar_text(raw)))
    {
        section.push("Delivered Amount", text);
    }

    let mut nodes = Section::new(AFFECTED_NODES_TITLE);
    for (i, node) in meta.affected_nodes.iter().enumerate() {
        nodes.push_section(node_section(renderer, node, i + 1)?);
    }
    debug!(nodes = meta.affected_nodes.len(), "affected nodes");
    section.push_section(nodes);
    Ok(section)
}

fn node_section(renderer: &RecordRenderer<'_>, node: &AffectedNode<'_>, n: usize) -> FlattenResult<Section> {
    let mut section = Section::new(format!("{} {} ({})", node.kind, n, node.entry_type));
    if let Some(index) = node.ledger_index {
        section.push("LedgerIndex", index);
    }

    let current = node.current_fields();
    let schema = renderer.registry.lookup(node.entry_type, &current);
    renderer.fields_into(&mut section, &schema, &current, &[], NODE_DEPTH)?;

    if let Some(previous) = node.changed_fields() {
        let schema = renderer.registry.lookup(node.entry_type, previous);
        section.push_section(renderer.record(
            PREVIOUS_FIELDS_TITLE,
            &schema,
            previous,
            &[],
            NODE_DEPTH + 1,
        )?);
    }
    Ok(section)
}
