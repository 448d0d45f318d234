//! Ledger-object listings (`account_objects`, `account_nfts`, ...).
//!
//! Every top-level array is a collection of records. Records are grouped
//! by tag within their collection, in order of first appearance, and each
//! group becomes one section labelled singular or plural by its size.
//! Top-level scalars close the report in a "Ledger Info" section.

use serde_json::{Map, Value};
use tracing::debug;
use xlv_schema::scalar_text;
use xlv_types::{Section, SectionTree};

use crate::error::{json_type_name, FlattenError, FlattenResult};
use crate::traverse::RecordRenderer;

/// Title of the trailing section holding top-level scalars.
pub const LEDGER_INFO_TITLE: &str = "Ledger Info";

/// Top-level scalars with fixed labels, in display order.
const KNOWN_SCALARS: &[(&str, &str)] = &[
    ("account", "Account"),
    ("ledger_hash", "Ledger Hash"),
    ("ledger_index", "Ledger Index"),
    ("ledger_current_index", "Ledger Current Index"),
    ("validated", "Validated"),
];

/// Records sharing a tag within one collection.
#[derive(Debug)]
pub struct RecordGroup<'v> {
    pub tag: String,
    pub records: Vec<&'v Map<String, Value>>,
}

/// Tag for a record: its explicit `LedgerEntryType`, else a default for
/// the collection it came from or for its shape.
pub fn record_tag(collection: &str, record: &Map<String, Value>) -> String {
    if let Some(tag) = record.get("LedgerEntryType").and_then(Value::as_str) {
        return tag.to_string();
    }
    let default = match collection {
        "account_nfts" | "nfts" => "NFT",
        "lines" => "Lines",
        "channels" => "Channels",
        "offers" => "Offers",
        _ if record.contains_key("taker_pays") && record.contains_key("taker_gets") => "Offers",
        _ => "Unknown",
    };
    default.to_string()
}

/// Group a collection's records by tag, preserving first-appearance order.
///
/// Non-object elements are skipped.
pub fn group_records<'v>(collection: &str, items: &'v [Value]) -> Vec<RecordGroup<'v>> {
    let mut groups: Vec<RecordGroup<'v>> = Vec::new();
    for item in items {
        let Some(record) = item.as_object() else {
            debug!(collection, found = json_type_name(item), "skipping non-object element");
            continue;
        };
        let tag = record_tag(collection, record);
        match groups.iter_mut().find(|g| g.tag == tag) {
            Some(group) => group.records.push(record),
            None => groups.push(RecordGroup {
                tag,
                records: vec![record],
            }),
        }
    }
    groups
}

/// Build the section tree for a listing response.
pub fn build_listing(renderer: &RecordRenderer<'_>, response: &Value) -> FlattenResult<SectionTree> {
    let root = unwrap_result(response);
    let map = root
        .as_object()
        .ok_or(FlattenError::NotAnObject(json_type_name(root)))?;

    let mut tree = SectionTree::new();
    for (collection, value) in map {
        let Value::Array(items) = value else { continue };
        let groups = group_records(collection, items);
        debug!(collection = %collection, records = items.len(), groups = groups.len(), "collection");
        for group in groups {
            tree.push(group_section(renderer, &group)?);
        }
    }
    tree.push(ledger_info(map));
    Ok(tree)
}

fn group_section(renderer: &RecordRenderer<'_>, group: &RecordGroup<'_>) -> FlattenResult<Section> {
    let registry = renderer.registry;
    let Some(first) = group.records.first() else {
        return Ok(Section::default());
    };
    let head = registry.lookup(&group.tag, first);
    let mut section = Section::new(head.label_for(group.records.len()));
    for (i, record) in group.records.iter().enumerate() {
        let schema = registry.lookup(&group.tag, record);
        let title = format!("{} {}", head.label, i + 1);
        section.push_section(renderer.record(title, &schema, record, &[], 1)?);
    }
    Ok(section)
}

fn ledger_info(map: &Map<String, Value>) -> Section {
    let mut section = Section::new(LEDGER_INFO_TITLE);
    for (key, label) in KNOWN_SCALARS {
        if let Some(text) = map.get(*key).and_then(scalar_text) {
            section.push(*label, text);
        }
    }
    for (key, value) in map {
        if KNOWN_SCALARS.iter().any(|(known, _)| *known == key.as_str()) {
            continue;
        }
        if let Some(text) = scalar_text(value) {
            section.push(key.as_str(), text);
        }
    }
    section
}

/// The `result` object of a JSON-RPC envelope, or the value itself.
pub(crate) fn unwrap_result(response: &Value) -> &Value {
    match response.get("result") {
        Some(inner @ Value::Object(_)) => inner,
        _ => response,
    }
}
