//! Tag → schema lookup.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::entry::LedgerEntryType;
use crate::field::{FieldKind, FieldSpec};
use crate::transaction::TransactionType;

/// Ordered field layout and display labels for one record shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub tag: String,
    pub label: String,
    pub plural_label: String,
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    /// Build a schema from a registered entry type.
    pub fn for_entry(entry: &LedgerEntryType) -> Option<Self> {
        let (label, plural) = entry.labels()?;
        Some(Self {
            tag: entry.tag().to_string(),
            label: label.to_string(),
            plural_label: plural.to_string(),
            fields: entry.fields()?.to_vec(),
        })
    }

    /// Build a schema for a transaction envelope.
    pub fn for_transaction(tx: &TransactionType) -> Self {
        Self {
            tag: tx.tag().to_string(),
            label: tx.tag().to_string(),
            plural_label: format!("{}s", tx.tag()),
            fields: tx.fields(),
        }
    }

    /// Schema synthesised from a record's own keys, in the record's key
    /// order, with every field formatted generically.
    pub fn fallback(tag: &str, record: &Map<String, Value>) -> Self {
        Self {
            tag: tag.to_string(),
            label: tag.to_string(),
            plural_label: format!("{tag}s"),
            fields: record
                .keys()
                .map(|key| FieldSpec::dynamic(key.as_str(), FieldKind::Generic))
                .collect(),
        }
    }

    /// Singular label for one record, plural otherwise.
    pub fn label_for(&self, count: usize) -> &str {
        if count > 1 {
            &self.plural_label
        } else {
            &self.label
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

/// Registry of entry schemas keyed by tag.
///
/// Lookup never fails: tags without a registered schema get a generic
/// schema built from the record being rendered.
#[derive(Clone, Debug)]
pub struct EntrySchemaRegistry {
    schemas: HashMap<String, Schema>,
}

impl Default for EntrySchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntrySchemaRegistry {
    /// A registry holding every built-in entry schema.
    pub fn new() -> Self {
        let schemas = LedgerEntryType::KNOWN
            .iter()
            .filter_map(Schema::for_entry)
            .map(|schema| (schema.tag.clone(), schema))
            .collect();
        Self { schemas }
    }

    /// Register or replace a schema.
    pub fn register(&mut self, schema: Schema) {
        self.schemas.insert(schema.tag.clone(), schema);
    }

    /// Returns `true` if `tag` has a registered schema.
    pub fn contains(&self, tag: &str) -> bool {
        self.schemas.contains_key(tag)
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Registered schema for `tag`, if any.
    pub fn get(&self, tag: &str) -> Option<&Schema> {
        self.schemas.get(tag)
    }

    /// Schema for `tag`, synthesised from `record` when unregistered.
    pub fn lookup(&self, tag: &str, record: &Map<String, Value>) -> Cow<'_, Schema> {
        match self.schemas.get(tag) {
            Some(schema) => Cow::Borrowed(schema),
            None => {
                debug!(tag, fields = record.len(), "no registered schema; using fallback");
                Cow::Owned(Schema::fallback(tag, record))
            }
        }
    }

    /// Schema for a transaction envelope of the given type.
    pub fn transaction(&self, tx: &TransactionType) -> Schema {
        Schema::for_transaction(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn registered_lookup_borrows() {
        let registry = EntrySchemaRegistry::new();
        let schema = registry.lookup("Escrow", &Map::new());
        assert!(matches!(schema, Cow::Borrowed(_)));
        assert_eq!(schema.label, "Escrow");
        assert_eq!(schema.plural_label, "Escrows");
        assert_eq!(schema.fields[0].name, "Account");
    }

    #[test]
    fn every_known_entry_is_registered() {
        let registry = EntrySchemaRegistry::new();
        assert_eq!(registry.len(), LedgerEntryType::KNOWN.len());
        assert!(registry.contains("NFTokenPage"));
        assert!(registry.contains("Offers"));
    }

    #[test]
    fn fallback_uses_record_keys() {
        let registry = EntrySchemaRegistry::new();
        let rec = record(json!({"Owner": "rA", "DIDDocument": "AB", "Nested": {"x": 1}}));
        let schema = registry.lookup("DID", &rec);
        assert!(matches!(schema, Cow::Owned(_)));
        assert_eq!(schema.label, "DID");
        assert_eq!(schema.plural_label, "DIDs");
        let names: Vec<_> = schema.fields.iter().map(|f| &*f.name).collect();
        assert_eq!(names, vec!["Owner", "DIDDocument", "Nested"]);
        assert!(schema.fields.iter().all(|f| f.kind == FieldKind::Generic));
    }

    #[test]
    fn label_for_count() {
        let registry = EntrySchemaRegistry::new();
        let schema = registry.get("Check").unwrap();
        assert_eq!(schema.label_for(1), "Check");
        assert_eq!(schema.label_for(2), "Checks");
        assert_eq!(schema.label_for(0), "Check");
    }

    #[test]
    fn register_overrides() {
        let mut registry = EntrySchemaRegistry::new();
        registry.register(Schema {
            tag: "Oracle".into(),
            label: "Price Oracle".into(),
            plural_label: "Price Oracles".into(),
            fields: vec![FieldSpec::new("Owner", FieldKind::Text)],
        });
        let schema = registry.lookup("Oracle", &Map::new());
        assert_eq!(schema.label, "Price Oracle");
        assert!(schema.field("Owner").is_some());
    }

    #[test]
    fn transaction_schema() {
        let registry = EntrySchemaRegistry::new();
        let schema = registry.transaction(&TransactionType::Payment);
        assert_eq!(schema.label, "Payment");
        assert_eq!(schema.field("Amount").unwrap().kind, FieldKind::Amount);
        assert_eq!(schema.field("Memos").unwrap().kind, FieldKind::Memos);
    }
}
