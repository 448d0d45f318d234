//! Record traversal shared by listings and transaction reports.
//!
//! A record is rendered in its schema's declared field order, then any
//! fields the schema does not list. Scalars become content lines; objects
//! and arrays become sub-sections. Absent (null) values produce nothing,
//! and a sub-section with nothing in it is dropped.

use serde_json::{Map, Value};
use xlv_codec::{hex_text_or_raw, is_packed_currency, Amount};
use xlv_schema::{scalar_text, EntrySchemaRegistry, FieldKind, Schema};
use xlv_types::{DisplayConfig, Section};

use crate::error::{FlattenError, FlattenResult};

/// Keys never shown as record fields: the tag is already the group label.
pub const HIDDEN_KEYS: &[&str] = &["LedgerEntryType"];

/// Renders records into sections.
pub struct RecordRenderer<'a> {
    pub registry: &'a EntrySchemaRegistry,
    pub config: &'a DisplayConfig,
}

impl<'a> RecordRenderer<'a> {
    pub fn new(registry: &'a EntrySchemaRegistry, config: &'a DisplayConfig) -> Self {
        Self { registry, config }
    }

    /// Render `record` as a new section titled `title`.
    pub fn record(
        &self,
        title: impl Into<String>,
        schema: &Schema,
        record: &Map<String, Value>,
        hidden: &[&str],
        depth: usize,
    ) -> FlattenResult<Section> {
        let mut section = Section::new(title);
        self.fields_into(&mut section, schema, record, hidden, depth)?;
        Ok(section)
    }

    /// Render `record`'s fields into an existing section.
    pub fn fields_into(
        &self,
        section: &mut Section,
        schema: &Schema,
        record: &Map<String, Value>,
        hidden: &[&str],
        depth: usize,
    ) -> FlattenResult<()> {
        self.check_depth(depth)?;
        let is_hidden = |key: &str| HIDDEN_KEYS.contains(&key) || hidden.contains(&key);

        for spec in &schema.fields {
            let name: &str = &spec.name;
            if is_hidden(name) {
                continue;
            }
            if let Some(raw) = record.get(name) {
                self.field(section, name, spec.kind, raw, depth)?;
            }
        }
        for (key, raw) in record {
            if is_hidden(key.as_str()) || schema.field(key).is_some() {
                continue;
            }
            self.field(section, key, FieldKind::infer(key), raw, depth)?;
        }
        Ok(())
    }

    /// Render one field into `section`.
    pub fn field(
        &self,
        section: &mut Section,
        name: &str,
        kind: FieldKind,
        raw: &Value,
        depth: usize,
    ) -> FlattenResult<()> {
        match (kind, raw) {
            (_, Value::Null) => {}
            (FieldKind::Generic, _) => {
                if let Some(text) = kind.format(name, raw, self.config) {
                    section.push(name, text);
                }
            }
            (FieldKind::Memos, Value::Array(items)) => {
                section.push_section(self.memos(name, items));
            }
            (_, Value::Object(_)) if Amount::is_amount_record(raw) => {
                if let Some(text) = FieldKind::Amount.format(name, raw, self.config) {
                    section.push(name, text);
                }
            }
            (_, Value::Object(map)) => {
                section.push_section(self.nested(name, map, depth + 1)?);
            }
            (_, Value::Array(items)) => {
                section.push_section(self.list(name, items, depth + 1)?);
            }
            _ => {
                if let Some(text) = kind.format(name, raw, self.config) {
                    section.push(name, text);
                }
            }
        }
        Ok(())
    }

    /// Render an object's own key/value pairs under a sub-header.
    pub fn nested(
        &self,
        title: &str,
        map: &Map<String, Value>,
        depth: usize,
    ) -> FlattenResult<Section> {
        self.check_depth(depth)?;
        let mut section = Section::new(title);
        for (key, raw) in map {
            self.field(&mut section, key, nested_kind(key, raw), raw, depth)?;
        }
        Ok(section)
    }

    /// Render an array as numbered sub-sections (records) or lines (scalars).
    ///
    /// Elements wrapped as `{"SignerEntry": {...}}` are titled by the
    /// wrapper key; other records by the field name.
    pub fn list(&self, name: &str, items: &[Value], depth: usize) -> FlattenResult<Section> {
        self.check_depth(depth)?;
        let mut section = Section::new(name);
        for (i, item) in items.iter().filter(|item| !item.is_null()).enumerate() {
            let n = i + 1;
            match item {
                Value::Object(map) => {
                    let (label, inner) = unwrap_wrapper(map).unwrap_or((name, map));
                    let title = format!("{label} {n}");
                    section.push_section(self.nested(&title, inner, depth + 1)?);
                }
                Value::Array(inner) => {
                    let title = format!("{name} {n}");
                    section.push_section(self.list(&title, inner, depth + 1)?);
                }
                scalar => {
                    if let Some(text) = scalar_text(scalar) {
                        section.push(n.to_string(), text);
                    }
                }
            }
        }
        Ok(section)
    }

    /// Render transaction memos: each memo's type and data, hex-decoded.
    pub fn memos(&self, name: &str, items: &[Value]) -> Section {
        let mut section = Section::new(name);
        for (i, item) in items.iter().enumerate() {
            let Some(memo) = item
                .get("Memo")
                .and_then(Value::as_object)
                .or_else(|| item.as_object())
            else {
                continue;
            };
            let mut entry = Section::new(format!("Memo {}", i + 1));
            for (field, label) in [("MemoType", "Type"), ("MemoData", "Data")] {
                if let Some(raw) = memo.get(field).and_then(Value::as_str) {
                    entry.push(label, hex_text_or_raw(field, raw));
                }
            }
            section.push_section(entry);
        }
        section
    }

    fn check_depth(&self, depth: usize) -> FlattenResult<()> {
        if depth > self.config.max_depth {
            return Err(FlattenError::DepthExceeded(self.config.max_depth));
        }
        Ok(())
    }
}

/// Kind for a sub-value of a nested object: inferred from its name, with
/// bare 40-hex strings treated as packed currency codes.
fn nested_kind(key: &str, raw: &Value) -> FieldKind {
    match (FieldKind::infer(key), raw) {
        (FieldKind::Text, Value::String(s)) if is_packed_currency(s) => FieldKind::Currency,
        (kind, _) => kind,
    }
}

/// `{"Wrapper": {...}}` → `("Wrapper", inner)`.
fn unwrap_wrapper(map: &Map<String, Value>) -> Option<(&str, &Map<String, Value>)> {
    if map.len() != 1 {
        return None;
    }
    let (key, value) = map.iter().next()?;
    value.as_object().map(|inner| (key.as_str(), inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn render(tag: &str, value: Value) -> Section {
        let registry = EntrySchemaRegistry::new();
        let config = DisplayConfig::utc();
        let renderer = RecordRenderer::new(&registry, &config);
        let record = obj(value);
        let schema = registry.lookup(tag, &record);
        renderer.record("Record", &schema, &record, &[], 1).unwrap()
    }

    #[test]
    fn schema_order_wins_over_key_order() {
        let section = render(
            "Escrow",
            json!({"index": "ABC", "Amount": "1000000", "Account": "rA", "Destination": "rB"}),
        );
        let keys: Vec<_> = section.content.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["Account", "Destination", "Amount", "index"]);
    }

    #[test]
    fn null_and_absent_fields_are_omitted() {
        let section = render(
            "Escrow",
            json!({"Account": "rA", "Condition": null, "FinishAfter": null}),
        );
        assert_eq!(section.get("Account"), Some("rA"));
        assert!(section.get("Condition").is_none());
        assert!(section.get("FinishAfter").is_none());
        assert!(section.get("CancelAfter").is_none());
    }

    #[test]
    fn tag_is_not_repeated_as_field() {
        let section = render("Check", json!({"LedgerEntryType": "Check", "Account": "rA"}));
        assert!(section.get("LedgerEntryType").is_none());
    }

    #[test]
    fn extra_fields_follow_schema_fields() {
        let section = render(
            "Check",
            json!({"Account": "rA", "Zeta": "z", "Alpha": "a"}),
        );
        let keys: Vec<_> = section.content.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["Account", "Zeta", "Alpha"]);
    }

    #[test]
    fn nested_object_becomes_sub_section() {
        let section = render(
            "AMM",
            json!({
                "Account": "rAMM",
                "Asset": {"currency": "XRP"},
                "Asset2": {"currency": "534F4C4F00000000000000000000000000000000", "issuer": "rI"},
                "LPTokenBalance": {
                    "currency": "03930D02208264E2E40EC1B0C09E4DB96EE197B1",
                    "issuer": "rAMM",
                    "value": "100"
                }
            }),
        );
        assert_eq!(section.child("Asset").unwrap().get("currency"), Some("XRP"));
        let asset2 = section.child("Asset2").unwrap();
        assert_eq!(asset2.get("currency"), Some("SOLO"));
        assert_eq!(asset2.get("issuer"), Some("rI"));
        assert_eq!(
            section.get("LPTokenBalance"),
            Some("100 LP-03930D02208264E2E40EC1B0C09E4DB96EE197B1 (Issuer: rAMM)")
        );
    }

    #[test]
    fn nested_object_with_only_nulls_is_dropped() {
        let section = render("AMM", json!({"Account": "rA", "AuctionSlot": {"Account": null}}));
        assert!(section.child("AuctionSlot").is_none());
    }

    #[test]
    fn wrapped_list_elements_are_numbered() {
        let section = render(
            "SignerList",
            json!({
                "SignerQuorum": 2,
                "SignerEntries": [
                    {"SignerEntry": {"Account": "rOne", "SignerWeight": 1}},
                    {"SignerEntry": {"Account": "rTwo", "SignerWeight": 1}}
                ]
            }),
        );
        let entries = section.child("SignerEntries").unwrap();
        assert_eq!(entries.sub_items.len(), 2);
        assert_eq!(entries.sub_items[0].title, "SignerEntry 1");
        assert_eq!(entries.sub_items[1].get("Account"), Some("rTwo"));
    }

    #[test]
    fn null_list_elements_do_not_take_a_number() {
        let section = render(
            "SignerList",
            json!({
                "SignerEntries": [
                    null,
                    {"SignerEntry": {"Account": "rOne", "SignerWeight": 1}}
                ]
            }),
        );
        let entries = section.child("SignerEntries").unwrap();
        assert_eq!(entries.sub_items.len(), 1);
        assert_eq!(entries.sub_items[0].title, "SignerEntry 1");

        let section = render("DirectoryNode", json!({"Indexes": [null, "AA"]}));
        assert_eq!(section.child("Indexes").unwrap().get("1"), Some("AA"));
    }

    #[test]
    fn nftoken_page_lists_tokens_with_decoded_uri() {
        let section = render(
            "NFTokenPage",
            json!({"NFTokens": [{"NFToken": {"NFTokenID": "000B", "URI": "68747470733A2F2F78"}}]}),
        );
        let token = &section.child("NFTokens").unwrap().sub_items[0];
        assert_eq!(token.title, "NFToken 1");
        assert_eq!(token.get("URI"), Some("https://x"));
    }

    #[test]
    fn scalar_list_is_numbered_lines() {
        let section = render("DirectoryNode", json!({"Indexes": ["AA", "BB"]}));
        let indexes = section.child("Indexes").unwrap();
        assert_eq!(indexes.get("1"), Some("AA"));
        assert_eq!(indexes.get("2"), Some("BB"));
    }

    #[test]
    fn unknown_tag_stringifies_structures() {
        let section = render("Oracle", json!({"Owner": "rA", "PriceDataSeries": [{"a": 1}]}));
        assert_eq!(section.get("Owner"), Some("rA"));
        assert_eq!(section.get("PriceDataSeries"), Some(r#"[{"a":1}]"#));
        assert!(section.sub_items.is_empty());
    }

    #[test]
    fn memos_are_decoded_as_type_and_data() {
        let registry = EntrySchemaRegistry::new();
        let config = DisplayConfig::utc();
        let renderer = RecordRenderer::new(&registry, &config);
        let memos = json!([
            {"Memo": {"MemoType": "74657874", "MemoData": "68656C6C6F", "MemoFormat": "00"}},
            {"Memo": {"MemoData": "FFFE"}}
        ]);
        let section = renderer.memos("Memos", memos.as_array().unwrap());
        assert_eq!(section.sub_items[0].title, "Memo 1");
        assert_eq!(section.sub_items[0].get("Type"), Some("text"));
        assert_eq!(section.sub_items[0].get("Data"), Some("hello"));
        assert_eq!(section.sub_items[0].content.len(), 2);
        assert_eq!(section.sub_items[1].get("Type"), None);
        assert_eq!(section.sub_items[1].get("Data"), Some("FFFE"));
    }

    #[test]
    fn depth_limit_is_enforced() {
        let registry = EntrySchemaRegistry::new();
        let config = DisplayConfig {
            max_depth: 2,
            ..DisplayConfig::utc()
        };
        let renderer = RecordRenderer::new(&registry, &config);
        let record = obj(json!({"a": {"b": {"c": {"d": 1}}}}));
        let schema = registry.lookup("Check", &record);
        let err = renderer.record("R", &schema, &record, &[], 1).unwrap_err();
        assert_eq!(err, FlattenError::DepthExceeded(2));
    }
}
