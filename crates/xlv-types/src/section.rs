//! Structured report output.
//!
//! A [`SectionTree`] is built fresh for each report and is immutable once
//! handed to a renderer. Every section holds flat key/value content followed
//! by nested sub-sections.

use serde::{Deserialize, Serialize};

/// A single `key: value` line inside a section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub key: String,
    pub value: String,
}

impl ContentItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A titled group of content and nested sections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub content: Vec<ContentItem>,
    pub sub_items: Vec<Section>,
}

impl Section {
    /// Create an empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
            sub_items: Vec::new(),
        }
    }

    /// Append a content line.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.content.push(ContentItem::new(key, value));
    }

    /// Append a nested section, dropping it if it carries nothing.
    pub fn push_section(&mut self, section: Section) {
        if !section.is_empty() {
            self.sub_items.push(section);
        }
    }

    /// Returns `true` if neither this section nor any descendant has content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.sub_items.iter().all(Section::is_empty)
    }

    /// Look up a content value by key (this section only).
    pub fn get(&self, key: &str) -> Option<&str> {
        self.content
            .iter()
            .find(|item| item.key == key)
            .map(|item| item.value.as_str())
    }

    /// Find a direct sub-section by title.
    pub fn child(&self, title: &str) -> Option<&Section> {
        self.sub_items.iter().find(|s| s.title == title)
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<(&'a str, &'a str)>) {
        for item in &self.content {
            out.push((item.key.as_str(), item.value.as_str()));
        }
        for sub in &self.sub_items {
            sub.collect_leaves(out);
        }
    }
}

/// An ordered list of top-level sections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionTree {
    pub sections: Vec<Section>,
}

impl SectionTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Title and key used for the single section of an error tree.
    pub const ERROR_TITLE: &'static str = "Error";

    /// A tree carrying only an error message.
    pub fn error(message: impl Into<String>) -> Self {
        let mut section = Section::new(Self::ERROR_TITLE);
        section.push(Self::ERROR_TITLE, message);
        Self {
            sections: vec![section],
        }
    }

    /// Append a top-level section, dropping it if it carries nothing.
    pub fn push(&mut self, section: Section) {
        if !section.is_empty() {
            self.sections.push(section);
        }
    }

    /// Returns `true` if this tree is an error report.
    pub fn is_error(&self) -> bool {
        matches!(
            self.sections.as_slice(),
            [only] if only.title == Self::ERROR_TITLE
                && only.content.len() == 1
                && only.get(Self::ERROR_TITLE).is_some()
                && only.sub_items.is_empty()
        )
    }

    /// Returns `true` if the tree has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Find a top-level section by title.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// All `(key, value)` pairs, depth-first: a section's content before its
    /// sub-sections.
    pub fn leaves(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        for section in &self.sections {
            section.collect_leaves(&mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SectionTree {
        let mut inner = Section::new("PreviousFields");
        inner.push("Balance", "1.000000 XRP");
        let mut outer = Section::new("ModifiedNode 1 (AccountRoot)");
        outer.push("Account", "rAlice");
        outer.push_section(inner);
        let mut tree = SectionTree::new();
        tree.push(outer);
        tree
    }

    #[test]
    fn leaves_are_depth_first() {
        let tree = sample();
        assert_eq!(
            tree.leaves(),
            vec![("Account", "rAlice"), ("Balance", "1.000000 XRP")]
        );
    }

    #[test]
    fn empty_sections_are_dropped() {
        let mut outer = Section::new("outer");
        outer.push_section(Section::new("empty"));
        assert!(outer.sub_items.is_empty());

        let mut tree = SectionTree::new();
        tree.push(outer);
        assert!(tree.is_empty());
    }

    #[test]
    fn nested_empty_sections_count_as_empty() {
        let mut outer = Section::new("outer");
        outer.sub_items.push(Section::new("hollow"));
        assert!(outer.is_empty());
    }

    #[test]
    fn error_tree() {
        let tree = SectionTree::error("Error: boom");
        assert!(tree.is_error());
        assert_eq!(tree.leaves(), vec![("Error", "Error: boom")]);
        assert!(!sample().is_error());

        let mut record = Section::new("Error 1");
        record.push("Code", "x");
        let mut group = Section::new(SectionTree::ERROR_TITLE);
        group.push_section(record);
        let mut listing = SectionTree::new();
        listing.push(group);
        assert!(!listing.is_error());
    }

    #[test]
    fn lookup_helpers() {
        let tree = sample();
        let node = tree.section("ModifiedNode 1 (AccountRoot)").unwrap();
        assert_eq!(node.get("Account"), Some("rAlice"));
        assert!(node.child("PreviousFields").is_some());
    }

    #[test]
    fn serializes_sub_items_in_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        let first = &json["sections"][0];
        assert!(first.get("subItems").is_some());
        assert_eq!(first["content"][0]["key"], "Account");
    }
}
