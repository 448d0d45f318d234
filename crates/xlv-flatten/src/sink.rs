//! Output sinks: where a finished report goes.
//!
//! Both output modes come from the same [`SectionTree`], so a text report
//! and a tree report of the same input always carry the same leaves in the
//! same order.

use std::fmt;

use xlv_types::SectionTree;

/// Receives a completed report or the message of a failed one.
pub trait ReportSink {
    type Output;

    /// Consume a finished report.
    fn finish(&mut self, tree: SectionTree) -> Self::Output;

    /// Consume the message of a report that could not be built. The
    /// message always starts with `Error`.
    fn fail(&mut self, message: String) -> Self::Output;
}

/// One line of a text report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextLine<'a> {
    Title { indent: usize, title: &'a str },
    Item { indent: usize, key: &'a str, value: &'a str },
}

impl fmt::Display for TextLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Title { indent, title } => write!(f, "{:indent$}{title}", ""),
            Self::Item { indent, key, value } => write!(f, "{:indent$}{key}: {value}", ""),
        }
    }
}

/// Lay a tree out as indented lines: a section's title, then its content
/// one level deeper, then its sub-sections.
pub fn text_lines(tree: &SectionTree, indent_width: usize) -> Vec<TextLine<'_>> {
    let mut lines = Vec::new();
    let mut stack: Vec<_> = tree.sections.iter().rev().map(|s| (0usize, s)).collect();
    while let Some((depth, section)) = stack.pop() {
        lines.push(TextLine::Title {
            indent: depth.saturating_mul(indent_width),
            title: &section.title,
        });
        for item in &section.content {
            lines.push(TextLine::Item {
                indent: (depth + 1).saturating_mul(indent_width),
                key: &item.key,
                value: &item.value,
            });
        }
        stack.extend(section.sub_items.iter().rev().map(|s| (depth + 1, s)));
    }
    lines
}

/// Renders reports as a single newline-joined string.
#[derive(Clone, Debug)]
pub struct TextSink {
    pub indent_width: usize,
}

impl TextSink {
    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }
}

impl ReportSink for TextSink {
    type Output = String;

    fn finish(&mut self, tree: SectionTree) -> String {
        text_lines(&tree, self.indent_width)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn fail(&mut self, message: String) -> String {
        message
    }
}

/// Hands the tree back unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct TreeSink;

impl ReportSink for TreeSink {
    type Output = SectionTree;

    fn finish(&mut self, tree: SectionTree) -> SectionTree {
        tree
    }

    fn fail(&mut self, message: String) -> SectionTree {
        SectionTree::error(message)
    }
}
