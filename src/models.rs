//! Core data types shared by the catalog, the index renderer, and the
//! output formats.
//!
//! A [`Table`] is the format-neutral result of every render operation. It is
//! turned into HTML, Markdown, or JSON by [`crate::render`].

use serde::{Deserialize, Serialize};

/// One rendered table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Cell {
    /// Plain text.
    Text(String),
    /// A hyperlink with a plain-text label.
    Link { label: String, href: String },
    /// A hyperlink whose label is inline code.
    CodeLink { code: String, href: String },
    /// Capability indicator: positive or negative.
    Flag(bool),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Cell::Link {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Flag cell for an optional capability; absence renders as negative.
    pub fn flag(value: Option<bool>) -> Self {
        Cell::Flag(value.unwrap_or(false))
    }
}

/// A rendered table: ordered header cells and ordered body rows.
///
/// Every row has exactly as many cells as the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// A navigation entry supplied by the docs sidebar.
///
/// Consumed, not owned: the sidebar provider decides what appears here and
/// in which order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarEntry {
    #[serde(default, alias = "docId")]
    pub doc_id: Option<String>,
    pub href: String,
    pub label: String,
}

impl SidebarEntry {
    pub fn new(doc_id: Option<&str>, href: &str, label: &str) -> Self {
        Self {
            doc_id: doc_id.map(str::to_string),
            href: href.to_string(),
            label: label.to_string(),
        }
    }
}
