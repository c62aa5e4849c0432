//! Typed category definitions.
//!
//! A category is a table definition for one integration type: an ordered
//! list of [`Column`]s and an ordered list of items. Each category carries
//! its own item struct, so a formatter can only read fields that exist on
//! that category's items. The heterogeneous registry is the [`Category`]
//! tagged union, one variant per item schema.
//!
//! ```text
//! Category::Chat ──▶ CategoryDef<ChatModel> ──▶ columns: [Column<ChatModel>]
//!                                          └─▶ items:   [ChatModel]
//! ```

use std::collections::HashSet;

use crate::builtin::{
    ChatModel, DocumentLoader, EmbeddingModel, ExternalRetriever, Llm, Retriever, VectorStore,
};
use crate::error::CatalogError;
use crate::models::{Cell, Table};

/// A column header: plain text or a link to a how-to page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Title {
    Text(&'static str),
    Link {
        label: &'static str,
        href: &'static str,
    },
}

impl Title {
    pub fn to_cell(self) -> Cell {
        match self {
            Title::Text(label) => Cell::text(label),
            Title::Link { label, href } => Cell::link(label, href),
        }
    }
}

/// One table column: a title and a pure formatter from item to cell.
pub struct Column<I: 'static> {
    pub title: Title,
    pub format: fn(&I) -> Cell,
}

/// Items are looked up by their `name` field.
pub trait NamedItem {
    fn name(&self) -> &str;
}

/// Static definition of one category table.
pub struct CategoryDef<I: 'static> {
    /// Registry key, e.g. `"chat"`.
    pub key: &'static str,
    /// Base path of the category's docs section.
    pub link: &'static str,
    pub columns: &'static [Column<I>],
    pub items: &'static [I],
}

impl<I: NamedItem + 'static> CategoryDef<I> {
    pub fn header(&self) -> Vec<Cell> {
        self.columns.iter().map(|c| c.title.to_cell()).collect()
    }

    /// Apply every formatter to `item`, in column order.
    pub fn row(&self, item: &I) -> Vec<Cell> {
        self.columns.iter().map(|c| (c.format)(item)).collect()
    }

    pub fn table(&self) -> Table {
        Table {
            header: self.header(),
            rows: self.items.iter().map(|item| self.row(item)).collect(),
        }
    }

    pub fn find(&self, name: &str) -> Option<&I> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Single-row table for the item named `name`.
    pub fn item_table(&self, name: &str) -> Result<Table, CatalogError> {
        let item = self.find(name).ok_or_else(|| CatalogError::ItemNotFound {
            category: self.key.to_string(),
            name: name.to_string(),
        })?;
        Ok(Table {
            header: self.header(),
            rows: vec![self.row(item)],
        })
    }

    /// First item name that appears more than once, if any.
    pub fn duplicate_name(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(NamedItem::name)
            .find(|name| !seen.insert(*name))
    }

    pub fn item_names(&self) -> Vec<&str> {
        self.items.iter().map(NamedItem::name).collect()
    }
}

/// A registry entry: one variant per item schema.
#[derive(Clone, Copy)]
pub enum Category {
    Chat(&'static CategoryDef<ChatModel>),
    Llm(&'static CategoryDef<Llm>),
    Embedding(&'static CategoryDef<EmbeddingModel>),
    VectorStore(&'static CategoryDef<VectorStore>),
    Retriever(&'static CategoryDef<Retriever>),
    ExternalRetriever(&'static CategoryDef<ExternalRetriever>),
    Loader(&'static CategoryDef<DocumentLoader>),
}

macro_rules! with_def {
    ($category:expr, $def:ident => $body:expr) => {
        match $category {
            Category::Chat($def) => $body,
            Category::Llm($def) => $body,
            Category::Embedding($def) => $body,
            Category::VectorStore($def) => $body,
            Category::Retriever($def) => $body,
            Category::ExternalRetriever($def) => $body,
            Category::Loader($def) => $body,
        }
    };
}

impl Category {
    pub fn key(&self) -> &'static str {
        with_def!(*self, def => def.key)
    }

    pub fn link(&self) -> &'static str {
        with_def!(*self, def => def.link)
    }

    pub fn column_count(&self) -> usize {
        with_def!(*self, def => def.columns.len())
    }

    pub fn item_count(&self) -> usize {
        with_def!(*self, def => def.items.len())
    }

    pub fn table(&self) -> Table {
        with_def!(*self, def => def.table())
    }

    pub fn item_table(&self, name: &str) -> Result<Table, CatalogError> {
        with_def!(*self, def => def.item_table(name))
    }

    pub fn item_names(&self) -> Vec<&'static str> {
        with_def!(*self, def => def.item_names())
    }

    pub fn duplicate_name(&self) -> Option<&'static str> {
        with_def!(*self, def => def.duplicate_name())
    }
}

impl std::fmt::Debug for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Category")
            .field("key", &self.key())
            .field("columns", &self.column_count())
            .field("items", &self.item_count())
            .finish()
    }
}
