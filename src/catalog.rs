//! The feature catalog: lookup and rendering over the category registry.
//!
//! [`FeatureCatalog`] is a thin, read-only view over a slice of
//! [`Category`] definitions. All operations are pure: no caching, no
//! counters, the same input always yields the same [`Table`].

use std::collections::HashSet;

use crate::builtin::CATEGORIES;
use crate::category::Category;
use crate::error::CatalogError;
use crate::index::{self, AsyncDescriptionResolver, DescriptionResolver};
use crate::models::{SidebarEntry, Table};

/// Read-only registry of category tables.
#[derive(Debug, Clone, Copy)]
pub struct FeatureCatalog {
    categories: &'static [Category],
}

/// Summary row for listing a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub key: &'static str,
    pub link: &'static str,
    pub columns: usize,
    pub items: usize,
}

impl FeatureCatalog {
    pub const fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    /// A view over the process-wide built-in registry.
    pub fn builtin() -> FeatureCatalog {
        FeatureCatalog::new(CATEGORIES)
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.categories.iter().map(|c| c.key())
    }

    pub fn summaries(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .map(|c| CategorySummary {
                key: c.key(),
                link: c.link(),
                columns: c.column_count(),
                items: c.item_count(),
            })
            .collect()
    }

    pub fn category(&self, key: &str) -> Result<&Category, CatalogError> {
        self.categories
            .iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| CatalogError::UnknownCategory(key.to_string()))
    }

    /// Full table for a category: one row per item, in item order.
    pub fn render_category(&self, key: &str) -> Result<Table, CatalogError> {
        Ok(self.category(key)?.table())
    }

    /// One-row table for the item named `name` in category `key`.
    pub fn render_item(&self, key: &str, name: &str) -> Result<Table, CatalogError> {
        self.category(key)?.item_table(name)
    }

    pub fn render_sidebar_index<R>(&self, entries: &[SidebarEntry], resolver: &R) -> Table
    where
        R: DescriptionResolver + ?Sized,
    {
        index::render_sidebar_index(entries, resolver)
    }

    pub async fn render_sidebar_index_async(
        &self,
        entries: &[SidebarEntry],
        resolver: &dyn AsyncDescriptionResolver,
    ) -> Table {
        index::render_sidebar_index_async(entries, resolver).await
    }

    /// Check that category keys are unique and that item names are unique
    /// within each category.
    pub fn lint(&self) -> Result<(), CatalogError> {
        let mut keys = HashSet::new();
        for category in self.categories {
            if !keys.insert(category.key()) {
                return Err(CatalogError::DuplicateCategory(category.key().to_string()));
            }
            if let Some(name) = category.duplicate_name() {
                return Err(CatalogError::DuplicateItem {
                    category: category.key().to_string(),
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::Llm;
    use crate::category::{CategoryDef, Column, Title};
    use crate::models::Cell;

    fn catalog() -> FeatureCatalog {
        FeatureCatalog::builtin()
    }

    #[test]
    fn test_builtin_passes_lint() {
        catalog().lint().unwrap();
    }

    #[test]
    fn test_every_category_shape() {
        for category in catalog().categories() {
            let table = catalog().render_category(category.key()).unwrap();
            assert_eq!(table.row_count(), category.item_count(), "{}", category.key());
            assert_eq!(table.column_count(), category.column_count());
            for row in &table.rows {
                assert_eq!(row.len(), category.column_count(), "{}", category.key());
            }
        }
    }

    #[test]
    fn test_every_item_renders_its_own_row() {
        for category in catalog().categories() {
            let full = category.table();
            for (i, name) in category.item_names().into_iter().enumerate() {
                let single = catalog().render_item(category.key(), name).unwrap();
                assert_eq!(single.row_count(), 1);
                assert_eq!(single.header, full.header);
                assert_eq!(single.rows[0], full.rows[i], "{}/{}", category.key(), name);
            }
        }
    }

    #[test]
    fn test_unknown_category() {
        let err = catalog().render_category("nonexistent").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(ref k) if k == "nonexistent"));
        assert!(matches!(
            catalog().render_item("nonexistent", "ChatOpenAI"),
            Err(CatalogError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_item_not_found_in_every_category() {
        for key in catalog().keys() {
            match catalog().render_item(key, "nonexistent") {
                Err(CatalogError::ItemNotFound { category, name }) => {
                    assert_eq!(category, key);
                    assert_eq!(name, "nonexistent");
                }
                other => panic!("{}: expected ItemNotFound, got {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_chat_item_cells() {
        let table = catalog().render_item("chat", "ChatOllama").unwrap();
        let row = &table.rows[0];
        assert_eq!(row[0], Cell::link("ChatOllama", "/docs/integrations/chat/ollama/"));
        assert_eq!(row[4], Cell::Flag(true));
        // multimodal is not declared for ChatOllama
        assert_eq!(row[5], Cell::Flag(false));
    }

    #[test]
    fn test_render_is_idempotent() {
        let a = catalog().render_category("vectorstores").unwrap();
        let b = catalog().render_category("vectorstores").unwrap();
        assert_eq!(a, b);
    }

    static FIRST: CategoryDef<Llm> = CategoryDef {
        key: "dup",
        link: "/docs/dup",
        columns: &[Column {
            title: Title::Text("Provider"),
            format: |m| Cell::text(m.name),
        }],
        items: &[],
    };

    static DUPLICATED: &[Category] = &[Category::Llm(&FIRST), Category::Llm(&FIRST)];

    #[test]
    fn test_lint_reports_duplicate_key() {
        let catalog = FeatureCatalog::new(DUPLICATED);
        assert!(matches!(
            catalog.lint(),
            Err(CatalogError::DuplicateCategory(ref k)) if k == "dup"
        ));
    }

    #[test]
    fn test_empty_category_renders_header_only() {
        let catalog = FeatureCatalog::new(DUPLICATED);
        let table = catalog.render_category("dup").unwrap();
        assert_eq!(table.header, vec![Cell::text("Provider")]);
        assert!(table.rows.is_empty());
    }
}
