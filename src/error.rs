//! Error taxonomy for catalog lookups and rendering.
//!
//! Lookup failures are authoring mistakes in the documentation (a typo in a
//! category key, a reference to an item that was never added). They are not
//! recoverable at the call site and are expected to abort the page that
//! asked for the table. A missing description is not an error and never
//! surfaces here.

use thiserror::Error;

/// Errors produced by [`FeatureCatalog`](crate::catalog::FeatureCatalog)
/// operations and the table renderers.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The category key is not present in the registry.
    #[error("unknown category: '{0}'")]
    UnknownCategory(String),

    /// No item in the category has the requested `name`.
    #[error("item '{name}' not found in category '{category}'")]
    ItemNotFound { category: String, name: String },

    /// Two categories in the registry share a key.
    #[error("duplicate category key: '{0}'")]
    DuplicateCategory(String),

    /// Two items in one category share a name, so lookup by name is ambiguous.
    #[error("duplicate item '{name}' in category '{category}'")]
    DuplicateItem { category: String, name: String },

    /// JSON serialization of a table failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
