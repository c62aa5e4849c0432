//! # Feature Catalog
//!
//! Integration feature tables and sidebar index tables for documentation
//! sites.
//!
//! The catalog holds one typed table definition per integration category
//! (chat models, vector stores, document loaders, ...). Pages embed either a
//! whole category, a single item's row, or an index of every page in a docs
//! section with its description.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   builtin    │──▶│   catalog    │──▶│    render    │──▶ HTML / MD / JSON
//! │ static defs  │   │ lookup+rows  │   │              │
//! └──────────────┘   └──────────────┘   └──────────────┘
//!                           ▲
//! ┌──────────────┐   ┌──────┴───────┐
//! │     docs     │──▶│    index     │
//! │ sidebar+desc │   │ filter+trunc │
//! └──────────────┘   └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! fcat categories                         # list categories
//! fcat render chat                        # full chat model table
//! fcat render vectorstores --item FAISS   # one row
//! fcat index integrations/chat            # index of a docs section
//! fcat export --check                     # verify exported tables
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Category lookup and the render operations |
//! | [`category`] | Typed category and column definitions |
//! | [`builtin`] | The static category registry |
//! | [`index`] | Sidebar index tables and description truncation |
//! | [`docs`] | Sidebar entries and descriptions from a docs tree |
//! | [`render`] | HTML, Markdown and JSON output |
//! | [`export`] | Write or verify exported tables |
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`error`] | Error taxonomy |

pub mod builtin;
pub mod catalog;
pub mod category;
pub mod config;
pub mod docs;
pub mod error;
pub mod export;
pub mod index;
pub mod models;
pub mod render;

pub use catalog::FeatureCatalog;
pub use error::CatalogError;
pub use models::{Cell, SidebarEntry, Table};
