//! The built-in category registry.
//!
//! Every table the documentation site embeds is defined here as static
//! data: item structs, their column layouts, and the items themselves.
//! The registry is read-only for the lifetime of the process.
//!
//! | Key | Item type |
//! |-----|-----------|
//! | `chat` | [`ChatModel`] |
//! | `llms` | [`Llm`] |
//! | `text_embedding` | [`EmbeddingModel`] |
//! | `vectorstores` | [`VectorStore`] |
//! | `document_retrievers` | [`Retriever`] |
//! | `external_retrievers` | [`ExternalRetriever`] |
//! | `webpage_loaders`, `pdf_loaders`, `cloud_loaders`, `social_loaders`, `messaging_loaders` | [`DocumentLoader`] |

mod chat;
mod embeddings;
mod llms;
mod loaders;
mod retrievers;
mod vectorstores;

pub use chat::ChatModel;
pub use embeddings::EmbeddingModel;
pub use llms::Llm;
pub use loaders::{Access, DocumentLoader};
pub use retrievers::{ExternalRetriever, Retriever};
pub use vectorstores::VectorStore;

use crate::category::Category;
use crate::models::Cell;

/// All built-in categories, in the order they are listed and exported.
pub static CATEGORIES: &[Category] = &[
    Category::Chat(&chat::CHAT),
    Category::Llm(&llms::LLMS),
    Category::Embedding(&embeddings::TEXT_EMBEDDING),
    Category::VectorStore(&vectorstores::VECTORSTORES),
    Category::Retriever(&retrievers::DOCUMENT_RETRIEVERS),
    Category::ExternalRetriever(&retrievers::EXTERNAL_RETRIEVERS),
    Category::Loader(&loaders::WEBPAGE_LOADERS),
    Category::Loader(&loaders::PDF_LOADERS),
    Category::Loader(&loaders::CLOUD_LOADERS),
    Category::Loader(&loaders::SOCIAL_LOADERS),
    Category::Loader(&loaders::MESSAGING_LOADERS),
];

/// Link to the item's integration page, labelled with its name.
pub(crate) fn page_link(name: &str, link: &str) -> Cell {
    Cell::link(name, link)
}

/// Package name as inline code, linked to its API reference.
pub(crate) fn package_link(package: &str, api_link: &str) -> Cell {
    Cell::CodeLink {
        code: package.to_string(),
        href: api_link.to_string(),
    }
}
