use super::page_link;
use crate::category::{CategoryDef, Column, NamedItem, Title};
use crate::models::Cell;

/// A vector store integration and the operations it supports.
#[derive(Debug)]
pub struct VectorStore {
    pub name: &'static str,
    pub link: &'static str,
    pub delete_by_id: bool,
    pub filtering: bool,
    pub search_by_vector: bool,
    pub search_with_score: bool,
    pub async_api: bool,
    pub passes_standard_tests: bool,
    pub multi_tenancy: bool,
    pub ids_in_add_documents: bool,
    /// Runs in-process without a server.
    pub local: Option<bool>,
}

impl NamedItem for VectorStore {
    fn name(&self) -> &str {
        self.name
    }
}

pub(super) static VECTORSTORES: CategoryDef<VectorStore> = CategoryDef {
    key: "vectorstores",
    link: "/docs/integrations/vectorstores",
    columns: &[
        Column {
            title: Title::Text("Vectorstore"),
            format: |v| page_link(v.name, v.link),
        },
        Column {
            title: Title::Text("Delete by ID"),
            format: |v| Cell::Flag(v.delete_by_id),
        },
        Column {
            title: Title::Text("Filtering"),
            format: |v| Cell::Flag(v.filtering),
        },
        Column {
            title: Title::Text("Search by Vector"),
            format: |v| Cell::Flag(v.search_by_vector),
        },
        Column {
            title: Title::Text("Search with score"),
            format: |v| Cell::Flag(v.search_with_score),
        },
        Column {
            title: Title::Text("Async"),
            format: |v| Cell::Flag(v.async_api),
        },
        Column {
            title: Title::Text("Passes Standard Tests"),
            format: |v| Cell::Flag(v.passes_standard_tests),
        },
        Column {
            title: Title::Text("Multi Tenancy"),
            format: |v| Cell::Flag(v.multi_tenancy),
        },
        Column {
            title: Title::Text("IDs in add Documents"),
            format: |v| Cell::Flag(v.ids_in_add_documents),
        },
        Column {
            title: Title::Text("Local"),
            format: |v| Cell::flag(v.local),
        },
    ],
    items: &[
        VectorStore {
            name: "AstraDBVectorStore",
            link: "/docs/integrations/vectorstores/astradb",
            delete_by_id: true,
            filtering: true,
            search_by_vector: true,
            search_with_score: true,
            async_api: true,
            passes_standard_tests: false,
            multi_tenancy: false,
            ids_in_add_documents: false,
            local: None,
        },
        VectorStore {
            name: "Chroma",
            link: "/docs/integrations/vectorstores/chroma",
            delete_by_id: true,
            filtering: true,
            search_by_vector: true,
            search_with_score: true,
            async_api: true,
            passes_standard_tests: false,
            multi_tenancy: false,
            ids_in_add_documents: false,
            local: Some(true),
        },
        VectorStore {
            name: "Clickhouse",
            link: "/docs/integrations/vectorstores/clickhouse",
            delete_by_id: true,
            filtering: true,
            search_by_vector: false,
            search_with_score: true,
            async_api: false,
            passes_standard_tests: false,
            multi_tenancy: false,
            ids_in_add_documents: false,
            local: None,
        },
        VectorStore {
            name: "CouchbaseVectorStore",
            link: "/docs/integrations/vectorstores/couchbase",
            delete_by_id: true,
            filtering: true,
            search_by_vector: false,
            search_with_score: true,
            async_api: true,
            passes_standard_tests: false,
            multi_tenancy: false,
            ids_in_add_documents: false,
            local: None,
        },
        VectorStore {
            name: "DatabricksVectorSearch",
            link: "/docs/integrations/vectorstores/databricks_vector_search",
            delete_by_id: true,
            filtering: true,
            search_by_vector: true,
            search_with_score: true,
            async_api: true,
            passes_standard_tests: false,
            multi_tenancy: false,
            ids_in_add_documents: false,
            local: None,
        },
        VectorStore {
            name: "ElasticsearchStore",
            link: "/docs/integrations/vectorstores/elasticsearch",
            delete_by_id: true,
            filtering: true,
            search_by_vector: true,
            search_with_score: true,
            async_api: true,
            passes_standard_tests: false,
            multi_tenancy: false,
            ids_in_add_documents: false,
            local: None,
        },
        VectorStore {
            name: "FAISS",
            link: "/docs/integrations/vectorstores/faiss",
            delete_by_id: true,
            filtering: true,
            search_by_vector: true,
            search_with_score: true,
            async_api: true,
            passes_standard_tests: false,
            multi_tenancy: false,
            ids_in_add_documents: false,
            local: Some(true),
        },
        VectorStore {
            name: "InMemoryVectorStore",
            link: "/docs/integrations/vectorstores/in_memory",
            delete_by_id: true,
            filtering: true,
            search_by_vector: false,
            search_with_score: true,
            async_api: true,
            passes_standard_tests: false,
            multi_tenancy: false,
            ids_in_add_documents: false,
            local: Some(true),
        },
        VectorStore {
            name: "Milvus",
            link: "/docs/integrations/vectorstores/milvus",
            delete_by_id: true,
            filtering: true,
            search_by_vector: false,
            search_with_score: true,
            async_api: true,
            passes_standard_tests: false,
            multi_tenancy: false,
            ids_in_add_documents: false,
            local: None,
        },
        VectorStore {
            name: "MongoDBAtlasVectorSearch",
            link: "/docs/integrations/vectorstores/mongodb_atlas",
            delete_by_id: true,
            filtering: true,
            search_by_vector: false,
            search_with_score: false,
            async_api: false,
            passes_standard_tests: false,
            multi_tenancy: false,
            ids_in_add_documents: false,
            local: None,
        },
        VectorStore {
            name: "PGVector",
            link: "/docs/integrations/vectorstores/pgvector",
            delete_by_id: true,
            filtering: true,
            search_by_vector: true,
            search_with_score: true,
            async_api: true,
            passes_standard_tests: false,
            multi_tenancy: false,
            ids_in_add_documents: false,
            local: None,
        },
        VectorStore {
            name: "PineconeVectorStore",
            link: "/docs/integrations/vectorstores/pinecone",
            delete_by_id: true,
            filtering: true,
            search_by_vector: true,
            search_with_score: false,
            async_api: true,
            passes_standard_tests: false,
            multi_tenancy: false,
            ids_in_add_documents: false,
            local: None,
        },
        VectorStore {
            name: "QdrantVectorStore",
            link: "/docs/integrations/vectorstores/qdrant",
            delete_by_id: true,
            filtering: true,
            search_by_vector: true,
            search_with_score: true,
            async_api: true,
            passes_standard_tests: false,
            multi_tenancy: false,
            ids_in_add_documents: false,
            local: Some(true),
        },
        VectorStore {
            name: "Redis",
            link: "/docs/integrations/vectorstores/redis",
            delete_by_id: true,
            filtering: true,
            search_by_vector: true,
            search_with_score: true,
            async_api: true,
            passes_standard_tests: false,
            multi_tenancy: false,
            ids_in_add_documents: false,
            local: None,
        },
        VectorStore {
            name: "Weaviate",
            link: "/docs/integrations/vectorstores/weaviate",
            delete_by_id: true,
            filtering: true,
            search_by_vector: true,
            search_with_score: true,
            async_api: true,
            passes_standard_tests: false,
            multi_tenancy: true,
            ids_in_add_documents: false,
            local: None,
        },
        VectorStore {
            name: "SQLServer",
            link: "/docs/integrations/vectorstores/sqlserver",
            delete_by_id: true,
            filtering: true,
            search_by_vector: true,
            search_with_score: true,
            async_api: false,
            passes_standard_tests: false,
            multi_tenancy: false,
            ids_in_add_documents: false,
            local: None,
        },
    ],
};
