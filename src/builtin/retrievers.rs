use super::{package_link, page_link};
use crate::category::{CategoryDef, Column, NamedItem, Title};
use crate::models::Cell;

/// A retriever over the user's own indexed documents.
#[derive(Debug)]
pub struct Retriever {
    pub name: &'static str,
    pub link: &'static str,
    pub self_host: bool,
    pub cloud_offering: bool,
    pub package: &'static str,
    pub api_link: &'static str,
}

impl NamedItem for Retriever {
    fn name(&self) -> &str {
        self.name
    }
}

/// A retriever over an external corpus the user does not index.
#[derive(Debug)]
pub struct ExternalRetriever {
    pub name: &'static str,
    pub link: &'static str,
    /// What the retriever searches, in a few words.
    pub source: &'static str,
    pub package: &'static str,
    pub api_link: &'static str,
}

impl NamedItem for ExternalRetriever {
    fn name(&self) -> &str {
        self.name
    }
}

pub(super) static DOCUMENT_RETRIEVERS: CategoryDef<Retriever> = CategoryDef {
    key: "document_retrievers",
    link: "/docs/integrations/retrievers",
    columns: &[
        Column {
            title: Title::Text("Retriever"),
            format: |r| page_link(r.name, r.link),
        },
        Column {
            title: Title::Text("Self-host"),
            format: |r| Cell::Flag(r.self_host),
        },
        Column {
            title: Title::Text("Cloud offering"),
            format: |r| Cell::Flag(r.cloud_offering),
        },
        Column {
            title: Title::Text("Package"),
            format: |r| package_link(r.package, r.api_link),
        },
    ],
    items: &[
        Retriever {
            name: "AmazonKnowledgeBasesRetriever",
            link: "/docs/integrations/retrievers/bedrock",
            self_host: false,
            cloud_offering: true,
            package: "langchain_aws",
            api_link: "https://python.langchain.com/api_reference/aws/retrievers/langchain_aws.retrievers.bedrock.AmazonKnowledgeBasesRetriever.html",
        },
        Retriever {
            name: "AzureAISearchRetriever",
            link: "/docs/integrations/retrievers/azure_ai_search",
            self_host: false,
            cloud_offering: true,
            package: "langchain_community",
            api_link: "https://python.langchain.com/api_reference/community/retrievers/langchain_community.retrievers.azure_ai_search.AzureAISearchRetriever.html",
        },
        Retriever {
            name: "ElasticsearchRetriever",
            link: "/docs/integrations/retrievers/elasticsearch_retriever",
            self_host: true,
            cloud_offering: true,
            package: "langchain_elasticsearch",
            api_link: "https://python.langchain.com/api_reference/elasticsearch/retrievers/langchain_elasticsearch.retrievers.ElasticsearchRetriever.html",
        },
        Retriever {
            name: "MilvusCollectionHybridSearchRetriever",
            link: "/docs/integrations/retrievers/milvus_hybrid_search",
            self_host: true,
            cloud_offering: false,
            package: "langchain_milvus",
            api_link: "https://python.langchain.com/api_reference/milvus/retrievers/langchain_milvus.retrievers.milvus_hybrid_search.MilvusCollectionHybridSearchRetriever.html",
        },
        Retriever {
            name: "VertexAISearchRetriever",
            link: "/docs/integrations/retrievers/google_vertex_ai_search",
            self_host: false,
            cloud_offering: true,
            package: "langchain_google_community",
            api_link: "https://python.langchain.com/api_reference/google_community/vertex_ai_search/langchain_google_community.vertex_ai_search.VertexAISearchRetriever.html",
        },
    ],
};

pub(super) static EXTERNAL_RETRIEVERS: CategoryDef<ExternalRetriever> = CategoryDef {
    key: "external_retrievers",
    link: "/docs/integrations/retrievers",
    columns: &[
        Column {
            title: Title::Text("Retriever"),
            format: |r| page_link(r.name, r.link),
        },
        Column {
            title: Title::Text("Source"),
            format: |r| Cell::text(r.source),
        },
        Column {
            title: Title::Text("Package"),
            format: |r| package_link(r.package, r.api_link),
        },
    ],
    items: &[
        ExternalRetriever {
            name: "ArxivRetriever",
            link: "/docs/integrations/retrievers/arxiv",
            source: "Scholarly articles on arxiv.org",
            package: "langchain_community",
            api_link: "https://python.langchain.com/api_reference/community/retrievers/langchain_community.retrievers.arxiv.ArxivRetriever.html",
        },
        ExternalRetriever {
            name: "TavilySearchAPIRetriever",
            link: "/docs/integrations/retrievers/tavily",
            source: "Internet search",
            package: "langchain_community",
            api_link: "https://python.langchain.com/api_reference/community/retrievers/langchain_community.retrievers.tavily_search_api.TavilySearchAPIRetriever.html",
        },
        ExternalRetriever {
            name: "WikipediaRetriever",
            link: "/docs/integrations/retrievers/wikipedia",
            source: "Wikipedia articles",
            package: "langchain_community",
            api_link: "https://python.langchain.com/api_reference/community/retrievers/langchain_community.retrievers.wikipedia.WikipediaRetriever.html",
        },
    ],
};
