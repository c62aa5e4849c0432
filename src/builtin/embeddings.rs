use super::{package_link, page_link};
use crate::category::{CategoryDef, Column, NamedItem, Title};

/// A text embedding model integration.
#[derive(Debug)]
pub struct EmbeddingModel {
    pub name: &'static str,
    pub link: &'static str,
    pub package: &'static str,
    pub api_link: &'static str,
}

impl NamedItem for EmbeddingModel {
    fn name(&self) -> &str {
        self.name
    }
}

pub(super) static TEXT_EMBEDDING: CategoryDef<EmbeddingModel> = CategoryDef {
    key: "text_embedding",
    link: "/docs/integrations/text_embedding",
    columns: &[
        Column {
            title: Title::Text("Provider"),
            format: |m| page_link(m.name, m.link),
        },
        Column {
            title: Title::Text("Package"),
            format: |m| package_link(m.package, m.api_link),
        },
    ],
    items: &[
        EmbeddingModel {
            name: "AzureOpenAI",
            link: "/docs/integrations/text_embedding/azureopenai",
            package: "langchain-openai",
            api_link: "https://python.langchain.com/api_reference/openai/embeddings/langchain_openai.embeddings.azure.AzureOpenAIEmbeddings.html",
        },
        EmbeddingModel {
            name: "Ollama",
            link: "/docs/integrations/text_embedding/ollama",
            package: "langchain-ollama",
            api_link: "https://python.langchain.com/api_reference/ollama/embeddings/langchain_ollama.embeddings.OllamaEmbeddings.html",
        },
        EmbeddingModel {
            name: "AI21",
            link: "/docs/integrations/text_embedding/ai21",
            package: "langchain-ai21",
            api_link: "https://python.langchain.com/api_reference/ai21/embeddings/langchain_ai21.embeddings.AI21Embeddings.html",
        },
        EmbeddingModel {
            name: "Fake",
            link: "/docs/integrations/text_embedding/fake",
            package: "langchain-core",
            api_link: "https://python.langchain.com/api_reference/core/embeddings/langchain_core.embeddings.fake.FakeEmbeddings.html",
        },
        EmbeddingModel {
            name: "Bedrock",
            link: "/docs/integrations/text_embedding/bedrock",
            package: "langchain-aws",
            api_link: "https://python.langchain.com/api_reference/aws/embeddings/langchain_aws.embeddings.bedrock.BedrockEmbeddings.html",
        },
        EmbeddingModel {
            name: "NVIDIA",
            link: "/docs/integrations/text_embedding/nvidia_ai_endpoints",
            package: "langchain-nvidia",
            api_link: "https://python.langchain.com/api_reference/nvidia_ai_endpoints/embeddings/langchain_nvidia_ai_endpoints.embeddings.NVIDIAEmbeddings.html",
        },
        EmbeddingModel {
            name: "Together",
            link: "/docs/integrations/text_embedding/together",
            package: "langchain-together",
            api_link: "https://python.langchain.com/api_reference/together/embeddings/langchain_together.embeddings.TogetherEmbeddings.html",
        },
        EmbeddingModel {
            name: "MistralAI",
            link: "/docs/integrations/text_embedding/mistralai",
            package: "langchain-mistralai",
            api_link: "https://python.langchain.com/api_reference/mistralai/embeddings/langchain_mistralai.embeddings.MistralAIEmbeddings.html",
        },
        EmbeddingModel {
            name: "OpenAI",
            link: "/docs/integrations/text_embedding/openai",
            package: "langchain-openai",
            api_link: "https://python.langchain.com/api_reference/openai/embeddings/langchain_openai.embeddings.base.OpenAIEmbeddings.html",
        },
        EmbeddingModel {
            name: "Cohere",
            link: "/docs/integrations/text_embedding/cohere",
            package: "langchain-cohere",
            api_link: "https://python.langchain.com/api_reference/cohere/embeddings/langchain_cohere.embeddings.CohereEmbeddings.html",
        },
        EmbeddingModel {
            name: "Google",
            link: "/docs/integrations/text_embedding/google_generative_ai",
            package: "langchain-google-genai",
            api_link: "https://python.langchain.com/api_reference/google_genai/embeddings/langchain_google_genai.embeddings.GoogleGenerativeAIEmbeddings.html",
        },
        EmbeddingModel {
            name: "Databricks",
            link: "/docs/integrations/text_embedding/databricks",
            package: "databricks-langchain",
            api_link: "https://python.langchain.com/api_reference/databricks/embeddings/databricks_langchain.embeddings.DatabricksEmbeddings.html",
        },
        EmbeddingModel {
            name: "IBM",
            link: "/docs/integrations/text_embedding/ibm_watsonx",
            package: "langchain-ibm",
            api_link: "https://python.langchain.com/api_reference/ibm/embeddings/langchain_ibm.embeddings.WatsonxEmbeddings.html",
        },
        EmbeddingModel {
            name: "VoyageAI",
            link: "/docs/integrations/text_embedding/voyageai",
            package: "langchain-voyageai",
            api_link: "https://python.langchain.com/api_reference/voyageai/embeddings/langchain_voyageai.embeddings.VoyageAIEmbeddings.html",
        },
    ],
};
