use super::{package_link, page_link};
use crate::category::{CategoryDef, Column, NamedItem, Title};

/// A text-completion model integration.
#[derive(Debug)]
pub struct Llm {
    pub name: &'static str,
    pub link: &'static str,
    pub package: &'static str,
    pub api_link: &'static str,
}

impl NamedItem for Llm {
    fn name(&self) -> &str {
        self.name
    }
}

pub(super) static LLMS: CategoryDef<Llm> = CategoryDef {
    key: "llms",
    link: "/docs/integrations/llms",
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
        Llm {
            name: "AI21LLM",
            link: "/docs/integrations/llms/ai21",
            package: "langchain-ai21",
            api_link: "https://python.langchain.com/api_reference/ai21/llms/langchain_ai21.llms.AI21LLM.html",
        },
        Llm {
            name: "AnthropicLLM",
            link: "/docs/integrations/llms/anthropic",
            package: "langchain-anthropic",
            api_link: "https://python.langchain.com/api_reference/anthropic/llms/langchain_anthropic.llms.AnthropicLLM.html",
        },
        Llm {
            name: "AzureOpenAI",
            link: "/docs/integrations/llms/azure_openai",
            package: "langchain-openai",
            api_link: "https://python.langchain.com/api_reference/openai/llms/langchain_openai.llms.azure.AzureOpenAI.html",
        },
        Llm {
            name: "BedrockLLM",
            link: "/docs/integrations/llms/bedrock",
            package: "langchain-aws",
            api_link: "https://python.langchain.com/api_reference/aws/llms/langchain_aws.llms.bedrock.BedrockLLM.html",
        },
        Llm {
            name: "CohereLLM",
            link: "/docs/integrations/llms/cohere",
            package: "langchain-cohere",
            api_link: "https://python.langchain.com/api_reference/cohere/llms/langchain_cohere.llms.Cohere.html",
        },
        Llm {
            name: "FireworksLLM",
            link: "/docs/integrations/llms/fireworks",
            package: "langchain-fireworks",
            api_link: "https://python.langchain.com/api_reference/fireworks/llms/langchain_fireworks.llms.Fireworks.html",
        },
        Llm {
            name: "OllamaLLM",
            link: "/docs/integrations/llms/ollama",
            package: "langchain-ollama",
            api_link: "https://python.langchain.com/api_reference/ollama/llms/langchain_ollama.llms.OllamaLLM.html",
        },
        Llm {
            name: "OpenAILLM",
            link: "/docs/integrations/llms/openai",
            package: "langchain-openai",
            api_link: "https://python.langchain.com/api_reference/openai/llms/langchain_openai.llms.base.OpenAI.html",
        },
        Llm {
            name: "TogetherLLM",
            link: "/docs/integrations/llms/together",
            package: "langchain-together",
            api_link: "https://python.langchain.com/api_reference/together/llms/langchain_together.llms.Together.html",
        },
        Llm {
            name: "VertexAILLM",
            link: "/docs/integrations/llms/google_vertexai",
            package: "langchain-google-vertexai",
            api_link: "https://python.langchain.com/api_reference/google_vertexai/llms/langchain_google_vertexai.llms.VertexAI.html",
        },
        Llm {
            name: "NVIDIA",
            link: "/docs/integrations/llms/nvidia_ai_endpoints",
            package: "langchain-nvidia",
            api_link: "https://python.langchain.com/api_reference/nvidia_ai_endpoints/llm/langchain_nvidia_ai_endpoints.llm.NVIDIA.html",
        },
    ],
};
