use super::{package_link, page_link};
use crate::category::{CategoryDef, Column, NamedItem, Title};
use crate::models::Cell;

/// A chat model integration and its capability flags.
#[derive(Debug)]
pub struct ChatModel {
    pub name: &'static str,
    pub link: &'static str,
    pub package: &'static str,
    pub api_link: &'static str,
    pub tool_calling: bool,
    pub structured_output: bool,
    pub json_mode: bool,
    pub local: bool,
    pub multimodal: Option<bool>,
}

impl NamedItem for ChatModel {
    fn name(&self) -> &str {
        self.name
    }
}

pub(super) static CHAT: CategoryDef<ChatModel> = CategoryDef {
    key: "chat",
    link: "/docs/integrations/chat",
    columns: &[
        Column {
            title: Title::Text("Provider"),
            format: |m| page_link(m.name, m.link),
        },
        Column {
            title: Title::Link {
                label: "Tool calling",
                href: "/docs/how_to/tool_calling",
            },
            format: |m| Cell::Flag(m.tool_calling),
        },
        Column {
            title: Title::Link {
                label: "Structured output",
                href: "/docs/how_to/structured_output/",
            },
            format: |m| Cell::Flag(m.structured_output),
        },
        Column {
            title: Title::Text("JSON mode"),
            format: |m| Cell::Flag(m.json_mode),
        },
        Column {
            title: Title::Text("Local"),
            format: |m| Cell::Flag(m.local),
        },
        Column {
            title: Title::Link {
                label: "Multimodal",
                href: "/docs/how_to/multimodal_inputs/",
            },
            format: |m| Cell::flag(m.multimodal),
        },
        Column {
            title: Title::Text("Package"),
            format: |m| package_link(m.package, m.api_link),
        },
    ],
    items: &[
        ChatModel {
            name: "ChatAnthropic",
            link: "/docs/integrations/chat/anthropic/",
            package: "langchain-anthropic",
            api_link: "https://python.langchain.com/api_reference/anthropic/chat_models/langchain_anthropic.chat_models.ChatAnthropic.html",
            tool_calling: true,
            structured_output: true,
            json_mode: false,
            local: false,
            multimodal: Some(true),
        },
        ChatModel {
            name: "ChatMistralAI",
            link: "/docs/integrations/chat/mistralai/",
            package: "langchain-mistralai",
            api_link: "https://python.langchain.com/api_reference/mistralai/chat_models/langchain_mistralai.chat_models.ChatMistralAI.html",
            tool_calling: true,
            structured_output: true,
            json_mode: false,
            local: false,
            multimodal: None,
        },
        ChatModel {
            name: "ChatFireworks",
            link: "/docs/integrations/chat/fireworks/",
            package: "langchain-fireworks",
            api_link: "https://python.langchain.com/api_reference/fireworks/chat_models/langchain_fireworks.chat_models.ChatFireworks.html",
            tool_calling: true,
            structured_output: true,
            json_mode: true,
            local: false,
            multimodal: None,
        },
        ChatModel {
            name: "AzureChatOpenAI",
            link: "/docs/integrations/chat/azure_chat_openai/",
            package: "langchain-openai",
            api_link: "https://python.langchain.com/api_reference/openai/chat_models/langchain_openai.chat_models.azure.AzureChatOpenAI.html",
            tool_calling: true,
            structured_output: true,
            json_mode: true,
            local: false,
            multimodal: Some(true),
        },
        ChatModel {
            name: "ChatOpenAI",
            link: "/docs/integrations/chat/openai/",
            package: "langchain-openai",
            api_link: "https://python.langchain.com/api_reference/openai/chat_models/langchain_openai.chat_models.base.ChatOpenAI.html",
            tool_calling: true,
            structured_output: true,
            json_mode: true,
            local: false,
            multimodal: Some(true),
        },
        ChatModel {
            name: "ChatTogether",
            link: "/docs/integrations/chat/together/",
            package: "langchain-together",
            api_link: "https://python.langchain.com/api_reference/together/chat_models/langchain_together.chat_models.ChatTogether.html",
            tool_calling: true,
            structured_output: true,
            json_mode: true,
            local: false,
            multimodal: None,
        },
        ChatModel {
            name: "ChatVertexAI",
            link: "/docs/integrations/chat/google_vertex_ai_palm/",
            package: "langchain-google-vertexai",
            api_link: "https://python.langchain.com/api_reference/google_vertexai/chat_models/langchain_google_vertexai.chat_models.ChatVertexAI.html",
            tool_calling: true,
            structured_output: true,
            json_mode: false,
            local: false,
            multimodal: Some(true),
        },
        ChatModel {
            name: "ChatGoogleGenerativeAI",
            link: "/docs/integrations/chat/google_generative_ai/",
            package: "langchain-google-genai",
            api_link: "https://python.langchain.com/api_reference/google_genai/chat_models/langchain_google_genai.chat_models.ChatGoogleGenerativeAI.html",
            tool_calling: true,
            structured_output: true,
            json_mode: false,
            local: false,
            multimodal: Some(true),
        },
        ChatModel {
            name: "ChatGroq",
            link: "/docs/integrations/chat/groq/",
            package: "langchain-groq",
            api_link: "https://python.langchain.com/api_reference/groq/chat_models/langchain_groq.chat_models.ChatGroq.html",
            tool_calling: true,
            structured_output: true,
            json_mode: true,
            local: false,
            multimodal: None,
        },
        ChatModel {
            name: "ChatCohere",
            link: "/docs/integrations/chat/cohere/",
            package: "langchain-cohere",
            api_link: "https://python.langchain.com/api_reference/cohere/chat_models/langchain_cohere.chat_models.ChatCohere.html",
            tool_calling: true,
            structured_output: true,
            json_mode: false,
            local: false,
            multimodal: None,
        },
        ChatModel {
            name: "ChatBedrock",
            link: "/docs/integrations/chat/bedrock/",
            package: "langchain-aws",
            api_link: "https://python.langchain.com/api_reference/aws/chat_models/langchain_aws.chat_models.bedrock.ChatBedrock.html",
            tool_calling: true,
            structured_output: true,
            json_mode: false,
            local: false,
            multimodal: None,
        },
        ChatModel {
            name: "ChatHuggingFace",
            link: "/docs/integrations/chat/huggingface/",
            package: "langchain-huggingface",
            api_link: "https://python.langchain.com/api_reference/huggingface/chat_models/langchain_huggingface.chat_models.huggingface.ChatHuggingFace.html",
            tool_calling: true,
            structured_output: true,
            json_mode: false,
            local: true,
            multimodal: None,
        },
        ChatModel {
            name: "ChatNVIDIA",
            link: "/docs/integrations/chat/nvidia_ai_endpoints/",
            package: "langchain-nvidia-ai-endpoints",
            api_link: "https://python.langchain.com/api_reference/nvidia_ai_endpoints/chat_models/langchain_nvidia_ai_endpoints.chat_models.ChatNVIDIA.html",
            tool_calling: true,
            structured_output: true,
            json_mode: true,
            local: true,
            multimodal: Some(false),
        },
        ChatModel {
            name: "ChatOllama",
            link: "/docs/integrations/chat/ollama/",
            package: "langchain-ollama",
            api_link: "https://python.langchain.com/api_reference/ollama/chat_models/langchain_ollama.chat_models.ChatOllama.html",
            tool_calling: true,
            structured_output: true,
            json_mode: true,
            local: true,
            multimodal: None,
        },
        ChatModel {
            name: "ChatLlamaCpp",
            link: "/docs/integrations/chat/llamacpp",
            package: "langchain-community",
            api_link: "https://python.langchain.com/api_reference/community/chat_models/langchain_community.chat_models.llamacpp.ChatLlamaCpp.html",
            tool_calling: true,
            structured_output: true,
            json_mode: false,
            local: true,
            multimodal: None,
        },
        ChatModel {
            name: "ChatAI21",
            link: "/docs/integrations/chat/ai21",
            package: "langchain-ai21",
            api_link: "https://python.langchain.com/api_reference/ai21/chat_models/langchain_ai21.chat_models.ChatAI21.html",
            tool_calling: true,
            structured_output: true,
            json_mode: false,
            local: false,
            multimodal: None,
        },
        ChatModel {
            name: "ChatUpstage",
            link: "/docs/integrations/chat/upstage",
            package: "langchain-upstage",
            api_link: "https://python.langchain.com/api_reference/upstage/chat_models/langchain_upstage.chat_models.ChatUpstage.html",
            tool_calling: true,
            structured_output: true,
            json_mode: false,
            local: false,
            multimodal: None,
        },
        ChatModel {
            name: "ChatDatabricks",
            link: "/docs/integrations/chat/databricks",
            package: "databricks-langchain",
            api_link: "https://python.langchain.com/api_reference/databricks/chat_models/databricks_langchain.chat_models.ChatDatabricks.html",
            tool_calling: true,
            structured_output: true,
            json_mode: false,
            local: false,
            multimodal: None,
        },
        ChatModel {
            name: "ChatWatsonx",
            link: "/docs/integrations/chat/ibm_watsonx",
            package: "langchain-ibm",
            api_link: "https://python.langchain.com/api_reference/ibm/chat_models/langchain_ibm.chat_models.ChatWatsonx.html",
            tool_calling: true,
            structured_output: true,
            json_mode: true,
            local: false,
            multimodal: None,
        },
    ],
};
