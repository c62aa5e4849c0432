use crate::category::{CategoryDef, Column, NamedItem, Title};
use crate::models::Cell;

/// How a loader is consumed: an installable package or a hosted API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Package,
    Api,
}

impl Access {
    pub fn label(self) -> &'static str {
        match self {
            Access::Package => "Package",
            Access::Api => "API",
        }
    }
}

/// A document loader integration.
#[derive(Debug)]
pub struct DocumentLoader {
    pub name: &'static str,
    pub link: &'static str,
    pub description: &'static str,
    pub access: Access,
    pub api_link: &'static str,
}

impl NamedItem for DocumentLoader {
    fn name(&self) -> &str {
        self.name
    }
}

const NAME: Column<DocumentLoader> = Column {
    title: Title::Text("Document Loader"),
    format: |l| Cell::link(l.name, l.link),
};

const DESCRIPTION: Column<DocumentLoader> = Column {
    title: Title::Text("Description"),
    format: |l| Cell::text(l.description),
};

const ACCESS: Column<DocumentLoader> = Column {
    title: Title::Text("Package/API"),
    format: |l| Cell::link(l.access.label(), l.api_link),
};

pub(super) static WEBPAGE_LOADERS: CategoryDef<DocumentLoader> = CategoryDef {
    key: "webpage_loaders",
    link: "/docs/integrations/document_loaders",
    columns: &[NAME, DESCRIPTION, ACCESS],
    items: &[
        DocumentLoader {
            name: "Web",
            link: "/docs/integrations/document_loaders/web_base",
            description: "Uses urllib and BeautifulSoup to load and parse HTML web pages",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.web_base.WebBaseLoader.html",
        },
        DocumentLoader {
            name: "Unstructured",
            link: "/docs/integrations/document_loaders/unstructured_file",
            description: "Uses Unstructured to load and parse web pages",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.unstructured.UnstructuredFileLoader.html",
        },
        DocumentLoader {
            name: "RecursiveURL",
            link: "/docs/integrations/document_loaders/recursive_url",
            description: "Recursively scrapes all child links from a root URL",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.recursive_url_loader.RecursiveUrlLoader.html",
        },
        DocumentLoader {
            name: "Sitemap",
            link: "/docs/integrations/document_loaders/sitemap",
            description: "Scrapes all pages on a given sitemap",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.sitemap.SitemapLoader.html",
        },
        DocumentLoader {
            name: "Firecrawl",
            link: "/docs/integrations/document_loaders/firecrawl",
            description: "API service that can be deployed locally, hosted version has free credits.",
            access: Access::Api,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.firecrawl.FireCrawlLoader.html",
        },
        DocumentLoader {
            name: "Spider",
            link: "/docs/integrations/document_loaders/spider",
            description: "Crawler and scraper that returns LLM-ready data.",
            access: Access::Api,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.spider.SpiderLoader.html",
        },
    ],
};

pub(super) static PDF_LOADERS: CategoryDef<DocumentLoader> = CategoryDef {
    key: "pdf_loaders",
    link: "/docs/integrations/document_loaders",
    columns: &[NAME, ACCESS],
    items: &[
        DocumentLoader {
            name: "PyPDF",
            link: "/docs/integrations/document_loaders/pypdfloader",
            description: "Uses `pypdf` to load and parse PDFs",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.pdf.PyPDFLoader.html",
        },
        DocumentLoader {
            name: "Unstructured",
            link: "/docs/integrations/document_loaders/unstructured_file",
            description: "Uses Unstructured's open source library to load PDFs",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.unstructured.UnstructuredFileLoader.html",
        },
        DocumentLoader {
            name: "Amazon Textract",
            link: "/docs/integrations/document_loaders/amazon_textract",
            description: "Uses AWS API to load PDFs",
            access: Access::Api,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.pdf.AmazonTextractPDFLoader.html",
        },
        DocumentLoader {
            name: "MathPix",
            link: "/docs/integrations/document_loaders/mathpix",
            description: "Uses MathPix to load PDFs",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.pdf.MathpixPDFLoader.html",
        },
        DocumentLoader {
            name: "PDFPlumber",
            link: "/docs/integrations/document_loaders/pdfplumber",
            description: "Load PDF files using PDFPlumber",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.pdf.PDFPlumberLoader.html",
        },
        DocumentLoader {
            name: "PyMuPDF",
            link: "/docs/integrations/document_loaders/pymupdf",
            description: "Load PDF files using PyMuPDF",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.pdf.PyMuPDFLoader.html",
        },
    ],
};

pub(super) static CLOUD_LOADERS: CategoryDef<DocumentLoader> = CategoryDef {
    key: "cloud_loaders",
    link: "/docs/integrations/document_loaders",
    columns: &[NAME, DESCRIPTION, ACCESS],
    items: &[
        DocumentLoader {
            name: "AWS S3 Directory",
            link: "/docs/integrations/document_loaders/aws_s3_directory",
            description: "Load documents from an AWS S3 directory",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.s3_directory.S3DirectoryLoader.html",
        },
        DocumentLoader {
            name: "AWS S3 File",
            link: "/docs/integrations/document_loaders/aws_s3_file",
            description: "Load documents from an AWS S3 file",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.s3_file.S3FileLoader.html",
        },
        DocumentLoader {
            name: "Azure AI Data",
            link: "/docs/integrations/document_loaders/azure_ai_data",
            description: "Load documents from Azure AI services",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.azure_ai_data.AzureAIDataLoader.html",
        },
        DocumentLoader {
            name: "Google Cloud Storage Directory",
            link: "/docs/integrations/document_loaders/google_cloud_storage_directory",
            description: "Load documents from GCS bucket",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/google_community/gcs_directory/langchain_google_community.gcs_directory.GCSDirectoryLoader.html",
        },
        DocumentLoader {
            name: "Dropbox",
            link: "/docs/integrations/document_loaders/dropbox",
            description: "Load documents from Dropbox",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.dropbox.DropboxLoader.html",
        },
    ],
};

pub(super) static SOCIAL_LOADERS: CategoryDef<DocumentLoader> = CategoryDef {
    key: "social_loaders",
    link: "/docs/integrations/document_loaders",
    columns: &[NAME, DESCRIPTION, ACCESS],
    items: &[
        DocumentLoader {
            name: "Twitter",
            link: "/docs/integrations/document_loaders/twitter",
            description: "Load tweets from a list of Twitter users",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.twitter.TwitterTweetLoader.html",
        },
        DocumentLoader {
            name: "Reddit",
            link: "/docs/integrations/document_loaders/reddit",
            description: "Load posts from a list of subreddits or users",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.reddit.RedditPostsLoader.html",
        },
    ],
};

pub(super) static MESSAGING_LOADERS: CategoryDef<DocumentLoader> = CategoryDef {
    key: "messaging_loaders",
    link: "/docs/integrations/document_loaders",
    columns: &[NAME, DESCRIPTION, ACCESS],
    items: &[
        DocumentLoader {
            name: "Telegram",
            link: "/docs/integrations/document_loaders/telegram",
            description: "Load messages from a Telegram chat export",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.telegram.TelegramChatFileLoader.html",
        },
        DocumentLoader {
            name: "WhatsApp",
            link: "/docs/integrations/document_loaders/whatsapp_chat",
            description: "Load messages from a WhatsApp chat export",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.whatsapp_chat.WhatsAppChatLoader.html",
        },
        DocumentLoader {
            name: "Discord",
            link: "/docs/integrations/document_loaders/discord",
            description: "Load messages from a Discord data package",
            access: Access::Package,
            api_link: "https://python.langchain.com/api_reference/community/document_loaders/langchain_community.document_loaders.discord.DiscordChatLoader.html",
        },
    ],
};
