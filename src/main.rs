//! # Feature Catalog CLI (`fcat`)
//!
//! Renders integration feature tables and docs-section index tables.
//!
//! ## Usage
//!
//! ```bash
//! fcat --config ./config/fcat.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `fcat categories` | List categories with column and item counts |
//! | `fcat render <category>` | Render a category table, or one item with `--item` |
//! | `fcat index <section>` | Render the index table of a docs section |
//! | `fcat export` | Write every category table, or verify them with `--check` |
//! | `fcat check` | Lint the category registry |
//!
//! ## Examples
//!
//! ```bash
//! # Chat model table as Markdown
//! fcat render chat --format markdown
//!
//! # A single vector store row
//! fcat render vectorstores --item Chroma
//!
//! # Index of a docs section, read from the docs tree in the config
//! fcat index integrations/chat --config ./config/fcat.toml
//!
//! # Index from a sidebar dump and a description map
//! fcat index --sidebar sidebar.json --descriptions descriptions.json
//!
//! # Fail CI when committed tables are out of date
//! fcat export --check
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use feature_catalog::config::{self, Config};
use feature_catalog::docs::{self, DocRegistry, FsDescriptionResolver};
use feature_catalog::export;
use feature_catalog::models::{SidebarEntry, Table};
use feature_catalog::render::Format;
use feature_catalog::FeatureCatalog;

/// Feature Catalog CLI: integration feature tables and index tables for
/// documentation sites.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. Commands that do not read the docs tree run with defaults when the
/// file does not exist.
#[derive(Parser)]
#[command(
    name = "fcat",
    about = "Feature Catalog: integration feature tables for documentation sites",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/fcat.toml")]
    config: PathBuf,

    /// Log at debug level (overridden by `FCAT_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List categories in registry order.
    Categories,

    /// Render a category table, or a single item's row.
    Render {
        /// Category key, e.g. `chat` or `vectorstores`.
        category: String,

        /// Render only the item with this name.
        #[arg(long)]
        item: Option<String>,

        /// Output format. Defaults to `[output].format`.
        #[arg(long, value_enum)]
        format: Option<Format>,
    },

    /// Render the index table of a docs section.
    ///
    /// Without `--sidebar`, pages are scanned from `<docs.root>/<section>` and
    /// each page supplies its own description. With `--sidebar`, entries come
    /// from a JSON array; descriptions come from the `--descriptions` JSON
    /// object keyed by doc id, or else from the pages under `docs.root`.
    Index {
        /// Docs section relative to the docs root, e.g. `integrations/chat`.
        /// Not used with `--sidebar`.
        #[arg(required_unless_present = "sidebar")]
        section: Option<String>,

        /// JSON file with an array of `{docId, href, label}` entries.
        #[arg(long)]
        sidebar: Option<PathBuf>,

        /// JSON file mapping doc id to description.
        #[arg(long, requires = "sidebar")]
        descriptions: Option<PathBuf>,

        /// Output format. Defaults to `[output].format`.
        #[arg(long, value_enum)]
        format: Option<Format>,
    },

    /// Write every category table to the output directory.
    Export {
        /// Output directory. Defaults to `[output].dir`.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format. Defaults to `[output].format`.
        #[arg(long, value_enum)]
        format: Option<Format>,

        /// Verify existing files instead of writing; exit non-zero if stale.
        #[arg(long)]
        check: bool,
    },

    /// Check the registry for duplicate category keys and item names.
    Check,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("FCAT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("feature_catalog={0},fcat={0}", default_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the config file, or fall back to defaults when it does not exist.
fn load_or_minimal(path: &Path) -> Result<Config> {
    if path.exists() {
        config::load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "config file not found; using defaults");
        Ok(Config::minimal())
    }
}

fn print_table(table: &Table, format: Format) -> Result<()> {
    let rendered = format.render(table)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

async fn run_index(
    cfg: &Config,
    catalog: &FeatureCatalog,
    section: Option<&str>,
    sidebar: Option<PathBuf>,
    descriptions: Option<PathBuf>,
) -> Result<Table> {
    if let Some(sidebar) = sidebar {
        let entries: Vec<SidebarEntry> = read_json(&sidebar)?;
        if let Some(path) = descriptions {
            let descriptions: HashMap<String, String> = read_json(&path)?;
            tracing::debug!(entries = entries.len(), "rendering index from sidebar and description files");
            return Ok(catalog.render_sidebar_index(&entries, &descriptions));
        }
        tracing::debug!(
            entries = entries.len(),
            root = %cfg.docs.root.display(),
            "rendering index from sidebar file, descriptions from docs tree"
        );
        let resolver = FsDescriptionResolver::new(&cfg.docs.root);
        return Ok(catalog.render_sidebar_index_async(&entries, &resolver).await);
    }

    let Some(section) = section else {
        bail!("A docs section is required without --sidebar");
    };
    let pages = docs::scan_docs(
        &cfg.docs.root,
        section,
        &cfg.docs.include_globs,
        &cfg.docs.exclude_globs,
    )?;
    let entries = docs::sidebar_entries(&pages, &cfg.docs.base_url);
    let registry = DocRegistry::from_pages(&pages);
    Ok(catalog.render_sidebar_index(&entries, &registry))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = load_or_minimal(&cli.config)?;
    let catalog = FeatureCatalog::builtin();

    match cli.command {
        Commands::Categories => {
            println!("{:<22} {:>7} {:>5}   LINK", "CATEGORY", "COLUMNS", "ITEMS");
            for s in catalog.summaries() {
                println!("{:<22} {:>7} {:>5}   {}", s.key, s.columns, s.items, s.link);
            }
        }
        Commands::Render {
            category,
            item,
            format,
        } => {
            let table = match item {
                Some(name) => catalog.render_item(&category, &name)?,
                None => catalog.render_category(&category)?,
            };
            print_table(&table, format.unwrap_or(cfg.output.format))?;
        }
        Commands::Index {
            section,
            sidebar,
            descriptions,
            format,
        } => {
            let table =
                run_index(&cfg, &catalog, section.as_deref(), sidebar, descriptions).await?;
            print_table(&table, format.unwrap_or(cfg.output.format))?;
        }
        Commands::Export {
            output,
            format,
            check,
        } => {
            let dir = output.unwrap_or_else(|| cfg.output.dir.clone());
            export::run_export(&catalog, &dir, format.unwrap_or(cfg.output.format), check)?;
        }
        Commands::Check => {
            catalog.lint()?;
            let items: usize = catalog.summaries().iter().map(|s| s.items).sum();
            println!(
                "Registry OK: {} categories, {} items.",
                catalog.categories().len(),
                items
            );
        }
    }

    Ok(())
}
