//! Sidebar entries and descriptions from a Markdown docs tree.
//!
//! Walks a docs directory the way a static-site generator builds an
//! autogenerated sidebar: every `.md`/`.mdx` page under a section becomes an
//! entry, ordered by `sidebar_position` and then by doc id. Page front matter
//! supplies the label and description.
//!
//! ```text
//! docs/
//!   integrations/chat/
//!     index.mdx          doc id: integrations/chat/index
//!     openai.md          doc id: integrations/chat/openai
//! ```

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::index::{AsyncDescriptionResolver, DescriptionResolver};
use crate::models::SidebarEntry;

const PAGE_EXTENSIONS: &[&str] = &["md", "mdx"];

/// One page found in the docs tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DocPage {
    pub doc_id: String,
    pub title: Option<String>,
    pub sidebar_label: Option<String>,
    pub sidebar_position: Option<f64>,
    pub description: Option<String>,
}

impl DocPage {
    /// Label shown in the sidebar and in the index table.
    pub fn label(&self) -> String {
        self.sidebar_label
            .clone()
            .or_else(|| self.title.clone())
            .unwrap_or_else(|| {
                self.doc_id
                    .rsplit('/')
                    .next()
                    .unwrap_or(&self.doc_id)
                    .to_string()
            })
    }
}

/// Front matter fields and body of a page.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrontMatter {
    pub fields: HashMap<String, String>,
    pub body: String,
}

/// Split a leading `---` block of `key: value` lines from the body.
///
/// Pages without front matter return an empty field map and the whole text
/// as body. Quoted values have their quotes removed. Block scalars (`>`,
/// `|`, with optional chomping indicator) and plain values continued on
/// indented lines are joined: folded with spaces, literal with newlines.
pub fn parse_front_matter(text: &str) -> FrontMatter {
    let mut lines = text.lines().peekable();
    if lines.next().map(str::trim_end) != Some("---") {
        return FrontMatter {
            fields: HashMap::new(),
            body: text.to_string(),
        };
    }

    let mut fields = HashMap::new();
    let mut closed = false;
    while let Some(line) = lines.next() {
        if line.trim_end() == "---" {
            closed = true;
            break;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.starts_with('#') {
            continue;
        }
        let value = value.trim();

        let mut continued = Vec::new();
        while let Some(&next) = lines.peek() {
            if next.trim().is_empty() || next.starts_with([' ', '\t']) {
                continued.push(next.trim());
                lines.next();
            } else {
                break;
            }
        }

        let value = match block_style(value) {
            Some(BlockStyle::Literal) => trim_blank_edges(&continued).join("\n"),
            Some(BlockStyle::Folded) => fold(&continued),
            None if value.is_empty() => fold(&continued),
            None => unquote(value).to_string(),
        };
        fields.insert(key.to_string(), value);
    }

    if !closed {
        return FrontMatter {
            fields: HashMap::new(),
            body: text.to_string(),
        };
    }

    FrontMatter {
        fields,
        body: lines.collect::<Vec<_>>().join("\n"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockStyle {
    Literal,
    Folded,
}

/// `|`, `>`, optionally followed by chomping (`-`, `+`) or indentation digits.
fn block_style(value: &str) -> Option<BlockStyle> {
    let mut chars = value.chars();
    let style = match chars.next()? {
        '|' => BlockStyle::Literal,
        '>' => BlockStyle::Folded,
        _ => return None,
    };
    chars
        .all(|c| c == '-' || c == '+' || c.is_ascii_digit())
        .then_some(style)
}

fn trim_blank_edges<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
    &lines[start..end]
}

/// Folded scalar: lines join with spaces, blank lines become newlines.
fn fold(lines: &[&str]) -> String {
    trim_blank_edges(lines)
        .split(|l| l.is_empty())
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| paragraph.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// First line of prose in a page body.
///
/// Skips headings, imports and exports, JSX or HTML tags, admonition fences,
/// and code fences with their contents.
pub fn first_paragraph(body: &str) -> Option<String> {
    let mut in_code = false;
    for line in body.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            in_code = !in_code;
            continue;
        }
        if in_code || trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('#')
            || trimmed.starts_with("import ")
            || trimmed.starts_with("export ")
            || trimmed.starts_with('<')
            || trimmed.starts_with(":::")
        {
            continue;
        }
        return Some(trimmed.to_string());
    }
    None
}

/// Description of a page: front matter `description`, else its first
/// paragraph.
///
/// Whitespace runs, including the newlines of a block scalar, collapse to a
/// single space.
pub fn page_description(front: &FrontMatter) -> Option<String> {
    front
        .fields
        .get("description")
        .map(|d| d.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|d| !d.is_empty())
        .or_else(|| first_paragraph(&front.body))
}

fn page_from_text(doc_id: String, text: &str) -> DocPage {
    let front = parse_front_matter(text);
    let title = front.fields.get("title").cloned().or_else(|| {
        front
            .body
            .lines()
            .find_map(|l| l.trim().strip_prefix("# ").map(|t| t.trim().to_string()))
    });
    DocPage {
        doc_id,
        title,
        sidebar_label: front.fields.get("sidebar_label").cloned(),
        sidebar_position: front
            .fields
            .get("sidebar_position")
            .and_then(|p| p.parse().ok()),
        description: page_description(&front),
    }
}

/// Doc id for a page path relative to the docs root: no extension, `/`
/// separators.
pub fn doc_id_for(relative: &Path) -> String {
    let without_ext = relative.with_extension("");
    without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Walk `root/section` and read every page that matches the include globs.
pub fn scan_docs(
    root: &Path,
    section: &str,
    include_globs: &[String],
    exclude_globs: &[String],
) -> Result<Vec<DocPage>> {
    let section_dir = root.join(section);
    if !section_dir.is_dir() {
        bail!("Docs section does not exist: {}", section_dir.display());
    }

    let include_set = build_globset(include_globs)?;

    let mut default_excludes = vec![
        "**/.git/**".to_string(),
        "**/node_modules/**".to_string(),
        "**/build/**".to_string(),
    ];
    default_excludes.extend(exclude_globs.iter().cloned());
    let exclude_set = build_globset(&default_excludes)?;

    let mut pages = Vec::new();
    for entry in WalkDir::new(&section_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let is_page = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| PAGE_EXTENSIONS.contains(&e));
        if !is_page {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().replace('\\', "/");

        if exclude_set.is_match(&rel_str) || !include_set.is_match(&rel_str) {
            continue;
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page: {}", path.display()))?;
        pages.push(page_from_text(doc_id_for(relative), &text));
    }

    sort_pages(&mut pages);
    tracing::debug!(section, pages = pages.len(), "scanned docs section");
    Ok(pages)
}

/// Order by `sidebar_position` (pages without one last), then by doc id.
pub fn sort_pages(pages: &mut [DocPage]) {
    pages.sort_by(|a, b| {
        let pa = a.sidebar_position.unwrap_or(f64::INFINITY);
        let pb = b.sidebar_position.unwrap_or(f64::INFINITY);
        pa.total_cmp(&pb).then_with(|| a.doc_id.cmp(&b.doc_id))
    });
}

/// Sidebar entries for scanned pages, linking under `base_url`.
pub fn sidebar_entries(pages: &[DocPage], base_url: &str) -> Vec<SidebarEntry> {
    let base = base_url.trim_end_matches('/');
    pages
        .iter()
        .map(|page| SidebarEntry {
            doc_id: Some(page.doc_id.clone()),
            href: format!("{}/{}", base, page.doc_id),
            label: page.label(),
        })
        .collect()
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

// ═══════════════════════════════════════════════════════════════════════
// Resolvers
// ═══════════════════════════════════════════════════════════════════════

/// Descriptions of already-scanned pages, keyed by doc id.
#[derive(Debug, Default, Clone)]
pub struct DocRegistry {
    descriptions: HashMap<String, String>,
}

impl DocRegistry {
    pub fn from_pages(pages: &[DocPage]) -> Self {
        let descriptions = pages
            .iter()
            .filter_map(|p| Some((p.doc_id.clone(), p.description.clone()?)))
            .collect();
        Self { descriptions }
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}

impl DescriptionResolver for DocRegistry {
    fn resolve(&self, doc_id: Option<&str>) -> Option<String> {
        self.descriptions.resolve(doc_id)
    }
}

/// Reads a page from disk on every lookup.
#[derive(Debug, Clone)]
pub struct FsDescriptionResolver {
    root: PathBuf,
}

impl FsDescriptionResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn find_page(&self, doc_id: &str) -> Option<PathBuf> {
        for ext in PAGE_EXTENSIONS {
            let candidate = self.root.join(format!("{}.{}", doc_id, ext));
            if tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
                return Some(candidate);
            }
        }
        None
    }
}

#[async_trait]
impl AsyncDescriptionResolver for FsDescriptionResolver {
    async fn resolve(&self, doc_id: Option<&str>) -> Result<Option<String>> {
        let Some(doc_id) = doc_id else {
            return Ok(None);
        };
        let Some(path) = self.find_page(doc_id).await else {
            return Ok(None);
        };
        let text = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read page: {}", path.display()))?;
        Ok(page_description(&parse_front_matter(&text)))
    }
}
