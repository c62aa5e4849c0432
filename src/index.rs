//! Auto-generated index tables for a docs section.
//!
//! Category landing pages list every page in their sidebar with a short
//! description. The sidebar supplies the entries; a resolver supplies the
//! descriptions. Two kinds of entry are dropped before rendering:
//!
//! - the landing page itself (doc id ending in `/index`),
//! - retired pages listed in [`DEPRECATED_DOC_IDS`].
//!
//! Descriptions are truncated to [`DESCRIPTION_LIMIT`] characters. A missing
//! description renders as an empty cell and is never an error.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::models::{Cell, SidebarEntry, Table};

/// Maximum visible length of a rendered description.
pub const DESCRIPTION_LIMIT: usize = 70;

/// Marker appended to a truncated description.
pub const ELLIPSIS: char = '\u{2026}';

/// Retired pages that still exist on disk but must not be listed.
pub const DEPRECATED_DOC_IDS: &[&str] = &[
    "integrations/chat/anthropic_functions",
    "integrations/chat/ernie",
    "integrations/chat/ollama_functions",
    "integrations/document_loaders/airbyte_cdk",
    "integrations/document_loaders/airbyte_gong",
    "integrations/document_loaders/airbyte_hubspot",
    "integrations/document_loaders/airbyte_json",
    "integrations/document_loaders/airbyte_salesforce",
    "integrations/document_loaders/airbyte_shopify",
    "integrations/document_loaders/airbyte_stripe",
    "integrations/document_loaders/airbyte_typeform",
    "integrations/document_loaders/airbyte_zendesk_support",
    "integrations/llms/titan_takeoff_pro",
    "integrations/vectorstores/singlestoredb",
    "integrations/vectorstores/dingo",
    "integrations/vectorstores/tigris",
];

/// Synchronous description lookup keyed by doc id.
pub trait DescriptionResolver {
    fn resolve(&self, doc_id: Option<&str>) -> Option<String>;
}

impl<F> DescriptionResolver for F
where
    F: Fn(Option<&str>) -> Option<String>,
{
    fn resolve(&self, doc_id: Option<&str>) -> Option<String> {
        self(doc_id)
    }
}

impl DescriptionResolver for HashMap<String, String> {
    fn resolve(&self, doc_id: Option<&str>) -> Option<String> {
        doc_id.and_then(|id| self.get(id)).cloned()
    }
}

/// Asynchronous description lookup, e.g. reading page front matter from disk.
///
/// An `Err` is treated the same as `Ok(None)` by the renderer.
#[async_trait]
pub trait AsyncDescriptionResolver: Send + Sync {
    async fn resolve(&self, doc_id: Option<&str>) -> anyhow::Result<Option<String>>;
}

/// Cut `s` to at most `limit` visible characters.
///
/// Strings of `limit` characters or fewer are returned unchanged. Longer
/// strings keep their first `limit - 1` characters followed by [`ELLIPSIS`].
/// A `limit` of zero leaves no room for the ellipsis and yields `""`.
pub fn truncate(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }
    if limit == 0 {
        return String::new();
    }
    let mut out: String = s.chars().take(limit - 1).collect();
    out.push(ELLIPSIS);
    out
}

pub fn is_deprecated(doc_id: &str) -> bool {
    DEPRECATED_DOC_IDS.contains(&doc_id)
}

/// Whether an entry belongs in the index table.
pub fn is_listed(entry: &SidebarEntry) -> bool {
    match entry.doc_id.as_deref() {
        Some(id) => !id.ends_with("/index") && !is_deprecated(id),
        None => true,
    }
}

fn header() -> Vec<Cell> {
    vec![Cell::text("Name"), Cell::text("Description")]
}

fn row(entry: &SidebarEntry, description: Option<String>) -> Vec<Cell> {
    let description = description
        .map(|d| truncate(&d, DESCRIPTION_LIMIT))
        .unwrap_or_default();
    vec![
        Cell::link(entry.label.as_str(), entry.href.as_str()),
        Cell::Text(description),
    ]
}

/// Two-column index table (`Name`, `Description`) for the listed entries,
/// in input order.
pub fn render_sidebar_index<R>(entries: &[SidebarEntry], resolver: &R) -> Table
where
    R: DescriptionResolver + ?Sized,
{
    let rows = entries
        .iter()
        .filter(|entry| is_listed(entry))
        .map(|entry| row(entry, resolver.resolve(entry.doc_id.as_deref())))
        .collect();
    Table {
        header: header(),
        rows,
    }
}

/// Async variant of [`render_sidebar_index`].
///
/// Every description is awaited before the table is built. A failed lookup
/// only blanks that entry's description.
pub async fn render_sidebar_index_async(
    entries: &[SidebarEntry],
    resolver: &dyn AsyncDescriptionResolver,
) -> Table {
    let mut rows = Vec::new();
    for entry in entries.iter().filter(|entry| is_listed(entry)) {
        let description = match resolver.resolve(entry.doc_id.as_deref()).await {
            Ok(description) => description,
            Err(e) => {
                tracing::warn!(
                    doc_id = entry.doc_id.as_deref().unwrap_or(""),
                    error = %e,
                    "description lookup failed; leaving it blank"
                );
                None
            }
        };
        rows.push(row(entry, description));
    }
    Table {
        header: header(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_description(_: Option<&str>) -> Option<String> {
        None
    }

    fn about(doc_id: Option<&str>) -> Option<String> {
        doc_id.map(|id| format!("about {}", id))
    }

    fn entry(doc_id: Option<&str>, label: &str) -> SidebarEntry {
        let href = format!("/docs/{}", doc_id.unwrap_or(label));
        SidebarEntry::new(doc_id, &href, label)
    }

    #[test]
    fn test_truncate_at_limit_unchanged() {
        let s = "a".repeat(70);
        assert_eq!(truncate(&s, 70), s);
    }

    #[test]
    fn test_truncate_over_limit_cuts_to_limit_minus_one() {
        let s = "a".repeat(71);
        let expected = format!("{}\u{2026}", "a".repeat(69));
        assert_eq!(truncate(&s, 70), expected);
        assert_eq!(truncate(&s, 70).chars().count(), 70);
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let s = "é".repeat(70);
        assert_eq!(truncate(&s, 70), s);
    }

    #[test]
    fn test_truncate_short_and_empty() {
        assert_eq!(truncate("", 70), "");
        assert_eq!(truncate("short", 70), "short");
    }

    #[test]
    fn test_truncate_never_exceeds_limit() {
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("abc", 1), "\u{2026}");
        assert_eq!(truncate("abc", 2), "a\u{2026}");
        for limit in 0..5 {
            assert!(truncate("abcdef", limit).chars().count() <= limit);
        }
    }

    #[test]
    fn test_filters_index_and_deprecated() {
        let entries = vec![
            entry(Some("integrations/chat/index"), "Chat models"),
            entry(Some("integrations/chat/openai"), "OpenAI"),
            entry(Some("integrations/chat/ernie"), "Ernie"),
            entry(None, "External link"),
            entry(Some("integrations/chat/anthropic"), "Anthropic"),
            entry(Some("integrations/chat/ollama_functions"), "Ollama Functions"),
        ];
        let table = render_sidebar_index(&entries, &no_description);
        let labels: Vec<&Cell> = table.rows.iter().map(|r| &r[0]).collect();
        assert_eq!(
            labels,
            vec![
                &Cell::link("OpenAI", "/docs/integrations/chat/openai"),
                &Cell::link("External link", "/docs/External link"),
                &Cell::link("Anthropic", "/docs/integrations/chat/anthropic"),
            ]
        );
    }

    #[test]
    fn test_index_suffix_only_matches_whole_segment_end() {
        let entries = vec![entry(Some("integrations/reindex"), "Reindex")];
        let table = render_sidebar_index(&entries, &no_description);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_descriptions_from_map_and_truncated() {
        let mut map = HashMap::new();
        map.insert(
            "integrations/chat/openai".to_string(),
            "x".repeat(100),
        );
        let entries = vec![
            entry(Some("integrations/chat/openai"), "OpenAI"),
            entry(Some("integrations/chat/groq"), "Groq"),
        ];
        let table = render_sidebar_index(&entries, &map);
        assert_eq!(table.header, vec![Cell::text("Name"), Cell::text("Description")]);
        assert_eq!(
            table.rows[0][1],
            Cell::Text(format!("{}\u{2026}", "x".repeat(69)))
        );
        assert_eq!(table.rows[1][1], Cell::Text(String::new()));
    }

    #[test]
    fn test_render_is_idempotent() {
        let entries = vec![entry(Some("a/b"), "B"), entry(Some("a/c"), "C")];
        let first = render_sidebar_index(&entries, &about);
        let second = render_sidebar_index(&entries, &about);
        assert_eq!(first, second);
    }

    struct FlakyResolver;

    #[async_trait]
    impl AsyncDescriptionResolver for FlakyResolver {
        async fn resolve(&self, doc_id: Option<&str>) -> anyhow::Result<Option<String>> {
            match doc_id {
                Some("a/broken") => anyhow::bail!("page could not be read"),
                other => Ok(about(other)),
            }
        }
    }

    #[tokio::test]
    async fn test_async_failure_blanks_only_that_entry() {
        let entries = vec![
            entry(Some("a/first"), "First"),
            entry(Some("a/broken"), "Broken"),
            entry(Some("a/index"), "Landing"),
            entry(Some("a/last"), "Last"),
        ];
        let table = render_sidebar_index_async(&entries, &FlakyResolver).await;
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.rows[0][1], Cell::text("about a/first"));
        assert_eq!(table.rows[1][1], Cell::text(""));
        assert_eq!(table.rows[2][1], Cell::text("about a/last"));
    }
}
