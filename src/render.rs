//! Output formats for rendered tables.
//!
//! | Format | Output |
//! |--------|--------|
//! | [`Format::Html`] | `<table>` markup for MDX pages |
//! | [`Format::Markdown`] | GitHub pipe table |
//! | [`Format::Json`] | Pretty-printed [`Table`] for other tooling |
//!
//! Rendering is deterministic: the same table always produces the same bytes.

use serde::Deserialize;

use crate::error::CatalogError;
use crate::models::{Cell, Table};

const CHECK: &str = "\u{2705}";
const CROSS: &str = "\u{274c}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Html,
    Markdown,
    Json,
}

impl Format {
    /// File extension used when exporting tables in this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Markdown => "md",
            Format::Json => "json",
        }
    }

    pub fn render(self, table: &Table) -> Result<String, CatalogError> {
        match self {
            Format::Html => Ok(to_html(table)),
            Format::Markdown => Ok(to_markdown(table)),
            Format::Json => Ok(serde_json::to_string_pretty(table)?),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// HTML
// ═══════════════════════════════════════════════════════════════════════

pub fn to_html(table: &Table) -> String {
    let mut out = String::from("<table>\n<thead>\n<tr>");
    for cell in &table.header {
        out.push_str("<th>");
        out.push_str(&cell_html(cell));
        out.push_str("</th>");
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str("<td>");
            out.push_str(&cell_html(cell));
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn cell_html(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => escape_html(text),
        Cell::Link { label, href } => {
            format!("<a href=\"{}\">{}</a>", escape_html(href), escape_html(label))
        }
        Cell::CodeLink { code, href } => format!(
            "<a href=\"{}\"><code>{}</code></a>",
            escape_html(href),
            escape_html(code)
        ),
        Cell::Flag(true) => CHECK.to_string(),
        Cell::Flag(false) => CROSS.to_string(),
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ═══════════════════════════════════════════════════════════════════════
// Markdown
// ═══════════════════════════════════════════════════════════════════════

pub fn to_markdown(table: &Table) -> String {
    let mut out = String::new();
    push_markdown_row(&mut out, &table.header);
    out.push('|');
    for _ in &table.header {
        out.push_str(" --- |");
    }
    out.push('\n');
    for row in &table.rows {
        push_markdown_row(&mut out, row);
    }
    out
}

fn push_markdown_row(out: &mut String, cells: &[Cell]) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(&cell_markdown(cell));
        out.push_str(" |");
    }
    out.push('\n');
}

fn cell_markdown(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => escape_markdown(text),
        Cell::Link { label, href } => {
            format!("[{}]({})", escape_markdown(label), link_destination(href))
        }
        Cell::CodeLink { code, href } => {
            format!("[`{}`]({})", escape_markdown(code), link_destination(href))
        }
        Cell::Flag(true) => CHECK.to_string(),
        Cell::Flag(false) => CROSS.to_string(),
    }
}

/// CommonMark link destination. Hrefs with spaces, parentheses or angle
/// brackets use the `<...>` form.
fn link_destination(href: &str) -> String {
    if href.contains([' ', '(', ')', '<', '>']) {
        format!("<{}>", href.replace('<', "\\<").replace('>', "\\>"))
    } else {
        href.to_string()
    }
}

fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table {
            header: vec![Cell::text("Name"), Cell::link("Async", "/docs/async")],
            rows: vec![
                vec![
                    Cell::CodeLink {
                        code: "a<b>".to_string(),
                        href: "/api?x=1&y=2".to_string(),
                    },
                    Cell::Flag(true),
                ],
                vec![Cell::text("pipe | here"), Cell::Flag(false)],
            ],
        }
    }

    #[test]
    fn test_html_escapes_and_flags() {
        let html = to_html(&sample());
        assert!(html.starts_with("<table>\n<thead>\n<tr><th>Name</th>"));
        assert!(html.contains("<th><a href=\"/docs/async\">Async</a></th>"));
        assert!(html.contains("<a href=\"/api?x=1&amp;y=2\"><code>a&lt;b&gt;</code></a>"));
        assert!(html.contains("<td>\u{2705}</td>"));
        assert!(html.contains("<td>\u{274c}</td>"));
        assert_eq!(html.matches("<tr>").count(), 3);
    }

    #[test]
    fn test_escape_html_quotes() {
        assert_eq!(escape_html(r#"say "hi" & 'bye'"#), "say &quot;hi&quot; &amp; &#39;bye&#39;");
    }

    #[test]
    fn test_markdown_layout() {
        let md = to_markdown(&sample());
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines[0], "| Name | [Async](/docs/async) |");
        assert_eq!(lines[1], "| --- | --- |");
        assert_eq!(lines[2], "| [`a<b>`](/api?x=1&y=2) | \u{2705} |");
        assert_eq!(lines[3], "| pipe \\| here | \u{274c} |");
    }

    #[test]
    fn test_markdown_link_destination_with_spaces_and_parens() {
        let table = Table {
            header: vec![Cell::text("Name")],
            rows: vec![
                vec![Cell::link("External link", "/docs/External link (old)")],
                vec![Cell::link("Plain", "/docs/plain")],
            ],
        };
        let md = to_markdown(&table);
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines[2], "| [External link](</docs/External link (old)>) |");
        assert_eq!(lines[3], "| [Plain](/docs/plain) |");
    }

    #[test]
    fn test_json_round_shape() {
        let json = Format::Json.render(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["header"][0]["kind"], "text");
        assert_eq!(value["rows"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_render_deterministic() {
        let table = sample();
        for format in [Format::Html, Format::Markdown, Format::Json] {
            assert_eq!(format.render(&table).unwrap(), format.render(&table).unwrap());
        }
    }

    #[test]
    fn test_format_from_config_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: Format,
        }
        let w: Wrapper = toml::from_str("format = \"markdown\"").unwrap();
        assert_eq!(w.format, Format::Markdown);
    }
}
