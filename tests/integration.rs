use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn fcat_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("fcat");
    path
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    // Docs section with a landing page, a retired page, and three integrations
    let section = root.join("docs/integrations/chat");
    fs::create_dir_all(&section).unwrap();
    fs::write(
        section.join("index.mdx"),
        "---\nsidebar_position: 0\nsidebar_label: Chat models\n---\n\n# Chat models\n\nAll chat models.\n",
    )
    .unwrap();
    fs::write(
        section.join("openai.md"),
        "---\nsidebar_label: OpenAI\ndescription: Get started with OpenAI chat models.\n---\n\n# ChatOpenAI\n",
    )
    .unwrap();
    fs::write(
        section.join("anthropic.md"),
        format!(
            "# ChatAnthropic\n\n{}\n",
            "This guide walks through every option of the Anthropic chat model integration in detail."
        ),
    )
    .unwrap();
    fs::write(
        section.join("ernie.md"),
        "---\ndescription: Retired integration.\n---\n# Ernie\n",
    )
    .unwrap();
    fs::write(section.join("groq.md"), "# ChatGroq\n").unwrap();

    let config_content = format!(
        r#"[docs]
root = "{}/docs"
base_url = "/docs/"

[output]
dir = "{}/build"
format = "markdown"
"#,
        root.display(),
        root.display()
    );

    let config_path = config_dir.join("fcat.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_fcat(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = fcat_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run fcat binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

#[test]
fn test_categories_lists_registry() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_fcat(&config_path, &["categories"]);
    assert!(success, "categories failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("chat"));
    assert!(stdout.contains("vectorstores"));
    assert!(stdout.contains("/docs/integrations/chat"));
}

#[test]
fn test_runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("absent.toml");

    let (stdout, stderr, success) = run_fcat(&missing, &["render", "llms"]);
    assert!(success, "render failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.starts_with("<table>"));
}

#[test]
fn test_render_category_uses_config_format() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_fcat(&config_path, &["render", "chat"]);
    assert!(success, "render failed: stdout={}, stderr={}", stdout, stderr);
    let first = stdout.lines().next().unwrap();
    assert!(first.starts_with("| Provider | [Tool calling]"));
    assert!(stdout.contains("[ChatOpenAI](/docs/integrations/chat/openai/)"));
}

#[test]
fn test_render_single_item() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_fcat(
        &config_path,
        &["render", "vectorstores", "--item", "FAISS", "--format", "json"],
    );
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let rows = value["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0]["value"]["label"], "FAISS");
}

#[test]
fn test_render_unknown_item_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_fcat(&config_path, &["render", "chat", "--item", "nonexistent"]);
    assert!(!success, "missing item should fail");
    assert!(stderr.contains("item 'nonexistent' not found in category 'chat'"));
}

#[test]
fn test_render_unknown_category_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_fcat(&config_path, &["render", "nonexistent"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("unknown category"));
}

#[test]
fn test_index_from_docs_tree() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_fcat(&config_path, &["index", "integrations/chat"]);
    assert!(success, "index failed: stdout={}, stderr={}", stdout, stderr);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "| Name | Description |");
    // landing page and retired page are dropped; the rest sorted by doc id
    assert_eq!(lines.len(), 5);
    assert!(lines[2].starts_with("| [ChatAnthropic](/docs/integrations/chat/anthropic) |"));
    assert!(lines[2].ends_with("\u{2026} |"));
    assert_eq!(lines[3], "| [ChatGroq](/docs/integrations/chat/groq) |  |");
    assert_eq!(
        lines[4],
        "| [OpenAI](/docs/integrations/chat/openai) | Get started with OpenAI chat models. |"
    );
    assert!(!stdout.contains("Ernie"));
    assert!(!stdout.contains("Chat models"));
}

#[test]
fn test_index_from_sidebar_file() {
    let (tmp, config_path) = setup_test_env();

    let sidebar = tmp.path().join("sidebar.json");
    fs::write(
        &sidebar,
        r#"[
            {"docId": "integrations/llms/index", "href": "/docs/integrations/llms/", "label": "LLMs"},
            {"docId": "integrations/llms/titan_takeoff_pro", "href": "/docs/integrations/llms/titan_takeoff_pro", "label": "Titan"},
            {"docId": "integrations/llms/ollama", "href": "/docs/integrations/llms/ollama", "label": "Ollama"},
            {"href": "https://example.com", "label": "Elsewhere"}
        ]"#,
    )
    .unwrap();
    let descriptions = tmp.path().join("descriptions.json");
    fs::write(
        &descriptions,
        r#"{"integrations/llms/ollama": "Run open models locally."}"#,
    )
    .unwrap();

    let (stdout, stderr, success) = run_fcat(
        &config_path,
        &[
            "index",
            "integrations/llms",
            "--sidebar",
            sidebar.to_str().unwrap(),
            "--descriptions",
            descriptions.to_str().unwrap(),
            "--format",
            "html",
        ],
    );
    assert!(success, "index failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains(
        "<tr><td><a href=\"/docs/integrations/llms/ollama\">Ollama</a></td><td>Run open models locally.</td></tr>"
    ));
    assert!(stdout.contains("<td><a href=\"https://example.com\">Elsewhere</a></td><td></td>"));
    assert!(!stdout.contains("Titan"));
    assert!(!stdout.contains(">LLMs<"));
}

#[test]
fn test_index_from_sidebar_reads_descriptions_from_docs_tree() {
    let (tmp, config_path) = setup_test_env();

    let sidebar = tmp.path().join("sidebar.json");
    fs::write(
        &sidebar,
        r#"[
            {"docId": "integrations/chat/openai", "href": "/docs/integrations/chat/openai", "label": "OpenAI"},
            {"docId": "integrations/chat/missing", "href": "/docs/integrations/chat/missing", "label": "Missing"}
        ]"#,
    )
    .unwrap();

    let (stdout, stderr, success) = run_fcat(
        &config_path,
        &["index", "--sidebar", sidebar.to_str().unwrap()],
    );
    assert!(success, "index failed: stdout={}, stderr={}", stdout, stderr);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines[2],
        "| [OpenAI](/docs/integrations/chat/openai) | Get started with OpenAI chat models. |"
    );
    assert_eq!(lines[3], "| [Missing](/docs/integrations/chat/missing) |  |");
}

#[test]
fn test_index_requires_section_or_sidebar() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, _, success) = run_fcat(&config_path, &["index"]);
    assert!(!success, "index without a section or --sidebar should fail");
    assert!(stdout.is_empty());
}

#[test]
fn test_index_missing_section_fails() {
    let (_tmp, config_path) = setup_test_env();

    let (_, stderr, success) = run_fcat(&config_path, &["index", "integrations/nope"]);
    assert!(!success);
    assert!(stderr.contains("Docs section does not exist"));
}

#[test]
fn test_export_then_check() {
    let (tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_fcat(&config_path, &["export"]);
    assert!(success, "export failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Exported"));
    assert!(tmp.path().join("build/chat.md").exists());

    let (stdout, _, success) = run_fcat(&config_path, &["export", "--check"]);
    assert!(success);
    assert!(stdout.contains("up to date"));

    fs::write(tmp.path().join("build/chat.md"), "| stale |\n").unwrap();
    let (stdout, stderr, success) = run_fcat(&config_path, &["export", "--check"]);
    assert!(!success, "stale export should fail the check");
    assert!(stdout.contains("changed"));
    assert!(stderr.contains("stale"));
}

#[test]
fn test_export_is_idempotent() {
    let (tmp, config_path) = setup_test_env();

    run_fcat(&config_path, &["export"]);
    let first = fs::read_to_string(tmp.path().join("build/vectorstores.md")).unwrap();
    run_fcat(&config_path, &["export"]);
    let second = fs::read_to_string(tmp.path().join("build/vectorstores.md")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_check_registry() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_fcat(&config_path, &["check"]);
    assert!(success, "check failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("Registry OK"));
}

#[test]
fn test_invalid_config_rejected() {
    let (_tmp, config_path) = setup_test_env();
    fs::write(&config_path, "[docs]\nbase_url = \"relative/\"\n").unwrap();

    let (_, stderr, success) = run_fcat(&config_path, &["categories"]);
    assert!(!success);
    assert!(stderr.contains("base_url"));
}
