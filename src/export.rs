//! Export every category table to files for the static site build.
//!
//! Writes `<dir>/<key>.<ext>` for each category in registry order. The
//! check mode re-renders in memory and compares against what is on disk,
//! so CI can fail when the committed tables drift from the registry.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::catalog::FeatureCatalog;
use crate::render::Format;

/// Why an exported file does not match a fresh render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staleness {
    Missing,
    Changed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleFile {
    pub path: PathBuf,
    pub reason: Staleness,
}

pub fn export_path(dir: &Path, key: &str, format: Format) -> PathBuf {
    dir.join(format!("{}.{}", key, format.extension()))
}

/// Render every category and write it under `dir`.
pub fn export_all(catalog: &FeatureCatalog, dir: &Path, format: Format) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let mut written = Vec::new();
    for key in catalog.keys() {
        let rendered = format.render(&catalog.render_category(key)?)?;
        let path = export_path(dir, key, format);
        std::fs::write(&path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "exported category table");
        written.push(path);
    }
    Ok(written)
}

/// Files under `dir` that are missing or differ from a fresh render.
pub fn check_exported(
    catalog: &FeatureCatalog,
    dir: &Path,
    format: Format,
) -> Result<Vec<StaleFile>> {
    let mut stale = Vec::new();
    for key in catalog.keys() {
        let expected = format.render(&catalog.render_category(key)?)?;
        let path = export_path(dir, key, format);
        let reason = match std::fs::read_to_string(&path) {
            Ok(actual) if actual == expected => continue,
            Ok(_) => Staleness::Changed,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Staleness::Missing,
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };
        tracing::warn!(path = %path.display(), ?reason, "exported table is stale");
        stale.push(StaleFile { path, reason });
    }
    Ok(stale)
}

/// CLI entry point for `fcat export`.
pub fn run_export(catalog: &FeatureCatalog, dir: &Path, format: Format, check: bool) -> Result<()> {
    if !check {
        let written = export_all(catalog, dir, format)?;
        println!("Exported {} tables to {}", written.len(), dir.display());
        return Ok(());
    }

    let stale = check_exported(catalog, dir, format)?;
    if stale.is_empty() {
        println!("All tables in {} are up to date.", dir.display());
        return Ok(());
    }

    for file in &stale {
        let reason = match file.reason {
            Staleness::Missing => "missing",
            Staleness::Changed => "changed",
        };
        println!("{:<8} {}", reason, file.path.display());
    }
    anyhow::bail!(
        "{} exported table(s) are stale; run `fcat export` to regenerate",
        stale.len()
    )
}
