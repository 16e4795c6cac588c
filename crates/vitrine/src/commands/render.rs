/*
 * render.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! The `render` command: batch-render a site directory to static HTML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use vitrine_config::{ConfigState, aggregate};
use vitrine_core::{PageView, SiteData, render_view};

use crate::store::{FileStore, read_page};

/// Outcome counts for one batch render.
#[derive(Debug, Default, Clone, Copy)]
pub struct RenderSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Render every page document under `<site_dir>/pages` into `output_dir`.
///
/// Draft pages render the "coming soon" placeholder; a page that fails to
/// read or render is reported and counted, and the batch continues.
pub fn execute(site_dir: &Path, output_dir: &Path) -> Result<RenderSummary> {
    let store = FileStore::open(site_dir)?;

    fs::create_dir_all(output_dir).context(format!(
        "Failed to create output directory: {}",
        output_dir.display()
    ))?;

    // One aggregation pass serves the whole batch.
    let records = store.all_settings()?;
    let state = ConfigState::Ready(aggregate(&records));

    let page_files: Vec<PathBuf> = WalkDir::new(store.pages_dir())
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
        .map(|e| e.path().to_path_buf())
        .collect();

    let mut summary = RenderSummary::default();

    for path in page_files {
        match render_one(&path, &state, &store, output_dir) {
            Ok(output_path) => {
                tracing::info!(
                    page = %path.display(),
                    output = %output_path.display(),
                    "rendered"
                );
                summary.succeeded += 1;
            }
            Err(error) => {
                eprintln!("✗ Error rendering {}: {error}", path.display());
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

fn render_one(
    path: &Path,
    state: &ConfigState,
    store: &FileStore,
    output_dir: &Path,
) -> Result<PathBuf> {
    let page = read_page(path).context(format!("Failed to read page: {}", path.display()))?;

    let slug = if page.slug.is_empty() {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "index".to_string())
    } else {
        page.slug.clone()
    };

    let view = PageView::from_fetch(Some(page));
    let html = render_view(&view, state, store)?
        .context("configuration not ready")?;

    let output_path = output_dir.join(format!("{slug}.html"));
    fs::write(&output_path, html).context(format!(
        "Failed to write output file: {}",
        output_path.display()
    ))?;

    Ok(output_path)
}
