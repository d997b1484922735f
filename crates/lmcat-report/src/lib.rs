//! Catalog rendering.
//!
//! - **HTML**: one `index.html` per supported language, with stylesheets
//!   copied next to it
//! - **JSON**: `catalog.json` holding the validated entities

pub mod contributors;
pub mod error;
pub mod html;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use lmcat_model::{Contributor, Entity};
use serde::Serialize;
use tracing::{debug, info, info_span};

pub use contributors::{CONTRIBUTORS_FILE, load_contributors};
pub use error::ReportError;
pub use html::{Labels, cutoff_text, labels, render_page};

/// Languages a page is rendered for, one output sub-directory each.
pub const LANGUAGES: &[&str] = &["pt"];

pub const CATALOG_SCHEMA: &str = "lmcat.catalog";
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

/// Options for [`write_site`].
#[derive(Debug, Clone, Default)]
pub struct SiteOptions {
    /// Directory whose `*.css` files are copied into every language directory.
    pub styles_dir: Option<PathBuf>,
}

/// Files produced by [`write_site`].
#[derive(Debug, Clone, Default)]
pub struct SiteOutput {
    pub pages: Vec<PathBuf>,
    pub stylesheets: Vec<PathBuf>,
    pub catalog: PathBuf,
}

#[derive(Serialize)]
struct CatalogPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    entities: &'a [Entity],
}

/// Write every language page plus `catalog.json` under `out_dir`.
pub fn write_site(
    out_dir: &Path,
    entities: &[Entity],
    contributors: &[Contributor],
    options: &SiteOptions,
) -> Result<SiteOutput> {
    let span = info_span!("render", out_dir = %out_dir.display());
    let _guard = span.enter();

    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let styles = match &options.styles_dir {
        Some(dir) => list_stylesheets(dir)?,
        None => Vec::new(),
    };
    let style_names: Vec<String> = styles
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();

    let mut output = SiteOutput::default();
    for lang in LANGUAGES {
        let lang_dir = out_dir.join(lang);
        fs::create_dir_all(&lang_dir)
            .with_context(|| format!("create {}", lang_dir.display()))?;

        let page = render_page(entities, contributors, lang, &style_names, &generated_at)
            .with_context(|| format!("render {lang} page"))?;
        let page_path = lang_dir.join("index.html");
        fs::write(&page_path, page).with_context(|| format!("write {}", page_path.display()))?;
        debug!(path = %page_path.display(), "page written");
        output.pages.push(page_path);

        for style in &styles {
            let Some(name) = style.file_name() else {
                continue;
            };
            let target = lang_dir.join(name);
            fs::copy(style, &target).with_context(|| {
                format!("copy {} to {}", style.display(), target.display())
            })?;
            output.stylesheets.push(target);
        }
    }

    output.catalog = write_catalog_json(out_dir, entities, &generated_at)?;
    info!(
        entities = entities.len(),
        pages = output.pages.len(),
        stylesheets = output.stylesheets.len(),
        "site written"
    );
    Ok(output)
}

/// Write `catalog.json` into `out_dir`.
pub fn write_catalog_json(out_dir: &Path, entities: &[Entity], generated_at: &str) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;
    let output_path = out_dir.join("catalog.json");
    let payload = CatalogPayload {
        schema: CATALOG_SCHEMA,
        schema_version: CATALOG_SCHEMA_VERSION,
        generated_at: generated_at.to_string(),
        entities,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(output_path)
}

/// `*.css` files directly inside `dir`, sorted by name.
fn list_stylesheets(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("read {}", dir.display()))?
            .path();
        let is_css = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("css"));
        if path.is_file() && is_css {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
