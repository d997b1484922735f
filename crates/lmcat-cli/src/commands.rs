use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use lmcat_ingest::extract_catalog;
use lmcat_model::Entity;
use lmcat_normalize::NormalizerConfig;
use lmcat_report::{CONTRIBUTORS_FILE, SiteOptions, load_contributors, write_site};
use lmcat_tree::{load_tree, resolve};
use lmcat_validate::{SchemaConfig, validate_all};
use tracing::{info, info_span, warn};

use crate::types::{CatalogResult, ExtractResult};

/// Directory under the data directory holding the metadata forest.
pub const MODELS_DIR: &str = "models";

/// Load the normalizer configuration, falling back to the defaults.
pub fn load_config(path: Option<&Path>) -> Result<NormalizerConfig> {
    match path {
        Some(path) => NormalizerConfig::load(path)
            .with_context(|| format!("load config {}", path.display())),
        None => Ok(NormalizerConfig::default()),
    }
}

/// Validator configuration accepting exactly the normalizer's vocabulary.
pub fn schema_config(config: &NormalizerConfig) -> SchemaConfig {
    SchemaConfig::default().with_varieties(config.varieties.values().copied())
}

pub fn run_extract(input: &Path, output_dir: &Path, config: &NormalizerConfig) -> Result<ExtractResult> {
    let start = Instant::now();
    let forest = extract_catalog(input, output_dir, config)
        .with_context(|| format!("extract {}", input.display()))?;
    info!(
        records = forest.records,
        variants = forest.variants,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "extraction complete"
    );
    Ok(ExtractResult {
        output_dir: output_dir.to_path_buf(),
        forest,
    })
}

pub fn run_check(data_dir: &Path, config: &NormalizerConfig) -> Result<CatalogResult> {
    let entities = load_catalog(data_dir, &schema_config(config))?;
    Ok(CatalogResult {
        data_dir: data_dir.to_path_buf(),
        entities,
        site: None,
    })
}

pub fn run_build(
    data_dir: &Path,
    out_dir: &Path,
    styles: Option<PathBuf>,
    config: &NormalizerConfig,
) -> Result<CatalogResult> {
    let start = Instant::now();
    let entities = load_catalog(data_dir, &schema_config(config))?;
    let contributors = load_contributors(&data_dir.join(CONTRIBUTORS_FILE))?;
    let site = write_site(
        out_dir,
        &entities,
        &contributors,
        &SiteOptions { styles_dir: styles },
    )?;
    info!(
        entities = entities.len(),
        contributors = contributors.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "build complete"
    );
    Ok(CatalogResult {
        data_dir: data_dir.to_path_buf(),
        entities,
        site: Some(site),
    })
}

/// Load, merge and validate the forest under `<data_dir>/models`.
pub fn load_catalog(data_dir: &Path, schema: &SchemaConfig) -> Result<Vec<Entity>> {
    let models_dir = data_dir.join(MODELS_DIR);
    let span = info_span!("catalog", models_dir = %models_dir.display());
    let _guard = span.enter();

    if !models_dir.is_dir() {
        bail!("models directory not found: {}", models_dir.display());
    }
    let Some(tree) = load_tree(&models_dir)? else {
        warn!("metadata forest is empty");
        return Ok(Vec::new());
    };
    info!(leaves = tree.leaf_count(), "forest loaded");
    let merged = resolve(&tree)?;
    Ok(validate_all(&merged, schema)?)
}
