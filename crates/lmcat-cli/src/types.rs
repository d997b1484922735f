use std::path::PathBuf;

use lmcat_ingest::ForestSummary;
use lmcat_model::Entity;
use lmcat_report::SiteOutput;

/// Outcome of `lmcat extract`.
#[derive(Debug, Clone)]
pub struct ExtractResult {
    pub output_dir: PathBuf,
    pub forest: ForestSummary,
}

/// Outcome of `lmcat build` and `lmcat check`.
#[derive(Debug, Clone)]
pub struct CatalogResult {
    pub data_dir: PathBuf,
    /// Validated entities, sorted by name.
    pub entities: Vec<Entity>,
    /// Written files; `None` for `check`.
    pub site: Option<SiteOutput>,
}
