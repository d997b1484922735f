//! Contributors list, passed through to the rendered page.

use std::path::Path;

use lmcat_model::Contributor;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ReportError;

/// File name of the contributors list inside the data directory.
pub const CONTRIBUTORS_FILE: &str = "contributors.toml";

#[derive(Debug, Default, Deserialize)]
struct ContributorsFile {
    #[serde(default)]
    contributors: Vec<Contributor>,
}

/// Load `contributors = [...]` from `path`. A missing file yields an empty list.
pub fn load_contributors(path: &Path) -> Result<Vec<Contributor>, ReportError> {
    if !path.is_file() {
        warn!(path = %path.display(), "contributors file not found");
        return Ok(Vec::new());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ContributorsFile = toml::from_str(&text).map_err(|source| ReportError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(count = file.contributors.len(), "contributors loaded");
    Ok(file.contributors)
}
