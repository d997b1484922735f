//! Forest writer: persists extracted records as a directory hierarchy.
//!
//! ```text
//! <root>/<name>/metadata.toml          base record
//! <root>/<name>/<model_id>/metadata.toml   one per variant
//! ```

use std::path::{Path, PathBuf};

use lmcat_model::{AttrValue, Record};
use tracing::{debug, info};

use crate::error::{IngestError, Result};
use crate::extract::ExtractedRecord;

/// File holding a unit's own attributes.
pub const METADATA_FILE: &str = "metadata.toml";

/// Counts of units written to the forest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForestSummary {
    pub records: usize,
    pub variants: usize,
}

/// Write every record (and its variants) under `root`.
pub fn write_forest(root: &Path, records: &[ExtractedRecord]) -> Result<ForestSummary> {
    let mut summary = ForestSummary::default();
    for record in records {
        let base_dir = root.join(unit_dir_name(&record.name));
        write_record(&base_dir, &record.base, &record.name)?;
        summary.records += 1;
        for variant in &record.variants {
            let variant_dir = base_dir.join(unit_dir_name(&variant.model_id));
            write_record(&variant_dir, &variant.record, &record.name)?;
            summary.variants += 1;
        }
    }
    info!(
        root = %root.display(),
        records = summary.records,
        variants = summary.variants,
        "forest written"
    );
    Ok(summary)
}

/// Write one record as `<dir>/metadata.toml`, creating `dir` if needed.
pub fn write_record(dir: &Path, record: &Record, name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|source| IngestError::FileWrite {
        path: dir.to_path_buf(),
        source,
    })?;
    let text = render_record(record).map_err(|err| IngestError::Serialize {
        name: name.to_string(),
        message: err.to_string(),
    })?;
    let path = dir.join(METADATA_FILE);
    std::fs::write(&path, text).map_err(|source| IngestError::FileWrite {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "record written");
    Ok(path)
}

/// Serialize a record as a TOML document.
pub fn render_record(record: &Record) -> std::result::Result<String, toml::ser::Error> {
    let table: toml::Table = record
        .iter()
        .map(|(key, value)| (key.clone(), to_toml(value)))
        .collect();
    toml::to_string(&table)
}

fn to_toml(value: &AttrValue) -> toml::Value {
    match value {
        AttrValue::String(text) => toml::Value::String(text.clone()),
        AttrValue::Integer(number) => toml::Value::Integer(*number),
        AttrValue::Float(number) => toml::Value::Float(*number),
        AttrValue::Boolean(flag) => toml::Value::Boolean(*flag),
        AttrValue::Datetime(text) => text
            .parse::<toml::value::Datetime>()
            .map_or_else(|_| toml::Value::String(text.clone()), toml::Value::Datetime),
        AttrValue::Array(items) => toml::Value::Array(items.iter().map(to_toml).collect()),
        AttrValue::Table(table) => toml::Value::Table(
            table
                .iter()
                .map(|(key, value)| (key.clone(), to_toml(value)))
                .collect(),
        ),
    }
}

/// Directory name for a unit identifier.
///
/// Path separators are replaced, and names made only of dots (`.`, `..`) become
/// underscores so every unit stays a fresh child of its parent.
pub fn unit_dir_name(id: &str) -> String {
    if id.chars().all(|ch| ch == '.') {
        return "_".repeat(id.len().max(1));
    }
    id.chars()
        .map(|ch| if matches!(ch, '/' | '\\') { '_' } else { ch })
        .collect()
}
