//! Metadata forest loader.
//!
//! Every directory is a node. Its own attributes come from an optional
//! `metadata.toml`; its sub-directories are its children.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use lmcat_model::{AttrValue, MetadataNode, Record};
use tracing::debug;

use crate::error::{Result, TreeError};

/// File holding a node's own attributes.
pub const METADATA_FILE: &str = "metadata.toml";

/// Load the forest rooted at `dir`.
///
/// Returns `None` when the root holds neither attributes nor (non-empty)
/// children.
pub fn load_tree(dir: &Path) -> Result<Option<MetadataNode>> {
    let id = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    load_node(id, dir)
}

fn load_node(id: String, dir: &Path) -> Result<Option<MetadataNode>> {
    let record = read_record(&dir.join(METADATA_FILE))?;
    let mut node = MetadataNode::new(id, record);

    for (child_id, child_dir) in child_dirs(dir)? {
        if let Some(child) = load_node(child_id, &child_dir)? {
            node.children.push(child);
        }
    }

    if node.is_empty() {
        debug!(path = %dir.display(), "pruning empty node");
        return Ok(None);
    }
    debug!(
        path = %dir.display(),
        attributes = node.record.len(),
        children = node.children.len(),
        "loaded node"
    );
    Ok(Some(node))
}

/// Sub-directories of `dir`, ordered case-insensitively by name.
fn child_dirs(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = std::fs::read_dir(dir).map_err(|e| TreeError::io(dir, e))?;
    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TreeError::io(dir, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        children.push((entry.file_name().to_string_lossy().into_owned(), path));
    }
    children.sort_by(|(a, _), (b, _)| compare_ids(a, b));
    Ok(children)
}

/// Case-insensitive order, ties broken ordinally.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn read_record(path: &Path) -> Result<Record> {
    if !path.is_file() {
        return Ok(Record::new());
    }
    let text = std::fs::read_to_string(path).map_err(|e| TreeError::io(path, e))?;
    let table: toml::Table = toml::from_str(&text).map_err(|source| TreeError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(table
        .into_iter()
        .map(|(key, value)| (key, from_toml(value)))
        .collect())
}

fn from_toml(value: toml::Value) -> AttrValue {
    match value {
        toml::Value::String(text) => AttrValue::String(text),
        toml::Value::Integer(number) => AttrValue::Integer(number),
        toml::Value::Float(number) => AttrValue::Float(number),
        toml::Value::Boolean(flag) => AttrValue::Boolean(flag),
        toml::Value::Datetime(datetime) => AttrValue::Datetime(datetime.to_string()),
        toml::Value::Array(items) => AttrValue::Array(items.into_iter().map(from_toml).collect()),
        toml::Value::Table(table) => AttrValue::Table(
            table
                .into_iter()
                .map(|(key, value)| (key, from_toml(value)))
                .collect(),
        ),
    }
}
