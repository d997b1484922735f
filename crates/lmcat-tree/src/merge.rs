//! Conflict-checked merger.
//!
//! Attributes flow from each node down to its children. A child may not
//! redefine anything its ancestry already defines, except the identity key.
//! Leaves become merged records.

use lmcat_model::{IDENTITY_KEY, MetadataNode, Record};
use tracing::{debug, info};

use crate::error::{Result, TreeError};

/// A leaf's attributes merged with all of its ancestors'.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    /// Node identifiers below the root, ending with the leaf.
    pub path: Vec<String>,
    pub attributes: Record,
}

impl MergedRecord {
    /// Slash-joined path, `.` for the root itself.
    pub fn display_path(&self) -> String {
        display_path(&self.path)
    }

    pub fn name(&self) -> Option<&str> {
        self.attributes.name()
    }
}

/// Resolve every leaf of `root`, in tree order.
pub fn resolve(root: &MetadataNode) -> Result<Vec<MergedRecord>> {
    let mut merged = Vec::new();
    let mut path = Vec::new();
    walk(root, &Record::new(), &mut path, &mut merged)?;
    info!(entities = merged.len(), "forest resolved");
    Ok(merged)
}

fn walk(
    node: &MetadataNode,
    parent_data: &Record,
    path: &mut Vec<String>,
    out: &mut Vec<MergedRecord>,
) -> Result<()> {
    let data = parent_data.merged_with(&node.record);

    if node.is_leaf() {
        if data.name().is_none() {
            return Err(TreeError::MissingIdentity {
                path: display_path(path),
            });
        }
        debug!(path = %display_path(path), attributes = data.len(), "resolved leaf");
        out.push(MergedRecord {
            path: path.clone(),
            attributes: data,
        });
        return Ok(());
    }

    for child in &node.children {
        path.push(child.id.clone());
        let keys = conflicting_keys(&data, &child.record);
        if !keys.is_empty() {
            return Err(TreeError::Conflict {
                name: data.name().unwrap_or_default().to_string(),
                path: display_path(path),
                keys,
            });
        }
        walk(child, &data, path, out)?;
        path.pop();
    }
    Ok(())
}

/// Keys both inherited and redefined by the child, identity excluded.
fn conflicting_keys(inherited: &Record, own: &Record) -> Vec<String> {
    inherited
        .shared_keys(own)
        .into_iter()
        .filter(|key| *key != IDENTITY_KEY)
        .map(str::to_string)
        .collect()
}

fn display_path(path: &[String]) -> String {
    if path.is_empty() {
        ".".to_string()
    } else {
        path.join("/")
    }
}
