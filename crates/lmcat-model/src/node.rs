//! In-memory metadata forest.

use crate::record::Record;

/// One unit of the metadata forest: its own (possibly empty) record plus the
/// child units it owns, ordered by identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataNode {
    /// Identifier of the unit (its directory name).
    pub id: String,
    pub record: Record,
    pub children: Vec<MetadataNode>,
}

impl MetadataNode {
    pub fn new(id: impl Into<String>, record: Record) -> Self {
        Self {
            id: id.into(),
            record,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_child(mut self, child: MetadataNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Nodes with neither attributes nor children are pruned by the loader.
    pub fn is_empty(&self) -> bool {
        self.record.is_empty() && self.children.is_empty()
    }

    /// Number of leaves below (or at) this node.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(MetadataNode::leaf_count).sum()
        }
    }
}
