//! Tests for the metadata node type.

use lmcat_model::{AttrValue, MetadataNode, Record};

fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), AttrValue::from(*v)))
        .collect()
}

#[test]
fn leaf_count_counts_only_leaves() {
    let tree = MetadataNode::new("models", Record::new())
        .with_child(
            MetadataNode::new("Foo", record(&[("name", "Foo")]))
                .with_child(MetadataNode::new("a", record(&[("model_id", "a")])))
                .with_child(MetadataNode::new("b", record(&[("model_id", "b")]))),
        )
        .with_child(MetadataNode::new("Bar", record(&[("name", "Bar")])));

    assert_eq!(tree.leaf_count(), 3);
    assert!(!tree.is_leaf());
    assert!(tree.children[1].is_leaf());
}

#[test]
fn empty_node_has_no_record_and_no_children() {
    assert!(MetadataNode::new("x", Record::new()).is_empty());
    assert!(!MetadataNode::new("x", record(&[("name", "X")])).is_empty());
    let grouping = MetadataNode::new("g", Record::new())
        .with_child(MetadataNode::new("x", record(&[("name", "X")])));
    assert!(!grouping.is_empty());
}
