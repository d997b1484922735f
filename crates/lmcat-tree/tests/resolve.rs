//! Loading and resolving forests written to a temporary directory.

use std::fs;
use std::path::Path;

use lmcat_model::{AttrValue, MetadataNode, Record};
use lmcat_tree::{METADATA_FILE, TreeError, load_tree, resolve};

fn write(root: &Path, unit: &str, toml: &str) {
    let dir = root.join(unit);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(METADATA_FILE), toml).unwrap();
}

fn record(pairs: &[(&str, &str)]) -> Record {
    let mut record = Record::new();
    for (key, value) in pairs {
        record.insert(*key, *value);
    }
    record
}

#[test]
fn loader_orders_and_prunes() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("models");
    write(&root, "beta", r#"name = "beta""#);
    write(&root, "Alpha", r#"name = "Alpha""#);
    write(&root, "Gamma/g1", r#"model_id = "g1""#);
    fs::create_dir_all(root.join("Empty/nothing")).unwrap();
    fs::write(root.join("README.md"), "not a unit").unwrap();

    let tree = load_tree(&root).unwrap().unwrap();
    assert_eq!(tree.id, "models");
    assert!(tree.record.is_empty());
    let ids: Vec<&str> = tree.children.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["Alpha", "beta", "Gamma"]);

    let gamma = &tree.children[2];
    assert!(gamma.record.is_empty());
    assert_eq!(gamma.children.len(), 1);
    assert_eq!(gamma.children[0].record.get("model_id"), Some(&AttrValue::from("g1")));
}

#[test]
fn empty_forest_is_absent() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b")).unwrap();
    assert!(load_tree(dir.path()).unwrap().is_none());
}

#[test]
fn malformed_record_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Broken", "name = ");
    let err = load_tree(dir.path()).unwrap_err();
    match err {
        TreeError::Toml { path, .. } => assert!(path.ends_with("Broken/metadata.toml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn variants_inherit_base_attributes() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("models");
    write(&root, "Bar", "name = \"Bar\"\nlicense = \"MIT\"\n");
    write(&root, "Bar/b", r#"model_id = "b""#);
    write(&root, "Bar/a", r#"model_id = "a""#);

    let merged = resolve(&load_tree(&root).unwrap().unwrap()).unwrap();
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].path, vec!["Bar".to_string(), "a".to_string()]);
    assert_eq!(merged[0].display_path(), "Bar/a");
    for (entity, id) in merged.iter().zip(["a", "b"]) {
        assert_eq!(entity.name(), Some("Bar"));
        assert_eq!(entity.attributes.get("license"), Some(&AttrValue::from("MIT")));
        assert_eq!(entity.attributes.get("model_id"), Some(&AttrValue::from(id)));
    }
}

#[test]
fn redefined_attribute_is_a_conflict() {
    let tree = MetadataNode::new("models", Record::new()).with_child(
        MetadataNode::new("Foo", record(&[("name", "Base"), ("license", "MIT")]))
            .with_child(MetadataNode::new("v1", record(&[("license", "Apache-2.0")]))),
    );
    let err = resolve(&tree).unwrap_err();
    match &err {
        TreeError::Conflict { name, keys, .. } => {
            assert_eq!(name, "Base");
            assert_eq!(keys, &vec!["license".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
    insta::assert_snapshot!(err.to_string(), @"attributes [license] redefined at Foo/v1 (below 'Base')");
}

#[test]
fn child_may_override_name() {
    let tree = MetadataNode::new("models", Record::new()).with_child(
        MetadataNode::new("Foo", record(&[("name", "Base"), ("license", "MIT")]))
            .with_child(MetadataNode::new("x", record(&[("name", "Variant X")]))),
    );
    let merged = resolve(&tree).unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].name(), Some("Variant X"));
    assert_eq!(merged[0].attributes.get("license"), Some(&AttrValue::from("MIT")));
}

#[test]
fn model_id_is_not_exempt() {
    let tree = MetadataNode::new("models", Record::new()).with_child(
        MetadataNode::new("Foo", record(&[("name", "Foo"), ("model_id", "foo")]))
            .with_child(MetadataNode::new("a", record(&[("model_id", "a")]))),
    );
    assert!(matches!(
        resolve(&tree),
        Err(TreeError::Conflict { ref keys, .. }) if keys == &vec!["model_id".to_string()]
    ));
}

#[test]
fn conflicts_reach_past_grouping_nodes() {
    let tree = MetadataNode::new("models", record(&[("license", "MIT")])).with_child(
        MetadataNode::new("group", Record::new())
            .with_child(MetadataNode::new("Foo", record(&[("name", "Foo"), ("license", "GPL")]))),
    );
    let err = resolve(&tree).unwrap_err();
    assert!(matches!(err, TreeError::Conflict { ref path, .. } if path == "group/Foo"));
}

#[test]
fn empty_middle_node_does_not_change_the_merge() {
    let leaf = MetadataNode::new("c", record(&[("model_id", "c")]));
    let top = record(&[("name", "A"), ("license", "MIT")]);

    let direct = MetadataNode::new("a", top.clone()).with_child(leaf.clone());
    let through = MetadataNode::new("a", top)
        .with_child(MetadataNode::new("b", Record::new()).with_child(leaf));

    let direct = resolve(&direct).unwrap();
    let through = resolve(&through).unwrap();
    assert_eq!(direct[0].attributes, through[0].attributes);
}

#[test]
fn leaf_without_name_is_rejected() {
    let tree = MetadataNode::new("models", record(&[("license", "MIT")]))
        .with_child(MetadataNode::new("orphan", record(&[("model_id", "o")])));
    let err = resolve(&tree).unwrap_err();
    assert!(matches!(err, TreeError::MissingIdentity { ref path } if path == "orphan"));
}
