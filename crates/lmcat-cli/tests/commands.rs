//! End-to-end runs of the extract, check and build commands.

use std::fs;
use std::path::Path;

use lmcat_cli::commands::{MODELS_DIR, load_config, run_build, run_check, run_extract};
use lmcat_model::{CutOffType, LanguageVariety};
use lmcat_normalize::NormalizerConfig;

const HEADER: &str = "<tr><th>1</th><td>Nome</td><td>Data de lançamento</td><td>Licença</td>\
    <td>Variante do português</td><td>Tamanho</td><td>Modelo base</td><td>Pesos disponíveis</td>\
    <td>Variações</td><td>Dados usados no treinamento</td><td>Data de corte dos dados</td>\
    <td>API</td><td>Chat online</td><td>Responsáveis</td></tr>";

const FOO: &str = r#"<tr><th>2</th><td><a href="https://foo.example">Foo</a></td><td>2024-03</td>
    <td>Proprietária</td><td>Portugal e Brasil</td><td>7B</td><td>-</td>
    <td><a href="http://x">sim</a></td><td>foo-1</td><td></td><td>≥2023-01</td><td>Não</td>
    <td><a href="https://chat.example">Sim</a></td><td><a href="https://lab.example">Lab</a></td></tr>"#;

const BAR: &str = "<tr><th>3</th><td>Bar</td><td>(futuro)</td><td>MIT</td><td>(?)</td><td>(?)</td>\
    <td>Foo</td><td>futuro</td><td>bar-a, bar-b</td><td></td><td>(?)</td><td>talvez</td>\
    <td>Não</td><td></td></tr>";

fn sheet(rows: &[&str]) -> String {
    format!(
        "<html><body><table class=\"waffle\"><tbody>{HEADER}{}</tbody></table></body></html>",
        rows.concat()
    )
}

/// Extract `rows` into `<root>/data/models` and return the data directory.
fn extract(root: &Path, rows: &[&str]) -> std::path::PathBuf {
    let input = root.join("sheet.html");
    fs::write(&input, sheet(rows)).unwrap();
    let data_dir = root.join("data");
    let result = run_extract(&input, &data_dir.join(MODELS_DIR), &NormalizerConfig::default())
        .unwrap();
    assert_eq!(result.forest.records, rows.len());
    data_dir
}

#[test]
fn extracted_forest_checks_clean() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = extract(dir.path(), &[FOO, BAR]);

    let result = run_check(&data_dir, &NormalizerConfig::default()).unwrap();
    assert!(result.site.is_none());
    let ids: Vec<(&str, &str)> = result
        .entities
        .iter()
        .map(|e| (e.name.as_str(), e.model_id.as_str()))
        .collect();
    assert_eq!(
        ids,
        vec![("Bar", "bar-a"), ("Bar", "bar-b"), ("Foo", "foo-1")]
    );

    let bar = &result.entities[0];
    assert!(bar.is_future_release());
    assert_eq!(bar.language_varieties, None);
    assert_eq!(bar.size, "");
    assert_eq!(bar.weight_availability.planned, Some(true));
    assert_eq!(bar.public_api_availability.planned, Some(true));
    assert!(bar.knowledge_cutoff.is_none());

    let foo = &result.entities[2];
    assert_eq!(foo.url.as_deref(), Some("https://foo.example"));
    assert!(foo.is_proprietary());
    assert_eq!(foo.base_model, "");
    assert_eq!(
        foo.language_varieties,
        Some(vec![LanguageVariety::PtPt, LanguageVariety::PtBr])
    );
    assert_eq!(
        foo.knowledge_cutoff.as_ref().map(|c| c.kind),
        Some(CutOffType::PossiblyLater)
    );
    assert!(foo.online_chat_availability.available_now);
    assert!(foo.training_data.is_empty());
}

#[test]
fn build_writes_the_site() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = extract(dir.path(), &[FOO, BAR]);
    fs::write(
        data_dir.join("contributors.toml"),
        "[[contributors]]\nname = \"Ana\"\nurl = \"https://ana.example\"\n",
    )
    .unwrap();
    let styles = dir.path().join("styles");
    fs::create_dir_all(&styles).unwrap();
    fs::write(styles.join("site.css"), "body {}").unwrap();
    let out = dir.path().join("out");

    let result = run_build(&data_dir, &out, Some(styles), &NormalizerConfig::default()).unwrap();
    let site = result.site.unwrap();
    assert_eq!(site.stylesheets, vec![out.join("pt/site.css")]);

    let page = fs::read_to_string(out.join("pt/index.html")).unwrap();
    assert!(page.contains(r#"<a href="https://ana.example">Ana</a>"#));
    assert!(page.contains("bar-b"));

    let catalog: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("catalog.json")).unwrap()).unwrap();
    assert_eq!(catalog["entities"].as_array().map(Vec::len), Some(3));
}

#[test]
fn availability_without_link_fails_the_check() {
    let dir = tempfile::tempdir().unwrap();
    let foo = FOO.replace(r#"<a href="http://x">sim</a>"#, "sim");
    let data_dir = extract(dir.path(), &[&foo]);

    let err = run_check(&data_dir, &NormalizerConfig::default()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("1 of 1 entities failed validation"), "{message}");
    assert!(message.contains("Foo: weight_availability.url"), "{message}");
}

#[test]
fn hand_authored_redefinition_is_a_conflict() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = extract(dir.path(), &[BAR]);
    fs::write(
        data_dir.join("models/Bar/bar-a/metadata.toml"),
        "model_id = \"bar-a\"\nlicense = \"Apache-2.0\"\n",
    )
    .unwrap();

    let err = run_check(&data_dir, &NormalizerConfig::default()).unwrap_err();
    insta::assert_snapshot!(format!("{err:#}"), @"attributes [license] redefined at Bar/bar-a (below 'Bar')");
}

#[test]
fn missing_models_directory_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_check(dir.path(), &NormalizerConfig::default()).unwrap_err();
    assert!(err.to_string().starts_with("models directory not found"));
}

#[test]
fn config_file_overrides_vocabulary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lmcat.toml");
    fs::write(&path, "[varieties]\nAngola = \"pt-PT\"\n").unwrap();

    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.variety("Angola"), Some(LanguageVariety::PtPt));
    assert_eq!(load_config(None).unwrap().variety("Brasil"), Some(LanguageVariety::PtBr));

    let absent = dir.path().join("absent.toml");
    let missing = load_config(Some(absent.as_path())).unwrap_err();
    assert!(missing.to_string().starts_with("load config"));
}
