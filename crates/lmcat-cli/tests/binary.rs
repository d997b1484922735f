//! Runs of the `lmcat` binary itself.

use std::fs;
use std::process::{Command, Output};

fn lmcat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lmcat"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run lmcat")
}

#[test]
fn failing_check_exits_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().to_str().unwrap();

    let output = lmcat(&["--color", "never", "check", data_dir]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error: models directory not found"),
        "{stderr}"
    );
}

#[test]
fn check_prints_summary_table() {
    let dir = tempfile::tempdir().unwrap();
    let models = dir.path().join("models/Foo");
    fs::create_dir_all(&models).unwrap();
    fs::write(
        models.join("metadata.toml"),
        r#"name = "Foo"
license = "MIT"
release_date = "2024"
size = "7B"
base_model = ""
model_id = "foo-1"
training_data = []
origin = []
weight_availability = { available_now = false }
public_api_availability = { available_now = false }
online_chat_availability = { available_now = false }
"#,
    )
    .unwrap();

    let output = lmcat(&["--color", "never", "check", dir.path().to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "{stderr}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("foo-1"), "{stdout}");
    assert!(stdout.contains("TOTAL"), "{stdout}");
}
