//! Integration tests for the wordreveal CLI
//!
//! Every test points the binary at its own temporary data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Command running against `data_dir`, isolated from any user config
fn wordreveal(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wordreveal").unwrap();
    cmd.arg("--data-dir")
        .arg(data_dir)
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", data_dir.join("config"))
        .env("HOME", data_dir);
    cmd
}

fn import_fixture(data_dir: &Path) {
    wordreveal(data_dir)
        .arg("import")
        .arg(fixture_path("biology-notes.txt"))
        .assert()
        .success();
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("wordreveal").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("active-recall"))
        .stdout(predicate::str::contains("study"));
}

#[test]
fn test_split_sentences_from_file() {
    let temp_dir = TempDir::new().unwrap();
    wordreveal(temp_dir.path())
        .arg("split")
        .arg("-i")
        .arg(fixture_path("biology-notes.txt"))
        .arg("-m")
        .arg("sentence")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cells are the basic unit of life\n"))
        .stdout(predicate::str::contains("Mitochondria produce energy\n"));
}

#[test]
fn test_split_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    wordreveal(temp_dir.path())
        .arg("split")
        .write_stdin("one  two\nthree")
        .assert()
        .success()
        .stdout("one\ntwo\nthree\n");
}

#[test]
fn test_split_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = wordreveal(temp_dir.path())
        .args(["split", "-f", "json", "-m", "row"])
        .write_stdin("first\nsecond")
        .output()
        .unwrap();
    assert!(output.status.success());

    let chunks: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let chunks = chunks.as_array().unwrap();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0]["id"], "chunk-row-0");
    assert_eq!(chunks[1]["kind"], "newline");
    assert_eq!(chunks[2]["offset"], 6);
}

#[test]
fn test_split_markdown_output() {
    let temp_dir = TempDir::new().unwrap();
    wordreveal(temp_dir.path())
        .args(["split", "-f", "markdown"])
        .write_stdin("Hi there")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. `chunk-word-0` Hi"))
        .stdout(predicate::str::contains("*Total chunks: 2*"));
}

#[test]
fn test_split_unknown_mode() {
    let temp_dir = TempDir::new().unwrap();
    wordreveal(temp_dir.path())
        .args(["split", "-m", "paragraph"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown reveal mode"));
}

#[test]
fn test_import_reports_counts() {
    let temp_dir = TempDir::new().unwrap();
    wordreveal(temp_dir.path())
        .arg("import")
        .arg(fixture_path("biology-notes.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("17 words, 121 characters"));

    assert!(temp_dir.path().join("wordreveal_app_state.json").exists());
}

#[test]
fn test_import_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    wordreveal(temp_dir.path())
        .args(["import", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_show_masks_hidden_text() {
    let temp_dir = TempDir::new().unwrap();
    import_fixture(temp_dir.path());

    wordreveal(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("_____ ___ ___ _____"));

    wordreveal(temp_dir.path())
        .args(["show", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[Cells] [are]"));
}

#[test]
fn test_sentence_next_and_back() {
    let temp_dir = TempDir::new().unwrap();
    import_fixture(temp_dir.path());

    wordreveal(temp_dir.path())
        .args(["settings", "--mode", "sentence"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentences per step: 1"));

    wordreveal(temp_dir.path())
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("2/8 revealed"));

    wordreveal(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Cells are the basic unit of life. ____________ _______ ______",
        ));

    wordreveal(temp_dir.path())
        .arg("back")
        .assert()
        .success()
        .stdout(predicate::str::contains("0/8 revealed"));
}

#[test]
fn test_word_steps_with_count() {
    let temp_dir = TempDir::new().unwrap();
    import_fixture(temp_dir.path());

    wordreveal(temp_dir.path())
        .args(["next", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4/34 revealed"));

    wordreveal(temp_dir.path())
        .args(["back", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0/34 revealed"));
}

#[test]
fn test_step_size_from_settings() {
    let temp_dir = TempDir::new().unwrap();
    import_fixture(temp_dir.path());

    wordreveal(temp_dir.path())
        .args(["settings", "--step", "3"])
        .assert()
        .success();

    wordreveal(temp_dir.path())
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("6/34 revealed"));
}

#[test]
fn test_highlight() {
    let temp_dir = TempDir::new().unwrap();
    import_fixture(temp_dir.path());

    wordreveal(temp_dir.path())
        .args(["highlight", "chunk-word-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Highlighted chunk-word-2: \"are\""));

    wordreveal(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("_____ are ___"));

    wordreveal(temp_dir.path())
        .args(["highlight", "chunk-word-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No chunk with id: chunk-word-999"));
}

#[test]
fn test_reset_and_shuffle() {
    let temp_dir = TempDir::new().unwrap();
    import_fixture(temp_dir.path());

    wordreveal(temp_dir.path()).args(["next", "-n", "3"]).assert().success();
    wordreveal(temp_dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("0/34 revealed"));

    wordreveal(temp_dir.path()).args(["next", "-n", "3"]).assert().success();
    wordreveal(temp_dir.path())
        .arg("shuffle")
        .assert()
        .success()
        .stdout(predicate::str::contains("0/34 revealed"));
}

#[test]
fn test_status_json() {
    let temp_dir = TempDir::new().unwrap();
    import_fixture(temp_dir.path());
    wordreveal(temp_dir.path()).arg("next").assert().success();

    let output = wordreveal(temp_dir.path())
        .args(["status", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(status["mode"], "word");
    assert_eq!(status["revealed"], 2);
    assert_eq!(status["total"], 34);
    assert_eq!(status["streak"], 1);
    assert_eq!(status["complete"], false);
}

#[test]
fn test_first_run_uses_demo_text() {
    let temp_dir = TempDir::new().unwrap();
    wordreveal(temp_dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode:      word"))
        .stdout(predicate::str::contains("Revealed:  0 of"));

    wordreveal(temp_dir.path())
        .args(["show", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[WordReveal:]"));
}

#[test]
fn test_corrupt_session_falls_back_to_demo() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("wordreveal_app_state.json"), "{ broken").unwrap();

    wordreveal(temp_dir.path())
        .args(["show", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[WordReveal:]"));
}

#[test]
fn test_settings_validation() {
    let temp_dir = TempDir::new().unwrap();
    wordreveal(temp_dir.path())
        .args(["settings", "--step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid settings"))
        .stderr(predicate::str::contains("step size must be between 1 and 50"));

    wordreveal(temp_dir.path())
        .args(["settings", "--key-next", "Hyper"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid key name: Hyper"));

    assert!(!temp_dir.path().join("wordreveal_settings.json").exists());
}

#[test]
fn test_settings_print_and_update() {
    let temp_dir = TempDir::new().unwrap();
    wordreveal(temp_dir.path())
        .arg("settings")
        .assert()
        .success()
        .stdout(predicate::str::contains("Words per step:  1"))
        .stdout(predicate::str::contains("Next key:        ArrowRight"));

    wordreveal(temp_dir.path())
        .args(["settings", "--theme", "dark", "--key-next", "Space"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme:           dark"))
        .stdout(predicate::str::contains("Next key:        Space"));

    let raw = fs::read_to_string(temp_dir.path().join("wordreveal_settings.json")).unwrap();
    let settings: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(settings["theme"], "dark");
    assert_eq!(settings["keyNext"], "Space");
}

#[test]
fn test_export() {
    let temp_dir = TempDir::new().unwrap();
    import_fixture(temp_dir.path());
    let output_file = temp_dir.path().join("out").join("notes.txt");

    wordreveal(temp_dir.path())
        .arg("export")
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let exported = fs::read_to_string(&output_file).unwrap();
    let original = fs::read_to_string(fixture_path("biology-notes.txt")).unwrap();
    assert_eq!(exported, original);
}

#[test]
fn test_export_default_name() {
    let temp_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();

    wordreveal(temp_dir.path())
        .current_dir(work_dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("study-content-"));

    let names: Vec<String> = fs::read_dir(work_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("study-content-") && names[0].ends_with(".txt"));
}

#[test]
fn test_generate_config_and_use_it() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("wordreveal.toml");

    wordreveal(temp_dir.path())
        .args(["generate-config", "-o"])
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    let content = fs::read_to_string(&config_file).unwrap();
    assert!(content.contains("[input]"));

    wordreveal(temp_dir.path())
        .arg("--config")
        .arg(&config_file)
        .arg("status")
        .assert()
        .success();
}

#[test]
fn test_config_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("from-config");
    let config_file = temp_dir.path().join("config.toml");
    fs::write(
        &config_file,
        format!("[storage]\ndata_dir = {:?}\n", data_dir.to_string_lossy()),
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("wordreveal").unwrap();
    cmd.env_remove("WORDREVEAL_DATA_DIR")
        .arg("--config")
        .arg(&config_file)
        .arg("import")
        .arg(fixture_path("biology-notes.txt"))
        .assert()
        .success();

    assert!(data_dir.join("wordreveal_app_state.json").exists());
}

#[test]
fn test_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("bad.toml");
    fs::write(&config_file, "[input]\nhold_delay_ms = \"slow\"\n").unwrap();

    wordreveal(temp_dir.path())
        .arg("--config")
        .arg(&config_file)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_study_requires_terminal() {
    let temp_dir = TempDir::new().unwrap();
    wordreveal(temp_dir.path())
        .arg("study")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn test_data_dir_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("wordreveal").unwrap();
    cmd.env("WORDREVEAL_DATA_DIR", temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path().join("config"))
        .arg("import")
        .arg(fixture_path("biology-notes.txt"))
        .assert()
        .success();

    assert!(temp_dir.path().join("wordreveal_app_state.json").exists());
}
