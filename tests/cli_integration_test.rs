//! Integration tests for the lisix binary.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn lisix() -> Command {
    Command::cargo_bin("lisix").expect("binary builds")
}

#[test]
fn test_analyze_json_output_has_expected_structure() {
    let temp_dir = TempDir::new().unwrap();
    let text_path = temp_dir.path().join("conte.txt");
    let output_path = temp_dir.path().join("rapport.json");
    fs::write(
        &text_path,
        "Le chat dort sur le canapé. Le chien surveille la gamelle.",
    )
    .unwrap();

    lisix()
        .current_dir(temp_dir.path())
        .args([
            "analyze",
            "--format",
            "json",
            "--output",
            output_path.to_str().unwrap(),
            text_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let json: Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(json["counts"]["words"], 11);
    assert_eq!(json["counts"]["sentences"], 2);
    let scores = json["scores"].as_array().unwrap();
    assert_eq!(scores.len(), 7);
    assert_eq!(scores[0]["formula"], "lix");
    assert!(scores[0]["tier"].is_string());
}

#[test]
fn test_analyze_terminal_output_prints_french_report() {
    let temp_dir = TempDir::new().unwrap();
    let text_path = temp_dir.path().join("conte.txt");
    fs::write(&text_path, "Le chat dort. Le chien mange.").unwrap();

    let output = lisix()
        .current_dir(temp_dir.path())
        .args(["analyze", text_path.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("STATISTIQUES DU TEXTE"));
    assert!(stdout.contains("INDICES DE LISIBILITÉ"));
    assert!(stdout.contains("Très facile"));
}

#[test]
fn test_analyze_empty_file_reports_empty_input() {
    let temp_dir = TempDir::new().unwrap();
    let text_path = temp_dir.path().join("vide.txt");
    fs::write(&text_path, "").unwrap();

    let output = lisix()
        .current_dir(temp_dir.path())
        .args(["analyze", text_path.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("aucun mot"), "stderr was: {stderr}");
}

#[test]
fn test_analyze_scan_strategy_is_selectable() {
    let temp_dir = TempDir::new().unwrap();
    let text_path = temp_dir.path().join("conte.txt");
    fs::write(&text_path, "L'arbre de l'été grandit.").unwrap();

    lisix()
        .current_dir(temp_dir.path())
        .args([
            "analyze",
            "--strategy",
            "scan",
            "--format",
            "json",
            text_path.to_str().unwrap(),
        ])
        .assert()
        .success();
}

#[test]
fn test_lix_quick_flow_prints_summary() {
    let temp_dir = TempDir::new().unwrap();
    let text_path = temp_dir.path().join("essai.txt");
    fs::write(&text_path, "Le chat.").unwrap();

    let output = lisix()
        .current_dir(temp_dir.path())
        .args(["lix", text_path.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fichier : essai.txt"));
    assert!(stdout.contains("Nombre de mots : 2"));
    assert!(stdout.contains("Score LIX : 2"));
    assert!(stdout.contains("Difficulté : Très facile"));
}

#[test]
fn test_init_writes_config_once() {
    let temp_dir = TempDir::new().unwrap();

    lisix()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();
    let config_path = temp_dir.path().join(".lisix.toml");
    assert!(config_path.exists());
    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("[language]"));

    // A second run without --force must refuse to overwrite
    lisix()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure();
    lisix()
        .current_dir(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
