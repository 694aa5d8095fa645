//! CLI integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn infoprompt() -> Command {
    Command::cargo_bin("infoprompt").unwrap()
}

/// Command with config/data dirs pinned inside a temp dir
fn isolated(home: &TempDir) -> Command {
    let mut cmd = infoprompt();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env_remove("GEMINI_API_KEY");
    cmd
}

fn write_project(dir: &Path) -> PathBuf {
    let path = dir.join("project.toml");
    std::fs::write(
        &path,
        r#"visual_style = "watercolor"
aspect_ratio = "9:16"
purpose = "history"
title = "Sejarah Kopi"
main_subject = "cangkir kopi vintage"

[side_panels]
timeline = true

[[sections]]
title = "Asal Usul"
text = "Ditemukan di Ethiopia; Menyebar ke Yaman"
visual_hint = "peta_kuno"
"#,
    )
    .unwrap();
    path
}

#[test]
fn help_output() {
    infoprompt()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("autofill"))
        .stdout(predicate::str::contains("styles"))
        .stdout(predicate::str::contains("history"))
        .stdout(predicate::str::contains("share"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_output() {
    infoprompt()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("infoprompt"));
}

#[test]
fn styles_lists_catalog() {
    infoprompt()
        .arg("styles")
        .assert()
        .success()
        .stdout(predicate::str::contains("3d_realistic"))
        .stdout(predicate::str::contains("watercolor"))
        .stdout(predicate::str::contains("Watercolor Painting"));
}

#[test]
fn render_prints_prompt_and_caption() {
    let dir = tempdir().unwrap();
    let project = write_project(dir.path());

    infoprompt()
        .args(["render", project.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("artistic watercolor painting style"))
        .stdout(predicate::str::contains("Title: \"Sejarah Kopi\""))
        .stdout(predicate::str::contains("✅ Asal Usul"));
}

#[test]
fn render_prompt_only_omits_caption() {
    let dir = tempdir().unwrap();
    let project = write_project(dir.path());

    infoprompt()
        .args(["render", project.to_str().unwrap(), "--prompt-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: \"Sejarah Kopi\""))
        .stdout(predicate::str::contains("✅ Asal Usul").not());
}

#[test]
fn render_caption_only_omits_prompt() {
    let dir = tempdir().unwrap();
    let project = write_project(dir.path());

    infoprompt()
        .args(["render", project.to_str().unwrap(), "--caption-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Asal Usul"))
        .stdout(predicate::str::contains("best quality").not());
}

#[test]
fn render_style_override_wins() {
    let dir = tempdir().unwrap();
    let project = write_project(dir.path());

    infoprompt()
        .args(["render", project.to_str().unwrap(), "--style", "pixel_art"])
        .assert()
        .success()
        .stdout(predicate::str::contains("16-bit pixel art"));
}

#[test]
fn render_empty_project_warns_and_succeeds() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.toml");
    std::fs::write(&path, "purpose = \"education\"\n").unwrap();

    infoprompt()
        .args(["render", path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Nothing to render"));
}

#[test]
fn render_missing_file_fails() {
    infoprompt()
        .args(["render", "/nonexistent/project.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read project file"));
}

#[test]
fn render_invalid_ratio_is_usage_error() {
    let dir = tempdir().unwrap();
    let project = write_project(dir.path());

    infoprompt()
        .args(["render", project.to_str().unwrap(), "--ratio", "21:9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid aspect ratio"));
}

#[test]
fn share_round_trip() {
    let dir = tempdir().unwrap();
    let project = write_project(dir.path());

    let output = infoprompt()
        .args(["share", "encode", project.to_str().unwrap(), "--label", "Kopi"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let token = String::from_utf8(output.stdout).unwrap().trim().to_string();
    assert!(!token.is_empty());

    infoprompt()
        .args(["share", "decode", &token])
        .assert()
        .success()
        .stdout(predicate::str::contains("title = \"Sejarah Kopi\""))
        .stderr(predicate::str::contains("Kopi"));
}

#[test]
fn share_decode_garbage_is_ignored() {
    infoprompt()
        .args(["share", "decode", "!!!not-a-token!!!"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignoring invalid share token"));
}

#[test]
fn share_decode_to_file() {
    let dir = tempdir().unwrap();
    let project = write_project(dir.path());
    let out = dir.path().join("decoded.toml");

    let output = infoprompt()
        .args(["share", "encode", project.to_str().unwrap()])
        .output()
        .unwrap();
    let token = String::from_utf8(output.stdout).unwrap().trim().to_string();

    infoprompt()
        .args(["share", "decode", &token, "--out", out.to_str().unwrap()])
        .assert()
        .success();

    let decoded = std::fs::read_to_string(&out).unwrap();
    assert!(decoded.contains("title = \"Sejarah Kopi\""));
}

#[test]
fn history_lifecycle() {
    let home = tempdir().unwrap();
    let project = write_project(home.path());

    // Empty to start
    isolated(&home)
        .args(["history", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No history entries"));

    // Save
    isolated(&home)
        .args(["history", "save", project.to_str().unwrap(), "--name", "Draft Kopi"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Draft Kopi"));

    // List shows it
    let output = isolated(&home).args(["history", "list"]).output().unwrap();
    assert!(output.status.success());
    let listing = String::from_utf8(output.stdout).unwrap();
    assert!(listing.contains("Draft Kopi"));
    let id = listing
        .lines()
        .next()
        .unwrap()
        .split(':')
        .next()
        .unwrap()
        .trim()
        .to_string();

    // Show round-trips the project
    isolated(&home)
        .args(["history", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("title = \"Sejarah Kopi\""));

    // Delete
    isolated(&home)
        .args(["history", "delete", &id])
        .assert()
        .success();

    isolated(&home)
        .args(["history", "delete", &id])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No history entry"));

    // Clear succeeds on an empty store too
    isolated(&home).args(["history", "clear"]).assert().success();
}

#[test]
fn config_lifecycle() {
    let home = tempdir().unwrap();

    isolated(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Config file created"));

    // Second init fails
    isolated(&home)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    isolated(&home)
        .args(["config", "set", "visual_style", "pixel_art"])
        .assert()
        .success();

    isolated(&home)
        .args(["config", "get", "visual_style"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pixel_art"));

    // API keys are masked on display
    isolated(&home)
        .args(["config", "set", "api_key", "abcdefghijklmnop"])
        .assert()
        .success();
    isolated(&home)
        .args(["config", "get", "api_key"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abcd...mnop"))
        .stdout(predicate::str::contains("abcdefghijklmnop").not());

    isolated(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("model"))
        .stdout(predicate::str::contains("aspect_ratio"));

    isolated(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("infoprompt"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_rejects_unknown_key() {
    let home = tempdir().unwrap();
    isolated(&home)
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_rejects_bad_aspect_ratio() {
    let home = tempdir().unwrap();
    isolated(&home)
        .args(["config", "set", "aspect_ratio", "21:9"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid aspect ratio"));
}

#[test]
fn autofill_requires_a_source() {
    infoprompt().arg("autofill").assert().code(2);
}

#[test]
fn autofill_without_api_key_fails_fast() {
    let home = tempdir().unwrap();
    isolated(&home)
        .args(["autofill", "--topic", "sejarah kopi"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing API key"));
}
