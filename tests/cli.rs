use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

fn deck(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("deck").expect("bin");
    cmd.current_dir(root)
        .env("XDG_CONFIG_HOME", root.join("config"))
        .env("DECK_LOG_FILE", root.join("logs/deck.log"))
        .env_remove("DECK_CONTENT")
        .env_remove("RUST_LOG");
    cmd
}

const TALK_TOML: &str = r#"
title = "Quarterly Review"
subtitle = "Platform team"
footer = "internal"

[[mainNav]]
id = "intro"
label = "Intro"

[[mainNav]]
id = "numbers"
label = "Numbers"

[[sections]]
id = "intro"
subNav = [{ id = "p1", label = "Goals" }, { id = "p2", label = "Team" }]

[[sections.slides]]
id = "p1"
heading = "Our goals"
body = "- ship it"

[[sections.slides]]
id = "p2"
heading = "Who we are"

[[sections]]
id = "numbers"
subNav = [{ id = "n1", label = "Latency" }, { id = "n9", label = "Missing" }]

[[sections.slides]]
id = "n1"
heading = "p99 latency"
"#;

#[test]
fn render_default_deck() {
    let tmp = tempfile::tempdir().unwrap();
    deck(tmp.path())
        .args(["render", "--width", "100", "--height", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A terminal presentation viewer"))
        .stdout(predicate::str::contains("Welcome to deck"))
        .stdout(predicate::str::contains("Overview › Welcome"));
    assert!(tmp.path().join("logs/deck.log").exists());
}

#[test]
fn render_selected_tab_from_toml_file() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join("talk.toml"), TALK_TOML).unwrap();
    deck(root)
        .args(["render", "--content", "talk.toml", "--sub", "p2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quarterly Review"))
        .stdout(predicate::str::contains("Who we are"))
        .stdout(predicate::str::contains("Our goals").not());
}

#[test]
fn render_unknown_tab_shows_only_chrome() {
    let tmp = tempfile::tempdir().unwrap();
    deck(tmp.path())
        .args(["render", "--tab", "nowhere", "--no-help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overview"))
        .stdout(predicate::str::contains("Welcome to deck").not());
}

#[test]
fn dump_json_uses_camel_case() {
    let tmp = tempfile::tempdir().unwrap();
    deck(tmp.path())
        .args(["render", "--dump-json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mainNav\""))
        .stdout(predicate::str::contains("\"subNav\""));
}

#[test]
fn check_reports_dangling_sub_tab() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join("talk.toml"), TALK_TOML).unwrap();
    deck(root)
        .args(["check", "--content", "talk.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quarterly Review: 2 sections, 3 slides"))
        .stdout(predicate::str::contains("warning: sub tab n9 in section numbers has no matching slide"));
}

#[test]
fn check_rejects_duplicate_sections() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::write(
        root.join("dup.json"),
        r#"{"title": "t", "mainNav": [{"id": "a", "label": "A"}], "sections": [{"id": "a"}, {"id": "a"}]}"#,
    )
    .unwrap();
    deck(root)
        .args(["check", "--content", "dup.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate section id: a"));
}

#[test]
fn missing_content_file_fails() {
    let tmp = tempfile::tempdir().unwrap();
    deck(tmp.path())
        .env("DECK_CONTENT", "nope.json")
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn check_logs_content_source_and_command() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join("talk.toml"), TALK_TOML).unwrap();
    deck(root)
        .args(["check", "--content", "talk.toml"])
        .assert()
        .success();
    let log = fs::read_to_string(root.join("logs/deck.log")).unwrap();
    assert!(log.contains("content from talk.toml"));
    assert!(log.contains("running check"));
}
