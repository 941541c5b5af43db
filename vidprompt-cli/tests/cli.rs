use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

const TS: &str = "2025-01-01T00:00:00.000Z";

#[test]
fn render_preset_as_yaml() {
    let mut cmd = cargo_bin_cmd!("vidprompt");
    cmd.args(["render", "--preset", "product-showcase", "--format", "yaml"])
        .args(["--timestamp", TS]);

    let output_pred = predicate::str::starts_with("# Video Prompt Configuration")
        .and(predicate::str::contains("  name: pika"))
        .and(predicate::str::contains("  duration: 6"))
        .and(predicate::str::contains("  preset: product-showcase"))
        .and(predicate::str::contains(format!("# Generated: {}", TS)));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn render_marks_user_edits_in_markdown() {
    let mut cmd = cargo_bin_cmd!("vidprompt");
    cmd.args(["render", "-p", "product-showcase", "-f", "markdown"])
        .args(["--set", "duration=12", "--set", "seed=42"])
        .args(["--timestamp", TS]);

    let output_pred = predicate::str::contains("- **duration:** 12 *(user, modified)*")
        .and(predicate::str::contains("- **seed:** 42 *(user, modified)*"))
        .and(predicate::str::contains(
            "- **fps:** 30 *(preset: product-showcase)*",
        ))
        .and(predicate::str::contains("## Field Provenance"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn render_natural_in_utc() {
    let mut cmd = cargo_bin_cmd!("vidprompt");
    cmd.args(["render", "--preset", "product-showcase", "--format", "natural"])
        .args(["--timestamp", TS, "--utc"]);

    cmd.assert().success().stdout(predicate::str::contains(
        "This video prompt was created for the pika model using the \"product-showcase\" preset on 1/1/2025, 12:00:00 AM.",
    ));
}

#[test]
fn render_all_formats() {
    let mut cmd = cargo_bin_cmd!("vidprompt");
    cmd.args(["render", "--format", "all", "--timestamp", TS]);

    let output_pred = predicate::str::contains("## JSON")
        .and(predicate::str::contains("## YAML"))
        .and(predicate::str::contains("## MARKDOWN"))
        .and(predicate::str::contains("## NATURAL"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn render_with_intent_as_json() {
    let mut cmd = cargo_bin_cmd!("vidprompt");
    cmd.args(["render", "--preset", "cinematic-hero-shot", "--intent", "sci-fi-chase"])
        .args(["--format", "json", "--timestamp", TS]);

    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim_end()).unwrap();

    assert_eq!(value["intentId"], "sci-fi-chase");
    assert_eq!(value["parameters"]["fps"], 120);
    assert_eq!(value["provenance"]["fps"]["source"], "intent");
    assert_eq!(value["provenance"]["fps"]["origin"], "sci-fi-chase");
}

#[test]
fn render_from_saved_state() {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("temp file");
    write!(
        file,
        r#"{{"prompt":"A cat video","model":"sora","parameters":{{"duration":10}},"metadata":{{"timestamp":"{}","version":"1.0.0"}},"provenance":{{}}}}"#,
        TS
    )
    .expect("write state");

    let mut cmd = cargo_bin_cmd!("vidprompt");
    cmd.arg("render")
        .arg("--input")
        .arg(file.path())
        .args(["--format", "yaml", "--timestamp", "2025-06-01T08:00:00.000Z"]);

    let output_pred = predicate::str::contains("  A cat video")
        .and(predicate::str::contains("  name: sora"))
        .and(predicate::str::contains("  duration: 10"))
        .and(predicate::str::contains("  timestamp: 2025-06-01T08:00:00.000Z"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn render_unknown_preset_fails() {
    let mut cmd = cargo_bin_cmd!("vidprompt");
    cmd.args(["render", "--preset", "does-not-exist"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset: does-not-exist"));
}

#[test]
fn render_bad_assignment_fails() {
    let mut cmd = cargo_bin_cmd!("vidprompt");
    cmd.args(["render", "--set", "=12"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid parameter assignment"));
}

#[test]
fn render_missing_input_fails() {
    let mut cmd = cargo_bin_cmd!("vidprompt");
    cmd.args(["render", "--input", "/definitely/not/here.json"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn config_file_sets_default_format() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "[output]\ndefault_format = \"yaml\"").expect("write config");

    let mut cmd = cargo_bin_cmd!("vidprompt");
    cmd.arg("--config")
        .arg(file.path())
        .args(["render", "--timestamp", TS]);

    cmd.assert().success().stdout(predicate::str::starts_with(
        "# Video Prompt Configuration",
    ));
}

#[test]
fn list_presets_by_category() {
    let mut cmd = cargo_bin_cmd!("vidprompt");
    cmd.args(["presets", "--category", "documentary"]);

    let output_pred = predicate::str::contains("observational-documentary")
        .and(predicate::str::contains("cinematic-hero-shot").not());

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn list_intents() {
    let mut cmd = cargo_bin_cmd!("vidprompt");
    cmd.arg("intents");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sci-fi-chase"));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("vidprompt");
    cmd.arg("formats");

    let output_pred = predicate::str::contains("json")
        .and(predicate::str::contains("yaml"))
        .and(predicate::str::contains("markdown"))
        .and(predicate::str::contains("natural"));

    cmd.assert().success().stdout(output_pred);
}
