//! End-to-end test for the catalog generator binary.
//!
//! Runs the real binary in a temporary working directory and reads back the
//! document it writes.
#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;

#[test]
fn writes_the_catalog_document() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let mut cmd = Command::cargo_bin("cli")?;
    cmd.current_dir(dir.path());
    cmd.assert().success();

    let written = std::fs::read_to_string(dir.path().join("out").join("6502.json"))?;
    let document: Value = serde_json::from_str(&written)?;
    let elements = document.as_array().unwrap();
    assert_eq!(elements.len(), 56);

    let lda = elements
        .iter()
        .find(|element| element["name"] == "LDA")
        .unwrap();
    assert_eq!(lda["flags"], serde_json::json!(["negative", "zero"]));
    assert_eq!(lda["operands"].as_array().unwrap().len(), 8);
    Ok(())
}

#[test]
fn rerun_replaces_previous_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    std::fs::create_dir(dir.path().join("out"))?;
    std::fs::write(dir.path().join("out").join("6502.json"), "stale")?;

    let mut cmd = Command::cargo_bin("cli")?;
    cmd.current_dir(dir.path());
    cmd.assert().success();

    let written = std::fs::read_to_string(dir.path().join("out").join("6502.json"))?;
    assert!(serde_json::from_str::<Value>(&written).is_ok());
    Ok(())
}

#[test]
fn fails_when_the_destination_is_blocked() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    // A plain file where the output directory should go.
    std::fs::write(dir.path().join("out"), "in the way")?;

    let mut cmd = Command::cargo_bin("cli")?;
    cmd.current_dir(dir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to write out/6502.json"));
    Ok(())
}
