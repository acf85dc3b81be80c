use assert_cmd::prelude::*;
use serde_json::{Value, json};
use std::process::Command;
use tempfile::TempDir;

fn sconf(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sconf"));
    cmd.current_dir(dir.path())
        .env_remove("SCONF__DEFAULTS__LOCALE")
        .env_remove("SCONF__DEFAULTS__APPEARANCE")
        .env_remove("SCONF__MODE");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().clone();
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn defaults_without_settings_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    assert_eq!(
        stdout_json(sconf(&dir).arg("defaults")),
        json!({ "appearance": "light", "locale": "en-US", "version": 1.0 })
    );
    Ok(())
}

#[test]
fn implicit_settings_file_is_picked_up() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("sconf.toml"),
        "[defaults]\nappearance = \"dark\"\nlocale = \"de-DE\"\n",
    )?;

    let value = stdout_json(sconf(&dir).args(["check", "--payload", r#"{"appearance":"nope"}"#]));
    assert_eq!(value["config"], json!({ "appearance": "dark", "locale": "de-DE", "version": 1.0 }));
    Ok(())
}

#[test]
fn environment_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let value =
        stdout_json(sconf(&dir).env("SCONF__DEFAULTS__LOCALE", "id-ID").arg("defaults"));
    assert_eq!(value["locale"], "id-ID");
    Ok(())
}

#[test]
fn settings_mode_can_be_strict() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let settings = dir.path().join("ingest.json");
    std::fs::write(&settings, r#"{"mode":"strict"}"#)?;

    sconf(&dir)
        .arg("check")
        .arg("--settings")
        .arg(&settings)
        .args(["--payload", r#"{"appearance":"BLUE"}"#])
        .assert()
        .code(4);
    Ok(())
}
