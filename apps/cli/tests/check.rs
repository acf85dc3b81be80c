use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::process::Command;
use tempfile::TempDir;

/// Runs `sconf` in an empty directory so no stray `sconf.*` settings file is picked up.
fn sconf(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sconf"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn check_prints_config_and_view() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let output = sconf(&dir)
        .args(["check", "--payload", r#"{"appearance":"dark","locale":"id-ID"}"#])
        .assert()
        .success()
        .get_output()
        .clone();

    assert_eq!(
        stdout_json(&output),
        json!({
            "config": { "appearance": "dark", "locale": "id-ID", "version": 1.0 },
            "view": { "style": "DARK", "code": "id" }
        })
    );
    Ok(())
}

#[test]
fn check_reads_stdin_and_falls_back() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let output = assert_cmd::Command::from_std(sconf(&dir))
        .arg("check")
        .write_stdin(r#"{"appearance":"BLUE","evil":1}"#)
        .assert()
        .success()
        .get_output()
        .clone();

    let value = stdout_json(&output);
    assert_eq!(value["config"], json!({ "appearance": "light", "locale": "en-US", "version": 1.0 }));
    assert!(value["config"].get("evil").is_none());
    Ok(())
}

#[test]
fn check_reads_payload_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let payload = dir.path().join("payload.json");
    std::fs::write(&payload, r#"{"locale":"fr-FR"}"#)?;

    sconf(&dir)
        .arg("check")
        .arg("--file")
        .arg(&payload)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""code": "fr""#));
    Ok(())
}

#[test]
fn pollution_exits_with_code_3() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let output = sconf(&dir)
        .args(["check", "--payload", r#"{"__proto__":{"polluted":true}}"#])
        .assert()
        .code(3)
        .get_output()
        .clone();

    let value = stdout_json(&output);
    assert_eq!(value["error"]["kind"], "PollutionError");
    assert!(value["error"]["message"].as_str().is_some_and(|m| m.contains("__proto__")));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("polluted"));
    Ok(())
}

#[test]
fn malformed_payload_exits_with_code_2() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    sconf(&dir)
        .args(["check", "--payload", "{appearance:"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(r#""kind": "ParseError""#));
    Ok(())
}

#[test]
fn strict_mode_exits_with_code_4() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    sconf(&dir)
        .args(["check", "--strict", "--payload", r#"{"locale":"secret-value"}"#])
        .assert()
        .code(4)
        .stdout(predicate::str::contains("ValidationError"))
        .stdout(predicate::str::contains("secret-value").not())
        .stderr(predicate::str::contains("secret-value").not());
    Ok(())
}

#[test]
fn verbose_logs_never_contain_payload_values() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    sconf(&dir)
        .args(["--verbose", "check", "--payload", r#"{"pass":"hunter2","appearance":"neon"}"#])
        .assert()
        .success()
        .stderr(predicate::str::contains("REDACTED"))
        .stderr(predicate::str::contains("hunter2").not())
        .stderr(predicate::str::contains("neon").not());
    Ok(())
}

#[test]
fn missing_payload_file_exits_with_code_1() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    sconf(&dir)
        .args(["check", "--file", "does-not-exist.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("IoError"));
    Ok(())
}

#[test]
fn missing_settings_file_exits_with_code_1() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    sconf(&dir)
        .args(["check", "--settings", "nope.toml", "--payload", "{}"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ConfigError"));
    Ok(())
}

#[test]
fn invalid_utf8_payload_is_a_parse_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let payload = dir.path().join("bad.json");
    std::fs::write(&payload, b"{\"appearance\":\"\xff\"}")?;

    sconf(&dir)
        .arg("check")
        .arg("--file")
        .arg(&payload)
        .assert()
        .code(2)
        .stdout(predicate::str::contains(r#""kind": "ParseError""#));

    assert_cmd::Command::from_std(sconf(&dir))
        .arg("check")
        .write_stdin(&b"\xfe\xff{}"[..])
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn json_logs_are_json_lines_on_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let output = sconf(&dir)
        .args(["--json-logs", "check", "--payload", r#"{"__proto__":1}"#])
        .assert()
        .code(3)
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr)?;
    assert!(!stderr.trim().is_empty(), "expected a warning for the rejected payload");
    for line in stderr.lines().filter(|line| !line.is_empty()) {
        assert!(line.starts_with('{'), "not a JSON line: {line}");
        serde_json::from_str::<Value>(line)?;
    }
    Ok(())
}

#[test]
fn max_depth_from_environment_limits_nesting() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let payload = r#"{"evil":{"a":{"b":1}}}"#;

    sconf(&dir).args(["check", "--payload", payload]).assert().success();
    sconf(&dir)
        .env("SCONF__MAX_DEPTH", "1")
        .args(["check", "--payload", payload])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("PollutionError"));
    Ok(())
}

#[test]
fn log_dir_receives_redacted_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let log_dir = dir.path().join("logs");

    sconf(&dir)
        .arg("--verbose")
        .arg("--log-dir")
        .arg(&log_dir)
        .args(["--log-rotation", "never", "check", "--payload", r#"{"locale":"xx_secret"}"#])
        .assert()
        .success();

    let contents = std::fs::read_to_string(log_dir.join("sconf.log"))?;
    assert!(contents.contains("Payload accepted"));
    assert!(contents.contains("REDACTED"));
    assert!(!contents.contains("xx_secret"));
    Ok(())
}
