use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_cli(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tokcursor"))
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("failed to run tokcursor binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn encode_then_decode_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = dir.path().join("config.toml");

    let encoded = run_cli(&config, &["encode", "key2: value2, key1: value1"]);
    assert!(encoded.status.success(), "encode failed: {encoded:?}");
    let raw = stdout(&encoded).trim().to_owned();

    let decoded = run_cli(&config, &["--output", "json", "decode", &raw, "-p", "-4"]);
    assert!(decoded.status.success(), "decode failed: {decoded:?}");
    let report: serde_json::Value = serde_json::from_slice(&decoded.stdout)?;
    assert_eq!(report["token"], "key2: value2, key1: value1");
    assert_eq!(report["raw_token"], raw.as_str());
    assert_eq!(report["page_size"], -4);
    assert_eq!(report["string"], "key1:value1,key2:value2");
    assert_eq!(report["key"], "key1,key2");
    Ok(())
}

#[test]
fn config_file_supplies_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = dir.path().join("config.toml");

    let init = run_cli(&config, &["config", "init"]);
    assert!(init.status.success(), "config init failed: {init:?}");
    assert!(fs::read_to_string(&config)?.contains("page_size = 50"));

    fs::write(&config, "page_size = 12\noutput = \"json\"\n")?;
    let decoded = run_cli(&config, &["decode", "azp2"]);
    assert!(decoded.status.success());
    let report: serde_json::Value = serde_json::from_slice(&decoded.stdout)?;
    assert_eq!(report["page_size"], 12);
    Ok(())
}

#[test]
fn key_command_ignores_values() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.toml");

    let a = run_cli(&config, &["key", "--plain", "b:1,a:2"]);
    let b = run_cli(&config, &["key", "--plain", "a:9, b:8, a:7"]);
    assert!(a.status.success() && b.status.success());
    assert_eq!(stdout(&a), "a,b\n");
    assert_eq!(stdout(&a), stdout(&b));
}

#[test]
fn malformed_tokens_fail() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.toml");

    let bad_b64 = run_cli(&config, &["decode", "not base64!"]);
    assert!(!bad_b64.status.success());
    assert!(String::from_utf8_lossy(&bad_b64.stderr).contains("not valid base64"));

    let bad_format = run_cli(&config, &["encode", "key2:va:lue2,key1:value1"]);
    assert!(!bad_format.status.success());
    assert!(String::from_utf8_lossy(&bad_format.stderr).contains("key2:va:lue2"));
}
