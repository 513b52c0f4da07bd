#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_prostata-report"))
        .args(args)
        .output()
        .expect("spawn prostata-report")
}

fn write_manifest(file: &str, yaml: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{}-{file}", std::process::id()));
    fs::write(&path, yaml).unwrap();
    path
}

#[test]
fn help_prints_usage_and_succeeds() {
    let out = run(&["--help"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains("--json"));
    assert!(stdout.contains("<MANIFEST>"));
}

#[test]
fn unknown_flag_is_rejected_with_usage() {
    let out = run(&["m.yaml", "--jsn"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("--jsn"));
    assert!(stderr.contains("Usage"));
}

#[test]
fn missing_manifest_argument_is_rejected() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn prints_text_report() {
    let path = write_manifest(
        "text.yaml",
        "version: 1\ncounters:\n  - name: hits\n    value: 3\n",
    );
    let out = run(&[path.to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout, "[counters]\nhits  hits  3 item\n");
    fs::remove_file(path).ok();
}

#[test]
fn prints_json_report() {
    let path = write_manifest(
        "json.yaml",
        "version: 1\nattributes:\n  - name: host\n    value: db01\n",
    );
    let out = run(&[path.to_str().unwrap(), "--json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["attributes"][0]["value"], "db01");
    fs::remove_file(path).ok();
}

#[test]
fn bad_manifest_fails() {
    let path = write_manifest("bad.yaml", "version: 2\n");
    let out = run(&[path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("unsupported manifest version 2"));
    fs::remove_file(path).ok();
}
