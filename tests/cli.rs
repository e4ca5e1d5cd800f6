mod common;

use common::synthetic_image::file_names;
use serde_json::json;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

fn run_cli<S: AsRef<OsStr>>(args: &[S]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quant-calib-data"))
        .args(args)
        .output()
        .expect("binary runs")
}

fn write_config(dir: &Path, generator: serde_json::Value) -> std::path::PathBuf {
    let path = dir.join("config.json");
    let config = json!({ "generator": generator, "output": { "progress": false } });
    std::fs::write(&path, config.to_string()).unwrap();
    path
}

#[test]
fn missing_output_dir_exits_non_zero() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("lenet_quant_data");
    let config = write_config(root.path(), json!({ "output_dir": missing, "count": 3 }));

    let out = run_cli(&[&config]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
    assert!(stderr.contains("does not exist"), "stderr: {stderr}");
    assert!(!missing.exists());
    assert_eq!(file_names(root.path()), vec!["config.json"]);
}

#[test]
fn zero_count_exits_successfully() {
    let root = tempfile::tempdir().unwrap();
    let out_dir = root.path().join("out");
    std::fs::create_dir(&out_dir).unwrap();
    let config = write_config(root.path(), json!({ "output_dir": out_dir, "count": 0 }));

    let out = run_cli(&[&config]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(file_names(&out_dir).is_empty());
}

#[test]
fn config_run_writes_requested_files() {
    let root = tempfile::tempdir().unwrap();
    let out_dir = root.path().join("out");
    std::fs::create_dir(&out_dir).unwrap();
    let config = write_config(
        root.path(),
        json!({ "output_dir": out_dir, "count": 3, "seed": 1 }),
    );

    let out = run_cli(&[&config]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(file_names(&out_dir), vec!["0.jpg", "1.jpg", "2.jpg"]);
}

#[test]
fn two_positional_arguments_exit_non_zero() {
    let out = run_cli(&[Path::new("a.json"), Path::new("b.json")]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage:"), "stderr: {stderr}");
}

#[test]
fn help_prints_usage_and_exits_zero() {
    let out = run_cli(&[Path::new("--help")]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Usage:"), "stdout: {stdout}");
    assert!(out.stderr.is_empty());
}

#[test]
fn unreadable_config_exits_non_zero() {
    let root = tempfile::tempdir().unwrap();
    let out = run_cli(&[&root.path().join("absent.json")]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Failed to read config"), "stderr: {stderr}");
}
