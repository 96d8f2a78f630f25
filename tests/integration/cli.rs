//! Runs the `uplink` binary against fixture files

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

use super::helpers::*;

fn uplink(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_uplink"))
        .args(args)
        .current_dir(dir)
        .env_remove("UPLINK_CONFIG")
        .env_remove("UPLINK_LOG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run uplink binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_encode_to_stdout() {
    let (dir, _) = library_dir();
    write_file(dir.path(), "batch.txt", "CMD100 45\nCMD000MODE SAFE\nCMD100 10\n");

    let output = uplink(
        dir.path(),
        &["--catalog", "library.json", "encode", "batch.txt"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "100 45\nSAFE 100 10\n");
}

#[test]
fn test_encode_uses_config_file() {
    let (dir, _) = library_dir();
    write_file(
        dir.path(),
        "uplink.toml",
        "catalog = \"library.json\"\noutput = \"out/wire.txt\"\n",
    );
    write_file(dir.path(), "batch.txt", "CMD050\n");

    let output = uplink(dir.path(), &["encode", "batch.txt"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        fs::read_to_string(dir.path().join("out/wire.txt")).unwrap(),
        "50\n"
    );
}

#[test]
fn test_encode_warnings_and_strict_mode() {
    let (dir, _) = library_dir();
    write_file(dir.path(), "batch.txt", "CMD100 45\nCMD404 1\n");

    let lenient = uplink(
        dir.path(),
        &["--catalog", "library.json", "encode", "batch.txt"],
    );
    assert!(lenient.status.success());
    assert_eq!(stdout(&lenient), "100 45\n");
    assert!(stderr(&lenient).contains("unknown command 'CMD404'"));

    let strict = uplink(
        dir.path(),
        &[
            "--catalog",
            "library.json",
            "encode",
            "batch.txt",
            "--strict",
            "-o",
            "wire.txt",
        ],
    );
    assert!(!strict.status.success());
    assert!(!dir.path().join("wire.txt").exists());
}

#[test]
fn test_render_command() {
    let (dir, _) = library_dir();

    let output = uplink(
        dir.path(),
        &["--catalog", "library.json", "render", "CMD210", " hello there "],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "CMD210 \"hello there\"\n");
}

#[test]
fn test_show_unknown_command_fails() {
    let (dir, _) = library_dir();

    let output = uplink(dir.path(), &["--catalog", "library.json", "show", "CMD999"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown command 'CMD999'"));
}

#[test]
fn test_list_and_check() {
    let (dir, _) = library_dir();

    let list = uplink(dir.path(), &["--catalog", "library.json", "list"]);
    assert!(list.status.success());
    let text = stdout(&list);
    let adcs = text.find("ADCS").unwrap();
    let storage = text.find("Storage").unwrap();
    assert!(adcs < storage, "families should be alphabetical:\n{text}");

    let check = uplink(dir.path(), &["--catalog", "library.json", "check"]);
    assert!(check.status.success());
    assert!(stdout(&check).contains("4 command(s), 1 argument block(s)"));
}

#[test]
fn test_missing_catalog_is_reported() {
    let dir = TempDir::new().unwrap();

    let output = uplink(dir.path(), &["list"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("No command catalog configured"));
}
