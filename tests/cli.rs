// バイナリの終了コードの結合テスト

use std::path::PathBuf;
use std::process::{Command, Output};

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn fixture(name: &str) -> PathBuf {
    manifest_dir().join("tests/fixtures").join(name)
}

fn run(bin: &str, args: &[PathBuf]) -> Output {
    Command::new(bin)
        .args(args)
        .current_dir(manifest_dir())
        .output()
        .unwrap()
}

#[test]
fn test_check_accepts_valid_config() {
    let out = run(env!("CARGO_BIN_EXE_check"), &[fixture("collection.yaml")]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stdout));
    assert!(String::from_utf8_lossy(&out.stdout).contains("違反は見つかりませんでした"));
}

#[test]
fn test_check_exits_1_on_violations() {
    let out = run(env!("CARGO_BIN_EXE_check"), &[fixture("broken/collection.yaml")]);
    assert_eq!(out.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("8 件の違反"), "{}", stdout);
    assert!(stdout.contains("max_supply must be greater than zero"));
}

#[test]
fn test_check_reads_repository_config_by_default() {
    let out = run(env!("CARGO_BIN_EXE_check"), &[]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stdout));
    assert!(String::from_utf8_lossy(&out.stdout).contains("Whitelist entries: 3"));
}

#[test]
fn test_summary_for_valid_config() {
    let out = run(env!("CARGO_BIN_EXE_nft-collection-config"), &[fixture("collection.yaml")]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Fixture Drop (FXD)"));
    assert!(stdout.contains("https://opensea.io/collection/fixture-drop"));
    assert!(stdout.contains("Whitelist: 2 addresses"));
}

#[test]
fn test_summary_fails_on_invalid_config() {
    let out = run(
        env!("CARGO_BIN_EXE_nft-collection-config"),
        &[fixture("broken/collection.yaml")],
    );
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("8 件の違反"));
}

#[test]
fn test_missing_config_file_fails() {
    let out = run(env!("CARGO_BIN_EXE_check"), &[fixture("nope.yaml")]);
    assert!(!out.status.success());
}
