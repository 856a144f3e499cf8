#![forbid(unsafe_code)]

use std::process::Command;

fn temp_dir(test_name: &str) -> std::path::PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = base.join(format!("fc_api_cli_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn cli_help_exits_zero_and_does_not_create_store() {
    let exe = env!("CARGO_BIN_EXE_fc_api");
    let dir = temp_dir("help");

    let output = Command::new(exe)
        .arg("--help")
        .env_remove("FC_STORAGE_DIR")
        .current_dir(&dir)
        .output()
        .expect("run fc_api --help");

    assert!(
        output.status.success(),
        "expected zero exit (stderr={})",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "help must include usage");
    assert!(stdout.contains("--storage-dir"));
    assert!(
        !dir.join(".franchise_catalog").exists(),
        "--help should not create the storage dir"
    );
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn cli_version_exits_zero_and_includes_pkg_version() {
    let exe = env!("CARGO_BIN_EXE_fc_api");
    let output = Command::new(exe)
        .arg("--version")
        .output()
        .expect("run fc_api --version");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("fc_api"), "got={stdout}");
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "version output must include crate version (got={stdout})"
    );
}

fn startup_log(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_fc_api"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("FC_STORAGE_DIR")
        .stdin(std::process::Stdio::null())
        .output()
        .expect("run fc_api");
    assert!(
        output.status.success(),
        "expected zero exit (stderr={})",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty(), "no requests means no responses");
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn startup_log_names_storage_dir_only_when_on_disk() {
    let stderr = startup_log(&["--in-memory"]);
    assert!(stderr.contains("in_memory"), "got={stderr}");
    assert!(!stderr.contains("storage_dir"), "got={stderr}");

    let dir = temp_dir("startup_log");
    let dir_arg = dir.to_string_lossy().to_string();
    let stderr = startup_log(&["--storage-dir", &dir_arg]);
    assert!(stderr.contains("storage_dir"), "got={stderr}");
    assert!(dir.join("franchise_catalog.db").exists());
    let _ = std::fs::remove_dir_all(&dir);
}
