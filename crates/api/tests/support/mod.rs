#![forbid(unsafe_code)]
#![allow(dead_code)]

use serde_json::{Value, json};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

pub(crate) struct Server {
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: BufReader<ChildStdout>,
    storage_dir: Option<PathBuf>,
    cleanup_storage: bool,
    next_id: i64,
}

impl Server {
    pub(crate) fn start_in_memory() -> Self {
        Self::spawn(&["--in-memory"], None, false)
    }

    pub(crate) fn start(test_name: &str) -> Self {
        Self::start_with_storage_dir(temp_dir(test_name), true)
    }

    pub(crate) fn start_with_storage_dir(storage_dir: PathBuf, cleanup_storage: bool) -> Self {
        std::fs::create_dir_all(&storage_dir).expect("create storage dir");
        let dir = storage_dir.to_string_lossy().to_string();
        Self::spawn(&["--storage-dir", &dir], Some(storage_dir), cleanup_storage)
    }

    fn spawn(args: &[&str], storage_dir: Option<PathBuf>, cleanup_storage: bool) -> Self {
        let mut child = Command::new(env!("CARGO_BIN_EXE_fc_api"))
            .args(args)
            .env_remove("FC_STORAGE_DIR")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn fc_api");

        let stdin = child.stdin.take().expect("stdin");
        let stdout = BufReader::new(child.stdout.take().expect("stdout"));

        Self {
            child,
            stdin: Some(stdin),
            stdout,
            storage_dir,
            cleanup_storage,
            next_id: 0,
        }
    }

    pub(crate) fn send_raw(&mut self, line: &str) {
        self.send_bytes(line.as_bytes());
    }

    /// Writes `bytes` plus a newline as-is, without requiring valid UTF-8.
    pub(crate) fn send_bytes(&mut self, bytes: &[u8]) {
        let stdin = self.stdin.as_mut().expect("stdin open");
        stdin.write_all(bytes).expect("write request");
        stdin.write_all(b"\n").expect("write newline");
        stdin.flush().expect("flush request");
    }

    pub(crate) fn recv(&mut self) -> Value {
        let mut line = String::new();
        self.stdout.read_line(&mut line).expect("read response");
        assert!(!line.trim().is_empty(), "empty response line");
        serde_json::from_str(&line).expect("parse response json")
    }

    /// Sends one request and returns `(status, body)`, checking the id echo.
    pub(crate) fn call(&mut self, method: &str, path: &str, body: Value) -> (u16, Value) {
        self.next_id += 1;
        let id = self.next_id;
        self.send_raw(
            &json!({ "id": id, "method": method, "path": path, "body": body }).to_string(),
        );
        let resp = self.recv();
        assert_eq!(resp["id"], json!(id), "response id mismatch: {resp}");
        let status = resp["status"].as_u64().expect("status") as u16;
        (status, resp["body"].clone())
    }

    pub(crate) fn create(&mut self, path: &str, body: Value) -> i64 {
        let (status, body) = self.call("POST", path, body);
        assert_eq!(status, 201, "create at {path} failed: {body}");
        body["id"].as_i64().expect("created id")
    }

    /// Closes stdin and waits for a clean exit, keeping the storage dir.
    pub(crate) fn shutdown(mut self) -> PathBuf {
        self.cleanup_storage = false;
        let storage_dir = self.storage_dir.clone().expect("storage dir");
        drop(self.stdin.take());
        let status = self.child.wait().expect("wait fc_api");
        assert!(status.success(), "fc_api exited with {status}");
        storage_dir
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
        if self.cleanup_storage
            && let Some(dir) = &self.storage_dir
        {
            let _ = std::fs::remove_dir_all(dir);
        }
    }
}

pub(crate) fn temp_dir(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = base.join(format!("fc_api_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}
