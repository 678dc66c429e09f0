#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch space for one test: a fake HOME (so no real config is read) and
/// a data directory inside it.
pub struct Sandbox {
    pub root: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn home(&self) -> &Path {
        self.root.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    /// `rollcall --data-dir <sandbox>` with HOME pointing into the sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("rollcall");
        cmd.env("HOME", self.home())
            .env("APPDATA", self.home())
            .env("RUST_LOG", "warn")
            .arg("--data-dir")
            .arg(self.data_dir());
        cmd
    }

    /// Write `content` to a file in the sandbox and return its path.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn students_json(&self) -> serde_json::Value {
        read_json(&self.data_dir().join("students.json"))
    }

    pub fn history_json(&self) -> serde_json::Value {
        read_json(&self.data_dir().join("history.json"))
    }

    /// Import a small class of three students.
    pub fn with_class(&self) -> &Self {
        let roster = self.file("class.txt", "Alice\nBob\nCarol\n");
        self.cmd().arg("import").arg(&roster).assert().success();
        self
    }
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(path).expect("read json document");
    serde_json::from_str(&raw).expect("parse json document")
}
