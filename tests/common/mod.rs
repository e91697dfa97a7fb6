#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the locs-graph binary.
#[macro_export]
macro_rules! locs_graph {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("locs-graph"))
    };
}

/// Name of the report file written by `create_report`.
pub const REPORT_NAME: &str = "locs.txt";

/// Temporary working directory holding a report, optional config and chart output.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.join(relative_path)).expect("Failed to read file")
    }

    /// Writes `.locs-graph.toml` into the fixture directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".locs-graph.toml", content);
    }

    /// Writes `locs.txt` with one tokei section per `(header, code)` pair.
    pub fn create_report(&self, sections: &[(&str, u64)]) {
        let mut content = String::new();
        for (header, code) in sections {
            content.push_str(&tokei_section(header, *code));
        }
        self.create_file(REPORT_NAME, &content);
    }

    /// A command running inside the fixture, isolated from the user's config directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = locs_graph!();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.join("xdg"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// One allocator section as produced by running `tokei` under a header line.
pub fn tokei_section(header: &str, code: u64) -> String {
    let rule = "=".repeat(79);
    let lines = code + 40;
    let mut s = String::new();
    let _ = writeln!(s, "{header}");
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(
        s,
        " Language            Files        Lines         Code     Comments       Blanks"
    );
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(s, " C                      12 {lines:>12} {code:>12}           25           15");
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(s, " Total                  12 {lines:>12} {code:>12}           25           15");
    let _ = writeln!(s, "{rule}");
    let _ = writeln!(s);
    s
}
