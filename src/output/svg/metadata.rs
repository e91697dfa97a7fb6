//! Provenance footer printed under the chart.

/// Where the benchmark sources live, shown as the first footer line.
pub const DEFAULT_SOURCE: &str = "https://github.com/zooko/bench-allocators";

/// Commit hashes are shortened to this many characters.
pub const COMMIT_DISPLAY_LEN: usize = 12;

/// Optional provenance strings; empty strings count as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartMetadata {
    pub source: String,
    pub commit: Option<String>,
    pub git_status: Option<String>,
    pub cpu: Option<String>,
    pub os: Option<String>,
}

impl Default for ChartMetadata {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE)
    }
}

impl ChartMetadata {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            commit: None,
            git_status: None,
            cpu: None,
            os: None,
        }
    }

    #[must_use]
    pub fn with_commit(mut self, commit: Option<String>) -> Self {
        self.commit = commit;
        self
    }

    #[must_use]
    pub fn with_git_status(mut self, git_status: Option<String>) -> Self {
        self.git_status = git_status;
        self
    }

    #[must_use]
    pub fn with_cpu(mut self, cpu: Option<String>) -> Self {
        self.cpu = cpu;
        self
    }

    #[must_use]
    pub fn with_os(mut self, os: Option<String>) -> Self {
        self.os = os;
        self
    }

    /// Footer lines in display order. The source line is always first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Source: {}", self.source)];

        if let Some(commit) = present(self.commit.as_deref()) {
            let short: String = commit.chars().take(COMMIT_DISPLAY_LEN).collect();
            lines.push(format!("Commit: {short}"));
        }
        if let Some(status) = present(self.git_status.as_deref()) {
            lines.push(format!("Git status: {status}"));
        }
        if let Some(cpu) = present(self.cpu.as_deref()) {
            lines.push(format!("CPU: {cpu}"));
        }
        if let Some(os) = present(self.os.as_deref()) {
            lines.push(format!("OS: {os}"));
        }

        lines
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "metadata_tests.rs"]
mod tests;
