// SPDX-License-Identifier: MIT

//! Lint report — aggregated verdicts for one run.

use std::path::{Path, PathBuf};

/// Outcome of linting every entry of a compilation database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    /// Number of entries the tool was run on.
    pub checked: usize,
    /// Files whose tool run did not succeed, in run order.
    pub failed: Vec<PathBuf>,
}

impl LintReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one verdict.
    pub fn record(&mut self, file: &Path, passed: bool) {
        self.checked += 1;
        if !passed {
            self.failed.push(file.to_path_buf());
        }
    }

    /// True if every checked entry passed.
    #[inline]
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failed.is_empty()
    }

    /// Process exit status for CI: 0 when everything passed, 1 otherwise.
    #[inline]
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.passed())
    }

    /// One-line summary, or `None` when everything passed.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        if self.passed() {
            None
        } else {
            Some(format!("{} files did not pass linting!", self.failed.len()))
        }
    }
}
