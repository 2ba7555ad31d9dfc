// SPDX-License-Identifier: MIT

//! Lint runner — one tool invocation per compilation-database entry.
//!
//! [`Linter`] is the seam between the loop and the process that does the
//! actual analysis. [`ShellTool`] runs a real executable; tests plug in
//! an in-memory linter instead.

use std::io;
use std::path::PathBuf;
use std::process::Command;

use crate::database::CompileEntry;
use crate::report::LintReport;

/// Lints a single compilation-database entry.
pub trait Linter {
    /// Run the analysis. `Ok(true)` means the entry passed.
    ///
    /// # Errors
    ///
    /// Returns an error only if the analysis could not be run at all
    /// (e.g. the tool failed to spawn). Findings are `Ok(false)`.
    fn lint(&mut self, entry: &CompileEntry) -> io::Result<bool>;
}

/// An external tool invoked as `TOOL FILE -- COMMAND` through the shell.
///
/// The compiler command after `--` is passed verbatim, so quoting in the
/// database is interpreted by the shell exactly as the build would.
#[derive(Debug, Clone)]
pub struct ShellTool {
    tool: PathBuf,
}

impl ShellTool {
    /// Wrap the tool at `tool` (a path or a name looked up on `PATH`).
    #[must_use]
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }

    /// The command line handed to the shell for `entry`.
    #[must_use]
    pub fn command_line(&self, entry: &CompileEntry) -> String {
        format!(
            "{} {} -- {}",
            self.tool.display(),
            entry.file.display(),
            entry.command
        )
    }
}

impl Linter for ShellTool {
    fn lint(&mut self, entry: &CompileEntry) -> io::Result<bool> {
        let mut cmd = shell(&self.command_line(entry));
        if let Some(dir) = &entry.directory {
            cmd.current_dir(dir);
        }
        Ok(cmd.status()?.success())
    }
}

#[cfg(unix)]
fn shell(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}

#[cfg(windows)]
fn shell(line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(line);
    cmd
}

/// Lint every entry in order, calling `on_entry` before each one.
///
/// # Errors
///
/// Stops at and returns the first error from [`Linter::lint`].
pub fn run<L, F>(linter: &mut L, entries: &[CompileEntry], mut on_entry: F) -> io::Result<LintReport>
where
    L: Linter + ?Sized,
    F: FnMut(&CompileEntry),
{
    let mut report = LintReport::new();
    for entry in entries {
        on_entry(entry);
        let passed = linter.lint(entry)?;
        report.record(&entry.file, passed);
    }
    Ok(report)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn entry(file: &str) -> CompileEntry {
        CompileEntry {
            directory: None,
            file: PathBuf::from(file),
            command: format!("c++ -c {file}"),
        }
    }

    /// Fails any file whose name contains "bad"; records every call.
    #[derive(Default)]
    struct FakeLinter {
        calls: Vec<PathBuf>,
    }

    impl Linter for FakeLinter {
        fn lint(&mut self, entry: &CompileEntry) -> io::Result<bool> {
            self.calls.push(entry.file.clone());
            Ok(!entry.file.to_string_lossy().contains("bad"))
        }
    }

    struct BrokenLinter;

    impl Linter for BrokenLinter {
        fn lint(&mut self, _entry: &CompileEntry) -> io::Result<bool> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no such tool"))
        }
    }

    #[test]
    fn runs_entries_in_order() {
        let entries = [entry("a.cpp"), entry("bad.cpp"), entry("c.cpp")];
        let mut linter = FakeLinter::default();
        let mut announced = Vec::new();

        let report = run(&mut linter, &entries, |e| announced.push(e.file.clone())).unwrap();

        assert_eq!(linter.calls, announced);
        assert_eq!(report.checked, 3);
        assert_eq!(report.failed, vec![PathBuf::from("bad.cpp")]);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn all_passing() {
        let entries = [entry("a.cpp"), entry("b.cpp")];
        let report = run(&mut FakeLinter::default(), &entries, |_| {}).unwrap();
        assert!(report.passed());
    }

    #[test]
    fn spawn_errors_propagate() {
        let entries = [entry("a.cpp")];
        let err = run(&mut BrokenLinter, &entries, |_| {}).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn works_through_trait_object() {
        let entries = [entry("bad.cpp")];
        let mut linter: Box<dyn Linter> = Box::new(FakeLinter::default());
        let report = run(linter.as_mut(), &entries, |_| {}).unwrap();
        assert_eq!(report.failed.len(), 1);
    }

    #[test]
    fn command_line_layout() {
        let tool = ShellTool::new("/usr/bin/clang-tidy");
        assert_eq!(
            tool.command_line(&entry("src/a.cpp")),
            "/usr/bin/clang-tidy src/a.cpp -- c++ -c src/a.cpp"
        );
    }

    #[cfg(unix)]
    #[test]
    fn shell_tool_exit_status() {
        let entries = [entry("a.cpp")];
        let pass = run(&mut ShellTool::new("true"), &entries, |_| {}).unwrap();
        assert!(pass.passed());

        let fail = run(&mut ShellTool::new("false"), &entries, |_| {}).unwrap();
        assert_eq!(fail.failed, vec![Path::new("a.cpp").to_path_buf()]);
    }

    #[cfg(unix)]
    #[test]
    fn shell_tool_uses_entry_directory() {
        let dir = std::env::temp_dir().join("realgen_lint_test_cwd");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("marker.cpp"), "").unwrap();

        // The inner script receives the entry's file as $0.
        let mut tool = ShellTool::new(r#"sh -c 'test -f "$0"'"#);
        let mut e = entry("marker.cpp");
        assert!(!tool.lint(&e).unwrap());

        e.directory = Some(dir.clone());
        assert!(tool.lint(&e).unwrap());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
