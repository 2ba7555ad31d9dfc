// SPDX-License-Identifier: MIT

//! Compilation database — the `compile_commands.json` format.
//!
//! A JSON array of records, one per translation unit:
//!
//! ```json
//! [
//!   {
//!     "directory": "/build",
//!     "file": "/src/RealEngine/graphics/Font.cpp",
//!     "command": "/usr/bin/c++ -I/src -std=c++20 -c /src/RealEngine/graphics/Font.cpp"
//!   }
//! ]
//! ```
//!
//! Some generators write an `arguments` array instead of `command`; those
//! are joined into a single shell-quoted command line so every entry can be
//! handed to the tool the same way.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

// ---------------------------------------------------------------------------
// CompileEntry
// ---------------------------------------------------------------------------

/// One translation unit: which file, and how it is compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileEntry {
    /// Working directory of the compilation, if recorded.
    pub directory: Option<PathBuf>,
    /// The source file.
    pub file: PathBuf,
    /// Full compiler invocation as one shell command line.
    pub command: String,
}

/// On-disk shape before `command`/`arguments` are reconciled.
#[derive(Debug, Deserialize)]
struct RawEntry {
    directory: Option<PathBuf>,
    file: PathBuf,
    command: Option<String>,
    arguments: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from loading a compilation database.
#[derive(Debug)]
pub enum LintError {
    /// The database file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The contents are not a valid compilation database.
    Json(serde_json::Error),
    /// An entry has neither `command` nor `arguments`.
    MissingCommand { index: usize, file: PathBuf },
}

impl fmt::Display for LintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Json(e) => write!(f, "invalid compilation database: {e}"),
            Self::MissingCommand { index, file } => write!(
                f,
                "entry {index} ({}) has neither 'command' nor 'arguments'",
                file.display()
            ),
        }
    }
}

impl std::error::Error for LintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::MissingCommand { .. } => None,
        }
    }
}

impl From<serde_json::Error> for LintError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read and parse a compilation database file.
///
/// # Errors
///
/// Returns [`LintError::Io`] if the file cannot be read, or any error from
/// [`parse_database`].
pub fn load_database(path: &Path) -> Result<Vec<CompileEntry>, LintError> {
    let text = fs::read_to_string(path).map_err(|source| LintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_database(&text)
}

/// Parse compilation database JSON.
///
/// # Errors
///
/// Returns [`LintError::Json`] for malformed JSON or missing fields, and
/// [`LintError::MissingCommand`] for an entry without a command.
pub fn parse_database(json: &str) -> Result<Vec<CompileEntry>, LintError> {
    let raw: Vec<RawEntry> = serde_json::from_str(json)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let command = match (entry.command, entry.arguments) {
                (Some(command), _) => command,
                (None, Some(arguments)) => join_arguments(&arguments),
                (None, None) => {
                    return Err(LintError::MissingCommand {
                        index,
                        file: entry.file,
                    });
                }
            };
            Ok(CompileEntry {
                directory: entry.directory,
                file: entry.file,
                command,
            })
        })
        .collect()
}

/// Join an argument vector into a POSIX shell command line.
///
/// Arguments containing whitespace or quote characters are single-quoted;
/// embedded single quotes become `'\''`.
#[must_use]
pub fn join_arguments(arguments: &[String]) -> String {
    arguments
        .iter()
        .map(|arg| quote(arg))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(arg: &str) -> String {
    let needs_quotes =
        arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '\\'));
    if needs_quotes {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
