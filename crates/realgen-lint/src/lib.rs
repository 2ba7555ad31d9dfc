// SPDX-License-Identifier: MIT

//! # realgen-lint — static-analysis runner for CI
//!
//! Runs an external analysis tool (typically `clang-tidy`) once per entry of
//! a JSON compilation database and aggregates the verdicts:
//!
//! - **[`database`]** — `compile_commands.json` loading into [`CompileEntry`]
//! - **[`runner`]** — the [`Linter`] seam and the sequential [`run`] loop
//! - **[`report`]** — pass/fail aggregation and exit code
//!
//! Entries are linted one at a time; the runner never spawns more than one
//! tool process.

pub mod database;
pub mod report;
pub mod runner;

pub use database::{CompileEntry, LintError, load_database, parse_database};
pub use report::LintReport;
pub use runner::{Linter, ShellTool, run};
