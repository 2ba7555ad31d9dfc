// SPDX-License-Identifier: MIT
//
// realgen — static code generators and CI helpers for the RealEngine build.
//
// This binary wires the workspace crates behind three subcommands:
//
//   swizzles → realgen-swizzle: enumerate patterns, render the header
//   check    → realgen-swizzle: parse an existing header, report staleness
//   lint     → realgen-lint:    run a tool over compile_commands.json
//
// Generated text goes to stdout (or the --output file). Everything meant
// for a human goes to stderr with a `realgen:` prefix, so the header can be
// redirected straight into a file by the build.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use realgen_lint::{ShellTool, load_database};
use realgen_swizzle::{Alphabets, check, enumerate, parse, render};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "realgen",
    version,
    about = "Static code generators and CI helpers for the RealEngine build"
)]
struct Cli {
    /// Only print errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print swizzle accessor macros (#define xyz xyz()) for every naming alphabet
    Swizzles {
        /// Write the header here instead of stdout. The file is left untouched
        /// when its content is already current.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Comma-separated alphabets to emit
        #[arg(long, default_value = "xyzw,rgba,stpq", value_parser = Alphabets::parse_list)]
        alphabets: Alphabets,
    },

    /// Verify that an existing swizzle header matches generated output
    Check {
        /// Header file to verify
        path: PathBuf,

        /// Comma-separated alphabets the header should contain
        #[arg(long, default_value = "xyzw,rgba,stpq", value_parser = Alphabets::parse_list)]
        alphabets: Alphabets,
    },

    /// Run a static-analysis tool over every entry of a compilation database
    Lint {
        /// Analysis tool, invoked as `TOOL FILE -- COMMAND`
        tool: PathBuf,

        /// JSON compilation database (compile_commands.json)
        database: PathBuf,
    },
}

// ─── Messages ───────────────────────────────────────────────────────────────

/// Stderr reporter. Informational lines honour `--quiet`; errors never do.
#[derive(Debug, Clone, Copy)]
struct Log {
    quiet: bool,
}

impl Log {
    fn info(self, msg: impl AsRef<str>) {
        if !self.quiet {
            eprintln!("realgen: {}", msg.as_ref());
        }
    }

    fn error(self, msg: impl AsRef<str>) {
        eprintln!("realgen: {}", msg.as_ref());
    }
}

// ─── Subcommands ────────────────────────────────────────────────────────────

/// `realgen swizzles`
fn swizzles(output: Option<&Path>, alphabets: Alphabets, log: Log) -> Result<i32> {
    let set = enumerate::generate();

    let Some(path) = output else {
        let mut stdout = io::stdout().lock();
        render::write_header(&mut stdout, &set, alphabets).context("failed to write header")?;
        return Ok(0);
    };

    let text = render::render(&set, alphabets);
    let changed = write_if_changed(path, &text)
        .with_context(|| format!("failed to write {}", path.display()))?;
    if changed {
        log.info(format!("wrote {} ({} macros)", path.display(), macro_count(&text)));
    } else {
        log.info(format!("{} is up to date", path.display()));
    }
    Ok(0)
}

/// `realgen check`
fn check_header(path: &Path, alphabets: Alphabets, log: Log) -> Result<i32> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;

    let set = enumerate::generate();
    if text == render::render(&set, alphabets) {
        log.info(format!("{} is up to date", path.display()));
        return Ok(0);
    }

    let header =
        parse::parse_header(&text).with_context(|| format!("cannot parse {}", path.display()))?;
    let found = check::compare(&header, &set, alphabets);
    if found.is_empty() {
        log.error(format!(
            "{}: same macros, but layout differs from generated output",
            path.display()
        ));
    }
    for discrepancy in &found {
        log.error(format!("{}: {discrepancy}", path.display()));
    }
    log.error(format!(
        "{} is stale; regenerate it with `realgen swizzles`",
        path.display()
    ));
    Ok(1)
}

/// `realgen lint`
fn lint(tool: &Path, database: &Path, log: Log) -> Result<i32> {
    let entries = load_database(database)?;
    log.info(format!(
        "linting {} files from {}",
        entries.len(),
        database.display()
    ));

    let mut linter = ShellTool::new(tool);
    let report = realgen_lint::run(&mut linter, &entries, |entry| {
        log.info(format!("Checking: {}", entry.file.display()));
    })
    .with_context(|| format!("failed to run {}", tool.display()))?;

    match report.summary() {
        Some(summary) => {
            for file in &report.failed {
                log.error(format!("failed: {}", file.display()));
            }
            log.error(summary);
        }
        None => log.info(format!("all {} files passed linting", report.checked)),
    }
    Ok(report.exit_code())
}

// ─── Helpers ────────────────────────────────────────────────────────────────

/// Write `text` to `path` unless the file already holds exactly that text.
///
/// Returns `true` if the file was written. Missing parent directories are
/// created. Leaving an up-to-date file alone keeps its mtime, so the build
/// step that includes it is not rerun.
fn write_if_changed(path: &Path, text: &str) -> io::Result<bool> {
    match fs::read(path) {
        Ok(existing) if existing == text.as_bytes() => return Ok(false),
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(true)
}

fn macro_count(text: &str) -> usize {
    text.lines().filter(|l| l.starts_with("#define ")).count()
}

fn run(cli: &Cli) -> Result<i32> {
    let log = Log { quiet: cli.quiet };
    match &cli.cmd {
        Command::Swizzles { output, alphabets } => swizzles(output.as_deref(), *alphabets, log),
        Command::Check { path, alphabets } => check_header(path, *alphabets, log),
        Command::Lint { tool, database } => lint(tool, database, log),
    }
}

fn main() {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("realgen: {e:#}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
