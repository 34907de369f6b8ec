//! Status output for the codesplit CLI.
//!
//! Status lines go to stderr with a right-aligned verb column, coloured when
//! stderr is a terminal and `NO_COLOR` is unset. Stdout carries only file
//! contents and `--json` listings.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::writer::{SkipReason, WriteReport};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Colour of a status verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Work done or in progress.
    Done,
    /// Neutral information.
    Note,
    /// Something was left alone.
    Warn,
    /// Something failed.
    Fail,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Done => "\x1b[32m",
            Tone::Note => CYAN,
            Tone::Warn => "\x1b[33m",
            Tone::Fail => "\x1b[31m",
        }
    }
}

/// Terminal-aware status printer.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// A printer that never emits colour.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Print one status line to stderr.
    pub fn line(&self, tone: Tone, verb: &str, message: &str) {
        let line = self.format_line(tone, verb, message);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }

    /// Render a status line, e.g. `"     Writing out/src/main.rs"`.
    pub fn format_line(&self, tone: Tone, verb: &str, message: &str) -> String {
        if self.color {
            let color = tone.ansi();
            format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }

    /// Secondary detail such as sizes and line ranges.
    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// A declared path in a listing.
    pub fn path(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Print every entry of a write report: written, then skipped, then failed.
    pub fn report(&self, report: &WriteReport, dry_run: bool) {
        let mut stderr = io::stderr().lock();
        for line in self.report_lines(report, dry_run) {
            let _ = writeln!(stderr, "{line}");
        }
    }

    /// Rendered lines for [`Printer::report`].
    pub fn report_lines(&self, report: &WriteReport, dry_run: bool) -> Vec<String> {
        let verb = if dry_run { "Would write" } else { "Writing" };
        let mut lines = Vec::new();

        for written in &report.written {
            lines.push(self.format_line(Tone::Done, verb, &display_path(&written.target)));
        }

        for skipped in &report.skipped {
            let reason = match skipped.reason {
                SkipReason::Exists => "already exists",
                SkipReason::Excluded => "excluded",
            };
            let message = format!("{} {}", skipped.path, self.dim(reason));
            lines.push(self.format_line(Tone::Warn, "Skipping", &message));
        }

        for failed in &report.failed {
            let message = format!("{}: {}", failed.path, failed.message);
            lines.push(self.format_line(Tone::Fail, "Failed", &message));
        }

        lines
    }
}

/// Pluralize a count: `plural(1, "file", "files")` → "1 file".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Path relative to the working directory when it lies inside it.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}
