//! Split command implementation.
//!
//! Reads a listing, splits it on header comments and writes each file under
//! the output directory.

use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SplitError};
use crate::output::{display_path, plural, Printer, Tone};
use crate::splitter::ParsedFile;
use crate::writer::{write_files, WriteOptions};

use super::{load_config, load_sections};

/// Split a listing and write each file to disk
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Listing to split (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Output directory (default: from codesplit.yaml, else "out")
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Keep files that already exist instead of replacing them
    #[arg(long)]
    pub no_overwrite: bool,

    /// Show what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Config file (default: ./codesplit.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: SplitArgs, printer: &Printer) -> Result<()> {
    let config = load_config(args.config.as_ref())?;

    let sections = load_sections(args.input.as_deref())?;
    let files: Vec<ParsedFile> = sections.into_iter().map(|s| s.file).collect();
    printer.line(Tone::Note, "Found", &plural(files.len(), "file", "files"));

    let root = args.output.clone().unwrap_or_else(|| config.output.clone());
    let mut options = WriteOptions::from(&config);
    options.overwrite = options.overwrite && !args.no_overwrite;
    options.dry_run = args.dry_run;

    let report = write_files(&files, &root, &options)?;
    printer.report(&report, options.dry_run);

    if report.has_failures() {
        return Err(SplitError::Write {
            message: format!(
                "{} could not be written",
                plural(report.failed.len(), "file", "files")
            ),
            help: Some("The remaining files were written; fix the paths above and re-run".to_string()),
        });
    }

    let verb = if options.dry_run { "Checked" } else { "Finished" };
    printer.line(
        Tone::Done,
        verb,
        &format!(
            "{} to {}",
            plural(report.written.len(), "file", "files"),
            display_path(&root)
        ),
    );

    Ok(())
}
