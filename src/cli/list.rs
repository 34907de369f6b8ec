//! List command implementation.
//!
//! Splits a listing and prints the files it contains, in order.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::output::{plural, Printer, Tone};
use crate::splitter::SplitSection;

use super::{load_config, load_sections};

/// List the files found in a listing
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Listing to inspect (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Print a JSON array to stdout instead of the status listing
    #[arg(long)]
    pub json: bool,

    /// Config file (default: ./codesplit.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// One row of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub path: String,
    /// Line of the header in the input (1-indexed).
    pub line: u32,
    /// Byte length of the trimmed content.
    pub bytes: usize,
    /// Whether the declared path matches a config exclude pattern.
    pub excluded: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    let sections = load_sections(args.input.as_deref())?;
    let entries = entries(&sections, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (section, entry) in sections.iter().zip(&entries) {
        let detail = printer.dim(&format!("lines {}, {} bytes", section.span, entry.bytes));
        if entry.excluded {
            printer.line(Tone::Warn, "Excluded", &format!("{} {}", entry.path, detail));
        } else {
            let message = format!("{} {}", printer.path(&entry.path), detail);
            printer.line(Tone::Note, "File", &message);
        }
    }

    printer.line(Tone::Done, "Found", &plural(entries.len(), "file", "files"));

    Ok(())
}

/// Build listing rows for split sections.
pub fn entries(sections: &[SplitSection], config: &Config) -> Vec<ListEntry> {
    sections
        .iter()
        .map(|section| ListEntry {
            path: section.file.path.clone(),
            line: section.span.start.line,
            bytes: section.file.content.len(),
            excluded: config.is_excluded(&section.file.path),
        })
        .collect()
}
