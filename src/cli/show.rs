//! Show command implementation.
//!
//! Prints a single file from a listing, or saves it to a chosen path.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, SplitError};
use crate::output::{display_path, Printer, Tone};
use crate::path::normalize;
use crate::splitter::ParsedFile;

use super::load_sections;

/// Print or save a single file from a listing
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Declared path of the file (as written in its header)
    pub path: String,

    /// Listing to read (reads stdin when omitted or "-")
    pub input: Option<PathBuf>,

    /// Save the file here instead of printing it
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: ShowArgs, printer: &Printer) -> Result<()> {
    let sections = load_sections(args.input.as_deref())?;
    let files: Vec<ParsedFile> = sections.into_iter().map(|s| s.file).collect();

    let file = find_file(&files, &args.path).ok_or_else(|| SplitError::NotFound {
        path: args.path.clone(),
        help: Some(format!(
            "Files in this listing: {}",
            files
                .iter()
                .map(|f| f.path.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )),
    })?;

    match &args.output {
        Some(output) => {
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| SplitError::Io {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create directory: {}", e),
                })?;
            }
            fs::write(output, &file.content).map_err(|e| SplitError::Io {
                path: output.clone(),
                message: format!("Failed to write file: {}", e),
            })?;
            let message = format!("{} to {}", file.path, display_path(output));
            printer.line(Tone::Done, "Saved", &message);
        }
        None => println!("{}", file.content),
    }

    Ok(())
}

/// First file whose declared path matches `path`, ignoring separator style.
pub fn find_file<'a>(files: &'a [ParsedFile], path: &str) -> Option<&'a ParsedFile> {
    let wanted = normalize(path);
    files.iter().find(|f| normalize(&f.path) == wanted)
}
