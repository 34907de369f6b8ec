pub mod completions;
pub mod list;
pub mod show;
pub mod split;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::{Result, SplitError};
use crate::splitter::{split_sections, SplitSection};

/// codesplit - Split concatenated source listings back into files
#[derive(Parser, Debug)]
#[command(name = "codesplit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a listing and write each file to disk
    Split(split::SplitArgs),

    /// List the files found in a listing
    List(list::ListArgs),

    /// Print or save a single file from a listing
    Show(show::ShowArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Read the listing from a file, or from stdin when `input` is absent or `-`.
pub fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|e| SplitError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to read input: {}", e),
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Read and split a listing, treating "no files" as an error.
pub fn load_sections(input: Option<&Path>) -> Result<Vec<SplitSection>> {
    let text = read_input(input)?;
    let sections = split_sections(Some(text.as_str()));

    if sections.is_empty() {
        return Err(SplitError::no_files());
    }

    Ok(sections)
}

/// Load the config named on the command line, or `codesplit.yaml` if present.
pub fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover("."),
    }
}
