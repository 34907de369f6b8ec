//! codesplit - Split concatenated source listings back into files
//!
//! A library for cutting a single block of text, made of several source
//! files each introduced by a `// path/to/file.ext` header, back into named
//! files, and for writing those files into a directory tree.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod path;
pub mod splitter;
pub mod writer;

pub use config::{Config, CONFIG_FILENAME};
pub use error::{Result, SplitError};
pub use path::{base_name_of, directory_of, directory_segments, normalize, CANONICAL_SEPARATOR};
pub use splitter::{split, split_sections, Location, ParsedFile, Span, SplitSection, HEADER_PATTERN};
pub use writer::{target_for, write_files, SkipReason, WriteFailure, WriteOptions, WriteReport};
