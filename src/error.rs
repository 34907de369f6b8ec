use miette::Diagnostic;
use thiserror::Error;

/// Main error type for codesplit operations
#[derive(Error, Diagnostic, Debug)]
pub enum SplitError {
    #[error("IO error: {0}")]
    #[diagnostic(code(codesplit::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(codesplit::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(codesplit::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("No files found in input")]
    #[diagnostic(code(codesplit::no_files))]
    NoFiles {
        #[help]
        help: Option<String>,
    },

    #[error("File not found in input: {path}")]
    #[diagnostic(code(codesplit::not_found))]
    NotFound {
        path: String,
        #[help]
        help: Option<String>,
    },

    #[error("JSON output error: {0}")]
    #[diagnostic(code(codesplit::json))]
    Json(#[from] serde_json::Error),

    #[error("Write error: {message}")]
    #[diagnostic(code(codesplit::write))]
    Write {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl SplitError {
    /// The "nothing to split" diagnostic, with a hint about the header format.
    pub fn no_files() -> Self {
        SplitError::NoFiles {
            help: Some(
                "Each file must start with a header comment such as '// src/main.rs'".to_string(),
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
