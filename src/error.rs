use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dreamstar operations
#[derive(Error, Diagnostic, Debug)]
pub enum PosterError {
    #[error("IO error: {0}")]
    #[diagnostic(code(dreamstar::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(dreamstar::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(dreamstar::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(dreamstar::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(dreamstar::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PosterError>;
