//! Terminal client errors.

use std::path::PathBuf;

use desk::DeskError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status} for {path}")]
    Server { path: String, status: u16 },
    #[error("missing csrf-token meta tag on {0}")]
    MissingCsrfToken(String),
    #[error("invalid csrf pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error(transparent)]
    Desk(#[from] DeskError),
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
