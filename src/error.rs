use std::path::PathBuf;

use thiserror::Error;

use crate::models::ScreenKind;

/// Failure to bring the catalog into memory. Fatal at startup.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("could not read catalog file {}", path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("catalog must be an object of game lists or a list of games")]
    Empty,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no transition from {from} on {event}")]
    InvalidTransition { from: ScreenKind, event: &'static str },
}
