// src/error.rs
use std::io;
use std::path::PathBuf;

/// Failure kinds for one pipeline run.
///
/// `NoSourceConfigured` and `EmptySheet` are deliberate no-ops for the
/// caller (existing output stays put, exit 0); the rest abort the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no sheet URL configured")]
    NoSourceConfigured,

    #[error("fetch failed: {reason}")]
    FetchFailed { reason: String },

    #[error("redirect chain exceeded {limit} hops")]
    RedirectLoop { limit: usize },

    #[error("sheet has no data rows")]
    EmptySheet,

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn fetch(reason: impl Into<String>) -> Self {
        Error::FetchFailed { reason: reason.into() }
    }
}
