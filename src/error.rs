//! Caller-misuse errors. These fail a call before any traversal begins;
//! per-node failures are annotated inline in the document instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown format '{0}': use text, md, or html")]
    UnknownFormat(String),

    #[error("timeout must be a finite, non-negative number of seconds, got {0}")]
    InvalidTimeout(f64),

    #[error("no command given to inspect")]
    EmptyCommand,
}
