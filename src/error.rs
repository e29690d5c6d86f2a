//! Error types shared by every exercise
//!
//! Only two things can go wrong: the output (or input) stream fails, or the
//! animation is configured with a track too narrow to bounce in. Both are
//! fatal and surface through `main`.

use thiserror::Error;

/// Errors produced by the exercise programs
#[derive(Debug, Error)]
pub enum Error {
    /// Reading standard input or writing standard output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Track width below the two columns needed for distinct boundaries
    #[error("Invalid track width {width}. Width must be >= 2.")]
    InvalidWidth { width: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
