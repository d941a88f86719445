//! Server Error Types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServeError {
    /// Nothing to serve: the front-end has not been built
    #[error("Front-end bundle not found at {0:?} (build finlit-ui with `trunk build` first)")]
    MissingDist(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServeResult<T> = Result<T, ServeError>;
