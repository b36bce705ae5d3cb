// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures around a conversion. Parsing itself never fails; only file I/O does.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Output would overwrite the input sheet: {}", .0.display())]
    OverwritesInput(PathBuf),

    #[error("Reading input failed: {0}")]
    Input(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
