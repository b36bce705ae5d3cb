// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::error::{ConvertError, Result};

/// Write the page to the path implied by `export`, creating parent directories.
/// Returns the final path written to.
pub fn write_page(export: &ExportOptions, html: &str) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, html).map_err(|source| ConvertError::Write { path: path.clone(), source })?;
    Ok(path)
}

/// Refuse an output path that names the sheet being converted.
pub fn guard_input(out: &Path, input: &Path) -> Result<()> {
    let same = match (fs::canonicalize(out), fs::canonicalize(input)) {
        (Ok(a), Ok(b)) => a == b,
        _ => out == input,
    };
    if same {
        return Err(ConvertError::OverwritesInput(out.to_path_buf()));
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ConvertError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| ConvertError::Write { path: dir.to_path_buf(), source })?;
    }
    Ok(())
}
