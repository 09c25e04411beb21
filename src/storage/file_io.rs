//! JSON files backing the period store
//!
//! Writes go through a staging file in the same directory followed by a
//! rename, so a period file is never left half-written.

use std::ffi::OsString;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{TallyError, TallyResult};

fn storage_error(action: &str, path: &Path, err: impl fmt::Display) -> TallyError {
    TallyError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Parse a JSON file, `None` when the file does not exist
pub fn read_json<T: DeserializeOwned>(path: &Path) -> TallyResult<Option<T>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(storage_error("read", path, e)),
    };

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|e| storage_error("parse", path, e))
}

/// Replace the contents of a JSON file, creating parent directories
pub fn write_json_atomic<T: Serialize>(path: &Path, data: &T) -> TallyResult<()> {
    let mut contents =
        serde_json::to_vec_pretty(data).map_err(|e| storage_error("serialize", path, e))?;
    contents.push(b'\n');

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("create directory for", path, e))?;
    }

    let staging = staging_path(path);
    let written = File::create(&staging)
        .and_then(|mut file| {
            file.write_all(&contents)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&staging, path));

    if let Err(e) = written {
        let _ = fs::remove_file(&staging);
        return Err(storage_error("write", path, e));
    }
    Ok(())
}

/// `2024.json` → `2024.json.tmp`
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
