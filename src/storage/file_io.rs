//! Whole-file reads and atomic replacement for the JSON store

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::TallyError;

fn storage_error(action: &str, path: &Path, e: io::Error) -> TallyError {
    TallyError::Storage(format!("Failed to {} {}: {}", action, path.display(), e))
}

/// Read a file to a string, returning `None` if it doesn't exist
pub fn read_optional<P: AsRef<Path>>(path: P) -> Result<Option<String>, TallyError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(storage_error("read", path, e)),
    }
}

/// Replace `path` with `contents` via a sibling temp file and a rename
///
/// Readers see either the old contents or the new ones, never a partial write.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<(), TallyError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    // same directory, or the rename is not atomic
    let temp_path = path.with_extension("json.tmp");

    let written = File::create(&temp_path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        writer.write_all(contents)?;
        writer.flush()?;
        writer.get_ref().sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_error("write", &temp_path, e));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_error("replace", path, e)
    })
}
