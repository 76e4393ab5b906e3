// src/store.rs
use std::fs;
use std::path::Path;

use crate::error::Error;
use crate::sheet::SheetExport;

/// Persist the export as pretty-printed JSON at `path`.
///
/// Parent directories are created as needed; an existing file is
/// overwritten unconditionally. Only called once the full export is
/// built, so a failed run never leaves partial output behind.
pub fn write_export(export: &SheetExport, path: &Path) -> Result<(), Error> {
    let write_failed = |source| Error::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }
    }

    let mut json = serde_json::to_string_pretty(export).map_err(|e| write_failed(e.into()))?;
    json.push('\n');
    fs::write(path, json).map_err(write_failed)
}
