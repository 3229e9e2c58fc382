//! Filesystem utilities.
//!
//! Crash-tolerant file writes for the rule file. The file is small but
//! user-edited, so a save must never leave a half-written document behind.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::{CoreError, CoreResult};

/// Write a JSON file atomically with pretty formatting.
pub fn atomic_write_json_pretty<T: serde::Serialize>(path: &Path, value: &T) -> CoreResult<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    atomic_write_bytes(path, &bytes)
}

/// Write bytes to `path` using an atomic replace pattern.
///
/// The payload goes to a sibling temp file first, is flushed and synced,
/// then renamed into place. Windows cannot rename over an existing file on
/// every filesystem, so an existing destination is moved aside first and
/// restored if the swap fails.
pub fn atomic_write_bytes(path: &Path, bytes: &[u8]) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let tmp_path = sibling_with_suffix(path, "tmp");
    {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(bytes)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }

    replace_file(path, &tmp_path)
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| suffix.to_string());
    let mut out = path.to_path_buf();
    out.set_file_name(format!("{file_name}.{suffix}"));
    out
}

fn replace_file(dest: &Path, src_tmp: &Path) -> CoreResult<()> {
    if !dest.exists() {
        std::fs::rename(src_tmp, dest)?;
        return Ok(());
    }

    let bak = sibling_with_suffix(dest, "bak");
    if bak.exists() {
        let _ = std::fs::remove_file(&bak);
    }

    std::fs::rename(dest, &bak)?;
    match std::fs::rename(src_tmp, dest) {
        Ok(()) => {
            let _ = std::fs::remove_file(&bak);
            Ok(())
        }
        Err(e) => {
            // Try to restore the old file.
            let _ = std::fs::rename(&bak, dest);
            let _ = std::fs::remove_file(src_tmp);
            Err(CoreError::IoError(e))
        }
    }
}
