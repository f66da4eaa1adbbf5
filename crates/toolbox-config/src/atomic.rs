//! Atomic file writes (write to `.tmp`, then rename) so a crash mid-write
//! never leaves a truncated config or preference file behind.

use std::io;
use std::path::{Path, PathBuf};

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `contents` to `path`, creating parent directories as needed.
pub(crate) fn write_atomic(path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
    let contents = contents.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let tmp = tmp_path(path);
    std::fs::write(&tmp, contents)?;

    if let Err(e) = std::fs::rename(&tmp, path) {
        // Rename can fail across filesystems; fall back to a direct write.
        tracing::warn!("atomic rename failed ({e}), falling back to direct write");
        let _ = std::fs::remove_file(&tmp);
        std::fs::write(path, contents)?;
    }

    tracing::debug!(path = %path.display(), "file written");
    Ok(())
}
