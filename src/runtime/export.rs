//! Export file writing

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Write `content` to `path` without ever leaving a partial file behind
///
/// Bytes go to a hidden sibling first and are renamed into place once
/// flushed. On failure the sibling is removed.
pub fn write_export(path: &Path, content: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", dir.display(), e))?;

    let partial = partial_path(path);
    let result = write_and_rename(&partial, path, content);
    if result.is_err() {
        let _ = fs::remove_file(&partial);
    }
    result
}

fn write_and_rename(partial: &Path, path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(partial)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", partial.display(), e))?;
    file.write_all(content)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", partial.display(), e))?;
    file.sync_all()
        .map_err(|e| anyhow::anyhow!("Failed to flush {}: {}", partial.display(), e))?;
    drop(file);

    fs::rename(partial, path)
        .map_err(|e| anyhow::anyhow!("Failed to move export to {}: {}", path.display(), e))?;
    Ok(())
}

/// `dir/.name.part` for `dir/name`
fn partial_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".part");
    path.with_file_name(name)
}
