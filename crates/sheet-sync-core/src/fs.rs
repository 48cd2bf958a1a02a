use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::SyncResult;

/// Replace `path` with `content` via a sibling temp file and rename, so a
/// failed run never leaves a half-written preview behind. With `backup` the
/// previous content is kept next to the file as `<name>.bak`.
pub fn replace_file(path: &Path, content: &str, backup: bool) -> SyncResult<()> {
    let tmp_path = unique_sibling(path, "tmp");
    {
        let mut file = File::create(&tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    if backup {
        if let Err(err) = fs::copy(path, sibling(path, "bak")) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }
    }

    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err.into());
    }

    Ok(())
}

// Appends to the full file name instead of swapping the extension, so
// preview.html becomes preview.html.bak rather than preview.bak.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("preview"));
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

fn unique_sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut counter = 0u32;
    loop {
        let candidate = if counter == 0 {
            sibling(path, suffix)
        } else {
            sibling(path, &format!("{suffix}{counter}"))
        };

        if !candidate.exists() {
            return candidate;
        }

        counter += 1;
    }
}
