//! Filesystem helpers for whole-file ledger writes.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Replace the file at `destination` with `contents`.
///
/// The bytes go to a sibling temp file first, which is then renamed over the
/// destination, so readers never observe a half-written ledger.
pub fn write_replacing(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let temp_path = temp_sibling(destination);
    {
        let mut file = fs::File::create(&temp_path)?;
        if let Err(err) = file.write_all(contents).and_then(|_| file.sync_all()) {
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }
    }
    rename_into_place(&temp_path, destination)
}

/// Move the temp file over `destination`.
///
/// `fs::rename` replaces an existing destination on every supported
/// platform. On failure the temp file is removed and the destination is
/// left as it was.
pub fn rename_into_place(temp_path: &Path, destination: &Path) -> io::Result<()> {
    fs::rename(temp_path, destination).map_err(|err| {
        let _ = fs::remove_file(temp_path);
        io::Error::new(
            err.kind(),
            format!("Failed to move {} into place: {}", temp_path.display(), err),
        )
    })
}

fn temp_sibling(destination: &Path) -> PathBuf {
    let file_name = destination
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "ledger".to_string());
    destination.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
}
