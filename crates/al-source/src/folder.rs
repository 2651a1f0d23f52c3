use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Lists the files of `dir` whose extension matches `ext`, sorted by file name.
///
/// The scan is not recursive and the extension comparison ignores case.
/// Ordering is plain lexicographic, so frame names need zero padding
/// (`0009.png` before `0010.png`).
///
/// # Errors
/// Returns an error if the directory cannot be read.
///
/// # Example
/// ```no_run
/// use al_source::folder::scan_frames;
/// use std::path::Path;
/// let frames = scan_frames(Path::new("frames"), "png").unwrap();
/// ```
pub fn scan_frames(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let wanted = ext.trim_start_matches('.').to_lowercase();
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Cannot read {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|e| e.to_lowercase() == wanted);
        if matches {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    log::debug!("{} .{wanted} file(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// `true` if `dir` is missing or holds no entries at all.
///
/// # Example
/// ```
/// use al_source::folder::is_missing_or_empty;
/// use std::path::Path;
/// assert!(is_missing_or_empty(Path::new("/nonexistent/ascii_frames")));
/// ```
#[must_use]
pub fn is_missing_or_empty(dir: &Path) -> bool {
    fs::read_dir(dir).map_or(true, |mut entries| entries.next().is_none())
}
