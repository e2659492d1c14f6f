use std::path::Path;

use tracing::trace;

use crate::fs::FileSystem;
use crate::models::FileKind;

/// Type of the entry at `path` itself, never its target.
///
/// Lookup failures collapse to [`FileKind::Unknown`].
pub fn classify<F: FileSystem>(fs: &F, path: &Path) -> FileKind {
    match fs.lstat(path) {
        Ok(kind) => kind,
        Err(err) => {
            trace!(path = %path.display(), error = %err, "classification failed");
            FileKind::Unknown
        }
    }
}
