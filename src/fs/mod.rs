mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::{Call, MockFileSystem};

use std::io;
use std::path::{Path, PathBuf};

use crate::models::FileKind;

/// The two filesystem primitives a hop needs. Neither follows a final symlink.
pub trait FileSystem {
    /// Type of the entry at `path`, like `lstat(2)`.
    fn lstat(&self, path: &Path) -> io::Result<FileKind>;

    /// Raw target string of the symlink at `path`.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;
}
