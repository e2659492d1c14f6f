use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use crate::models::FileKind;

use super::FileSystem;

pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn lstat(&self, path: &Path) -> io::Result<FileKind> {
        let metadata = fs::symlink_metadata(path)?;
        Ok(kind_of(&metadata))
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        fs::read_link(path)
    }
}

fn kind_of(metadata: &Metadata) -> FileKind {
    let file_type = metadata.file_type();
    if file_type.is_symlink() {
        FileKind::Symlink
    } else if file_type.is_dir() {
        FileKind::Directory
    } else if file_type.is_file() {
        FileKind::Regular
    } else {
        special_kind(metadata)
    }
}

#[cfg(unix)]
fn special_kind(metadata: &Metadata) -> FileKind {
    use std::os::unix::fs::FileTypeExt;

    let file_type = metadata.file_type();
    if file_type.is_socket() {
        FileKind::Socket
    } else if file_type.is_char_device() {
        FileKind::CharDevice
    } else if file_type.is_block_device() {
        FileKind::BlockDevice
    } else if file_type.is_fifo() {
        FileKind::Fifo
    } else if is_whiteout(metadata) {
        FileKind::Whiteout
    } else {
        FileKind::Unknown
    }
}

#[cfg(not(unix))]
fn special_kind(_metadata: &Metadata) -> FileKind {
    FileKind::Unknown
}

// std has no accessor for S_IFWHT, so read the raw mode bits.
#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
fn is_whiteout(metadata: &Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;

    const S_IFMT: u32 = 0o170000;
    const S_IFWHT: u32 = 0o160000;
    metadata.mode() & S_IFMT == S_IFWHT
}

#[cfg(all(
    unix,
    not(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "dragonfly"
    ))
))]
fn is_whiteout(_metadata: &Metadata) -> bool {
    false
}
