use std::fmt;

/// Type of a filesystem entry as seen without following symlinks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileKind {
    Regular,
    Socket,
    CharDevice,
    BlockDevice,
    Fifo,
    Directory,
    Symlink,
    Whiteout,
    Unknown,
}

impl FileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::Regular => "regular file",
            FileKind::Socket => "socket",
            FileKind::CharDevice => "character device",
            FileKind::BlockDevice => "block device",
            FileKind::Fifo => "named pipe, FIFO",
            FileKind::Directory => "directory",
            FileKind::Symlink => "symbolic link",
            FileKind::Whiteout => "whiteout",
            FileKind::Unknown => "unknown file",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
