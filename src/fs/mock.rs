use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::FileKind;

use super::FileSystem;

#[derive(Clone, Debug)]
enum Node {
    Entry(FileKind),
    Link(PathBuf),
    UnreadableLink(io::ErrorKind),
    Err(io::ErrorKind),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    Lstat(PathBuf),
    ReadLink(PathBuf),
}

/// Scripted filesystem. Paths are matched exactly; anything unscripted is `NotFound`.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    nodes: HashMap<PathBuf, Node>,
    calls: Vec<Call>,
}

impl MockFileSystem {
    pub fn set_entry(&self, path: impl Into<PathBuf>, kind: FileKind) {
        self.insert(path.into(), Node::Entry(kind));
    }

    pub fn set_file(&self, path: impl Into<PathBuf>) {
        self.set_entry(path, FileKind::Regular);
    }

    pub fn set_link(&self, path: impl Into<PathBuf>, target: impl Into<PathBuf>) {
        self.insert(path.into(), Node::Link(target.into()));
    }

    /// A symlink that lstat reports but whose target cannot be read.
    pub fn set_unreadable_link(&self, path: impl Into<PathBuf>, kind: io::ErrorKind) {
        self.insert(path.into(), Node::UnreadableLink(kind));
    }

    /// Every operation on `path` fails with `kind`.
    pub fn set_error(&self, path: impl Into<PathBuf>, kind: io::ErrorKind) {
        self.insert(path.into(), Node::Err(kind));
    }

    pub fn calls(&self) -> Vec<Call> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }

    fn insert(&self, path: PathBuf, node: Node) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.nodes.insert(path, node);
    }
}

impl FileSystem for MockFileSystem {
    fn lstat(&self, path: &Path) -> io::Result<FileKind> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(Call::Lstat(path.to_path_buf()));

        match inner.nodes.get(path) {
            Some(Node::Entry(kind)) => Ok(*kind),
            Some(Node::Link(_)) | Some(Node::UnreadableLink(_)) => Ok(FileKind::Symlink),
            Some(Node::Err(kind)) => Err(io::Error::from(*kind)),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(Call::ReadLink(path.to_path_buf()));

        match inner.nodes.get(path) {
            Some(Node::Link(target)) => Ok(target.clone()),
            Some(Node::UnreadableLink(kind)) | Some(Node::Err(kind)) => {
                Err(io::Error::from(*kind))
            }
            Some(Node::Entry(_)) => Err(io::Error::from(io::ErrorKind::InvalidInput)),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}
