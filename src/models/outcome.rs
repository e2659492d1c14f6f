use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result of examining a single path in the chain.
#[derive(Debug)]
pub enum HopOutcome {
    /// The path was a symlink; carries the resolved target.
    Followed(PathBuf),
    /// The path exists and is not a symlink.
    Terminal,
    /// The resolved target (or the examined path itself) does not exist.
    Missing(PathBuf),
    Failed(HopError),
}

/// Why a hop could not be completed.
#[derive(Debug, Error)]
pub enum HopError {
    #[error("{}: {source}", path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read link {}: {source}", path.display())]
    ReadLink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: File name too long ({len} bytes, limit {max})", path.display())]
    NameTooLong { path: PathBuf, len: usize, max: usize },
}

impl HopError {
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            HopError::Inspect { source, .. } | HopError::ReadLink { source, .. } => source.kind(),
            HopError::NameTooLong { .. } => io::ErrorKind::InvalidFilename,
        }
    }
}
