use std::iter::FusedIterator;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use tracing::debug;

use crate::fs::FileSystem;
use crate::models::{FileKind, HopError, HopOutcome};

use super::classify::classify;
use super::hop::resolve_hop;

/// Configuration options for following a chain.
#[derive(Debug, Clone, Default)]
pub struct TrackOptions {
    /// Maximum number of hops to follow (None means unlimited)
    pub max_hops: Option<NonZeroUsize>,
}

/// One printable element of a chain.
#[derive(Debug)]
pub enum Step {
    /// A symlink that was followed to the next step.
    Link(PathBuf),
    /// Where traversal ended normally: a non-symlink, or the hop ceiling.
    Stop { path: PathBuf, kind: FileKind },
    Nonexistent(PathBuf),
    Failed { path: PathBuf, error: HopError },
}

/// How a finished chain should be reported to the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Complete,
    Broken,
}

impl Step {
    /// `None` while the chain continues.
    pub fn status(&self) -> Option<Status> {
        match self {
            Step::Link(_) => None,
            Step::Stop { .. } => Some(Status::Complete),
            Step::Nonexistent(_) | Step::Failed { .. } => Some(Status::Broken),
        }
    }
}

/// Walks a symlink chain one hop per `next()`.
pub struct Tracker<'a, F: FileSystem> {
    fs: &'a F,
    options: TrackOptions,
    current: Option<PathBuf>,
    pending: Option<Step>,
    hops: usize,
}

/// Start following the chain that begins at `start`.
pub fn track<F: FileSystem>(
    fs: &F,
    start: impl Into<PathBuf>,
    options: TrackOptions,
) -> Tracker<'_, F> {
    Tracker {
        fs,
        options,
        current: Some(start.into()),
        pending: None,
        hops: 0,
    }
}

impl<F: FileSystem> Tracker<'_, F> {
    /// Hops followed so far.
    pub fn hops(&self) -> usize {
        self.hops
    }

    fn ceiling_reached(&self) -> bool {
        self.options
            .max_hops
            .is_some_and(|max| self.hops >= max.get())
    }
}

impl<F: FileSystem> Iterator for Tracker<'_, F> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if let Some(step) = self.pending.take() {
            return Some(step);
        }

        let current = self.current.take()?;

        if self.ceiling_reached() {
            debug!(hops = self.hops, "hop ceiling reached");
            let kind = classify(self.fs, &current);
            return Some(Step::Stop {
                path: current,
                kind,
            });
        }

        match resolve_hop(self.fs, &current) {
            HopOutcome::Followed(next) => {
                self.hops += 1;
                self.current = Some(next);
                Some(Step::Link(current))
            }
            HopOutcome::Terminal => {
                let kind = classify(self.fs, &current);
                Some(Step::Stop {
                    path: current,
                    kind,
                })
            }
            HopOutcome::Missing(target) if target == current => Some(Step::Nonexistent(current)),
            HopOutcome::Missing(target) => {
                self.pending = Some(Step::Nonexistent(target));
                Some(Step::Link(current))
            }
            HopOutcome::Failed(error) => Some(Step::Failed {
                path: current,
                error,
            }),
        }
    }
}

impl<F: FileSystem> FusedIterator for Tracker<'_, F> {}
