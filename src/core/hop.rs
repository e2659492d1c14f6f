use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::fs::FileSystem;
use crate::models::{FileKind, HopError, HopOutcome};

/// Longest path the platform accepts, counting the trailing NUL.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const PATH_MAX: Option<usize> = Some(4096);

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
))]
pub const PATH_MAX: Option<usize> = Some(1024);

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "dragonfly"
)))]
pub const PATH_MAX: Option<usize> = None;

/// Examine `current` and, if it is a symlink, resolve it by one hop.
///
/// Relative targets are taken relative to the directory holding the link,
/// not the working directory. The entry reached is checked with lstat, so a
/// target that is itself a symlink still counts as followed.
pub fn resolve_hop<F: FileSystem>(fs: &F, current: &Path) -> HopOutcome {
    hop(fs, current).unwrap_or_else(HopOutcome::Failed)
}

fn hop<F: FileSystem>(fs: &F, current: &Path) -> Result<HopOutcome, HopError> {
    match fs.lstat(current) {
        Ok(FileKind::Symlink) => {}
        Ok(_) => return Ok(HopOutcome::Terminal),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(HopOutcome::Missing(current.to_path_buf()));
        }
        Err(source) => {
            return Err(HopError::Inspect {
                path: current.to_path_buf(),
                source,
            });
        }
    }

    let target = fs.read_link(current).map_err(|source| HopError::ReadLink {
        path: current.to_path_buf(),
        source,
    })?;
    check_length(&target)?;

    let candidate = if target.has_root() {
        target
    } else {
        let joined = join_relative(fs, &dirname(current), &target);
        check_length(&joined)?;
        joined
    };

    debug!(
        path = %current.display(),
        candidate = %candidate.display(),
        "read symlink"
    );

    match fs.lstat(&candidate) {
        Ok(_) => Ok(HopOutcome::Followed(candidate)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(HopOutcome::Missing(candidate)),
        Err(source) => Err(HopError::Inspect {
            path: candidate,
            source,
        }),
    }
}

fn check_length(path: &Path) -> Result<(), HopError> {
    let Some(max) = PATH_MAX else {
        return Ok(());
    };

    let len = path.as_os_str().len();
    if len >= max {
        return Err(HopError::NameTooLong {
            path: path.to_path_buf(),
            len,
            max,
        });
    }
    Ok(())
}

/// POSIX `dirname`: `a` -> `.`, `/a` -> `/`, `/` -> `/`, `a/b/` -> `a`.
pub fn dirname(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        Some(_) => PathBuf::from("."),
        None if path.has_root() => path.to_path_buf(),
        None => PathBuf::from("."),
    }
}

/// Append `target` to `dir`, dropping `.` and folding `..`.
///
/// A `..` only cancels the component before it when that component is a real
/// directory. Behind a symlink (or anything lstat cannot vouch for) the kernel
/// would climb out of the link's target instead, so the `..` is kept verbatim.
fn join_relative<F: FileSystem>(fs: &F, dir: &Path, target: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    // Normal components at the end of `out` that a `..` may still cancel.
    let mut poppable = 0usize;

    for component in dir.components().chain(target.components()) {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = out.has_root() && out.parent().is_none();
                if poppable > 0 && matches!(fs.lstat(&out), Ok(FileKind::Directory)) {
                    out.pop();
                    poppable -= 1;
                } else if !at_root {
                    out.push("..");
                    poppable = 0;
                }
            }
            Component::Normal(name) => {
                out.push(name);
                poppable += 1;
            }
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
