pub mod cli;
pub mod core;
pub mod fs;
pub mod models;

use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::core::{Status, TrackOptions, track, write_step};
use crate::fs::FileSystem;

/// Follow the chain starting at `start`, printing each step as it is reached.
///
/// The returned status says whether the chain ended cleanly or broke on a
/// missing target or I/O error. `Err` is reserved for failures writing output.
pub fn run<F, W, E>(
    fs: &F,
    start: &Path,
    options: TrackOptions,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<Status>
where
    F: FileSystem,
    W: Write,
    E: Write,
{
    let mut status = Status::Complete;
    for step in track(fs, start, options) {
        write_step(out, err, &step).context("failed to write chain output")?;
        if let Some(end) = step.status() {
            status = end;
        }
    }
    out.flush().context("failed to flush chain output")?;
    Ok(status)
}
