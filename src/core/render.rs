use std::io::{self, Write};

use super::track::Step;

/// Write one step of a chain: the chain itself goes to `out`, diagnostics to `err`.
pub fn write_step<W: Write, E: Write>(out: &mut W, err: &mut E, step: &Step) -> io::Result<()> {
    match step {
        Step::Link(path) => write!(out, "{} -> ", path.display()),
        Step::Stop { path, kind } => writeln!(out, "{} ({kind})", path.display()),
        Step::Nonexistent(path) => writeln!(out, "{} (nonexistent)", path.display()),
        Step::Failed { path, error } => {
            writeln!(out, "{} (I/O error)", path.display())?;
            // The chain line must land before the diagnostic.
            out.flush()?;
            writeln!(err, "Error while tracking {}: {error}", path.display())
        }
    }
}
