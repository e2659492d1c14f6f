mod kind;
mod outcome;

pub use kind::FileKind;
pub use outcome::{HopError, HopOutcome};
