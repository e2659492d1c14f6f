pub mod classify;
pub mod hop;
pub mod render;
pub mod track;

pub use classify::classify;
pub use hop::resolve_hop;
pub use render::write_step;
pub use track::{Status, Step, TrackOptions, Tracker, track};
