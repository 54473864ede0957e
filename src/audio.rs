//! Audio playback: the engine capability, its `rodio` backend and the
//! playback controller that keeps a single stream alive at a time.

mod engine;
mod player;
mod types;

pub use engine::*;
pub use player::*;
pub use types::*;

#[cfg(test)]
pub(crate) mod fake;
