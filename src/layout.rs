//! Screen layout and hit-testing.
//!
//! Layout is recomputed from scratch for every frame by [`compute`]; nothing
//! about screen placement is stored on catalog entities.

mod frame;
mod geometry;

pub use frame::*;
pub use geometry::*;

#[cfg(test)]
mod tests;
