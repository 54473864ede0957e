//! Album catalog: the in-memory model and the loader for the line-oriented
//! catalog file (`albums.txt`).
//!
//! The catalog is built once at startup and never changes membership.

mod artwork;
mod model;
mod parse;

pub use artwork::*;
pub use model::*;
pub use parse::*;
