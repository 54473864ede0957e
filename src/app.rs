//! Application module: exposes the app model driven by the runtime and
//! drawn by the UI.
//!
//! The `App` model lives in `app::model` and holds the catalog, the browsed
//! album, playback state and the last frame's layout.

mod model;

pub use model::*;
