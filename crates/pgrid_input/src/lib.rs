//! Input handling for the particle grid
//!
//! - [`PointerTracker`] turns cursor events into per-frame pointer samples
//! - [`SketchAction`] maps keyboard shortcuts to sketch commands

mod pointer_tracker;
mod actions;

pub use pointer_tracker::PointerTracker;
pub use actions::{map_key, SketchAction};
