//! Application systems
//!
//! Window, GPU rendering and simulation, kept apart from main.rs so each can
//! be driven and tested on its own.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::{FrameStats, SimulationSystem};
pub use window::{WindowError, WindowSystem};
