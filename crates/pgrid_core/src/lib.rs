//! Core types for the particle grid sketch
//!
//! Everything here is plain CPU-side state driven once per frame:
//!
//! - [`GridPoint`] - A lattice point with rest position and disturbance state
//! - [`Grid`] - Jittered lattice covering the window, with cached neighbour links
//! - [`FieldParams`] / [`update_field`] - Per-frame pointer response
//! - [`DrawList`] / [`Shape`] - Ordered lines and rects for the renderer
//! - [`compose`] - Turns grid + pointer into a draw list
//! - [`FlowNoise`] - Smooth noise used to orient extension lines
//! - [`Sketch`] - Owns all of the above plus the RNG and frame counter

mod point;
mod grid;
mod field;
mod draw;
mod flow_noise;
pub mod compose;
mod sketch;

pub use point::GridPoint;
pub use grid::{Grid, GridParams, Link};
pub use field::{update_field, FieldParams, PointerSample};
pub use draw::{DrawList, Rgba, Shape};
pub use compose::{compose, ConnectorParams, StyleParams};
pub use flow_noise::FlowNoise;
pub use sketch::{Sketch, SketchParams};

pub use pgrid_math::Vec2;

use rand::Rng;

/// Uniform sample in `[low, high)`; returns `low` when the range is empty
pub(crate) fn random_between<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    low + rng.gen::<f32>() * (high - low)
}
