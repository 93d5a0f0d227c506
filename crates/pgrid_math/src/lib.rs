//! 2D Mathematics Library
//!
//! Small, allocation-free math used by the particle grid.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector in logical pixel space (y points down)
//!
//! ## Scalar Helpers
//!
//! - [`lerp`] - linear interpolation
//! - [`map_range`] - linear remap between two ranges (unclamped)

mod vec2;
pub mod scalar;

pub use vec2::Vec2;
pub use scalar::{lerp, map_range};
