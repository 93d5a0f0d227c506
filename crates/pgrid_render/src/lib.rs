//! 2D Rendering Library
//!
//! This crate provides the wgpu-based pipeline that draws the particle grid's
//! draw list: thin anti-aliased lines and small filled squares, alpha blended
//! over a solid background.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::ShapePipeline`] - Triangle-list pipeline with optional MSAA
//! - [`tessellate::ShapeGeometry`] - Converts a [`DrawList`] to GPU vertices

pub mod context;
pub mod pipeline;
pub mod tessellate;

// Re-export core types for convenience
pub use pgrid_core::{DrawList, Rgba, Shape};
pub use pgrid_math::Vec2;

pub use tessellate::ShapeGeometry;
