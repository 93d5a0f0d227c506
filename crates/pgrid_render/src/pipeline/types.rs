//! GPU-compatible data types for the shape pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// Every line and rect becomes two triangles
pub const VERTICES_PER_SHAPE: usize = 6;

/// A 2D vertex with straight-alpha color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in logical pixels (origin top-left, y down)
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex2D {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// View uniforms for the shape shader
/// Layout: 16 bytes total (must match shape.wgsl ViewUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewUniforms {
    /// Viewport size in logical pixels
    pub viewport: [f32; 2],
    pub _padding: [f32; 2],
}

impl ViewUniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: [width.max(1.0), height.max(1.0)],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ViewUniforms {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
