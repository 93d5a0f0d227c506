//! Rendering pipeline components

pub mod types;
pub mod shape_pipeline;

pub use types::{Vertex2D, ViewUniforms, VERTICES_PER_SHAPE};
pub use shape_pipeline::ShapePipeline;
