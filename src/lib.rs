//! Particle Grid - a pointer-reactive generative sketch
//!
//! The binary wires these modules to a winit event loop; they are exposed as
//! a library so configuration and systems can be tested directly.

pub mod config;
pub mod systems;
