//! Pointer tracking
//!
//! Cursor events can arrive several times per frame (or not at all). The
//! tracker keeps the latest position and the position at the end of the
//! previous frame; velocity is their difference, so a still pointer has zero
//! speed even if no event arrived. Leaving the window keeps the last position.

use pgrid_core::PointerSample;
use pgrid_math::Vec2;
use winit::dpi::PhysicalPosition;

/// Tracks the pointer across frames in logical pixels
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    current: Option<Vec2>,
    previous: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a cursor move in physical pixels
    pub fn process_cursor_moved(&mut self, position: PhysicalPosition<f64>, scale_factor: f64) {
        let logical = position.to_logical::<f64>(scale_factor);
        self.set_position(Vec2::new(logical.x as f32, logical.y as f32));
    }

    /// Set the pointer position directly (logical pixels)
    pub fn set_position(&mut self, position: Vec2) {
        self.current = Some(position);
    }

    /// Sample for the current frame
    ///
    /// `None` until the pointer has been seen. The first sample has zero velocity.
    pub fn sample(&self) -> Option<PointerSample> {
        let current = self.current?;
        let previous = self.previous.unwrap_or(current);
        Some(PointerSample::new(current, current - previous))
    }

    /// Close the frame: the current position becomes the previous one
    pub fn end_frame(&mut self) {
        self.previous = self.current;
    }
}
