//! Grid point state

use pgrid_math::Vec2;

/// A single point of the lattice
///
/// `origin` never changes after generation; everything else is rewritten
/// by the field update every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    /// Current (drawn) position
    pub position: Vec2,
    /// Rest position (lattice cell plus jitter)
    pub origin: Vec2,
    /// Glyph size in pixels
    pub size: f32,
    /// Sideways displacement, capped at the grid spacing
    pub distortion: f32,
    /// Length of the extension line, capped at the grid spacing
    pub line_length: f32,
    /// Whether the point has been touched by the active zone
    pub activated: bool,
    /// Frame on which the point was last activated
    pub activated_at: u64,
}

impl GridPoint {
    /// Create a resting point at `origin`
    pub fn new(origin: Vec2, size: f32) -> Self {
        Self {
            position: origin,
            origin,
            size,
            distortion: 0.0,
            line_length: 0.0,
            activated: false,
            activated_at: 0,
        }
    }

    /// Displacement of the current position from the rest position
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.position - self.origin
    }
}
