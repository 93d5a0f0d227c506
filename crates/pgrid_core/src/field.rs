//! Per-frame pointer response
//!
//! Points inside the active zone are pushed sideways, perpendicular to the
//! direction towards the pointer, by an amount that grows with pointer speed
//! and closeness. Points outside relax back towards their rest position.

use pgrid_math::{map_range, Vec2};
use rand::Rng;

use crate::grid::Grid;
use crate::point::GridPoint;
use crate::random_between;

/// Pointer state for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    /// Pointer position in logical pixels
    pub position: Vec2,
    /// Movement since the previous frame
    pub velocity: Vec2,
}

impl PointerSample {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Pixels moved since the previous frame
    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Tuning for the field update
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    /// Radius around the pointer in which points react
    pub active_zone: f32,
    /// Fraction of the remaining offset recovered per frame outside the zone
    pub return_rate: f32,
    /// Per-frame multiplier for distortion and line length outside the zone
    pub decay: f32,
    /// Frames after activation before a point outside the zone goes idle
    pub hold_frames: u64,
    /// Strength at the pointer itself; falls to zero at the zone edge
    pub falloff_start: f32,
    /// Multiplier applied to pointer speed
    pub speed_gain: f32,
    /// Upper bound of the random distortion increment, as a fraction of the strength
    pub distortion_gain: f32,
    /// Upper bound of the random line-length increment, as a fraction of the strength
    pub line_gain: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            active_zone: 250.0,
            return_rate: 0.1,
            decay: 0.9,
            hold_frames: 120,
            falloff_start: 0.5,
            speed_gain: 0.3,
            distortion_gain: 0.2,
            line_gain: 0.3,
        }
    }
}

/// Advance every point of `grid` by one frame
///
/// With no pointer sample every point relaxes.
pub fn update_field<R: Rng + ?Sized>(
    grid: &mut Grid,
    pointer: Option<PointerSample>,
    frame: u64,
    params: &FieldParams,
    rng: &mut R,
) {
    let cap = grid.spacing();
    for point in grid.points_mut() {
        match pointer {
            Some(sample) if point.origin.distance(sample.position) <= params.active_zone => {
                disturb(point, &sample, frame, cap, params, rng);
            }
            _ => relax(point, frame, params),
        }
    }
}

fn relax(point: &mut GridPoint, frame: u64, params: &FieldParams) {
    point.position = point.position.lerp(point.origin, params.return_rate);
    point.distortion *= params.decay;
    point.line_length *= params.decay;

    if point.activated && frame.saturating_sub(point.activated_at) > params.hold_frames {
        point.activated = false;
    }
}

fn disturb<R: Rng + ?Sized>(
    point: &mut GridPoint,
    sample: &PointerSample,
    frame: u64,
    cap: f32,
    params: &FieldParams,
    rng: &mut R,
) {
    if !point.activated {
        point.activated = true;
        point.activated_at = frame;
    }

    let to_pointer = sample.position - point.origin;
    let dist = to_pointer.length();
    let angle = to_pointer.angle();
    let strength = map_range(dist, 0.0, params.active_zone, params.falloff_start, 0.0)
        * sample.speed()
        * params.speed_gain;

    point.distortion =
        (point.distortion + random_between(rng, 0.0, strength * params.distortion_gain)).min(cap);
    point.line_length =
        (point.line_length + random_between(rng, 0.0, strength * params.line_gain)).min(cap);

    point.position = point.origin + Vec2::new(angle.sin(), -angle.cos()) * point.distortion;
}
