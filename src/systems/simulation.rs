//! Sketch simulation system
//!
//! Runs one sketch frame per redraw:
//! - Pointer sampling
//! - Field update
//! - Draw list composition
//! - Frame rate tracking

use std::time::Instant;

use pgrid_core::{DrawList, Sketch, SketchParams, Vec2};
use pgrid_input::PointerTracker;

/// Per-frame numbers for the title bar
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStats {
    /// Frame number the sketch will use next
    pub frame: u64,
    /// Points in the grid
    pub points: usize,
    /// Smoothed frames per second
    pub fps: f32,
    /// Whether the field is frozen
    pub paused: bool,
}

/// Owns the sketch, pointer state and this frame's draw list
pub struct SimulationSystem {
    sketch: Sketch,
    pointer: PointerTracker,
    draw_list: DrawList,
    last_frame: Instant,
    fps: f32,
}

impl SimulationSystem {
    /// Create a simulation covering `size` logical pixels
    pub fn new(params: SketchParams, size: Vec2, seed: Option<u64>) -> Self {
        Self {
            sketch: Sketch::new(params, size, seed),
            pointer: PointerTracker::new(),
            draw_list: DrawList::new(),
            last_frame: Instant::now(),
            fps: 0.0,
        }
    }

    /// Pointer tracker fed by cursor events
    pub fn pointer_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointer
    }

    /// Rebuild the grid for the window size; ignores zero sizes
    pub fn resize(&mut self, size: Vec2) {
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        self.sketch.resize(size);
    }

    /// Lay out a fresh grid
    pub fn regenerate(&mut self) {
        self.sketch.regenerate();
        log::info!("Grid regenerated ({} points)", self.sketch.grid().len());
    }

    /// Pause or resume the field
    pub fn toggle_pause(&mut self) -> bool {
        let paused = self.sketch.toggle_pause();
        log::info!("Field {}", if paused { "paused" } else { "resumed" });
        paused
    }

    /// Run one simulation frame
    ///
    /// Updates the field from the pointer, composes the draw list and closes
    /// the pointer frame.
    pub fn update(&mut self) -> FrameStats {
        // 1. Frame timing
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            self.fps = if self.fps == 0.0 {
                instant_fps
            } else {
                self.fps * 0.95 + instant_fps * 0.05
            };
        }

        // 2. Pointer sample for this frame
        let sample = self.pointer.sample();

        // 3. Field update and composition
        self.sketch.step(sample);
        self.sketch.draw(sample, &mut self.draw_list);

        // 4. Current pointer position becomes next frame's previous
        self.pointer.end_frame();

        FrameStats {
            frame: self.sketch.frame(),
            points: self.sketch.grid().len(),
            fps: self.fps,
            paused: self.sketch.is_paused(),
        }
    }

    /// The draw list composed by the last update
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulation() -> SimulationSystem {
        SimulationSystem::new(SketchParams::default(), Vec2::new(400.0, 400.0), Some(5))
    }

    #[test]
    fn test_update_composes_frame() {
        let mut sim = simulation();
        let stats = sim.update();
        assert_eq!(stats.points, 100);
        assert_eq!(stats.frame, 2);
        assert!(!stats.paused);
        assert_eq!(sim.draw_list().rect_count(), 100);
    }

    #[test]
    fn test_pointer_motion_activates_points() {
        let mut sim = simulation();
        sim.pointer_mut().set_position(Vec2::new(200.0, 200.0));
        sim.update();
        sim.pointer_mut().set_position(Vec2::new(230.0, 200.0));
        sim.update();
        assert!(sim.sketch().grid().points().iter().any(|p| p.activated));
        // 30 px/frame -> connectors appended after the points
        let glyphs_and_links = 2 * sim.sketch().grid().links().len() + 100;
        assert!(sim.draw_list().len() > glyphs_and_links);
    }

    #[test]
    fn test_resize_ignores_zero() {
        let mut sim = simulation();
        sim.resize(Vec2::new(0.0, 0.0));
        assert_eq!(sim.sketch().grid().len(), 100);
        sim.resize(Vec2::new(200.0, 200.0));
        assert_eq!(sim.sketch().grid().len(), 25);
    }

    #[test]
    fn test_resize_to_same_size_rebuilds_grid() {
        let mut sim = simulation();
        let before: Vec<Vec2> = sim.sketch().grid().points().iter().map(|p| p.origin).collect();
        sim.resize(Vec2::new(400.0, 400.0));
        let after: Vec<Vec2> = sim.sketch().grid().points().iter().map(|p| p.origin).collect();
        assert_eq!(before.len(), after.len());
        assert_ne!(before, after);
    }
}
