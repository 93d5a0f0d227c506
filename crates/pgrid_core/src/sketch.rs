//! The particle grid sketch
//!
//! Owns the grid, RNG, noise field and frame counter. The host calls
//! [`Sketch::step`] then [`Sketch::draw`] once per frame and
//! [`Sketch::resize`] whenever the window changes size.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pgrid_math::Vec2;

use crate::compose::{compose, ConnectorParams, StyleParams};
use crate::draw::DrawList;
use crate::field::{update_field, FieldParams, PointerSample};
use crate::flow_noise::FlowNoise;
use crate::grid::{Grid, GridParams};

/// All tuning for a sketch
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SketchParams {
    pub grid: GridParams,
    pub field: FieldParams,
    pub style: StyleParams,
    pub connectors: ConnectorParams,
}

/// Particle grid state
pub struct Sketch {
    params: SketchParams,
    grid: Grid,
    rng: StdRng,
    noise: FlowNoise,
    size: Vec2,
    frame: u64,
    paused: bool,
}

impl Sketch {
    /// Create a sketch covering `size` (logical pixels)
    ///
    /// `seed` makes the layout reproducible; `None` seeds from the OS.
    pub fn new(params: SketchParams, size: Vec2, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let noise = FlowNoise::new(rng.gen());
        let grid = Grid::generate(size.x, size.y, &params.grid, &mut rng);

        log::debug!(
            "Sketch created: {}x{} grid, {} links",
            grid.columns(),
            grid.rows(),
            grid.links().len()
        );

        Self {
            params,
            grid,
            rng,
            noise,
            size,
            frame: 1,
            paused: false,
        }
    }

    /// Rebuild the grid for a new area
    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
        self.grid = Grid::generate(size.x, size.y, &self.params.grid, &mut self.rng);
        log::info!(
            "Grid rebuilt for {:.0}x{:.0}: {} points",
            size.x,
            size.y,
            self.grid.len()
        );
    }

    /// New jitter, sizes and noise field for the current area
    pub fn regenerate(&mut self) {
        self.noise = FlowNoise::new(self.rng.gen());
        self.resize(self.size);
    }

    /// Advance the field by one frame (no-op for the grid while paused)
    pub fn step(&mut self, pointer: Option<PointerSample>) {
        if self.paused {
            return;
        }
        update_field(
            &mut self.grid,
            pointer,
            self.frame,
            &self.params.field,
            &mut self.rng,
        );
        self.frame += 1;
    }

    /// Compose the current frame into `out`
    pub fn draw(&self, pointer: Option<PointerSample>, out: &mut DrawList) {
        compose(
            &self.grid,
            pointer,
            &self.params.style,
            &self.params.connectors,
            &self.noise,
            out,
        );
    }

    /// Toggle pause; returns the new paused state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn params(&self) -> &SketchParams {
        &self.params
    }

    /// Frame number the next step will use (starts at 1)
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
