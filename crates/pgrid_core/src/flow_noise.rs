//! Smooth 2D noise in `[0, 1]`

use noise::{NoiseFn, Perlin};

/// Perlin noise remapped from `[-1, 1]` to `[0, 1]`
#[derive(Clone)]
pub struct FlowNoise {
    perlin: Perlin,
}

impl FlowNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Sample at (x, y)
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let v = self.perlin.get([x as f64, y as f64]);
        ((v * 0.5 + 0.5) as f32).clamp(0.0, 1.0)
    }
}
