//! Draw list handed from the sketch to the renderer

use pgrid_math::Vec2;

/// Straight-alpha color with components in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from 8-bit RGB and an alpha on the 0-255 scale
    pub fn from_rgb8(rgb: [u8; 3], alpha: f32) -> Self {
        Self {
            r: rgb[0] as f32 / 255.0,
            g: rgb[1] as f32 / 255.0,
            b: rgb[2] as f32 / 255.0,
            a: (alpha / 255.0).clamp(0.0, 1.0),
        }
    }

    /// Same color with alpha multiplied by `factor`
    pub fn fade(self, factor: f32) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A single drawing primitive
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Stroked segment of the given weight (pixels)
    Line {
        from: Vec2,
        to: Vec2,
        weight: f32,
        color: Rgba,
    },
    /// Filled axis-aligned rectangle
    Rect {
        min: Vec2,
        size: Vec2,
        color: Rgba,
    },
}

/// Ordered shapes; later shapes draw over earlier ones
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    shapes: Vec<Shape>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all shapes, keeping the allocation
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Rgba) {
        self.shapes.push(Shape::Line { from, to, weight, color });
    }

    /// Square of side `side` centred on `center`
    pub fn square(&mut self, center: Vec2, side: f32, color: Rgba) {
        let half = side * 0.5;
        self.shapes.push(Shape::Rect {
            min: center - Vec2::new(half, half),
            size: Vec2::new(side, side),
            color,
        });
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Number of line shapes
    pub fn line_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::Line { .. }))
            .count()
    }

    /// Number of rect shapes
    pub fn rect_count(&self) -> usize {
        self.shapes.len() - self.line_count()
    }
}
