//! Shape tessellation - bridges the draw list to GPU vertices
//!
//! Lines become quads of their stroke weight and rects become two triangles.
//! Strokes thinner than `min_line_width` are widened to it and faded by the
//! same ratio, which approximates the coverage of a sub-pixel line.

use pgrid_core::{DrawList, Rgba, Shape};
use pgrid_math::Vec2;

use crate::pipeline::{Vertex2D, VERTICES_PER_SHAPE};

/// GPU-ready triangles collected from a draw list
pub struct ShapeGeometry {
    /// Triangle-list vertices in logical pixels
    pub vertices: Vec<Vertex2D>,
    /// Thinnest stroke emitted, in logical pixels
    min_line_width: f32,
}

impl Default for ShapeGeometry {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeGeometry {
    /// Create empty geometry with a one-pixel minimum stroke
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            min_line_width: 1.0,
        }
    }

    /// Builder: set the minimum stroke width
    pub fn with_min_line_width(mut self, width: f32) -> Self {
        self.set_min_line_width(width);
        self
    }

    /// Set the minimum stroke width (e.g. one device pixel in logical units)
    pub fn set_min_line_width(&mut self, width: f32) {
        self.min_line_width = width.max(f32::EPSILON);
    }

    pub fn min_line_width(&self) -> f32 {
        self.min_line_width
    }

    /// Replace the contents with the tessellation of `list`
    pub fn rebuild(&mut self, list: &DrawList) {
        self.clear();
        self.vertices.reserve(list.len() * VERTICES_PER_SHAPE);
        for shape in list.shapes() {
            self.add_shape(shape);
        }
    }

    /// Append one shape
    pub fn add_shape(&mut self, shape: &Shape) {
        match *shape {
            Shape::Line { from, to, weight, color } => self.add_line(from, to, weight, color),
            Shape::Rect { min, size, color } => self.add_rect(min, size, color),
        }
    }

    fn add_line(&mut self, from: Vec2, to: Vec2, weight: f32, color: Rgba) {
        let dir = to - from;
        if dir.length_squared() <= f32::EPSILON || weight <= 0.0 || color.a <= 0.0 {
            return;
        }

        let (width, color) = if weight < self.min_line_width {
            (self.min_line_width, color.fade(weight / self.min_line_width))
        } else {
            (weight, color)
        };

        let n = dir.normalized().perp() * (width * 0.5);
        self.push_quad([from + n, to + n, to - n, from - n], color);
    }

    fn add_rect(&mut self, min: Vec2, size: Vec2, color: Rgba) {
        if size.x <= 0.0 || size.y <= 0.0 || color.a <= 0.0 {
            return;
        }
        let max = min + size;
        self.push_quad(
            [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)],
            color,
        );
    }

    fn push_quad(&mut self, corners: [Vec2; 4], color: Rgba) {
        let c = color.to_array();
        for i in [0, 1, 2, 0, 2, 3] {
            self.vertices.push(Vertex2D::new(corners[i].to_array(), c));
        }
    }

    /// Clear all geometry
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accent(alpha: f32) -> Rgba {
        Rgba::from_rgb8([196, 253, 82], alpha)
    }

    #[test]
    fn test_rebuild_counts() {
        let mut list = DrawList::new();
        list.line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, accent(255.0));
        list.square(Vec2::new(5.0, 5.0), 2.0, accent(255.0));

        let mut geometry = ShapeGeometry::new();
        geometry.rebuild(&list);
        assert_eq!(geometry.vertex_count(), 2 * VERTICES_PER_SHAPE);

        // Rebuild replaces rather than appends
        geometry.rebuild(&list);
        assert_eq!(geometry.vertex_count(), 2 * VERTICES_PER_SHAPE);
    }

    #[test]
    fn test_line_quad_has_stroke_width() {
        let mut geometry = ShapeGeometry::new();
        geometry.add_shape(&Shape::Line {
            from: Vec2::new(0.0, 0.0),
            to: Vec2::new(10.0, 0.0),
            weight: 4.0,
            color: accent(255.0),
        });

        let ys: Vec<f32> = geometry.vertices.iter().map(|v| v.position[1]).collect();
        let min = ys.iter().cloned().fold(f32::MAX, f32::min);
        let max = ys.iter().cloned().fold(f32::MIN, f32::max);
        assert!((max - min - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_thin_line_is_widened_and_faded() {
        let mut geometry = ShapeGeometry::new().with_min_line_width(1.0);
        geometry.add_shape(&Shape::Line {
            from: Vec2::new(0.0, 0.0),
            to: Vec2::new(0.0, 10.0),
            weight: 0.4,
            color: Rgba::new(1.0, 1.0, 1.0, 0.5),
        });

        let xs: Vec<f32> = geometry.vertices.iter().map(|v| v.position[0]).collect();
        let span = xs.iter().cloned().fold(f32::MIN, f32::max)
            - xs.iter().cloned().fold(f32::MAX, f32::min);
        assert!((span - 1.0).abs() < 1e-5);
        assert!((geometry.vertices[0].color[3] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_shapes_skipped() {
        let mut geometry = ShapeGeometry::new();
        geometry.add_shape(&Shape::Line {
            from: Vec2::new(3.0, 3.0),
            to: Vec2::new(3.0, 3.0),
            weight: 1.0,
            color: accent(255.0),
        });
        geometry.add_shape(&Shape::Rect {
            min: Vec2::ZERO,
            size: Vec2::new(0.0, 2.0),
            color: accent(255.0),
        });
        assert_eq!(geometry.vertex_count(), 0);
    }

    #[test]
    fn test_rect_corners() {
        let mut geometry = ShapeGeometry::new();
        geometry.add_shape(&Shape::Rect {
            min: Vec2::new(1.0, 2.0),
            size: Vec2::new(3.0, 4.0),
            color: accent(60.0),
        });
        let positions: Vec<[f32; 2]> = geometry.vertices.iter().map(|v| v.position).collect();
        assert!(positions.contains(&[1.0, 2.0]));
        assert!(positions.contains(&[4.0, 6.0]));
        assert!(positions.contains(&[4.0, 2.0]));
        assert!(positions.contains(&[1.0, 6.0]));
    }
}
