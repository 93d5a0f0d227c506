//! Draw list composition
//!
//! Layers, back to front:
//! 1. Links between lattice neighbours
//! 2. Point glyphs, plus noise-directed extension lines on strongly disturbed points
//! 3. Stepped connectors from the points nearest the pointer to the pointer

use std::f32::consts::TAU;

use pgrid_math::{lerp, map_range, Vec2};

use crate::draw::{DrawList, Rgba};
use crate::field::PointerSample;
use crate::flow_noise::FlowNoise;
use crate::grid::Grid;

/// Colors, alphas (0-255 scale) and weights for links and points
#[derive(Clone, Debug, PartialEq)]
pub struct StyleParams {
    /// Accent RGB used by every shape
    pub accent: [u8; 3],
    /// Link alpha at zero and full activation
    pub link_alpha: [f32; 2],
    /// Link weight at zero and full activation
    pub link_weight: [f32; 2],
    pub idle_point_alpha: f32,
    pub active_point_alpha: f32,
    /// Glyph growth per pixel of distortion
    pub point_growth: f32,
    pub extension_alpha: f32,
    /// Extension lines appear once `line_length` exceeds this fraction of the spacing
    pub extension_threshold: f32,
    /// Extension weight as a fraction of the glyph size
    pub extension_weight: f32,
    /// Scale applied to rest positions before sampling noise
    pub noise_scale: f32,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            accent: [196, 253, 82],
            link_alpha: [15.0, 40.0],
            link_weight: [0.4, 0.8],
            idle_point_alpha: 20.0,
            active_point_alpha: 60.0,
            point_growth: 0.15,
            extension_alpha: 35.0,
            extension_threshold: 0.5,
            extension_weight: 0.5,
            noise_scale: 0.01,
        }
    }
}

/// Pointer connector tuning
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorParams {
    /// Search radius around the pointer, in pixels
    pub radius: f32,
    /// Connectors are drawn only above this pointer speed
    pub min_speed: f32,
    /// Pointer speed range mapped onto `count`
    pub speed_range: [f32; 2],
    /// Connector count at the ends of `speed_range` (extrapolated beyond it)
    pub count: [f32; 2],
    /// Alpha of the nearest and (towards) the farthest connector
    pub alpha: [f32; 2],
    /// Weight of the nearest and (towards) the farthest connector
    pub weight: [f32; 2],
    /// Segments per connector, alternating horizontal and vertical
    pub steps: u32,
}

impl Default for ConnectorParams {
    fn default() -> Self {
        Self {
            radius: 125.0,
            min_speed: 1.0,
            speed_range: [1.0, 20.0],
            count: [1.0, 4.0],
            alpha: [50.0, 20.0],
            weight: [0.7, 0.3],
            steps: 2,
        }
    }
}

/// Compose the full frame into `out` (which is cleared first)
pub fn compose(
    grid: &Grid,
    pointer: Option<PointerSample>,
    style: &StyleParams,
    connectors: &ConnectorParams,
    noise: &FlowNoise,
    out: &mut DrawList,
) {
    out.clear();
    compose_links(grid, style, out);
    compose_points(grid, style, noise, out);
    if let Some(sample) = pointer {
        compose_connectors(grid, &sample, style, connectors, out);
    }
}

/// Lines between linked neighbours, brighter when either end is active
///
/// Every link is stroked from both ends, so the two translucent lines stack.
pub fn compose_links(grid: &Grid, style: &StyleParams, out: &mut DrawList) {
    let points = grid.points();
    let spacing = grid.spacing();

    for link in grid.links() {
        let p1 = &points[link.a];
        let p2 = &points[link.b];

        let (alpha, weight) = if p1.activated || p2.activated {
            let level = p1.distortion.max(p2.distortion) / spacing;
            (
                map_range(level, 0.0, 1.0, style.link_alpha[0], style.link_alpha[1]),
                map_range(level, 0.0, 1.0, style.link_weight[0], style.link_weight[1]),
            )
        } else {
            (style.link_alpha[0], style.link_weight[0])
        };

        let color = Rgba::from_rgb8(style.accent, alpha);
        out.line(p1.position, p2.position, weight, color);
        out.line(p2.position, p1.position, weight, color);
    }
}

/// Point glyphs and extension lines
pub fn compose_points(grid: &Grid, style: &StyleParams, noise: &FlowNoise, out: &mut DrawList) {
    let idle = Rgba::from_rgb8(style.accent, style.idle_point_alpha);
    let active = Rgba::from_rgb8(style.accent, style.active_point_alpha);
    let extension = Rgba::from_rgb8(style.accent, style.extension_alpha);
    let threshold = grid.spacing() * style.extension_threshold;

    for point in grid.points() {
        if !point.activated {
            out.square(point.position, point.size, idle);
            continue;
        }

        let side = point.size + point.distortion * style.point_growth;
        out.square(point.position, side, active);

        if point.line_length > threshold {
            let angle = noise.sample(
                point.origin.x * style.noise_scale,
                point.origin.y * style.noise_scale,
            ) * TAU;
            let tip = point.position + Vec2::from_angle(angle) * point.line_length;
            out.line(point.position, tip, point.size * style.extension_weight, extension);
        }
    }
}

/// Stepped connectors from the closest points to the pointer
pub fn compose_connectors(
    grid: &Grid,
    sample: &PointerSample,
    style: &StyleParams,
    params: &ConnectorParams,
    out: &mut DrawList,
) {
    let speed = sample.speed();
    if speed <= params.min_speed {
        return;
    }

    let target = sample.position;
    let mut nearby: Vec<(f32, Vec2)> = grid
        .points()
        .iter()
        .map(|p| (p.position.distance(target), p.position))
        .filter(|(d, _)| *d < params.radius)
        .collect();

    if nearby.len() < 2 {
        return;
    }
    nearby.sort_by(|a, b| a.0.total_cmp(&b.0));

    let count = connector_count(speed, params).min(nearby.len());
    let steps = params.steps.max(1);

    for (i, &(_, start)) in nearby.iter().take(count).enumerate() {
        let i = i as f32;
        let n = count as f32;
        let color = Rgba::from_rgb8(
            style.accent,
            map_range(i, 0.0, n, params.alpha[0], params.alpha[1]),
        );
        let weight = map_range(i, 0.0, n, params.weight[0], params.weight[1]);

        let mut prev = start;
        for j in 1..=steps {
            let ratio = j as f32 / steps as f32;
            let next = if j % 2 == 1 {
                Vec2::new(lerp(prev.x, target.x, ratio), prev.y)
            } else {
                Vec2::new(prev.x, lerp(prev.y, target.y, ratio))
            };
            out.line(prev, next, weight, color);
            prev = next;
        }
    }
}

/// Number of connectors for a given pointer speed (before limiting to available points)
pub fn connector_count(speed: f32, params: &ConnectorParams) -> usize {
    map_range(
        speed,
        params.speed_range[0],
        params.speed_range[1],
        params.count[0],
        params.count[1],
    )
    .floor()
    .max(0.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Shape;
    use crate::grid::GridParams;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn flat_grid(width: f32, height: f32) -> Grid {
        let params = GridParams {
            jitter: 0.0,
            ..GridParams::default()
        };
        Grid::generate(width, height, &params, &mut StdRng::seed_from_u64(11))
    }

    fn alpha_of(shape: &Shape) -> f32 {
        match shape {
            Shape::Line { color, .. } | Shape::Rect { color, .. } => color.a * 255.0,
        }
    }

    #[test]
    fn test_idle_frame() {
        let grid = flat_grid(120.0, 120.0);
        let mut out = DrawList::new();
        compose(
            &grid,
            None,
            &StyleParams::default(),
            &ConnectorParams::default(),
            &FlowNoise::new(0),
            &mut out,
        );

        let link_lines = 2 * grid.links().len();
        assert_eq!(out.line_count(), link_lines);
        assert_eq!(out.rect_count(), grid.len());
        for shape in &out.shapes()[..link_lines] {
            match shape {
                Shape::Line { weight, .. } => assert!((weight - 0.4).abs() < 1e-6),
                other => panic!("expected line, got {:?}", other),
            }
            assert!((alpha_of(shape) - 15.0).abs() < 1e-3);
        }
        for shape in &out.shapes()[link_lines..] {
            assert!((alpha_of(shape) - 20.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_active_link_scales_with_distortion() {
        let mut grid = flat_grid(80.0, 40.0);
        {
            let p = &mut grid.points_mut()[0];
            p.activated = true;
            p.distortion = 20.0;
        }
        let mut out = DrawList::new();
        compose_links(&grid, &StyleParams::default(), &mut out);

        assert_eq!(out.len(), 2);
        for shape in out.shapes() {
            match *shape {
                Shape::Line { weight, color, .. } => {
                    // level 0.5 -> halfway between 15..40 and 0.4..0.8
                    assert!((color.a * 255.0 - 27.5).abs() < 1e-3);
                    assert!((weight - 0.6).abs() < 1e-6);
                }
                other => panic!("expected line, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_link_stroked_from_both_ends() {
        let grid = flat_grid(80.0, 40.0);
        assert_eq!(grid.links().len(), 1);

        let mut out = DrawList::new();
        compose_links(&grid, &StyleParams::default(), &mut out);

        let a = grid.points()[0].position;
        let b = grid.points()[1].position;
        assert_eq!(out.line_count(), 2);
        match (out.shapes()[0], out.shapes()[1]) {
            (
                Shape::Line { from: f0, to: t0, .. },
                Shape::Line { from: f1, to: t1, .. },
            ) => {
                assert_eq!((f0, t0), (a, b));
                assert_eq!((f1, t1), (b, a));
            }
            other => panic!("expected lines, got {:?}", other),
        }
    }

    #[test]
    fn test_active_point_glyph_and_extension() {
        let mut grid = flat_grid(40.0, 40.0);
        {
            let p = &mut grid.points_mut()[0];
            p.activated = true;
            p.distortion = 10.0;
            p.line_length = 30.0;
        }
        let size = grid.points()[0].size;
        let mut out = DrawList::new();
        compose_points(&grid, &StyleParams::default(), &FlowNoise::new(1), &mut out);

        assert_eq!(out.len(), 2);
        match out.shapes()[0] {
            Shape::Rect { size: s, color, .. } => {
                assert!((s.x - (size + 1.5)).abs() < 1e-5);
                assert!((color.a * 255.0 - 60.0).abs() < 1e-3);
            }
            other => panic!("expected rect, got {:?}", other),
        }
        match out.shapes()[1] {
            Shape::Line { from, to, weight, .. } => {
                assert!((from.distance(to) - 30.0).abs() < 1e-3);
                assert!((weight - size * 0.5).abs() < 1e-6);
            }
            other => panic!("expected line, got {:?}", other),
        }
    }

    #[test]
    fn test_short_extension_is_skipped() {
        let mut grid = flat_grid(40.0, 40.0);
        {
            let p = &mut grid.points_mut()[0];
            p.activated = true;
            p.line_length = 20.0;
        }
        let mut out = DrawList::new();
        compose_points(&grid, &StyleParams::default(), &FlowNoise::new(1), &mut out);
        assert_eq!(out.line_count(), 0);
    }

    #[test]
    fn test_connector_count() {
        let params = ConnectorParams::default();
        assert_eq!(connector_count(1.5, &params), 1);
        assert_eq!(connector_count(20.0, &params), 4);
        // Not clamped above the speed range
        assert_eq!(connector_count(39.0, &params), 7);
    }

    #[test]
    fn test_connectors_need_speed() {
        let grid = flat_grid(200.0, 200.0);
        let sample = PointerSample::new(Vec2::new(60.0, 60.0), Vec2::new(1.0, 0.0));
        let mut out = DrawList::new();
        compose_connectors(
            &grid,
            &sample,
            &StyleParams::default(),
            &ConnectorParams::default(),
            &mut out,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_connectors_need_two_nearby_points() {
        let grid = flat_grid(40.0, 40.0);
        assert_eq!(grid.len(), 1);
        let sample = PointerSample::new(Vec2::new(10.0, 10.0), Vec2::new(30.0, 0.0));
        let mut out = DrawList::new();
        compose_connectors(
            &grid,
            &sample,
            &StyleParams::default(),
            &ConnectorParams::default(),
            &mut out,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_connector_count_limited_to_nearby_points() {
        // Three points in a row at x = 0, 40, 80
        let grid = flat_grid(120.0, 40.0);
        assert_eq!(grid.len(), 3);
        // Speed 39 asks for 7 connectors
        let sample = PointerSample::new(Vec2::new(40.0, 10.0), Vec2::new(15.0, 36.0));
        let mut out = DrawList::new();
        compose_connectors(
            &grid,
            &sample,
            &StyleParams::default(),
            &ConnectorParams::default(),
            &mut out,
        );
        assert_eq!(out.line_count(), 3 * 2);
    }

    #[test]
    fn test_connectors_step_towards_pointer() {
        let grid = flat_grid(200.0, 200.0);
        // Speed 20 -> 4 connectors, 2 segments each
        let sample = PointerSample::new(Vec2::new(50.0, 50.0), Vec2::new(12.0, 16.0));
        let mut out = DrawList::new();
        compose_connectors(
            &grid,
            &sample,
            &StyleParams::default(),
            &ConnectorParams::default(),
            &mut out,
        );
        assert_eq!(out.line_count(), 8);

        for pair in out.shapes().chunks(2) {
            match (pair[0], pair[1]) {
                (
                    Shape::Line { from: a0, to: a1, .. },
                    Shape::Line { from: b0, to: b1, .. },
                ) => {
                    // First segment is horizontal, halfway to the pointer
                    assert_eq!(a0.y, a1.y);
                    assert!((a1.x - (a0.x + 50.0) * 0.5).abs() < 1e-4);
                    // Second is vertical and ends level with the pointer
                    assert_eq!(b0, a1);
                    assert_eq!(b0.x, b1.x);
                    assert!((b1.y - 50.0).abs() < 1e-4);
                }
                other => panic!("expected lines, got {:?}", other),
            }
        }

        // Nearest connector is the most opaque
        let first = alpha_of(&out.shapes()[0]);
        let last = alpha_of(&out.shapes()[7]);
        assert!((first - 50.0).abs() < 1e-3);
        assert!(first > last);
    }
}
