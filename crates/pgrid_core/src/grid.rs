//! Jittered lattice of points
//!
//! Points are laid out column by column (x outer, y inner). Neighbour links
//! depend only on rest positions, so they are computed once per generation.

use pgrid_math::Vec2;
use rand::Rng;

use crate::point::GridPoint;
use crate::random_between;

/// Parameters for laying out the lattice
#[derive(Clone, Debug, PartialEq)]
pub struct GridParams {
    /// Distance between lattice cells in pixels
    pub spacing: f32,
    /// Maximum rest-position offset on each axis
    pub jitter: f32,
    /// Smallest glyph size
    pub min_size: f32,
    /// Largest glyph size (exclusive)
    pub max_size: f32,
    /// Rest positions within `link_factor * spacing` are linked
    pub link_factor: f32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            spacing: 40.0,
            jitter: 5.0,
            min_size: 1.0,
            max_size: 2.0,
            link_factor: 1.5,
        }
    }
}

impl GridParams {
    /// Absolute link radius in pixels
    pub fn link_radius(&self) -> f32 {
        self.spacing * self.link_factor
    }
}

/// Unordered pair of point indices joined by a grid line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Link {
    pub a: usize,
    pub b: usize,
}

/// The point lattice
#[derive(Clone, Debug, Default)]
pub struct Grid {
    points: Vec<GridPoint>,
    links: Vec<Link>,
    columns: usize,
    rows: usize,
    spacing: f32,
}

impl Grid {
    /// Lay out a lattice covering `width` x `height`
    ///
    /// Cells start at 0 and step by `spacing` while strictly inside the area,
    /// so a zero-sized area produces an empty grid.
    pub fn generate<R: Rng + ?Sized>(width: f32, height: f32, params: &GridParams, rng: &mut R) -> Self {
        let spacing = params.spacing.max(1.0);
        let columns = cell_count(width, spacing);
        let rows = cell_count(height, spacing);

        let mut points = Vec::with_capacity(columns * rows);
        for c in 0..columns {
            for r in 0..rows {
                let offset = Vec2::new(
                    random_between(rng, -params.jitter, params.jitter),
                    random_between(rng, -params.jitter, params.jitter),
                );
                let origin = Vec2::new(c as f32 * spacing, r as f32 * spacing) + offset;
                let size = random_between(rng, params.min_size, params.max_size);
                points.push(GridPoint::new(origin, size));
            }
        }

        let mut grid = Self {
            points,
            links: Vec::new(),
            columns,
            rows,
            spacing,
        };
        grid.links = grid.find_links(params.link_radius(), params.jitter.abs());
        grid
    }

    /// All points in lattice order
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Mutable access to the points (rest positions should be left alone)
    pub fn points_mut(&mut self) -> &mut [GridPoint] {
        &mut self.points
    }

    /// Cached neighbour links
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the grid has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of lattice columns
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of lattice rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Lattice spacing in pixels
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Index of lattice cell (column, row)
    #[inline]
    pub fn index(&self, column: usize, row: usize) -> usize {
        column * self.rows + row
    }

    /// Find every pair of rest positions within `radius`
    ///
    /// Only cells within `reach` lattice steps can qualify; the reach accounts
    /// for the worst case where jitter pulls two points together.
    fn find_links(&self, radius: f32, jitter: f32) -> Vec<Link> {
        let reach = ((radius + 2.0 * jitter * std::f32::consts::SQRT_2) / self.spacing)
            .ceil()
            .max(1.0) as usize;
        let radius_sq = radius * radius;
        let mut links = Vec::new();

        for c in 0..self.columns {
            for r in 0..self.rows {
                let a = self.index(c, r);
                let c_end = (c + reach).min(self.columns - 1);
                for c2 in c..=c_end {
                    let r_start = if c2 == c { r + 1 } else { r.saturating_sub(reach) };
                    let r_end = (r + reach).min(self.rows - 1);
                    for r2 in r_start..=r_end {
                        let b = self.index(c2, r2);
                        let d = self.points[b].origin - self.points[a].origin;
                        if d.length_squared() <= radius_sq {
                            links.push(Link { a, b });
                        }
                    }
                }
            }
        }

        links
    }
}

fn cell_count(extent: f32, spacing: f32) -> usize {
    if extent <= 0.0 {
        0
    } else {
        (extent / spacing).ceil() as usize
    }
}
