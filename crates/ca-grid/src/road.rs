//! Road network representation and builder.
//!
//! # Data layout
//!
//! The network is a dense `width * height` array of [`DirSet`] bitsets in
//! row-major order: the allowed departure directions of cell `(x, y)` live
//! at `cells[y * width + x]`.  One byte per cell keeps even large grids
//! cache-resident, and lookup is a single indexed load on the movement
//! engine's hot path.
//!
//! # Topology
//!
//! One-way vertical lanes run up every `block` columns, alternating
//! North/South by lane index; one-way horizontal lanes run across every
//! `block` rows, alternating East/West.  Cells on both a vertical and a
//! horizontal lane are intersections; cells on no lane are not traversable.
//! Both axes wrap toroidally.

use ca_core::{DirSet, Direction};

use crate::{GridError, GridResult};

/// Immutable cell → allowed-departure-direction lookup.
///
/// Built once at startup by every partition; shared read-only thereafter.
pub struct RoadNetwork {
    width: u32,
    height: u32,
    cells: Vec<DirSet>,
}

impl RoadNetwork {
    /// Lay out the periodic one-way lane grid.
    ///
    /// Deterministic, pure function of its inputs — two partitions calling
    /// this with the same configuration get byte-identical networks.
    pub fn build(width: u32, height: u32, block: u32) -> GridResult<RoadNetwork> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        if block == 0 {
            return Err(GridError::InvalidBlock);
        }

        let mut cells = vec![DirSet::EMPTY; (width as usize) * (height as usize)];

        // Vertical one-way lanes, alternating N/S by lane index.
        for (idx, x) in (0..width).step_by(block as usize).enumerate() {
            let dir = if idx % 2 == 0 { Direction::North } else { Direction::South };
            for y in 0..height {
                cells[(y as usize) * (width as usize) + (x as usize)].insert(dir);
            }
        }

        // Horizontal one-way lanes, alternating E/W by lane index.
        for (idx, y) in (0..height).step_by(block as usize).enumerate() {
            let dir = if idx % 2 == 0 { Direction::East } else { Direction::West };
            for x in 0..width {
                cells[(y as usize) * (width as usize) + (x as usize)].insert(dir);
            }
        }

        Ok(RoadNetwork { width, height, cells })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    // ── Cell queries ──────────────────────────────────────────────────────

    /// Allowed departure directions at `(x, y)`.  Coordinates must already
    /// be in-range; use [`wrap`](Self::wrap) first when stepping.
    #[inline]
    pub fn allowed(&self, x: u32, y: u32) -> DirSet {
        self.cells[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// A cell is traversable when at least one lane passes through it.
    #[inline]
    pub fn is_traversable(&self, x: u32, y: u32) -> bool {
        !self.allowed(x, y).is_empty()
    }

    /// A cell is an intersection when its direction set spans both axes.
    #[inline]
    pub fn is_intersection(&self, x: u32, y: u32) -> bool {
        let set = self.allowed(x, y);
        set.has_horizontal() && set.has_vertical()
    }

    // ── Toroidal arithmetic ───────────────────────────────────────────────

    /// Wrap signed coordinates onto the torus.
    #[inline]
    pub fn wrap(&self, x: i64, y: i64) -> (u32, u32) {
        (
            x.rem_euclid(self.width as i64) as u32,
            y.rem_euclid(self.height as i64) as u32,
        )
    }

    /// The cell one step from `(x, y)` in `dir`, wrapping both axes.
    #[inline]
    pub fn step(&self, x: u32, y: u32, dir: Direction) -> (u32, u32) {
        let (dx, dy) = dir.vector();
        self.wrap(x as i64 + dx, y as i64 + dy)
    }

    /// `true` when `dir` is allowed at `(x, y)` *and* the neighbouring cell
    /// in that direction is itself traversable.  This is the departability
    /// test used by turning, advancing, and initial direction assignment.
    #[inline]
    pub fn can_depart(&self, x: u32, y: u32, dir: Direction) -> bool {
        if !self.allowed(x, y).contains(dir) {
            return false;
        }
        let (nx, ny) = self.step(x, y, dir);
        self.is_traversable(nx, ny)
    }

    /// All traversable cells with `y` in `[y_start, y_end)`, row-major.
    /// Used to place agents on roads inside one partition's band.
    pub fn traversable_cells_in_rows(&self, y_start: u32, y_end: u32) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for y in y_start..y_end {
            for x in 0..self.width {
                if self.is_traversable(x, y) {
                    out.push((x, y));
                }
            }
        }
        out
    }
}
