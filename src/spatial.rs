//! Uniform bucket grid over the viewport for picking particles by position.

use crate::float::Float;
use crate::vec::Vec2;
use crate::particle::Particle;
use alloc::vec::Vec as AllocVec;

/// Buckets of particle indices, one per `cell_size` square of the viewport.
///
/// The grid is a snapshot: it is rebuilt from scratch every frame and is
/// stale as soon as any particle moves. Particles outside the viewport are
/// left out until they come back in.
#[derive(Clone, Debug)]
pub struct SpatialGrid<F: Float> {
    cell_size: F,
    columns: usize,
    rows: usize,
    buckets: AllocVec<AllocVec<usize>>,
    indexed: usize,
}

impl<F: Float> SpatialGrid<F> {
    /// An empty grid. Call [`rebuild`](Self::rebuild) before querying.
    pub fn new(cell_size: F) -> Self {
        SpatialGrid {
            cell_size,
            columns: 0,
            rows: 0,
            buckets: AllocVec::new(),
            indexed: 0,
        }
    }

    /// Re-bucket every particle for a `viewport`-sized area.
    ///
    /// Bucket storage is reused between frames. Returns the number of
    /// particles that landed inside the grid.
    pub fn rebuild(&mut self, viewport: Vec2<F>, particles: &[Particle<F>]) -> usize {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.indexed = 0;

        let Some((columns, rows)) = grid_dimensions(viewport, self.cell_size) else {
            log::warn!("spatial grid too large for cell size {}, indexing nothing", self.cell_size);
            self.columns = 0;
            self.rows = 0;
            self.buckets.clear();
            return 0;
        };
        self.columns = columns;
        self.rows = rows;
        self.buckets.resize_with(columns * rows, AllocVec::new);

        for (i, p) in particles.iter().enumerate() {
            if let Some((cx, cy)) = self.cell_of(p.pos) {
                let idx = cx + cy * self.columns;
                self.buckets[idx].push(i);
                self.indexed += 1;
            }
        }
        self.indexed
    }

    /// Unbounded cell coordinates of `point`.
    pub fn cell_coords(&self, point: Vec2<F>) -> (i64, i64) {
        (
            (point.x / self.cell_size).floor().to_i64(),
            (point.y / self.cell_size).floor().to_i64(),
        )
    }

    /// Cell containing `point`, or `None` when it lies outside the grid.
    pub fn cell_of(&self, point: Vec2<F>) -> Option<(usize, usize)> {
        let (cx, cy) = self.cell_coords(point);
        self.in_range(cx, cy)
    }

    fn in_range(&self, cx: i64, cy: i64) -> Option<(usize, usize)> {
        if cx < 0 || cy < 0 {
            return None;
        }
        let (cx, cy) = (cx as usize, cy as usize);
        if cx >= self.columns || cy >= self.rows {
            return None;
        }
        Some((cx, cy))
    }

    /// First particle within `radius_sq` (squared distance) of `point`.
    ///
    /// Scans the 3x3 block of cells centred on the query's cell, column by
    /// column, and returns the first hit in that order. This is not a
    /// nearest-neighbour search: a closer particle later in the scan loses
    /// to an earlier one. Distances use the particles' current positions.
    pub fn particle_near(
        &self,
        point: Vec2<F>,
        radius_sq: F,
        particles: &[Particle<F>],
    ) -> Option<usize> {
        let (cx, cy) = self.cell_coords(point);
        for x in cx.saturating_sub(1)..=cx.saturating_add(1) {
            for y in cy.saturating_sub(1)..=cy.saturating_add(1) {
                let Some((gx, gy)) = self.in_range(x, y) else {
                    continue;
                };
                for &i in &self.buckets[gx + gy * self.columns] {
                    let Some(p) = particles.get(i) else {
                        continue;
                    };
                    if p.pos.distance_sq(point) < radius_sq {
                        return Some(i);
                    }
                }
            }
        }
        None
    }

    /// Particle indices in cell (`cx`, `cy`); empty when out of range.
    pub fn bucket(&self, cx: usize, cy: usize) -> &[usize] {
        if cx >= self.columns || cy >= self.rows {
            return &[];
        }
        &self.buckets[cx + cy * self.columns]
    }

    pub fn cell_size(&self) -> F { self.cell_size }
    pub fn columns(&self) -> usize { self.columns }
    pub fn rows(&self) -> usize { self.rows }
    pub fn bucket_count(&self) -> usize { self.buckets.len() }

    /// Number of particles indexed by the last rebuild.
    pub fn len(&self) -> usize { self.indexed }

    pub fn is_empty(&self) -> bool { self.indexed == 0 }
}

/// Upper bound on `columns * rows` for a single grid.
pub const MAX_GRID_CELLS: usize = 1 << 22;

/// Columns and rows covering `viewport`, or `None` when the grid would
/// exceed [`MAX_GRID_CELLS`].
pub fn grid_dimensions<F: Float>(viewport: Vec2<F>, cell_size: F) -> Option<(usize, usize)> {
    let columns = cells_along(viewport.x, cell_size)?;
    let rows = cells_along(viewport.y, cell_size)?;
    match columns.checked_mul(rows) {
        Some(cells) if cells <= MAX_GRID_CELLS => Some((columns, rows)),
        _ => None,
    }
}

fn cells_along<F: Float>(extent: F, cell_size: F) -> Option<usize> {
    let n = (extent / cell_size).ceil();
    if !n.is_finite() {
        return None;
    }
    let n = n.to_i64();
    if n > 0 { usize::try_from(n).ok() } else { Some(0) }
}
