//! Spatial grid - uniform bucket partition for the collision broad phase
//!
//! The viewport is divided into square cells of `cell_size` terminal cells.
//! Each bucket stores the indices of the dancers whose top-left corner lies in
//! that cell. The grid is rebuilt from scratch every tick; bucket allocations
//! are kept between rebuilds.
//!
//! A neighborhood query visits the cell itself plus its 8 neighbors, clipped
//! at the grid edges.

use arrayvec::ArrayVec;

use crate::types::Viewport;

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f32,
    cols: usize,
    rows: usize,
    buckets: Vec<Vec<usize>>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cols: 0,
            rows: 0,
            buckets: Vec::new(),
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Re-dimension the grid for `viewport` and bucket every position.
    ///
    /// Positions outside the grid are skipped.
    pub fn rebuild(
        &mut self,
        cell_size: f32,
        viewport: Viewport,
        positions: impl IntoIterator<Item = (f32, f32)>,
    ) {
        self.cell_size = cell_size;
        self.cols = (viewport.extent_x() / cell_size).ceil() as usize;
        self.rows = (viewport.extent_y() / cell_size).ceil() as usize;

        let len = self.cols * self.rows;
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.buckets.resize_with(len, Vec::new);

        for (i, (x, y)) in positions.into_iter().enumerate() {
            if let Some((cx, cy)) = self.cell_of(x, y) {
                self.buckets[cy * self.cols + cx].push(i);
            }
        }
    }

    /// Cell containing `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn cell_of(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        // Also rejects NaN.
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let cx = (x / self.cell_size).floor() as usize;
        let cy = (y / self.cell_size).floor() as usize;
        if cx >= self.cols || cy >= self.rows {
            return None;
        }
        Some((cx, cy))
    }

    /// Indices stored in one cell.
    pub fn bucket(&self, cx: usize, cy: usize) -> &[usize] {
        if cx >= self.cols || cy >= self.rows {
            return &[];
        }
        &self.buckets[cy * self.cols + cx]
    }

    /// Bucket indices of the 3x3 neighborhood around `(cx, cy)`.
    pub fn neighbor_cells(&self, cx: usize, cy: usize) -> ArrayVec<usize, 9> {
        let mut out = ArrayVec::new();
        let (cols, rows) = (self.cols as isize, self.rows as isize);

        for dy in -1..=1isize {
            let ny = cy as isize + dy;
            if ny < 0 || ny >= rows {
                continue;
            }
            for dx in -1..=1isize {
                let nx = cx as isize + dx;
                if nx < 0 || nx >= cols {
                    continue;
                }
                out.push((ny * cols + nx) as usize);
            }
        }
        out
    }

    /// Every dancer index in the 3x3 neighborhood around `(cx, cy)`.
    pub fn neighbors(&self, cx: usize, cy: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbor_cells(cx, cy)
            .into_iter()
            .flat_map(move |b| self.buckets[b].iter().copied())
    }

    /// Number of bucketed dancers.
    pub fn occupancy(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}
