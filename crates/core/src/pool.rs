//! Dancer pool - owns the population and runs the per-tick pipeline
//!
//! One tick is: integrate every dancer, rebuild the spatial grid, find and
//! resolve colliding pairs through the grid, then confine positions to the
//! viewport. Drawing is a separate pass that emits dancers sorted by `y`.
//!
//! # Collision order
//!
//! Every unordered pair is considered once per tick under the key `(i, j)`
//! with `i < j`, no matter which grid cell found it, and pairs are resolved in
//! ascending key order. The narrow phase is re-checked right before each
//! resolution because an earlier resolution may already have separated a
//! later pair.
//!
//! With the `parallel` feature the candidate search (read-only) fans out over
//! rayon; resolution itself always runs on the calling thread, so no two
//! resolutions ever touch the same dancer concurrently.

use crate::dancer::{Dancer, Forces};
use crate::error::DanceError;
use crate::grid::SpatialGrid;
use crate::rng::DanceRng;
use crate::sink::DrawSink;
use crate::tuning::Tuning;
use crate::types::{Variant, Viewport, SPAWN_MARGIN_X, SPAWN_MARGIN_Y};

/// Below this population the rayon fan-out costs more than it saves.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_DANCERS: usize = 256;

#[derive(Debug, Clone)]
pub struct DancerPool {
    dancers: Vec<Dancer>,
    grid: SpatialGrid,
    tuning: Tuning,
    /// Canonical `(i, j)` candidate pairs from the last broad+narrow pass.
    candidates: Vec<(usize, usize)>,
    /// Reused depth-sort buffer.
    order: Vec<usize>,
}

impl DancerPool {
    pub fn new(tuning: Tuning) -> Result<Self, DanceError> {
        tuning.validate()?;
        Ok(Self {
            dancers: Vec::new(),
            grid: SpatialGrid::new(tuning.cell_size),
            tuning,
            candidates: Vec::new(),
            order: Vec::new(),
        })
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn len(&self) -> usize {
        self.dancers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dancers.is_empty()
    }

    pub fn dancers(&self) -> &[Dancer] {
        &self.dancers
    }

    pub fn dancers_mut(&mut self) -> &mut [Dancer] {
        &mut self.dancers
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    pub fn add(&mut self, dancer: Dancer) {
        self.dancers.push(dancer);
    }

    pub fn clear(&mut self) {
        self.dancers.clear();
        self.candidates.clear();
    }

    /// Replace the population with `count` freshly spawned dancers.
    pub fn respawn(&mut self, count: usize, viewport: Viewport, rng: &mut DanceRng) {
        self.clear();
        self.grow(count, viewport, rng);
    }

    /// Add `count` dancers at random positions with random variants.
    pub fn grow(&mut self, count: usize, viewport: Viewport, rng: &mut DanceRng) {
        let max_x = viewport.width.saturating_sub(SPAWN_MARGIN_X) as f32;
        let max_y = viewport.height.saturating_sub(SPAWN_MARGIN_Y) as f32;

        self.dancers.reserve(count);
        for _ in 0..count {
            let x = rng.up_to(max_x).floor();
            let y = rng.up_to(max_y).floor();
            let variant = rng.pick(&Variant::ALL).unwrap_or(Variant::Cat);
            self.dancers.push(Dancer::spawn(x, y, variant, rng));
        }
    }

    /// Instantaneous impulse, scaled by each dancer's inverse mass.
    pub fn apply_force(&mut self, fx: f32, fy: f32) {
        for d in &mut self.dancers {
            d.vx += fx / d.mass();
            d.vy += fy / d.mass();
        }
    }

    /// Run one full tick. Returns the number of resolved collisions.
    pub fn step(
        &mut self,
        dt: f32,
        forces: Forces,
        viewport: Viewport,
        rng: &mut DanceRng,
    ) -> usize {
        self.integrate(dt, forces, viewport, rng);
        self.rebuild_grid(viewport);
        let resolved = self.resolve_collisions();
        self.confine(viewport);
        resolved
    }

    pub fn integrate(&mut self, dt: f32, forces: Forces, viewport: Viewport, rng: &mut DanceRng) {
        let tuning = self.tuning;
        for d in &mut self.dancers {
            d.integrate(dt, forces, viewport, &tuning, rng);
        }
    }

    /// Cell size actually used: large enough that overlapping boxes always
    /// sit in the same or adjacent cells.
    pub fn effective_cell_size(&self) -> f32 {
        self.dancers
            .iter()
            .fold(self.tuning.cell_size, |acc, d| acc.max(d.width()).max(d.height()))
    }

    pub fn rebuild_grid(&mut self, viewport: Viewport) {
        let cell_size = self.effective_cell_size();
        self.grid
            .rebuild(cell_size, viewport, self.dancers.iter().map(|d| (d.x, d.y)));
    }

    /// Broad + narrow phase against the current grid.
    ///
    /// Only valid right after [`rebuild_grid`](Self::rebuild_grid).
    pub fn collision_candidates(&mut self) -> &[(usize, usize)] {
        self.candidates.clear();
        let per_dancer = search_partners(&self.grid, &self.dancers);
        for (i, partners) in per_dancer.into_iter().enumerate() {
            self.candidates.extend(partners.into_iter().map(|j| (i, j)));
        }
        &self.candidates
    }

    /// Resolve every colliding pair once, in canonical order.
    pub fn resolve_collisions(&mut self) -> usize {
        self.collision_candidates();

        let mut resolved = 0;
        for k in 0..self.candidates.len() {
            let (i, j) = self.candidates[k];
            let (head, tail) = self.dancers.split_at_mut(j);
            let (a, b) = (&mut head[i], &mut tail[0]);
            if a.collides_with(b) {
                a.resolve_collision(b);
                resolved += 1;
            }
        }
        resolved
    }

    /// Pull everyone back inside the viewport after collision pushes.
    pub fn confine(&mut self, viewport: Viewport) {
        for d in &mut self.dancers {
            d.confine(viewport);
        }
    }

    /// Indices sorted by ascending `y` (stable), i.e. back to front.
    pub fn depth_order(&mut self) -> &[usize] {
        self.order.clear();
        self.order.extend(0..self.dancers.len());
        let dancers = &self.dancers;
        self.order.sort_by(|&a, &b| dancers[a].y.total_cmp(&dancers[b].y));
        &self.order
    }

    /// Emit every dancer to `sink`, back to front.
    pub fn draw<S: DrawSink + ?Sized>(&mut self, sink: &mut S) {
        self.depth_order();
        for &i in &self.order {
            self.dancers[i].draw(sink);
        }
    }
}

impl Default for DancerPool {
    fn default() -> Self {
        Self {
            dancers: Vec::new(),
            grid: SpatialGrid::new(Tuning::default().cell_size),
            tuning: Tuning::default(),
            candidates: Vec::new(),
            order: Vec::new(),
        }
    }
}

#[cfg(feature = "parallel")]
fn search_partners(grid: &SpatialGrid, dancers: &[Dancer]) -> Vec<Vec<usize>> {
    use rayon::prelude::*;

    if dancers.len() < PARALLEL_MIN_DANCERS {
        return (0..dancers.len()).map(|i| partners_of(grid, dancers, i)).collect();
    }
    (0..dancers.len())
        .into_par_iter()
        .map(|i| partners_of(grid, dancers, i))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn search_partners(grid: &SpatialGrid, dancers: &[Dancer]) -> Vec<Vec<usize>> {
    (0..dancers.len()).map(|i| partners_of(grid, dancers, i)).collect()
}

/// Colliding partners `j > i` of dancer `i` found through its 3x3 neighborhood.
fn partners_of(grid: &SpatialGrid, dancers: &[Dancer], i: usize) -> Vec<usize> {
    let me = &dancers[i];
    let Some((cx, cy)) = grid.cell_of(me.x, me.y) else {
        return Vec::new();
    };

    let mut out: Vec<usize> = grid
        .neighbors(cx, cy)
        .filter(|&j| j > i && me.collides_with(&dancers[j]))
        .collect();
    out.sort_unstable();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dancer::DancerParams;
    use crate::sink::DrawCall;

    fn box_at(x: f32, y: f32) -> Dancer {
        Dancer::with_frames(
            x,
            y,
            Variant::Bear,
            vec!["0123456789".to_string()],
            DancerParams::default(),
        )
        .unwrap()
    }

    fn calm_pool() -> DancerPool {
        DancerPool::new(Tuning::default().without_jitter()).unwrap()
    }

    #[test]
    fn rejects_invalid_tuning() {
        let err = DancerPool::new(Tuning::default().with_cell_size(-1.0)).unwrap_err();
        assert!(matches!(err, DanceError::InvalidTuning(_)));
    }

    #[test]
    fn apply_force_scales_by_inverse_mass() {
        let mut pool = calm_pool();
        let params = DancerParams {
            mass: 2.0,
            ..DancerParams::default()
        };
        pool.add(Dancer::new(0.0, 0.0, Variant::Cat, params).unwrap());
        pool.apply_force(10.0, 0.0);
        assert_eq!(pool.dancers()[0].vx, 5.0);
        assert_eq!(pool.dancers()[0].vy, 0.0);
    }

    #[test]
    fn candidates_are_canonical_and_unique() {
        let mut pool = calm_pool();
        pool.add(box_at(10.0, 10.0));
        pool.add(box_at(15.0, 10.0));
        pool.add(box_at(19.0, 10.5));
        pool.add(box_at(60.0, 30.0));
        pool.rebuild_grid(Viewport::new(100, 40));

        let pairs = pool.collision_candidates().to_vec();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn pairs_straddling_cells_are_found() {
        let mut pool = calm_pool();
        // Cell boundary at x = 20.
        pool.add(box_at(15.0, 5.0));
        pool.add(box_at(21.0, 5.0));
        pool.rebuild_grid(Viewport::new(100, 40));
        assert_eq!(pool.collision_candidates(), &[(0, 1)]);
    }

    #[test]
    fn wide_dancers_widen_the_cell() {
        let mut pool = calm_pool();
        let params = DancerParams {
            size: 3.0,
            ..DancerParams::default()
        };
        pool.add(Dancer::with_frames(0.0, 0.0, Variant::Star, vec!["0123456789".into()], params).unwrap());
        assert_eq!(pool.effective_cell_size(), 30.0);
    }

    #[test]
    fn resolution_is_idempotent_once_separated() {
        let mut pool = calm_pool();
        pool.add(box_at(10.0, 5.0));
        pool.add(box_at(16.0, 5.0));
        let vp = Viewport::new(100, 40);

        pool.rebuild_grid(vp);
        assert_eq!(pool.resolve_collisions(), 1);
        let after_first: Vec<(f32, f32)> = pool.dancers().iter().map(|d| (d.x, d.y)).collect();
        assert_eq!(after_first, vec![(8.0, 5.0), (18.0, 5.0)]);

        pool.rebuild_grid(vp);
        assert_eq!(pool.resolve_collisions(), 0);
        let after_second: Vec<(f32, f32)> = pool.dancers().iter().map(|d| (d.x, d.y)).collect();
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn draw_order_is_back_to_front() {
        let mut pool = calm_pool();
        pool.add(box_at(0.0, 9.0));
        pool.add(box_at(30.0, 2.0));
        pool.add(box_at(60.0, 5.0));
        pool.add(box_at(80.0, 2.0));

        let mut calls: Vec<DrawCall> = Vec::new();
        pool.draw(&mut calls);
        let xs: Vec<i32> = calls.iter().map(|c| c.x).collect();
        // Equal y keeps insertion order.
        assert_eq!(xs, vec![30, 80, 60, 0]);
    }

    #[test]
    fn respawn_replaces_population() {
        let mut pool = calm_pool();
        let mut rng = DanceRng::new(5);
        pool.respawn(20, Viewport::new(100, 40), &mut rng);
        pool.respawn(7, Viewport::new(100, 40), &mut rng);
        assert_eq!(pool.len(), 7);
    }

    #[test]
    fn tiny_viewport_spawns_at_origin() {
        let mut pool = calm_pool();
        let mut rng = DanceRng::new(5);
        pool.grow(3, Viewport::new(10, 3), &mut rng);
        for d in pool.dancers() {
            assert_eq!((d.x, d.y), (0.0, 0.0));
        }
    }
}
