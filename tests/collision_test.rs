//! Broad/narrow phase agreement and collision resolution properties.

use std::collections::BTreeSet;

use kaomoji_dance::core::{DanceRng, Dancer, DancerParams, DancerPool, DrawCall, Forces, Tuning};
use kaomoji_dance::types::{Variant, Viewport, SPAWN_MARGIN_X, SPAWN_MARGIN_Y};

fn brute_force(pool: &DancerPool) -> BTreeSet<(usize, usize)> {
    let d = pool.dancers();
    let mut out = BTreeSet::new();
    for i in 0..d.len() {
        for j in i + 1..d.len() {
            if d[i].collides_with(&d[j]) {
                out.insert((i, j));
            }
        }
    }
    out
}

fn boxed(x: f32, y: f32) -> Dancer {
    Dancer::with_frames(
        x,
        y,
        Variant::Cat,
        vec!["0123456789".to_string()],
        DancerParams::default(),
    )
    .unwrap()
}

#[test]
fn grid_candidates_match_brute_force() {
    for seed in [1u64, 7, 42, 1234] {
        let viewport = Viewport::new(120, 40);
        let mut pool = DancerPool::new(Tuning::default()).unwrap();
        let mut rng = DanceRng::new(seed);
        pool.respawn(200, viewport, &mut rng);

        pool.rebuild_grid(viewport);
        let grid: BTreeSet<(usize, usize)> = pool.collision_candidates().iter().copied().collect();
        assert_eq!(grid, brute_force(&pool), "seed {seed}");
    }
}

#[test]
fn large_population_candidates_match_brute_force_after_steps() {
    // Above the population where the candidate search fans out over threads.
    let viewport = Viewport::new(200, 60);
    let mut pool = DancerPool::new(Tuning::default()).unwrap();
    let mut rng = DanceRng::new(600);
    pool.respawn(600, viewport, &mut rng);

    let forces = Forces {
        gravity: 0.1,
        wind: -0.4,
    };
    for _ in 0..20 {
        pool.step(0.016, forces, viewport, &mut rng);
    }

    pool.rebuild_grid(viewport);
    let grid: BTreeSet<(usize, usize)> = pool.collision_candidates().iter().copied().collect();
    let brute = brute_force(&pool);
    assert!(!brute.is_empty());
    assert_eq!(grid, brute);
}

#[test]
fn candidates_are_canonical_and_unique() {
    let viewport = Viewport::new(80, 24);
    let mut pool = DancerPool::new(Tuning::default().with_cell_size(4.0)).unwrap();
    let mut rng = DanceRng::new(99);
    pool.respawn(150, viewport, &mut rng);
    pool.rebuild_grid(viewport);

    let candidates = pool.collision_candidates().to_vec();
    assert!(candidates.iter().all(|&(i, j)| i < j));
    assert!(candidates.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn resolution_is_idempotent_within_a_tick() {
    let viewport = Viewport::new(100, 40);
    let mut pool = DancerPool::new(Tuning::default()).unwrap();
    pool.add(boxed(10.0, 5.0));
    pool.add(boxed(16.0, 5.0));

    pool.rebuild_grid(viewport);
    assert_eq!(pool.resolve_collisions(), 1);
    assert_eq!((pool.dancers()[0].x, pool.dancers()[1].x), (8.0, 18.0));

    let before = pool.dancers().to_vec();
    pool.rebuild_grid(viewport);
    assert_eq!(pool.resolve_collisions(), 0);
    assert_eq!(pool.dancers(), &before[..]);
}

#[test]
fn separated_pairs_are_left_alone() {
    let viewport = Viewport::new(100, 40);
    let mut pool = DancerPool::new(Tuning::default()).unwrap();
    pool.add(boxed(0.0, 0.0));
    // Touching edges only.
    pool.add(boxed(10.0, 0.0));
    pool.add(boxed(0.0, 1.0));
    pool.dancers_mut()[0].vx = 3.0;

    pool.rebuild_grid(viewport);
    assert!(pool.collision_candidates().is_empty());
    assert_eq!(pool.resolve_collisions(), 0);
    assert_eq!(pool.dancers()[0].vx, 3.0);
}

#[test]
fn respawn_places_dancers_inside_spawn_area() {
    let viewport = Viewport::new(100, 30);
    let mut pool = DancerPool::new(Tuning::default()).unwrap();
    let mut rng = DanceRng::new(5);
    pool.respawn(50, viewport, &mut rng);

    assert_eq!(pool.len(), 50);
    let max_x = (viewport.width - SPAWN_MARGIN_X) as f32;
    let max_y = (viewport.height - SPAWN_MARGIN_Y) as f32;
    for d in pool.dancers() {
        assert!(Variant::ALL.contains(&d.variant()));
        assert!(d.x >= 0.0 && d.x <= max_x, "x = {}", d.x);
        assert!(d.y >= 0.0 && d.y <= max_y, "y = {}", d.y);
    }

    pool.respawn(3, viewport, &mut rng);
    assert_eq!(pool.len(), 3);
}

#[test]
fn draw_order_is_non_decreasing_in_y() {
    let viewport = Viewport::new(160, 50);
    let mut pool = DancerPool::new(Tuning::default()).unwrap();
    let mut rng = DanceRng::new(11);
    pool.respawn(80, viewport, &mut rng);
    for _ in 0..30 {
        pool.step(
            0.016,
            Forces {
                gravity: 0.1,
                wind: 0.3,
            },
            viewport,
            &mut rng,
        );
    }

    let mut calls: Vec<DrawCall> = Vec::new();
    pool.draw(&mut calls);
    assert_eq!(calls.len(), pool.len());
    assert!(calls.windows(2).all(|w| w[0].y <= w[1].y));
}
