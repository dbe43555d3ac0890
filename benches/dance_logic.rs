use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use kaomoji_dance::core::{DanceRng, DancerPool, DrawCall, Forces, Stage, Tuning};
use kaomoji_dance::term::{DanceView, FrameBuffer};
use kaomoji_dance::types::Viewport;

const VIEWPORT: Viewport = Viewport::new(200, 60);

fn pool_with(count: usize) -> (DancerPool, DanceRng) {
    let mut pool = DancerPool::new(Tuning::default()).unwrap();
    let mut rng = DanceRng::new(12345);
    pool.respawn(count, VIEWPORT, &mut rng);
    (pool, rng)
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_step");
    for count in [100usize, 500, 2000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let (mut pool, mut rng) = pool_with(count);
            let forces = Forces {
                gravity: 0.1,
                wind: 0.2,
            };
            b.iter(|| black_box(pool.step(0.016, forces, VIEWPORT, &mut rng)))
        });
    }
    group.finish();
}

fn bench_collision_candidates(c: &mut Criterion) {
    let (mut pool, _) = pool_with(1000);
    pool.rebuild_grid(VIEWPORT);
    c.bench_function("collision_candidates_1000", |b| {
        b.iter(|| black_box(pool.collision_candidates().len()))
    });
}

fn bench_draw(c: &mut Criterion) {
    let (mut pool, _) = pool_with(500);
    let mut calls: Vec<DrawCall> = Vec::with_capacity(500);
    c.bench_function("draw_500", |b| {
        b.iter(|| {
            calls.clear();
            pool.draw(&mut calls);
            black_box(calls.len())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut stage = Stage::new(Tuning::default(), DanceRng::new(9)).unwrap();
    stage.observe_viewport(Some(VIEWPORT));
    stage.populate(200);
    let view = DanceView::default();
    let mut fb = FrameBuffer::new(VIEWPORT.width, VIEWPORT.height);
    c.bench_function("render_into_200", |b| {
        b.iter(|| {
            view.render_into(&mut stage, &mut fb);
            black_box(fb.width())
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_collision_candidates,
    bench_draw,
    bench_render
);
criterion_main!(benches);
