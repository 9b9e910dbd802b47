use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use scene_sketches::board::Board;
use scene_sketches::config::MosaicConfig;
use scene_sketches::frame::FrameInfo;
use scene_sketches::math::Ray;
use scene_sketches::scenes::Mosaic;
use scene_sketches::traits::Sketch;

fn bench_mosaic_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("mosaic_tick");

    for &(columns, rows) in &[(20u32, 10u32), (64, 36)] {
        let config = MosaicConfig {
            columns,
            rows,
            unit: 50,
            // every tile active from the first tick
            progress_step: (columns * rows) as f32,
            ..Default::default()
        };
        let frame = FrameInfo::new(0, 0.0, 1.0 / 60.0);

        group.bench_with_input(BenchmarkId::from_parameter(columns * rows), &config, |b, config| {
            let mut mosaic = Mosaic::new(config).unwrap();
            b.iter(|| mosaic.update(black_box(&frame)));
        });
    }

    group.finish();
}

fn bench_voxel_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("voxel_pick");

    for &size in &[6u32, 16, 32] {
        let board = Board::new(size, size * size, 10.0, 1).unwrap();
        let extent = size as f32 * 10.0;
        let rays: Vec<Ray> = (0..64)
            .map(|i| {
                let angle = i as f32 * 0.1;
                let eye = Vec3::new(angle.sin() * extent * 2.0, extent, angle.cos() * extent * 2.0);
                Ray::new(eye, -eye)
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &rays, |b, rays| {
            b.iter(|| {
                for ray in rays {
                    black_box(board.pick(ray));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mosaic_tick, bench_voxel_pick);
criterion_main!(benches);
