//! Benchmarks for the dreamstar pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use dreamstar::render::Canvas;
use dreamstar::types::{PaletteSpec, Point, StarShape};
use dreamstar::{render_poster, PosterConfig};

// -- Geometry benchmarks --

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    let star = StarShape::new(Point::new(0.5, 0.5), 0.2).with_rotation(0.3);
    group.bench_function("star_vertices", |b| b.iter(|| black_box(&star).vertices()));

    let vertices = star.vertices();
    group.bench_function("fill_star_200px", |b| {
        b.iter(|| {
            let mut canvas = Canvas::new(200, 200, 72.0);
            canvas.fill_polygon(black_box(&vertices), dreamstar::Colour::BLACK.with_alpha(0.5));
            canvas
        })
    });

    group.finish();
}

// -- Palette benchmarks --

fn bench_palette(c: &mut Criterion) {
    let spec = PaletteSpec::default();
    c.bench_function("palette_generate", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| spec.generate(black_box(&mut rng)))
    });
}

// -- Full render benchmarks --

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let config = PosterConfig {
        seed: "42".to_string(),
        dpi: 30.0,
        ..PosterConfig::default()
    };
    group.bench_function("poster_30dpi", |b| {
        b.iter(|| render_poster(black_box(&config)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_palette, bench_render);
criterion_main!(benches);
