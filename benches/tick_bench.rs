#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use rondo::proximity::ProximityField;
use rondo::util::easing::EasingFunction;
use rondo::{Gallery, InputEvent, Options, TitleCatalog};
use web_time::{Duration, Instant};

fn catalog() -> TitleCatalog {
    (0..20).map(|i| format!("Bench title {i}")).collect()
}

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::QuinticInOut;
    c.bench_function("quintic_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.37))))
    });
}

fn flip_factor_benchmark(c: &mut Criterion) {
    let field = ProximityField::new(500.0, 250.0, 50.0);
    c.bench_function("proximity_target", |b| {
        b.iter(|| {
            black_box(field.target(
                black_box(Vec2::new(310.0, 120.0)),
                black_box(Vec2::new(300.0, 25.0)),
                black_box(4.71),
            ))
        })
    });
}

fn tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_tick");

    for count in [25, 100, 400] {
        let mut options = Options::default();
        options.ring.item_count = count;
        let mut gallery = match Gallery::headless(options, catalog()) {
            Ok(g) => g,
            Err(e) => panic!("bench gallery: {e}"),
        };
        let mut now = Instant::now();

        group.bench_function(format!("{count}_items"), |b| {
            b.iter(|| {
                now += Duration::from_millis(16);
                gallery.tick(now);
            })
        });
        group.bench_function(format!("{count}_items_pointer"), |b| {
            b.iter(|| {
                black_box(gallery.handle_event(
                    InputEvent::PointerMoved {
                        position: black_box(Vec2::new(420.0, 180.0)),
                    },
                    now,
                ))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, easing_benchmark, flip_factor_benchmark, tick_benchmark);
criterion_main!(benches);
