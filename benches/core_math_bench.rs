use criterion::{Criterion, criterion_group, criterion_main};
use scatter_rs::api::{ScatterEngine, ScatterEngineConfig};
use scatter_rs::core::{Axis, AxisScale, Dataset, Field, Record, ScaleParameters, Viewport};
use scatter_rs::render::NullRenderer;
use std::hint::black_box;

fn synthetic_dataset(size: usize) -> Dataset {
    let records: Vec<Record> = (0..size)
        .map(|i| {
            let t = i as f64;
            Record {
                name: format!("State {i}"),
                abbr: format!("S{i}"),
                age: 28.0 + (t * 0.37) % 18.0,
                income: 38_000.0 + (t * 913.0) % 40_000.0,
                poverty: 8.0 + (t * 0.19) % 12.0,
                healthcare: 6.0 + (t * 0.23) % 14.0,
                smokes: 12.0 + (t * 0.31) % 13.0,
            }
        })
        .collect();
    Dataset::new(records).expect("valid generated dataset")
}

fn bench_scale_fit_50(c: &mut Criterion) {
    let dataset = synthetic_dataset(50);

    c.bench_function("scale_fit_50", |b| {
        b.iter(|| {
            let _ = ScaleParameters::fit(black_box(&dataset), black_box(Field::Income))
                .expect("fit should succeed");
        })
    });
}

fn bench_axis_scale_round_trip(c: &mut Criterion) {
    let dataset = synthetic_dataset(50);
    let viewport = Viewport::new(1000, 600);
    let scale = AxisScale::fit(&dataset, Axis::X, Field::Age).expect("valid scale");

    c.bench_function("axis_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.value_to_pixel(33.3, viewport).expect("to pixel");
            let _ = scale.pixel_to_value(px, viewport).expect("from pixel");
        })
    });
}

fn bench_frame_build_50(c: &mut Criterion) {
    let dataset = synthetic_dataset(50);
    let config = ScatterEngineConfig::new(Viewport::new(1000, 600));
    let engine = ScatterEngine::new(NullRenderer::default(), config, dataset).expect("engine init");

    c.bench_function("frame_build_50", |b| {
        b.iter(|| {
            let _ = engine.build_frame().expect("frame build should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_scale_fit_50,
    bench_axis_scale_round_trip,
    bench_frame_build_50
);
criterion_main!(benches);
