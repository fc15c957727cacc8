use comparison_bar_chart::api::{ChartConfig, ChartLayoutEngine, build_frame};
use comparison_bar_chart::core::{
    BarDatum, Measurements, ScaleRules, build_axis_ticks, compute_scale, order_and_slice,
    plain_value_label,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn dataset(prefix: &str, count: usize) -> Vec<BarDatum> {
    (0..count)
        .map(|i| {
            let value = ((i * 7_919) % 1_000) as f64 / 10.0;
            BarDatum::new(format!("{prefix}{i}"), format!("{prefix} {i}"), value, "#4477aa")
        })
        .collect()
}

fn bench_scale_and_ticks(c: &mut Criterion) {
    let primary = dataset("p", 1_000);
    let secondary = dataset("s", 1_000);
    let rules = ScaleRules::default();

    c.bench_function("order_scale_ticks_2k", |b| {
        b.iter(|| {
            let primary = order_and_slice(black_box(&primary), 10);
            let secondary = order_and_slice(black_box(&secondary), 10);
            let scale = compute_scale(primary.top_value(), secondary.top_value(), &rules);
            let _ = build_axis_ticks(&scale, &plain_value_label);
        })
    });
}

fn bench_render_model_2k(c: &mut Criterion) {
    let mut engine = ChartLayoutEngine::new(ChartConfig::new(10)).expect("engine init");
    engine
        .set_data(dataset("p", 1_000), dataset("s", 1_000))
        .expect("valid data");
    engine
        .set_measurements(Measurements::new(600.0, 800.0, 200.0))
        .expect("valid measurements");

    c.bench_function("render_model_2k_collapsed", |b| {
        b.iter(|| {
            engine.set_expanded(false);
            engine.set_n_values_to_show(black_box(10)).expect("valid n");
            let _ = black_box(engine.render_model().rows.len());
        })
    });

    c.bench_function("render_model_2k_expanded", |b| {
        b.iter(|| {
            engine.set_expanded(true);
            engine.set_n_values_to_show(black_box(10)).expect("valid n");
            let _ = black_box(engine.render_model().rows.len());
        })
    });
}

fn bench_frame_2k_expanded(c: &mut Criterion) {
    let mut engine = ChartLayoutEngine::new(ChartConfig::new(10).with_initial_expanded(true))
        .expect("engine init");
    engine
        .set_data(dataset("p", 1_000), dataset("s", 1_000))
        .expect("valid data");
    let model = engine.render_model().clone();

    c.bench_function("frame_2k_expanded", |b| {
        b.iter(|| {
            let frame = build_frame(black_box(&model), None);
            let _ = black_box(frame.node_count());
        })
    });
}

criterion_group!(
    benches,
    bench_scale_and_ticks,
    bench_render_model_2k,
    bench_frame_2k_expanded
);
criterion_main!(benches);
