// Criterion benchmarks for Cargo Tracker

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cargo_tracker::core::{MessageSource, TrackingRequestHandler};
use cargo_tracker::models::{Cargo, TrackCommand, TransportStatus};
use cargo_tracker::services::{CachedTrackingService, InMemoryCargoStore};
use std::sync::Arc;

fn create_store(size: usize) -> InMemoryCargoStore {
    InMemoryCargoStore::from_cargos((0..size).map(|i| {
        Cargo::new(
            format!("CARGO{:06}", i),
            "CNHKG",
            "FIHEL",
            if i % 2 == 0 { TransportStatus::InPort } else { TransportStatus::OnboardCarrier },
        )
    }))
}

fn bench_handle(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("handle");

    for size in [100, 10_000].iter() {
        let handler = TrackingRequestHandler::new(Arc::new(create_store(*size)));
        let found = TrackCommand::new("CARGO000042");
        let missing = TrackCommand::new("ZZZ000");

        group.bench_with_input(BenchmarkId::new("found", size), size, |b, _| {
            b.iter(|| runtime.block_on(handler.handle(black_box(&found))))
        });

        group.bench_with_input(BenchmarkId::new("not_found", size), size, |b, _| {
            b.iter(|| runtime.block_on(handler.handle(black_box(&missing))))
        });
    }

    group.finish();
}

fn bench_cached_handle(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let cached = CachedTrackingService::new(create_store(10_000), 1_000, 60);
    let handler = TrackingRequestHandler::new(Arc::new(cached));
    let command = TrackCommand::new("CARGO000042");

    c.bench_function("handle_cached", |b| {
        b.iter(|| runtime.block_on(handler.handle(black_box(&command))))
    });
}

fn bench_render_view(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let handler = TrackingRequestHandler::new(Arc::new(create_store(100)));
    let messages = MessageSource::default();
    let command = TrackCommand::new("ZZZ000");
    let result = runtime.block_on(handler.handle(&command)).unwrap();

    c.bench_function("render_not_found_view", |b| {
        b.iter(|| black_box(result.clone()).into_view(&command, &messages))
    });
}

criterion_group!(benches, bench_handle, bench_cached_handle, bench_render_view);
criterion_main!(benches);
