//! Performance benchmarks for the Cost Engine.
//!
//! Covers the pure calculators and full requests through the router:
//! - Employee cost breakdown and demonstrative
//! - Budget allocation with chart slices
//! - Employee cost and budget allocation requests
//! - Batches of 100 budget allocation requests
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use cost_engine::api::{AppState, create_router};
use cost_engine::calculation::{
    allocation_slices, build_cost_demonstrative, compute_budget_allocation, compute_employee_cost,
};
use cost_engine::config::{ConfigLoader, DemonstrativePolicy};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Benchmark: Pure calculators at several magnitudes.
fn bench_calculators(c: &mut Criterion) {
    let policy = DemonstrativePolicy::default();
    let mut group = c.benchmark_group("calculators");

    for amount in [Decimal::new(1000, 0), Decimal::new(250_075, 2), Decimal::new(1_000_000, 0)] {
        group.bench_with_input(BenchmarkId::new("employee_cost", amount), &amount, |b, &amount| {
            b.iter(|| {
                let breakdown = compute_employee_cost(black_box(amount));
                black_box(build_cost_demonstrative(&breakdown, &policy))
            })
        });
        group.bench_with_input(
            BenchmarkId::new("budget_allocation", amount),
            &amount,
            |b, &amount| {
                b.iter(|| {
                    let result = compute_budget_allocation(black_box(amount));
                    black_box(allocation_slices(&result))
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: Single employee cost request.
fn bench_employee_cost_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({ "gross_salary": "2500.00" }).to_string();

    c.bench_function("employee_cost_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router.oneshot(post("/employee-cost", body.clone())).await.unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Single budget allocation request.
fn bench_budget_allocation_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({ "total_budget": "10000.00" }).to_string();

    c.bench_function("budget_allocation_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(post("/budget-allocation", body.clone()))
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 budget allocation requests.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100)
        .map(|i| serde_json::json!({ "total_budget": format!("{}.50", 1000 + i * 250) }).to_string())
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(post("/budget-allocation", body.clone()))
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_calculators,
    bench_employee_cost_request,
    bench_budget_allocation_request,
    bench_batch_100,
);
criterion_main!(benches);
