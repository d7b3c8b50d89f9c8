//! Performance benchmarks for the payroll expression helpers.
//!
//! Covers the helpers scripts call on every row hook and the HTTP path:
//! - Row aggregates over calculations of growing size
//! - Price resolution across employment and company price lists
//! - Rounding
//! - A full `/evaluate` request
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use payroll_expressions::api::{AppState, EvaluationRequest, create_router};
use payroll_expressions::config::ConfigLoader;
use payroll_expressions::expressions::{PricesHelper, RowTypeSelector, RowsHelper, round};
use payroll_expressions::models::{CalculationRowType, Row, RowTypeDefinition};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Creates `row_count` rows cycling through hourly salary, overtime and a benefit.
fn create_rows(row_count: usize) -> Vec<Row> {
    (0..row_count)
        .map(|i| match i % 3 {
            0 => Row::new(CalculationRowType::HourlySalary)
                .with_type_path("builtIn/hourlySalary")
                .with_count(8.0)
                .with_price(20.0 + (i % 7) as f64),
            1 => Row::new(CalculationRowType::Overtime)
                .with_count(2.0)
                .with_price(30.0),
            _ => Row::new(CalculationRowType::PhoneBenefit)
                .with_count(1.0)
                .with_price(20.0),
        })
        .collect()
}

fn create_price_list(entry_count: usize, hourly_price: f64) -> Vec<RowTypeDefinition> {
    let mut entries: Vec<RowTypeDefinition> = (0..entry_count)
        .map(|i| {
            RowTypeDefinition::new(CalculationRowType::Other(format!("custom{}", i)))
                .with_price(i as f64)
        })
        .collect();
    entries.push(RowTypeDefinition::new(CalculationRowType::HourlySalary).with_price(hourly_price));
    entries
}

/// Creates an evaluation request with a specified number of rows.
fn create_request_with_rows(row_count: usize) -> EvaluationRequest {
    let rows: Vec<serde_json::Value> = create_rows(row_count)
        .iter()
        .map(|row| serde_json::to_value(row).unwrap())
        .collect();

    let request_json = serde_json::json!({
        "context": {
            "calculation": {
                "info": { "workStartDate": "2024-06-01" },
                "rows": rows
            },
            "settings": {
                "calc": { "salaryDefaults": [ { "rowType": "hourlySalary", "price": 21 } ] }
            }
        },
        "queries": [
            { "op": "sum", "selector": "hourlySalary" },
            { "op": "count", "selector": "overtime" },
            { "op": "avg_price", "selector": "hourlySalary" },
            { "op": "max_price", "selector": "builtIn/hourlySalary" },
            { "op": "resolve_price", "selector": "hourlySalary" },
            { "op": "pricing_period_start" },
            { "op": "config_value", "name": "monthlyDivider" }
        ]
    });

    serde_json::from_value(request_json).expect("Failed to create request")
}

/// Benchmark: Row aggregates at several calculation sizes.
fn bench_row_aggregates(c: &mut Criterion) {
    let mut group = c.benchmark_group("row_aggregates");
    let hourly = RowTypeSelector::from(CalculationRowType::HourlySalary);
    let by_path = RowTypeSelector::from("builtIn/hourlySalary");

    for row_count in [10, 100, 1000].iter() {
        let rows = create_rows(*row_count);
        let helper = RowsHelper::new(&rows);

        group.throughput(Throughput::Elements(*row_count as u64));
        group.bench_with_input(BenchmarkId::new("sum", row_count), row_count, |b, _| {
            b.iter(|| black_box(helper.sum(&hourly)))
        });
        group.bench_with_input(BenchmarkId::new("avg_price", row_count), row_count, |b, _| {
            b.iter(|| black_box(helper.avg_price(&hourly, 2)))
        });
        group.bench_with_input(
            BenchmarkId::new("max_price_by_path", row_count),
            row_count,
            |b, _| b.iter(|| black_box(helper.max_price(&by_path))),
        );
    }

    group.finish();
}

/// Benchmark: Price lookups falling through to the company list.
fn bench_price_resolution(c: &mut Criterion) {
    let employment = create_price_list(50, 0.0);
    let company = create_price_list(50, 21.0);
    let prices = PricesHelper::from_lists(&employment, &company);
    let hourly = RowTypeSelector::from(CalculationRowType::HourlySalary);

    c.bench_function("price_get_company_fallback", |b| {
        b.iter(|| black_box(prices.get(&hourly)))
    });
    c.bench_function("price_resolve_with_audit", |b| {
        b.iter(|| black_box(prices.resolve(&hourly, 1)))
    });
}

/// Benchmark: Currency rounding.
fn bench_rounding(c: &mut Criterion) {
    c.bench_function("round_two_decimals", |b| {
        b.iter(|| black_box(round(black_box(3800.0 / 120.0), 2)))
    });
}

/// Benchmark: Full `/evaluate` requests at several calculation sizes.
fn bench_evaluate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("evaluate");

    for row_count in [10, 100, 1000].iter() {
        let router = create_router(state.clone());
        let request = create_request_with_rows(*row_count);
        let body = serde_json::to_string(&request).unwrap();

        group.throughput(Throughput::Elements(*row_count as u64));
        group.bench_with_input(BenchmarkId::new("rows", row_count), row_count, |b, _| {
            b.to_async(&rt).iter(|| async {
                let router = router.clone();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/evaluate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_row_aggregates,
    bench_price_resolution,
    bench_rounding,
    bench_evaluate,
);
criterion_main!(benches);
