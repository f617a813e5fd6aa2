//! Performance benchmarks for the HR engine.
//!
//! This benchmark suite verifies that the read endpoints meet performance targets:
//! - Single payroll estimate: < 1ms mean
//! - Daily report over the sample dataset: < 1ms mean
//! - Daily report over 250 employees: < 50ms mean
//! - Batch of 100 payroll estimates: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use hr_engine::api::{create_router, AppState};
use hr_engine::models::AttendanceStatus;
use hr_engine::store::{
    load_dataset, InMemoryStore, NewAttendance, NewEmployee, NewLeaveRequest, NewReview,
};

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tower::ServiceExt;

/// Creates a test state from the bundled sample dataset.
fn create_test_state() -> AppState {
    let store = load_dataset("./data/sample").expect("Failed to load dataset");
    AppState::new(store)
}

/// Creates a state with the given number of employees, each carrying a
/// month of attendance, one review, and one leave request.
///
/// Returns the state plus the assigned employee identifiers.
fn create_populated_state(employee_count: usize) -> (AppState, Vec<String>) {
    let mut store = InMemoryStore::new();
    let mut ids = Vec::with_capacity(employee_count);

    for i in 0..employee_count {
        let employee = store
            .add_employee(NewEmployee {
                name: format!("Employee {:04}", i),
                position: "Technician".to_string(),
                department: "Operations".to_string(),
                hire_date: NaiveDate::from_ymd_opt(2018, 3, 1),
                monthly_salary: Some(Decimal::new(3_000_00, 2)),
            })
            .expect("Failed to seed employee");

        for day in 1..=20u32 {
            let status = match day % 5 {
                0 => AttendanceStatus::UnjustifiedAbsence,
                4 => AttendanceStatus::JustifiedAbsence,
                _ => AttendanceStatus::Present,
            };
            store
                .add_attendance(NewAttendance {
                    employee_id: employee.id.clone(),
                    date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
                    status,
                })
                .expect("Failed to seed attendance");
        }

        store
            .add_review(NewReview {
                employee_id: employee.id.clone(),
                evaluation_date: NaiveDate::from_ymd_opt(2024, 6, 30),
                score: (i % 5) as i32 + 1,
                manager_comment: "Seeded review".to_string(),
            })
            .expect("Failed to seed review");

        store
            .add_leave_request(NewLeaveRequest {
                employee_id: employee.id.clone(),
                start_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
                reason: "Seeded leave".to_string(),
            })
            .expect("Failed to seed leave request");

        ids.push(employee.id);
    }

    (AppState::new(store), ids)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Benchmark: single payroll estimate over the sample dataset.
///
/// Target: < 1ms mean
fn bench_payroll_single(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);

    c.bench_function("payroll_single", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(get_request("/employees/emp_001/payroll"))
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: daily report over the sample dataset.
///
/// Target: < 1ms mean
fn bench_daily_report_sample(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);

    c.bench_function("daily_report_sample", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router.oneshot(get_request("/reports/daily")).await.unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 payroll estimates.
///
/// Target: < 100ms mean
fn bench_payroll_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (state, ids) = create_populated_state(100);

    let uris: Vec<String> = ids
        .iter()
        .map(|id| format!("/employees/{}/payroll", id))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("payroll_batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for uri in &uris {
                let router = create_router(state.clone());
                let response = router.oneshot(get_request(uri)).await.unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: daily report at various store sizes to understand scaling
/// behavior.
fn bench_daily_report_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("report_scaling");
    // Reduce sample size for large stores to keep benchmark time reasonable
    group.sample_size(10);

    for employee_count in [10, 50, 100, 250].iter() {
        let (state, _) = create_populated_state(*employee_count);
        let router = create_router(state);

        group.throughput(Throughput::Elements(*employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router.oneshot(get_request("/reports/daily")).await.unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_payroll_single,
    bench_daily_report_sample,
    bench_payroll_batch_100,
    bench_daily_report_scaling,
);
criterion_main!(benches);
