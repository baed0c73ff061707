//! Test result API handlers.
//!
//! Results feed the success-rate statistic; there is no real test runner
//! behind them (execution is out of scope).

use actix_web::{HttpResponse, get, post, web};
use tracing::info;

use crate::error::AppResult;
use crate::models::{NewTestResult, TestResult, TestResultQuery};
use crate::store::MemStore;

/// List test results, optionally narrowed to one run.
#[utoipa::path(
    get,
    path = "/api/test-results",
    tag = "Test Results",
    params(
        ("testRunId" = Option<i32>, Query, description = "Filter by test run id")
    ),
    responses(
        (status = 200, description = "List of test results", body = [TestResult]),
    )
)]
#[get("/test-results")]
pub async fn list_test_results(
    store: web::Data<MemStore>,
    query: web::Query<TestResultQuery>,
) -> AppResult<HttpResponse> {
    let results = store.list_test_results(query.test_run_id);
    Ok(HttpResponse::Ok().json(results))
}

/// Record a test result.
#[utoipa::path(
    post,
    path = "/api/test-results",
    tag = "Test Results",
    request_body = NewTestResult,
    responses(
        (status = 201, description = "Test result recorded", body = TestResult),
        (status = 400, description = "Invalid test result data", body = crate::error::ErrorResponse),
    )
)]
#[post("/test-results")]
pub async fn create_test_result(
    store: web::Data<MemStore>,
    body: web::Json<NewTestResult>,
) -> AppResult<HttpResponse> {
    let result = store.create_test_result(body.into_inner());
    info!(
        "Test result recorded: id={}, test_run_id={}, status={}",
        result.id,
        result.test_run_id,
        result.status.as_str()
    );
    Ok(HttpResponse::Created().json(result))
}

/// Configure test result routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_test_results).service(create_test_result);
}
