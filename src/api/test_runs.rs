//! Test run API handlers.

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{NewTestRun, TestRun, TestRunFilters, TestRunPatch};
use crate::store::MemStore;

/// List test runs with optional filters.
#[utoipa::path(
    get,
    path = "/api/test-runs",
    tag = "Test Runs",
    params(
        ("status" = Option<String>, Query, description = "Filter by status (pending, running, completed, failed)"),
        ("search" = Option<String>, Query, description = "Case-insensitive substring over name/description")
    ),
    responses(
        (status = 200, description = "List of test runs", body = [TestRun]),
    )
)]
#[get("/test-runs")]
pub async fn list_test_runs(
    store: web::Data<MemStore>,
    query: web::Query<TestRunFilters>,
) -> AppResult<HttpResponse> {
    let test_runs = store.list_test_runs(&query);
    Ok(HttpResponse::Ok().json(test_runs))
}

/// Get a single test run by id.
#[utoipa::path(
    get,
    path = "/api/test-runs/{id}",
    tag = "Test Runs",
    params(("id" = i32, Path, description = "Test run id")),
    responses(
        (status = 200, description = "Test run", body = TestRun),
        (status = 404, description = "Test run not found", body = crate::error::ErrorResponse),
    )
)]
#[get("/test-runs/{id}")]
pub async fn get_test_run(
    store: web::Data<MemStore>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let test_run = store
        .get_test_run(id)
        .ok_or_else(|| AppError::NotFound("Test run".to_string()))?;
    Ok(HttpResponse::Ok().json(test_run))
}

/// Create a test run.
#[utoipa::path(
    post,
    path = "/api/test-runs",
    tag = "Test Runs",
    request_body = NewTestRun,
    responses(
        (status = 201, description = "Test run created", body = TestRun),
        (status = 400, description = "Invalid test run data", body = crate::error::ErrorResponse),
    )
)]
#[post("/test-runs")]
pub async fn create_test_run(
    store: web::Data<MemStore>,
    body: web::Json<NewTestRun>,
) -> AppResult<HttpResponse> {
    let test_run = store.create_test_run(body.into_inner());
    info!(
        "Test run created: id={}, name={}, status={}",
        test_run.id,
        test_run.name,
        test_run.status.as_str()
    );
    Ok(HttpResponse::Created().json(test_run))
}

/// Update a test run. Status transitions happen only through this endpoint.
#[utoipa::path(
    put,
    path = "/api/test-runs/{id}",
    tag = "Test Runs",
    params(("id" = i32, Path, description = "Test run id")),
    request_body = TestRunPatch,
    responses(
        (status = 200, description = "Test run updated", body = TestRun),
        (status = 400, description = "Invalid test run data", body = crate::error::ErrorResponse),
        (status = 404, description = "Test run not found", body = crate::error::ErrorResponse),
    )
)]
#[put("/test-runs/{id}")]
pub async fn update_test_run(
    store: web::Data<MemStore>,
    path: web::Path<i32>,
    body: web::Json<TestRunPatch>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let test_run = store
        .update_test_run(id, body.into_inner())
        .ok_or_else(|| AppError::NotFound("Test run".to_string()))?;
    Ok(HttpResponse::Ok().json(test_run))
}

/// Delete a test run.
#[utoipa::path(
    delete,
    path = "/api/test-runs/{id}",
    tag = "Test Runs",
    params(("id" = i32, Path, description = "Test run id")),
    responses(
        (status = 204, description = "Test run deleted"),
        (status = 404, description = "Test run not found", body = crate::error::ErrorResponse),
    )
)]
#[delete("/test-runs/{id}")]
pub async fn delete_test_run(
    store: web::Data<MemStore>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if !store.delete_test_run(id) {
        return Err(AppError::NotFound("Test run".to_string()));
    }
    info!("Test run deleted: id={}", id);
    Ok(HttpResponse::NoContent().finish())
}

/// Configure test run routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_test_runs)
        .service(get_test_run)
        .service(create_test_run)
        .service(update_test_run)
        .service(delete_test_run);
}
