//! Test case API handlers.

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{NewTestCase, TestCase, TestCaseFilters, TestCasePatch};
use crate::store::MemStore;

/// List test cases with optional filters.
#[utoipa::path(
    get,
    path = "/api/test-cases",
    tag = "Test Cases",
    params(
        ("category" = Option<String>, Query, description = "Filter by category"),
        ("status" = Option<String>, Query, description = "Filter by status (active, inactive, testing)"),
        ("search" = Option<String>, Query, description = "Case-insensitive substring over name/description")
    ),
    responses(
        (status = 200, description = "List of test cases", body = [TestCase]),
    )
)]
#[get("/test-cases")]
pub async fn list_test_cases(
    store: web::Data<MemStore>,
    query: web::Query<TestCaseFilters>,
) -> AppResult<HttpResponse> {
    let test_cases = store.list_test_cases(&query);
    Ok(HttpResponse::Ok().json(test_cases))
}

/// Get a single test case by id.
#[utoipa::path(
    get,
    path = "/api/test-cases/{id}",
    tag = "Test Cases",
    params(("id" = i32, Path, description = "Test case id")),
    responses(
        (status = 200, description = "Test case", body = TestCase),
        (status = 404, description = "Test case not found", body = crate::error::ErrorResponse),
    )
)]
#[get("/test-cases/{id}")]
pub async fn get_test_case(
    store: web::Data<MemStore>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let test_case = store
        .get_test_case(id)
        .ok_or_else(|| AppError::NotFound("Test case".to_string()))?;
    Ok(HttpResponse::Ok().json(test_case))
}

/// Create a test case.
#[utoipa::path(
    post,
    path = "/api/test-cases",
    tag = "Test Cases",
    request_body = NewTestCase,
    responses(
        (status = 201, description = "Test case created", body = TestCase),
        (status = 400, description = "Invalid test case data", body = crate::error::ErrorResponse),
    )
)]
#[post("/test-cases")]
pub async fn create_test_case(
    store: web::Data<MemStore>,
    body: web::Json<NewTestCase>,
) -> AppResult<HttpResponse> {
    let test_case = store.create_test_case(body.into_inner());
    info!(
        "Test case created: id={}, name={}, category={}",
        test_case.id, test_case.name, test_case.category
    );
    Ok(HttpResponse::Created().json(test_case))
}

/// Update a test case.
#[utoipa::path(
    put,
    path = "/api/test-cases/{id}",
    tag = "Test Cases",
    params(("id" = i32, Path, description = "Test case id")),
    request_body = TestCasePatch,
    responses(
        (status = 200, description = "Test case updated", body = TestCase),
        (status = 400, description = "Invalid test case data", body = crate::error::ErrorResponse),
        (status = 404, description = "Test case not found", body = crate::error::ErrorResponse),
    )
)]
#[put("/test-cases/{id}")]
pub async fn update_test_case(
    store: web::Data<MemStore>,
    path: web::Path<i32>,
    body: web::Json<TestCasePatch>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let test_case = store
        .update_test_case(id, body.into_inner())
        .ok_or_else(|| AppError::NotFound("Test case".to_string()))?;
    Ok(HttpResponse::Ok().json(test_case))
}

/// Delete a test case.
#[utoipa::path(
    delete,
    path = "/api/test-cases/{id}",
    tag = "Test Cases",
    params(("id" = i32, Path, description = "Test case id")),
    responses(
        (status = 204, description = "Test case deleted"),
        (status = 404, description = "Test case not found", body = crate::error::ErrorResponse),
    )
)]
#[delete("/test-cases/{id}")]
pub async fn delete_test_case(
    store: web::Data<MemStore>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if !store.delete_test_case(id) {
        return Err(AppError::NotFound("Test case".to_string()));
    }
    info!("Test case deleted: id={}", id);
    Ok(HttpResponse::NoContent().finish())
}

/// Configure test case routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_test_cases)
        .service(get_test_case)
        .service(create_test_case)
        .service(update_test_case)
        .service(delete_test_case);
}
