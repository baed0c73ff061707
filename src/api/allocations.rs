//! Allocation API handlers.

use actix_web::{HttpResponse, delete, get, post, web};
use serde_json::json;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{
    Allocation, AllocationFilters, BulkAllocationsRequest, NewAllocation,
};
use crate::store::MemStore;

/// List allocations, optionally narrowed to one configuration, test case,
/// or test run.
#[utoipa::path(
    get,
    path = "/api/allocations",
    tag = "Allocations",
    params(
        ("configurationId" = Option<i32>, Query, description = "Filter by configuration id"),
        ("testCaseId" = Option<i32>, Query, description = "Filter by test case id"),
        ("testRunId" = Option<i32>, Query, description = "Filter by test run id")
    ),
    responses(
        (status = 200, description = "List of allocations", body = [Allocation]),
    )
)]
#[get("/allocations")]
pub async fn list_allocations(
    store: web::Data<MemStore>,
    query: web::Query<AllocationFilters>,
) -> AppResult<HttpResponse> {
    let allocations = store.list_allocations(&query);
    Ok(HttpResponse::Ok().json(allocations))
}

/// Create an allocation.
#[utoipa::path(
    post,
    path = "/api/allocations",
    tag = "Allocations",
    request_body = NewAllocation,
    responses(
        (status = 201, description = "Allocation created", body = Allocation),
        (status = 400, description = "Invalid allocation data", body = crate::error::ErrorResponse),
    )
)]
#[post("/allocations")]
pub async fn create_allocation(
    store: web::Data<MemStore>,
    body: web::Json<NewAllocation>,
) -> AppResult<HttpResponse> {
    let allocation = store.create_allocation(body.into_inner());
    info!(
        "Allocation created: id={}, configuration_id={}",
        allocation.id, allocation.configuration_id
    );
    Ok(HttpResponse::Created().json(allocation))
}

/// Create allocations in bulk.
///
/// Items are validated and created one at a time; the first invalid item
/// aborts the request with 400 and allocations created before it are kept.
#[utoipa::path(
    post,
    path = "/api/allocations/bulk",
    tag = "Allocations",
    request_body = BulkAllocationsRequest,
    responses(
        (status = 201, description = "Allocations created", body = [Allocation]),
        (status = 400, description = "Invalid allocation data", body = crate::error::ErrorResponse),
    )
)]
#[post("/allocations/bulk")]
pub async fn create_allocations_bulk(
    store: web::Data<MemStore>,
    body: web::Json<BulkAllocationsRequest>,
) -> AppResult<HttpResponse> {
    let items = body.into_inner().allocations;

    let mut created: Vec<Allocation> = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let input: NewAllocation = serde_json::from_value(item).map_err(|err| {
            AppError::invalid_with_details(
                "Invalid allocation data",
                json!({ "index": index, "message": err.to_string() }),
            )
        })?;
        created.push(store.create_allocation(input));
    }

    info!("Bulk allocations created: count={}", created.len());
    Ok(HttpResponse::Created().json(created))
}

/// Delete an allocation.
#[utoipa::path(
    delete,
    path = "/api/allocations/{id}",
    tag = "Allocations",
    params(("id" = i32, Path, description = "Allocation id")),
    responses(
        (status = 204, description = "Allocation deleted"),
        (status = 404, description = "Allocation not found", body = crate::error::ErrorResponse),
    )
)]
#[delete("/allocations/{id}")]
pub async fn delete_allocation(
    store: web::Data<MemStore>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if !store.delete_allocation(id) {
        return Err(AppError::NotFound("Allocation".to_string()));
    }
    info!("Allocation deleted: id={}", id);
    Ok(HttpResponse::NoContent().finish())
}

/// Configure allocation routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_allocations)
        .service(create_allocation)
        .service(create_allocations_bulk)
        .service(delete_allocation);
}
