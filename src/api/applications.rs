//! Application API handlers.

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{Application, ApplicationFilters, ApplicationPatch, NewApplication};
use crate::store::MemStore;

/// List applications.
#[utoipa::path(
    get,
    path = "/api/applications",
    tag = "Applications",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring over name/description")
    ),
    responses(
        (status = 200, description = "List of applications", body = [Application]),
    )
)]
#[get("/applications")]
pub async fn list_applications(
    store: web::Data<MemStore>,
    query: web::Query<ApplicationFilters>,
) -> AppResult<HttpResponse> {
    let applications = store.list_applications(&query);
    Ok(HttpResponse::Ok().json(applications))
}

/// Get a single application by id.
#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    tag = "Applications",
    params(("id" = i32, Path, description = "Application id")),
    responses(
        (status = 200, description = "Application", body = Application),
        (status = 404, description = "Application not found", body = crate::error::ErrorResponse),
    )
)]
#[get("/applications/{id}")]
pub async fn get_application(
    store: web::Data<MemStore>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let application = store
        .get_application(id)
        .ok_or_else(|| AppError::NotFound("Application".to_string()))?;
    Ok(HttpResponse::Ok().json(application))
}

/// Create an application.
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = "Applications",
    request_body = NewApplication,
    responses(
        (status = 201, description = "Application created", body = Application),
        (status = 400, description = "Invalid application data", body = crate::error::ErrorResponse),
    )
)]
#[post("/applications")]
pub async fn create_application(
    store: web::Data<MemStore>,
    body: web::Json<NewApplication>,
) -> AppResult<HttpResponse> {
    let application = store.create_application(body.into_inner());
    info!(
        "Application created: id={}, name={}",
        application.id, application.name
    );
    Ok(HttpResponse::Created().json(application))
}

/// Update an application.
#[utoipa::path(
    put,
    path = "/api/applications/{id}",
    tag = "Applications",
    params(("id" = i32, Path, description = "Application id")),
    request_body = ApplicationPatch,
    responses(
        (status = 200, description = "Application updated", body = Application),
        (status = 400, description = "Invalid application data", body = crate::error::ErrorResponse),
        (status = 404, description = "Application not found", body = crate::error::ErrorResponse),
    )
)]
#[put("/applications/{id}")]
pub async fn update_application(
    store: web::Data<MemStore>,
    path: web::Path<i32>,
    body: web::Json<ApplicationPatch>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let application = store
        .update_application(id, body.into_inner())
        .ok_or_else(|| AppError::NotFound("Application".to_string()))?;
    Ok(HttpResponse::Ok().json(application))
}

/// Delete an application.
#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    tag = "Applications",
    params(("id" = i32, Path, description = "Application id")),
    responses(
        (status = 204, description = "Application deleted"),
        (status = 404, description = "Application not found", body = crate::error::ErrorResponse),
    )
)]
#[delete("/applications/{id}")]
pub async fn delete_application(
    store: web::Data<MemStore>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if !store.delete_application(id) {
        return Err(AppError::NotFound("Application".to_string()));
    }
    info!("Application deleted: id={}", id);
    Ok(HttpResponse::NoContent().finish())
}

/// Configure application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_applications)
        .service(get_application)
        .service(create_application)
        .service(update_application)
        .service(delete_application);
}
