//! Configuration API handlers.

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{Configuration, ConfigurationFilters, ConfigurationPatch, NewConfiguration};
use crate::store::MemStore;

/// List configurations with optional filters.
#[utoipa::path(
    get,
    path = "/api/configurations",
    tag = "Configurations",
    params(
        ("type" = Option<String>, Query, description = "Filter by type (desktop, real_device, virtual_device)"),
        ("status" = Option<String>, Query, description = "Filter by status (active, inactive, testing)"),
        ("search" = Option<String>, Query, description = "Case-insensitive substring over name/description")
    ),
    responses(
        (status = 200, description = "List of configurations", body = [Configuration]),
        (status = 400, description = "Invalid query parameters", body = crate::error::ErrorResponse),
    )
)]
#[get("/configurations")]
pub async fn list_configurations(
    store: web::Data<MemStore>,
    query: web::Query<ConfigurationFilters>,
) -> AppResult<HttpResponse> {
    let configurations = store.list_configurations(&query);
    Ok(HttpResponse::Ok().json(configurations))
}

/// Get a single configuration by id.
#[utoipa::path(
    get,
    path = "/api/configurations/{id}",
    tag = "Configurations",
    params(("id" = i32, Path, description = "Configuration id")),
    responses(
        (status = 200, description = "Configuration", body = Configuration),
        (status = 404, description = "Configuration not found", body = crate::error::ErrorResponse),
    )
)]
#[get("/configurations/{id}")]
pub async fn get_configuration(
    store: web::Data<MemStore>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let configuration = store
        .get_configuration(id)
        .ok_or_else(|| AppError::NotFound("Configuration".to_string()))?;
    Ok(HttpResponse::Ok().json(configuration))
}

/// Create a configuration.
#[utoipa::path(
    post,
    path = "/api/configurations",
    tag = "Configurations",
    request_body = NewConfiguration,
    responses(
        (status = 201, description = "Configuration created", body = Configuration),
        (status = 400, description = "Invalid configuration data", body = crate::error::ErrorResponse),
    )
)]
#[post("/configurations")]
pub async fn create_configuration(
    store: web::Data<MemStore>,
    body: web::Json<NewConfiguration>,
) -> AppResult<HttpResponse> {
    let configuration = store.create_configuration(body.into_inner());
    info!(
        "Configuration created: id={}, name={}, type={}",
        configuration.id,
        configuration.name,
        configuration.config_type.as_str()
    );
    Ok(HttpResponse::Created().json(configuration))
}

/// Update a configuration.
#[utoipa::path(
    put,
    path = "/api/configurations/{id}",
    tag = "Configurations",
    params(("id" = i32, Path, description = "Configuration id")),
    request_body = ConfigurationPatch,
    responses(
        (status = 200, description = "Configuration updated", body = Configuration),
        (status = 400, description = "Invalid configuration data", body = crate::error::ErrorResponse),
        (status = 404, description = "Configuration not found", body = crate::error::ErrorResponse),
    )
)]
#[put("/configurations/{id}")]
pub async fn update_configuration(
    store: web::Data<MemStore>,
    path: web::Path<i32>,
    body: web::Json<ConfigurationPatch>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let configuration = store
        .update_configuration(id, body.into_inner())
        .ok_or_else(|| AppError::NotFound("Configuration".to_string()))?;
    Ok(HttpResponse::Ok().json(configuration))
}

/// Delete a configuration.
#[utoipa::path(
    delete,
    path = "/api/configurations/{id}",
    tag = "Configurations",
    params(("id" = i32, Path, description = "Configuration id")),
    responses(
        (status = 204, description = "Configuration deleted"),
        (status = 404, description = "Configuration not found", body = crate::error::ErrorResponse),
    )
)]
#[delete("/configurations/{id}")]
pub async fn delete_configuration(
    store: web::Data<MemStore>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    if !store.delete_configuration(id) {
        return Err(AppError::NotFound("Configuration".to_string()));
    }
    info!("Configuration deleted: id={}", id);
    Ok(HttpResponse::NoContent().finish())
}

/// Configure configuration routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_configurations)
        .service(get_configuration)
        .service(create_configuration)
        .service(update_configuration)
        .service(delete_configuration);
}
