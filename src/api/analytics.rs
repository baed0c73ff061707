//! Analytics API handlers.

use actix_web::{HttpResponse, get, web};

use crate::error::AppResult;
use crate::models::ConfigurationStats;
use crate::store::MemStore;

/// Dashboard statistics, recomputed from store contents on every call.
#[utoipa::path(
    get,
    path = "/api/analytics/stats",
    tag = "Analytics",
    responses(
        (status = 200, description = "Aggregate statistics", body = ConfigurationStats),
    )
)]
#[get("/analytics/stats")]
pub async fn get_stats(store: web::Data<MemStore>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(store.configuration_stats()))
}

/// Configure analytics routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_stats);
}
