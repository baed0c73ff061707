//! Activity feed API handlers.

use actix_web::{HttpResponse, get, web};

use crate::error::AppResult;
use crate::models::{ActivityLog, ActivityQuery};
use crate::store::MemStore;

/// Default number of feed entries when no limit is given.
const DEFAULT_ACTIVITY_LIMIT: usize = 50;

/// The most recent activity entries, newest first.
#[utoipa::path(
    get,
    path = "/api/activity",
    tag = "Activity",
    params(
        ("limit" = Option<usize>, Query, description = "Maximum entries returned (default 50)")
    ),
    responses(
        (status = 200, description = "Activity feed", body = [ActivityLog]),
    )
)]
#[get("/activity")]
pub async fn list_activity(
    store: web::Data<MemStore>,
    query: web::Query<ActivityQuery>,
) -> AppResult<HttpResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT);
    Ok(HttpResponse::Ok().json(store.list_activity(limit)))
}

/// Configure activity routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_activity);
}
