//! API endpoint modules.

use actix_web::{HttpRequest, web};
use serde_json::Value as JsonValue;

use crate::error::AppError;

pub mod activity;
pub mod allocations;
pub mod analytics;
pub mod applications;
pub mod configurations;
pub mod health;
pub mod openapi;
pub mod test_cases;
pub mod test_results;
pub mod test_runs;

pub use openapi::ApiDoc;

/// Convert JSON body extraction failures into the standard error shape,
/// with the deserializer message as details.
fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    AppError::invalid_with_details("Invalid request body", JsonValue::String(err.to_string()))
        .into()
}

/// Convert query string extraction failures into the standard error shape.
fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    AppError::invalid_with_details("Invalid query parameters", JsonValue::String(err.to_string()))
        .into()
}

/// Register the full `/api` scope: extractor error handlers plus every
/// resource family.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .configure(health::configure_routes)
            .configure(configurations::configure_routes)
            .configure(applications::configure_routes)
            .configure(test_cases::configure_routes)
            .configure(test_runs::configure_routes)
            .configure(allocations::configure_routes)
            .configure(test_results::configure_routes)
            .configure(analytics::configure_routes)
            .configure(activity::configure_routes),
    );
}
