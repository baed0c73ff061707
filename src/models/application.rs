//! Application-under-test records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An application under test.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i32,
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    /// Target platform (iOS, Android, Web).
    pub platform: String,
    pub package_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an application.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub platform: String,
    pub package_name: Option<String>,
}

/// Partial update for an application. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPatch {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub platform: Option<String>,
    pub package_name: Option<String>,
}

/// Query filters for listing applications.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ApplicationFilters {
    /// Case-insensitive substring over name/description.
    pub search: Option<String>,
}
