//! Activity log records: the append-only audit trail of mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// Kind of mutation recorded in the activity log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    Created,
    Updated,
    Deleted,
    Allocated,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
            Self::Allocated => "allocated",
        }
    }
}

/// An immutable audit trail entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: i32,
    pub user_id: i32,
    pub action: ActivityAction,
    /// Resource family (configuration, application, test_case, ...).
    pub resource_type: String,
    pub resource_id: i32,
    pub resource_name: String,
    /// Action-specific data (e.g. configuration type, allocation targets).
    pub metadata: JsonValue,
    pub created_at: DateTime<Utc>,
}

/// Input for appending an activity entry.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewActivityLog {
    pub user_id: i32,
    pub action: ActivityAction,
    pub resource_type: String,
    pub resource_id: i32,
    pub resource_name: String,
    pub metadata: Option<JsonValue>,
}

/// Query parameters for the activity feed.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ActivityQuery {
    /// Maximum number of entries returned (default 50).
    pub limit: Option<usize>,
}
