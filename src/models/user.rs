//! User records.
//!
//! Users are referenced advisorily by `createdBy` fields and as the actor of
//! activity entries. There is no authentication; a seeded admin user is the
//! default actor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The seeded admin user, used as the fallback actor for activity entries.
pub const DEFAULT_USER_ID: i32 = 1;

/// A dashboard user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub name: String,
    pub role: Option<String>,
}
