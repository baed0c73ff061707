//! Test case records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ResourceStatus;

/// Test case priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// An authored test case.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Authoring tool category (e.g. KaneAI, Test Manager).
    pub category: String,
    /// Ordered list of test steps.
    pub steps: Vec<String>,
    pub expected_results: Option<String>,
    pub priority: Priority,
    pub status: ResourceStatus,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a test case.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTestCase {
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub steps: Option<Vec<String>>,
    pub expected_results: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<ResourceStatus>,
    pub created_by: Option<i32>,
}

/// Partial update for a test case. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestCasePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub steps: Option<Vec<String>>,
    pub expected_results: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<ResourceStatus>,
}

/// Query filters for listing test cases.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct TestCaseFilters {
    pub category: Option<String>,
    pub status: Option<ResourceStatus>,
    /// Case-insensitive substring over name/description.
    pub search: Option<String>,
}
