//! Test result records: per-configuration outcomes of a test case within a
//! run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::RunStatus;

/// A recorded test outcome.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub id: i32,
    pub test_run_id: i32,
    pub test_case_id: i32,
    pub configuration_id: i32,
    pub status: RunStatus,
    pub error_message: Option<String>,
    pub logs: Option<String>,
    /// Duration in milliseconds.
    pub duration: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Input for recording a test result.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTestResult {
    pub test_run_id: i32,
    pub test_case_id: i32,
    pub configuration_id: i32,
    pub status: RunStatus,
    pub error_message: Option<String>,
    pub logs: Option<String>,
    pub duration: Option<i32>,
}

/// Query parameters for listing test results.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestResultQuery {
    pub test_run_id: Option<i32>,
}
