//! Configuration allocations: the join between configurations and test
//! cases/runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// A join record assigning one configuration to one test case or test run.
///
/// By convention exactly one of `testCaseId`/`testRunId` is set; creation
/// accepts both, neither, or either without validation, and referenced ids
/// are not checked for existence.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub id: i32,
    pub configuration_id: i32,
    pub test_case_id: Option<i32>,
    pub test_run_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an allocation.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAllocation {
    pub configuration_id: i32,
    pub test_case_id: Option<i32>,
    pub test_run_id: Option<i32>,
}

/// Body of the bulk allocation endpoint.
///
/// Items are kept as raw JSON so they can be validated and created one at a
/// time; the first invalid item aborts the request without rolling back
/// earlier creates.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BulkAllocationsRequest {
    #[schema(value_type = Vec<NewAllocation>)]
    pub allocations: Vec<JsonValue>,
}

/// Query filters for listing allocations.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllocationFilters {
    pub configuration_id: Option<i32>,
    pub test_case_id: Option<i32>,
    pub test_run_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_allocation_accepts_either_target() {
        let a: NewAllocation = serde_json::from_str(r#"{"configurationId": 1}"#)
            .expect("allocation without targets should deserialize");
        assert!(a.test_case_id.is_none());
        assert!(a.test_run_id.is_none());
    }

    #[test]
    fn test_new_allocation_requires_configuration_id() {
        let result: Result<NewAllocation, _> = serde_json::from_str(r#"{"testCaseId": 2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_bulk_request_rejects_non_array() {
        let result: Result<BulkAllocationsRequest, _> =
            serde_json::from_str(r#"{"allocations": "not-an-array"}"#);
        assert!(result.is_err());
    }
}
