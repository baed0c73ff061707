//! Domain models for TestHub.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod activity;
pub mod allocation;
pub mod application;
pub mod configuration;
pub mod stats;
pub mod test_case;
pub mod test_result;
pub mod test_run;
pub mod user;

// Re-export commonly used types
pub use activity::{ActivityAction, ActivityLog, ActivityQuery, NewActivityLog};
pub use allocation::{Allocation, AllocationFilters, BulkAllocationsRequest, NewAllocation};
pub use application::{Application, ApplicationFilters, ApplicationPatch, NewApplication};
pub use configuration::{
    CloudType, Configuration, ConfigurationFilters, ConfigurationPatch, ConfigurationType,
    NewConfiguration,
};
pub use stats::ConfigurationStats;
pub use test_case::{NewTestCase, Priority, TestCase, TestCaseFilters, TestCasePatch};
pub use test_result::{NewTestResult, TestResult, TestResultQuery};
pub use test_run::{NewTestRun, RunStatus, TestRun, TestRunFilters, TestRunPatch};
pub use user::{NewUser, User};

/// Lifecycle status shared by configurations and test cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    Active,
    Inactive,
    Testing,
}

impl ResourceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Testing => "testing",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "testing" => Some(Self::Testing),
            _ => None,
        }
    }
}

/// Case-insensitive substring match over a record's name and description.
pub(crate) fn matches_search(search: &str, name: &str, description: Option<&str>) -> bool {
    let needle = search.to_lowercase();
    name.to_lowercase().contains(&needle)
        || description
            .map(|d| d.to_lowercase().contains(&needle))
            .unwrap_or(false)
}
