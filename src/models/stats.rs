//! Aggregate dashboard statistics.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dashboard stats derived from the store contents at call time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationStats {
    pub total_configurations: usize,
    /// Test runs currently in `running` status.
    pub active_test_runs: usize,
    /// Percentage of finished (completed or failed) results that completed,
    /// rounded to one decimal. Zero when no finished results exist.
    pub success_rate: f64,
    pub total_applications: usize,
}
