//! Test result collection operations.
//!
//! Results are derived outcome records and are not mirrored into the
//! activity feed.

use chrono::Utc;

use crate::models::{NewTestResult, TestResult};

use super::{MemStore, sort_newest_first};

impl MemStore {
    /// List test results, newest first, optionally narrowed to one run.
    pub fn list_test_results(&self, test_run_id: Option<i32>) -> Vec<TestResult> {
        let inner = self.read();
        let mut results: Vec<TestResult> = inner
            .test_results
            .values()
            .filter(|r| test_run_id.map(|id| r.test_run_id == id).unwrap_or(true))
            .cloned()
            .collect();
        sort_newest_first(&mut results, |r| (r.created_at, r.id));
        results
    }

    pub fn create_test_result(&self, input: NewTestResult) -> TestResult {
        let mut inner = self.write();
        let result = TestResult {
            id: inner.test_result_ids.next(),
            test_run_id: input.test_run_id,
            test_case_id: input.test_case_id,
            configuration_id: input.configuration_id,
            status: input.status,
            error_message: input.error_message,
            logs: input.logs,
            duration: input.duration,
            created_at: Utc::now(),
        };
        inner.test_results.insert(result.id, result.clone());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RunStatus;

    fn result(run: i32, status: RunStatus) -> NewTestResult {
        NewTestResult {
            test_run_id: run,
            test_case_id: 1,
            configuration_id: 1,
            status,
            error_message: None,
            logs: None,
            duration: Some(1200),
        }
    }

    #[test]
    fn test_create_and_list_by_run() {
        let store = MemStore::new();
        store.create_test_result(result(1, RunStatus::Completed));
        store.create_test_result(result(1, RunStatus::Failed));
        store.create_test_result(result(2, RunStatus::Completed));

        assert_eq!(store.list_test_results(Some(1)).len(), 2);
        assert_eq!(store.list_test_results(Some(2)).len(), 1);
        assert_eq!(store.list_test_results(None).len(), 3);
    }

    #[test]
    fn test_results_do_not_log_activity() {
        let store = MemStore::new();
        store.create_test_result(result(1, RunStatus::Completed));
        assert!(store.list_activity(50).is_empty());
    }
}
