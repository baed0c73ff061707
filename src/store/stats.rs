//! Aggregate analytics, recomputed from the maps on every call.

use crate::models::{ConfigurationStats, RunStatus};

use super::MemStore;

impl MemStore {
    /// Dashboard statistics derived from current store contents.
    ///
    /// Success rate is the share of finished (completed or failed) results
    /// that completed, as a percentage rounded to one decimal. With no
    /// finished results it is 0.0.
    pub fn configuration_stats(&self) -> ConfigurationStats {
        let inner = self.read();

        let total_configurations = inner.configurations.len();
        let active_test_runs = inner
            .test_runs
            .values()
            .filter(|tr| tr.status == RunStatus::Running)
            .count();

        let finished = inner
            .test_results
            .values()
            .filter(|r| matches!(r.status, RunStatus::Completed | RunStatus::Failed))
            .count();
        let successful = inner
            .test_results
            .values()
            .filter(|r| r.status == RunStatus::Completed)
            .count();
        let success_rate = if finished > 0 {
            let rate = (successful as f64 / finished as f64) * 100.0;
            (rate * 10.0).round() / 10.0
        } else {
            0.0
        };

        ConfigurationStats {
            total_configurations,
            active_test_runs,
            success_rate,
            total_applications: inner.applications.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTestResult, NewTestRun, TestRunPatch};

    fn result(status: RunStatus) -> NewTestResult {
        NewTestResult {
            test_run_id: 1,
            test_case_id: 1,
            configuration_id: 1,
            status,
            error_message: None,
            logs: None,
            duration: None,
        }
    }

    #[test]
    fn test_empty_store_has_zero_success_rate() {
        let store = MemStore::new();
        let stats = store.configuration_stats();
        assert_eq!(stats.total_configurations, 0);
        assert_eq!(stats.active_test_runs, 0);
        assert_eq!(stats.success_rate, 0.0);
        assert_eq!(stats.total_applications, 0);
    }

    #[test]
    fn test_success_rate_rounds_to_one_decimal() {
        let store = MemStore::new();
        store.create_test_result(result(RunStatus::Completed));
        store.create_test_result(result(RunStatus::Completed));
        store.create_test_result(result(RunStatus::Failed));

        // 2/3 = 66.666... -> 66.7
        assert_eq!(store.configuration_stats().success_rate, 66.7);
    }

    #[test]
    fn test_pending_and_running_results_are_excluded() {
        let store = MemStore::new();
        store.create_test_result(result(RunStatus::Pending));
        store.create_test_result(result(RunStatus::Running));
        store.create_test_result(result(RunStatus::Completed));

        assert_eq!(store.configuration_stats().success_rate, 100.0);
    }

    #[test]
    fn test_active_run_count() {
        let store = MemStore::new();
        let run = store.create_test_run(NewTestRun {
            name: "Nightly".to_string(),
            description: None,
            status: None,
            start_time: None,
            end_time: None,
            created_by: None,
        });
        assert_eq!(store.configuration_stats().active_test_runs, 0);

        store.update_test_run(
            run.id,
            TestRunPatch {
                status: Some(RunStatus::Running),
                ..Default::default()
            },
        );
        assert_eq!(store.configuration_stats().active_test_runs, 1);
    }
}
