//! Test run collection operations.

use chrono::Utc;
use serde_json::json;

use crate::models::user::DEFAULT_USER_ID;
use crate::models::{
    ActivityAction, NewTestRun, RunStatus, TestRun, TestRunFilters, TestRunPatch, matches_search,
};

use super::{MemStore, sort_newest_first};

impl MemStore {
    /// List test runs, newest first, narrowed by the given filters.
    pub fn list_test_runs(&self, filters: &TestRunFilters) -> Vec<TestRun> {
        let inner = self.read();
        let mut runs: Vec<TestRun> = inner
            .test_runs
            .values()
            .filter(|tr| filters.status.map(|s| tr.status == s).unwrap_or(true))
            .filter(|tr| {
                filters
                    .search
                    .as_deref()
                    .map(|s| matches_search(s, &tr.name, tr.description.as_deref()))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        sort_newest_first(&mut runs, |tr| (tr.created_at, tr.id));
        runs
    }

    pub fn get_test_run(&self, id: i32) -> Option<TestRun> {
        self.read().test_runs.get(&id).cloned()
    }

    pub fn create_test_run(&self, input: NewTestRun) -> TestRun {
        let mut inner = self.write();
        let now = Utc::now();
        let test_run = TestRun {
            id: inner.test_run_ids.next(),
            name: input.name,
            description: input.description,
            status: input.status.unwrap_or(RunStatus::Pending),
            start_time: input.start_time,
            end_time: input.end_time,
            created_by: input.created_by,
            created_at: now,
            updated_at: now,
        };
        inner.test_runs.insert(test_run.id, test_run.clone());

        inner.append_activity(
            test_run.created_by.unwrap_or(DEFAULT_USER_ID),
            ActivityAction::Created,
            "test_run",
            test_run.id,
            test_run.name.clone(),
            json!({}),
        );

        test_run
    }

    pub fn update_test_run(&self, id: i32, patch: TestRunPatch) -> Option<TestRun> {
        let mut inner = self.write();
        let tr = inner.test_runs.get_mut(&id)?;

        if let Some(name) = patch.name {
            tr.name = name;
        }
        if let Some(description) = patch.description {
            tr.description = Some(description);
        }
        if let Some(status) = patch.status {
            tr.status = status;
        }
        if let Some(start_time) = patch.start_time {
            tr.start_time = Some(start_time);
        }
        if let Some(end_time) = patch.end_time {
            tr.end_time = Some(end_time);
        }
        tr.updated_at = Utc::now();
        let updated = tr.clone();

        inner.append_activity(
            DEFAULT_USER_ID,
            ActivityAction::Updated,
            "test_run",
            id,
            updated.name.clone(),
            json!({}),
        );

        Some(updated)
    }

    pub fn delete_test_run(&self, id: i32) -> bool {
        let mut inner = self.write();
        let Some(tr) = inner.test_runs.remove(&id) else {
            return false;
        };

        inner.append_activity(
            DEFAULT_USER_ID,
            ActivityAction::Deleted,
            "test_run",
            id,
            tr.name,
            json!({}),
        );

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_run(name: &str) -> NewTestRun {
        NewTestRun {
            name: name.to_string(),
            description: None,
            status: None,
            start_time: None,
            end_time: None,
            created_by: None,
        }
    }

    #[test]
    fn test_create_defaults_to_pending() {
        let store = MemStore::new();
        let created = store.create_test_run(sample_run("Nightly"));
        assert_eq!(created.status, RunStatus::Pending);
        assert!(created.start_time.is_none());
    }

    #[test]
    fn test_status_transition_via_update() {
        let store = MemStore::new();
        let created = store.create_test_run(sample_run("Nightly"));
        let updated = store
            .update_test_run(
                created.id,
                TestRunPatch {
                    status: Some(RunStatus::Running),
                    start_time: Some(Utc::now()),
                    ..Default::default()
                },
            )
            .expect("exists");
        assert_eq!(updated.status, RunStatus::Running);
        assert!(updated.start_time.is_some());
    }

    #[test]
    fn test_status_filter() {
        let store = MemStore::new();
        let running = store.create_test_run(sample_run("Running Run"));
        store.create_test_run(sample_run("Pending Run"));
        store.update_test_run(
            running.id,
            TestRunPatch {
                status: Some(RunStatus::Running),
                ..Default::default()
            },
        );

        let hits = store.list_test_runs(&TestRunFilters {
            status: Some(RunStatus::Running),
            ..Default::default()
        });
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Running Run");
    }

    #[test]
    fn test_delete_then_get_is_none() {
        let store = MemStore::new();
        let created = store.create_test_run(sample_run("Doomed"));
        assert!(store.delete_test_run(created.id));
        assert!(store.get_test_run(created.id).is_none());
    }
}
