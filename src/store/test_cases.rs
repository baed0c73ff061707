//! Test case collection operations.

use chrono::Utc;
use serde_json::json;

use crate::models::user::DEFAULT_USER_ID;
use crate::models::{
    ActivityAction, NewTestCase, Priority, ResourceStatus, TestCase, TestCaseFilters,
    TestCasePatch, matches_search,
};

use super::{MemStore, sort_newest_first};

impl MemStore {
    /// List test cases, newest first, narrowed by the given filters.
    pub fn list_test_cases(&self, filters: &TestCaseFilters) -> Vec<TestCase> {
        let inner = self.read();
        let mut cases: Vec<TestCase> = inner
            .test_cases
            .values()
            .filter(|tc| {
                filters
                    .category
                    .as_deref()
                    .map(|c| tc.category == c)
                    .unwrap_or(true)
            })
            .filter(|tc| filters.status.map(|s| tc.status == s).unwrap_or(true))
            .filter(|tc| {
                filters
                    .search
                    .as_deref()
                    .map(|s| matches_search(s, &tc.name, tc.description.as_deref()))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        sort_newest_first(&mut cases, |tc| (tc.created_at, tc.id));
        cases
    }

    pub fn get_test_case(&self, id: i32) -> Option<TestCase> {
        self.read().test_cases.get(&id).cloned()
    }

    pub fn create_test_case(&self, input: NewTestCase) -> TestCase {
        let mut inner = self.write();
        let now = Utc::now();
        let test_case = TestCase {
            id: inner.test_case_ids.next(),
            name: input.name,
            description: input.description,
            category: input.category,
            steps: input.steps.unwrap_or_default(),
            expected_results: input.expected_results,
            priority: input.priority.unwrap_or(Priority::Medium),
            status: input.status.unwrap_or(ResourceStatus::Active),
            created_by: input.created_by,
            created_at: now,
            updated_at: now,
        };
        inner.test_cases.insert(test_case.id, test_case.clone());

        inner.append_activity(
            test_case.created_by.unwrap_or(DEFAULT_USER_ID),
            ActivityAction::Created,
            "test_case",
            test_case.id,
            test_case.name.clone(),
            json!({ "category": test_case.category }),
        );

        test_case
    }

    pub fn update_test_case(&self, id: i32, patch: TestCasePatch) -> Option<TestCase> {
        let mut inner = self.write();
        let tc = inner.test_cases.get_mut(&id)?;

        if let Some(name) = patch.name {
            tc.name = name;
        }
        if let Some(description) = patch.description {
            tc.description = Some(description);
        }
        if let Some(category) = patch.category {
            tc.category = category;
        }
        if let Some(steps) = patch.steps {
            tc.steps = steps;
        }
        if let Some(expected_results) = patch.expected_results {
            tc.expected_results = Some(expected_results);
        }
        if let Some(priority) = patch.priority {
            tc.priority = priority;
        }
        if let Some(status) = patch.status {
            tc.status = status;
        }
        tc.updated_at = Utc::now();
        let updated = tc.clone();

        inner.append_activity(
            DEFAULT_USER_ID,
            ActivityAction::Updated,
            "test_case",
            id,
            updated.name.clone(),
            json!({}),
        );

        Some(updated)
    }

    pub fn delete_test_case(&self, id: i32) -> bool {
        let mut inner = self.write();
        let Some(tc) = inner.test_cases.remove(&id) else {
            return false;
        };

        inner.append_activity(
            DEFAULT_USER_ID,
            ActivityAction::Deleted,
            "test_case",
            id,
            tc.name,
            json!({}),
        );

        true
    }
}
