//! Configuration allocation operations.
//!
//! Allocations are the many-to-many join between configurations and test
//! cases/runs. Creation does not validate that the referenced ids exist, and
//! deleting a configuration, test case, or test run leaves its allocations
//! dangling; see DESIGN.md.

use chrono::Utc;
use serde_json::json;

use crate::models::user::DEFAULT_USER_ID;
use crate::models::{ActivityAction, Allocation, AllocationFilters, NewAllocation};

use super::{MemStore, StoreInner, sort_newest_first};

/// Activity entries for allocations are keyed off the configuration's name.
fn configuration_label(inner: &StoreInner, configuration_id: i32) -> String {
    inner
        .configurations
        .get(&configuration_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Configuration".to_string())
}

impl MemStore {
    /// List allocations, newest first, narrowed by any combination of
    /// configuration/test-case/test-run id.
    pub fn list_allocations(&self, filters: &AllocationFilters) -> Vec<Allocation> {
        let inner = self.read();
        let mut allocations: Vec<Allocation> = inner
            .allocations
            .values()
            .filter(|a| {
                filters
                    .configuration_id
                    .map(|id| a.configuration_id == id)
                    .unwrap_or(true)
            })
            .filter(|a| {
                filters
                    .test_case_id
                    .map(|id| a.test_case_id == Some(id))
                    .unwrap_or(true)
            })
            .filter(|a| {
                filters
                    .test_run_id
                    .map(|id| a.test_run_id == Some(id))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        sort_newest_first(&mut allocations, |a| (a.created_at, a.id));
        allocations
    }

    /// Allocations assigned to one test case.
    pub fn allocations_by_test_case(&self, test_case_id: i32) -> Vec<Allocation> {
        self.list_allocations(&AllocationFilters {
            test_case_id: Some(test_case_id),
            ..Default::default()
        })
    }

    /// Allocations assigned to one test run.
    pub fn allocations_by_test_run(&self, test_run_id: i32) -> Vec<Allocation> {
        self.list_allocations(&AllocationFilters {
            test_run_id: Some(test_run_id),
            ..Default::default()
        })
    }

    /// Allocations of one configuration.
    pub fn allocations_by_configuration(&self, configuration_id: i32) -> Vec<Allocation> {
        self.list_allocations(&AllocationFilters {
            configuration_id: Some(configuration_id),
            ..Default::default()
        })
    }

    pub fn create_allocation(&self, input: NewAllocation) -> Allocation {
        let mut inner = self.write();
        let allocation = Allocation {
            id: inner.allocation_ids.next(),
            configuration_id: input.configuration_id,
            test_case_id: input.test_case_id,
            test_run_id: input.test_run_id,
            created_at: Utc::now(),
        };
        inner.allocations.insert(allocation.id, allocation.clone());

        let resource_name = configuration_label(&inner, allocation.configuration_id);
        inner.append_activity(
            DEFAULT_USER_ID,
            ActivityAction::Allocated,
            "configuration",
            allocation.configuration_id,
            resource_name,
            json!({
                "testCaseId": allocation.test_case_id,
                "testRunId": allocation.test_run_id,
            }),
        );

        allocation
    }

    pub fn delete_allocation(&self, id: i32) -> bool {
        let mut inner = self.write();
        let Some(allocation) = inner.allocations.remove(&id) else {
            return false;
        };

        let resource_name = configuration_label(&inner, allocation.configuration_id);
        inner.append_activity(
            DEFAULT_USER_ID,
            ActivityAction::Deleted,
            "allocation",
            id,
            resource_name,
            json!({
                "configurationId": allocation.configuration_id,
                "testCaseId": allocation.test_case_id,
                "testRunId": allocation.test_run_id,
            }),
        );

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocation(config: i32, case: Option<i32>, run: Option<i32>) -> NewAllocation {
        NewAllocation {
            configuration_id: config,
            test_case_id: case,
            test_run_id: run,
        }
    }

    #[test]
    fn test_create_and_list() {
        let store = MemStore::new();
        let created = store.create_allocation(allocation(1, Some(2), None));
        assert_eq!(created.configuration_id, 1);
        assert_eq!(created.test_case_id, Some(2));
        assert_eq!(created.test_run_id, None);

        let all = store.list_allocations(&AllocationFilters::default());
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_lookup_by_target() {
        let store = MemStore::new();
        store.create_allocation(allocation(1, Some(10), None));
        store.create_allocation(allocation(1, None, Some(20)));
        store.create_allocation(allocation(2, Some(10), None));

        assert_eq!(store.allocations_by_test_case(10).len(), 2);
        assert_eq!(store.allocations_by_test_run(20).len(), 1);
        assert_eq!(store.allocations_by_configuration(1).len(), 2);
        assert!(store.allocations_by_test_run(99).is_empty());
    }

    #[test]
    fn test_create_accepts_dangling_configuration_id() {
        // No referential integrity: the configuration does not exist.
        let store = MemStore::new();
        let created = store.create_allocation(allocation(999, None, None));
        assert_eq!(created.configuration_id, 999);

        let log = store.list_activity(50);
        assert_eq!(log[0].action, ActivityAction::Allocated);
        assert_eq!(log[0].resource_name, "Configuration");
    }

    #[test]
    fn test_allocation_logs_configuration_name() {
        let store = MemStore::new();
        let config = store.create_configuration(crate::models::NewConfiguration {
            name: "Chrome Windows 11".to_string(),
            config_type: crate::models::ConfigurationType::Desktop,
            status: None,
            os: None,
            os_version: None,
            browser: None,
            browser_version: None,
            resolution: None,
            manufacturer: None,
            device_name: None,
            cloud_type: None,
            application_id: None,
            tags: None,
            description: None,
            is_template: None,
            created_by: None,
        });
        store.create_allocation(allocation(config.id, Some(1), None));

        let log = store.list_activity(50);
        assert_eq!(log[0].action, ActivityAction::Allocated);
        assert_eq!(log[0].resource_name, "Chrome Windows 11");
        assert_eq!(log[0].metadata["testCaseId"], 1);
    }

    #[test]
    fn test_delete_allocation() {
        let store = MemStore::new();
        let created = store.create_allocation(allocation(1, Some(2), None));
        assert!(store.delete_allocation(created.id));
        assert!(store.list_allocations(&AllocationFilters::default()).is_empty());
        assert!(!store.delete_allocation(created.id));
    }
}
