//! In-memory store: the single source of truth for all entity state.
//!
//! Eight collections keyed by auto-incrementing integer ids, guarded by one
//! `RwLock` so every store operation (including read-modify-write updates)
//! is atomic with respect to concurrent requests. State is process-local
//! and lost on restart; durability is out of scope.
//!
//! No operation fails for domain reasons: "not found" is an `Option` or
//! `bool`, and referential integrity is not checked (an allocation may
//! reference ids that no longer exist).

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

use crate::models::{
    ActivityAction, ActivityLog, Allocation, Application, Configuration, TestCase, TestResult,
    TestRun, User,
};

mod activity;
mod allocations;
mod applications;
mod configurations;
mod seed;
mod stats;
mod test_cases;
mod test_results;
mod test_runs;
mod users;

/// Per-collection id allocator. Ids start at 1, increase monotonically, and
/// are never reused.
#[derive(Debug)]
pub(crate) struct IdCounter(i32);

impl IdCounter {
    fn new() -> Self {
        Self(1)
    }

    pub(crate) fn next(&mut self) -> i32 {
        let id = self.0;
        self.0 += 1;
        id
    }
}

/// All collection state, behind the store's lock.
pub(crate) struct StoreInner {
    pub(crate) users: HashMap<i32, User>,
    pub(crate) applications: HashMap<i32, Application>,
    pub(crate) configurations: HashMap<i32, Configuration>,
    pub(crate) test_cases: HashMap<i32, TestCase>,
    pub(crate) test_runs: HashMap<i32, TestRun>,
    pub(crate) allocations: HashMap<i32, Allocation>,
    pub(crate) test_results: HashMap<i32, TestResult>,
    pub(crate) activity: HashMap<i32, ActivityLog>,

    pub(crate) user_ids: IdCounter,
    pub(crate) application_ids: IdCounter,
    pub(crate) configuration_ids: IdCounter,
    pub(crate) test_case_ids: IdCounter,
    pub(crate) test_run_ids: IdCounter,
    pub(crate) allocation_ids: IdCounter,
    pub(crate) test_result_ids: IdCounter,
    pub(crate) activity_ids: IdCounter,
}

impl StoreInner {
    fn new() -> Self {
        Self {
            users: HashMap::new(),
            applications: HashMap::new(),
            configurations: HashMap::new(),
            test_cases: HashMap::new(),
            test_runs: HashMap::new(),
            allocations: HashMap::new(),
            test_results: HashMap::new(),
            activity: HashMap::new(),
            user_ids: IdCounter::new(),
            application_ids: IdCounter::new(),
            configuration_ids: IdCounter::new(),
            test_case_ids: IdCounter::new(),
            test_run_ids: IdCounter::new(),
            allocation_ids: IdCounter::new(),
            test_result_ids: IdCounter::new(),
            activity_ids: IdCounter::new(),
        }
    }

    /// Append an immutable audit entry. Called from mutation paths while the
    /// write lock is already held.
    pub(crate) fn append_activity(
        &mut self,
        user_id: i32,
        action: ActivityAction,
        resource_type: &str,
        resource_id: i32,
        resource_name: String,
        metadata: JsonValue,
    ) -> ActivityLog {
        let entry = ActivityLog {
            id: self.activity_ids.next(),
            user_id,
            action,
            resource_type: resource_type.to_string(),
            resource_id,
            resource_name,
            metadata,
            created_at: Utc::now(),
        };
        self.activity.insert(entry.id, entry.clone());
        entry
    }
}

/// The injected store handle shared across request handlers.
pub struct MemStore {
    inner: RwLock<StoreInner>,
}

impl MemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::new()),
        }
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        // A poisoned lock only means a handler panicked mid-operation; the
        // map contents are still usable, so recover the guard.
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort records newest-first, with id as the tiebreak so that rows created
/// within the same timestamp tick keep a stable order.
pub(crate) fn sort_newest_first<T>(items: &mut [T], key: impl Fn(&T) -> (DateTime<Utc>, i32)) {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}
