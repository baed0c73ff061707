//! Activity feed reads. Entries are appended by the mutation paths and are
//! immutable once written.

use crate::models::ActivityLog;

use super::{MemStore, sort_newest_first};

impl MemStore {
    /// The most recent `limit` activity entries, newest first.
    pub fn list_activity(&self, limit: usize) -> Vec<ActivityLog> {
        let inner = self.read();
        let mut entries: Vec<ActivityLog> = inner.activity.values().cloned().collect();
        sort_newest_first(&mut entries, |e| (e.created_at, e.id));
        entries.truncate(limit);
        entries
    }
}
