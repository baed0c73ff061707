//! Application collection operations.

use chrono::Utc;
use serde_json::json;

use crate::models::user::DEFAULT_USER_ID;
use crate::models::{
    ActivityAction, Application, ApplicationFilters, ApplicationPatch, NewApplication,
    matches_search,
};

use super::{MemStore, sort_newest_first};

impl MemStore {
    /// List applications, newest first.
    pub fn list_applications(&self, filters: &ApplicationFilters) -> Vec<Application> {
        let inner = self.read();
        let mut apps: Vec<Application> = inner
            .applications
            .values()
            .filter(|app| {
                filters
                    .search
                    .as_deref()
                    .map(|s| matches_search(s, &app.name, app.description.as_deref()))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        sort_newest_first(&mut apps, |a| (a.created_at, a.id));
        apps
    }

    pub fn get_application(&self, id: i32) -> Option<Application> {
        self.read().applications.get(&id).cloned()
    }

    pub fn create_application(&self, input: NewApplication) -> Application {
        let mut inner = self.write();
        let now = Utc::now();
        let application = Application {
            id: inner.application_ids.next(),
            name: input.name,
            version: input.version,
            description: input.description,
            platform: input.platform,
            package_name: input.package_name,
            created_at: now,
            updated_at: now,
        };
        inner
            .applications
            .insert(application.id, application.clone());

        inner.append_activity(
            DEFAULT_USER_ID,
            ActivityAction::Created,
            "application",
            application.id,
            application.name.clone(),
            json!({}),
        );

        application
    }

    pub fn update_application(&self, id: i32, patch: ApplicationPatch) -> Option<Application> {
        let mut inner = self.write();
        let app = inner.applications.get_mut(&id)?;

        if let Some(name) = patch.name {
            app.name = name;
        }
        if let Some(version) = patch.version {
            app.version = version;
        }
        if let Some(description) = patch.description {
            app.description = Some(description);
        }
        if let Some(platform) = patch.platform {
            app.platform = platform;
        }
        if let Some(package_name) = patch.package_name {
            app.package_name = Some(package_name);
        }
        app.updated_at = Utc::now();
        let updated = app.clone();

        inner.append_activity(
            DEFAULT_USER_ID,
            ActivityAction::Updated,
            "application",
            id,
            updated.name.clone(),
            json!({}),
        );

        Some(updated)
    }

    pub fn delete_application(&self, id: i32) -> bool {
        let mut inner = self.write();
        let Some(app) = inner.applications.remove(&id) else {
            return false;
        };

        inner.append_activity(
            DEFAULT_USER_ID,
            ActivityAction::Deleted,
            "application",
            id,
            app.name,
            json!({}),
        );

        true
    }
}
