//! Configuration collection operations.

use chrono::Utc;
use serde_json::json;

use crate::models::user::DEFAULT_USER_ID;
use crate::models::{
    ActivityAction, Configuration, ConfigurationFilters, ConfigurationPatch, NewConfiguration,
    ResourceStatus, matches_search,
};

use super::{MemStore, sort_newest_first};

impl MemStore {
    /// List configurations, newest first, narrowed by the given filters.
    pub fn list_configurations(&self, filters: &ConfigurationFilters) -> Vec<Configuration> {
        let inner = self.read();
        let mut configs: Vec<Configuration> = inner
            .configurations
            .values()
            .filter(|c| {
                filters
                    .config_type
                    .map(|t| c.config_type == t)
                    .unwrap_or(true)
            })
            .filter(|c| filters.status.map(|s| c.status == s).unwrap_or(true))
            .filter(|c| {
                filters
                    .search
                    .as_deref()
                    .map(|s| matches_search(s, &c.name, c.description.as_deref()))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        sort_newest_first(&mut configs, |c| (c.created_at, c.id));
        configs
    }

    pub fn get_configuration(&self, id: i32) -> Option<Configuration> {
        self.read().configurations.get(&id).cloned()
    }

    pub fn create_configuration(&self, input: NewConfiguration) -> Configuration {
        let mut inner = self.write();
        let now = Utc::now();
        let configuration = Configuration {
            id: inner.configuration_ids.next(),
            name: input.name,
            config_type: input.config_type,
            status: input.status.unwrap_or(ResourceStatus::Active),
            os: input.os,
            os_version: input.os_version,
            browser: input.browser,
            browser_version: input.browser_version,
            resolution: input.resolution,
            manufacturer: input.manufacturer,
            device_name: input.device_name,
            cloud_type: input.cloud_type,
            application_id: input.application_id,
            tags: input.tags.unwrap_or_default(),
            description: input.description,
            is_template: input.is_template.unwrap_or(false),
            created_by: input.created_by,
            created_at: now,
            updated_at: now,
        };
        inner
            .configurations
            .insert(configuration.id, configuration.clone());

        inner.append_activity(
            configuration.created_by.unwrap_or(DEFAULT_USER_ID),
            ActivityAction::Created,
            "configuration",
            configuration.id,
            configuration.name.clone(),
            json!({ "type": configuration.config_type.as_str() }),
        );

        configuration
    }

    pub fn update_configuration(
        &self,
        id: i32,
        patch: ConfigurationPatch,
    ) -> Option<Configuration> {
        let mut inner = self.write();
        let config = inner.configurations.get_mut(&id)?;

        if let Some(name) = patch.name {
            config.name = name;
        }
        if let Some(config_type) = patch.config_type {
            config.config_type = config_type;
        }
        if let Some(status) = patch.status {
            config.status = status;
        }
        if let Some(os) = patch.os {
            config.os = Some(os);
        }
        if let Some(os_version) = patch.os_version {
            config.os_version = Some(os_version);
        }
        if let Some(browser) = patch.browser {
            config.browser = Some(browser);
        }
        if let Some(browser_version) = patch.browser_version {
            config.browser_version = Some(browser_version);
        }
        if let Some(resolution) = patch.resolution {
            config.resolution = Some(resolution);
        }
        if let Some(manufacturer) = patch.manufacturer {
            config.manufacturer = Some(manufacturer);
        }
        if let Some(device_name) = patch.device_name {
            config.device_name = Some(device_name);
        }
        if let Some(cloud_type) = patch.cloud_type {
            config.cloud_type = Some(cloud_type);
        }
        if let Some(application_id) = patch.application_id {
            config.application_id = Some(application_id);
        }
        if let Some(tags) = patch.tags {
            config.tags = tags;
        }
        if let Some(description) = patch.description {
            config.description = Some(description);
        }
        if let Some(is_template) = patch.is_template {
            config.is_template = is_template;
        }
        config.updated_at = Utc::now();
        let updated = config.clone();

        inner.append_activity(
            DEFAULT_USER_ID,
            ActivityAction::Updated,
            "configuration",
            id,
            updated.name.clone(),
            json!({}),
        );

        Some(updated)
    }

    pub fn delete_configuration(&self, id: i32) -> bool {
        let mut inner = self.write();
        let Some(config) = inner.configurations.remove(&id) else {
            return false;
        };

        // Allocations referencing this configuration are left dangling on
        // purpose; see DESIGN.md.
        inner.append_activity(
            DEFAULT_USER_ID,
            ActivityAction::Deleted,
            "configuration",
            id,
            config.name,
            json!({}),
        );

        true
    }
}
