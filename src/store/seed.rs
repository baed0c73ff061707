//! Demo seed data, matching the dashboard's expected starting state.
//!
//! Seeding writes rows directly so that only the three curated activity
//! entries appear in the feed, not one per seeded row.

use chrono::Utc;
use serde_json::json;

use crate::models::{
    ActivityAction, ActivityLog, Application, CloudType, Configuration, ConfigurationType,
    Priority, ResourceStatus, TestCase, User,
};

use super::MemStore;

impl MemStore {
    /// Seed the admin user, demo applications, configurations, test cases,
    /// and a few activity entries. Intended to run once at startup.
    pub fn seed_demo_data(&self) {
        let mut inner = self.write();
        let now = Utc::now();

        let admin = User {
            id: inner.user_ids.next(),
            username: "admin".to_string(),
            password: "admin123".to_string(),
            email: "admin@kaneai.com".to_string(),
            name: "Administrator".to_string(),
            role: "admin".to_string(),
            created_at: now,
        };
        let admin_id = admin.id;
        inner.users.insert(admin.id, admin);

        let apps = [
            ("Banking App", "2.1.0", "iOS", "com.bank.mobile"),
            ("E-commerce App", "1.5.2", "Android", "com.shop.app"),
            ("Social Media App", "3.0.1", "iOS", "com.social.app"),
        ];
        for (name, version, platform, package_name) in apps {
            let application = Application {
                id: inner.application_ids.next(),
                name: name.to_string(),
                version: version.to_string(),
                description: Some(format!("{name} for testing")),
                platform: platform.to_string(),
                package_name: Some(package_name.to_string()),
                created_at: now,
                updated_at: now,
            };
            inner
                .applications
                .insert(application.id, application);
        }

        let configs = [
            Configuration {
                id: 0,
                name: "Chrome Windows 11".to_string(),
                config_type: ConfigurationType::Desktop,
                status: ResourceStatus::Active,
                os: Some("Windows 11".to_string()),
                os_version: None,
                browser: Some("Chrome".to_string()),
                browser_version: Some("118.0".to_string()),
                resolution: Some("1920x1080".to_string()),
                manufacturer: None,
                device_name: None,
                cloud_type: None,
                application_id: None,
                tags: Vec::new(),
                description: Some("Chrome Windows 11 configuration".to_string()),
                is_template: false,
                created_by: Some(admin_id),
                created_at: now,
                updated_at: now,
            },
            Configuration {
                id: 0,
                name: "iPhone 14 Pro".to_string(),
                config_type: ConfigurationType::RealDevice,
                status: ResourceStatus::Active,
                os: Some("iOS".to_string()),
                os_version: Some("17.1".to_string()),
                browser: None,
                browser_version: None,
                resolution: None,
                manufacturer: Some("Apple".to_string()),
                device_name: Some("iPhone 14 Pro".to_string()),
                cloud_type: Some(CloudType::Public),
                application_id: Some(1),
                tags: Vec::new(),
                description: Some("iPhone 14 Pro configuration".to_string()),
                is_template: false,
                created_by: Some(admin_id),
                created_at: now,
                updated_at: now,
            },
            Configuration {
                id: 0,
                name: "Android Emulator".to_string(),
                config_type: ConfigurationType::VirtualDevice,
                status: ResourceStatus::Active,
                os: Some("Android".to_string()),
                os_version: Some("13".to_string()),
                browser: Some("Chrome Mobile".to_string()),
                browser_version: None,
                resolution: None,
                manufacturer: Some("Google".to_string()),
                device_name: Some("Pixel 7".to_string()),
                cloud_type: None,
                application_id: None,
                tags: Vec::new(),
                description: Some("Android Emulator configuration".to_string()),
                is_template: false,
                created_by: Some(admin_id),
                created_at: now,
                updated_at: now,
            },
        ];
        for mut configuration in configs {
            configuration.id = inner.configuration_ids.next();
            inner
                .configurations
                .insert(configuration.id, configuration);
        }

        let test_cases = [
            ("Login Test", "KaneAI", Priority::High),
            ("Payment Flow", "Test Manager", Priority::High),
            ("Navigation Test", "KaneAI", Priority::Medium),
        ];
        for (name, category, priority) in test_cases {
            let test_case = TestCase {
                id: inner.test_case_ids.next(),
                name: name.to_string(),
                description: Some(format!("{name} description")),
                category: category.to_string(),
                steps: Vec::new(),
                expected_results: Some("Test should pass".to_string()),
                priority,
                status: ResourceStatus::Active,
                created_by: Some(admin_id),
                created_at: now,
                updated_at: now,
            };
            inner.test_cases.insert(test_case.id, test_case);
        }

        let activities = [
            (ActivityAction::Created, "configuration", 1, "Chrome Windows 11"),
            (ActivityAction::Updated, "application", 1, "Banking App"),
            (ActivityAction::Allocated, "configuration", 2, "iPhone 14 Pro"),
        ];
        for (action, resource_type, resource_id, resource_name) in activities {
            let entry = ActivityLog {
                id: inner.activity_ids.next(),
                user_id: admin_id,
                action,
                resource_type: resource_type.to_string(),
                resource_id,
                resource_name: resource_name.to_string(),
                metadata: json!({}),
                created_at: now,
            };
            inner.activity.insert(entry.id, entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AllocationFilters, ApplicationFilters, ConfigurationFilters};

    #[test]
    fn test_seed_populates_demo_rows() {
        let store = MemStore::new();
        store.seed_demo_data();

        assert!(store.get_user_by_username("admin").is_some());
        assert_eq!(
            store
                .list_applications(&ApplicationFilters::default())
                .len(),
            3
        );
        assert_eq!(
            store
                .list_configurations(&ConfigurationFilters::default())
                .len(),
            3
        );
        assert_eq!(store.list_activity(50).len(), 3);
        assert!(store.list_allocations(&AllocationFilters::default()).is_empty());
    }

    #[test]
    fn test_seeded_ids_continue_from_demo_rows() {
        let store = MemStore::new();
        store.seed_demo_data();

        let created = store.create_configuration(crate::models::NewConfiguration {
            name: "Firefox Linux".to_string(),
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
        assert_eq!(created.id, 4);
    }
}
