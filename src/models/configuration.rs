//! Test configuration records: desktop browser setups, real devices, and
//! virtual/emulated devices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ResourceStatus;

/// Kind of test environment a configuration describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConfigurationType {
    Desktop,
    RealDevice,
    VirtualDevice,
}

impl ConfigurationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::RealDevice => "real_device",
            Self::VirtualDevice => "virtual_device",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "desktop" => Some(Self::Desktop),
            "real_device" => Some(Self::RealDevice),
            "virtual_device" => Some(Self::VirtualDevice),
            _ => None,
        }
    }
}

/// Device cloud placement for real-device configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CloudType {
    Public,
    Private,
}

/// A named test environment definition.
///
/// The type-specific fields (os/browser/resolution for desktop,
/// manufacturer/deviceName/cloudType for devices) are all optional; which
/// ones are meaningful depends on `type`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub config_type: ConfigurationType,
    pub status: ResourceStatus,

    // Desktop fields
    pub os: Option<String>,
    pub os_version: Option<String>,
    pub browser: Option<String>,
    pub browser_version: Option<String>,
    pub resolution: Option<String>,

    // Device fields
    pub manufacturer: Option<String>,
    pub device_name: Option<String>,
    pub cloud_type: Option<CloudType>,
    pub application_id: Option<i32>,

    // Metadata
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub is_template: bool,

    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a configuration.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewConfiguration {
    pub name: String,
    #[serde(rename = "type")]
    pub config_type: ConfigurationType,
    pub status: Option<ResourceStatus>,
    pub os: Option<String>,
    pub os_version: Option<String>,
    pub browser: Option<String>,
    pub browser_version: Option<String>,
    pub resolution: Option<String>,
    pub manufacturer: Option<String>,
    pub device_name: Option<String>,
    pub cloud_type: Option<CloudType>,
    pub application_id: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
    pub is_template: Option<bool>,
    pub created_by: Option<i32>,
}

/// Partial update for a configuration. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationPatch {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub config_type: Option<ConfigurationType>,
    pub status: Option<ResourceStatus>,
    pub os: Option<String>,
    pub os_version: Option<String>,
    pub browser: Option<String>,
    pub browser_version: Option<String>,
    pub resolution: Option<String>,
    pub manufacturer: Option<String>,
    pub device_name: Option<String>,
    pub cloud_type: Option<CloudType>,
    pub application_id: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
    pub is_template: Option<bool>,
}

/// Query filters for listing configurations.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ConfigurationFilters {
    #[serde(rename = "type")]
    pub config_type: Option<ConfigurationType>,
    pub status: Option<ResourceStatus>,
    /// Case-insensitive substring over name/description.
    pub search: Option<String>,
}
