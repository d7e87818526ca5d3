//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    /// Backend connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Filter defaults applied at startup
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Fixed device location, used when no location is passed on the command line
    #[serde(default)]
    pub location: LocationConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the ranking backend; environment and CLI flags take precedence
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds; unset means the environment's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Filter defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    /// Urgency level (`low`, `normal`, `high`)
    #[serde(default = "default_urgency")]
    pub urgency: String,

    /// Amenity tags preferred by default
    #[serde(default)]
    pub preferences: Vec<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            urgency: default_urgency(),
            preferences: Vec::new(),
        }
    }
}

fn default_urgency() -> String {
    "normal".to_string()
}

/// Fixed location
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct LocationConfig {
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Longitude in degrees
    pub longitude: Option<f64>,
}

impl LocationConfig {
    /// Returns the configured pair only when both halves are present.
    #[must_use]
    pub fn pair(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}
