//! Profile configuration data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Contents of `~/.gocd.conf`: profile name to connection settings
pub type ProfileConfig = BTreeMap<String, ProfileEntry>;

/// A named profile as stored in the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileEntry {
    /// GoCD server URL (e.g. `https://ci.example.com/go`)
    #[serde(default)]
    pub server: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub skip_ssl_check: bool,
}

/// Connection settings after CLI, environment and file have been merged
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub server: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub skip_ssl_check: bool,
}

/// Per-field overrides taken from CLI flags
#[derive(Debug, Clone, Default)]
pub struct ProfileOverrides {
    pub server: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub skip_ssl_check: bool,
}
