/// Configuration constants for the GoCD API
pub mod api {
    /// Path prefix appended to the configured server URL
    pub const BASE_PATH: &str = "/api";

    /// Pipeline templates endpoint
    pub const TEMPLATES: &str = "admin/templates";

    /// Pipeline config endpoint
    pub const PIPELINES: &str = "admin/pipelines";

    /// Pipeline groups endpoint
    pub const PIPELINE_GROUPS: &str = "config/pipeline_groups";

    /// Accept header for the template API
    pub const ACCEPT_V3: &str = "application/vnd.go.cd.v3+json";

    /// Accept header for the pipeline config API
    pub const ACCEPT_V4: &str = "application/vnd.go.cd.v4+json";

    /// Accept header for unversioned endpoints
    pub const ACCEPT_JSON: &str = "application/json";

    /// Maximum number of pipeline configs fetched at once
    pub const MAX_CONCURRENT_REQUESTS: usize = 8;
}

/// Configuration constants for profiles
pub mod profile {
    /// Profile file, relative to HOME
    pub const FILE_NAME: &str = ".gocd.conf";

    /// Profile used when neither the CLI nor the environment names one
    pub const DEFAULT_PROFILE: &str = "default";

    /// Environment variable naming the default profile
    pub const ENV_DEFAULT_PROFILE: &str = "GOCD_DEFAULT_PROFILE";

    /// Environment variable overriding the server URL
    pub const ENV_SERVER: &str = "GOCD_SERVER";

    /// Environment variable overriding the username
    pub const ENV_USERNAME: &str = "GOCD_USERNAME";

    /// Environment variable overriding the password
    pub const ENV_PASSWORD: &str = "GOCD_PASSWORD";

    /// Environment variable disabling TLS verification
    pub const ENV_SKIP_SSL_CHECK: &str = "GOCD_SKIP_SSL_CHECK";
}

/// Terraform output conventions
pub mod terraform {
    /// Label template GoCD uses when none is configured
    pub const DEFAULT_LABEL_TEMPLATE: &str = "${COUNT}";

    /// Extension of generated files
    pub const FILE_EXTENSION: &str = "tf";
}

/// Default values for CLI
pub mod defaults {
    /// Default resource id, matching every resource
    pub const ID: &str = "*";

    /// Default output directory for --to-file
    pub const OUTPUT_DIR: &str = ".";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
