//! Stage, job and task data models shared by pipelines and templates

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a JSON `null` as the type's zero value.
///
/// GoCD sends `null` for many unset fields; the renderer treats null,
/// absent and empty alike.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Environment variable on a pipeline, stage or job
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct EnvironmentVariable {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub value: String,
    #[serde(default, deserialize_with = "nullable")]
    pub encrypted_value: String,
    #[serde(default, deserialize_with = "nullable")]
    pub secure: bool,
}

/// Stage configuration
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Stage {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub fetch_materials: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub clean_working_directory: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub never_cleanup_artifacts: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub approval: Option<Approval>,
    #[serde(default, deserialize_with = "nullable")]
    pub environment_variables: Vec<EnvironmentVariable>,
    #[serde(default, deserialize_with = "nullable")]
    pub jobs: Vec<Job>,
}

/// Stage approval settings
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Approval {
    /// `success` (automatic) or `manual`
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub approval_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub authorization: Authorization,
}

/// Users and roles allowed to approve a stage
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Authorization {
    #[serde(default, deserialize_with = "nullable")]
    pub users: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub roles: Vec<String>,
}

impl Approval {
    /// Check if the stage waits for a manual trigger
    pub fn is_manual(&self) -> bool {
        self.approval_type == "manual"
    }
}

/// Job configuration
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Job {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    /// Minutes before the job is cancelled; `None` and `0` mean the server default
    #[serde(default, deserialize_with = "nullable")]
    pub timeout: Option<u32>,
    #[serde(default, deserialize_with = "nullable")]
    pub environment_variables: Vec<EnvironmentVariable>,
    #[serde(default, deserialize_with = "nullable")]
    pub resources: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub elastic_profile_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tabs: Vec<Tab>,
    #[serde(default, deserialize_with = "nullable")]
    pub artifacts: Vec<Artifact>,
    #[serde(default, deserialize_with = "nullable")]
    pub properties: Vec<Property>,
    #[serde(default, deserialize_with = "nullable")]
    pub tasks: Vec<Task>,
}

impl Job {
    /// Explicit timeout, if one is configured
    pub fn explicit_timeout(&self) -> Option<u32> {
        self.timeout.filter(|t| *t > 0)
    }
}

/// Build artifact published by a job
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Artifact {
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub artifact_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub source: String,
    #[serde(default, deserialize_with = "nullable")]
    pub destination: String,
}

/// Custom tab shown on the job details page
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Tab {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub path: String,
}

/// Job property extracted from an artifact by XPath
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Property {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub source: String,
    #[serde(default, deserialize_with = "nullable")]
    pub xpath: String,
}

/// Task within a job
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Task {
    /// `exec`, `ant`, `nant`, `rake`, `fetch` or `pluggable_task`
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub task_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub attributes: TaskAttributes,
}

/// Task attributes; which fields are set depends on the task type
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct TaskAttributes {
    #[serde(default, deserialize_with = "nullable")]
    pub run_if: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub command: String,
    #[serde(default, deserialize_with = "nullable")]
    pub arguments: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub working_directory: String,
    #[serde(default, deserialize_with = "nullable")]
    pub build_file: String,
    #[serde(default, deserialize_with = "nullable")]
    pub target: String,
    #[serde(default, deserialize_with = "nullable")]
    pub nant_path: String,
    #[serde(default, deserialize_with = "nullable")]
    pub pipeline: String,
    #[serde(default, deserialize_with = "nullable")]
    pub stage: String,
    #[serde(default, deserialize_with = "nullable")]
    pub job: String,
    #[serde(default, deserialize_with = "nullable")]
    pub source: String,
    #[serde(default, deserialize_with = "nullable")]
    pub is_source_a_file: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub destination: String,
    #[serde(default, deserialize_with = "nullable")]
    pub plugin_configuration: Option<PluginConfiguration>,
    #[serde(default, deserialize_with = "nullable")]
    pub configuration: Vec<ConfigurationProperty>,
}

/// Plugin reference of a pluggable task
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct PluginConfiguration {
    #[serde(default, deserialize_with = "nullable")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub version: String,
}

/// Key/value setting passed to a pluggable task
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ConfigurationProperty {
    #[serde(default, deserialize_with = "nullable")]
    pub key: String,
    #[serde(default, deserialize_with = "nullable")]
    pub value: String,
}
