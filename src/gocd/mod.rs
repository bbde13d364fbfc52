//! GoCD API client module
//!
//! Typed, read-only access to the GoCD config API: pipeline groups,
//! pipeline configs and pipeline templates.

mod client;
pub mod models;
pub mod pipeline_groups;
pub mod pipelines;
pub mod templates;
pub mod traits;

pub use client::GocdClient;
pub use models::{
    Approval, Artifact, Authorization, ConfigurationProperty, EnvironmentVariable, Job,
    PluginConfiguration, Property, Stage, Tab, Task, TaskAttributes,
};
pub use pipeline_groups::{PipelineGroup, PipelineSummary};
pub use pipelines::{Material, MaterialAttributes, MaterialFilter, Parameter, Pipeline};
pub use templates::{PipelineTemplate, PipelineTemplateSummary};
pub use traits::GocdResource;
