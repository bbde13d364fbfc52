//! gocd-tf-generate - Terraform configuration from a running GoCD server
//!
//! Reads pipeline and pipeline template configuration through the GoCD REST
//! API and renders it as HCL for the GoCD Terraform provider.
//!
//! # Features
//!
//! - Pipelines with materials, parameters and environment variables
//! - Pipeline templates
//! - Stages, jobs and tasks as separate, importable blocks
//! - Named connection profiles in `~/.gocd.conf`
//! - Output to stdout or one `.tf` file per resource
//!
//! # Example
//!
//! ```bash
//! # Print all pipelines
//! gocd-tf-generate --resource pipeline
//!
//! # Write one template to ./generated/build.tf
//! gocd-tf-generate --resource pipeline_template --id build --to-file -o generated
//!
//! # Use a different profile
//! gocd-tf-generate --resource pipeline --profile staging
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod gocd;
pub mod output;
pub mod profile;
pub mod render;
pub mod ui;

pub use cli::{Cli, ResourceKind};
pub use error::{GocdError, Result};
pub use generate::{generate_pipelines, generate_templates, run_generate_command};
pub use gocd::{GocdClient, GocdResource, Pipeline, PipelineTemplate};
pub use output::{OutputTarget, RenderedDocument};
pub use profile::{resolve_profile, resolve_profile_name, Profile, ProfileStore};
pub use render::{render_pipeline, render_pipeline_template};
