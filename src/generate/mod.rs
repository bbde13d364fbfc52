//! Fetch, render and write GoCD configuration as Terraform

mod commands;

pub use commands::{generate_pipelines, generate_templates, run_generate_command};
