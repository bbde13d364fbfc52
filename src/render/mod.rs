//! Terraform HCL rendering for GoCD configuration
//!
//! Renderers are pure: they borrow the fetched config, never mutate it, and
//! return either a complete document or an error.

pub mod escape;
pub mod hcl;
mod pipeline;
mod stages;
mod template;

pub use pipeline::render_pipeline;
pub use stages::{task_identifier, write_stages, ContainerKind};
pub use template::render_pipeline_template;
