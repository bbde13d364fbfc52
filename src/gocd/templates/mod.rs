//! Pipeline template module

mod api;
mod models;

pub use models::{PipelineTemplate, PipelineTemplateSummary};
