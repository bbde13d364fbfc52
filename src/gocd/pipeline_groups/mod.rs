//! Pipeline group module

mod api;
mod models;

pub use models::{PipelineGroup, PipelineSummary};
