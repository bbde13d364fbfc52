//! Value enums for CLI arguments

use clap::ValueEnum;

/// GoCD entity kinds that can be generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResourceKind {
    /// Pipelines, with their materials and stages
    Pipeline,
    /// Pipeline templates, with their stages
    #[value(name = "pipeline_template", alias = "template")]
    PipelineTemplate,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Pipeline => write!(f, "pipeline"),
            ResourceKind::PipelineTemplate => write!(f, "pipeline_template"),
        }
    }
}
