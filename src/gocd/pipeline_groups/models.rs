//! Pipeline group data models

use serde::Deserialize;

use crate::gocd::models::nullable;
use crate::gocd::traits::GocdResource;

/// Pipeline group from `GET /api/config/pipeline_groups`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PipelineGroup {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub pipelines: Vec<PipelineSummary>,
}

/// Pipeline entry in a group listing
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PipelineSummary {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

impl GocdResource for PipelineSummary {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PipelineGroup {
    /// Pipelines in this group matching the requested id
    pub fn matching<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a PipelineSummary> + 'a {
        self.pipelines.iter().filter(move |p| p.matches(id))
    }
}
