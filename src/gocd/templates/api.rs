//! Pipeline template API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::gocd::GocdClient;

use super::models::{PipelineTemplate, PipelineTemplateSummary, PipelineTemplatesResponse};

impl GocdClient {
    /// List all pipeline templates (names and the pipelines using them)
    pub async fn list_pipeline_templates(&self) -> Result<Vec<PipelineTemplateSummary>> {
        let response: PipelineTemplatesResponse = self
            .fetch_json(api::TEMPLATES, api::ACCEPT_V3, "pipeline templates")
            .await?;
        let templates = response.into_templates();
        debug!("Found {} pipeline templates", templates.len());
        Ok(templates)
    }

    /// Get the full config of a pipeline template
    pub async fn get_pipeline_template(&self, name: &str) -> Result<PipelineTemplate> {
        let path = format!("{}/{}", api::TEMPLATES, urlencoding::encode(name));
        self.fetch_json(
            &path,
            api::ACCEPT_V3,
            &format!("pipeline template '{}'", name),
        )
        .await
    }
}
