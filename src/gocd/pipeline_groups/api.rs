//! Pipeline group API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::gocd::GocdClient;

use super::models::PipelineGroup;

impl GocdClient {
    /// List all pipeline groups with their pipelines, in server order
    pub async fn list_pipeline_groups(&self) -> Result<Vec<PipelineGroup>> {
        let groups: Vec<PipelineGroup> = self
            .fetch_json(api::PIPELINE_GROUPS, api::ACCEPT_JSON, "pipeline groups")
            .await?;
        debug!("Found {} pipeline groups", groups.len());
        Ok(groups)
    }
}
