//! Pipeline config API operations

use crate::config::api;
use crate::error::Result;
use crate::gocd::GocdClient;

use super::models::Pipeline;

impl GocdClient {
    /// Get the full config of a pipeline
    ///
    /// The config endpoint does not report the owning group; callers that
    /// know it from the group listing fill `Pipeline::group` in.
    pub async fn get_pipeline_config(&self, name: &str) -> Result<Pipeline> {
        let path = format!("{}/{}", api::PIPELINES, urlencoding::encode(name));
        self.fetch_json(&path, api::ACCEPT_V4, &format!("pipeline '{}'", name))
            .await
    }
}
