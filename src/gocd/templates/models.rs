//! Pipeline template data models

use serde::{Deserialize, Serialize};

use crate::gocd::models::{nullable, Stage};
use crate::gocd::traits::GocdResource;

/// Response wrapper for the template list (HAL `_embedded`)
#[derive(Deserialize, Debug, Default)]
pub struct PipelineTemplatesResponse {
    #[serde(rename = "_embedded", default, deserialize_with = "nullable")]
    pub embedded: Option<EmbeddedTemplates>,
}

#[derive(Deserialize, Debug, Default)]
pub struct EmbeddedTemplates {
    #[serde(default, deserialize_with = "nullable")]
    pub templates: Vec<PipelineTemplateSummary>,
}

impl PipelineTemplatesResponse {
    /// Consume self and return the listed templates
    pub fn into_templates(self) -> Vec<PipelineTemplateSummary> {
        self.embedded.map(|e| e.templates).unwrap_or_default()
    }
}

/// Template entry in the list response
#[derive(Deserialize, Debug, Clone, Default)]
pub struct PipelineTemplateSummary {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "_embedded", default, deserialize_with = "nullable")]
    pub embedded: Option<EmbeddedPipelines>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EmbeddedPipelines {
    #[serde(default, deserialize_with = "nullable")]
    pub pipelines: Vec<PipelineReference>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PipelineReference {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

impl PipelineTemplateSummary {
    /// Names of the pipelines built from this template
    pub fn pipeline_names(&self) -> Vec<&str> {
        self.embedded
            .as_ref()
            .map(|e| e.pipelines.iter().map(|p| p.name.as_str()).collect())
            .unwrap_or_default()
    }
}

impl GocdResource for PipelineTemplateSummary {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Full pipeline template config
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct PipelineTemplate {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub stages: Vec<Stage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_response_deserialize() {
        let response: PipelineTemplatesResponse = serde_json::from_value(serde_json::json!({
            "_links": {"self": {"href": "https://ci.example.com/go/api/admin/templates"}},
            "_embedded": {
                "templates": [
                    {
                        "name": "build-template",
                        "_embedded": {"pipelines": [{"name": "up42"}, {"name": "up43"}]}
                    },
                    {"name": "deploy-template"}
                ]
            }
        }))
        .unwrap();

        let templates = response.into_templates();
        assert_eq!(templates.len(), 2);
        assert_eq!(templates[0].name, "build-template");
        assert_eq!(templates[0].pipeline_names(), vec!["up42", "up43"]);
        assert!(templates[1].pipeline_names().is_empty());
    }

    #[test]
    fn test_templates_response_without_embedded() {
        let response: PipelineTemplatesResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(response.into_templates().is_empty());
    }

    #[test]
    fn test_template_deserialize() {
        let template: PipelineTemplate = serde_json::from_value(serde_json::json!({
            "name": "build-template",
            "stages": [
                {"name": "compile", "fetch_materials": true, "jobs": [{"name": "make"}]}
            ]
        }))
        .unwrap();

        assert_eq!(template.name, "build-template");
        assert_eq!(template.stages[0].jobs[0].name, "make");
    }
}
