//! Pipeline config data models

use serde::{Deserialize, Serialize};

use crate::gocd::models::{nullable, EnvironmentVariable, Stage};

/// Pipeline config as returned by `GET /api/admin/pipelines/:name`
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    /// Not part of the config response; filled in from the group listing
    #[serde(default, deserialize_with = "nullable")]
    pub group: String,
    #[serde(default, deserialize_with = "nullable")]
    pub template: String,
    #[serde(default, deserialize_with = "nullable")]
    pub label_template: String,
    #[serde(default, deserialize_with = "nullable")]
    pub enable_pipeline_locking: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub label: String,
    #[serde(default, deserialize_with = "nullable")]
    pub parameters: Vec<Parameter>,
    #[serde(default, deserialize_with = "nullable")]
    pub environment_variables: Vec<EnvironmentVariable>,
    #[serde(default, deserialize_with = "nullable")]
    pub materials: Vec<Material>,
    #[serde(default, deserialize_with = "nullable")]
    pub stages: Vec<Stage>,
}

/// Pipeline parameter
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Parameter {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub value: String,
}

/// Material feeding a pipeline
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Material {
    /// `git`, `svn`, `hg`, `p4`, `tfs`, `dependency`, `package` or `plugin`
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub material_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub attributes: MaterialAttributes,
}

impl Material {
    /// Check if this material is an upstream pipeline dependency
    pub fn is_dependency(&self) -> bool {
        self.material_type == "dependency"
    }

    /// Copy of this material prepared for rendering.
    ///
    /// GoCD names dependency materials after their upstream pipeline, so an
    /// explicit name equal to the pipeline is dropped.
    pub fn render_ready(&self) -> Material {
        let mut material = self.clone();
        if material.is_dependency() && material.attributes.name == material.attributes.pipeline {
            material.attributes.name.clear();
        }
        material
    }
}

/// Material attributes across all material types
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct MaterialAttributes {
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub destination: String,
    #[serde(default, deserialize_with = "nullable")]
    pub filter: Option<MaterialFilter>,
    #[serde(default, deserialize_with = "nullable")]
    pub invert_filter: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub branch: String,
    #[serde(default, deserialize_with = "nullable")]
    pub submodule_folder: String,
    #[serde(default, deserialize_with = "nullable")]
    pub shallow_clone: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub pipeline: String,
    #[serde(default, deserialize_with = "nullable")]
    pub stage: String,
    #[serde(default, deserialize_with = "nullable")]
    pub auto_update: bool,
    /// Package or SCM plugin reference
    #[serde(rename = "ref", default, deserialize_with = "nullable")]
    pub reference: String,
    #[serde(default, deserialize_with = "nullable")]
    pub username: String,
    #[serde(default, deserialize_with = "nullable")]
    pub encrypted_password: String,
    #[serde(default, deserialize_with = "nullable")]
    pub check_externals: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub port: String,
    #[serde(default, deserialize_with = "nullable")]
    pub use_tickets: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub view: String,
    #[serde(default, deserialize_with = "nullable")]
    pub project_path: String,
    #[serde(default, deserialize_with = "nullable")]
    pub domain: String,
}

impl MaterialAttributes {
    /// Ignore globs, empty when no filter is configured
    pub fn ignore_patterns(&self) -> &[String] {
        self.filter
            .as_ref()
            .map(|f| f.ignore.as_slice())
            .unwrap_or(&[])
    }
}

/// Material change filter
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct MaterialFilter {
    #[serde(default, deserialize_with = "nullable")]
    pub ignore: Vec<String>,
}
