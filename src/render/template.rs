//! `gocd_pipeline_template` resource rendering

use log::debug;
use std::fmt::Write;

use crate::error::Result;
use crate::gocd::PipelineTemplate;

use super::hcl::{validate, write_block, Attributes};
use super::stages::{check_label, write_stages, ContainerKind};

/// Render a pipeline template and all of its stages as one HCL document
pub fn render_pipeline_template(template: &PipelineTemplate) -> Result<String> {
    let kind = ContainerKind::PipelineTemplate;
    check_label(kind.name(), &template.name)?;
    debug!(
        "Rendering pipeline template '{}' ({} stages)",
        template.name,
        template.stages.len()
    );

    let mut out = String::new();
    writeln!(out, "## START {}.{}", kind.name(), template.name)?;
    writeln!(
        out,
        "# CMD terraform import gocd_pipeline_template.{} \"{}\"",
        template.name, template.name
    )?;
    write_block(
        &mut out,
        &format!("resource \"gocd_pipeline_template\" \"{}\"", template.name),
        &Attributes::new().required("name", &template.name),
    )?;
    writeln!(out)?;
    write_stages(&mut out, kind, &template.name, &template.stages)?;
    writeln!(out, "## END")?;
    validate(&template.name, &out)?;
    Ok(out)
}
