//! `gocd_pipeline` resource rendering

use log::debug;
use std::fmt::Write;

use crate::error::Result;
use crate::gocd::{Material, Pipeline};

use super::escape::effective_label_template;
use super::hcl::{validate, write_block, Attributes};
use super::stages::{check_label, environment_variables, write_stages, ContainerKind};

/// Render a pipeline and all of its stages as one HCL document
pub fn render_pipeline(pipeline: &Pipeline) -> Result<String> {
    let kind = ContainerKind::Pipeline;
    check_label(kind.name(), &pipeline.name)?;
    debug!(
        "Rendering pipeline '{}' ({} materials, {} stages)",
        pipeline.name,
        pipeline.materials.len(),
        pipeline.stages.len()
    );

    let mut out = String::new();
    writeln!(out, "## START {}.{}", kind.name(), pipeline.name)?;
    writeln!(
        out,
        "# CMD terraform import gocd_pipeline.{} \"{}\"",
        pipeline.name, pipeline.name
    )?;
    write_block(
        &mut out,
        &format!("resource \"gocd_pipeline\" \"{}\"", pipeline.name),
        &pipeline_attributes(pipeline),
    )?;
    writeln!(out)?;
    write_stages(&mut out, kind, &pipeline.name, &pipeline.stages)?;
    writeln!(out, "## END")?;
    validate(&pipeline.name, &out)?;
    Ok(out)
}

fn pipeline_attributes(pipeline: &Pipeline) -> Attributes {
    let parameters = pipeline
        .parameters
        .iter()
        .map(|p| {
            Attributes::new()
                .required("name", &p.name)
                .string("value", &p.value)
        })
        .collect();

    let materials = pipeline
        .materials
        .iter()
        .map(|m| material_attributes(&m.render_ready()))
        .collect();

    Attributes::new()
        .required("name", &pipeline.name)
        .required("group", &pipeline.group)
        .string("template", &pipeline.template)
        .string(
            "label_template",
            effective_label_template(&pipeline.label_template).unwrap_or_default(),
        )
        .flag("enable_pipeline_locking", pipeline.enable_pipeline_locking)
        .string("label", &pipeline.label)
        .objects("parameters", parameters)
        .objects(
            "environment_variables",
            environment_variables(&pipeline.environment_variables),
        )
        .objects("materials", materials)
}

fn material_attributes(material: &Material) -> Attributes {
    let a = &material.attributes;
    let body = Attributes::new()
        .string("url", &a.url)
        .string("destination", &a.destination)
        .strings("filter", a.ignore_patterns())
        .flag("invert_filter", a.invert_filter)
        .string("name", &a.name)
        .string("branch", &a.branch)
        .string("submodule_folder", &a.submodule_folder)
        .flag("shallow_clone", a.shallow_clone)
        .string("pipeline", &a.pipeline)
        .string("stage", &a.stage)
        .flag("auto_update", a.auto_update)
        .string("ref", &a.reference)
        .string("username", &a.username)
        .string("encrypted_password", &a.encrypted_password)
        .flag("check_externals", a.check_externals)
        .string("port", &a.port)
        .flag("use_tickets", a.use_tickets)
        .string("view", &a.view)
        .string("project_path", &a.project_path)
        .string("domain", &a.domain);

    Attributes::new()
        .required("type", &material.material_type)
        .string("description", &material.description)
        .object("attributes", body)
}
