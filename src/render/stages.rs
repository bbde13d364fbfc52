//! Stage, job and task blocks shared by pipelines and templates
//!
//! Each stage becomes a `gocd_pipeline_stage` resource whose `jobs` list
//! references one `gocd_job_definition` data source per job. Each job in turn
//! references one `gocd_task_definition` data source per task, labelled
//! `{container}_{stage}_{job}_{index}`. Blocks follow input order, so the
//! task index (and with it the Terraform address) only changes when the
//! task list is reordered.

use log::{debug, warn};
use std::fmt::Write;

use crate::error::{GocdError, Result};
use crate::gocd::{EnvironmentVariable, Job, Stage, Task};

use super::escape::is_identifier_safe;
use super::hcl::{write_block, Attributes};

/// Kind of config entity that owns a list of stages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Pipeline,
    PipelineTemplate,
}

impl ContainerKind {
    /// Resource type suffix (`gocd_<name>`), also the stage back-reference field
    pub fn name(&self) -> &'static str {
        match self {
            ContainerKind::Pipeline => "pipeline",
            ContainerKind::PipelineTemplate => "pipeline_template",
        }
    }

    /// Prefix of the stage import id (`<prefix>/<container>/<stage>`)
    pub fn import_prefix(&self) -> &'static str {
        match self {
            ContainerKind::Pipeline => "pipeline",
            ContainerKind::PipelineTemplate => "template",
        }
    }
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Label of the task data source at `index` within a job
pub fn task_identifier(container: &str, stage: &str, job: &str, index: usize) -> String {
    format!("{}_{}_{}_{}", container, stage, job, index)
}

fn job_reference(job: &str) -> String {
    format!("${{data.gocd_job_definition.{}.json}}", job)
}

fn task_reference(identifier: &str) -> String {
    format!("${{data.gocd_task_definition.{}.json}}", identifier)
}

/// Reject empty names and warn about names Terraform cannot address
pub(crate) fn check_label(entity: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(GocdError::Render(format!("{} name must not be empty", entity)));
    }
    if !is_identifier_safe(name) {
        warn!(
            "{} name '{}' is not a valid Terraform identifier; generated addresses may not parse",
            entity, name
        );
    }
    Ok(())
}

/// Object literals for a list of environment variables
pub(crate) fn environment_variables(vars: &[EnvironmentVariable]) -> Vec<Attributes> {
    vars.iter()
        .map(|var| {
            Attributes::new()
                .required("name", &var.name)
                .string("value", &var.value)
                .string("encrypted_value", &var.encrypted_value)
                .flag("secure", var.secure)
        })
        .collect()
}

/// Write stage, job and task blocks for every stage of a container
pub fn write_stages(
    out: &mut String,
    kind: ContainerKind,
    container: &str,
    stages: &[Stage],
) -> Result<()> {
    check_label(kind.name(), container)?;

    for stage in stages {
        check_label("stage", &stage.name)?;
        debug!(
            "Rendering stage '{}' of {} '{}' ({} jobs)",
            stage.name,
            kind,
            container,
            stage.jobs.len()
        );

        writeln!(
            out,
            "# CMD terraform import gocd_pipeline_stage.{} \"{}/{}/{}\"",
            stage.name,
            kind.import_prefix(),
            container,
            stage.name
        )?;
        write_block(
            out,
            &format!("resource \"gocd_pipeline_stage\" \"{}\"", stage.name),
            &stage_attributes(kind, container, stage),
        )?;
        writeln!(out)?;

        for job in &stage.jobs {
            check_label("job", &job.name)?;
            write_job(out, container, &stage.name, job)?;
        }
    }
    Ok(())
}

fn stage_attributes(kind: ContainerKind, container: &str, stage: &Stage) -> Attributes {
    let mut attrs = Attributes::new().required("name", &stage.name);

    if stage.fetch_materials {
        attrs = attrs
            .required(kind.name(), container)
            .flag("fetch_materials", true);
    }

    attrs = attrs
        .flag("clean_working_directory", stage.clean_working_directory)
        .flag("never_cleanup_artifacts", stage.never_cleanup_artifacts);

    if let Some(approval) = &stage.approval {
        attrs = attrs
            .flag("manual_approval", approval.is_manual())
            .strings("authorization_users", &approval.authorization.users)
            .strings("authorization_roles", &approval.authorization.roles);
    }

    let jobs: Vec<String> = stage.jobs.iter().map(|j| job_reference(&j.name)).collect();

    attrs
        .references("jobs", &jobs)
        .objects(
            "environment_variables",
            environment_variables(&stage.environment_variables),
        )
}

fn write_job(out: &mut String, container: &str, stage: &str, job: &Job) -> Result<()> {
    let identifiers: Vec<String> = (0..job.tasks.len())
        .map(|i| task_identifier(container, stage, &job.name, i))
        .collect();

    write_block(
        out,
        &format!("data \"gocd_job_definition\" \"{}\"", job.name),
        &job_attributes(job, &identifiers),
    )?;
    writeln!(out)?;

    for (identifier, task) in identifiers.iter().zip(&job.tasks) {
        write_block(
            out,
            &format!("data \"gocd_task_definition\" \"{}\"", identifier),
            &task_attributes(task),
        )?;
        writeln!(out)?;
    }
    Ok(())
}

fn job_attributes(job: &Job, task_identifiers: &[String]) -> Attributes {
    let tasks: Vec<String> = task_identifiers.iter().map(|id| task_reference(id)).collect();

    let tabs = job
        .tabs
        .iter()
        .map(|tab| {
            Attributes::new()
                .required("name", &tab.name)
                .required("path", &tab.path)
        })
        .collect();

    let artifacts = job
        .artifacts
        .iter()
        .map(|artifact| {
            Attributes::new()
                .required("type", &artifact.artifact_type)
                .required("source", &artifact.source)
                .string("destination", &artifact.destination)
        })
        .collect();

    let properties = job
        .properties
        .iter()
        .map(|property| {
            Attributes::new()
                .required("name", &property.name)
                .required("source", &property.source)
                .required("xpath", &property.xpath)
        })
        .collect();

    Attributes::new()
        .required("name", &job.name)
        .references("tasks", &tasks)
        .number("timeout", job.explicit_timeout())
        .objects(
            "environment_variables",
            environment_variables(&job.environment_variables),
        )
        .strings("resources", &job.resources)
        .string("elastic_profile_id", &job.elastic_profile_id)
        .objects("tabs", tabs)
        .objects("artifacts", artifacts)
        .objects("properties", properties)
}

fn task_attributes(task: &Task) -> Attributes {
    let a = &task.attributes;

    let mut attrs = Attributes::new()
        .required("type", &task.task_type)
        .strings("run_if", &a.run_if)
        .string("command", &a.command)
        .string_lines("arguments", &a.arguments)
        .string("build_file", &a.build_file)
        .string("working_directory", &a.working_directory)
        .string("target", &a.target)
        .string("nant_path", &a.nant_path)
        .string("pipeline", &a.pipeline)
        .string("stage", &a.stage)
        .string("job", &a.job)
        .flag("is_source_a_file", a.is_source_a_file)
        .string("destination", &a.destination)
        .string("source", &a.source);

    if let Some(plugin) = &a.plugin_configuration {
        attrs = attrs
            .string("plugin_id", &plugin.id)
            .string("plugin_version", &plugin.version);
    }

    let configuration = a
        .configuration
        .iter()
        .map(|kv| {
            Attributes::new()
                .required("key", &kv.key)
                .string("value", &kv.value)
        })
        .collect();

    attrs.objects("configuration", configuration)
}
