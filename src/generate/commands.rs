//! Generate command handlers

use futures::stream::{self, StreamExt, TryStreamExt};
use log::{debug, info};

use crate::cli::{Cli, ResourceKind};
use crate::config::{api, defaults};
use crate::error::{GocdError, Result};
use crate::gocd::{GocdClient, GocdResource, Pipeline, PipelineTemplate};
use crate::output::{OutputTarget, RenderedDocument};
use crate::render::{render_pipeline, render_pipeline_template};
use crate::ui::{create_spinner, finish_spinner, finish_spinner_with_status, update_spinner};

/// Run the generate command for the resource kind selected on the CLI
///
/// Returns the number of documents written.
pub async fn run_generate_command(client: &GocdClient, cli: &Cli) -> Result<usize> {
    let target = OutputTarget::new(cli.to_file, &cli.output_dir);
    debug!("Generating {} '{}' into {:?}", cli.resource, cli.id, target);

    let documents = match cli.resource {
        ResourceKind::Pipeline => generate_pipelines(client, &cli.id, cli.batch).await?,
        ResourceKind::PipelineTemplate => generate_templates(client, &cli.id, cli.batch).await?,
    };

    write_documents(&documents, &target, cli.batch).await?;
    info!("Generated {} {} document(s)", documents.len(), cli.resource);
    Ok(documents.len())
}

/// Fetch and render every pipeline matching `id`
pub async fn generate_pipelines(
    client: &GocdClient,
    id: &str,
    batch: bool,
) -> Result<Vec<RenderedDocument>> {
    let spinner = create_spinner("Fetching pipeline groups...", batch);
    let result = fetch_pipelines(client, id, &spinner).await;
    finish_spinner_with_status(spinner, &result, "Pipelines fetched");

    result?
        .iter()
        .map(|p| Ok(RenderedDocument::new(&p.name, render_pipeline(p)?)))
        .collect()
}

/// Fetch and render every pipeline template matching `id`
pub async fn generate_templates(
    client: &GocdClient,
    id: &str,
    batch: bool,
) -> Result<Vec<RenderedDocument>> {
    let spinner = create_spinner("Fetching pipeline templates...", batch);
    let result = fetch_templates(client, id, &spinner).await;
    finish_spinner_with_status(spinner, &result, "Pipeline templates fetched");

    result?
        .iter()
        .map(|t| Ok(RenderedDocument::new(&t.name, render_pipeline_template(t)?)))
        .collect()
}

async fn fetch_pipelines(
    client: &GocdClient,
    id: &str,
    spinner: &Option<indicatif::ProgressBar>,
) -> Result<Vec<Pipeline>> {
    let groups = client.list_pipeline_groups().await?;

    let selected: Vec<(&str, &str)> = groups
        .iter()
        .flat_map(|g| g.matching(id).map(move |p| (g.name.as_str(), p.name())))
        .collect();
    ensure_found(selected.len(), id, "Pipeline")?;
    debug!("Selected {} pipeline(s) for '{}'", selected.len(), id);

    update_spinner(
        spinner,
        &format!("Fetching {} pipeline config(s)...", selected.len()),
    );

    stream::iter(selected)
        .map(|(group, name)| async move {
            let mut pipeline = client.get_pipeline_config(name).await?;
            if pipeline.group.is_empty() {
                pipeline.group = group.to_string();
            }
            Ok::<_, GocdError>(pipeline)
        })
        .buffered(api::MAX_CONCURRENT_REQUESTS)
        .try_collect()
        .await
}

async fn fetch_templates(
    client: &GocdClient,
    id: &str,
    spinner: &Option<indicatif::ProgressBar>,
) -> Result<Vec<PipelineTemplate>> {
    let summaries = client.list_pipeline_templates().await?;

    let selected: Vec<&str> = summaries
        .iter()
        .filter(|t| t.matches(id))
        .inspect(|t| debug!("Template '{}' used by {:?}", t.name(), t.pipeline_names()))
        .map(|t| t.name())
        .collect();
    ensure_found(selected.len(), id, "Pipeline template")?;
    debug!("Selected {} template(s) for '{}'", selected.len(), id);

    update_spinner(
        spinner,
        &format!("Fetching {} pipeline template(s)...", selected.len()),
    );

    stream::iter(selected)
        .map(|name| client.get_pipeline_template(name))
        .buffered(api::MAX_CONCURRENT_REQUESTS)
        .try_collect()
        .await
}

/// A specific id that selects nothing is an error; the wildcard may select nothing
fn ensure_found(count: usize, id: &str, label: &str) -> Result<()> {
    if count == 0 && id != defaults::ID {
        return Err(GocdError::NotFound(format!("{} '{}' not found", label, id)));
    }
    Ok(())
}

async fn write_documents(
    documents: &[RenderedDocument],
    target: &OutputTarget,
    batch: bool,
) -> Result<()> {
    let spinner = match target {
        OutputTarget::Directory(dir) => create_spinner(
            &format!("Writing {} file(s) to {}...", documents.len(), dir.display()),
            batch,
        ),
        OutputTarget::Stdout => None,
    };

    for document in documents {
        if let Some(path) = target.write(document).await? {
            debug!("Wrote {} to {}", document.name, path.display());
        }
    }

    finish_spinner(spinner, "Done");
    Ok(())
}
