//! gocd-tf-generate - Main entry point

use clap::Parser;
use log::{debug, error, info};

use gocd_tf_generate::{
    resolve_profile, resolve_profile_name, run_generate_command, Cli, GocdClient, ProfileStore,
    Result,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.effective_log_level()),
    )
    .init();

    info!("Starting gocd-tf-generate v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: resource={}, id={}, profile={:?}, to_file={}, output_dir={}",
        cli.resource,
        cli.id,
        cli.profile,
        cli.to_file,
        cli.output_dir.display()
    );

    if let Err(e) = run(&cli).await {
        error!("{:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let profile_name = resolve_profile_name(cli.profile.as_deref());
    let store = ProfileStore::new();
    let profile = resolve_profile(&profile_name, &store, &cli.profile_overrides())?;

    let client = GocdClient::new(&profile);
    run_generate_command(&client, cli).await?;
    Ok(())
}
