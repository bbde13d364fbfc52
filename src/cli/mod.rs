//! CLI argument parsing

mod enums;

use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults;
use crate::profile::ProfileOverrides;

pub use enums::ResourceKind;

/// gocd-tf-generate CLI
#[derive(Parser, Debug)]
#[command(name = "gocd-tf-generate")]
#[command(version)]
#[command(
    about = "Generate Terraform configuration for GoCD pipelines and pipeline templates",
    long_about = None
)]
pub struct Cli {
    /// GoCD resource type to generate
    #[arg(short, long, value_enum)]
    pub resource: ResourceKind,

    /// Name of the pipeline or template to generate ("*" for all)
    #[arg(short, long, default_value = defaults::ID)]
    pub id: String,

    /// Profile from ~/.gocd.conf (default: $GOCD_DEFAULT_PROFILE, then "default")
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Write each resource to <output-dir>/<name>.tf instead of stdout
    #[arg(long, default_value_t = false)]
    pub to_file: bool,

    /// Directory for --to-file output
    #[arg(short, long, default_value = defaults::OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// GoCD server URL (overrides $GOCD_SERVER and the profile)
    #[arg(long)]
    pub server: Option<String>,

    /// Username (overrides $GOCD_USERNAME and the profile)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password (overrides $GOCD_PASSWORD and the profile)
    #[arg(long)]
    pub password: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, default_value_t = false)]
    pub skip_ssl_check: bool,

    /// Shorthand for --log-level debug
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no progress spinner
    #[arg(short, long, default_value_t = false)]
    pub batch: bool,
}

impl Cli {
    /// Log level after applying --debug
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_level
        }
    }

    /// Connection settings given on the command line
    pub fn profile_overrides(&self) -> ProfileOverrides {
        ProfileOverrides {
            server: self.server.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            skip_ssl_check: self.skip_ssl_check,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["gocd-tf-generate", "--resource", "pipeline"]);
        assert_eq!(cli.resource, ResourceKind::Pipeline);
        assert_eq!(cli.id, defaults::ID);
        assert_eq!(cli.output_dir, PathBuf::from(defaults::OUTPUT_DIR));
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(cli.profile.is_none());
        assert!(!cli.to_file);
        assert!(!cli.debug);
        assert!(!cli.batch);
        assert!(!cli.skip_ssl_check);
    }

    #[test]
    fn test_cli_requires_resource() {
        assert!(Cli::try_parse_from(["gocd-tf-generate"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_resource() {
        assert!(Cli::try_parse_from(["gocd-tf-generate", "--resource", "stage"]).is_err());
    }

    #[test]
    fn test_cli_pipeline_template() {
        let cli = Cli::parse_from([
            "gocd-tf-generate",
            "--resource",
            "pipeline_template",
            "--id",
            "build-template",
        ]);
        assert_eq!(cli.resource, ResourceKind::PipelineTemplate);
        assert_eq!(cli.id, "build-template");
    }

    #[test]
    fn test_cli_all_options() {
        let cli = Cli::parse_from([
            "gocd-tf-generate",
            "-r",
            "pipeline",
            "-i",
            "up42",
            "-p",
            "staging",
            "--to-file",
            "-o",
            "generated",
            "--server",
            "https://ci.example.com/go",
            "-u",
            "admin",
            "--password",
            "badger",
            "--skip-ssl-check",
            "-l",
            "info",
            "-b",
        ]);

        assert_eq!(cli.id, "up42");
        assert_eq!(cli.profile, Some("staging".to_string()));
        assert!(cli.to_file);
        assert_eq!(cli.output_dir, PathBuf::from("generated"));
        assert_eq!(cli.log_level, "info");
        assert!(cli.batch);

        let overrides = cli.profile_overrides();
        assert_eq!(overrides.server, Some("https://ci.example.com/go".to_string()));
        assert_eq!(overrides.username, Some("admin".to_string()));
        assert_eq!(overrides.password, Some("badger".to_string()));
        assert!(overrides.skip_ssl_check);
    }

    #[test]
    fn test_effective_log_level() {
        let cli = Cli::parse_from(["gocd-tf-generate", "-r", "pipeline", "-l", "error"]);
        assert_eq!(cli.effective_log_level(), "error");

        let cli = Cli::parse_from(["gocd-tf-generate", "-r", "pipeline", "-l", "error", "--debug"]);
        assert_eq!(cli.effective_log_level(), "debug");
    }
}
