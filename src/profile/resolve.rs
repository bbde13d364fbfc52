//! Profile resolution from multiple sources

use log::debug;

use crate::config::profile as profile_config;
use crate::error::{GocdError, Result};

use super::models::{Profile, ProfileOverrides};
use super::store::ProfileStore;

/// Resolve the profile name:
/// 1. --profile CLI flag
/// 2. GOCD_DEFAULT_PROFILE env var
/// 3. `default`
pub fn resolve_profile_name(cli_profile: Option<&str>) -> String {
    resolve_profile_name_with(cli_profile, |key| std::env::var(key).ok())
}

fn resolve_profile_name_with<F>(cli_profile: Option<&str>, env: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(name) = cli_profile {
        debug!("Using profile from CLI flag: {}", name);
        return name.to_string();
    }

    if let Some(name) = env(profile_config::ENV_DEFAULT_PROFILE).filter(|n| !n.is_empty()) {
        debug!(
            "Using profile from {} env var: {}",
            profile_config::ENV_DEFAULT_PROFILE,
            name
        );
        return name;
    }

    profile_config::DEFAULT_PROFILE.to_string()
}

/// Merge CLI overrides, environment and the named profile entry.
///
/// Each field resolves independently: CLI flag, then env var, then file.
pub fn resolve_profile(
    name: &str,
    store: &ProfileStore,
    overrides: &ProfileOverrides,
) -> Result<Profile> {
    resolve_profile_with(name, store, overrides, |key| std::env::var(key).ok())
}

fn resolve_profile_with<F>(
    name: &str,
    store: &ProfileStore,
    overrides: &ProfileOverrides,
    env: F,
) -> Result<Profile>
where
    F: Fn(&str) -> Option<String>,
{
    let config = store.load()?;
    let entry = config.get(name).cloned();

    let server = overrides
        .server
        .clone()
        .or_else(|| env(profile_config::ENV_SERVER))
        .filter(|s| !s.is_empty());

    let entry = match (entry, &server) {
        (Some(entry), _) => {
            debug!("Loaded profile '{}' from {}", name, store.path().display());
            entry
        }
        (None, Some(_)) => {
            debug!("Profile '{}' not in file, using server override", name);
            Default::default()
        }
        (None, None) => {
            return Err(GocdError::Config(format!(
                "Could not find configuration profile '{}' in {}",
                name,
                store.path().display()
            )));
        }
    };

    let server = match server.or_else(|| Some(entry.server.clone()).filter(|s| !s.is_empty())) {
        Some(server) => server,
        None => {
            return Err(GocdError::Config(format!(
                "No server configured for profile '{}'",
                name
            )));
        }
    };

    let username = overrides
        .username
        .clone()
        .or_else(|| env(profile_config::ENV_USERNAME))
        .or(entry.username);
    let password = overrides
        .password
        .clone()
        .or_else(|| env(profile_config::ENV_PASSWORD))
        .or(entry.password);
    let skip_ssl_check = overrides.skip_ssl_check
        || env(profile_config::ENV_SKIP_SSL_CHECK).is_some_and(|v| is_truthy(&v))
        || entry.skip_ssl_check;

    debug!("Resolved profile '{}': server={}", name, server);

    Ok(Profile {
        server,
        username,
        password,
        skip_ssl_check,
    })
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
