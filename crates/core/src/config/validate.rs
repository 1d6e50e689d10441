//! Required-field checks, defaults and normalization.

use crate::error::ValidationError;
use crate::settings::{DEFAULT_HOST, DEFAULT_POLLING_INTERVAL, PROJECT_ID_PLACEHOLDER};
use ag_protocol::config_models::AgentConfig;
use tracing::debug;

/// Validates `config` and fills in defaults in place.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. `project_id` is set and is not the placeholder
/// 2. `environment` is set
/// 3. `services` has at least one entry
///
/// On success `polling_interval` and `host` are guaranteed non-empty and
/// `root_folder` is normalized with [`normalize_root_folder`].
pub fn validate_config(config: &mut AgentConfig) -> Result<(), ValidationError> {
    if config.project_id.is_empty() || config.project_id == PROJECT_ID_PLACEHOLDER {
        return Err(ValidationError::MissingProjectId);
    }
    if config.environment.is_empty() {
        return Err(ValidationError::MissingEnvironment);
    }
    if config.services.is_empty() {
        return Err(ValidationError::NoServices);
    }

    if config.polling_interval.is_empty() {
        debug!(default = DEFAULT_POLLING_INTERVAL, "polling_interval not set");
        config.polling_interval = DEFAULT_POLLING_INTERVAL.to_string();
    }
    if config.host.is_empty() {
        debug!(default = DEFAULT_HOST, "host not set");
        config.host = DEFAULT_HOST.to_string();
    }
    config.root_folder = normalize_root_folder(&config.root_folder);

    Ok(())
}

/// Normalizes a root folder to `""` or `/a[/b...]`.
///
/// Surrounding whitespace and any leading or trailing slashes are removed,
/// then a single leading slash is added back if anything is left.
pub fn normalize_root_folder(root: &str) -> String {
    let trimmed = root.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
