//! Service-list file loader.
//!
//! This module reads a `config.yaml`-style file and deserializes it into an
//! [`AgentConfig`]. No defaults are applied here; see
//! [`validate_config`](crate::config::validate::validate_config).

use crate::error::GenerateError;
use crate::error::GenerateResult;
use ag_protocol::config_models::AgentConfig;
use std::path::Path;
use tracing::debug;

/// Loads the service-list configuration from `path`.
///
/// Unknown keys are ignored and missing keys are left empty. An empty file
/// yields an all-empty configuration, which validation then rejects.
///
/// # Errors
///
/// Returns `GenerateError` if:
/// - The file cannot be read (`Read`)
/// - The content is not YAML matching the schema (`Parse`)
///
/// # Example
///
/// ```rust,no_run
/// use ag_core::config::loader::load_config;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.yaml"))?;
/// println!("Loaded {} services", config.services.len());
/// # Ok(())
/// # }
/// ```
pub fn load_config(path: &Path) -> GenerateResult<AgentConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    // An empty document (or a bare `~`) is null; treat it as "all keys missing"
    let config: Option<AgentConfig> =
        serde_yaml::from_str(&content).map_err(|source| GenerateError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let config = config.unwrap_or_default();

    debug!(
        path = %path.display(),
        services = config.services.len(),
        "loaded service list"
    );

    Ok(config)
}
