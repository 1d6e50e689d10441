//! Service-list configuration model for `config.yaml`.
//!
//! This module defines the structure of the input file that lists which
//! services the secrets agent should watch. The same structure is exposed to
//! output templates, so the serialized key names double as template variables.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Represents the service-list configuration read from `config.yaml`.
///
/// Every key is optional at parse time; missing keys and explicit nulls
/// (`~`, `null`) leave the field empty and unknown keys are ignored.
/// Required fields and defaults are enforced afterwards by the validator in
/// `ag-core`.
///
/// # Example
///
/// ```yaml
/// # config.yaml
/// host: https://app.infisical.com
/// project_id: 4f1c0a2e-example
/// environment: prod
/// polling_interval: 300s
/// root_folder: /apps
/// services:
///   - gateway
///   - billing
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentConfig {
    /// Base URL of the secrets service.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub host: String,

    /// Project whose secrets are read.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub project_id: String,

    /// Environment slug within the project (e.g., "dev", "prod").
    #[serde(default, deserialize_with = "null_as_empty")]
    pub environment: String,

    /// How often the agent re-fetches secrets, as a duration string ("300s").
    #[serde(default, deserialize_with = "null_as_empty")]
    pub polling_interval: String,

    /// Optional path prefix prepended to every service's secret path.
    ///
    /// Empty when not set. After validation it is either empty or of the
    /// form `/segment[/segment...]` without a trailing slash.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub root_folder: String,

    /// Services in the order they should appear in the generated file.
    ///
    /// A null list is empty and a null entry is an empty name.
    #[serde(default, deserialize_with = "service_list")]
    pub services: Vec<String>,
}

/// Reads a string that may be written as a YAML null.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn service_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let services = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
    Ok(services
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

impl AgentConfig {
    /// Returns the root folder, or `None` when no prefix is configured.
    pub fn root_folder(&self) -> Option<&str> {
        if self.root_folder.is_empty() {
            None
        } else {
            Some(&self.root_folder)
        }
    }
}
