//! The load → validate → render pipeline.

use crate::config::{load_config, validate_config};
use crate::error::GenerateResult;
use crate::render::TemplateRenderer;
use crate::settings::{DEFAULT_OUTPUT_FILE, DEFAULT_SERVICES_FILE, DEFAULT_TEMPLATE_FILE};
use ag_protocol::config_models::AgentConfig;
use std::path::PathBuf;
use tracing::info;

/// Input, template and output locations for one run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Service-list YAML file.
    pub services: PathBuf,

    /// Tera template for the agent configuration.
    pub template: PathBuf,

    /// Where the rendered configuration is written.
    pub output: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            services: PathBuf::from(DEFAULT_SERVICES_FILE),
            template: PathBuf::from(DEFAULT_TEMPLATE_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Generated {
    /// The validated and normalized configuration.
    pub config: AgentConfig,

    /// Absolute path of the written file.
    pub output: PathBuf,
}

/// Loads and validates the service list and loads the template.
///
/// Shared by [`generate`] and dry runs so both fail the same way before
/// anything is written.
pub fn prepare(options: &GenerateOptions) -> GenerateResult<(AgentConfig, TemplateRenderer)> {
    let mut config = load_config(&options.services)?;
    validate_config(&mut config)?;
    let renderer = TemplateRenderer::load(&options.template)?;
    Ok((config, renderer))
}

/// Runs the whole pipeline and writes the output file.
///
/// # Example
///
/// ```rust,no_run
/// use ag_core::pipeline::{generate, GenerateOptions};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let generated = generate(&GenerateOptions::default())?;
/// println!("wrote {}", generated.output.display());
/// # Ok(())
/// # }
/// ```
pub fn generate(options: &GenerateOptions) -> GenerateResult<Generated> {
    let (config, renderer) = prepare(options)?;
    renderer.render_to_file(&config, &options.output)?;

    let output = std::path::absolute(&options.output).unwrap_or_else(|_| options.output.clone());
    info!(
        output = %output.display(),
        services = config.services.len(),
        "generated agent config"
    );

    Ok(Generated { config, output })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = GenerateOptions::default();
        assert_eq!(options.services, PathBuf::from("config.yaml"));
        assert_eq!(options.template, PathBuf::from("config.yaml.tmpl"));
        assert_eq!(options.output, PathBuf::from("config-no-manually-edit.yaml"));
    }
}
