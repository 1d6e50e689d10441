//! Error types for the generate pipeline.
//!
//! Each variant of [`GenerateError`] names the stage that failed, so the
//! `Display` output is already the message shown to the user.

use std::path::PathBuf;
use thiserror::Error;

/// Semantic problems found in an otherwise well-formed configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `project_id` is empty or still the placeholder value.
    #[error("missing project id: set a valid project_id in the config file")]
    MissingProjectId,

    /// `environment` is empty.
    #[error("missing environment: set environment in the config file")]
    MissingEnvironment,

    /// `services` is empty.
    #[error("no services: add at least one entry under services")]
    NoServices,
}

/// Errors that can occur while generating the agent configuration.
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Failed to read the service-list file from disk.
    #[error("failed to read config: {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The service-list file is not valid YAML for the schema.
    #[error("failed to read config: invalid YAML in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The configuration parsed but violates a required-field rule.
    #[error("config validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The template file is missing or does not parse.
    #[error("failed to load template {path}: {source}")]
    TemplateLoad { path: PathBuf, source: tera::Error },

    /// Executing the template failed.
    #[error("failed to render template {template}: {source}")]
    Render { template: String, source: tera::Error },

    /// The output file could not be created or written.
    #[error("failed to write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Type alias for Result with GenerateError.
pub type GenerateResult<T> = Result<T, GenerateError>;
