//! # ag-core
//!
//! Config loading, validation and template rendering for agent-gen.
//!
//! This crate provides:
//! - Loading the service-list YAML file
//! - Validation, defaults and root-folder normalization
//! - Tera rendering with the `secretPath` helper
//! - Starter files for `agent-gen init`
//!
//! ## Modules
//!
//! - [`settings`]: Default values and fixed names
//! - [`config`]: Loading and validation
//! - [`render`]: Template rendering
//! - [`pipeline`]: The end-to-end generate run
//! - [`init`]: Starter file generation
//! - [`error`]: Pipeline error types

pub mod config;
pub mod error;
pub mod init;
pub mod pipeline;
pub mod render;
pub mod settings;

pub use error::{GenerateError, GenerateResult, ValidationError};
