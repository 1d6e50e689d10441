//! Configuration loading and validation.
//!
//! The service list is read from a single YAML file by [`loader`], then
//! checked and normalized in place by [`validate`].

pub mod loader;
pub mod validate;

pub use loader::load_config;
pub use validate::{normalize_root_folder, validate_config};
