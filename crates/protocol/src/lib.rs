//! # ag-protocol
//!
//! Data model shared by the agent-gen crates.
//!
//! ## Modules
//!
//! - [`config_models`]: The service-list configuration read from YAML and
//!   exposed to output templates
//!
//! The crate depends on serde alone so it can be reused by tooling that only
//! needs to read or write `config.yaml`.

pub mod config_models;

pub use config_models::*;
