//! Starter files for a new agent directory.
//!
//! `agent-gen init` writes a `config.yaml` service list (with a placeholder
//! project id that must be replaced) and a `config.yaml.tmpl` template for
//! the Infisical agent.
//!
//! # Example
//!
//! ```no_run
//! use ag_core::init::{InitOptions, generate_starter_files};
//! use std::path::PathBuf;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     force: false,
//! };
//!
//! let written = generate_starter_files(&options)?;
//! println!("wrote {} files", written.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

pub use error::{InitError, InitResult};
pub use generator::{generate_starter_files, InitOptions};
pub use templates::get_template;
