//! Embedded starter files for `agent-gen init`.
//!
//! The crate's `templates/` directory is embedded into the binary at compile
//! time so `init` works without any files next to the executable.

use rust_embed::RustEmbed;

/// Embedded starter files from `crates/core/templates/`.
///
/// With the `debug-embed` feature the files are embedded in debug builds as
/// well, so tests see exactly what a release binary ships.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates"]
pub struct StarterAssets;

/// Starter service list written as `config.yaml`.
pub const STARTER_CONFIG: &str = "config.yaml";

/// Starter template written as `config.yaml.tmpl`.
pub const STARTER_TEMPLATE: &str = "config.yaml.tmpl";

/// Get starter file content by name.
///
/// # Example
/// ```
/// use ag_core::init::templates::get_template;
///
/// let config = get_template("config.yaml").expect("config.yaml should exist");
/// assert!(config.contains("project_id"));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    StarterAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}
