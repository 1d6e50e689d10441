//! Starter file generation for `agent-gen init`.

use super::error::{InitError, InitResult};
use super::templates::{get_template, STARTER_CONFIG, STARTER_TEMPLATE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options for writing the starter files.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory that receives `config.yaml` and `config.yaml.tmpl`.
    pub target_dir: PathBuf,

    /// Overwrite starter files that already exist.
    pub force: bool,
}

/// Write the starter service list and template into `options.target_dir`.
///
/// ```text
/// <target_dir>/
/// ├── config.yaml
/// └── config.yaml.tmpl
/// ```
///
/// Existing files are checked before anything is written, so without
/// `force` either both files are created or neither is.
///
/// # Returns
/// The paths written, in the order above.
pub fn generate_starter_files(options: &InitOptions) -> InitResult<Vec<PathBuf>> {
    let names = [STARTER_CONFIG, STARTER_TEMPLATE];

    if !options.force {
        if let Some(existing) = names
            .iter()
            .map(|name| options.target_dir.join(name))
            .find(|path| path.exists())
        {
            return Err(InitError::FileExists(existing));
        }
    }

    fs::create_dir_all(&options.target_dir).map_err(|source| InitError::DirectoryCreate {
        path: options.target_dir.clone(),
        source,
    })?;

    names
        .iter()
        .map(|name| write_template_file(&options.target_dir, name))
        .collect()
}

/// Write one embedded file into `dir`, returning the written path.
fn write_template_file(dir: &Path, template_path: &str) -> InitResult<PathBuf> {
    let content = get_template(template_path)
        .ok_or_else(|| InitError::TemplateNotFound(template_path.to_string()))?;

    let target_path = dir.join(template_path);
    fs::write(&target_path, content).map_err(|source| InitError::FileWrite {
        path: target_path.clone(),
        source,
    })?;

    debug!(path = %target_path.display(), "wrote starter file");
    Ok(target_path)
}
