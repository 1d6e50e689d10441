//! Tera-based renderer for the agent configuration template.

use super::helpers::{secret_path_function, SECRET_PATH_FN};
use crate::error::{GenerateError, GenerateResult};
use ag_protocol::config_models::AgentConfig;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use tracing::debug;

/// A single template file loaded and ready to render.
#[derive(Debug)]
pub struct TemplateRenderer {
    tera: Tera,
    name: String,
    path: PathBuf,
}

impl TemplateRenderer {
    /// Loads and parses the template at `path`.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::TemplateLoad` if the file is missing,
    /// unreadable, or has a syntax error.
    pub fn load(path: &Path) -> GenerateResult<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "template".to_string());

        let mut tera = Tera::default();
        // Output is YAML, never HTML
        tera.autoescape_on(Vec::new());
        tera.register_function(SECRET_PATH_FN, secret_path_function);
        tera.add_template_file(path, Some(&name))
            .map_err(|source| GenerateError::TemplateLoad {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), "loaded template");

        Ok(Self {
            tera,
            name,
            path: path.to_path_buf(),
        })
    }

    /// Renders the template against `config`.
    pub fn render(&self, config: &AgentConfig) -> GenerateResult<String> {
        let context = Context::from_serialize(config).map_err(|source| self.render_error(source))?;
        self.tera
            .render(&self.name, &context)
            .map_err(|source| self.render_error(source))
    }

    /// Renders the template and writes the result to `output`, replacing
    /// any existing file. Returns the number of bytes written.
    ///
    /// The template is rendered completely before `output` is opened, so a
    /// render failure leaves an existing file untouched.
    pub fn render_to_file(&self, config: &AgentConfig, output: &Path) -> GenerateResult<usize> {
        let content = self.render(config)?;

        let write_error = |source| GenerateError::OutputWrite {
            path: output.to_path_buf(),
            source,
        };
        let file = File::create(output).map_err(write_error)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content.as_bytes()).map_err(write_error)?;
        writer.flush().map_err(write_error)?;

        debug!(path = %output.display(), bytes = content.len(), "wrote output file");
        Ok(content.len())
    }

    fn render_error(&self, source: tera::Error) -> GenerateError {
        GenerateError::Render {
            template: self.path.display().to_string(),
            source,
        }
    }
}
