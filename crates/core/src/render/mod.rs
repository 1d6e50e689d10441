//! Output template rendering.
//!
//! Templates are Tera templates evaluated against a validated
//! [`AgentConfig`](ag_protocol::config_models::AgentConfig). Every key of the
//! configuration is available as a variable, plus the `secretPath` helper.
//!
//! ```text
//! {% for service in services %}
//!   path: "{{ secretPath(root=root_folder, service=service) }}"
//! {% endfor %}
//! ```

pub mod helpers;
pub mod renderer;

pub use helpers::secret_path;
pub use renderer::TemplateRenderer;
