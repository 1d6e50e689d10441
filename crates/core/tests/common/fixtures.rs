//! Test fixtures for service lists and templates.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Minimal template exercising every configuration key and the helper.
pub const TEST_TEMPLATE: &str = r#"host: {{ host }}
project: {{ project_id }}
env: {{ environment }}
interval: {{ polling_interval }}
paths:
{%- for service in services %}
  {{ service }}: {{ secretPath(root=root_folder, service=service) }}
{%- endfor %}
"#;

/// A scratch agent directory holding a service list and a template.
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    /// Create a project with `services_yaml` as `config.yaml` and
    /// [`TEST_TEMPLATE`] as `config.yaml.tmpl`.
    pub fn new(services_yaml: &str) -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("config.yaml"), services_yaml)?;
        std::fs::write(dir.path().join("config.yaml.tmpl"), TEST_TEMPLATE)?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Service list with two services and no optional keys.
pub const MINIMAL_SERVICES: &str = r#"project_id: p1
environment: prod
services:
  - a
  - b
"#;

/// Service list setting every key.
pub const FULL_SERVICES: &str = r#"host: https://secrets.internal
project_id: p1
environment: staging
polling_interval: 60s
root_folder: " /team/ "
services:
  - gateway
  - billing
"#;
