//! Process-wide constants.

/// Secrets service used when `host` is not set.
pub const DEFAULT_HOST: &str = "https://app.infisical.com";

/// Polling interval used when `polling_interval` is not set.
pub const DEFAULT_POLLING_INTERVAL: &str = "300s";

/// Value shipped in the starter `config.yaml`; never accepted as a project id.
pub const PROJECT_ID_PLACEHOLDER: &str = "<your-project-id>";

/// Printed after every fatal error.
pub const PROJECT_HOMEPAGE: &str = "https://github.com/YewFence/infisical-agent";

/// Agent directory name used in setup commands when neither the executable
/// directory nor the working directory can be determined.
pub const FALLBACK_AGENT_DIR: &str = "infisical-agent";

/// Default input path for `--services`.
pub const DEFAULT_SERVICES_FILE: &str = "config.yaml";

/// Default template path for `--template`.
pub const DEFAULT_TEMPLATE_FILE: &str = "config.yaml.tmpl";

/// Default output path for `--output`.
pub const DEFAULT_OUTPUT_FILE: &str = "config-no-manually-edit.yaml";
