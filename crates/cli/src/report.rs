//! Console report printed after a run.
//!
//! Everything here writes to a caller-supplied [`Write`] so the exact text
//! can be checked in tests. Only icons and headers are styled; the shell
//! commands stay plain so they can be copied.

use ag_core::settings::{FALLBACK_AGENT_DIR, PROJECT_HOMEPAGE};
use ag_protocol::config_models::AgentConfig;
use colored::Colorize;
use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Print the generation summary and the setup commands for each service.
pub fn success<W: Write>(
    out: &mut W,
    config: &AgentConfig,
    output: &Path,
    agent_dir: &str,
) -> io::Result<()> {
    writeln!(out, "{} Generated config file: {}", "✓".green(), output.display())?;
    writeln!(out, "  - Project ID: {}", config.project_id)?;
    writeln!(out, "  - Environment: {}", config.environment)?;
    writeln!(
        out,
        "  - Root folder: {}",
        config.root_folder().unwrap_or("(none)")
    )?;
    writeln!(out, "  - Services: {}", config.services.len())?;
    for service in &config.services {
        writeln!(out, "    • {service}")?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "📋 Create a symlink in each service directory:".bold())?;
    for service in &config.services {
        writeln!(
            out,
            "    cd ../{service} && ln -sf ../{agent_dir}/secrets/{service}.env .env"
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "📋 Also add env_file to docker-compose.yml:".bold())?;
    writeln!(out, "    env_file: .env")?;

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        "💡 Back up the existing .env files first (if any):".bold()
    )?;
    for service in &config.services {
        writeln!(out, "    mv ../{service}/.env ../{service}/.env.bak")?;
    }

    Ok(())
}

/// Print the files written by `init` and what to do next.
pub fn initialized<W: Write>(out: &mut W, written: &[PathBuf]) -> io::Result<()> {
    for path in written {
        writeln!(out, "{} Created {}", "✓".green(), path.display())?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Edit config.yaml (project_id, environment, services), then run agent-gen."
    )
}

/// Print a fatal error, its causes and the project homepage.
///
/// `styled` must reflect the destination stream; `colored` only inspects
/// stdout.
pub fn failure<W: Write>(
    out: &mut W,
    err: &(dyn Error + 'static),
    styled: bool,
) -> io::Result<()> {
    let message = err.to_string();
    if styled {
        writeln!(out, "{} {message}", "error:".red().bold())?;
    } else {
        writeln!(out, "error: {message}")?;
    }

    // Variants embed their direct source in the message; only print causes not already shown
    let mut cause = err.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !message.contains(&text) {
            writeln!(out, "  caused by: {text}")?;
        }
        cause = inner.source();
    }

    writeln!(out, "Project homepage: {PROJECT_HOMEPAGE}")
}

/// Directory name used in the symlink commands.
///
/// An explicit override wins. Otherwise the name of the directory holding
/// the running executable is used, then the current working directory, then
/// a fixed fallback.
pub fn agent_dir_name(explicit: Option<&str>) -> String {
    if let Some(name) = explicit {
        return name.to_string();
    }
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let cwd = std::env::current_dir().ok();
    resolve_agent_dir(exe_dir.as_deref(), cwd.as_deref())
}

fn resolve_agent_dir(exe_dir: Option<&Path>, cwd: Option<&Path>) -> String {
    exe_dir
        .and_then(base_name)
        .or_else(|| cwd.and_then(base_name))
        .unwrap_or_else(|| FALLBACK_AGENT_DIR.to_string())
}

fn base_name(dir: &Path) -> Option<String> {
    if dir.as_os_str().is_empty() || dir == Path::new(".") {
        return None;
    }
    dir.file_name().map(|name| name.to_string_lossy().into_owned())
}
