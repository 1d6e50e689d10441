//! `agent-gen`: renders a secrets-agent config from a service list.

mod cli;
mod logging;
mod report;

use ag_core::init::{generate_starter_files, InitError, InitOptions};
use ag_core::pipeline::{generate, prepare, GenerateOptions};
use ag_core::GenerateError;
use clap::Parser;
use cli::{Cli, Command, GenerateArgs, InitArgs};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("failed to initialize: {0}")]
    Init(#[from] InitError),

    #[error("failed to write to stdout: {0}")]
    Stdout(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Some(Command::Init(args)) => run_init(&args),
        None => run_generate(&cli.generate),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            let stderr = io::stderr();
            let styled = stderr.is_terminal();
            report::failure(&mut stderr.lock(), &err, styled).ok();
            ExitCode::FAILURE
        }
    }
}

fn run_generate(args: &GenerateArgs) -> Result<(), CliError> {
    let options = GenerateOptions {
        services: args.services.clone(),
        template: args.template.clone(),
        output: args.output.clone(),
    };

    if args.dry_run {
        let (config, renderer) = prepare(&options)?;
        let rendered = renderer.render(&config)?;
        let mut out = io::stdout().lock();
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        return Ok(());
    }

    let generated = generate(&options)?;
    let agent_dir = report::agent_dir_name(args.agent_dir.as_deref());
    report::success(
        &mut io::stdout().lock(),
        &generated.config,
        &generated.output,
        &agent_dir,
    )?;
    Ok(())
}

fn run_init(args: &InitArgs) -> Result<(), CliError> {
    let options = InitOptions {
        target_dir: args.dir.clone(),
        force: args.force,
    };
    let written = generate_starter_files(&options)?;
    report::initialized(&mut io::stdout().lock(), &written)?;
    Ok(())
}
