//! accessorgen CLI - generate accessor classes from entity schemas
//!
//! Usage: accessorgen <COMMAND>
//!
//! Commands:
//!   emit     Validate a schema file and emit one class per entity
//!   check    Validate a schema file and report every violation
//!   diff     Show how emitted files would differ from those on disk
//!   targets  List supported targets

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let globals = commands::Globals {
        json: cli.json,
        config: cli.config,
    };

    match cli.command {
        Commands::Emit {
            schema,
            target,
            out,
            stdout,
            dry_run,
        } => commands::emit::cmd_emit(&globals, &schema, target, out, stdout, dry_run),
        Commands::Check { schema, target } => commands::check::cmd_check(&globals, &schema, target),
        Commands::Diff {
            schema,
            target,
            out,
        } => commands::diff::cmd_diff(&globals, &schema, target, out),
        Commands::Targets => commands::targets::cmd_targets(&globals),
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ACCESSORGEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
