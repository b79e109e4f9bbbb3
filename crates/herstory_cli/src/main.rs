//! Her Story CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments (including unknown persona)
//! - 3: Configuration error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use herstory_chat::ChatError;
use herstory_gateway::GatewayError;

mod commands;

use commands::{Cli, Commands};

/// Process exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const CONFIG_ERROR: u8 = 3;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr so the transcript on stdout stays clean
    let level = if cli.verbose {
        "herstory=debug"
    } else if cli.quiet {
        "herstory=warn"
    } else {
        "herstory=info"
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(level.parse().unwrap())
        .add_directive("warn".parse().unwrap());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let result = match cli.command {
        Commands::Personas(args) => commands::personas::execute(args).await,
        Commands::Ask(args) => commands::ask::execute(&cli.gateway, args).await,
        Commands::Chat(args) => commands::chat::execute(&cli.gateway, args).await,
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Map an error to its exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    if let Some(err) = e.downcast_ref::<ChatError>() {
        return match err {
            ChatError::Persona(_) | ChatError::NoPersonaSelected => ExitCodes::INVALID_ARGS,
            ChatError::AvatarMissing(_) => ExitCodes::GENERAL_ERROR,
        };
    }
    if let Some(err) = e.downcast_ref::<GatewayError>() {
        return match err {
            GatewayError::Settings(_) | GatewayError::Io(_) => ExitCodes::CONFIG_ERROR,
            _ => ExitCodes::GENERAL_ERROR,
        };
    }
    ExitCodes::GENERAL_ERROR
}
