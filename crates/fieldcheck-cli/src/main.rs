//! Fieldcheck CLI - validate content documents against built-in schemas
//!
//! This is the main entry point for the Fieldcheck CLI application,
//! providing commands for validating documents, listing the built-in
//! document types, and seeding new documents from initial values.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use output::OutputWriter;
use std::process;

fn main() {
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = logging::init(cli.verbosity_level(), cli.quiet) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    let config = Config::load_with_file(cli.config.as_deref())?;
    let color = cli.use_color() && config.color.unwrap_or(true);
    control::set_override(color);
    let format = cli
        .output
        .or_else(|| config.default_output())
        .unwrap_or(cli::OutputFormat::Human);
    let mut output = OutputWriter::new(format, color, cli.quiet);

    tracing::info!(command = ?cli.command, "executing command");

    match cli.command {
        Commands::Validate(args) => handlers::handle_validate(args, &mut output),
        Commands::Schemas => handlers::handle_schemas(&mut output),
        Commands::Init(args) => handlers::handle_init(args, &mut output),
    }
}
