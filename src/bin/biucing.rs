//! Biucing CLI Binary
//!
//! Command-line interface for browsing and exporting the toolchain catalog.

use biucing::cli::{map_error, Cli, RunContext};
use biucing::logging::{init_logging, LoggingConfig};
use clap::Parser;
use std::process;
use tracing::debug;

fn main() {
    let cli = Cli::parse();

    // Build logging config from CLI args (env vars are applied by init_logging)
    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!("Biucing CLI starting");

    let context = match RunContext::new(cli.config.clone(), cli.strict_config) {
        Ok(ctx) => ctx.with_color(color_enabled(&cli)),
        Err(e) => {
            debug!("Error loading configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            debug!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            debug!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args.
/// Precedence: explicit flags override verbose/quiet, which override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }
    config.color = color_enabled(cli);

    config
}

fn color_enabled(cli: &Cli) -> bool {
    !cli.no_color && std::env::var_os("NO_COLOR").is_none()
}
