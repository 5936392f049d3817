//! CLI parse: clap types for biucing. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BiucingCLI - Full-stack toolchain assistant
#[derive(Parser)]
#[command(name = "biucing")]
#[command(version, about = "Full-stack toolchain assistant")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override configuration file path (default: ~/.config/biucing/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Fail when the configuration file does not exist
    #[arg(long, global = true)]
    pub strict_config: bool,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List available toolchain domains
    Domains,
    /// Curate frontend stacks and tooling
    Frontend {
        #[command(subcommand)]
        command: DomainCommands,
    },
    /// Curate mobile stacks and tooling
    Mobile {
        #[command(subcommand)]
        command: DomainCommands,
    },
    /// Curate desktop stacks and tooling
    Desktop {
        #[command(subcommand)]
        command: DomainCommands,
    },
    /// Curate backend stacks and tooling
    Backend {
        #[command(subcommand)]
        command: DomainCommands,
    },
    /// Curate testing stacks and tooling
    Testing {
        #[command(subcommand)]
        command: DomainCommands,
    },
    /// Curate devops stacks and tooling
    Devops {
        #[command(subcommand)]
        command: DomainCommands,
    },
    /// Configuration management commands
    Configure {
        #[command(subcommand)]
        command: ConfigureCommands,
    },
}

#[derive(Subcommand)]
pub enum DomainCommands {
    /// List stacks in this domain
    List {
        /// Target a specific stack
        #[arg(short, long)]
        stack: Option<String>,
    },
    /// Highlight recommended stacks in this domain
    Suggest {
        /// Target a specific stack
        #[arg(short, long)]
        stack: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigureCommands {
    /// Display the merged configuration used by the CLI
    Show {
        /// Output format (toml, yaml, json)
        #[arg(long, default_value = "toml", value_parser = ["toml", "yaml", "json"])]
        format: String,
    },
    /// Print the configuration file path in use
    Path,
    /// Write the active configuration to the given destination
    Export {
        /// Where to export the merged configuration (format follows the extension)
        destination: PathBuf,
        /// Overwrite if the destination exists
        #[arg(short, long)]
        force: bool,
    },
}
