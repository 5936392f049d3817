//! CLI help and command-name contract for logging and routing.

use crate::catalog::Domain;
use crate::cli::parse::{Commands, ConfigureCommands, DomainCommands};

/// Command name string for log records (e.g. "frontend.list", "configure.export").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Domains => "domains".to_string(),
        Commands::Configure { command } => {
            format!("configure.{}", configure_command_name(command))
        }
        Commands::Frontend { command } => domain_command_name(Domain::Frontend, command),
        Commands::Mobile { command } => domain_command_name(Domain::Mobile, command),
        Commands::Desktop { command } => domain_command_name(Domain::Desktop, command),
        Commands::Backend { command } => domain_command_name(Domain::Backend, command),
        Commands::Testing { command } => domain_command_name(Domain::Testing, command),
        Commands::Devops { command } => domain_command_name(Domain::Devops, command),
    }
}

pub fn domain_command_name(domain: Domain, command: &DomainCommands) -> String {
    let action = match command {
        DomainCommands::List { .. } => "list",
        DomainCommands::Suggest { .. } => "suggest",
    };
    format!("{}.{}", domain, action)
}

pub fn configure_command_name(command: &ConfigureCommands) -> &'static str {
    match command {
        ConfigureCommands::Show { .. } => "show",
        ConfigureCommands::Path => "path",
        ConfigureCommands::Export { .. } => "export",
    }
}
