//! CLI domain: parse, route, help, output, and presentation only.
//! Single route table dispatches every command against the effective catalog.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, domain_command_name};
pub use output::map_error;
pub use parse::{Cli, Commands, ConfigureCommands, DomainCommands};
pub use presentation::{
    format_config_path, format_domains, format_export_summary, format_stacks_output,
    format_tool_lines, render_stack_table, NO_TOOLS,
};
pub use route::RunContext;
