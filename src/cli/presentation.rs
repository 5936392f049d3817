//! CLI presentation: text formatters per command family.

mod catalog;
mod stacks;

pub use catalog::{format_config_path, format_domains, format_export_summary};
pub use stacks::{format_stacks_output, format_tool_lines, render_stack_table, NO_TOOLS};
