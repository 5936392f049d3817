//! Stack presentation: one table row per stack, tools listed in the last column.

use crate::catalog::{Domain, Stacks, ToolEntry};
use crate::error::ApiError;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

/// Shown in the tools column when a stack lists none.
pub const NO_TOOLS: &str = "No tools configured";

/// Render `stacks` as a table, or only the stack named by `filter`.
pub fn render_stack_table(stacks: Stacks<'_>, filter: Option<&str>) -> Result<Table, ApiError> {
    let selected = match filter {
        Some(name) => vec![stacks
            .get(name)
            .ok_or_else(|| ApiError::UnknownStack(name.to_string()))?],
        None => stacks.iter().collect(),
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Stack", "Description", "Tools"]);
    for stack in selected {
        table.add_row(vec![
            Cell::new(stack.name())
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            Cell::new(stack.description()).fg(Color::Green),
            Cell::new(format_tool_lines(&stack.tools())).fg(Color::Magenta),
        ]);
    }
    Ok(table)
}

/// `name [category]` then the url on the next line; tools separated by a blank line.
pub fn format_tool_lines(tools: &[ToolEntry<'_>]) -> String {
    if tools.is_empty() {
        return NO_TOOLS.to_string();
    }
    tools
        .iter()
        .map(|tool| format!("{} [{}]\n{}", tool.name(), tool.category(), tool.url()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn format_stacks_output(domain: Domain, table: &Table) -> String {
    format!("{} Stacks\n{}", domain.title(), table)
}
