//! Catalog command presentation: domain listing, config path, export summary.

use crate::catalog::{Catalog, Domain};
use owo_colors::OwoColorize;
use std::path::Path;

pub fn format_domains(catalog: &Catalog, color: bool) -> String {
    let header = "Available domains:";
    let mut output = if color {
        header.bold().to_string()
    } else {
        header.to_string()
    };
    output.push('\n');

    let lines: Vec<String> = Domain::ALL
        .iter()
        .map(|domain| match catalog.domain(*domain) {
            Ok(entry) => {
                let count = entry.stacks().len();
                let noun = if count == 1 { "stack" } else { "stacks" };
                match entry.summary() {
                    Some(summary) => {
                        format!("  {:<10} {:>2} {:<7} {}", domain, count, noun, summary)
                    }
                    None => format!("  {:<10} {:>2} {}", domain, count, noun),
                }
            }
            Err(_) => format!("  {:<10} (not configured)", domain),
        })
        .collect();
    output.push_str(&lines.join("\n"));
    output
}

pub fn format_config_path(path: &Path) -> String {
    path.display().to_string()
}

pub fn format_export_summary(destination: &Path, color: bool) -> String {
    let message = format!("Exported configuration to {}", destination.display());
    if color {
        message.green().to_string()
    } else {
        message
    }
}
