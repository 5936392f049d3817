//! CLI route: single route table and run context. Dispatches to the catalog and presentation.

use crate::catalog::{Catalog, Domain};
use crate::config::{build_config, locate_override, resolve_config_path, ConfigFormat};
use crate::error::{ApiError, ConfigError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cli::command_name;
use crate::cli::parse::{Commands, ConfigureCommands, DomainCommands};
use crate::cli::presentation::{
    format_config_path, format_domains, format_export_summary, format_stacks_output,
    render_stack_table,
};

/// Runtime context for CLI execution: the effective catalog and the config path in use.
/// Built once per invocation; the catalog is not modified afterwards.
pub struct RunContext {
    catalog: Catalog,
    /// `None` when no explicit path was given and the home directory is unresolvable.
    config_path: Option<PathBuf>,
    color: bool,
}

impl RunContext {
    /// Load defaults, apply the user override and resolve the config path.
    ///
    /// An explicit `config_path` must exist. `strict` makes a missing override
    /// file an error instead of an empty override.
    pub fn new(config_path: Option<PathBuf>, strict: bool) -> Result<Self, ApiError> {
        let explicit = resolve_config_path(config_path.as_deref())?;
        let root = build_config(explicit.as_deref(), strict)?;
        let config_path = locate_override(explicit.as_deref(), strict)?;
        debug!(
            config_path = ?config_path,
            domains = root.len(),
            "Effective catalog built"
        );

        Ok(Self {
            catalog: Catalog::new(root),
            config_path,
            color: true,
        })
    }

    /// Toggle ANSI styling of text output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        debug!(command = %command_name(command), "Executing command");
        match command {
            Commands::Domains => Ok(format_domains(&self.catalog, self.color)),
            Commands::Frontend { command } => self.handle_domain_command(Domain::Frontend, command),
            Commands::Mobile { command } => self.handle_domain_command(Domain::Mobile, command),
            Commands::Desktop { command } => self.handle_domain_command(Domain::Desktop, command),
            Commands::Backend { command } => self.handle_domain_command(Domain::Backend, command),
            Commands::Testing { command } => self.handle_domain_command(Domain::Testing, command),
            Commands::Devops { command } => self.handle_domain_command(Domain::Devops, command),
            Commands::Configure { command } => self.handle_configure_command(command),
        }
    }

    fn handle_domain_command(
        &self,
        domain: Domain,
        command: &DomainCommands,
    ) -> Result<String, ApiError> {
        // `suggest` renders exactly what `list` does.
        let stack = match command {
            DomainCommands::List { stack } | DomainCommands::Suggest { stack } => stack.as_deref(),
        };
        let entry = self.catalog.domain(domain)?;
        let mut table = render_stack_table(entry.stacks(), stack)?;
        if !self.color {
            table.force_no_tty();
        }
        Ok(format_stacks_output(domain, &table))
    }

    fn handle_configure_command(&self, command: &ConfigureCommands) -> Result<String, ApiError> {
        match command {
            ConfigureCommands::Show { format } => {
                let format = ConfigFormat::from_name(format).ok_or_else(|| {
                    ApiError::Serialization(format!("Unsupported format: {}", format))
                })?;
                let rendered = format
                    .render(self.catalog.as_map())
                    .map_err(ApiError::Serialization)?;
                Ok(rendered.trim_end().to_string())
            }
            ConfigureCommands::Path => {
                let path = self
                    .config_path
                    .as_deref()
                    .ok_or(ConfigError::HomeDirUnavailable)?;
                Ok(format_config_path(path))
            }
            ConfigureCommands::Export { destination, force } => {
                self.export(destination, *force)
            }
        }
    }

    fn export(&self, destination: &Path, force: bool) -> Result<String, ApiError> {
        if destination.exists() && !force {
            return Err(ApiError::DestinationExists(destination.to_path_buf()));
        }

        let format = ConfigFormat::from_path(destination);
        let rendered = format
            .render(self.catalog.as_map())
            .map_err(ApiError::Serialization)?;

        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(destination, rendered)?;
        info!(
            destination = %destination.display(),
            format = format.as_str(),
            "Exported configuration"
        );

        Ok(format_export_summary(destination, self.color))
    }
}
