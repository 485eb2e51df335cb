use std::{io::IsTerminal, path::PathBuf};

use clap::Args;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use svcforge_config::{
    ConfigBuilder, DEFAULT_MODULE_PREFIX, Database, Framework, validate_module_path, validate_name,
};
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InitCommand {
    /// Service name (prompted when omitted)
    pub name: Option<String>,

    /// Go module path (defaults to github.com/yourorg/<name>)
    #[arg(short, long)]
    pub module: Option<String>,

    /// HTTP framework: gin, fiber or echo
    #[arg(short, long)]
    pub framework: Option<Framework>,

    /// Database: postgresql, mysql, mongodb, in-memory or none
    #[arg(short, long)]
    pub database: Option<Database>,

    /// Generate a gRPC server alongside the HTTP API
    #[arg(long, overrides_with = "no_grpc")]
    pub grpc: bool,

    /// Do not generate a gRPC server
    #[arg(long, overrides_with = "grpc")]
    pub no_grpc: bool,

    /// Output directory (defaults to ./<name>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML preset; flags override its values
    #[arg(short, long, env = "SVCFORGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Accept defaults instead of prompting for missing values
    #[arg(short, long)]
    pub yes: bool,
}

impl InitCommand {
    pub fn run(&self, verbose: bool) -> Result<()> {
        let preset = match &self.config {
            Some(path) => ConfigBuilder::from_file(path).unwrap_or_exit(),
            None => ConfigBuilder::new(),
        };
        let mut builder = preset.merge(self.flags());

        if !self.yes && std::io::stdin().is_terminal() {
            builder = Self::prompt_missing(builder)?;
        }

        let config = builder.resolve().unwrap_or_exit();
        debug!(?config, "resolved configuration");

        if self.dry_run {
            ops::preview(&config)?.render(&mut TerminalOutput::new());
        } else {
            ops::generate(&config, verbose)?.render(&mut TerminalOutput::new());
        }

        Ok(())
    }

    fn grpc_flag(&self) -> Option<bool> {
        match (self.grpc, self.no_grpc) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Values given on the command line.
    fn flags(&self) -> ConfigBuilder {
        let mut flags = ConfigBuilder::new();
        if let Some(name) = &self.name {
            flags = flags.with_name(name);
        }
        if let Some(module) = &self.module {
            flags = flags.with_module_path(module);
        }
        if let Some(framework) = self.framework {
            flags = flags.with_framework(framework);
        }
        if let Some(database) = self.database {
            flags = flags.with_database(database);
        }
        if let Some(grpc) = self.grpc_flag() {
            flags = flags.with_rpc(grpc);
        }
        if let Some(output) = &self.output {
            flags = flags.with_target_dir(output);
        }
        flags
    }

    fn prompt_missing(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
        let theme = ColorfulTheme::default();

        let name = match builder.name() {
            Some(name) => name.to_string(),
            None => {
                let name: String = Input::with_theme(&theme)
                    .with_prompt("Service name")
                    .validate_with(|input: &String| -> Result<(), String> {
                        validate_name(input).map_err(|e| e.to_string())
                    })
                    .interact_text()
                    .wrap_err("Failed to read service name")?;
                builder = builder.with_name(&name);
                name
            }
        };

        if builder.module_path().is_none() {
            let module: String = Input::with_theme(&theme)
                .with_prompt("Go module path")
                .default(format!("{}/{}", DEFAULT_MODULE_PREFIX, name))
                .validate_with(|input: &String| -> Result<(), String> {
                    validate_module_path(input).map_err(|e| e.to_string())
                })
                .interact_text()
                .wrap_err("Failed to read module path")?;
            builder = builder.with_module_path(module);
        }

        if builder.framework().is_none() {
            let labels: Vec<&str> = Framework::ALL.iter().map(Framework::label).collect();
            let selection = Select::with_theme(&theme)
                .with_prompt("HTTP framework")
                .items(&labels)
                .default(0)
                .interact()
                .wrap_err("Failed to get framework selection")?;
            builder = builder.with_framework(Framework::ALL[selection]);
        }

        if builder.database().is_none() {
            let labels: Vec<&str> = Database::ALL.iter().map(Database::label).collect();
            let selection = Select::with_theme(&theme)
                .with_prompt("Database")
                .items(&labels)
                .default(0)
                .interact()
                .wrap_err("Failed to get database selection")?;
            builder = builder.with_database(Database::ALL[selection]);
        }

        if builder.rpc().is_none() {
            let grpc = Confirm::with_theme(&theme)
                .with_prompt("Generate a gRPC server?")
                .default(false)
                .interact()
                .wrap_err("Failed to read gRPC choice")?;
            builder = builder.with_rpc(grpc);
        }

        Ok(builder)
    }
}
