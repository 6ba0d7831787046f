//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Run the full pipeline and write accessor files
//! - `check`: Run collection and validation only, write nothing
//! - `init`: Initialize a resgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::{Config, MissingDefaultPolicy};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by generate and check.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Path to the config file (defaults to .resgenrc.json if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Resource root directory; repeatable, overrides config file
    #[arg(long = "root")]
    pub roots: Vec<PathBuf>,

    /// Package of the generated Kotlin files (overrides config file)
    #[arg(long)]
    pub package: Option<String>,

    /// Maximum number of resources per generated group (overrides config file)
    #[arg(long)]
    pub max_group_size: Option<usize>,

    /// Policy for resources without a default variant (overrides config file)
    #[arg(long, value_enum)]
    pub missing_default: Option<MissingDefaultPolicy>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Apply CLI overrides on top of the loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if !self.roots.is_empty() {
            config.resource_roots = self
                .roots
                .iter()
                .map(|root| root.display().to_string())
                .collect();
        }
        if let Some(package) = &self.package {
            config.package = package.clone();
        }
        if let Some(max_group_size) = self.max_group_size {
            config.max_group_size = max_group_size;
        }
        if let Some(policy) = self.missing_default {
            config.missing_default = policy;
        }
    }
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory the generated files are written to (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate Kotlin resource accessors
    Generate(GenerateCommand),
    /// Validate the resource tree without writing output
    Check(CheckCommand),
    /// Create a .resgenrc.json with default settings
    Init,
}
