//! Command-line interface layer.
//!
//! Commands run the pipeline and return a `CommandResult`; this module
//! prints the issue report and summary, then maps the outcome to an
//! exit status.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

pub mod args;
pub mod commands;
mod exit_status;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use crate::config::CONFIG_FILE_NAME;
use crate::issue::error_count;
use crate::report::{
    SUCCESS_MARK, print_check_success, print_generate_success, print_report,
};
use self::commands::CommandSummary;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    print_report(&result.issues);

    let failed = error_count(&result.issues) > 0;
    match &result.summary {
        CommandSummary::Generate(summary) => {
            if !failed {
                print_generate_success(summary.resources, summary.groups, summary.files_written);
            }
        }
        CommandSummary::Check(summary) => {
            if !failed {
                print_check_success(summary.resources, summary.files_checked);
            }
        }
        CommandSummary::Init(summary) => {
            if summary.created {
                println!(
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!("Created {}", CONFIG_FILE_NAME).green()
                );
            } else {
                eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
                return Ok(ExitStatus::Failure.into());
            }
        }
    }

    let status = if failed {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    };
    Ok(status.into())
}
