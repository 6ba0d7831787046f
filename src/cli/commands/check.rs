//! The check command: collection and validation without emission.

use anyhow::{Result, ensure};

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary};
use crate::config::Config;
use crate::core::collect::collect_resources;
use crate::core::validate::validate;

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let mut config = Config::load(cmd.common.config.as_deref())?;
    cmd.common.apply_to(&mut config);
    ensure!(config.max_group_size > 0, "--max-group-size must be positive");

    let outcome = collect_resources(
        &config.resource_root_paths(),
        &config.ignores,
        cmd.common.verbose,
    );
    let mut issues = outcome.issues;
    issues.extend(validate(&outcome.catalog, config.missing_default));

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            resources: outcome.catalog.len(),
            files_checked: outcome.files_seen,
        }),
        issues,
    })
}
