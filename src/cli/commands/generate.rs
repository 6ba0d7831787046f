//! The generate command: full pipeline from resource roots to written
//! accessor files.
//!
//! Output is all-or-nothing. If any error-severity issue accumulates
//! during collection or validation, nothing is written and the complete
//! issue set is returned; warnings alone do not block emission.

use std::path::Path;

use anyhow::{Result, ensure};

use super::super::args::GenerateCommand;
use super::{CommandResult, CommandSummary, GenerateSummary};
use crate::config::Config;
use crate::core::collect::collect_resources;
use crate::core::emit::render_units;
use crate::core::partition::partition;
use crate::core::validate::validate;
use crate::core::write::write_units;
use crate::issue::error_count;

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let mut config = Config::load(cmd.common.config.as_deref())?;
    cmd.common.apply_to(&mut config);
    if let Some(output_dir) = &cmd.output_dir {
        config.output_dir = output_dir.display().to_string();
    }
    ensure!(config.max_group_size > 0, "--max-group-size must be positive");

    let outcome = collect_resources(
        &config.resource_root_paths(),
        &config.ignores,
        cmd.common.verbose,
    );
    let mut issues = outcome.issues;
    issues.extend(validate(&outcome.catalog, config.missing_default));

    if error_count(&issues) > 0 {
        return Ok(CommandResult {
            summary: CommandSummary::Generate(GenerateSummary {
                resources: 0,
                groups: 0,
                files_written: 0,
            }),
            issues,
        });
    }

    let resources = outcome.catalog.len();
    let groups = partition(outcome.catalog, config.max_group_size);
    let units = render_units(&config.package, &groups);
    let files_written = write_units(Path::new(&config.output_dir), &units)?;

    Ok(CommandResult {
        summary: CommandSummary::Generate(GenerateSummary {
            resources,
            groups: groups.len(),
            files_written,
        }),
        issues,
    })
}
