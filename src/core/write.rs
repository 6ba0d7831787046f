//! Output writer.
//!
//! Units are written via a temp file in the output directory followed by
//! a rename, so a concurrent reader never observes a half-written file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::core::emit::OutputUnit;

/// Write all units into `output_dir`, creating it if needed. Returns the
/// number of files written.
pub fn write_units(output_dir: &Path, units: &[OutputUnit]) -> Result<usize> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    for unit in units {
        let final_path = output_dir.join(&unit.file_name);
        let temp = tempfile::NamedTempFile::new_in(output_dir).with_context(|| {
            format!("Failed to create temp file in {}", output_dir.display())
        })?;
        fs::write(temp.path(), &unit.text)
            .with_context(|| format!("Failed to write {}", unit.file_name))?;
        temp.persist(&final_path)
            .map_err(|err| err.error)
            .with_context(|| format!("Failed to persist {}", final_path.display()))?;
    }

    Ok(units.len())
}
