//! Filesystem scanner for resource roots.
//!
//! Walks one root with `walkdir` and returns root-relative file paths
//! with forward slashes, sorted lexicographically. The sort is what makes
//! the rest of the pipeline independent of filesystem enumeration order.
//! Hidden files and directories (`.DS_Store`, `.git`) are skipped
//! silently; user-supplied glob patterns skip additional paths.

use std::path::Path;

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Result of scanning one resource root.
#[derive(Debug)]
pub struct ScanResult {
    /// Root-relative paths, `/`-separated, lexicographically sorted.
    pub files: Vec<String>,
    /// Paths that could not be accessed during the walk.
    pub skipped_count: usize,
}

pub fn scan_root(root: &Path, ignore_patterns: &[String], verbose: bool) -> ScanResult {
    let mut patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        let components: Vec<String> = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        if components.iter().any(|c| c.starts_with('.')) {
            continue;
        }

        let rel_path = components.join("/");
        if patterns.iter().any(|p| p.matches(&rel_path)) {
            continue;
        }

        files.push(rel_path);
    }

    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}
