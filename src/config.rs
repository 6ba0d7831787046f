use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".resgenrc.json";

/// How to treat a resource that has qualified variants but no default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissingDefaultPolicy {
    #[default]
    Warn,
    Error,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_resource_roots")]
    pub resource_roots: Vec<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_package")]
    pub package: String,
    #[serde(default = "default_max_group_size")]
    pub max_group_size: usize,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub missing_default: MissingDefaultPolicy,
}

fn default_resource_roots() -> Vec<String> {
    vec!["src/commonMain/composeResources".to_string()]
}

fn default_output_dir() -> String {
    "build/generated/resgen".to_string()
}

fn default_package() -> String {
    "app.generated.resources".to_string()
}

fn default_max_group_size() -> usize {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resource_roots: default_resource_roots(),
            output_dir: default_output_dir(),
            package: default_package(),
            max_group_size: default_max_group_size(),
            ignores: Vec::new(),
            missing_default: MissingDefaultPolicy::default(),
        }
    }
}

impl Config {
    /// Load a config file. An explicit path must exist; otherwise
    /// `.resgenrc.json` in the current directory is used when present,
    /// falling back to the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("Config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let default_path = PathBuf::from(CONFIG_FILE_NAME);
                if !default_path.exists() {
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validated()
    }

    fn validated(self) -> Result<Self> {
        if self.max_group_size == 0 {
            bail!("maxGroupSize must be a positive integer");
        }
        if self.resource_roots.is_empty() {
            bail!("resourceRoots must not be empty");
        }
        if self.package.is_empty() {
            bail!("package must not be empty");
        }
        Ok(self)
    }

    pub fn resource_root_paths(&self) -> Vec<PathBuf> {
        self.resource_roots.iter().map(PathBuf::from).collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let mut json = serde_json::to_string_pretty(&Config::default())?;
    json.push('\n');
    Ok(json)
}
