//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PreflightResult;

use super::loader::{self, ConfigWarning};

/// Executable names for the external tools the utilities shell out to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_ansible")]
    pub ansible: String,

    #[serde(default = "default_ansible_inventory")]
    pub ansible_inventory: String,

    #[serde(default = "default_docker")]
    pub docker: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            ansible: default_ansible(),
            ansible_inventory: default_ansible_inventory(),
            docker: default_docker(),
        }
    }
}

fn default_ansible() -> String {
    "ansible".to_string()
}

fn default_ansible_inventory() -> String {
    "ansible-inventory".to_string()
}

fn default_docker() -> String {
    "docker".to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Root configuration for both utilities.
///
/// Artifact paths under `ansible/` are fixed and intentionally absent here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PreflightResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(project_root)
    }
}
