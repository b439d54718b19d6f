//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PREFLIGHT_*)
//! 3. Project config (.preflight.toml)
//! 4. User config (<config dir>/ansible-preflight/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, ToolsConfig};
