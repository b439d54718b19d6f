//! Individual setup steps

use std::path::Path;

use crate::config::ToolsConfig;
use crate::layout::INVENTORY_PATH;
use crate::process::CommandRunner;
use crate::verify::CheckStatus;

/// Marker Ansible's ping module prints for a reachable host.
const PING_MARKER: &str = "pong";

/// Whether the automation tool can be run at all.
///
/// A binary that fails to start and one that exits non-zero are treated the same.
pub fn check_ansible(root: &Path, tools: &ToolsConfig, runner: &impl CommandRunner) -> bool {
    match runner.run(&tools.ansible, &["--version"], root) {
        Ok(out) => out.success(),
        Err(e) => {
            tracing::debug!(error = %e, "ansible presence check failed");
            false
        }
    }
}

/// List the inventory. Failures are reported, never raised.
pub fn test_inventory(
    root: &Path,
    tools: &ToolsConfig,
    runner: &impl CommandRunner,
) -> (CheckStatus, String) {
    let args = ["-i", INVENTORY_PATH, "--list"];
    match runner.run(&tools.ansible_inventory, &args, root) {
        Ok(out) if out.success() => (
            CheckStatus::Pass,
            "Inventory configured successfully".to_string(),
        ),
        Ok(out) => (
            CheckStatus::Error,
            format!("Inventory error: {}", out.stderr.trim()),
        ),
        Err(e) => (
            CheckStatus::Error,
            format!("Error testing inventory: {}", e),
        ),
    }
}

/// Ad-hoc ping against localhost. Best effort: never worse than a warning.
pub fn test_connectivity(
    root: &Path,
    tools: &ToolsConfig,
    runner: &impl CommandRunner,
) -> (CheckStatus, String) {
    let args = ["-i", INVENTORY_PATH, "localhost", "-m", "ping"];
    match runner.run(&tools.ansible, &args, root) {
        Ok(out) if out.stdout.contains(PING_MARKER) || out.success() => (
            CheckStatus::Pass,
            "Ansible connectivity test passed".to_string(),
        ),
        Ok(out) => (
            CheckStatus::Warning,
            format!("Connectivity check: {}", out.stdout.trim()),
        ),
        Err(e) => (CheckStatus::Warning, format!("Connectivity test: {}", e)),
    }
}
