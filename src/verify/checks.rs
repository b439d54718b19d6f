//! Individual verification checks
//!
//! Each check converts every failure it can hit into a check item. Nothing here
//! returns an error to the caller.

use std::path::Path;

use crate::config::ToolsConfig;
use crate::layout::{EXPECTED_VALUES, INVENTORY_PATH, PLAYBOOKS};
use crate::process::{CommandRunner, ANSIBLE, DOCKER};

use super::report::VerifySink;
use super::{SECTION_INSTALLATION, SECTION_VALUES};

/// Longest parse-error excerpt shown for an invalid playbook.
pub const ERROR_EXCERPT_CHARS: usize = 40;

pub fn check_installation(
    root: &Path,
    tools: &ToolsConfig,
    runner: &impl CommandRunner,
    sink: &mut impl VerifySink,
) {
    let install_hint = format!("Run: {}", ANSIBLE.install_advice);

    match runner.run(&tools.ansible, &["--version"], root) {
        Ok(out) if out.success() => {
            let message = match parse_ansible_version(&out.stdout) {
                Some(version) => format!("{} is installed", version),
                None => "installed".to_string(),
            };
            sink.add_pass(SECTION_INSTALLATION, ANSIBLE.name, &message);
        }
        Ok(out) => {
            tracing::debug!(code = ?out.code, stderr = %out.stderr.trim(), "ansible --version failed");
            sink.add_error(
                SECTION_INSTALLATION,
                ANSIBLE.name,
                "not installed",
                Some(install_hint.as_str()),
            );
        }
        Err(e) => {
            tracing::debug!(error = %e, "ansible is not runnable");
            sink.add_error(
                SECTION_INSTALLATION,
                ANSIBLE.name,
                "not installed",
                Some(install_hint.as_str()),
            );
        }
    }
}

pub fn check_inventory_exists(root: &Path, sink: &mut impl VerifySink) {
    if root.join(INVENTORY_PATH).exists() {
        sink.add_pass(SECTION_INSTALLATION, INVENTORY_PATH, "inventory file exists");
    } else {
        sink.add_error(
            SECTION_INSTALLATION,
            INVENTORY_PATH,
            "Inventory file not found",
            None,
        );
    }
}

pub fn check_playbooks(root: &Path, sink: &mut impl VerifySink) {
    for playbook in PLAYBOOKS {
        let path = root.join(playbook);
        if !path.exists() {
            sink.add_error(SECTION_INSTALLATION, playbook, "file not found", None);
            continue;
        }

        match validate_yaml_file(&path) {
            Ok(()) => sink.add_pass(SECTION_INSTALLATION, playbook, "valid YAML"),
            Err(reason) => sink.add_error(
                SECTION_INSTALLATION,
                playbook,
                &format!("YAML Error: {}", excerpt(&reason, ERROR_EXCERPT_CHARS)),
                None,
            ),
        }
    }
}

/// Soft check: a missing container engine is only a warning.
pub fn check_container_engine(
    root: &Path,
    tools: &ToolsConfig,
    runner: &impl CommandRunner,
    sink: &mut impl VerifySink,
) {
    let available = match runner.run(&tools.docker, &["--version"], root) {
        Ok(out) => out.success(),
        Err(e) => {
            tracing::debug!(error = %e, "container engine is not runnable");
            false
        }
    };

    if available {
        sink.add_pass(SECTION_INSTALLATION, DOCKER.name, "installed and accessible");
    } else {
        sink.add_warning(
            SECTION_INSTALLATION,
            DOCKER.name,
            "not verified (may need to be in PATH)",
            Some(DOCKER.install_advice),
        );
    }
}

pub fn check_configuration_values(root: &Path, sink: &mut impl VerifySink) {
    let content = match std::fs::read_to_string(root.join(INVENTORY_PATH)) {
        Ok(c) => c,
        Err(e) => {
            sink.add_error(
                SECTION_VALUES,
                "Inventory",
                &format!("Error reading configuration: {}", e),
                None,
            );
            return;
        }
    };

    for expected in EXPECTED_VALUES {
        if expected.is_present_in(&content) {
            sink.add_pass(SECTION_VALUES, expected.label, "configured");
        } else {
            sink.add_error(
                SECTION_VALUES,
                expected.label,
                "NOT found",
                Some(format!("Add `{}` to {}", expected.needle, INVENTORY_PATH).as_str()),
            );
        }
    }
}

/// Read and parse a file as YAML, returning the failure text on error.
fn validate_yaml_file(path: &Path) -> Result<(), String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    // An empty stream is a valid (null) document.
    if content.trim().is_empty() {
        return Ok(());
    }
    // Syntax only: duplicate keys and other semantic issues are not rejected.
    serde_yaml_ng::from_str::<serde::de::IgnoredAny>(&content)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Extract the version from `ansible --version` output.
///
/// Handles both `ansible [core 2.16.3]` and the older `ansible 2.9.6` forms.
pub fn parse_ansible_version(stdout: &str) -> Option<String> {
    let first = stdout.lines().next()?.trim();
    let rest = first.strip_prefix("ansible")?.trim_start();
    let rest = rest.strip_prefix("[core").unwrap_or(rest);
    let version = rest.split_whitespace().next()?.trim_end_matches(']');

    if version.starts_with(|c: char| c.is_ascii_digit()) {
        Some(version.to_string())
    } else {
        None
    }
}

/// First `max_chars` characters of `text`.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
