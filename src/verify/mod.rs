//! Verification of the Ansible deployment configuration
//!
//! Checks, in order:
//! - Ansible is installed (`ansible --version`)
//! - the inventory file exists
//! - each playbook exists and parses as YAML
//! - the container engine answers `--version` (warning only)
//! - the inventory contains every expected `key=value` pair

mod checks;
mod report;
mod types;

pub use checks::{excerpt, parse_ansible_version, ERROR_EXCERPT_CHARS};
pub use report::{run_verify, run_verify_with_callback, VerifyReport, VerifySink};
pub use types::{CheckItem, CheckStatus};

pub const SECTION_INSTALLATION: &str = "Ansible Configuration";
pub const SECTION_VALUES: &str = "Configuration Values";
