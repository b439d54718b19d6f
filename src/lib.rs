//! ansible-preflight - setup and verification for an Ansible deployment directory
//!
//! Two utilities share this library:
//! - `ansible-setup` writes `ansible/ansible.cfg` and smoke-tests the installation
//! - `ansible-verify` checks the inventory, playbooks and deployment values

pub mod ansible_cfg;
pub mod commands;
pub mod config;
pub mod error;
pub mod layout;
pub mod presentation;
pub mod process;
pub mod setup;
pub mod ui;
pub mod verify;

// Re-exports for convenience
pub use ansible_cfg::{write_ansible_cfg, AnsibleSettings, WriteOutcome, ANSIBLE_CFG_TEMPLATE};
pub use config::{Config, ToolsConfig};
pub use error::{PreflightError, PreflightResult};
pub use process::{CommandOutput, CommandRunner, SystemRunner};
pub use setup::{run_setup, run_setup_with_callback, SetupReport, SetupStep};
pub use verify::{run_verify, run_verify_with_callback, CheckItem, CheckStatus, VerifyReport};
