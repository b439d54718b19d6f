//! Ansible setup flow
//!
//! Runs four steps in a fixed order and stops early only when Ansible itself is
//! missing:
//! 1. check that Ansible runs
//! 2. write `ansible/ansible.cfg`
//! 3. list the inventory (failure reported, run continues)
//! 4. ping localhost (warning at worst)

mod steps;

use std::path::Path;

use crate::ansible_cfg::{write_ansible_cfg, AnsibleSettings, WriteOutcome};
use crate::config::ToolsConfig;
use crate::error::PreflightResult;
use crate::process::{CommandRunner, ANSIBLE};
use crate::verify::CheckStatus;

pub use steps::{check_ansible, test_connectivity, test_inventory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    CheckInstallation,
    CreateConfig,
    TestInventory,
    TestConnectivity,
}

impl SetupStep {
    pub const ALL: [SetupStep; 4] = [
        SetupStep::CheckInstallation,
        SetupStep::CreateConfig,
        SetupStep::TestInventory,
        SetupStep::TestConnectivity,
    ];

    /// 1-based position shown in progress output.
    pub fn number(self) -> usize {
        match self {
            SetupStep::CheckInstallation => 1,
            SetupStep::CreateConfig => 2,
            SetupStep::TestInventory => 3,
            SetupStep::TestConnectivity => 4,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            SetupStep::CheckInstallation => "check_installation",
            SetupStep::CreateConfig => "create_config",
            SetupStep::TestInventory => "test_inventory",
            SetupStep::TestConnectivity => "test_connectivity",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SetupStep::CheckInstallation => "Checking Ansible installation...",
            SetupStep::CreateConfig => "Creating Ansible configuration...",
            SetupStep::TestInventory => "Testing inventory...",
            SetupStep::TestConnectivity => "Testing connectivity...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: SetupStep,
    pub status: CheckStatus,
    pub message: String,
}

/// Progress notifications emitted while setup runs.
#[derive(Debug)]
pub enum SetupEvent<'a> {
    StepStarted(SetupStep),
    StepFinished(&'a StepOutcome),
}

#[derive(Debug, Clone)]
pub struct SetupReport {
    /// Assembled for diagnostics; `ansible.cfg` is written from the fixed template.
    pub settings: AnsibleSettings,
    pub installed: bool,
    pub config: Option<WriteOutcome>,
    pub steps: Vec<StepOutcome>,
}

impl SetupReport {
    /// Setup succeeds whenever Ansible is present; smoke test results do not count.
    pub fn is_success(&self) -> bool {
        self.installed
    }
}

pub fn run_setup(
    root: &Path,
    tools: &ToolsConfig,
    runner: &impl CommandRunner,
) -> PreflightResult<SetupReport> {
    run_setup_with_callback(root, tools, runner, |_| {})
}

/// Run the setup steps, reporting progress through `on_event`.
///
/// Only a failed `ansible.cfg` write is returned as an error.
pub fn run_setup_with_callback(
    root: &Path,
    tools: &ToolsConfig,
    runner: &impl CommandRunner,
    mut on_event: impl FnMut(SetupEvent<'_>),
) -> PreflightResult<SetupReport> {
    let settings = AnsibleSettings::default();
    tracing::debug!(?settings, "assembled ansible settings");

    let mut report = SetupReport {
        settings,
        installed: false,
        config: None,
        steps: Vec::new(),
    };

    on_event(SetupEvent::StepStarted(SetupStep::CheckInstallation));
    report.installed = check_ansible(root, tools, runner);
    if !report.installed {
        finish(
            &mut report,
            &mut on_event,
            SetupStep::CheckInstallation,
            CheckStatus::Error,
            format!("Ansible not found. Run: {}", ANSIBLE.install_advice),
        );
        return Ok(report);
    }
    finish(
        &mut report,
        &mut on_event,
        SetupStep::CheckInstallation,
        CheckStatus::Pass,
        "Ansible is installed".to_string(),
    );

    on_event(SetupEvent::StepStarted(SetupStep::CreateConfig));
    let outcome = write_ansible_cfg(root)?;
    let message = format!("Created {}", crate::layout::ANSIBLE_CFG_PATH);
    report.config = Some(outcome);
    finish(&mut report, &mut on_event, SetupStep::CreateConfig, CheckStatus::Pass, message);

    on_event(SetupEvent::StepStarted(SetupStep::TestInventory));
    let (status, message) = test_inventory(root, tools, runner);
    finish(&mut report, &mut on_event, SetupStep::TestInventory, status, message);

    on_event(SetupEvent::StepStarted(SetupStep::TestConnectivity));
    let (status, message) = test_connectivity(root, tools, runner);
    finish(&mut report, &mut on_event, SetupStep::TestConnectivity, status, message);

    Ok(report)
}

fn finish(
    report: &mut SetupReport,
    on_event: &mut impl FnMut(SetupEvent<'_>),
    step: SetupStep,
    status: CheckStatus,
    message: String,
) {
    let outcome = StepOutcome {
        step,
        status,
        message,
    };
    on_event(SetupEvent::StepFinished(&outcome));
    report.steps.push(outcome);
}
