//! Verification report and entry functions

use std::path::Path;

use crate::config::ToolsConfig;
use crate::process::CommandRunner;

use super::checks;
use super::types::{CheckItem, CheckStatus};

fn make_check(
    section: &str,
    name: &str,
    status: CheckStatus,
    message: &str,
    recommendation: Option<&str>,
) -> CheckItem {
    CheckItem {
        section: section.to_string(),
        name: name.to_string(),
        status,
        message: message.to_string(),
        recommendation: recommendation.map(String::from),
    }
}

/// Receives check outcomes in the order they are produced.
pub trait VerifySink {
    fn add_check(&mut self, check: CheckItem);

    fn add_pass(&mut self, section: &str, name: &str, message: &str) {
        self.add_check(make_check(section, name, CheckStatus::Pass, message, None));
    }

    fn add_warning(
        &mut self,
        section: &str,
        name: &str,
        message: &str,
        recommendation: Option<&str>,
    ) {
        self.add_check(make_check(
            section,
            name,
            CheckStatus::Warning,
            message,
            recommendation,
        ));
    }

    fn add_error(
        &mut self,
        section: &str,
        name: &str,
        message: &str,
        recommendation: Option<&str>,
    ) {
        self.add_check(make_check(
            section,
            name,
            CheckStatus::Error,
            message,
            recommendation,
        ));
    }
}

/// Verification results
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    pub checks: Vec<CheckItem>,
}

impl VerifyReport {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn passes(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warnings(&self) -> usize {
        self.count(CheckStatus::Warning)
    }

    /// The error counter that decides the exit code.
    pub fn errors(&self) -> usize {
        self.count(CheckStatus::Error)
    }

    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }
}

impl VerifySink for VerifyReport {
    fn add_check(&mut self, check: CheckItem) {
        self.checks.push(check);
    }
}

/// Run every verification check against `root`.
pub fn run_verify(root: &Path, tools: &ToolsConfig, runner: &impl CommandRunner) -> VerifyReport {
    run_verify_with_callback(root, tools, runner, |_| {})
}

/// Like [`run_verify`], calling `on_check` as each result arrives.
pub fn run_verify_with_callback(
    root: &Path,
    tools: &ToolsConfig,
    runner: &impl CommandRunner,
    on_check: impl FnMut(&CheckItem),
) -> VerifyReport {
    struct CallbackSink<F> {
        report: VerifyReport,
        on_check: F,
    }

    impl<F: FnMut(&CheckItem)> VerifySink for CallbackSink<F> {
        fn add_check(&mut self, check: CheckItem) {
            (self.on_check)(&check);
            self.report.checks.push(check);
        }
    }

    let mut sink = CallbackSink {
        report: VerifyReport::new(),
        on_check,
    };

    checks::check_installation(root, tools, runner, &mut sink);
    checks::check_inventory_exists(root, &mut sink);
    checks::check_playbooks(root, &mut sink);
    checks::check_container_engine(root, tools, runner, &mut sink);
    checks::check_configuration_values(root, &mut sink);

    tracing::debug!(
        passes = sink.report.passes(),
        warnings = sink.report.warnings(),
        errors = sink.report.errors(),
        "verification finished"
    );
    sink.report
}
