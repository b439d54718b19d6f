use std::path::Path;

use crate::ansible_cfg::{AnsibleSettings, WriteOutcome, WriteStatus, ANSIBLE_CFG_TEMPLATE};
use crate::layout::{ANSIBLE_CFG_PATH, PLAYBOOKS};
use crate::process::ANSIBLE;
use crate::setup::{SetupReport, SetupStep, StepOutcome};
use crate::ui::blocks::check_item::status_icon;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::components::diff::render_replacement_diff;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub const SETUP_TITLE: &str = "Ansible Setup";

pub fn render_setup_header(root: &Path, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Setup, SETUP_TITLE);
    header.add("Project", root.display().to_string());
    header.render(supports_color, supports_unicode)
}

pub fn render_step_started(step: SetupStep, supports_color: bool) -> String {
    format!(
        "\n{}\n",
        ColoredText::info(format!("{}. {}", step.number(), step.title()))
            .bold()
            .render(supports_color)
    )
}

pub fn render_step_finished(
    outcome: &StepOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "   {} {}\n",
        status_icon(outcome.status).colored(supports_color, supports_unicode),
        outcome.message
    )
}

/// `key = value` listing of the assembled settings, for `-v`.
pub fn render_settings(settings: &AnsibleSettings, supports_color: bool) -> String {
    let mut out = format!(
        "   {}\n",
        ColoredText::dim("Settings:").render(supports_color)
    );
    for (key, value) in settings.entries() {
        out.push_str(&format!("     {} = {}\n", key, value));
    }
    out
}

/// What the config write did; a replaced file shows a diff against the old content.
pub fn render_config_change(outcome: &WriteOutcome, supports_color: bool) -> String {
    let summary = format!(
        "   {} ({})\n",
        ColoredText::dim(format!("{}: {}", ANSIBLE_CFG_PATH, outcome.status.as_str()))
            .render(supports_color),
        outcome.hash
    );

    match &outcome.status {
        WriteStatus::Replaced { previous } => {
            let diff = render_replacement_diff(
                ANSIBLE_CFG_PATH,
                previous,
                ANSIBLE_CFG_TEMPLATE,
                supports_color,
            );
            format!("{}{}", summary, diff)
        }
        WriteStatus::Created | WriteStatus::Unchanged => summary,
    }
}

pub fn render_setup_summary(
    report: &SetupReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if !report.is_success() {
        let mut summary = ResultSummary::failure("Ansible setup stopped");
        summary.add_next_step(format!("Install Ansible: {}", ANSIBLE.install_advice));
        summary.add_next_step("Then run `ansible-setup` again");
        return summary.render(supports_color, supports_unicode);
    }

    let mut summary = ResultSummary::success("Ansible is configured and ready!");
    for playbook in PLAYBOOKS {
        summary.add_next_step(format!("ansible-playbook {}", playbook));
    }
    summary.render(supports_color, supports_unicode)
}
