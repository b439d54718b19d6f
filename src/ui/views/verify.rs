use std::path::Path;

use crate::layout::{INVENTORY_PATH, PLAYBOOKS};
use crate::ui::blocks::check_item::render_check_line;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::verify::VerifyReport;

pub const VERIFY_TITLE: &str = "Ansible Configuration Verification";

pub fn render_verify_header(root: &Path, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Verify, VERIFY_TITLE);
    header.add("Project", root.display().to_string());
    header.render(supports_color, supports_unicode)
}

/// Check lines grouped under their section titles, in report order.
pub fn render_verify_report(
    report: &VerifyReport,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    let mut current_section: Option<&str> = None;
    for check in &report.checks {
        if current_section != Some(check.section.as_str()) {
            out.push('\n');
            out.push_str(
                &ColoredText::info(check.section.to_uppercase())
                    .bold()
                    .render(supports_color),
            );
            out.push('\n');
            current_section = Some(check.section.as_str());
        }

        out.push_str(&render_check_line(
            check,
            verbose > 0,
            supports_color,
            supports_unicode,
        ));
    }

    out
}

/// Playbook invocations shown once everything checks out.
pub fn quick_commands() -> Vec<String> {
    let main = PLAYBOOKS[0];
    vec![
        format!(
            "Build:       ansible-playbook -i {} {} --tags build",
            INVENTORY_PATH, main
        ),
        format!(
            "Push:        ansible-playbook -i {} {} --tags push",
            INVENTORY_PATH, main
        ),
        format!("Full deploy: ansible-playbook -i {} {}", INVENTORY_PATH, main),
    ]
}

pub fn render_verify_summary(
    report: &VerifyReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let errors = report.errors();
    let mut summary = if errors == 0 {
        ResultSummary::success("STATUS: ALL CONFIGURATIONS VERIFIED")
    } else {
        ResultSummary::failure(format!("STATUS: {} ERROR(S) FOUND", errors))
    };

    summary.add_stat("passed", report.passes());
    summary.add_stat("warnings", report.warnings());
    summary.add_stat("errors", errors);

    if errors == 0 {
        for command in quick_commands() {
            summary.add_next_step(command);
        }
    } else {
        summary.add_next_step("Fix the errors above and run `ansible-verify` again");
    }

    summary.render(supports_color, supports_unicode)
}
