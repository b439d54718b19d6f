//! Verify command implementation

use anyhow::Result;

use crate::presentation::ColorWhen;
use crate::process::SystemRunner;
use crate::ui::context::UiContext;
use crate::ui::json::write_event;
use crate::ui::views::verify::{render_verify_header, render_verify_report, render_verify_summary};
use crate::verify::{run_verify, run_verify_with_callback, VerifyReport};

pub fn cmd_verify(json: bool, verbose: u8, color: Option<ColorWhen>) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let config = super::load_config(&project_root, json);
    let ui = UiContext::new(json, verbose, color, &config);
    let runner = SystemRunner;

    tracing::info!(root = %project_root.display(), "verifying ansible configuration");

    let report = if ui.json {
        let mut out = std::io::stdout().lock();
        let _ = write_event(
            &mut out,
            &serde_json::json!({
                "event": "start",
                "command": "verify",
                "project": project_root.display().to_string(),
            }),
        );

        let report = run_verify_with_callback(&project_root, &config.tools, &runner, |check| {
            let _ = write_event(
                &mut out,
                &serde_json::json!({
                    "event": "check",
                    "command": "verify",
                    "section": check.section,
                    "name": check.name,
                    "status": check.status,
                    "message": check.message,
                    "recommendation": check.recommendation,
                }),
            );
        });

        let _ = write_event(&mut out, &complete_event(&report));
        report
    } else {
        print!(
            "{}",
            render_verify_header(&project_root, ui.color, ui.unicode)
        );
        let report = run_verify(&project_root, &config.tools, &runner);
        print!(
            "{}",
            render_verify_report(&report, ui.verbose, ui.color, ui.unicode)
        );
        println!();
        print!("{}", render_verify_summary(&report, ui.color, ui.unicode));
        report
    };

    tracing::info!(
        passes = report.passes(),
        warnings = report.warnings(),
        errors = report.errors(),
        "verification finished"
    );

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

fn complete_event(report: &VerifyReport) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "command": "verify",
        "passes": report.passes(),
        "warnings": report.warnings(),
        "errors": report.errors(),
        "success": report.is_success(),
    })
}
