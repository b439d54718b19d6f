//! Setup command implementation

use std::io::Write;

use anyhow::Result;

use crate::error::PreflightError;
use crate::presentation::ColorWhen;
use crate::process::SystemRunner;
use crate::setup::{run_setup_with_callback, SetupEvent, SetupReport};
use crate::ui::context::UiContext;
use crate::ui::json::write_event;
use crate::ui::views::setup::{
    render_config_change, render_settings, render_setup_header, render_setup_summary,
    render_step_finished, render_step_started,
};
use crate::verify::CheckStatus;

pub fn cmd_setup(json: bool, verbose: u8, color: Option<ColorWhen>) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let config = super::load_config(&project_root, json);
    let ui = UiContext::new(json, verbose, color, &config);
    let runner = SystemRunner;

    tracing::info!(root = %project_root.display(), "setting up ansible");

    let mut out = std::io::stdout().lock();

    if ui.json {
        let _ = write_event(
            &mut out,
            &serde_json::json!({
                "event": "start",
                "command": "setup",
                "project": project_root.display().to_string(),
            }),
        );
    } else {
        let _ = write!(
            out,
            "{}",
            render_setup_header(&project_root, ui.color, ui.unicode)
        );
    }

    let result = run_setup_with_callback(&project_root, &config.tools, &runner, |event| {
        match (ui.json, event) {
            (true, SetupEvent::StepStarted(_)) => {}
            (true, SetupEvent::StepFinished(outcome)) => {
                let _ = write_event(
                    &mut out,
                    &serde_json::json!({
                        "event": "step",
                        "command": "setup",
                        "step": outcome.step.id(),
                        "number": outcome.step.number(),
                        "status": outcome.status,
                        "message": outcome.message,
                    }),
                );
            }
            (false, SetupEvent::StepStarted(step)) => {
                let _ = write!(out, "{}", render_step_started(step, ui.color));
                let _ = out.flush();
            }
            (false, SetupEvent::StepFinished(outcome)) => {
                let _ = write!(
                    out,
                    "{}",
                    render_step_finished(outcome, ui.color, ui.unicode)
                );
                let _ = out.flush();
            }
        }
    });

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            if ui.json {
                let _ = write_event(&mut out, &failed_event(&e));
            }
            return Err(e.into());
        }
    };

    if ui.json {
        let _ = write_event(&mut out, &complete_event(&report));
    } else {
        if ui.verbose > 0 {
            let _ = writeln!(out);
            let _ = write!(out, "{}", render_settings(&report.settings, ui.color));
            if let Some(outcome) = &report.config {
                let _ = write!(out, "{}", render_config_change(outcome, ui.color));
            }
        }
        let _ = writeln!(out);
        let _ = write!(
            out,
            "{}",
            render_setup_summary(&report, ui.color, ui.unicode)
        );
    }
    drop(out);

    tracing::info!(
        installed = report.installed,
        steps = report.steps.len(),
        "setup finished"
    );

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

fn complete_event(report: &SetupReport) -> serde_json::Value {
    let config = report.config.as_ref().map(|c| {
        serde_json::json!({
            "path": c.path.display().to_string(),
            "status": c.status.as_str(),
            "hash": c.hash,
        })
    });

    let count = |status: CheckStatus| report.steps.iter().filter(|s| s.status == status).count();

    serde_json::json!({
        "event": "complete",
        "command": "setup",
        "installed": report.installed,
        "errors": count(CheckStatus::Error),
        "warnings": count(CheckStatus::Warning),
        "config": config,
        "settings": report.settings,
        "success": report.is_success(),
    })
}

/// Terminal record when setup aborts with an error instead of a report.
fn failed_event(error: &PreflightError) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "command": "setup",
        "errors": 1,
        "error": error.to_string(),
        "success": false,
    })
}
