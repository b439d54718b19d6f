use crate::ui::primitives::icon::Icon;
use crate::verify::{CheckItem, CheckStatus};

pub fn status_icon(status: CheckStatus) -> Icon {
    match status {
        CheckStatus::Pass => Icon::Success,
        CheckStatus::Warning => Icon::Warning,
        CheckStatus::Error => Icon::Error,
    }
}

/// One `  <icon> <name> - <message>` line, plus the recommendation when verbose
/// output or a failure calls for it.
pub fn render_check_line(
    item: &CheckItem,
    verbose: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = status_icon(item.status).colored(supports_color, supports_unicode);

    let mut out = format!("  {} {} - {}\n", icon, item.name, item.message);

    let show_recommendation = verbose || item.status == CheckStatus::Error;
    if let (true, Some(rec)) = (show_recommendation, &item.recommendation) {
        out.push_str(&format!(
            "    {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            rec
        ));
    }

    out
}
