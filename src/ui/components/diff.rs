use crossterm::style::Stylize;
use similar::{ChangeTag, TextDiff};

use crate::ui::theme;

/// Line-numbered unified diff of a replaced file, for `-v` output.
pub fn render_replacement_diff(path: &str, old: &str, new: &str, supports_color: bool) -> String {
    let diff = TextDiff::from_lines(old, new);
    let width = old
        .lines()
        .count()
        .max(new.lines().count())
        .max(1)
        .to_string()
        .len();

    let mut out = String::new();
    for header in [format!("--- a/{}", path), format!("+++ b/{}", path)] {
        out.push_str(&paint(&header, None, supports_color));
        out.push('\n');
    }

    for change in diff.iter_all_changes() {
        let number = |idx: Option<usize>| {
            idx.map(|i| format!("{:>width$}", i + 1, width = width))
                .unwrap_or_else(|| " ".repeat(width))
        };
        let (old_col, new_col, sign) = match change.tag() {
            ChangeTag::Delete => (number(change.old_index()), number(None), "-"),
            ChangeTag::Insert => (number(None), number(change.new_index()), "+"),
            ChangeTag::Equal => (
                number(change.old_index()),
                number(change.new_index()),
                " ",
            ),
        };

        let value = change.value().trim_end_matches('\n');
        let line = format!("{old_col} {new_col} {sign} {value}");
        out.push_str(&paint(&line, Some(change.tag()), supports_color));
        out.push('\n');
    }

    out
}

/// `None` marks a file header line.
fn paint(s: &str, tag: Option<ChangeTag>, supports_color: bool) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match tag {
        None => theme::colors::INFO,
        Some(ChangeTag::Delete) => theme::colors::ERROR,
        Some(ChangeTag::Insert) => theme::colors::SUCCESS,
        Some(ChangeTag::Equal) => theme::colors::DIM,
    };
    format!("{}", s.with(color))
}
