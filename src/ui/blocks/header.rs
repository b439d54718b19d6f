use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

/// Command banner: icon and title, an underline rule, then `Label: value` rows.
#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    items: Vec<(String, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.items.push((label.into(), value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let icon = self.icon.render(supports_unicode);
        let rule_width = icon.width() + 1 + self.title.width();
        let rule = if supports_unicode {
            theme::borders::HORIZONTAL
        } else {
            "="
        }
        .repeat(rule_width);

        let mut out = format!(
            "{} {}\n{}\n",
            self.icon.colored(supports_color, supports_unicode),
            ColoredText::info(self.title.as_str())
                .bold()
                .render(supports_color),
            ColoredText::dim(rule).render(supports_color)
        );
        for (label, value) in &self.items {
            out.push_str(&format!("{}: {}\n", label, value));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_ascii_icon_and_rule_when_unicode_unsupported() {
        let mut header = CommandHeader::new(Icon::Verify, "Ansible Configuration Verification");
        header.add("Project", "/srv/chatbot");

        let rendered = header.render(false, false);
        let mut lines = rendered.lines();
        assert_eq!(
            lines.next(),
            Some("[VERIFY] Ansible Configuration Verification")
        );
        assert_eq!(lines.next(), Some("=".repeat(43).as_str()));
        assert_eq!(lines.next(), Some("Project: /srv/chatbot"));
    }
}
