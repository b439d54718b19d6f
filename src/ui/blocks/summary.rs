use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    next_steps: Vec<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            success: true,
            stats: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub fn failure(title: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::success(title)
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    pub fn add_next_step(&mut self, hint: impl Into<String>) {
        self.next_steps.push(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon, title) = if self.success {
            (
                BoxStyle::Success,
                Icon::Success,
                ColoredText::success(self.title.as_str()),
            )
        } else {
            (
                BoxStyle::Error,
                Icon::Error,
                ColoredText::error(self.title.as_str()),
            )
        };

        let header = format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        );

        let mut b = Box::with_title(header).style(style);

        if !self.stats.is_empty() {
            b.add_empty();
            for (label, count) in &self.stats {
                b.add_line(format!("{} {}", count, label));
            }
        }

        if !self.next_steps.is_empty() {
            b.add_empty();
            b.add_line(ColoredText::dim("Next:").render(supports_color));
            for step in &self.next_steps {
                b.add_line(format!(
                    "{} {}",
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    step
                ));
            }
        }

        b.render(supports_color, supports_unicode)
    }
}
