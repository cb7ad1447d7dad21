use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// A labeled metadata line, colored from the active palette.
pub struct Field {
    key: String,
    value: String,
}

impl Field {
    pub fn new(key: &str, value: String) -> Self {
        Self {
            key: String::from(key),
            value,
        }
    }
}

impl CustomWidget for Field {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext)
    where
        Self: Sized,
    {
        let key = Span::from(format!("{0}: ", self.key))
            .style(Style::default().fg(ctx.state.colors.label));
        let value = Span::from(self.value).style(Style::default().fg(ctx.state.colors.subtle));
        let field = Paragraph::new(Line::from(vec![key, value])).wrap(Wrap { trim: true });
        field.render(area, buf)
    }
}
