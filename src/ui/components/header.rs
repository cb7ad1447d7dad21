use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

pub struct Header {
    title: String,
    subtitle: Option<String>,
}

impl Header {
    pub fn with_subtitle(title: String, subtitle: String) -> Self {
        Self {
            title,
            subtitle: Some(subtitle),
        }
    }
}

impl CustomWidget for Header {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext)
    where
        Self: Sized,
    {
        let title_style = Style::default()
            .fg(ctx.state.colors.label)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::from(self.title).style(title_style)];

        if let Some(subtitle) = self.subtitle {
            spans.push(Span::from("  "));
            spans.push(Span::from(subtitle).style(Style::default().fg(ctx.state.colors.subtle)));
        }

        let header = Paragraph::new(Line::from(spans));
        header.render(area, buf)
    }
}

#[cfg(test)]
mod tests {
    use crate::ui::store::state::State;

    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn renders_header_component() {
        let header = Header::with_subtitle("pocketdeck".to_string(), "Monday, Jan 1".to_string());
        let mut terminal = Terminal::new(TestBackend::new(80, 3)).unwrap();
        let state = State::test_default();

        terminal
            .draw(|frame| {
                let ctx = CustomWidgetContext {
                    state: &state,
                    app_area: frame.area(),
                };

                header.render(frame.area(), frame.buffer_mut(), &ctx);
            })
            .unwrap();

        let rendered = terminal.backend().to_string();
        assert!(rendered.contains("pocketdeck"));
        assert!(rendered.contains("Monday, Jan 1"));
    }
}
