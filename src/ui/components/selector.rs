use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

#[derive(Debug, Clone)]
pub struct SelectorState {
    pub selected: usize,
}

impl SelectorState {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn previous(&mut self, len: usize) {
        if len > 0 {
            self.selected = if self.selected == 0 {
                len - 1
            } else {
                self.selected - 1
            };
        }
    }
}

/// A single row of options with the active one highlighted.
pub struct Selector {
    options: Vec<String>,
}

impl Selector {
    pub fn new(options: Vec<String>) -> Self {
        Self { options }
    }
}

impl CustomStatefulWidget for Selector {
    type State = SelectorState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let mut spans: Vec<Span> = Vec::new();

        for (i, option) in self.options.iter().enumerate() {
            let style = if i == state.selected {
                Style::default()
                    .fg(ctx.state.colors.selected_row_fg)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(ctx.state.colors.subtle)
            };

            spans.push(Span::from(format!(" {option} ")).style(style));
            spans.push(Span::from(" "));
        }

        Line::from(spans).render(area, buf);
    }
}
