use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

#[derive(Debug, Clone)]
pub struct InputState {
    pub editing: bool,
    pub value: String,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            editing: false,
            value: String::new(),
        }
    }

    pub fn reset(&mut self) {
        self.editing = false;
        self.value.clear();
    }
}

pub struct Input {
    label: String,
    placeholder: String,
}

impl Input {
    pub fn with_placeholder(label: &str, placeholder: &str) -> Self {
        Self {
            label: String::from(label),
            placeholder: String::from(placeholder),
        }
    }
}

impl CustomStatefulWidget for Input {
    type State = InputState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let label = Span::from(format!("{0}: ", self.label));

        let value = if state.value.is_empty() && !state.editing {
            Span::from(self.placeholder).style(Style::default().fg(ctx.state.colors.subtle))
        } else {
            let mut style = Style::default();
            if state.editing {
                style = style.fg(ctx.state.colors.input_editing);
            }
            Span::from(state.value.clone()).style(style)
        };

        let line = Line::from(vec![label, value]);
        line.render(area, buf);
    }
}
