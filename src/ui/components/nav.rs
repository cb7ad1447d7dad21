use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::ui::{
    store::state::ViewID,
    views::traits::{CustomWidget, CustomWidgetContext},
};

pub const NAV_ITEMS: [(ViewID, &str); 4] = [
    (ViewID::Home, "⌂ Home"),
    (ViewID::Tasks, "☑ Tasks"),
    (ViewID::Habits, "↻ Habits"),
    (ViewID::Finance, "$ Finance"),
];

/// Bottom navigation bar with the active tab highlighted.
pub struct NavBar {
    active: ViewID,
}

impl NavBar {
    pub fn new(active: ViewID) -> Self {
        Self { active }
    }
}

impl CustomWidget for NavBar {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext)
    where
        Self: Sized,
    {
        let constraints = NAV_ITEMS.map(|_| Constraint::Ratio(1, NAV_ITEMS.len() as u32));
        let rects = Layout::horizontal(constraints).split(area);

        for (i, (id, label)) in NAV_ITEMS.iter().enumerate() {
            let style = if *id == self.active {
                Style::default()
                    .fg(ctx.state.colors.selected_row_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(ctx.state.colors.subtle)
            };

            Paragraph::new(Line::from(*label))
                .style(style)
                .centered()
                .render(rects[i], buf);
        }
    }
}
