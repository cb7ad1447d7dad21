use ratatui::{
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::Style,
    widgets::{Block, BorderType, Widget},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

pub const DEVICE_WIDTH: u16 = 56;
pub const DEVICE_HEIGHT: u16 = 40;

/// Centered rectangle the phone shell occupies, clamped to the terminal.
pub fn get_device_area(area: Rect) -> Rect {
    let width = DEVICE_WIDTH.min(area.width);
    let height = DEVICE_HEIGHT.min(area.height);
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

/// Content area inside the shell's bezel.
pub fn get_screen_area(device_area: Rect) -> Rect {
    device_area.inner(Margin {
        vertical: 1,
        horizontal: 2,
    })
}

/// The phone bezel. Views render inside it via [`get_screen_area`].
pub struct Shell {}

impl Shell {
    pub fn new() -> Self {
        Self {}
    }
}

impl CustomWidget for Shell {
    fn render(self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext)
    where
        Self: Sized,
    {
        let bezel = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(ctx.state.colors.frame))
            .style(Style::new().bg(ctx.state.colors.buffer_bg))
            .title_top(ratatui::text::Line::from(" ▬▬▬ ").centered())
            .title_bottom(ratatui::text::Line::from(" ─── ").centered());

        bezel.render(area, buf)
    }
}

#[cfg(test)]
mod tests {
    use crate::ui::store::state::State;

    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_device_area_is_centered() {
        let area = Rect::new(0, 0, 120, 50);
        let device = get_device_area(area);
        assert_eq!(device.width, DEVICE_WIDTH);
        assert_eq!(device.height, DEVICE_HEIGHT);
        assert_eq!(device.x, (120 - DEVICE_WIDTH) / 2);
        assert_eq!(device.y, (50 - DEVICE_HEIGHT) / 2);
    }

    #[test]
    fn test_device_area_clamps_to_small_terminals() {
        let area = Rect::new(0, 0, 40, 20);
        let device = get_device_area(area);
        assert_eq!(device.width, 40);
        assert_eq!(device.height, 20);
    }

    #[test]
    fn test_screen_area_sits_inside_bezel() {
        let device = Rect::new(10, 5, DEVICE_WIDTH, DEVICE_HEIGHT);
        let screen = get_screen_area(device);
        assert!(screen.x > device.x);
        assert!(screen.width < device.width);
        assert!(screen.height < device.height);
    }

    #[test]
    fn renders_bezel() {
        let shell = Shell::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 45)).unwrap();
        let state = State::test_default();

        terminal
            .draw(|frame| {
                let ctx = CustomWidgetContext {
                    state: &state,
                    app_area: frame.area(),
                };

                let device = get_device_area(frame.area());
                shell.render(device, frame.buffer_mut(), &ctx);
            })
            .unwrap();

        assert!(terminal.backend().to_string().contains("▬▬▬"));
    }
}
