use ratatui::layout::{Constraint, Flex, Layout, Rect};

use super::shell::get_device_area;

/// Centers a popover over the phone frame rather than the full terminal,
/// so modals stay inside the bezel. Percentages are relative to the
/// device area.
pub fn get_popover_area(app_area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let device = get_device_area(app_area);
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(device);
    let [area] = horizontal.areas(area);
    area
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::ui::components::shell::{DEVICE_HEIGHT, DEVICE_WIDTH};

    use super::get_popover_area;

    #[test]
    fn test_popover_centers_within_device() {
        let app_area = Rect::new(0, 0, 80, 50);
        let result = get_popover_area(app_area, 50, 50);

        // device frame is 56x40 centered at (12, 5)
        assert_eq!(result.width, DEVICE_WIDTH / 2);
        assert_eq!(result.height, DEVICE_HEIGHT / 2);
        assert_eq!(result.x, 12 + DEVICE_WIDTH / 4);
        assert_eq!(result.y, 5 + DEVICE_HEIGHT / 4);
    }

    #[test]
    fn test_popover_clamps_to_small_terminals() {
        let app_area = Rect::new(0, 0, 40, 20);
        let result = get_popover_area(app_area, 50, 50);
        assert!(result.width <= 40);
        assert!(result.height <= 20);
    }
}
