use std::cell::RefCell;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::Text,
    widgets::{
        Cell, HighlightSpacing, Row, ScrollbarState, StatefulWidget, Table as RatatuiTable,
        TableState,
    },
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext, CustomWidgetRef};

use super::scrollbar::ScrollBar;

pub const DEFAULT_ITEM_HEIGHT: usize = 1;
pub const COLUMN_MAX_WIDTH: u16 = 50;
const ELLIPSIS: &str = "…";

pub struct Table {
    headers: Option<Vec<String>>,
    items: Vec<Vec<String>>,
    item_height: usize,
    column_sizes: Vec<usize>,
    table_state: RefCell<TableState>,
    scroll_state: RefCell<ScrollbarState>,
}

impl Table {
    pub fn new(
        items: Vec<Vec<String>>,
        headers: Option<Vec<String>>,
        column_sizes: Vec<usize>,
        item_height: usize,
    ) -> Self {
        let mut scroll_height = item_height;

        if !items.is_empty() {
            scroll_height = (items.len() - 1) * item_height;
        }

        Self {
            headers,
            column_sizes,
            items,
            item_height,
            table_state: RefCell::new(TableState::new()),
            scroll_state: RefCell::new(ScrollbarState::new(scroll_height)),
        }
    }

    pub fn update_items(&mut self, items: Vec<Vec<String>>) -> Option<usize> {
        let mut selected: Option<usize> = None;
        let selection_opt = self.table_state.borrow().selected();

        if let Some(current_selected) = selection_opt {
            selected = Some(current_selected);

            if current_selected >= items.len() && !items.is_empty() {
                let new_idx = items.len() - 1;
                selected = Some(new_idx);
                self.table_state.borrow_mut().select(selected);
                let new_scroll_state = self
                    .scroll_state
                    .borrow_mut()
                    .position(new_idx * self.item_height);
                self.scroll_state = RefCell::new(new_scroll_state);
            }
        }

        self.items = items;
        selected
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.borrow().selected()
    }

    pub fn next(&mut self) -> usize {
        if self.items.is_empty() {
            return 0;
        }

        let i = match self.table_state.borrow().selected() {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        };

        self.table_state.borrow_mut().select(Some(i));

        let new_scroll_state = self
            .scroll_state
            .borrow_mut()
            .position(i * self.item_height);

        self.scroll_state = RefCell::new(new_scroll_state);

        i
    }

    pub fn previous(&mut self) -> usize {
        if self.items.is_empty() {
            return 0;
        }

        let i = match self.table_state.borrow().selected() {
            Some(i) => {
                if i == 0 {
                    self.items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };

        self.table_state.borrow_mut().select(Some(i));

        let new_scroll_state = self.scroll_state.borrow().position(i * self.item_height);

        self.scroll_state = RefCell::new(new_scroll_state);

        i
    }
}

impl CustomWidgetRef for Table {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        // main table view + right aligned scrollbar
        let table_rects =
            Layout::horizontal([Constraint::Min(5), Constraint::Length(3)]).split(area);

        if table_rects[0].width < 1 || table_rects[0].height < 1 {
            return;
        }

        let header = self.headers.as_ref().map(|hs| {
            let header_style = Style::default()
                .fg(ctx.state.colors.header_text)
                .bg(ctx.state.colors.buffer_bg)
                .add_modifier(Modifier::BOLD);

            hs.iter()
                .map(|h| Cell::from(h.clone()))
                .collect::<Row>()
                .style(header_style)
                .height(1)
        });

        let selected_style = Style::default()
            .add_modifier(Modifier::REVERSED)
            .fg(ctx.state.colors.selected_row_fg);

        let rows = self.items.iter().map(|data| {
            let item = fit_to_width(data, self.column_sizes.clone());

            item.into_iter()
                .map(|content| Cell::from(Text::from(content)))
                .collect::<Row>()
                .style(
                    Style::new()
                        .fg(ctx.state.colors.text)
                        .bg(ctx.state.colors.row_bg),
                )
                .height(self.item_height as u16)
        });

        let mut widths: Vec<Constraint> = Vec::new();

        for _ in self.column_sizes.iter() {
            widths.push(Constraint::Max(COLUMN_MAX_WIDTH));
        }

        let mut t = RatatuiTable::new(rows, widths)
            .row_highlight_style(selected_style)
            .bg(ctx.state.colors.buffer_bg)
            .highlight_spacing(HighlightSpacing::Always);

        if let Some(h) = header {
            t = t.header(h);
        }

        t.render(table_rects[0], buf, &mut self.table_state.borrow_mut());

        let scrollbar = ScrollBar::new();
        let mut scroll_state = self.scroll_state.borrow_mut();
        scrollbar.render(table_rects[1], buf, &mut scroll_state, ctx);
    }
}

// Truncation walks chars and sums display widths; cell text is user input
// and a byte-index cut could land inside a multi-byte char.
fn fit_to_width(item: &[String], col_widths: Vec<usize>) -> Vec<String> {
    item.iter()
        .enumerate()
        .map(|(i, v)| {
            let col_width = col_widths[i];

            if v.width() < col_width {
                return v.clone();
            }

            let budget = col_width.saturating_sub(ELLIPSIS.width());
            let mut value = String::new();
            let mut used = 0;

            for c in v.chars() {
                let w = c.width().unwrap_or(0);
                if used + w > budget {
                    break;
                }
                used += w;
                value.push(c);
            }

            value.push_str(ELLIPSIS);
            value
        })
        .collect::<Vec<String>>()
}
