use itertools::Itertools;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use std::{cell::RefCell, sync::Arc};

use crate::{
    records::BlockContent,
    ui::{
        components::field::Field,
        store::{
            action::Action,
            derived::get_active_page,
            state::{State, ViewID},
            Store,
        },
    },
};

use super::traits::{CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View};

pub struct PageDetailView {
    store: Arc<Store>,
    selected_todo: RefCell<usize>,
}

impl PageDetailView {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            selected_todo: RefCell::new(0),
        }
    }

    fn todo_block_ids(state: &State) -> Vec<(String, String)> {
        match get_active_page(state) {
            Some(page) => page
                .blocks
                .iter()
                .filter(|b| matches!(b.content, BlockContent::Todo(_)))
                .map(|b| (page.id.clone(), b.id.clone()))
                .collect_vec(),
            None => Vec::new(),
        }
    }

    fn next_todo(&self, state: &State) {
        let count = Self::todo_block_ids(state).len();
        if count > 0 {
            let idx = (*self.selected_todo.borrow() + 1) % count;
            *self.selected_todo.borrow_mut() = idx;
        }
    }

    fn previous_todo(&self, state: &State) {
        let count = Self::todo_block_ids(state).len();
        if count > 0 {
            let idx = (*self.selected_todo.borrow() + count - 1) % count;
            *self.selected_todo.borrow_mut() = idx;
        }
    }

    fn toggle_selected(&self, state: &State) {
        let todos = Self::todo_block_ids(state);
        let idx = *self.selected_todo.borrow();
        if idx < todos.len() {
            let (page_id, block_id) = todos[idx].clone();
            self.store.dispatch(Action::ToggleTodo { page_id, block_id });
        }
    }

    fn go_back(&self) {
        *self.selected_todo.borrow_mut() = 0;
        self.store.dispatch(Action::SelectPage(None));
    }
}

impl View for PageDetailView {
    fn id(&self) -> ViewID {
        ViewID::PageDetail
    }

    fn legend(&self, _state: &State) -> &str {
        "(esc) back | (j/k) move | (space) toggle todo"
    }
}

impl CustomWidgetRef for PageDetailView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let page = match get_active_page(ctx.state) {
            Some(page) => page,
            None => return,
        };

        let rects = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Length(1), // updated field
            Constraint::Length(1),
            Constraint::Min(3), // blocks
        ])
        .split(area);

        let title = Paragraph::new(Line::from(
            Span::from(format!("{} {}", page.icon, page.title)).style(
                Style::default()
                    .fg(ctx.state.colors.header_text)
                    .add_modifier(Modifier::BOLD),
            ),
        ));
        title.render(rects[0], buf);

        let updated = Field::new("Updated", page.updated_at.clone());
        updated.render(rects[1], buf, ctx);

        let mut lines: Vec<Line> = Vec::new();

        let selected = *self.selected_todo.borrow();
        let mut todo_idx = 0;

        for block in page.blocks.iter() {
            match &block.content {
                BlockContent::Heading(text) => {
                    lines.push(Line::from(Span::from(text.clone()).style(
                        Style::default()
                            .fg(ctx.state.colors.label)
                            .add_modifier(Modifier::BOLD),
                    )));
                }
                BlockContent::Text(text) => {
                    lines.push(Line::from(
                        Span::from(text.clone()).style(Style::default().fg(ctx.state.colors.text)),
                    ));
                }
                BlockContent::Todo(todo) => {
                    let marker = if todo.is_completed() { "[x]" } else { "[ ]" };

                    let style = if todo_idx == selected {
                        Style::default()
                            .fg(ctx.state.colors.selected_row_fg)
                            .add_modifier(Modifier::BOLD)
                    } else if todo.is_completed() {
                        Style::default()
                            .fg(ctx.state.colors.subtle)
                            .add_modifier(Modifier::CROSSED_OUT)
                    } else {
                        Style::default().fg(ctx.state.colors.text)
                    };

                    lines.push(Line::from(
                        Span::from(format!("{marker} {}", todo.text)).style(style),
                    ));
                    todo_idx += 1;
                }
                BlockContent::HabitWidget => {
                    lines.push(Line::from(
                        Span::from("[habit tracker]")
                            .style(Style::default().fg(ctx.state.colors.subtle)),
                    ));
                }
                BlockContent::FinanceWidget => {
                    lines.push(Line::from(
                        Span::from("[portfolio]")
                            .style(Style::default().fg(ctx.state.colors.subtle)),
                    ));
                }
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(rects[3], buf);
    }
}

impl EventHandler for PageDetailView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;

        if let Event::Key(key) = evt {
            if key.kind != KeyEventKind::Press {
                return false;
            }

            match key.code {
                KeyCode::Esc | KeyCode::Backspace => {
                    self.go_back();
                    handled = true;
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    self.next_todo(ctx.state);
                    handled = true;
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.previous_todo(ctx.state);
                    handled = true;
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.toggle_selected(ctx.state);
                    handled = true;
                }
                _ => {}
            }
        }

        handled
    }
}
