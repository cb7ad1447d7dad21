use itertools::Itertools;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::{cell::RefCell, sync::Arc};

use crate::ui::{
    components::{
        input::{Input, InputState},
        table::{Table, DEFAULT_ITEM_HEIGHT},
    },
    store::{
        action::Action,
        derived::{get_all_todos, get_note_pages},
        state::{State, ViewID},
        Store,
    },
};

use super::traits::{
    CustomStatefulWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View,
};

pub struct TasksView {
    store: Arc<Store>,
    todo_table: RefCell<Table>,
    new_todo_state: RefCell<InputState>,
}

impl TasksView {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            todo_table: RefCell::new(Table::new(
                Vec::new(),
                None,
                vec![4, 36],
                DEFAULT_ITEM_HEIGHT,
            )),
            new_todo_state: RefCell::new(InputState::new()),
        }
    }

    // keep table items in step with state ahead of selection keys
    fn sync_todo_items(&self, state: &State) {
        let items = get_all_todos(state)
            .iter()
            .map(|t| {
                let marker = if t.completed { "[x]" } else { "[ ]" };
                vec![marker.to_string(), t.text.clone()]
            })
            .collect_vec();
        self.todo_table.borrow_mut().update_items(items);
    }

    fn toggle_selected(&self, state: &State) {
        if let Some(i) = self.todo_table.borrow().selected() {
            let todos = get_all_todos(state);
            if i < todos.len() {
                self.store.dispatch(Action::ToggleTodo {
                    page_id: todos[i].page_id.clone(),
                    block_id: todos[i].block_id.clone(),
                });
            }
        }
    }

    fn submit_new_todo(&self) {
        let value = self.new_todo_state.borrow().value.trim().to_string();

        if !value.is_empty() {
            self.store.dispatch(Action::AddTodo(value));
        }

        self.new_todo_state.borrow_mut().reset();
    }

    fn render_todos(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let label = Paragraph::new("TODOS").style(
            Style::default()
                .fg(ctx.state.colors.subtle)
                .add_modifier(Modifier::BOLD),
        );

        let rects = Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).split(area);
        label.render(rects[0], buf);

        self.sync_todo_items(ctx.state);
        self.todo_table.borrow().render_ref(rects[1], buf, ctx);
    }

    fn render_notes(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let mut lines = vec![Line::from(Span::from("NOTES").style(
            Style::default()
                .fg(ctx.state.colors.subtle)
                .add_modifier(Modifier::BOLD),
        ))];

        for page in get_note_pages(ctx.state) {
            lines.push(Line::from(vec![
                Span::from(format!("{} {}", page.icon, page.title))
                    .style(Style::default().fg(ctx.state.colors.text)),
                Span::from(format!("  {}", page.updated_at))
                    .style(Style::default().fg(ctx.state.colors.subtle)),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }
}

impl View for TasksView {
    fn id(&self) -> ViewID {
        ViewID::Tasks
    }

    fn legend(&self, _state: &State) -> &str {
        "(n) new todo | (space) toggle | (j/k) move"
    }
}

impl CustomWidgetRef for TasksView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let note_count = get_note_pages(ctx.state).len() as u16;

        let rects = Layout::vertical([
            Constraint::Length(1), // new todo input
            Constraint::Length(1),
            Constraint::Min(4), // todos
            Constraint::Length(note_count + 1),
        ])
        .split(area);

        let input = Input::with_placeholder("+", "Add a todo... (n)");
        input.render(rects[0], buf, &mut self.new_todo_state.borrow_mut(), ctx);

        self.render_todos(rects[2], buf, ctx);
        self.render_notes(rects[3], buf, ctx);
    }
}

impl EventHandler for TasksView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;

        if let Event::Key(key) = evt {
            if key.kind != KeyEventKind::Press {
                return false;
            }

            let editing = self.new_todo_state.borrow().editing;

            if editing {
                match key.code {
                    KeyCode::Esc => {
                        self.new_todo_state.borrow_mut().reset();
                    }
                    KeyCode::Enter => {
                        self.submit_new_todo();
                    }
                    KeyCode::Backspace => {
                        self.new_todo_state.borrow_mut().value.pop();
                    }
                    KeyCode::Char(c) => {
                        self.new_todo_state.borrow_mut().value.push(c);
                    }
                    _ => {}
                }
                return true;
            }

            self.sync_todo_items(ctx.state);

            match key.code {
                KeyCode::Char('n') => {
                    self.new_todo_state.borrow_mut().editing = true;
                    handled = true;
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    self.todo_table.borrow_mut().next();
                    handled = true;
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.todo_table.borrow_mut().previous();
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
