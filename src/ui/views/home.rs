use itertools::Itertools;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::{cell::RefCell, sync::Arc};

use crate::{
    records::{gen_id, Page},
    ui::{
        components::{
            input::{Input, InputState},
            table::{Table, DEFAULT_ITEM_HEIGHT},
        },
        store::{
            action::Action,
            derived::{get_all_todos, get_queue_pages},
            state::{State, ViewID},
            Store,
        },
    },
};

use super::traits::{
    CustomStatefulWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View,
};

pub struct HomeView {
    store: Arc<Store>,
    zap_state: RefCell<InputState>,
    queue_table: RefCell<Table>,
}

impl HomeView {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            zap_state: RefCell::new(InputState::new()),
            queue_table: RefCell::new(Table::new(
                Vec::new(),
                None,
                vec![4, 26, 12],
                DEFAULT_ITEM_HEIGHT,
            )),
        }
    }

    fn submit_zap(&self) {
        let value = self.zap_state.borrow().value.trim().to_string();

        if !value.is_empty() {
            self.store.dispatch(Action::AddPage(Page {
                id: gen_id("p"),
                title: value,
                icon: "⚡".to_string(),
                category: Some("unprocessed".to_string()),
                blocks: Vec::new(),
                updated_at: "Now".to_string(),
            }));
        }

        self.zap_state.borrow_mut().reset();
    }

    // the table owns its selection, so its items must track state both at
    // render time and before handling selection keys
    fn sync_queue_items(&self, state: &State) {
        let items = get_queue_pages(state)
            .iter()
            .map(|p| vec![p.icon.clone(), p.title.clone(), p.updated_at.clone()])
            .collect_vec();
        self.queue_table.borrow_mut().update_items(items);
    }

    fn open_selected_page(&self, state: &State) {
        if let Some(i) = self.queue_table.borrow().selected() {
            let queue = get_queue_pages(state);
            if i < queue.len() {
                self.store
                    .dispatch(Action::SelectPage(Some(queue[i].id.clone())));
            }
        }
    }

    fn render_zap(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let input = Input::with_placeholder("⚡", "Capture a thought... (z)");
        input.render(area, buf, &mut self.zap_state.borrow_mut(), ctx);
    }

    fn render_today(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let todos = get_all_todos(ctx.state);
        let done = todos.iter().filter(|t| t.completed).count();

        let streak = ctx
            .state
            .habits
            .iter()
            .map(|h| h.week_count())
            .max()
            .unwrap_or(0);

        let line = Line::from(vec![
            Span::from("Today  ").style(
                Style::default()
                    .fg(ctx.state.colors.header_text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(format!("{done}/{} focus items", todos.len()))
                .style(Style::default().fg(ctx.state.colors.text)),
            Span::from(format!("   🔥 {streak} day streak"))
                .style(Style::default().fg(ctx.state.colors.warning)),
        ]);

        Paragraph::new(line).render(area, buf);
    }

    fn render_activity(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let mut lines: Vec<Line> = Vec::new();

        for habit in ctx.state.habits.iter() {
            let dots = habit
                .data
                .iter()
                .map(|v| if *v > 0 { "●" } else { "○" })
                .join(" ");

            lines.push(Line::from(vec![
                Span::from(dots).style(Style::default().fg(ctx.state.colors.positive)),
                Span::from(format!("  {}", habit.name))
                    .style(Style::default().fg(ctx.state.colors.subtle)),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }

    fn render_resurfaced(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        // surface the oldest queue page back to the top of the screen
        let queue = get_queue_pages(ctx.state);
        if let Some(page) = queue.last() {
            let line = Line::from(vec![
                Span::from("↺ Resurfaced  ").style(Style::default().fg(ctx.state.colors.label)),
                Span::from(format!("{} {}", page.icon, page.title))
                    .style(Style::default().fg(ctx.state.colors.text)),
            ]);
            Paragraph::new(line).render(area, buf);
        }
    }

    fn render_queue(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let label = Paragraph::new("QUEUE").style(
            Style::default()
                .fg(ctx.state.colors.subtle)
                .add_modifier(Modifier::BOLD),
        );

        let rects = Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).split(area);
        label.render(rects[0], buf);

        self.sync_queue_items(ctx.state);
        self.queue_table.borrow().render_ref(rects[1], buf, ctx);
    }
}

impl View for HomeView {
    fn id(&self) -> ViewID {
        ViewID::Home
    }

    fn legend(&self, _state: &State) -> &str {
        "(z) zap | (j/k) queue | (enter) open page"
    }
}

impl CustomWidgetRef for HomeView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let rects = Layout::vertical([
            Constraint::Length(1), // zap capture
            Constraint::Length(1),
            Constraint::Length(1), // today summary
            Constraint::Length(1),
            Constraint::Length(3), // habit activity
            Constraint::Length(1),
            Constraint::Length(1), // resurfaced page
            Constraint::Length(1),
            Constraint::Min(4), // queue
        ])
        .split(area);

        self.render_zap(rects[0], buf, ctx);
        self.render_today(rects[2], buf, ctx);
        self.render_activity(rects[4], buf, ctx);
        self.render_resurfaced(rects[6], buf, ctx);
        self.render_queue(rects[8], buf, ctx);
    }
}

impl EventHandler for HomeView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;

        if let Event::Key(key) = evt {
            if key.kind != KeyEventKind::Press {
                return false;
            }

            let editing = self.zap_state.borrow().editing;

            if editing {
                match key.code {
                    KeyCode::Esc => {
                        self.zap_state.borrow_mut().reset();
                    }
                    KeyCode::Enter => {
                        self.submit_zap();
                    }
                    KeyCode::Backspace => {
                        self.zap_state.borrow_mut().value.pop();
                    }
                    KeyCode::Char(c) => {
                        self.zap_state.borrow_mut().value.push(c);
                    }
                    _ => {}
                }
                return true;
            }

            self.sync_queue_items(ctx.state);

            match key.code {
                KeyCode::Char('z') => {
                    self.zap_state.borrow_mut().editing = true;
                    handled = true;
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    self.queue_table.borrow_mut().next();
                    handled = true;
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.queue_table.borrow_mut().previous();
                    handled = true;
                }
                KeyCode::Enter => {
                    self.open_selected_page(ctx.state);
                    handled = true;
                }
                _ => {}
            }
        }

        handled
    }
}
