use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};
use std::{cell::RefCell, sync::Arc};

use crate::{
    records::EntryKind,
    ui::store::{
        action::Action,
        derived::get_grouped_transactions,
        state::{State, ViewID},
        Store,
    },
};

use super::traits::{CustomWidgetContext, CustomWidgetRef, EventHandler, View};

pub struct FinanceView {
    store: Arc<Store>,
    selected_goal: RefCell<usize>,
}

impl FinanceView {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            selected_goal: RefCell::new(0),
        }
    }

    fn next_goal(&self, state: &State) {
        if !state.goals.is_empty() {
            let idx = (*self.selected_goal.borrow() + 1) % state.goals.len();
            *self.selected_goal.borrow_mut() = idx;
        }
    }

    fn previous_goal(&self, state: &State) {
        if !state.goals.is_empty() {
            let count = state.goals.len();
            let idx = (*self.selected_goal.borrow() + count - 1) % count;
            *self.selected_goal.borrow_mut() = idx;
        }
    }

    fn open_entry_capture(&self, state: &State) {
        let idx = *self.selected_goal.borrow();
        if idx < state.goals.len() {
            self.store
                .dispatch(Action::OpenEntryCapture(Some(state.goals[idx].id.clone())));
        }
    }

    fn render_account_card(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        if ctx.state.accounts.is_empty() {
            return;
        }

        let account = &ctx.state.accounts[ctx.state.active_account];
        let accent = ctx
            .state
            .colors
            .tag(&account.color, ctx.state.true_color_enabled);

        let card = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(accent))
            .title(format!(
                " {} ({}/{}) ",
                account.name,
                ctx.state.active_account + 1,
                ctx.state.accounts.len()
            ));

        let inner = card.inner(area);
        card.render(area, buf);

        let lines = vec![
            Line::from(
                Span::from(format!("${:.2}", account.balance)).style(
                    Style::default()
                        .fg(ctx.state.colors.header_text)
                        .add_modifier(Modifier::BOLD),
                ),
            ),
            Line::from(
                Span::from(format!("•••• {}", account.number))
                    .style(Style::default().fg(ctx.state.colors.subtle)),
            ),
        ];

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_goals(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let mut lines = vec![Line::from(Span::from("GOALS").style(
            Style::default()
                .fg(ctx.state.colors.subtle)
                .add_modifier(Modifier::BOLD),
        ))];

        let selected = *self.selected_goal.borrow();

        for (i, goal) in ctx.state.goals.iter().enumerate() {
            let name_style = if i == selected {
                Style::default()
                    .fg(ctx.state.colors.selected_row_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(ctx.state.colors.text)
            };

            let pct = goal.progress();
            let filled = (pct / 10) as usize;
            let bar: String = (0..10).map(|i| if i < filled { '█' } else { '░' }).collect();

            lines.push(Line::from(vec![
                Span::from(format!("{:<16}", goal.name)).style(name_style),
                Span::from(bar).style(
                    Style::default()
                        .fg(ctx.state.colors.tag(&goal.color, ctx.state.true_color_enabled)),
                ),
                Span::from(format!(" {pct}%  ${:.0}/${:.0}", goal.current, goal.target))
                    .style(Style::default().fg(ctx.state.colors.subtle)),
            ]));
        }

        Paragraph::new(lines).render(area, buf);
    }

    fn render_transactions(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let mut lines = vec![Line::from(Span::from("ACTIVITY").style(
            Style::default()
                .fg(ctx.state.colors.subtle)
                .add_modifier(Modifier::BOLD),
        ))];

        for (date, txs) in get_grouped_transactions(ctx.state) {
            lines.push(Line::from(
                Span::from(date).style(Style::default().fg(ctx.state.colors.label)),
            ));

            for tx in txs {
                let amount_style = match tx.kind {
                    EntryKind::Income => Style::default().fg(ctx.state.colors.positive),
                    EntryKind::Expense => Style::default().fg(ctx.state.colors.text),
                };

                lines.push(Line::from(vec![
                    Span::from(format!("  {} {:<24}", tx.icon, tx.title))
                        .style(Style::default().fg(ctx.state.colors.text)),
                    Span::from(format!("{:<14}", tx.category))
                        .style(Style::default().fg(ctx.state.colors.subtle)),
                    Span::from(tx.signed_amount()).style(amount_style),
                ]));
            }
        }

        Paragraph::new(lines).render(area, buf);
    }
}

impl View for FinanceView {
    fn id(&self) -> ViewID {
        ViewID::Finance
    }

    fn legend(&self, _state: &State) -> &str {
        "(space) next account | (h/l) goal | (enter) add entry"
    }
}

impl CustomWidgetRef for FinanceView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let goal_count = ctx.state.goals.len() as u16;

        let rects = Layout::vertical([
            Constraint::Length(4), // account carousel
            Constraint::Length(goal_count + 2),
            Constraint::Min(4), // activity
        ])
        .split(area);

        self.render_account_card(rects[0], buf, ctx);
        self.render_goals(rects[1], buf, ctx);
        self.render_transactions(rects[2], buf, ctx);
    }
}

impl EventHandler for FinanceView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;

        if let Event::Key(key) = evt {
            if key.kind != KeyEventKind::Press {
                return false;
            }

            match key.code {
                KeyCode::Char(' ') => {
                    self.store.dispatch(Action::CycleAccount);
                    handled = true;
                }
                KeyCode::Char('l') | KeyCode::Right => {
                    self.next_goal(ctx.state);
                    handled = true;
                }
                KeyCode::Char('h') | KeyCode::Left => {
                    self.previous_goal(ctx.state);
                    handled = true;
                }
                KeyCode::Enter => {
                    self.open_entry_capture(ctx.state);
                    handled = true;
                }
                _ => {}
            }
        }

        handled
    }
}
