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
    records::{Habit, TimeScale, HABIT_WEEK_DAYS},
    ui::{
        components::selector::{Selector, SelectorState},
        store::{
            action::Action,
            state::{State, ViewID},
            Store,
        },
    },
};

use super::traits::{
    CustomStatefulWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View,
};

const SCALES: [TimeScale; 4] = [
    TimeScale::Daily,
    TimeScale::Weekly,
    TimeScale::Monthly,
    TimeScale::Yearly,
];

const MONTH_DAYS: usize = 31;
const YEAR_DAYS: u32 = 365;
const YEAR_SEGMENTS: u32 = 12;

pub struct HabitsView {
    store: Arc<Store>,
    selected: RefCell<usize>,
}

impl HabitsView {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            selected: RefCell::new(0),
        }
    }

    fn scale_index(state: &State) -> usize {
        SCALES
            .iter()
            .position(|s| *s == state.habit_scale)
            .unwrap_or(0)
    }

    fn next_scale(&self, state: &State) {
        let idx = (Self::scale_index(state) + 1) % SCALES.len();
        self.store.dispatch(Action::SetHabitScale(SCALES[idx]));
    }

    fn previous_scale(&self, state: &State) {
        let idx = (Self::scale_index(state) + SCALES.len() - 1) % SCALES.len();
        self.store.dispatch(Action::SetHabitScale(SCALES[idx]));
    }

    fn next_habit(&self, state: &State) {
        if !state.habits.is_empty() {
            let idx = (*self.selected.borrow() + 1) % state.habits.len();
            *self.selected.borrow_mut() = idx;
        }
    }

    fn previous_habit(&self, state: &State) {
        if !state.habits.is_empty() {
            let count = state.habits.len();
            let idx = (*self.selected.borrow() + count - 1) % count;
            *self.selected.borrow_mut() = idx;
        }
    }

    fn toggle_selected(&self, state: &State) {
        let idx = *self.selected.borrow();
        if idx < state.habits.len() {
            self.store
                .dispatch(Action::ToggleHabitToday(state.habits[idx].id.clone()));
        }
    }

    /// A month of cells projected from the weekly pattern. Deterministic so
    /// the board is stable across renders.
    fn month_cells(habit: &Habit) -> String {
        (0..MONTH_DAYS)
            .map(|i| {
                if habit.data[i % HABIT_WEEK_DAYS] > 0 {
                    "▪"
                } else {
                    "·"
                }
            })
            .join("")
    }

    fn year_bar(habit: &Habit) -> String {
        let filled = (habit.yearly.min(YEAR_DAYS) * YEAR_SEGMENTS).div_ceil(YEAR_DAYS);
        let mut bar = String::new();
        for i in 0..YEAR_SEGMENTS {
            bar.push(if i < filled { '█' } else { '░' });
        }
        bar
    }

    fn habit_line<'a>(
        &self,
        habit: &Habit,
        selected: bool,
        ctx: &CustomWidgetContext,
    ) -> Line<'a> {
        let name_style = if selected {
            Style::default()
                .fg(ctx.state.colors.selected_row_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ctx.state.colors.text)
        };

        let detail_style = Style::default().fg(ctx.state.colors.positive);
        let meta_style = Style::default().fg(ctx.state.colors.subtle);

        let detail = match ctx.state.habit_scale {
            TimeScale::Daily => {
                let marker = if habit.active_today() { "●" } else { "○" };
                format!("{marker} today")
            }
            TimeScale::Weekly => {
                let dots = habit
                    .data
                    .iter()
                    .map(|v| if *v > 0 { "●" } else { "○" })
                    .join(" ");
                format!("{dots}  {}/{}", habit.week_count(), HABIT_WEEK_DAYS)
            }
            TimeScale::Monthly => format!("{}  {}/30", Self::month_cells(habit), habit.monthly),
            TimeScale::Yearly => {
                format!("{}  {}/{}", Self::year_bar(habit), habit.yearly, YEAR_DAYS)
            }
        };

        Line::from(vec![
            Span::from(format!("{:<12}", habit.name)).style(name_style),
            Span::from(detail).style(detail_style),
            Span::from(format!("  {}", habit.meta)).style(meta_style),
        ])
    }
}

impl View for HabitsView {
    fn id(&self) -> ViewID {
        ViewID::Habits
    }

    fn legend(&self, _state: &State) -> &str {
        "(h/l) scale | (j/k) habit | (space) toggle today"
    }
}

impl CustomWidgetRef for HabitsView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let rects = Layout::vertical([
            Constraint::Length(1), // scale tabs
            Constraint::Length(1),
            Constraint::Min(3), // habits
        ])
        .split(area);

        let selector = Selector::new(SCALES.iter().map(|s| s.to_string()).collect());
        let mut selector_state = SelectorState {
            selected: Self::scale_index(ctx.state),
        };
        selector.render(rects[0], buf, &mut selector_state, ctx);

        let selected = *self.selected.borrow();
        let lines = ctx
            .state
            .habits
            .iter()
            .enumerate()
            .map(|(i, h)| self.habit_line(h, i == selected, ctx))
            .collect_vec();

        Paragraph::new(lines).render(rects[2], buf);
    }
}

impl EventHandler for HabitsView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        let mut handled = false;

        if let Event::Key(key) = evt {
            if key.kind != KeyEventKind::Press {
                return false;
            }

            match key.code {
                KeyCode::Char('l') | KeyCode::Right => {
                    self.next_scale(ctx.state);
                    handled = true;
                }
                KeyCode::Char('h') | KeyCode::Left => {
                    self.previous_scale(ctx.state);
                    handled = true;
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    self.next_habit(ctx.state);
                    handled = true;
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    self.previous_habit(ctx.state);
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
