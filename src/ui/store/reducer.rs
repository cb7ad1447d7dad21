use std::sync::{Arc, Mutex};

use crate::{
    config::ConfigManager,
    records::{gen_id, Block, BlockContent, EntryKind, FinanceTransaction, TodoContent},
    ui::colors::{Colors, Theme},
};

use super::{
    action::Action,
    state::{State, ViewID},
};

pub struct Reducer {
    config_manager: Arc<Mutex<ConfigManager>>,
}

impl Reducer {
    pub fn new(config_manager: Arc<Mutex<ConfigManager>>) -> Self {
        Self { config_manager }
    }

    pub fn reduce(&self, prev_state: State, action: Action) -> State {
        let new_state = match action {
            Action::UpdateView(id) => {
                let mut state = prev_state.clone();
                state.view_id = id;
                state
            }
            Action::SelectPage(page_id) => {
                let mut state = prev_state.clone();
                state.view_id = match page_id {
                    Some(_) => ViewID::PageDetail,
                    None => ViewID::Home,
                };
                state.active_page_id = page_id;
                state
            }
            Action::OpenModal(id) => {
                let mut state = prev_state.clone();
                state.modal = Some(id);
                state
            }
            Action::OpenEntryCapture(goal_id) => {
                let mut state = prev_state.clone();
                state.capture_goal_id = goal_id;
                state.modal = Some(super::state::ModalID::EntryCapture);
                state
            }
            Action::CloseModal => {
                let mut state = prev_state.clone();
                state.modal = None;
                state.capture_goal_id = None;
                state
            }
            Action::AddPage(page) => {
                let mut state = prev_state.clone();
                state.pages.insert(0, page);
                state
            }
            Action::AddTodo(text) => {
                let mut state = prev_state.clone();
                if let Some(daily) = state.pages.iter_mut().find(|p| p.is_daily()) {
                    daily.blocks.push(Block {
                        id: gen_id("b"),
                        content: BlockContent::Todo(TodoContent::new(&text)),
                    });
                }
                state
            }
            Action::ToggleTodo { page_id, block_id } => {
                let mut state = prev_state.clone();
                if let Some(page) = state.pages.iter_mut().find(|p| p.id == page_id) {
                    if let Some(block) = page.blocks.iter_mut().find(|b| b.id == block_id) {
                        if let BlockContent::Todo(todo) = &mut block.content {
                            todo.toggle();
                        }
                    }
                }
                state
            }
            Action::AddHabit(habit) => {
                let mut state = prev_state.clone();
                state.habits.insert(0, habit);
                state
            }
            Action::ToggleHabitToday(habit_id) => {
                let mut state = prev_state.clone();
                if let Some(habit) = state.habits.iter_mut().find(|h| h.id == habit_id) {
                    habit.toggle_today();
                }
                state
            }
            Action::SetHabitScale(scale) => {
                let mut state = prev_state.clone();
                state.habit_scale = scale;
                state
            }
            Action::CycleAccount => {
                let mut state = prev_state.clone();
                if !state.accounts.is_empty() {
                    state.active_account = (state.active_account + 1) % state.accounts.len();
                }
                state
            }
            Action::AddContribution { goal_id, amount } => {
                let mut state = prev_state.clone();
                if let Some(goal) = state.goals.iter_mut().find(|g| g.id == goal_id) {
                    goal.current += amount;
                    state.transactions.insert(
                        0,
                        FinanceTransaction {
                            id: gen_id("t"),
                            title: format!("Transfer · {}", goal.name),
                            category: "Goals".to_string(),
                            amount,
                            kind: EntryKind::Expense,
                            date: "Today".to_string(),
                            icon: "🎯".to_string(),
                        },
                    );
                }
                state
            }
            Action::UpdateMessage(message) => {
                let mut state = prev_state.clone();
                state.message = message;
                state
            }
            Action::PreviewTheme(theme) => {
                let mut state = prev_state.clone();
                state.colors = Colors::new(
                    theme.to_palette(state.true_color_enabled),
                    state.true_color_enabled,
                );
                state
            }
            Action::UpdateTheme(theme) => {
                let mut state = prev_state.clone();
                let mut manager = self.config_manager.lock().unwrap();
                manager.update_theme(&state.config.id, &theme);
                state.config.theme = theme.to_string();
                state.colors = Colors::new(
                    theme.to_palette(state.true_color_enabled),
                    state.true_color_enabled,
                );
                state
            }
            Action::SetConfig(config_id) => {
                let mut state = prev_state.clone();
                if let Some(conf) = self
                    .config_manager
                    .lock()
                    .unwrap()
                    .get_by_id(config_id.as_str())
                {
                    let theme = Theme::from_string(&conf.theme);
                    state.config = conf;
                    state.colors = Colors::new(
                        theme.to_palette(state.true_color_enabled),
                        state.true_color_enabled,
                    );
                }
                state
            }
        };

        new_state
    }
}
