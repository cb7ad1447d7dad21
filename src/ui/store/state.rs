use core::fmt;

use crate::{
    config::Config,
    records::{FinanceAccount, FinanceGoal, FinanceTransaction, Habit, Page, TimeScale},
    ui::colors::Colors,
};

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum ViewID {
    Home,
    Tasks,
    Habits,
    Finance,
    PageDetail,
}

impl fmt::Display for ViewID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Capture flows that layer on top of the active view.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum ModalID {
    NoteCapture,
    HabitCapture,
    EntryCapture,
}

impl fmt::Display for ModalID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
impl State {
    pub fn test_default() -> Self {
        use crate::ui::colors::Theme;

        let theme = Theme::Blue;
        Self {
            true_color_enabled: true,
            view_id: ViewID::Home,
            modal: None,
            config: Config::default(),
            colors: Colors::new(theme.to_palette(true), true),
            pages: Vec::new(),
            habits: Vec::new(),
            goals: Vec::new(),
            accounts: Vec::new(),
            transactions: Vec::new(),
            active_page_id: None,
            active_account: 0,
            habit_scale: TimeScale::Weekly,
            capture_goal_id: None,
            message: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct State {
    pub true_color_enabled: bool,
    pub view_id: ViewID,
    pub modal: Option<ModalID>,
    pub config: Config,
    pub colors: Colors,
    pub pages: Vec<Page>,
    pub habits: Vec<Habit>,
    pub goals: Vec<FinanceGoal>,
    pub accounts: Vec<FinanceAccount>,
    pub transactions: Vec<FinanceTransaction>,
    pub active_page_id: Option<String>,
    pub active_account: usize,
    pub habit_scale: TimeScale,
    pub capture_goal_id: Option<String>,
    pub message: Option<String>,
}
