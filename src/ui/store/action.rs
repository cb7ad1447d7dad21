use crate::{
    records::{Habit, Page, TimeScale},
    ui::colors::Theme,
};

use super::state::{ModalID, ViewID};

#[derive(Debug)]
pub enum Action {
    UpdateView(ViewID),
    SelectPage(Option<String>),
    OpenModal(ModalID),
    OpenEntryCapture(Option<String>),
    CloseModal,
    AddPage(Page),
    AddTodo(String),
    ToggleTodo { page_id: String, block_id: String },
    AddHabit(Habit),
    ToggleHabitToday(String),
    SetHabitScale(TimeScale),
    CycleAccount,
    AddContribution { goal_id: String, amount: f64 },
    UpdateMessage(Option<String>),
    PreviewTheme(Theme),
    UpdateTheme(Theme),
    SetConfig(String),
}
