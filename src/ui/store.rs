use std::sync::{Arc, Mutex};

use crate::{
    config::{ConfigManager, DEFAULT_CONFIG_ID},
    fixtures::Fixtures,
    records::TimeScale,
    ui::colors::Theme,
};

pub mod action;
pub mod derived;
pub mod reducer;
pub mod state;

/**
 * Manages the state of our application
 */
pub struct Store {
    state: Mutex<state::State>,
    reducer: reducer::Reducer,
}

impl Store {
    pub fn new(config_manager: Arc<Mutex<ConfigManager>>, fixtures: Fixtures) -> Self {
        let config = config_manager
            .lock()
            .unwrap()
            .get_by_id(DEFAULT_CONFIG_ID)
            .unwrap();

        let true_color_enabled = match supports_color::on(supports_color::Stream::Stdout) {
            Some(support) => support.has_16m,
            _ => false,
        };

        let theme = Theme::from_string(&config.theme);
        let colors = crate::ui::colors::Colors::new(
            theme.to_palette(true_color_enabled),
            true_color_enabled,
        );

        Self {
            reducer: reducer::Reducer::new(config_manager),
            state: Mutex::new(state::State {
                true_color_enabled,
                view_id: state::ViewID::Home,
                modal: None,
                config,
                colors,
                pages: fixtures.pages,
                habits: fixtures.habits,
                goals: fixtures.goals,
                accounts: fixtures.accounts,
                transactions: fixtures.transactions,
                active_page_id: None,
                active_account: 0,
                habit_scale: TimeScale::Weekly,
                capture_goal_id: None,
                message: None,
            }),
        }
    }

    pub fn dispatch(&self, action: action::Action) {
        let mut prev_state = self.state.lock().unwrap();
        let new_state = self.reducer.reduce(prev_state.clone(), action);
        *prev_state = new_state;
    }

    pub fn get_state(&self) -> state::State {
        self.state.lock().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use nanoid::nanoid;
    use std::fs;

    use crate::{
        fixtures,
        records::{BlockContent, Habit, Page, TimeScale},
        ui::store::{
            action::Action,
            state::{ModalID, ViewID},
        },
    };

    use super::*;

    fn setup() -> (String, Store) {
        fs::create_dir_all("generated").unwrap();
        let tmp_path = format!("generated/{}.yml", nanoid!());
        let conf_manager = Arc::new(Mutex::new(ConfigManager::new(tmp_path.as_str())));
        let store = Store::new(conf_manager, fixtures::load().unwrap());
        (tmp_path, store)
    }

    fn tear_down(conf_path: String) {
        fs::remove_file(conf_path).unwrap();
    }

    #[test]
    fn test_initial_state() {
        let (path, store) = setup();
        let state = store.get_state();
        assert_eq!(state.view_id, ViewID::Home);
        assert_eq!(state.modal, None);
        assert_eq!(state.habit_scale, TimeScale::Weekly);
        assert_eq!(state.active_account, 0);
        assert_eq!(state.pages.len(), 2);
        tear_down(path);
    }

    #[test]
    fn test_view_navigation() {
        let (path, store) = setup();
        store.dispatch(Action::UpdateView(ViewID::Finance));
        assert_eq!(store.get_state().view_id, ViewID::Finance);
        tear_down(path);
    }

    #[test]
    fn test_select_page_opens_and_closes_detail() {
        let (path, store) = setup();

        store.dispatch(Action::SelectPage(Some("1".to_string())));
        let state = store.get_state();
        assert_eq!(state.view_id, ViewID::PageDetail);
        assert_eq!(state.active_page_id, Some("1".to_string()));

        store.dispatch(Action::SelectPage(None));
        let state = store.get_state();
        assert_eq!(state.view_id, ViewID::Home);
        assert_eq!(state.active_page_id, None);
        tear_down(path);
    }

    #[test]
    fn test_toggle_todo_by_page_and_block() {
        let (path, store) = setup();

        store.dispatch(Action::ToggleTodo {
            page_id: "daily".to_string(),
            block_id: "b2".to_string(),
        });

        let state = store.get_state();
        let daily = state.pages.iter().find(|p| p.is_daily()).unwrap();
        let block = daily.blocks.iter().find(|b| b.id == "b2").unwrap();
        match &block.content {
            BlockContent::Todo(todo) => assert!(todo.is_completed()),
            other => panic!("expected todo block, got {:?}", other),
        }
        tear_down(path);
    }

    #[test]
    fn test_toggle_todo_unknown_block_is_noop() {
        let (path, store) = setup();
        let before = store.get_state();
        store.dispatch(Action::ToggleTodo {
            page_id: "daily".to_string(),
            block_id: "nope".to_string(),
        });
        assert_eq!(store.get_state().pages, before.pages);
        tear_down(path);
    }

    #[test]
    fn test_add_todo_targets_daily_page() {
        let (path, store) = setup();

        store.dispatch(Action::AddTodo("Water the plants".to_string()));

        let state = store.get_state();
        let daily = state.pages.iter().find(|p| p.is_daily()).unwrap();
        let last = daily.blocks.last().unwrap();
        match &last.content {
            BlockContent::Todo(todo) => {
                assert_eq!(todo.text, "Water the plants");
                assert!(!todo.is_completed());
            }
            other => panic!("expected todo block, got {:?}", other),
        }
        tear_down(path);
    }

    #[test]
    fn test_add_page_prepends() {
        let (path, store) = setup();
        let page = Page {
            id: "p-new".to_string(),
            title: "Untitled Note".to_string(),
            icon: "⚡".to_string(),
            category: Some("unprocessed".to_string()),
            blocks: vec![],
            updated_at: "Now".to_string(),
        };
        store.dispatch(Action::AddPage(page));
        assert_eq!(store.get_state().pages[0].id, "p-new");
        tear_down(path);
    }

    #[test]
    fn test_add_and_toggle_habit() {
        let (path, store) = setup();

        store.dispatch(Action::AddHabit(Habit::new("Stretching", "Daily")));
        let state = store.get_state();
        assert_eq!(state.habits.len(), 4);
        let id = state.habits[0].id.clone();

        store.dispatch(Action::ToggleHabitToday(id.clone()));
        let state = store.get_state();
        assert!(state.habits[0].active_today());

        store.dispatch(Action::ToggleHabitToday(id));
        assert!(!store.get_state().habits[0].active_today());
        tear_down(path);
    }

    #[test]
    fn test_cycle_account_wraps() {
        let (path, store) = setup();
        store.dispatch(Action::CycleAccount);
        assert_eq!(store.get_state().active_account, 1);
        store.dispatch(Action::CycleAccount);
        assert_eq!(store.get_state().active_account, 2);
        store.dispatch(Action::CycleAccount);
        assert_eq!(store.get_state().active_account, 0);
        tear_down(path);
    }

    #[test]
    fn test_add_contribution_updates_goal_and_records_transaction() {
        let (path, store) = setup();
        let before = store.get_state();
        let goal = before.goals[3].clone();

        store.dispatch(Action::AddContribution {
            goal_id: goal.id.clone(),
            amount: 800.0,
        });

        let state = store.get_state();
        assert_eq!(state.goals[3].current, goal.current + 800.0);
        assert_eq!(state.transactions.len(), before.transactions.len() + 1);
        assert_eq!(state.transactions[0].title, format!("Transfer · {}", goal.name));
        assert_eq!(state.transactions[0].date, "Today");
        tear_down(path);
    }

    #[test]
    fn test_entry_capture_tracks_goal() {
        let (path, store) = setup();

        store.dispatch(Action::OpenEntryCapture(Some("g2".to_string())));
        let state = store.get_state();
        assert_eq!(state.modal, Some(ModalID::EntryCapture));
        assert_eq!(state.capture_goal_id, Some("g2".to_string()));

        store.dispatch(Action::CloseModal);
        let state = store.get_state();
        assert_eq!(state.modal, None);
        assert_eq!(state.capture_goal_id, None);
        tear_down(path);
    }

    #[test]
    fn test_preview_theme_recolors_without_touching_config() {
        let (path, store) = setup();
        store.dispatch(Action::PreviewTheme(Theme::Red));

        let state = store.get_state();
        let expected = crate::ui::colors::Colors::new(
            Theme::Red.to_palette(state.true_color_enabled),
            state.true_color_enabled,
        );
        assert_eq!(state.colors.border_color, expected.border_color);
        assert_eq!(state.config.theme, Theme::Blue.to_string());

        let manager = ConfigManager::new(path.as_str());
        let conf = manager.get_by_id(DEFAULT_CONFIG_ID).unwrap();
        assert_eq!(conf.theme, Theme::Blue.to_string());
        tear_down(path);
    }

    #[test]
    fn test_update_theme_persists_to_config() {
        let (path, store) = setup();
        store.dispatch(Action::UpdateTheme(Theme::Emerald));
        assert_eq!(store.get_state().config.theme, Theme::Emerald.to_string());

        let manager = ConfigManager::new(path.as_str());
        let conf = manager.get_by_id(DEFAULT_CONFIG_ID).unwrap();
        assert_eq!(conf.theme, Theme::Emerald.to_string());
        tear_down(path);
    }
}
