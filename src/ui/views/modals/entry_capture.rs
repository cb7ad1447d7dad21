use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Clear, Padding, Widget},
};
use std::{cell::RefCell, sync::Arc};

use crate::ui::{
    components::{
        input::{Input, InputState},
        popover::get_popover_area,
        selector::{Selector, SelectorState},
    },
    store::{action::Action, state::State, Store},
};

use super::super::traits::{
    CustomStatefulWidget, CustomWidgetContext, CustomWidgetRef, EventHandler,
};

/// Goal contribution capture. The target goal is preselected when the flow
/// is opened from a goal card; the amount must parse to a positive number.
pub struct EntryCaptureView {
    store: Arc<Store>,
    amount_state: RefCell<InputState>,
    // None until the user overrides the preselected goal
    goal_override: RefCell<Option<usize>>,
}

impl EntryCaptureView {
    pub fn new(store: Arc<Store>) -> Self {
        let view = Self {
            store,
            amount_state: RefCell::new(InputState::new()),
            goal_override: RefCell::new(None),
        };
        view.amount_state.borrow_mut().editing = true;
        view
    }

    fn reset(&self) {
        self.amount_state.borrow_mut().reset();
        self.amount_state.borrow_mut().editing = true;
        *self.goal_override.borrow_mut() = None;
    }

    fn goal_index(&self, state: &State) -> usize {
        if let Some(idx) = *self.goal_override.borrow() {
            return idx;
        }

        state
            .capture_goal_id
            .as_ref()
            .and_then(|id| state.goals.iter().position(|g| &g.id == id))
            .unwrap_or(0)
    }

    fn next_goal(&self, state: &State) {
        if !state.goals.is_empty() {
            let idx = (self.goal_index(state) + 1) % state.goals.len();
            *self.goal_override.borrow_mut() = Some(idx);
        }
    }

    fn previous_goal(&self, state: &State) {
        if !state.goals.is_empty() {
            let count = state.goals.len();
            let idx = (self.goal_index(state) + count - 1) % count;
            *self.goal_override.borrow_mut() = Some(idx);
        }
    }

    fn save(&self, state: &State) {
        let amount = self
            .amount_state
            .borrow()
            .value
            .trim()
            .parse::<f64>()
            .unwrap_or(0.0);

        if amount <= 0.0 {
            return;
        }

        let idx = self.goal_index(state);
        if idx >= state.goals.len() {
            return;
        }

        let goal = &state.goals[idx];
        self.store.dispatch(Action::AddContribution {
            goal_id: goal.id.clone(),
            amount,
        });
        self.store.dispatch(Action::UpdateMessage(Some(format!(
            "Added ${amount:.2} to {}",
            goal.name
        ))));
        self.store.dispatch(Action::CloseModal);
        self.reset();
    }

    fn close(&self) {
        self.store.dispatch(Action::CloseModal);
        self.reset();
    }
}

impl CustomWidgetRef for EntryCaptureView {
    fn render_ref(&self, _area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let area = get_popover_area(ctx.app_area, 60, 35);

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .style(Style::default().bg(ctx.state.colors.buffer_bg))
            .padding(Padding::uniform(1))
            .title(" Add to Goal ");

        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);

        let rects = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let amount = Input::with_placeholder("Amount", "0.00");
        amount.render(rects[0], buf, &mut self.amount_state.borrow_mut(), ctx);

        let selector = Selector::new(ctx.state.goals.iter().map(|g| g.name.clone()).collect());
        let mut selector_state = SelectorState {
            selected: self.goal_index(ctx.state),
        };
        selector.render(rects[2], buf, &mut selector_state, ctx);
    }
}

impl EventHandler for EntryCaptureView {
    fn process_event(&self, evt: &Event, ctx: &CustomWidgetContext) -> bool {
        if let Event::Key(key) = evt {
            if key.kind != KeyEventKind::Press {
                return true;
            }

            match key.code {
                KeyCode::Esc => self.close(),
                KeyCode::Enter => self.save(ctx.state),
                KeyCode::Right => self.next_goal(ctx.state),
                KeyCode::Left => self.previous_goal(ctx.state),
                KeyCode::Backspace => {
                    self.amount_state.borrow_mut().value.pop();
                }
                KeyCode::Char(c) => {
                    // only numeric input makes sense here
                    if c.is_ascii_digit() || c == '.' {
                        self.amount_state.borrow_mut().value.push(c);
                    }
                }
                _ => {}
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use nanoid::nanoid;
    use std::{fs, sync::Mutex};

    use crate::{
        config::ConfigManager,
        fixtures,
        ui::store::state::ModalID,
    };

    use super::*;

    fn setup() -> (String, Arc<Store>) {
        fs::create_dir_all("generated").unwrap();
        let tmp_path = format!("generated/{}.yml", nanoid!());
        let conf_manager = Arc::new(Mutex::new(ConfigManager::new(tmp_path.as_str())));
        let store = Arc::new(Store::new(conf_manager, fixtures::load().unwrap()));
        (tmp_path, store)
    }

    fn tear_down(conf_path: String) {
        fs::remove_file(conf_path).unwrap();
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(ratatui::crossterm::event::KeyEvent::new(
            code,
            ratatui::crossterm::event::KeyModifiers::empty(),
        ))
    }

    fn ctx_for(state: &State) -> CustomWidgetContext {
        CustomWidgetContext {
            state,
            app_area: Rect::new(0, 0, 80, 30),
        }
    }

    #[test]
    fn preselects_goal_from_capture_flow() {
        let (path, store) = setup();
        store.dispatch(Action::OpenEntryCapture(Some("g3".to_string())));

        let view = EntryCaptureView::new(Arc::clone(&store));
        let state = store.get_state();
        assert_eq!(view.goal_index(&state), 2);
        tear_down(path);
    }

    #[test]
    fn save_records_contribution() {
        let (path, store) = setup();
        store.dispatch(Action::OpenEntryCapture(Some("g4".to_string())));

        let view = EntryCaptureView::new(Arc::clone(&store));
        let state = store.get_state();
        let ctx = ctx_for(&state);

        for c in "250.50".chars() {
            view.process_event(&key(KeyCode::Char(c)), &ctx);
        }
        view.process_event(&key(KeyCode::Enter), &ctx);

        let state = store.get_state();
        assert_eq!(state.modal, None);
        assert_eq!(state.goals[3].current, 3200.0 + 250.5);
        assert_eq!(state.transactions[0].title, "Transfer · Japan Trip");
        assert_eq!(
            state.message,
            Some("Added $250.50 to Japan Trip".to_string())
        );
        tear_down(path);
    }

    #[test]
    fn rejects_non_numeric_and_zero_amounts() {
        let (path, store) = setup();
        store.dispatch(Action::OpenEntryCapture(Some("g1".to_string())));

        let view = EntryCaptureView::new(Arc::clone(&store));
        let state = store.get_state();
        let ctx = ctx_for(&state);

        for c in "abc".chars() {
            view.process_event(&key(KeyCode::Char(c)), &ctx);
        }
        assert!(view.amount_state.borrow().value.is_empty());

        view.process_event(&key(KeyCode::Char('0')), &ctx);
        view.process_event(&key(KeyCode::Enter), &ctx);

        let state = store.get_state();
        assert_eq!(state.modal, Some(ModalID::EntryCapture));
        assert_eq!(state.transactions.len(), 5);
        tear_down(path);
    }

    #[test]
    fn arrow_keys_override_preselected_goal() {
        let (path, store) = setup();
        store.dispatch(Action::OpenEntryCapture(Some("g1".to_string())));

        let view = EntryCaptureView::new(Arc::clone(&store));
        let state = store.get_state();
        let ctx = ctx_for(&state);

        view.process_event(&key(KeyCode::Right), &ctx);
        assert_eq!(view.goal_index(&state), 1);

        view.process_event(&key(KeyCode::Left), &ctx);
        view.process_event(&key(KeyCode::Left), &ctx);
        assert_eq!(view.goal_index(&state), 3);
        tear_down(path);
    }
}
