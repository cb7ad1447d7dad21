use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Clear, Padding, Widget},
};
use std::{cell::RefCell, sync::Arc};

use crate::{
    records::{gen_id, Block as PageBlock, BlockContent, Page},
    ui::{
        components::{
            input::{Input, InputState},
            popover::get_popover_area,
            selector::{Selector, SelectorState},
        },
        store::{action::Action, Store},
    },
};

use super::super::traits::{
    CustomStatefulWidget, CustomWidgetContext, CustomWidgetRef, EventHandler,
};

const DEFAULT_TITLE: &str = "Untitled Note";
const CATEGORIES: [&str; 4] = ["Idea", "Meeting", "Personal", "Urgent"];

#[derive(Debug, Clone, Copy, PartialEq)]
enum Focus {
    Title,
    Body,
}

/// Quick note capture. Saves a new note page; the title falls back to a
/// default but the body is required.
pub struct NoteCaptureView {
    store: Arc<Store>,
    focus: RefCell<Focus>,
    title_state: RefCell<InputState>,
    body_state: RefCell<InputState>,
    category_state: RefCell<SelectorState>,
}

impl NoteCaptureView {
    pub fn new(store: Arc<Store>) -> Self {
        let view = Self {
            store,
            focus: RefCell::new(Focus::Title),
            title_state: RefCell::new(InputState::new()),
            body_state: RefCell::new(InputState::new()),
            category_state: RefCell::new(SelectorState::new()),
        };
        view.title_state.borrow_mut().editing = true;
        view
    }

    fn reset(&self) {
        self.title_state.borrow_mut().reset();
        self.body_state.borrow_mut().reset();
        self.title_state.borrow_mut().editing = true;
        *self.category_state.borrow_mut() = SelectorState::new();
        *self.focus.borrow_mut() = Focus::Title;
    }

    fn focus_next(&self) {
        let next = match *self.focus.borrow() {
            Focus::Title => Focus::Body,
            Focus::Body => Focus::Title,
        };
        self.title_state.borrow_mut().editing = next == Focus::Title;
        self.body_state.borrow_mut().editing = next == Focus::Body;
        *self.focus.borrow_mut() = next;
    }

    fn push_input_char(&self, char: char) {
        match *self.focus.borrow() {
            Focus::Title => self.title_state.borrow_mut().value.push(char),
            Focus::Body => self.body_state.borrow_mut().value.push(char),
        };
    }

    fn pop_input_char(&self) {
        match *self.focus.borrow() {
            Focus::Title => {
                self.title_state.borrow_mut().value.pop();
            }
            Focus::Body => {
                self.body_state.borrow_mut().value.pop();
            }
        };
    }

    fn save(&self) {
        let body = self.body_state.borrow().value.trim().to_string();

        if body.is_empty() {
            return;
        }

        let mut title = self.title_state.borrow().value.trim().to_string();
        if title.is_empty() {
            title = DEFAULT_TITLE.to_string();
        }

        let category = CATEGORIES[self.category_state.borrow().selected].to_lowercase();

        self.store.dispatch(Action::AddPage(Page {
            id: gen_id("p"),
            title: title.clone(),
            icon: "📝".to_string(),
            category: Some(category),
            blocks: vec![
                PageBlock {
                    id: gen_id("b"),
                    content: BlockContent::Heading(title),
                },
                PageBlock {
                    id: gen_id("b"),
                    content: BlockContent::Text(body),
                },
            ],
            updated_at: "Now".to_string(),
        }));

        self.store.dispatch(Action::CloseModal);
        self.reset();
    }

    fn close(&self) {
        self.store.dispatch(Action::CloseModal);
        self.reset();
    }
}

impl CustomWidgetRef for NoteCaptureView {
    fn render_ref(&self, _area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let area = get_popover_area(ctx.app_area, 60, 40);

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .style(Style::default().bg(ctx.state.colors.buffer_bg))
            .padding(Padding::uniform(1))
            .title(" New Note ");

        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);

        let rects = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let title = Input::with_placeholder("Title", DEFAULT_TITLE);
        title.render(rects[0], buf, &mut self.title_state.borrow_mut(), ctx);

        let categories = Selector::new(CATEGORIES.iter().map(|c| c.to_string()).collect());
        categories.render(rects[2], buf, &mut self.category_state.borrow_mut(), ctx);

        let body = Input::with_placeholder("Note", "Write something...");
        body.render(rects[4], buf, &mut self.body_state.borrow_mut(), ctx);
    }
}

impl EventHandler for NoteCaptureView {
    fn process_event(&self, evt: &Event, _ctx: &CustomWidgetContext) -> bool {
        if let Event::Key(key) = evt {
            if key.kind != KeyEventKind::Press {
                return true;
            }

            match key.code {
                KeyCode::Esc => self.close(),
                KeyCode::Enter => self.save(),
                KeyCode::Tab | KeyCode::BackTab => self.focus_next(),
                KeyCode::Right => self.category_state.borrow_mut().next(CATEGORIES.len()),
                KeyCode::Left => self.category_state.borrow_mut().previous(CATEGORIES.len()),
                KeyCode::Backspace => self.pop_input_char(),
                KeyCode::Char(c) => self.push_input_char(c),
                _ => {}
            }
        }

        // modals swallow every event while open
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
        store.dispatch(Action::OpenModal(ModalID::NoteCapture));
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

    fn ctx_for(state: &crate::ui::store::state::State) -> CustomWidgetContext {
        CustomWidgetContext {
            state,
            app_area: Rect::new(0, 0, 80, 30),
        }
    }

    #[test]
    fn save_requires_body() {
        let (path, store) = setup();
        let view = NoteCaptureView::new(Arc::clone(&store));
        let state = store.get_state();
        let ctx = ctx_for(&state);

        view.process_event(&key(KeyCode::Enter), &ctx);

        let state = store.get_state();
        assert_eq!(state.pages.len(), 2);
        assert_eq!(state.modal, Some(ModalID::NoteCapture));
        tear_down(path);
    }

    #[test]
    fn saved_note_defaults_title() {
        let (path, store) = setup();
        let view = NoteCaptureView::new(Arc::clone(&store));
        let state = store.get_state();
        let ctx = ctx_for(&state);

        view.process_event(&key(KeyCode::Tab), &ctx);
        for c in "remember the milk".chars() {
            view.process_event(&key(KeyCode::Char(c)), &ctx);
        }
        view.process_event(&key(KeyCode::Enter), &ctx);

        let state = store.get_state();
        assert_eq!(state.modal, None);
        let page = &state.pages[0];
        assert_eq!(page.title, DEFAULT_TITLE);
        assert_eq!(page.category, Some("idea".to_string()));
        assert_eq!(page.blocks.len(), 2);
        assert_eq!(
            page.blocks[1].content,
            BlockContent::Text("remember the milk".to_string())
        );
        tear_down(path);
    }

    #[test]
    fn saved_note_uses_entered_title() {
        let (path, store) = setup();
        let view = NoteCaptureView::new(Arc::clone(&store));
        let state = store.get_state();
        let ctx = ctx_for(&state);

        for c in "Groceries".chars() {
            view.process_event(&key(KeyCode::Char(c)), &ctx);
        }
        view.process_event(&key(KeyCode::Tab), &ctx);
        for c in "milk and eggs".chars() {
            view.process_event(&key(KeyCode::Char(c)), &ctx);
        }
        view.process_event(&key(KeyCode::Enter), &ctx);

        let state = store.get_state();
        let page = &state.pages[0];
        assert_eq!(page.title, "Groceries");
        assert_eq!(
            page.blocks[0].content,
            BlockContent::Heading("Groceries".to_string())
        );
        tear_down(path);
    }

    #[test]
    fn arrow_keys_pick_category() {
        let (path, store) = setup();
        let view = NoteCaptureView::new(Arc::clone(&store));
        let state = store.get_state();
        let ctx = ctx_for(&state);

        view.process_event(&key(KeyCode::Right), &ctx);
        view.process_event(&key(KeyCode::Right), &ctx);
        view.process_event(&key(KeyCode::Tab), &ctx);
        for c in "standup notes".chars() {
            view.process_event(&key(KeyCode::Char(c)), &ctx);
        }
        view.process_event(&key(KeyCode::Enter), &ctx);

        let state = store.get_state();
        assert_eq!(state.pages[0].category, Some("personal".to_string()));
        tear_down(path);
    }

    #[test]
    fn esc_closes_and_clears_draft() {
        let (path, store) = setup();
        let view = NoteCaptureView::new(Arc::clone(&store));
        let state = store.get_state();
        let ctx = ctx_for(&state);

        for c in "draft".chars() {
            view.process_event(&key(KeyCode::Char(c)), &ctx);
        }
        view.process_event(&key(KeyCode::Esc), &ctx);

        assert_eq!(store.get_state().modal, None);
        assert!(view.title_state.borrow().value.is_empty());
        tear_down(path);
    }
}
