use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, BorderType, Clear, Padding, Widget},
};
use std::{cell::RefCell, sync::Arc};

use crate::{
    records::Habit,
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

const FREQUENCIES: [&str; 3] = ["Daily", "3x Week", "Weekly"];

/// New habit capture. Name is required; frequency picks from a fixed set.
pub struct HabitCaptureView {
    store: Arc<Store>,
    name_state: RefCell<InputState>,
    frequency_state: RefCell<SelectorState>,
}

impl HabitCaptureView {
    pub fn new(store: Arc<Store>) -> Self {
        let view = Self {
            store,
            name_state: RefCell::new(InputState::new()),
            frequency_state: RefCell::new(SelectorState::new()),
        };
        view.name_state.borrow_mut().editing = true;
        view
    }

    fn reset(&self) {
        self.name_state.borrow_mut().reset();
        self.name_state.borrow_mut().editing = true;
        self.frequency_state.borrow_mut().selected = 0;
    }

    fn save(&self) {
        let name = self.name_state.borrow().value.trim().to_string();

        if name.is_empty() {
            return;
        }

        let frequency = FREQUENCIES[self.frequency_state.borrow().selected];
        self.store.dispatch(Action::AddHabit(Habit::new(&name, frequency)));
        self.store.dispatch(Action::CloseModal);
        self.reset();
    }

    fn close(&self) {
        self.store.dispatch(Action::CloseModal);
        self.reset();
    }
}

impl CustomWidgetRef for HabitCaptureView {
    fn render_ref(&self, _area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let area = get_popover_area(ctx.app_area, 60, 35);

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(ctx.state.colors.border_color))
            .style(Style::default().bg(ctx.state.colors.buffer_bg))
            .padding(Padding::uniform(1))
            .title(" New Habit ");

        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);

        let rects = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let name = Input::with_placeholder("Name", "e.g. Meditation");
        name.render(rects[0], buf, &mut self.name_state.borrow_mut(), ctx);

        let selector = Selector::new(FREQUENCIES.iter().map(|f| f.to_string()).collect());
        selector.render(rects[2], buf, &mut self.frequency_state.borrow_mut(), ctx);
    }
}

impl EventHandler for HabitCaptureView {
    fn process_event(&self, evt: &Event, _ctx: &CustomWidgetContext) -> bool {
        if let Event::Key(key) = evt {
            if key.kind != KeyEventKind::Press {
                return true;
            }

            match key.code {
                KeyCode::Esc => self.close(),
                KeyCode::Enter => self.save(),
                KeyCode::Right => self.frequency_state.borrow_mut().next(FREQUENCIES.len()),
                KeyCode::Left => self
                    .frequency_state
                    .borrow_mut()
                    .previous(FREQUENCIES.len()),
                KeyCode::Backspace => {
                    self.name_state.borrow_mut().value.pop();
                }
                KeyCode::Char(c) => self.name_state.borrow_mut().value.push(c),
                _ => {}
            }
        }

        true
    }
}
