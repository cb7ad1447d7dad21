use std::{collections::HashMap, sync::Arc};

use crate::ui::{
    colors::Theme,
    components::{
        footer::InfoFooter,
        header::Header,
        nav::{NavBar, NAV_ITEMS},
        shell::{get_device_area, get_screen_area, Shell},
    },
    store::{
        action::Action,
        state::{ModalID, State, ViewID},
        Store,
    },
};
use ratatui::{
    crossterm::event::{Event as CrossTermEvent, KeyCode},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Widget},
};

use super::{
    finance::FinanceView,
    habits::HabitsView,
    home::HomeView,
    modals::{
        entry_capture::EntryCaptureView, habit_capture::HabitCaptureView,
        note_capture::NoteCaptureView, ModalView,
    },
    page_detail::PageDetailView,
    tasks::TasksView,
    traits::{CustomWidget, CustomWidgetContext, CustomWidgetRef, EventHandler, View},
};

const THEMES: [Theme; 4] = [Theme::Blue, Theme::Emerald, Theme::Indigo, Theme::Red];

pub struct MainView {
    store: Arc<Store>,
    sub_views: HashMap<ViewID, Box<dyn View>>,
    modals: HashMap<ModalID, Box<dyn ModalView>>,
}

impl MainView {
    pub fn new(store: Arc<Store>) -> Self {
        let mut sub_views: HashMap<ViewID, Box<dyn View>> = HashMap::new();

        let home = Box::new(HomeView::new(Arc::clone(&store)));
        let tasks = Box::new(TasksView::new(Arc::clone(&store)));
        let habits = Box::new(HabitsView::new(Arc::clone(&store)));
        let finance = Box::new(FinanceView::new(Arc::clone(&store)));
        let page_detail = Box::new(PageDetailView::new(Arc::clone(&store)));

        sub_views.insert(home.id(), home);
        sub_views.insert(tasks.id(), tasks);
        sub_views.insert(habits.id(), habits);
        sub_views.insert(finance.id(), finance);
        sub_views.insert(page_detail.id(), page_detail);

        let mut modals: HashMap<ModalID, Box<dyn ModalView>> = HashMap::new();
        modals.insert(
            ModalID::NoteCapture,
            Box::new(NoteCaptureView::new(Arc::clone(&store))),
        );
        modals.insert(
            ModalID::HabitCapture,
            Box::new(HabitCaptureView::new(Arc::clone(&store))),
        );
        modals.insert(
            ModalID::EntryCapture,
            Box::new(EntryCaptureView::new(Arc::clone(&store))),
        );

        Self {
            store,
            sub_views,
            modals,
        }
    }

    fn nav_view(state: &State) -> ViewID {
        // the detail view is reached through home, so it highlights home
        match state.view_id {
            ViewID::PageDetail => ViewID::Home,
            id => id,
        }
    }

    fn nav_position(state: &State) -> usize {
        let active = Self::nav_view(state);
        NAV_ITEMS
            .iter()
            .position(|(id, _)| *id == active)
            .unwrap_or(0)
    }

    fn switch_view(&self, view_id: ViewID) {
        self.store.dispatch(Action::UpdateMessage(None));
        self.store.dispatch(Action::UpdateView(view_id));
    }

    fn next_view(&self, state: &State) {
        let idx = (Self::nav_position(state) + 1) % NAV_ITEMS.len();
        self.switch_view(NAV_ITEMS[idx].0);
    }

    fn previous_view(&self, state: &State) {
        let idx = (Self::nav_position(state) + NAV_ITEMS.len() - 1) % NAV_ITEMS.len();
        self.switch_view(NAV_ITEMS[idx].0);
    }

    fn open_capture(&self, state: &State) {
        match Self::nav_view(state) {
            ViewID::Habits => self.store.dispatch(Action::OpenModal(ModalID::HabitCapture)),
            ViewID::Finance => self.store.dispatch(Action::OpenEntryCapture(None)),
            _ => self.store.dispatch(Action::OpenModal(ModalID::NoteCapture)),
        }
    }

    fn cycle_theme(&self, state: &State) {
        let current = Theme::from_string(&state.config.theme);
        let idx = THEMES
            .iter()
            .position(|t| *t == current)
            .unwrap_or(0);
        let next = THEMES[(idx + 1) % THEMES.len()];
        self.store.dispatch(Action::UpdateTheme(next));
    }

    fn render_footer(
        &self,
        legend: &str,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        let mut info = String::from("(q) quit | (tab) view | (a) capture");

        if !legend.is_empty() {
            info = format!("{info} | {legend}");
        }

        let footer = InfoFooter::new(info);
        footer.render(area, buf, ctx);
    }
}

impl View for MainView {
    fn id(&self) -> ViewID {
        // the main view never appears in the nav, it hosts whichever
        // sub view is active
        ViewID::Home
    }
}

impl CustomWidgetRef for MainView {
    fn render_ref(&self, area: Rect, buf: &mut ratatui::prelude::Buffer, ctx: &CustomWidgetContext) {
        let bg = Block::new().style(Style::new().bg(ctx.state.colors.buffer_bg));
        bg.render(area, buf);

        let page_areas =
            Layout::vertical([Constraint::Min(10), Constraint::Length(3)]).split(area);

        let device_area = get_device_area(page_areas[0]);
        let shell = Shell::new();
        shell.render(device_area, buf, ctx);

        let screen = get_screen_area(device_area);
        let screen_areas = Layout::vertical([
            Constraint::Length(1), // header
            Constraint::Length(1),
            Constraint::Min(5), // active view
            Constraint::Length(1),
            Constraint::Length(1), // nav
        ])
        .split(screen);

        let subtitle = match &ctx.state.message {
            Some(message) => message.clone(),
            None => ctx.state.view_id.to_string(),
        };
        let header = Header::with_subtitle("pocketdeck".to_string(), subtitle);
        header.render(screen_areas[0], buf, ctx);

        let view = self.sub_views.get(&ctx.state.view_id).unwrap();
        view.render_ref(screen_areas[2], buf, ctx);

        let nav = NavBar::new(Self::nav_view(ctx.state));
        nav.render(screen_areas[4], buf, ctx);

        let legend = match ctx.state.modal {
            Some(_) => "(enter) save | (tab/arrows) field | (esc) cancel",
            None => view.legend(ctx.state),
        };
        self.render_footer(legend, page_areas[1], buf, ctx);

        // popovers layer over the shell, so they render last
        if let Some(modal_id) = ctx.state.modal {
            if let Some(modal) = self.modals.get(&modal_id) {
                modal.render_ref(area, buf, ctx);
            }
        }
    }
}

impl EventHandler for MainView {
    fn process_event(&self, evt: &CrossTermEvent, ctx: &CustomWidgetContext) -> bool {
        if let Some(modal_id) = ctx.state.modal {
            if let Some(modal) = self.modals.get(&modal_id) {
                return modal.process_event(evt, ctx);
            }
        }

        let view = self.sub_views.get(&ctx.state.view_id).unwrap();
        let mut handled = view.process_event(evt, ctx);

        if !handled {
            if let CrossTermEvent::Key(key) = evt {
                match key.code {
                    KeyCode::Char('1') => {
                        self.switch_view(ViewID::Home);
                        handled = true;
                    }
                    KeyCode::Char('2') => {
                        self.switch_view(ViewID::Tasks);
                        handled = true;
                    }
                    KeyCode::Char('3') => {
                        self.switch_view(ViewID::Habits);
                        handled = true;
                    }
                    KeyCode::Char('4') => {
                        self.switch_view(ViewID::Finance);
                        handled = true;
                    }
                    KeyCode::Tab => {
                        self.next_view(ctx.state);
                        handled = true;
                    }
                    KeyCode::BackTab => {
                        self.previous_view(ctx.state);
                        handled = true;
                    }
                    KeyCode::Char('a') => {
                        self.open_capture(ctx.state);
                        handled = true;
                    }
                    KeyCode::Char('t') => {
                        self.cycle_theme(ctx.state);
                        handled = true;
                    }
                    _ => {}
                }
            }
        }

        handled
    }
}
