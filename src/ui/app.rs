use crate::config::DisplayConfig;
use crate::site::{Page, Section};
use crate::ui::components::Action;
use crate::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState, DashboardTab};
use crate::ui::mvi::Reducer;
use crate::ui::layout::content_width;
use crate::ui::navbar::{wide_row_width, NavbarIntent, NavbarReducer, NavbarState};
use crate::ui::router::{RouterIntent, RouterReducer, RouterState};
use crate::ui::screen::Screen;

/// Size assumed until the first resize event arrives.
const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Body scroll position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: u16,
    resets: u32,
}

impl Viewport {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// How many times a page change has sent the body back to the top.
    pub fn resets(&self) -> u32 {
        self.resets
    }

    fn scroll_to_origin(&mut self) {
        self.offset = 0;
        self.resets += 1;
    }
}

pub struct App {
    should_quit: bool,
    display: DisplayConfig,
    size: (u16, u16),
    /// Owner of the current page (MVI pattern).
    router: RouterState,
    /// Navbar toggles; reset whenever the page changes.
    navbar: NavbarState,
    /// Dashboard tab; reset whenever the page changes.
    dashboard: DashboardState,
    viewport: Viewport,
    /// Focused hotspot index, if any.
    focus: Option<usize>,
}

impl App {
    pub fn new(display: DisplayConfig, start_page: &str) -> Self {
        let page = Page::parse(start_page);
        if !page.is_recognized() {
            tracing::warn!(page = %page, "Unknown start page, showing not-found");
        }
        Self {
            should_quit: false,
            display,
            size: DEFAULT_SIZE,
            router: RouterState::new(page),
            navbar: NavbarState::default(),
            dashboard: DashboardState::default(),
            viewport: Viewport::default(),
            focus: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn page(&self) -> &Page {
        self.router.page()
    }

    pub fn composition(&self) -> Vec<Section> {
        self.router.composition()
    }

    pub fn is_fading(&self) -> bool {
        self.router.is_fading()
    }

    /// The compact layout is used below the configured breakpoint, and
    /// whenever the full navbar would not fit on one row.
    pub fn is_narrow(&self) -> bool {
        self.size.0 < self.display.narrow_breakpoint
            || (content_width(self.size.0) as usize) < wide_row_width()
    }

    pub fn navbar(&self) -> &NavbarState {
        &self.navbar
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn screen(&self) -> Screen {
        Screen::build(self)
    }

    /// The navigation mutator. Unknown identifiers are accepted and render
    /// the not-found page. Navigating to the current page does nothing.
    pub fn navigate(&mut self, target: &str) {
        let previous = self.router.page().clone();
        dispatch_mvi!(
            self,
            router,
            RouterReducer,
            RouterIntent::Navigate {
                target: target.to_string()
            }
        );
        if self.router.page() == &previous {
            tracing::debug!(page = %previous, "Already on page");
            return;
        }

        if self.router.page().is_recognized() {
            tracing::info!(from = %previous, to = %self.router.page(), "Page changed");
        } else {
            tracing::warn!(from = %previous, to = %self.router.page(), "Unknown page requested");
        }

        self.navbar = NavbarState::default();
        self.dashboard = DashboardState::default();
        self.focus = None;
        self.viewport.scroll_to_origin();
    }

    /// Carry out what a hotspot asks for.
    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Navigate(page) => self.navigate(page.id()),
            Action::MenuNavigate(page) => {
                self.close_mobile_menu();
                self.navigate(page.id());
            }
            Action::ToggleMobileMenu => self.toggle_mobile_menu(),
            Action::SelectTab(tab) => self.select_tab(tab),
            Action::Inert => tracing::debug!("Inert control activated"),
        }
    }

    pub fn activate_focused(&mut self) {
        let Some(index) = self.focus else {
            return;
        };
        let action = self.screen().action(index).cloned();
        if let Some(action) = action {
            self.perform(action);
        }
    }

    pub fn focus_next(&mut self) {
        let screen = self.screen();
        let count = screen.action_count();
        if count == 0 {
            self.focus = None;
            return;
        }
        let next = match self.focus {
            Some(index) if index + 1 < count => index + 1,
            _ => 0,
        };
        self.focus = Some(next);
        self.ensure_visible(&screen, next);
    }

    pub fn focus_prev(&mut self) {
        let screen = self.screen();
        let count = screen.action_count();
        if count == 0 {
            self.focus = None;
            return;
        }
        let prev = match self.focus {
            Some(index) if index > 0 && index <= count => index - 1,
            _ => count - 1,
        };
        self.focus = Some(prev);
        self.ensure_visible(&screen, prev);
    }

    /// Scroll the body so hotspot `index` is on screen. Header hotspots
    /// are always visible.
    fn ensure_visible(&mut self, screen: &Screen, index: usize) {
        let Some(line) = screen.body_line(index) else {
            return;
        };
        let line = u16::try_from(line).unwrap_or(u16::MAX);
        let height = screen.body_height(self.size.1).max(1);
        let offset = self.viewport.offset;
        if line < offset {
            self.set_offset(line);
        } else if line >= offset.saturating_add(height) {
            self.set_offset(line - height + 1);
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let screen = self.screen();
        let max = i32::from(screen.max_scroll(screen.body_height(self.size.1)));
        let target = (i32::from(self.viewport.offset) + delta).clamp(0, max);
        self.set_offset(u16::try_from(target).unwrap_or(0));
    }

    pub fn page_down(&mut self) {
        let step = self.page_step();
        self.scroll_by(step);
    }

    pub fn page_up(&mut self) {
        let step = self.page_step();
        self.scroll_by(-step);
    }

    pub fn scroll_to_top(&mut self) {
        self.set_offset(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        let screen = self.screen();
        self.set_offset(screen.max_scroll(screen.body_height(self.size.1)));
    }

    fn page_step(&self) -> i32 {
        let height = self.screen().body_height(self.size.1);
        i32::from(height.saturating_sub(1).max(1))
    }

    fn set_offset(&mut self, offset: u16) {
        self.viewport.offset = offset;
        dispatch_mvi!(
            self,
            navbar,
            NavbarReducer,
            NavbarIntent::Scrolled {
                offset,
                threshold: self.display.scrolled_threshold,
            }
        );
    }

    /// The menu toggle only exists in the compact navbar.
    pub fn toggle_mobile_menu(&mut self) {
        if !self.is_narrow() || !self.composition().contains(&Section::Navbar) {
            return;
        }
        dispatch_mvi!(self, navbar, NavbarReducer, NavbarIntent::ToggleMenu);
        tracing::debug!(open = self.navbar.mobile_open, "Mobile menu toggled");
        self.settle();
    }

    pub fn close_mobile_menu(&mut self) {
        if !self.navbar.mobile_open {
            return;
        }
        dispatch_mvi!(self, navbar, NavbarReducer, NavbarIntent::CloseMenu);
        tracing::debug!("Mobile menu closed");
        self.settle();
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        if self.dashboard.tab == tab {
            return;
        }
        dispatch_mvi!(self, dashboard, DashboardReducer, DashboardIntent::SelectTab(tab));
        tracing::debug!(tab = tab.label(), "Dashboard tab selected");
        self.settle();
    }

    pub fn on_tick(&mut self) {
        dispatch_mvi!(self, router, RouterReducer, RouterIntent::Tick);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        let was_narrow = self.is_narrow();
        self.size = (cols.max(1), rows.max(1));
        if !self.is_narrow() && self.navbar.mobile_open {
            dispatch_mvi!(self, navbar, NavbarReducer, NavbarIntent::CloseMenu);
        }
        // Hotspot order differs between the two layouts.
        if self.is_narrow() != was_narrow {
            self.focus = None;
        }
        self.settle();
    }

    /// Keep scroll and focus valid after the content changed shape.
    fn settle(&mut self) {
        let screen = self.screen();
        if self.focus.is_some_and(|index| index >= screen.action_count()) {
            self.focus = None;
        }
        let max = screen.max_scroll(screen.body_height(self.size.1));
        if self.viewport.offset > max {
            self.set_offset(max);
        }
    }
}
