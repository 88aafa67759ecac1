// TUI application state
//
// Holds the browse session plus everything the terminal needs around it:
// focus, panels, modal, toast, theme. Requests produced by the session are
// queued in an outbox; the event loop drains it and spawns the fetches.

use super::clipboard::{self, CopyFormat};
use super::components::detail_panel::DetailPanel;
use super::components::gallery::GalleryPanel;
use super::components::logs_panel::LogsPanel;
use super::components::Toast;
use super::input::InputHandler;
use super::modal::Modal;
use super::theme::{Theme, ThemeKind};
use super::traits::{Handled, Interactive};
use crate::browser::{Action, BrowseSession, FetchOutcome, FetchRequest, ScrollMonitor};
use crate::config::Config;
use crate::logging::LogBuffer;
use crossterm::event::KeyEvent;

/// Which panel receives unclaimed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Gallery,
    Search,
    Logs,
}

/// Main application state for the TUI
pub struct App {
    pub session: BrowseSession,
    pub monitor: ScrollMonitor,

    pub gallery: GalleryPanel,
    pub logs_panel: LogsPanel,
    pub detail_panel: DetailPanel,
    pub show_logs: bool,
    pub focus: Focus,

    /// Active modal overlay (None = no modal)
    pub modal: Option<Modal>,
    pub toast: Option<Toast>,

    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Shared with the tracing layer
    pub log_buffer: LogBuffer,

    pub should_quit: bool,
    pub input_handler: InputHandler,

    /// Where cards come from (API base URL or "demo catalog")
    pub source_label: String,

    /// Spinner frame, advanced on each tick
    animation_frame: usize,

    /// Requests waiting to be spawned by the event loop
    outbox: Vec<FetchRequest>,

    /// A page landed; check after the next draw whether the screen is full
    fill_check: bool,
}

impl App {
    pub fn new(config: &Config, source_label: impl Into<String>, log_buffer: LogBuffer) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        Self {
            session: BrowseSession::new(config.catalog.page_size),
            monitor: ScrollMonitor::new(config.scroll_threshold),
            gallery: GalleryPanel::new(),
            logs_panel: LogsPanel::new(),
            detail_panel: DetailPanel::new(),
            show_logs: false,
            focus: Focus::Gallery,
            modal: None,
            toast: None,
            theme_kind,
            theme: theme_kind.theme(),
            log_buffer,
            should_quit: false,
            input_handler: InputHandler::with_default_config(),
            source_label: source_label.into(),
            animation_frame: 0,
            outbox: Vec::new(),
            fill_check: false,
        }
    }

    /// Feed an action to the session and queue any resulting request
    pub fn dispatch(&mut self, action: Action) {
        if let Some(request) = self.session.dispatch(action) {
            self.enqueue(request);
        }
    }

    fn enqueue(&mut self, request: FetchRequest) {
        if request.query.page == 1 {
            // Fresh result list: back to the first card
            self.gallery.reset();
            if matches!(self.modal, Some(Modal::CardDetail(_))) {
                self.modal = None;
            }
        }
        self.outbox.push(request);
    }

    /// Apply a finished fetch
    pub fn settle(&mut self, outcome: FetchOutcome) {
        if outcome.result.is_ok() {
            self.fill_check = true;
        }
        self.dispatch(Action::FetchSettled(outcome));
    }

    /// Called once the frame is drawn and the gallery knows its geometry.
    /// A page that leaves the viewport unfilled pulls in the next one;
    /// failures never set the flag, so they are not retried from here.
    pub fn after_draw(&mut self) {
        if std::mem::take(&mut self.fill_check) {
            self.observe_scroll();
        }
    }

    /// Requests the event loop should spawn now
    pub fn take_requests(&mut self) -> Vec<FetchRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Check the gallery position against the load-more threshold
    pub fn observe_scroll(&mut self) {
        if !self.gallery.is_measured() {
            return;
        }
        if let Some(request) = self.monitor.observe(&self.gallery, &mut self.session) {
            self.enqueue(request);
        }
    }

    /// Route a key to the focused panel; gallery movement feeds the scroll monitor
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focus {
            Focus::Gallery => {
                let handled = self.gallery.handle_key(key);
                if handled.was_handled() {
                    self.observe_scroll();
                }
                handled
            }
            Focus::Logs => self.logs_panel.handle_key(key),
            Focus::Search => Handled::No,
        }
    }

    /// Open the detail modal for the selected card
    pub fn open_detail(&mut self) {
        if let Some(idx) = self.gallery.selected() {
            if idx < self.session.results().len() {
                self.detail_panel.reset();
                self.modal = Some(Modal::CardDetail(idx));
            }
        }
    }

    /// Copy a card (the one in the detail modal, else the selection)
    pub fn copy_card(&mut self, format: CopyFormat) {
        let idx = self
            .modal
            .as_ref()
            .and_then(Modal::card_index)
            .or_else(|| self.gallery.selected());

        let message = match idx.and_then(|i| self.session.results().get(i)) {
            Some(card) => clipboard::copy_card(card, format),
            None => "Nothing to copy".to_string(),
        };
        self.show_toast(message);
    }

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    /// Tab order: gallery → search → logs (when shown) → gallery
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Gallery => Focus::Search,
            Focus::Search if self.show_logs => Focus::Logs,
            Focus::Search | Focus::Logs => Focus::Gallery,
        };
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if !self.show_logs && self.focus == Focus::Logs {
            self.focus = Focus::Gallery;
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        tracing::info!("Theme switched to {}", self.theme_kind.name());
        self.show_toast(format!("Theme: {}", self.theme_kind.name()));
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Advance animation frame (called on tick)
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }

    // Input debounce delegates
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}
