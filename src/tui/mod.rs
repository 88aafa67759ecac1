// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup (TerminalGuard)
// - Event loop (keyboard/mouse input, timer ticks, fetch outcomes)
// - Spawning the fetches the browse session asks for

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod theme;
pub mod traits;
pub mod views;

use crate::browser::{spawn_fetch, Action, FetchOutcome};
use crate::catalog::CardSource;
use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Focus};
use clipboard::CopyFormat;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use traits::Scrollable;

/// Outcomes that may be waiting at once (one per in-flight request)
const OUTCOME_CHANNEL_SIZE: usize = 32;

/// Raw mode, alternate screen and mouse capture for as long as it lives
///
/// Dropping the guard restores the terminal, including on error paths.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to setup terminal");
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .context("Failed to create terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            tracing::error!("Failed to disable raw mode: {}", e);
        }
        if let Err(e) = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        ) {
            tracing::error!("Failed to restore terminal: {}", e);
        }
        let _ = self.terminal.show_cursor();
    }
}

/// Run the TUI until the user quits
pub async fn run_tui(config: Config, source: CardSource, log_buffer: LogBuffer) -> Result<()> {
    let mut app = App::new(&config, source.label(), log_buffer);
    let source = Arc::new(source);

    let mut guard = TerminalGuard::new()?;
    run_event_loop(&mut guard.terminal, &mut app, source).await
}

/// Main event loop
///
/// Waits on three things at once:
/// 1. Keyboard and mouse input
/// 2. Timer ticks (spinner, toast expiry)
/// 3. Fetch outcomes from spawned requests
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    source: Arc<CardSource>,
) -> Result<()> {
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<FetchOutcome>(OUTCOME_CHANNEL_SIZE);
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    app.dispatch(Action::Start);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;
        app.after_draw();

        for request in app.take_requests() {
            spawn_fetch(Arc::clone(&source), request, outcome_tx.clone());
        }

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(outcome) = outcome_rx.recv() => {
                app.settle(outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Search bar → Global → Focused component
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C quits from anywhere
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        app.should_quit = true;
        return;
    }

    if handle_modal_input(app, &key_event) {
        return;
    }

    if app.focus == Focus::Search {
        handle_search_input(app, &key_event);
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    // Navigation keys - hold-to-repeat via InputHandler
    if app.handle_key_press(key_event.code) {
        app.dispatch_to_focused(key_event);
    }
}

/// Text entry while the search bar has focus
///
/// Characters skip the InputHandler so doubled letters are not debounced.
fn handle_search_input(app: &mut App, key_event: &KeyEvent) {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Char('u') if ctrl => app.dispatch(Action::ClearTerm),
        KeyCode::Char(c) if !ctrl => app.dispatch(Action::InsertChar(c)),
        KeyCode::Backspace => app.dispatch(Action::DeleteChar),
        KeyCode::Enter => {
            app.dispatch(Action::Submit);
            app.focus = Focus::Gallery;
        }
        KeyCode::Esc => app.focus = Focus::Gallery,
        KeyCode::Tab | KeyCode::BackTab => app.cycle_focus(),
        _ => {}
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let code = match mouse_event.kind {
        MouseEventKind::ScrollUp => KeyCode::Up,
        MouseEventKind::ScrollDown => KeyCode::Down,
        _ => return,
    };

    if app.modal.is_some() {
        match code {
            KeyCode::Up => app.detail_panel.scroll_up(),
            _ => app.detail_panel.scroll_down(),
        }
    } else if app.focus == Focus::Logs {
        app.dispatch_to_focused(KeyEvent::new(code, KeyModifiers::NONE));
    } else {
        // The wheel always scrolls the gallery, even while typing a search
        let focus = std::mem::replace(&mut app.focus, Focus::Gallery);
        app.dispatch_to_focused(KeyEvent::new(code, KeyModifiers::NONE));
        app.focus = focus;
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref modal) = app.modal else {
        return false;
    };

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => {
            app.detail_panel.reset();
            app.modal = None;
        }
        ModalAction::ScrollUp => app.detail_panel.scroll_up(),
        ModalAction::ScrollDown => app.detail_panel.scroll_down(),
        ModalAction::ScrollTop => app.detail_panel.scroll_to_top(),
        ModalAction::ScrollBottom => app.detail_panel.scroll_to_bottom(),
        ModalAction::PageUp => app.detail_panel.page_up(),
        ModalAction::PageDown => app.detail_panel.page_down(),
        ModalAction::CopyText => app.copy_card(CopyFormat::Text),
        ModalAction::CopyJson => app.copy_card(CopyFormat::Json),
    }

    true
}

/// Handle global keys - returns true if handled
/// Uses InputHandler for debounce (StateChange behavior = trigger once per press)
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;

    let handled = matches!(
        key,
        KeyCode::Char('q' | 'Q' | '?' | '/' | 't' | 'r' | 'L' | 'y' | 'Y')
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Enter
            | KeyCode::Esc
    );
    if !handled {
        return false;
    }
    if !app.handle_key_press(key) {
        return true;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('?') => app.modal = Some(Modal::Help),
        KeyCode::Char('/') => app.focus_search(),
        KeyCode::Tab | KeyCode::BackTab => app.cycle_focus(),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('r') => app.dispatch(Action::Reload),
        KeyCode::Char('L') => app.toggle_logs(),
        KeyCode::Char('y') => app.copy_card(CopyFormat::Text),
        KeyCode::Char('Y') => app.copy_card(CopyFormat::Json),
        KeyCode::Enter if app.focus == Focus::Gallery => app.open_detail(),
        KeyCode::Esc => {
            // Let the logs panel jump back to follow mode first
            if app.focus == Focus::Logs {
                app.dispatch_to_focused(*key_event);
            }
        }
        _ => {}
    }
    true
}
