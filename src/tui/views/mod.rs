// Views module - screen-level rendering logic
//
// One screen: title, search bar, gallery, optional logs, status bar.
// Modals and toasts are drawn on top.

mod browse;
mod modal;

use super::app::App;
use crate::tui::components::{search_bar, status_bar, title_bar};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let [title, search, content, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(2),
    ])
    .areas(f.area());

    title_bar::render(f, title, app);
    search_bar::render(f, search, app);
    browse::render(f, content, app);
    status_bar::render(f, status, app);

    // Take modal temporarily to avoid borrow conflict with mutable app
    if let Some(modal_state) = app.modal.take() {
        modal::render(f, &modal_state, app);
        app.modal = Some(modal_state);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}
