// Status bar component
//
// Renders the result counter, page position and load status at the bottom.

use crate::browser::BrowseStatus;
use crate::tui::app::{App, Focus};
use crate::tui::layout::Breakpoint;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Adapts to terminal width:
/// - Wide: page position and focus hints
/// - Narrow: counter and status only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let bp = Breakpoint::from_width(area.width);

    let status = session
        .status()
        .map(|s| s.message())
        .unwrap_or("Ready");

    let mut status_text = format!(" 🃏 {} │ {}", session.counter_text(), status);

    if bp.at_least(Breakpoint::Normal) {
        let pagination = session.pagination();
        let pages = match pagination.page_count() {
            Some(count) => format!("{}/{}", pagination.current_page(), count),
            None => pagination.current_page().to_string(),
        };
        status_text.push_str(&format!(" │ page {}", pages));

        let submitted = session.search().submitted();
        if !submitted.is_empty() {
            status_text.push_str(&format!(" │ name: {}", submitted));
        }
    }

    if bp.at_least(Breakpoint::Wide) {
        let hint = match app.focus {
            Focus::Gallery => app.gallery.focus_hint(),
            Focus::Logs => app.logs_panel.focus_hint(),
            Focus::Search => None,
        };
        if let Some(hint) = hint {
            status_text.push_str(&format!(" │ {}", hint));
        }
    }

    let style = match session.status() {
        Some(BrowseStatus::NoCardsFound) => Style::default().fg(app.theme.error),
        _ => Style::default().fg(app.theme.status_bar),
    };

    let bar = Paragraph::new(status_text)
        .style(style)
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(bar, area);
}
