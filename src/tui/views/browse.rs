// Browse view: the card gallery, with the logs panel below when toggled

use crate::tui::app::{App, Focus};
use crate::tui::layout::TILE_HEIGHT;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

const LOGS_HEIGHT: u16 = 8;
/// One tile row plus the gallery borders
const GALLERY_MIN: u16 = TILE_HEIGHT + 2;

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let (gallery_area, logs_area) = if app.show_logs {
        let [gallery, logs] =
            Layout::vertical([Constraint::Min(GALLERY_MIN), Constraint::Length(LOGS_HEIGHT)])
                .areas(area);
        (gallery, Some(logs))
    } else {
        (area, None)
    };

    let status = app.session.status();
    app.gallery.render(
        f,
        gallery_area,
        app.session.results(),
        status,
        &app.theme,
        app.focus == Focus::Gallery,
    );

    if let Some(logs_area) = logs_area {
        let entries = app.log_buffer.get_all();
        app.logs_panel
            .render(f, logs_area, &entries, &app.theme, app.focus == Focus::Logs);
    }
}
