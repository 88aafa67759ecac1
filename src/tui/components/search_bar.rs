// Search bar component
//
// Shows the term being typed. A trailing `*` marks a term that differs from
// the one last submitted.

use crate::tui::app::{App, Focus};
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = " 🔎 ";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let search = app.session.search();
    let focused = app.focus == Focus::Search;
    let theme = &app.theme;

    let border_color = if focused {
        theme.highlight
    } else {
        theme.border
    };

    let title = if search.is_dirty() {
        " Search * "
    } else {
        " Search "
    };

    let hint = if focused {
        " Enter:search  Ctrl+U:clear  Esc:back "
    } else {
        " /:search "
    };

    let mut spans = vec![Span::raw(PROMPT)];
    if search.term().is_empty() && !focused {
        spans.push(Span::styled(
            "type / to filter by name",
            Style::default().fg(theme.muted),
        ));
    } else {
        spans.push(Span::styled(
            search.term(),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_bottom(Line::from(hint).right_aligned());
    let inner = block.inner(area);

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);

    if focused {
        f.set_cursor_position(Position::new(cursor_x(inner, search.term()), inner.y));
    }
}

/// Column just past the typed term, pinned inside the box
fn cursor_x(inner: Rect, term: &str) -> u16 {
    let offset = u16::try_from(PROMPT.width() + term.width()).unwrap_or(u16::MAX);
    inner
        .x
        .saturating_add(offset)
        .min(inner.right().saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_follows_term() {
        let inner = Rect::new(1, 1, 40, 1);
        let prompt = PROMPT.width() as u16;
        assert_eq!(cursor_x(inner, ""), 1 + prompt);
        assert_eq!(cursor_x(inner, "bolt"), 1 + prompt + 4);
    }

    #[test]
    fn long_term_pins_cursor_to_right_edge() {
        let inner = Rect::new(10, 1, 30, 1);
        assert_eq!(cursor_x(inner, &"x".repeat(100)), 39);
        assert_eq!(cursor_x(inner, &"x".repeat(70_000)), 39);
    }
}
