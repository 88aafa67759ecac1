//! Detail panel component
//!
//! Scroll state for the card detail modal. The modal view owns layout;
//! this keeps the position between frames.

use super::gallery::wrap;
use crate::catalog::{Card, NO_IMAGE};
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{Handled, Interactive, Scrollable, ScrollableInteractive};
use crossterm::event::KeyEvent;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

pub struct DetailPanel {
    scroll: ScrollState,
}

impl DetailPanel {
    /// Create a new detail panel in manual scroll mode
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
        }
    }

    /// Reset scroll position (called when opening the modal)
    pub fn reset(&mut self) {
        self.scroll.scroll_to_top();
    }
}

impl Default for DetailPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// Lines shown in the detail modal for one card, rules text wrapped to `width`
pub fn card_lines(card: &Card, theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme.muted);
    let mut lines = vec![
        Line::from(Span::styled(
            card.name.clone(),
            Style::default()
                .fg(theme.card_name)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.type_line.clone(),
            Style::default()
                .fg(theme.card_type)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::raw(""),
    ];

    let text = card.rules_text();
    if text.is_empty() {
        lines.push(Line::from(Span::styled("(no rules text)", label)));
    } else {
        let style = Style::default().fg(theme.card_text);
        for paragraph in text.lines() {
            if paragraph.trim().is_empty() {
                lines.push(Line::raw(""));
                continue;
            }
            lines.extend(
                wrap(paragraph, width, usize::MAX)
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, style))),
            );
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Image: ", label),
        Span::styled(
            card.image().unwrap_or(NO_IMAGE).to_string(),
            Style::default().fg(theme.card_image),
        ),
    ]));
    lines
}

impl Scrollable for DetailPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for DetailPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:scroll  y/Y:copy  Esc:close")
    }
}
