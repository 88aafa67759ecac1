//! Card gallery component
//!
//! Lays the accumulated results out as a grid of fixed-height tiles.
//! Scroll units are tile rows; the scroll monitor sees the distance in
//! terminal rows via [`ViewportProximity`].

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::browser::{BrowseStatus, ViewportProximity};
use crate::catalog::{Card, NO_IMAGE};
use crate::tui::layout::{Breakpoint, TILE_HEIGHT};
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{Handled, Interactive, Scrollable};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rules text lines shown inside a tile
const TEXT_LINES: usize = 2;

/// What a single tile displays, independent of any terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileContent {
    pub title: String,
    pub type_line: String,
    pub text: Vec<String>,
    pub image: String,
}

/// Map a card onto a tile `width` columns wide (inside the borders)
pub fn tile_content(card: &Card, width: usize) -> TileContent {
    let image = match card.image() {
        Some(url) => truncate(&format!("🖼 {}", url), width),
        None => NO_IMAGE.to_string(),
    };

    TileContent {
        title: truncate(&card.name, width),
        type_line: truncate(&card.type_line, width),
        text: wrap(card.rules_text(), width, TEXT_LINES),
        image,
    }
}

/// Cut `s` to at most `width` display columns, marking the cut with `…`
pub fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap into at most `max_lines` lines; overflow ends in `…`
pub fn wrap(s: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in s.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if candidate.width() <= width {
            current = candidate;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if lines.len() == max_lines {
            break;
        }
        current = word.to_string();
    }

    if lines.len() < max_lines && !current.is_empty() {
        lines.push(current);
    } else if lines.len() == max_lines {
        // Ran out of room; mark the last line as cut
        if let Some(last) = lines.last_mut() {
            *last = truncate(&format!("{} …", last), width);
        }
    }

    lines
        .into_iter()
        .map(|line| truncate(&line, width))
        .collect()
}

pub struct GalleryPanel {
    /// Units are tile rows
    scroll: ScrollState,
    selected: usize,
    columns: usize,
    card_count: usize,
}

impl GalleryPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
            selected: 0,
            columns: 1,
            card_count: 0,
        }
    }

    /// Selected card index, if there are any cards
    pub fn selected(&self) -> Option<usize> {
        (self.card_count > 0).then_some(self.selected)
    }

    /// Whether the panel has been laid out at least once
    pub fn is_measured(&self) -> bool {
        self.scroll.viewport() > 0
    }

    /// Back to the first card (fresh search)
    pub fn reset(&mut self) {
        self.selected = 0;
        self.card_count = 0;
        self.scroll.reset();
    }

    /// Sync with the result list and the grid geometry
    pub fn sync(&mut self, card_count: usize, columns: usize, viewport_rows: usize) {
        self.card_count = card_count;
        self.columns = columns.max(1);
        self.selected = self.selected.min(card_count.saturating_sub(1));
        let rows = card_count.div_ceil(self.columns);
        self.scroll.update_dimensions(rows, viewport_rows);
        self.scroll.ensure_visible(self.selected_row());
    }

    fn selected_row(&self) -> usize {
        self.selected / self.columns
    }

    fn select(&mut self, index: usize) {
        if self.card_count == 0 {
            return;
        }
        self.selected = index.min(self.card_count - 1);
        self.scroll.ensure_visible(self.selected_row());
    }

    fn move_rows(&mut self, delta: isize) {
        let step = delta.unsigned_abs() * self.columns;
        let target = if delta < 0 {
            self.selected.saturating_sub(step)
        } else {
            self.selected + step
        };
        self.select(target);
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        cards: &[Card],
        status: Option<BrowseStatus>,
        theme: &Theme,
        focused: bool,
    ) {
        let border_color = if focused {
            theme.highlight
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(" Cards ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let columns = Breakpoint::from_width(inner.width).gallery_columns();
        let viewport_rows = (inner.height / TILE_HEIGHT).max(1) as usize;
        self.sync(cards.len(), columns, viewport_rows);

        if cards.is_empty() {
            let message = status.map(|s| s.message()).unwrap_or("");
            let style = match status {
                Some(BrowseStatus::NoCardsFound) => Style::default().fg(theme.muted),
                _ => Style::default().fg(theme.foreground),
            };
            let text = Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(style);
            let middle = Rect {
                y: inner.y + inner.height / 2,
                height: 1.min(inner.height),
                ..inner
            };
            f.render_widget(text, middle);
            return;
        }

        let (first_row, last_row) = self.scroll.visible_range();
        let row_areas = Layout::vertical(
            (first_row..last_row).map(|_| Constraint::Length(TILE_HEIGHT)),
        )
        .split(inner);

        for (row, row_area) in (first_row..last_row).zip(row_areas.iter()) {
            let cells = Layout::horizontal(
                (0..self.columns).map(|_| Constraint::Ratio(1, self.columns as u32)),
            )
            .split(*row_area);

            for (col, cell) in cells.iter().enumerate() {
                let idx = row * self.columns + col;
                let Some(card) = cards.get(idx) else { break };
                render_tile(f, *cell, card, theme, focused && idx == self.selected);
            }
        }

        // Load-more indicator on the last line of the grid
        if let Some(BrowseStatus::Loading) = status {
            let footer = Rect {
                y: inner.bottom().saturating_sub(1),
                height: 1,
                ..inner
            };
            let loading = Paragraph::new(BrowseStatus::Loading.message())
                .alignment(Alignment::Right)
                .style(Style::default().fg(theme.muted));
            f.render_widget(loading, footer);
        }

        render_scrollbar(
            f,
            area,
            &self.scroll,
            ScrollbarStyle::Minimal,
            Style::default().fg(theme.muted),
        );
    }
}

impl Default for GalleryPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn render_tile(f: &mut Frame, area: Rect, card: &Card, theme: &Theme, selected: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(if selected {
            Style::default().fg(theme.selection_fg)
        } else {
            Style::default().fg(theme.border)
        });
    let inner = block.inner(area);
    let content = tile_content(card, inner.width as usize);

    let title_style = if selected {
        Style::default()
            .fg(theme.selection_fg)
            .bg(theme.selection)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(theme.card_name)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(Span::styled(content.title, title_style)),
        Line::from(Span::styled(
            content.type_line,
            Style::default()
                .fg(theme.card_type)
                .add_modifier(Modifier::ITALIC),
        )),
    ];
    lines.extend(
        content
            .text
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.card_text)))),
    );
    // Pin the image line to the bottom of the tile
    while lines.len() < (inner.height as usize).saturating_sub(1) {
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        content.image,
        Style::default().fg(theme.card_image),
    )));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

impl Scrollable for GalleryPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl ViewportProximity for GalleryPanel {
    fn distance_to_bottom(&self) -> usize {
        self.scroll.remaining_below() * TILE_HEIGHT as usize
    }
}

impl Interactive for GalleryPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        let page = self.scroll.viewport().max(1) as isize;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.select(self.selected.saturating_sub(1)),
            KeyCode::Right | KeyCode::Char('l') => self.select(self.selected + 1),
            KeyCode::Up | KeyCode::Char('k') => self.move_rows(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_rows(1),
            KeyCode::PageUp => self.move_rows(-page),
            KeyCode::PageDown => self.move_rows(page),
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(self.card_count.saturating_sub(1)),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("←↓↑→:move  Enter:details  y/Y:copy")
    }
}
