// Modal overlay rendering
//
// - Help modal: keyboard shortcuts and current theme
// - Card detail modal: full card text, scrollable

use crate::tui::app::App;
use crate::tui::components::detail_panel::card_lines;
use crate::tui::components::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::tui::modal::Modal;
use crate::tui::traits::Scrollable;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, modal: &Modal, app: &mut App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::CardDetail(idx) => render_detail(f, app, *idx),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.card_name);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Search", header_style)),
        kb("/", "Focus the search bar"),
        kb("Enter", "Search by name"),
        kb("Ctrl+U", "Clear the search box"),
        kb("Esc", "Back to the gallery"),
        Line::raw(""),
        Line::from(Span::styled("  Gallery", header_style)),
        kb("←↓↑→, hjkl", "Move selection"),
        kb("PgUp/PgDn", "Move a page"),
        kb("Home/End", "First / last card"),
        kb("Enter", "Card details"),
        kb("r", "Reload results"),
        Line::raw(""),
        Line::from(Span::styled("  Clipboard", header_style)),
        kb("y", "Copy card (text)"),
        kb("Y", "Copy card (JSON)"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("Tab", "Cycle focus"),
        kb("t", "Next theme"),
        kb("L", "Toggle logs"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name, key_style),
            Span::styled("  |  Source: ", desc_style),
            Span::styled(app.source_label.as_str(), key_style),
        ]),
    ]);

    let width = 52;
    let height = content.height() as u16 + 2;
    let area = centered_rect(width, height, f.area());

    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

fn render_detail(f: &mut Frame, app: &mut App, idx: usize) {
    let Some(card) = app.session.results().get(idx) else {
        return;
    };

    let frame_area = f.area();
    let width = (frame_area.width * 70 / 100).max(40);
    let height = (frame_area.height * 70 / 100).max(12);
    let area = centered_rect(width, height, frame_area);

    f.render_widget(Clear, area);

    let viewport_height = area.height.saturating_sub(2) as usize;
    // Borders plus one column for the scrollbar
    let viewport_width = area.width.saturating_sub(3) as usize;

    let lines = card_lines(card, &app.theme, viewport_width);
    let total_lines = lines.len();

    app.detail_panel.update_dimensions(total_lines, viewport_height);
    let offset = app.detail_panel.scroll_offset();

    let scroll_info = if total_lines > viewport_height {
        format!(" ({}/{}) ", offset + 1, total_lines)
    } else {
        String::new()
    };

    let paragraph = Paragraph::new(lines)
        .style(
            Style::default()
                .fg(app.theme.foreground)
                .bg(app.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.highlight))
                .title(format!(" Card {}{}", idx + 1, scroll_info))
                .title_bottom(Line::from(" ↑↓:scroll  y:copy  Y:json  Esc:close ").centered()),
        )
        .scroll((offset as u16, 0));

    f.render_widget(paragraph, area);
    render_scrollbar(
        f,
        area,
        app.detail_panel.scroll_state(),
        ScrollbarStyle::Arrows,
        Style::default().fg(app.theme.muted),
    );
}
