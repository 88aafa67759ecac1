// Theme system for the TUI
//
// Built-in color themes that can be switched at runtime with 't'.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
    Dracula,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Nord,
            ThemeKind::Dracula,
        ]
    }

    /// Look up a theme by (case-insensitive) name, falling back to Dark
    pub fn from_name(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_else(|| {
                tracing::warn!("Unknown theme '{}', using Dark", name);
                ThemeKind::Dark
            })
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Nord => "Nord",
            ThemeKind::Dracula => "Dracula",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
            ThemeKind::Dracula => Theme::dracula(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // ─── Chrome ──────────────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub title: Color,
    pub status_bar: Color,
    pub border: Color,
    /// Focused panel border
    pub highlight: Color,
    pub border_type: BorderType,
    pub muted: Color,

    // ─── Selection ───────────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Card tiles ──────────────────────────────────────────
    pub card_name: Color,
    pub card_type: Color,
    pub card_text: Color,
    pub card_image: Color,

    // ─── Log levels ──────────────────────────────────────────
    pub error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "Dark",
            background: Color::Reset,
            foreground: Color::White,
            title: Color::Cyan,
            status_bar: Color::Green,
            border: Color::Gray,
            highlight: Color::Cyan,
            border_type: BorderType::Rounded,
            muted: Color::DarkGray,

            selection: Color::DarkGray,
            selection_fg: Color::Yellow,

            card_name: Color::Yellow,
            card_type: Color::Cyan,
            card_text: Color::White,
            card_image: Color::Magenta,

            error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light",
            background: Color::White,
            foreground: Color::Black,
            title: Color::Blue,
            status_bar: Color::DarkGray,
            border: Color::DarkGray,
            highlight: Color::Blue,
            border_type: BorderType::Plain,
            muted: Color::Gray,

            selection: Color::LightBlue,
            selection_fg: Color::Black,

            card_name: Color::Rgb(184, 134, 11), // Dark goldenrod
            card_type: Color::Blue,
            card_text: Color::Black,
            card_image: Color::Magenta,

            error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11),
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "Nord",
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(236, 239, 244),
            title: Color::Rgb(136, 192, 208),      // Frost
            status_bar: Color::Rgb(163, 190, 140), // Green
            border: Color::Rgb(76, 86, 106),
            highlight: Color::Rgb(136, 192, 208),
            border_type: BorderType::Rounded,
            muted: Color::Rgb(76, 86, 106),

            selection: Color::Rgb(67, 76, 94),
            selection_fg: Color::Rgb(235, 203, 139),

            card_name: Color::Rgb(235, 203, 139),
            card_type: Color::Rgb(129, 161, 193),
            card_text: Color::Rgb(216, 222, 233),
            card_image: Color::Rgb(180, 142, 173),

            error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(76, 86, 106),
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "Dracula",
            background: Color::Rgb(40, 42, 54),
            foreground: Color::Rgb(248, 248, 242),
            title: Color::Rgb(139, 233, 253),     // Cyan
            status_bar: Color::Rgb(80, 250, 123), // Green
            border: Color::Rgb(68, 71, 90),
            highlight: Color::Rgb(189, 147, 249), // Purple
            border_type: BorderType::Rounded,
            muted: Color::Rgb(98, 114, 164),

            selection: Color::Rgb(68, 71, 90),
            selection_fg: Color::Rgb(241, 250, 140),

            card_name: Color::Rgb(241, 250, 140),
            card_type: Color::Rgb(139, 233, 253),
            card_text: Color::Rgb(248, 248, 242),
            card_image: Color::Rgb(255, 121, 198),

            error: Color::Rgb(255, 85, 85),
            log_warn: Color::Rgb(241, 250, 140),
            log_info: Color::Rgb(139, 233, 253),
            log_debug: Color::Rgb(98, 114, 164),
        }
    }
}
