use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(22, 24, 28);
    pub const BG_SURFACE: Color = Color::Rgb(30, 33, 39);
    pub const BG_ELEVATED: Color = Color::Rgb(40, 44, 52);
    pub const BORDER_DIM: Color = Color::Rgb(70, 76, 88);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 228);
    pub const TEXT_SECONDARY: Color = Color::Rgb(150, 156, 168);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 106, 118);
    pub const ACCENT_TEAL: Color = Color::Rgb(86, 182, 194);
    pub const ACCENT_AMBER: Color = Color::Rgb(229, 192, 123);
    pub const ACCENT_GREEN: Color = Color::Rgb(152, 195, 121);
    pub const ACCENT_RED: Color = Color::Rgb(224, 108, 117);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn row_selected() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn item_packed() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn item_unpacked() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn you_owe() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }

    pub fn owes_you() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn even() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn tab_active() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_ELEVATED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }
}

/// Border style, border type and background for a panel.
pub fn panel_styles(focused: bool) -> (Style, BorderType, Style) {
    if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    }
}
