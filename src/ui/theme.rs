use ratatui::style::{Color, Modifier, Style};

use crate::alerts::AlertLevel;

pub(crate) const HEADER_BG: Color = Color::Rgb(24, 28, 44);
pub(crate) const HEADER_FG: Color = Color::Rgb(202, 211, 245);
pub(crate) const ACCENT: Color = Color::Rgb(122, 162, 247);
pub(crate) const GREEN: Color = Color::Rgb(158, 206, 106);
pub(crate) const RED: Color = Color::Rgb(247, 118, 142);
pub(crate) const YELLOW: Color = Color::Rgb(224, 175, 104);
pub(crate) const ORANGE: Color = Color::Rgb(255, 158, 100);
pub(crate) const SURFACE: Color = Color::Rgb(41, 46, 66);
pub(crate) const TEXT: Color = Color::Rgb(192, 202, 245);
pub(crate) const TEXT_DIM: Color = Color::Rgb(118, 124, 156);
pub(crate) const OVERLAY: Color = Color::Rgb(65, 72, 104);
pub(crate) const COMMAND_BG: Color = Color::Rgb(18, 21, 34);

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}

/// Color for a due-date cell or an alert count.
pub(crate) fn alert_style(level: AlertLevel) -> Style {
    match level {
        AlertLevel::Expired => Style::default().fg(RED).add_modifier(Modifier::BOLD),
        AlertLevel::Critical => Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
        AlertLevel::Warning => Style::default().fg(YELLOW),
        AlertLevel::Ok => Style::default().fg(GREEN),
        AlertLevel::None => dim_style(),
    }
}
