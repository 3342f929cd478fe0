use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Rgb(139, 92, 246);
    pub const SECONDARY: Color = Color::Rgb(6, 182, 212);
    pub const SUCCESS: Color = Color::Rgb(52, 211, 153);
    pub const DANGER: Color = Color::Rgb(248, 113, 113);
    pub const TEXT: Color = Color::Rgb(249, 250, 251);
    pub const TEXT_MUTED: Color = Color::Rgb(156, 163, 175);
    pub const BORDER_DIM: Color = Color::Rgb(55, 65, 81);
    pub const BG_STATUS: Color = Color::Rgb(17, 24, 39);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_accent() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn nav_active() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_inactive() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn value() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    pub fn income() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn expense() -> Style {
        Style::default().fg(Self::DANGER)
    }

    pub fn trend_up() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn trend_down() -> Style {
        Style::default().fg(Self::DANGER)
    }

    pub fn series_income() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn series_expenses() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BG_STATUS)
    }
}
