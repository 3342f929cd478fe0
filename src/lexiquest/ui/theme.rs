use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Rgb(99, 102, 241);
    pub const ACCENT_SOFT: Color = Color::Rgb(165, 180, 252);
    pub const FLAME: Color = Color::Rgb(249, 115, 22);
    pub const GOLD: Color = Color::Rgb(234, 179, 8);
    pub const TEXT: Color = Color::Rgb(226, 232, 240);
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);
    pub const BORDER_DIM: Color = Color::Rgb(51, 65, 85);
    pub const BG_STATUS: Color = Color::Rgb(30, 41, 59);
    pub const CARD_BACK_BG: Color = Color::Rgb(67, 56, 202);

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

    pub fn word() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    pub fn phonetics() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn card_label() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_back() -> Style {
        Style::default().fg(Color::White).bg(Self::CARD_BACK_BG)
    }

    pub fn progress_done() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn progress_todo() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn nav_enabled() -> Style {
        Style::default().fg(Self::ACCENT_SOFT)
    }

    pub fn nav_disabled() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn streak() -> Style {
        Style::default().fg(Self::FLAME).add_modifier(Modifier::BOLD)
    }

    pub fn xp() -> Style {
        Style::default().fg(Self::GOLD).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BG_STATUS)
    }
}
