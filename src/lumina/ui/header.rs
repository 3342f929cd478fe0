use crate::lumina::app::state::AppState;
use crate::lumina::ui::theme::Theme;
use chrono::Local;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(16)])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            format!("Welcome back, {}", state.config.profile.display_name),
            Theme::title(),
        )),
        Line::from(Span::styled(
            "Here's what's happening with your money today.",
            Theme::muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let date = Local::now().format("%a %d %b").to_string();
    frame.render_widget(
        Paragraph::new(Span::styled(date, Theme::muted())).alignment(Alignment::Right),
        chunks[1],
    );
}
