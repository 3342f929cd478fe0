use crate::lexiquest::app::state::AppState;
use crate::lexiquest::ui::theme::Theme;
use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" [{}] ", state.config.profile.display_name),
        Style::default().fg(Theme::ACCENT_SOFT).bg(Theme::BG_STATUS),
    ));
    parts.push(Span::styled(
        format!(" {} ", state.section.label()),
        Theme::status_bar(),
    ));
    parts.push(Span::styled(
        " Tab sections · 1-4 jump · ←/→ cards · Space flip · q quit ",
        Style::default().fg(Theme::TEXT_MUTED).bg(Theme::BG_STATUS),
    ));

    let clock = format!(" {} ", Local::now().format("%H:%M:%S"));

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + clock.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        clock,
        Style::default().fg(Theme::ACCENT_SOFT).bg(Theme::BG_STATUS),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
