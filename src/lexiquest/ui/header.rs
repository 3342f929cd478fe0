use crate::lexiquest::app::state::AppState;
use crate::lexiquest::data::WORDS_PER_DAY;
use crate::lexiquest::ui::theme::Theme;
use chrono::{Local, Timelike};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let profile = &state.config.profile;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(16)])
        .split(area);

    let greeting = match Local::now().hour() {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("{}, {}", greeting, profile.display_name),
            Theme::title(),
        )),
        Line::from(Span::styled(
            format!("Ready to discover {} new words today?", WORDS_PER_DAY),
            Theme::muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let badge = Line::from(vec![
        Span::styled("✦ ", Theme::xp()),
        Span::styled(format!("{} XP", group_thousands(profile.xp)), Theme::xp()),
    ]);
    frame.render_widget(Paragraph::new(badge).alignment(Alignment::Right), chunks[1]);
}

fn group_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(2450), "2,450");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
