use crate::lexiquest::app::state::{AppState, Section};
use crate::lexiquest::ui::theme::Theme;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Navigation
            Constraint::Length(5), // Streak panel
        ])
        .split(area);

    render_nav(frame, chunks[0], state);
    render_streak(frame, chunks[1], state);
}

fn render_nav(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" LexiQuest ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_accent())
        .padding(Padding::horizontal(1));

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let active = *section == state.section;
            let (prefix, style) = if active {
                ("▸ ", Theme::nav_active())
            } else {
                ("  ", Theme::nav_inactive())
            };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(section.label(), style),
                Span::styled(format!("  {}", i + 1), Theme::muted()),
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn render_streak(frame: &mut Frame, area: Rect, state: &AppState) {
    let profile = &state.config.profile;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Streak headline
            Constraint::Length(1), // Progress gauge
            Constraint::Length(1), // Milestone hint
        ])
        .split(inner);

    let headline = Line::from(vec![
        Span::styled("★ ", Theme::streak()),
        Span::styled(
            format!("{} Day Streak!", profile.streak_days),
            Theme::title(),
        ),
    ]);
    frame.render_widget(Paragraph::new(headline), chunks[0]);

    let milestone = profile.streak_milestone.max(1);
    let ratio = (profile.streak_days as f64 / milestone as f64).min(1.0);
    let gauge = Gauge::default()
        .ratio(ratio)
        .gauge_style(Style::default().fg(Theme::FLAME).bg(Theme::BORDER_DIM))
        .use_unicode(true)
        .label("");
    frame.render_widget(gauge, chunks[1]);

    let remaining = milestone.saturating_sub(profile.streak_days);
    let hint = if remaining == 0 {
        "Milestone reached!".to_string()
    } else {
        format!("{} days until next milestone", remaining)
    };
    frame.render_widget(Paragraph::new(hint).style(Theme::muted()), chunks[2]);
}
