use crate::lumina::app::state::{AppState, Section};
use crate::lumina::ui::theme::Theme;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Navigation
            Constraint::Length(6), // Upgrade card
        ])
        .split(area);

    render_nav(frame, chunks[0], state);
    render_upgrade(frame, chunks[1]);
}

fn render_nav(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Lumina ")
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

fn render_upgrade(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let lines = vec![
        Line::from(Span::styled("UPGRADE PRO", Theme::nav_active())),
        Line::from(Span::styled(
            "Get AI-powered financial insights and more.",
            Theme::muted(),
        )),
    ];
    let card = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}
