use crate::lexiquest::app::state::AppState;
use crate::lexiquest::data::WORDS_PER_DAY;
use crate::lexiquest::ui::theme::Theme;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress row
            Constraint::Length(1), // Spacer
            Constraint::Min(10),   // Card
            Constraint::Length(1), // Navigation hints
        ])
        .split(area);

    render_progress(frame, chunks[0], state);
    render_card(frame, card_area(chunks[2]), state);
    render_nav_hints(frame, chunks[3], state);
}

fn render_progress(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans: Vec<Span> = Vec::new();
    for i in 0..WORDS_PER_DAY {
        let style = if i <= state.card_cursor {
            Theme::progress_done()
        } else {
            Theme::progress_todo()
        };
        spans.push(Span::styled("████ ", style));
    }

    let label = format!("WORD {} OF {}", state.card_cursor + 1, WORDS_PER_DAY);
    let used: usize = spans.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + label.width());
    spans.push(Span::raw(" ".repeat(remaining)));
    spans.push(Span::styled(label, Theme::muted()));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Center the card horizontally, capped to a readable width.
fn card_area(area: Rect) -> Rect {
    let width = area.width.min(64);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

fn render_card(frame: &mut Frame, area: Rect, state: &AppState) {
    let entry = state.current_entry();

    if state.flipped {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::border_accent())
            .padding(Padding::new(3, 3, 1, 1))
            .style(Theme::card_back());

        let lines = vec![
            Line::from(Span::styled(
                "MEANING",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(entry.meaning),
            Line::default(),
            Line::from(Span::styled("────────", Style::default().fg(Theme::ACCENT_SOFT))),
            Line::default(),
            Line::from(Span::styled(
                "EXAMPLE",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("\u{201c}{}\u{201d}", entry.example),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
        ];

        let card = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(card, area);
    } else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::border_accent())
            .padding(Padding::new(3, 3, 1, 1));

        let lines = vec![
            Line::from(Span::styled("VOCABULARY OF THE DAY", Theme::card_label())),
            Line::default(),
            Line::from(Span::styled(entry.word, Theme::word())),
            Line::default(),
            Line::from(Span::styled(entry.phonetics, Theme::phonetics())),
            Line::default(),
            Line::from(Span::styled("Press Space to flip and see meaning", Theme::muted())),
        ];

        let card = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(card, area);
    }
}

fn render_nav_hints(frame: &mut Frame, area: Rect, state: &AppState) {
    // Dimmed arrows stand in for disabled buttons at the bounds.
    let prev_style = if state.at_first_card() {
        Theme::nav_disabled()
    } else {
        Theme::nav_enabled()
    };
    let next_style = if state.at_last_card() {
        Theme::nav_disabled()
    } else {
        Theme::nav_enabled()
    };

    let line = Line::from(vec![
        Span::styled("◀ prev", prev_style),
        Span::styled("   ·   ", Theme::muted()),
        Span::styled("Space flip", Theme::muted()),
        Span::styled("   ·   ", Theme::muted()),
        Span::styled("next ▶", next_style),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
