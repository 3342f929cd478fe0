use crate::lumina::app::state::AppState;
use crate::lumina::data::{Stat, Trend, TxKind, STATS, TRANSACTIONS};
use crate::lumina::ui::format;
use crate::lumina::ui::theme::Theme;
use crate::lumina::ui::chart;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Stat cards
            Constraint::Min(8),    // Chart + recent activity
        ])
        .split(area);

    render_stats(frame, chunks[0], state);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    render_flow_panel(frame, lower[0], state);
    render_recent_activity(frame, lower[1], state);
}

fn render_stats(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (stat, chunk) in STATS.iter().zip(chunks.iter()) {
        render_stat_card(frame, *chunk, state, stat);
    }
}

fn render_stat_card(frame: &mut Frame, area: Rect, state: &AppState, stat: &Stat) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let (arrow, trend_style) = match stat.trend {
        Trend::Up => ("▲", Theme::trend_up()),
        Trend::Down => ("▼", Theme::trend_down()),
    };

    let currency = &state.config.profile.currency;
    let lines = vec![
        Line::from(Span::styled(stat.title, Theme::muted())),
        Line::from(Span::styled(
            format::currency(currency, stat.value),
            Theme::value(),
        )),
        Line::from(Span::styled(
            format!("{} {}%", arrow, stat.change_pct),
            trend_style,
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_flow_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Revenue Flow ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Legend
            Constraint::Min(5),    // Chart
        ])
        .split(inner);

    let legend = Line::from(vec![
        Span::styled("■ ", Theme::series_income()),
        Span::styled("Income   ", Theme::muted()),
        Span::styled("■ ", Theme::series_expenses()),
        Span::styled("Expenses   ", Theme::muted()),
        Span::styled("Last 7 days", Theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(legend), chunks[0]);

    chart::render(frame, chunks[1], state);
}

fn render_recent_activity(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Recent Activity ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let inner_width = block.inner(area).width as usize;
    let currency = &state.config.profile.currency;

    let items: Vec<ListItem> = TRANSACTIONS
        .iter()
        .map(|tx| {
            let (arrow, amount_style) = match tx.kind {
                TxKind::Income => ("↓ ", Theme::income()),
                TxKind::Expense => ("↑ ", Theme::expense()),
            };

            let amount = format::signed_currency(currency, tx.amount);
            let left_width = arrow.width() + tx.name.width();
            let pad = inner_width.saturating_sub(left_width + amount.width());

            let first = Line::from(vec![
                Span::styled(arrow, amount_style),
                Span::styled(tx.name, Theme::text()),
                Span::raw(" ".repeat(pad)),
                Span::styled(amount, amount_style),
            ]);
            let second = Line::from(Span::styled(
                format!("  {} · {}", tx.category, tx.when),
                Theme::muted(),
            ));
            ListItem::new(vec![first, second])
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
