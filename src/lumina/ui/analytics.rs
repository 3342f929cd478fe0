use crate::lumina::app::state::AppState;
use crate::lumina::data::WEEK_FLOW;
use crate::lumina::ui::theme::Theme;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Padding, Paragraph};

/// Per-day income/expense bars: the same weekly series as the dashboard
/// chart, re-visualized for side-by-side comparison.
pub fn render(frame: &mut Frame, area: Rect, _state: &AppState) {
    let block = Block::default()
        .title(" Analytics ")
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
            Constraint::Min(5),    // Bars
        ])
        .split(inner);

    let legend = Line::from(vec![
        Span::styled("■ ", Theme::series_income()),
        Span::styled("Income   ", Theme::muted()),
        Span::styled("■ ", Theme::series_expenses()),
        Span::styled("Expenses", Theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(legend), chunks[0]);

    let max = WEEK_FLOW
        .iter()
        .map(|sample| sample.income.max(sample.expenses))
        .fold(0.0_f64, f64::max) as u64;

    let mut chart = BarChart::default()
        .bar_width(3)
        .bar_gap(1)
        .group_gap(2)
        .max(max);
    for sample in WEEK_FLOW {
        let bars = [
            Bar::default()
                .value(sample.income as u64)
                .style(Theme::series_income())
                .text_value(String::new()),
            Bar::default()
                .value(sample.expenses as u64)
                .style(Theme::series_expenses())
                .text_value(String::new()),
        ];
        let group = BarGroup::default()
            .label(Line::from(Span::styled(sample.day, Theme::muted())))
            .bars(&bars);
        chart = chart.data(group);
    }

    frame.render_widget(chart, chunks[1]);
}
