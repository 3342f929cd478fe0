use crate::lumina::app::state::AppState;
use crate::lumina::data::WEEK_FLOW;
use crate::lumina::ui::format;
use crate::lumina::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType};

/// Two-series line chart of the weekly flow. All scaling arithmetic is
/// local to rendering; the data itself is never transformed.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let income: Vec<(f64, f64)> = WEEK_FLOW
        .iter()
        .enumerate()
        .map(|(i, sample)| (i as f64, sample.income))
        .collect();
    let expenses: Vec<(f64, f64)> = WEEK_FLOW
        .iter()
        .enumerate()
        .map(|(i, sample)| (i as f64, sample.expenses))
        .collect();

    let max = WEEK_FLOW
        .iter()
        .map(|sample| sample.income.max(sample.expenses))
        .fold(0.0_f64, f64::max);
    let y_max = max * 1.1;

    let datasets = vec![
        Dataset::default()
            .name("Income")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Theme::series_income())
            .data(&income),
        Dataset::default()
            .name("Expenses")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Theme::series_expenses())
            .data(&expenses),
    ];

    let currency = &state.config.profile.currency;
    let x_labels: Vec<Span> = WEEK_FLOW
        .iter()
        .map(|sample| Span::styled(sample.day, Theme::muted()))
        .collect();
    let y_labels = vec![
        Span::styled(format!("{}0", currency), Theme::muted()),
        Span::styled(
            format!("{}{}", currency, format::group_thousands((y_max / 2.0) as u64)),
            Theme::muted(),
        ),
        Span::styled(
            format!("{}{}", currency, format::group_thousands(y_max as u64)),
            Theme::muted(),
        ),
    ];

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .style(Theme::border())
                .bounds([0.0, (WEEK_FLOW.len() - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Theme::border())
                .bounds([0.0, y_max])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}
