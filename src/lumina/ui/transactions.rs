use crate::lumina::app::state::AppState;
use crate::lumina::data::{TxKind, TRANSACTIONS};
use crate::lumina::ui::format;
use crate::lumina::ui::theme::Theme;
use ratatui::layout::Constraint;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Padding, Row, Table};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Transactions ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let header = Row::new(vec!["Name", "Category", "When", "Amount"])
        .style(Theme::muted())
        .bottom_margin(1);

    let currency = &state.config.profile.currency;
    let rows: Vec<Row> = TRANSACTIONS
        .iter()
        .map(|tx| {
            let amount_style = match tx.kind {
                TxKind::Income => Theme::income(),
                TxKind::Expense => Theme::expense(),
            };
            Row::new(vec![
                Cell::from(Span::styled(tx.name, Theme::text())),
                Cell::from(Span::styled(tx.category, Theme::muted())),
                Cell::from(Span::styled(tx.when, Theme::muted())),
                Cell::from(Span::styled(
                    format::signed_currency(currency, tx.amount),
                    amount_style,
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(block);

    frame.render_widget(table, area);
}
