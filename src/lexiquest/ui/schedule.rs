use crate::lexiquest::app::state::AppState;
use crate::lexiquest::data::WORDS_PER_DAY;
use crate::lexiquest::ui::theme::Theme;
use chrono::{Days, Local};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Padding};

pub fn render(frame: &mut Frame, area: Rect, _state: &AppState) {
    let block = Block::default()
        .title(" Schedule ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::new(2, 2, 1, 1));

    let today = Local::now().date_naive();
    let items: Vec<ListItem> = (0..7u64)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .map(|date| {
            let is_today = date == today;
            let day_style = if is_today {
                Theme::nav_active()
            } else {
                Theme::text()
            };
            let mut spans = vec![
                Span::styled(format!("{:<12}", date.format("%a %d %b")), day_style),
                Span::styled(format!("{} new words", WORDS_PER_DAY), Theme::muted()),
            ];
            if is_today {
                spans.push(Span::styled("  ◂ today", Theme::nav_active()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
