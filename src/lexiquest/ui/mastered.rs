use crate::lexiquest::app::state::AppState;
use crate::lexiquest::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, _state: &AppState) {
    let block = Block::default()
        .title(" Mastered ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::new(2, 2, 1, 1));

    let lines = vec![
        Line::from(Span::styled("Nothing here yet.", Theme::text())),
        Line::default(),
        Line::from(Span::styled(
            "Finish today's quest to start your collection.",
            Theme::muted(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
