use crate::lexiquest::app::state::AppState;
use crate::lexiquest::config::APP_NAME;
use crate::lexiquest::data::WORDS_PER_DAY;
use crate::lexiquest::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Padding};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Settings ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::new(2, 2, 1, 1));

    let cfg = &state.config;
    let rows = [
        ("Profile name", cfg.profile.display_name.clone()),
        ("Daily goal", format!("{} words", WORDS_PER_DAY)),
        ("Streak", format!("{} days", cfg.profile.streak_days)),
        (
            "Next milestone",
            format!("{} days", cfg.profile.streak_milestone),
        ),
        ("Tick rate", format!("{} ms", cfg.ui.tick_rate_ms)),
        (
            "Logging",
            if cfg.logging.enabled {
                format!("enabled ({})", cfg.logging.level)
            } else {
                "disabled".to_string()
            },
        ),
        (
            "Config file",
            crate::config::config_path(APP_NAME).display().to_string(),
        ),
    ];

    let mut items: Vec<ListItem> = rows
        .iter()
        .map(|(label, value)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<16}", label), Theme::muted()),
                Span::styled(value.clone(), Theme::text()),
            ]))
        })
        .collect();

    items.push(ListItem::new(Line::default()));
    items.push(ListItem::new(Span::styled(
        "Edit the file and restart to apply.",
        Theme::muted(),
    )));

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
