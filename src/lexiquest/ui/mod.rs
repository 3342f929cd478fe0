mod header;
mod layout;
mod learn;
mod mastered;
mod schedule;
mod settings;
mod sidebar;
mod status_bar;
mod theme;

use crate::lexiquest::app::state::{AppState, Section};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    sidebar::render(frame, app_layout.sidebar, state);
    header::render(frame, app_layout.header, state);
    match state.section {
        Section::Learn => learn::render(frame, app_layout.content, state),
        Section::Mastered => mastered::render(frame, app_layout.content, state),
        Section::Schedule => schedule::render(frame, app_layout.content, state),
        Section::Settings => settings::render(frame, app_layout.content, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}
