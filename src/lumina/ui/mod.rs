mod analytics;
mod chart;
mod dashboard;
mod format;
mod header;
mod layout;
mod settings;
mod sidebar;
mod status_bar;
mod theme;
mod transactions;

use crate::lumina::app::state::{AppState, Section};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    sidebar::render(frame, app_layout.sidebar, state);
    header::render(frame, app_layout.header, state);
    match state.section {
        Section::Dashboard => dashboard::render(frame, app_layout.content, state),
        Section::Transactions => transactions::render(frame, app_layout.content, state),
        Section::Analytics => analytics::render(frame, app_layout.content, state),
        Section::Settings => settings::render(frame, app_layout.content, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}
