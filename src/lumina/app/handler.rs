use crate::lumina::app::state::AppState;
use crate::term::AppEvent;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            // Status-bar clock advances.
            state.dirty = true;
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => state.dirty = true,
        _ => {}
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') => state.quit(),
        KeyCode::Tab => {
            state.next_section();
            tracing::debug!(section = state.section.label(), "section changed");
        }
        KeyCode::BackTab => {
            state.prev_section();
            tracing::debug!(section = state.section.label(), "section changed");
        }
        KeyCode::Char(c @ '1'..='9') => {
            // Digits past the section count fall through from_index and
            // are silently ignored.
            state.select_section(c as usize - '1' as usize);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lumina::app::state::Section;
    use crate::lumina::config::AppConfig;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_tab_cycles_sections() {
        let mut s = AppState::new(AppConfig::default());
        handle_event(&mut s, key(KeyCode::Tab));
        assert_eq!(s.section, Section::Transactions);
        handle_event(&mut s, key(KeyCode::BackTab));
        assert_eq!(s.section, Section::Dashboard);
    }

    #[test]
    fn test_digit_selects_section_and_invalid_digit_is_ignored() {
        let mut s = AppState::new(AppConfig::default());
        handle_event(&mut s, key(KeyCode::Char('3')));
        assert_eq!(s.section, Section::Analytics);
        handle_event(&mut s, key(KeyCode::Char('8')));
        assert_eq!(s.section, Section::Analytics);
    }

    #[test]
    fn test_quit_keys() {
        let mut s = AppState::new(AppConfig::default());
        handle_event(&mut s, key(KeyCode::Char('q')));
        assert!(s.should_quit);
    }
}
