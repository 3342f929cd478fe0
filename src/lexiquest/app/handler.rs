use crate::lexiquest::app::state::{AppState, Section};
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
        _ => handle_section_key(state, key),
    }
}

fn handle_section_key(state: &mut AppState, key: KeyEvent) {
    if state.section != Section::Learn {
        return;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            state.prev_card();
            tracing::debug!(cursor = state.card_cursor, "card changed");
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.next_card();
            tracing::debug!(cursor = state.card_cursor, "card changed");
        }
        KeyCode::Char(' ') | KeyCode::Enter => state.flip_card(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexiquest::config::AppConfig;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_tab_cycles_sections() {
        let mut s = AppState::new(AppConfig::default());
        handle_event(&mut s, key(KeyCode::Tab));
        assert_eq!(s.section, Section::Mastered);
        handle_event(&mut s, key(KeyCode::BackTab));
        assert_eq!(s.section, Section::Learn);
    }

    #[test]
    fn test_digit_selects_section_and_invalid_digit_is_ignored() {
        let mut s = AppState::new(AppConfig::default());
        handle_event(&mut s, key(KeyCode::Char('4')));
        assert_eq!(s.section, Section::Settings);
        handle_event(&mut s, key(KeyCode::Char('9')));
        assert_eq!(s.section, Section::Settings);
    }

    #[test]
    fn test_card_keys_only_apply_in_learn_section() {
        let mut s = AppState::new(AppConfig::default());
        handle_event(&mut s, key(KeyCode::Right));
        assert_eq!(s.card_cursor, 1);

        handle_event(&mut s, key(KeyCode::Char('2')));
        handle_event(&mut s, key(KeyCode::Right));
        assert_eq!(s.card_cursor, 0);
    }

    #[test]
    fn test_space_flips_card() {
        let mut s = AppState::new(AppConfig::default());
        handle_event(&mut s, key(KeyCode::Char(' ')));
        assert!(s.flipped);
        handle_event(&mut s, key(KeyCode::Enter));
        assert!(!s.flipped);
    }

    #[test]
    fn test_quit_keys() {
        let mut s = AppState::new(AppConfig::default());
        handle_event(&mut s, key(KeyCode::Char('q')));
        assert!(s.should_quit);
    }
}
