use crate::lexiquest::config::AppConfig;
use crate::lexiquest::data::{self, VocabEntry, WORDS_PER_DAY};

/// Top-level view modes, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Learn,
    Mastered,
    Schedule,
    Settings,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Learn,
        Section::Mastered,
        Section::Schedule,
        Section::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Learn => "Daily Quest",
            Section::Mastered => "Mastered",
            Section::Schedule => "Schedule",
            Section::Settings => "Settings",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::Learn => 0,
            Section::Mastered => 1,
            Section::Schedule => 2,
            Section::Settings => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Self::ALL.get(index).copied()
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub section: Section,
    /// Card cursor within today's quest, clamped to `0..WORDS_PER_DAY`.
    pub card_cursor: usize,
    /// Whether the current card shows its answer face.
    pub flipped: bool,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            section: Section::Learn,
            card_cursor: 0,
            flipped: false,
            should_quit: false,
            dirty: true,
        }
    }

    /// Switch to the section at `index` in sidebar order. Unknown indices
    /// are ignored.
    pub fn select_section(&mut self, index: usize) {
        let Some(section) = Section::from_index(index) else {
            return;
        };
        self.set_section(section);
    }

    /// Leaving a section discards its sub-state, so returning to the
    /// quest starts over at the front of the first card.
    pub fn set_section(&mut self, section: Section) {
        if section == self.section {
            return;
        }
        self.section = section;
        self.card_cursor = 0;
        self.flipped = false;
        self.dirty = true;
    }

    pub fn next_section(&mut self) {
        let next = (self.section.index() + 1) % Section::ALL.len();
        self.set_section(Section::ALL[next]);
    }

    pub fn prev_section(&mut self) {
        let len = Section::ALL.len();
        let prev = (self.section.index() + len - 1) % len;
        self.set_section(Section::ALL[prev]);
    }

    /// Advance to the next card, saturating at the last word of the day.
    /// Landing on a different card always shows its front face.
    pub fn next_card(&mut self) {
        let clamped = (self.card_cursor + 1).min(WORDS_PER_DAY - 1);
        if clamped != self.card_cursor {
            self.card_cursor = clamped;
            self.flipped = false;
            self.dirty = true;
        }
    }

    /// Step back one card, saturating at the first.
    pub fn prev_card(&mut self) {
        let clamped = self.card_cursor.saturating_sub(1);
        if clamped != self.card_cursor {
            self.card_cursor = clamped;
            self.flipped = false;
            self.dirty = true;
        }
    }

    pub fn flip_card(&mut self) {
        self.flipped = !self.flipped;
        self.dirty = true;
    }

    pub fn current_entry(&self) -> &'static VocabEntry {
        data::entry_for(self.card_cursor)
    }

    pub fn at_first_card(&self) -> bool {
        self.card_cursor == 0
    }

    pub fn at_last_card(&self) -> bool {
        self.card_cursor == WORDS_PER_DAY - 1
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexiquest::data::DECK;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn test_defaults_to_learn_section() {
        let s = state();
        assert_eq!(s.section, Section::Learn);
        assert_eq!(s.card_cursor, 0);
        assert!(!s.flipped);
    }

    #[test]
    fn test_next_then_prev_restores_cursor() {
        for start in 0..WORDS_PER_DAY - 1 {
            let mut s = state();
            s.card_cursor = start;
            s.next_card();
            s.prev_card();
            assert_eq!(s.card_cursor, start);
        }
        // At the upper bound next() saturates, so the pair steps back.
        let mut s = state();
        s.card_cursor = WORDS_PER_DAY - 1;
        s.next_card();
        s.prev_card();
        assert_eq!(s.card_cursor, WORDS_PER_DAY - 2);
    }

    #[test]
    fn test_prev_then_next_restores_cursor() {
        for start in 1..WORDS_PER_DAY {
            let mut s = state();
            s.card_cursor = start;
            s.prev_card();
            s.next_card();
            assert_eq!(s.card_cursor, start);
        }
        // At the lower bound prev() saturates, so the pair steps forward.
        let mut s = state();
        s.prev_card();
        s.next_card();
        assert_eq!(s.card_cursor, 1);
    }

    #[test]
    fn test_cursor_saturates_at_bounds() {
        let mut s = state();
        s.prev_card();
        assert_eq!(s.card_cursor, 0);

        for _ in 0..WORDS_PER_DAY - 1 {
            s.next_card();
        }
        assert_eq!(s.card_cursor, WORDS_PER_DAY - 1);
        s.next_card();
        assert_eq!(s.card_cursor, WORDS_PER_DAY - 1);
    }

    #[test]
    fn test_displayed_entry_wraps_deck() {
        let mut s = state();
        let first = s.current_entry();
        for _ in 0..DECK.len() {
            s.next_card();
        }
        assert_eq!(s.card_cursor, DECK.len());
        assert_eq!(s.current_entry(), first);
    }

    #[test]
    fn test_flip_is_involution() {
        let mut s = state();
        s.flip_card();
        assert!(s.flipped);
        s.flip_card();
        assert!(!s.flipped);
    }

    #[test]
    fn test_navigation_resets_flip() {
        let mut s = state();
        s.flip_card();
        s.next_card();
        assert!(!s.flipped);

        s.flip_card();
        s.prev_card();
        assert!(!s.flipped);
    }

    #[test]
    fn test_flip_does_not_persist_per_card() {
        let mut s = state();
        s.flip_card();
        s.next_card();
        s.prev_card();
        // Back on card 0: a fresh flip state applies.
        assert_eq!(s.card_cursor, 0);
        assert!(!s.flipped);
    }

    #[test]
    fn test_saturated_navigation_keeps_flip() {
        // No card change, no flip reset.
        let mut s = state();
        s.flip_card();
        s.prev_card();
        assert!(s.flipped);

        s.card_cursor = WORDS_PER_DAY - 1;
        s.next_card();
        assert!(s.flipped);
    }

    #[test]
    fn test_select_section_valid() {
        let mut s = state();
        s.select_section(3);
        assert_eq!(s.section, Section::Settings);
        s.select_section(1);
        assert_eq!(s.section, Section::Mastered);
    }

    #[test]
    fn test_select_section_out_of_range_is_ignored() {
        let mut s = state();
        s.select_section(4);
        assert_eq!(s.section, Section::Learn);
        s.select_section(99);
        assert_eq!(s.section, Section::Learn);
    }

    #[test]
    fn test_section_switch_resets_learn_state() {
        let mut s = state();
        s.next_card();
        s.flip_card();
        s.set_section(Section::Mastered);
        s.set_section(Section::Learn);
        assert_eq!(s.card_cursor, 0);
        assert!(!s.flipped);
    }

    #[test]
    fn test_section_cycle_wraps() {
        let mut s = state();
        for _ in 0..Section::ALL.len() {
            s.next_section();
        }
        assert_eq!(s.section, Section::Learn);
        s.prev_section();
        assert_eq!(s.section, Section::Settings);
    }
}
