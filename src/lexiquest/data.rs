//! Built-in demo deck.
//!
//! The deck is a compiled-in constant: the trainer ships with sample
//! content and never mutates it at runtime. The daily quest always runs
//! over five words; when the deck is shorter, indexing wraps around.

/// Number of cards in a daily quest, independent of deck length.
pub const WORDS_PER_DAY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabEntry {
    pub word: &'static str,
    pub phonetics: &'static str,
    pub meaning: &'static str,
    pub example: &'static str,
}

pub const DECK: &[VocabEntry] = &[
    VocabEntry {
        word: "Ephemeral",
        phonetics: "/ɪˈfem.ər.əl/",
        meaning: "Lasting for a very short time.",
        example: "The autumnal colors are beautiful but ephemeral.",
    },
    VocabEntry {
        word: "Serendipity",
        phonetics: "/ˌser.ənˈdɪp.ə.ti/",
        meaning: "The occurrence of events by chance in a happy way.",
        example: "Nature has created wonderful serendipity for us.",
    },
    VocabEntry {
        word: "Eloquent",
        phonetics: "/ˈel.ə.kwənt/",
        meaning: "Fluent or persuasive in speaking or writing.",
        example: "He made an eloquent plea for peace.",
    },
];

/// Entry shown at a cursor position. Indexing wraps around the deck, so
/// every cursor in `0..WORDS_PER_DAY` resolves to a valid entry.
pub fn entry_for(cursor: usize) -> &'static VocabEntry {
    &DECK[cursor % DECK.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraparound_indexing() {
        assert_eq!(entry_for(3), entry_for(0));
        assert_eq!(entry_for(4), entry_for(1));
    }

    #[test]
    fn test_every_cursor_resolves() {
        for cursor in 0..WORDS_PER_DAY {
            assert_eq!(entry_for(cursor), &DECK[cursor % DECK.len()]);
        }
    }

    #[test]
    fn test_entries_are_complete() {
        assert!(!DECK.is_empty());
        for entry in DECK {
            assert!(!entry.word.is_empty());
            assert!(!entry.phonetics.is_empty());
            assert!(!entry.meaning.is_empty());
            assert!(!entry.example.is_empty());
        }
    }
}
