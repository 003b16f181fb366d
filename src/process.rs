//! Line splitter (C5) and Processor (C6).

use crate::constants::DELIMITER;
use crate::text::clean;
use crate::types::ScansionKey;
use crate::units::extract_units;

/// Split a verse on the literal delimiter and trim each piece
/// (spec.md §4.4). A verse without the delimiter yields one piece.
pub fn split_hemistichs(verse: &str) -> Vec<String> {
    verse.split(DELIMITER).map(|s| s.trim().to_string()).collect()
}

/// Run cleaner → whitespace removal → unit extraction over each
/// delimiter-separated piece of `text`, yielding the scansion key
/// (spec.md §4.4).
pub fn process_line(text: &str) -> ScansionKey {
    let units = split_hemistichs(text)
        .into_iter()
        .map(|piece| {
            let cleaned = clean(&piece);
            let no_whitespace: String = cleaned.chars().filter(|c| !c.is_whitespace()).collect();
            extract_units(&no_whitespace)
        })
        .collect();
    ScansionKey(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_piece_without_delimiter() {
        let key = process_line("بَ بْ");
        assert_eq!(key.len(), 1);
    }

    #[test]
    fn two_pieces_with_delimiter() {
        let key = process_line("بَ *** بْ");
        assert_eq!(key.len(), 2);
        assert!(key.is_matchable());
    }

    #[test]
    fn whitespace_between_words_is_removed_before_extraction() {
        let key = process_line("بَ بْ");
        // two words, one base code point each, no whitespace unit produced
        assert_eq!(key.0[0].len(), 2);
    }

    #[test]
    fn punctuation_invariance() {
        let a = process_line("بَ بْ *** بَ بْ");
        let b = process_line("بَ، بْ! *** بَ بْ");
        assert_eq!(a, b);
    }

    #[test]
    fn tatweel_invariance() {
        let a = process_line("بَ بْ *** بَ بْ");
        let b = process_line("بَــ بْــ *** بَ بْ");
        assert_eq!(a, b);
    }
}
