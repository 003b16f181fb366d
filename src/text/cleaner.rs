//! Text cleaner (C1): strips punctuation and tatweel, collapses whitespace.

use crate::constants::{STRIPPABLE_PUNCTUATION, TATWEEL};

/// Strip the fixed punctuation set and tatweel, then collapse runs of
/// whitespace to a single space and trim both ends (spec.md §4.2).
/// Idempotent: `clean(clean(x)) == clean(x)`.
pub fn clean(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !STRIPPABLE_PUNCTUATION.contains(c) && *c != TATWEEL)
        .collect();

    let collapsed: String = stripped
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_tatweel() {
        assert_eq!(clean("قِـفَا نَبْـكِ!"), "قِفَا نَبْكِ");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(clean("قِفَا   نَبْكِ"), "قِفَا نَبْكِ");
    }

    #[test]
    fn is_idempotent() {
        let once = clean("قِفَا، نَبْكِ...  ");
        let twice = clean(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn tatweel_invariance() {
        let base = clean("قِفَا نَبْكِ");
        let tatweel_inserted = clean("قِـــفَا نَبْــكِ");
        assert_eq!(base, tatweel_inserted);
    }
}
