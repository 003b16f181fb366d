//! Unit extractor (C4): collapses a rewritten, whitespace-free hemistich
//! into a sequence of three-valued prosodic units.

use crate::constants::SUKUN;
use crate::text::clusters::str_into_clusters;
use crate::types::ProsodicUnit;

/// Classify every cluster of `text` (which must already have its
/// whitespace removed) into a [`ProsodicUnit`] (spec.md §4.3).
///
/// Depends only on the most recent base character and its contiguous
/// combining marks (spec.md §3, Invariants) — it never looks backward
/// past one base character, since [`str_into_clusters`] already groups
/// the input that way.
pub fn extract_units(text: &str) -> Vec<ProsodicUnit> {
    str_into_clusters(text)
        .into_iter()
        .map(|cluster| {
            if cluster.contains_mark(SUKUN) {
                ProsodicUnit::Sukun
            } else if cluster.marks.is_empty() {
                ProsodicUnit::Bare
            } else {
                ProsodicUnit::Vowelled
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_consonant_is_bare() {
        assert_eq!(extract_units("ب"), vec![ProsodicUnit::Bare]);
    }

    #[test]
    fn vowelled_consonant_is_vowelled() {
        assert_eq!(extract_units("بَ"), vec![ProsodicUnit::Vowelled]);
    }

    #[test]
    fn sukun_consonant_is_sukun() {
        assert_eq!(extract_units("بْ"), vec![ProsodicUnit::Sukun]);
    }

    #[test]
    fn length_equals_base_code_point_count() {
        let text = "قِفَا";
        let units = extract_units(text);
        let base_count = text.chars().filter(|c| !crate::constants::is_combining_mark(*c)).count();
        assert_eq!(units.len(), base_count);
    }

    #[test]
    fn sukun_takes_precedence_when_both_marks_present() {
        // a cluster carrying shadda (not sukun) alongside a vowel is VOWELLED;
        // a cluster carrying sukun is always SUKUN regardless of other marks.
        assert_eq!(extract_units("بْ"), vec![ProsodicUnit::Sukun]);
    }
}
