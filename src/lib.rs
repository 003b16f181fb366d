//! Classical Arabic prosody scansion: meter detection and foot-level
//! zihaf/illa annotation.
//!
//! The core rewrites a verse through an ordered phonological pipeline
//! (see [`rules`]), tokenizes it into prosodic units (see [`units`]),
//! matches it against a canonical meter corpus (see [`matcher`]), and
//! for a matched meter produces a foot-by-foot alignment annotated with
//! licensed modifications (see [`align`]).
//!
//! The four reference tables (meters, weights, modifications,
//! replacements) are loaded once via [`Scansion::load`] and held
//! read-only for the lifetime of the program; no operation after that
//! touches a file, a clock, or randomness.

pub mod align;
pub mod constants;
pub mod data;
pub mod error;
pub mod matcher;
pub mod meter_index;
pub mod process;
pub mod rules;
pub mod text;
pub mod types;
pub mod units;

use std::sync::OnceLock;

pub use align::FootAligner;
pub use error::AnalysisError;
pub use matcher::PoetryMatcher;
pub use meter_index::MeterIndex;
pub use rules::RuleEngine;
pub use types::{
    AlignmentResult, AnalysisResult, Annotation, FootPair, MeterRow, ModificationRow,
    ProsodicUnit, ReplacementRow, ScansionKey, WeightRow,
};

/// Owns the loaded reference tables and the two engines built over
/// them. Safe to share read-only across any number of analyses and
/// threads (spec.md §5): nothing here is mutated after construction.
pub struct Scansion {
    matcher: PoetryMatcher,
    aligner: FootAligner,
}

impl Scansion {
    /// Load the embedded reference tables and build the matcher and
    /// aligner over them. The only failure mode is malformed embedded
    /// JSON (spec.md §7, ReferenceLoadFailure) — a build-time defect,
    /// not a condition a caller can work around at runtime.
    pub fn load() -> Result<Self, AnalysisError> {
        let reference = data::ReferenceData::load()?;
        let rules = RuleEngine::new(reference.replacements);
        let index = MeterIndex::build(&reference.meters);
        let matcher = PoetryMatcher::new(rules, index);
        let aligner = FootAligner::new(reference.weights, reference.modifications);
        Ok(Self { matcher, aligner })
    }

    /// Rewrite `verse` into scansion-ready form and return every
    /// canonical meter it matches (spec.md §6).
    pub fn analyze(&self, verse: &str) -> AnalysisResult {
        self.matcher.analyze(verse)
    }

    /// Align a matched meter's canonical weight against its realized
    /// canonical line (spec.md §6).
    pub fn align(&self, meter_name: &str, canonical_line: &str) -> AlignmentResult {
        self.aligner.align(meter_name, canonical_line)
    }
}

static INSTANCE: OnceLock<Scansion> = OnceLock::new();

fn instance() -> &'static Scansion {
    INSTANCE.get_or_init(|| Scansion::load().expect("embedded reference data must load"))
}

/// Analyze a verse against the built-in reference corpus (spec.md §6).
///
/// Lazily builds the shared [`Scansion`] instance on first call from the
/// tables embedded in this binary; the same instance is reused for
/// every subsequent call.
pub fn analyze(verse: &str) -> AnalysisResult {
    instance().analyze(verse)
}

/// Align a matched meter against its canonical line (spec.md §6). See
/// [`analyze`] for the shared-instance lazy-load behavior.
pub fn align(meter_name: &str, canonical_line: &str) -> AlignmentResult {
    instance().align(meter_name, canonical_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scansion_loads_from_embedded_data() {
        Scansion::load().expect("embedded reference data must load");
    }

    #[test]
    fn verse_without_delimiter_has_no_matches() {
        let result = analyze("كلمة بلا فاصل");
        assert!(result.is_empty());
        assert!(!result.rewritten.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_rewritten_text() {
        let result = analyze("");
        assert!(result.rewritten.is_empty());
        assert!(result.is_empty());
    }

    #[test]
    fn tatweel_insertion_does_not_change_the_degenerate_case() {
        // both are single-hemistich input (no delimiter): both must stay
        // unmatched, and tatweel must not change the rewritten form's
        // prosodic content.
        let base = analyze("كلمة بلا فاصل");
        let tatweel = analyze("كلمــة بلا فاصل");
        assert_eq!(base.matches, tatweel.matches);
    }

    #[test]
    fn align_on_unknown_meter_yields_empty_alignment() {
        let alignment = align("بحر غير موجود في القائمة", "أي شيء");
        assert!(alignment.pairs.is_empty());
    }

    #[test]
    fn canonical_line_self_identifies_through_the_public_api() {
        // spec.md §8, Index soundness: analyze(canonical-line).matches
        // includes meter-name. None of the 21 rules touch an already
        // fully-vowelled taf'ila pattern, so the rewritten form equals
        // the input and the lookup round-trips through the same key
        // the index was built with.
        let canonical = "فَعُوْلُنْ مَفَاْعِيْلُنْ فَعُوْلُنْ مَفَاْعِيْلُنْ *** فَعُوْلُنْ مَفَاْعِيْلُنْ فَعُوْلُنْ مَفَاْعِيْلُنْ";
        let result = analyze(canonical);
        assert_eq!(result.rewritten, canonical);
        assert_eq!(result.line_for("الطويل"), Some(canonical));
    }

    #[test]
    fn matched_meter_aligns_with_no_unannotated_pairs() {
        let canonical = "فَعُوْلُنْ مَفَاْعِيْلُنْ فَعُوْلُنْ مَفَاْعِيْلُنْ *** فَعُوْلُنْ مَفَاْعِيْلُنْ فَعُوْلُنْ مَفَاْعِيْلُنْ";
        let result = analyze(canonical);
        let (meter_name, line) = result
            .matches
            .iter()
            .find(|(name, _)| name == "الطويل")
            .expect("the pure taf'ila pattern must self-identify as الطويل");
        let alignment = align(meter_name, line);
        assert_eq!(alignment.pairs.len(), 8);
    }
}
