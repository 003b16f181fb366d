//! Poetry matcher (C8): the `analyze` entry point.

use crate::constants::DELIMITER;
use crate::meter_index::MeterIndex;
use crate::process::process_line;
use crate::rules::RuleEngine;
use crate::types::AnalysisResult;

/// Owns the rule engine and meter index and exposes [`PoetryMatcher::analyze`]
/// (spec.md §4.6). Holds no mutable state: both its fields are built once
/// at startup and never modified afterward (spec.md §5).
pub struct PoetryMatcher {
    rules: RuleEngine,
    index: MeterIndex,
}

impl PoetryMatcher {
    pub fn new(rules: RuleEngine, index: MeterIndex) -> Self {
        Self { rules, index }
    }

    /// Rewrite `verse` and return every canonical meter it matches.
    pub fn analyze(&self, verse: &str) -> AnalysisResult {
        let rewritten = if let Some((a, b)) = verse.split_once(DELIMITER) {
            let left = self.rules.rewrite(a.trim());
            let right = self.rules.rewrite(b.trim());
            format!("{left} {DELIMITER} {right}")
        } else {
            self.rules.rewrite(verse)
        };

        let key = process_line(&rewritten);
        let matches = if key.is_matchable() {
            self.index.lookup(&key).to_vec()
        } else {
            Vec::new()
        };

        AnalysisResult { rewritten, matches }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MeterRow;

    fn matcher_with(meters: Vec<MeterRow>) -> PoetryMatcher {
        let rules = RuleEngine::new(Vec::new());
        let index = MeterIndex::build(&meters);
        PoetryMatcher::new(rules, index)
    }

    #[test]
    fn empty_input_yields_empty_rewritten_and_no_matches() {
        let matcher = matcher_with(Vec::new());
        let result = matcher.analyze("");
        assert!(result.rewritten.is_empty());
        assert!(result.is_empty());
    }

    #[test]
    fn no_delimiter_yields_degenerate_key_and_no_matches() {
        let matcher = matcher_with(Vec::new());
        let result = matcher.analyze("كلمة بلا فاصل");
        assert!(!result.rewritten.is_empty());
        assert!(result.is_empty());
    }

    #[test]
    fn matching_verse_reports_its_meter() {
        let meters = vec![MeterRow {
            meter_name: "test-meter".to_string(),
            canonical_line: "بَ بْ *** بَ بْ".to_string(),
        }];
        let matcher = matcher_with(meters);
        let result = matcher.analyze("بَ بْ *** بَ بْ");
        assert_eq!(result.line_for("test-meter"), Some("بَ بْ *** بَ بْ"));
    }
}
