//! Meter indexer (C7): builds the scansion-key → matches multimap.

use std::collections::HashMap;

use crate::process::process_line;
use crate::types::{MeterRow, ScansionKey};

/// Multimap from scansion key to every (meter-name, canonical-line) pair
/// in the corpus that produces it.
pub struct MeterIndex {
    by_key: HashMap<ScansionKey, Vec<(String, String)>>,
}

impl MeterIndex {
    /// Build the index once at startup. Each canonical line is run
    /// through the Processor **without** the rule engine (spec.md §4.5):
    /// canonical lines are already hand-authored in scansion-ready form.
    /// Entries whose key does not have length 2 are dropped.
    pub fn build(meters: &[MeterRow]) -> Self {
        let mut by_key: HashMap<ScansionKey, Vec<(String, String)>> = HashMap::new();
        for row in meters {
            let key = process_line(&row.canonical_line);
            if !key.is_matchable() {
                continue;
            }
            by_key
                .entry(key)
                .or_default()
                .push((row.meter_name.clone(), row.canonical_line.clone()));
        }
        Self { by_key }
    }

    /// Every (meter-name, canonical-line) pair registered under `key`,
    /// or nothing if the key is absent or not length-2.
    pub fn lookup(&self, key: &ScansionKey) -> &[(String, String)] {
        if !key.is_matchable() {
            return &[];
        }
        self.by_key.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_line_self_identifies() {
        let meters = vec![
            MeterRow {
                meter_name: "test-meter".to_string(),
                canonical_line: "بَ بْ *** بَ بْ".to_string(),
            },
        ];
        let index = MeterIndex::build(&meters);
        let key = process_line("بَ بْ *** بَ بْ");
        let matches = index.lookup(&key);
        assert!(matches.iter().any(|(name, _)| name == "test-meter"));
    }

    #[test]
    fn single_hemistich_entries_are_dropped() {
        let meters = vec![
            MeterRow {
                meter_name: "degenerate".to_string(),
                canonical_line: "بَ بْ".to_string(),
            },
        ];
        let index = MeterIndex::build(&meters);
        let key = process_line("بَ بْ");
        assert!(index.lookup(&key).is_empty());
    }
}
