//! Reference table loading.
//!
//! The four reference tables (spec.md §6) are embedded at compile time
//! with `include_str!` rather than read from the filesystem at runtime:
//! a library must not depend on its caller's current directory to find
//! its data. This mirrors the `include_str!`-for-bundled-data idiom used
//! throughout the retrieved corpus for exactly this reason (e.g.
//! `quranize-rs`'s embedded Quran text, `uroman-rs`'s embedded
//! transliteration tables, `durak`'s embedded resource files) rather
//! than the teacher's own runtime `fs::read_to_string` pattern, which
//! assumes a fixed on-disk layout relative to the working directory.

use crate::error::AnalysisError;
use crate::types::{MeterRow, ModificationRow, ReplacementRow, WeightRow};

const METERS_JSON: &str = include_str!("../data/meters.json");
const WEIGHTS_JSON: &str = include_str!("../data/weights.json");
const MODIFICATIONS_JSON: &str = include_str!("../data/modifications.json");
const REPLACEMENTS_JSON: &str = include_str!("../data/replacements.json");

/// All four reference tables, loaded once and held immutably for the
/// lifetime of the program (spec.md §5).
pub struct ReferenceData {
    pub meters: Vec<MeterRow>,
    pub weights: Vec<WeightRow>,
    pub modifications: Vec<ModificationRow>,
    pub replacements: Vec<ReplacementRow>,
}

impl ReferenceData {
    /// Parse the embedded reference tables. The only way this fails is
    /// malformed embedded JSON, which would be a build-time defect —
    /// still surfaced as [`AnalysisError::ReferenceLoadFailure`] rather
    /// than a panic, per spec.md §7.
    pub fn load() -> Result<Self, AnalysisError> {
        let meters = parse_table("meters", METERS_JSON)?;
        let weights = parse_table("weights", WEIGHTS_JSON)?;
        let modifications = parse_table("modifications", MODIFICATIONS_JSON)?;
        let replacements = parse_table("replacements", REPLACEMENTS_JSON)?;
        println!(
            "Loaded reference tables ({} meters, {} weights, {} modifications, {} replacements)",
            meters.len(),
            weights.len(),
            modifications.len(),
            replacements.len()
        );
        Ok(Self {
            meters,
            weights,
            modifications,
            replacements,
        })
    }
}

fn parse_table<T: serde::de::DeserializeOwned>(
    table: &'static str,
    json: &str,
) -> Result<Vec<T>, AnalysisError> {
    serde_json::from_str(json).map_err(|source| {
        eprintln!("Warning: failed to load reference table '{table}': {source}");
        AnalysisError::ReferenceLoadFailure { table, source }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_tables_parse() {
        let data = ReferenceData::load().expect("embedded reference data must parse");
        assert!(!data.meters.is_empty());
        assert!(!data.weights.is_empty());
        assert!(!data.modifications.is_empty());
    }
}
