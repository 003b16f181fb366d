//! Foot aligner (C9): positional foot pairing and modification lookup.

use crate::types::{Annotation, FootPair, ModificationRow, WeightRow};
use crate::types::AlignmentResult;

/// Owns the weights and modification-catalog tables, both built once at
/// startup and read-only thereafter (spec.md §5).
pub struct FootAligner {
    weights: Vec<WeightRow>,
    modifications: Vec<ModificationRow>,
}

impl FootAligner {
    pub fn new(weights: Vec<WeightRow>, modifications: Vec<ModificationRow>) -> Self {
        Self { weights, modifications }
    }

    /// Align `canonical_line` — the matched meter's realized scansion —
    /// against `meter_name`'s canonical weight (spec.md §4.7). A meter
    /// with no weight row yields an empty alignment (spec.md §7,
    /// MissingWeight).
    pub fn align(&self, meter_name: &str, canonical_line: &str) -> AlignmentResult {
        let Some(weight) = self.weights.iter().find(|w| w.meter_name == meter_name) else {
            return AlignmentResult {
                meter_name: meter_name.to_string(),
                pairs: Vec::new(),
            };
        };

        let weight_hemistichs: Vec<&str> = weight.pattern.split(" *** ").collect();
        let line_hemistichs: Vec<&str> = canonical_line.split(" *** ").collect();
        let both_two = weight_hemistichs.len() == 2 && line_hemistichs.len() == 2;

        let weight_feet = feet_from(&weight_hemistichs, both_two);
        let realized_feet = feet_from(&line_hemistichs, both_two);

        let pairs = weight_feet
            .into_iter()
            .zip(realized_feet)
            .map(|(canonical_foot, realized_foot)| {
                let annotation = self.lookup_modification(canonical_foot, realized_foot);
                FootPair {
                    canonical_foot: canonical_foot.to_string(),
                    realized_foot: realized_foot.to_string(),
                    annotation,
                }
            })
            .collect();

        AlignmentResult {
            meter_name: meter_name.to_string(),
            pairs,
        }
    }

    /// Look up a foot pair in the modification catalog first by form-A,
    /// then by form-B (spec.md §3). Neither matching synthesizes
    /// "remained on original" (spec.md §7, MissingModification).
    fn lookup_modification(&self, canonical: &str, realized: &str) -> Annotation {
        self.modifications
            .iter()
            .find(|row| row.canonical_foot == canonical && (row.form_a == realized || row.form_b == realized))
            .map(|row| Annotation::Modification(row.modification_name.clone()))
            .unwrap_or(Annotation::RemainedOnOriginal)
    }
}

/// Feet of either just the first hemistich, or both concatenated in
/// order, depending on whether both sides split into exactly two
/// hemistichs (spec.md §4.7).
fn feet_from<'a>(hemistichs: &[&'a str], both_two: bool) -> Vec<&'a str> {
    if both_two {
        hemistichs.iter().flat_map(|h| h.split_whitespace()).collect()
    } else {
        hemistichs[0].split_whitespace().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligner() -> FootAligner {
        let weights = vec![WeightRow {
            meter_name: "الطويل".to_string(),
            pattern: "فَعُوْلُنْ مَفَاْعِيْلُنْ *** فَعُوْلُنْ مَفَاْعِيْلُنْ".to_string(),
        }];
        let modifications = vec![ModificationRow {
            canonical_foot: "فَعُوْلُنْ".to_string(),
            form_a: "فَعُوْلُ".to_string(),
            form_b: "فَعُوْ".to_string(),
            modification_name: "قبض".to_string(),
            notes: String::new(),
        }];
        FootAligner::new(weights, modifications)
    }

    #[test]
    fn missing_weight_yields_empty_alignment() {
        let aligner = aligner();
        let result = aligner.align("بحر غير موجود", "فَعُوْلُنْ");
        assert!(result.pairs.is_empty());
    }

    #[test]
    fn matched_modification_is_reported() {
        let aligner = aligner();
        let line = "فَعُوْلُ مَفَاْعِيْلُنْ *** فَعُوْلُنْ مَفَاْعِيْلُنْ";
        let result = aligner.align("الطويل", line);
        assert_eq!(result.pairs.len(), 4);
        assert_eq!(result.pairs[0].annotation, Annotation::Modification("قبض".to_string()));
    }

    #[test]
    fn unmatched_foot_remains_on_original() {
        let aligner = aligner();
        let line = "فَعُوْلُنْ مَفَاْعِيْلُنْ *** فَعُوْلُنْ مَفَاْعِيْلُنْ";
        let result = aligner.align("الطويل", line);
        assert_eq!(result.pairs[0].annotation, Annotation::RemainedOnOriginal);
    }

    #[test]
    fn alignment_size_is_min_of_both_lengths() {
        let weights = vec![WeightRow {
            meter_name: "m".to_string(),
            pattern: "أ ب ج".to_string(),
        }];
        let aligner = FootAligner::new(weights, Vec::new());
        let result = aligner.align("m", "س ش");
        assert_eq!(result.pairs.len(), 2);
    }
}
