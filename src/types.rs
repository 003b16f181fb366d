//! Core types and data structures for prosodic scansion.

use serde::{Deserialize, Serialize};

/// A three-valued tag drawn from the phonological state of one
/// (base letter + contiguous combining marks) cluster (spec.md §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProsodicUnit {
    /// The cluster carries the sukun mark (no vowel).
    Sukun,
    /// The cluster carries a short vowel or tanwin mark, no sukun.
    Vowelled,
    /// A consonant with no diacritic at all.
    Bare,
}

/// An ordered sequence of one or two hemistich unit-sequences. Equality
/// is structural: two keys match only if every hemistich's unit sequence
/// matches element-for-element (spec.md §3, Scansion key).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ScansionKey(pub Vec<Vec<ProsodicUnit>>);

impl ScansionKey {
    /// Number of hemistichs this key was derived from.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The key-length gate of spec.md §8: only length-2 keys are ever
    /// eligible to match an entry in the meter index.
    pub fn is_matchable(&self) -> bool {
        self.0.len() == 2
    }
}

/// One row of the replacement reference table (spec.md §6): an exact
/// surface form and its prosodic-spelling replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacementRow {
    pub original: String,
    pub replacement: String,
}

/// One row of the meter reference table (spec.md §6): a meter name and
/// one fully-vowelled canonical line belonging to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeterRow {
    pub meter_name: String,
    pub canonical_line: String,
}

/// One row of the weights reference table (spec.md §6): a meter name and
/// its canonical foot pattern, feet space-delimited, hemistichs joined by
/// `" *** "`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightRow {
    pub meter_name: String,
    pub pattern: String,
}

/// One row of the modification catalog (spec.md §3, §6): a canonical foot
/// and the two realized surface forms it may take under a named licensed
/// modification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModificationRow {
    pub canonical_foot: String,
    pub form_a: String,
    pub form_b: String,
    pub modification_name: String,
    pub notes: String,
}

/// Outcome of running [`crate::analyze`] on a verse: the rewritten verse
/// plus an ordered map of meter-name → canonical-line (spec.md §6). Order
/// is the order the meter index produced the matches in, which is the
/// corpus's own row order — a `Vec` of pairs models that directly without
/// an extra ordered-map dependency.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalysisResult {
    /// The verse rewritten into scansion-ready phonological form.
    pub rewritten: String,
    /// Meter name → the canonical line it matched, in corpus order.
    pub matches: Vec<(String, String)>,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Look up the canonical line matched for a given meter name, if any.
    pub fn line_for(&self, meter_name: &str) -> Option<&str> {
        self.matches
            .iter()
            .find(|(name, _)| name == meter_name)
            .map(|(_, line)| line.as_str())
    }
}

/// The annotation attached to one realized foot after catalog lookup
/// (spec.md §4.7).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Annotation {
    /// A named licensed modification (zihaf/illa) from the catalog.
    Modification(String),
    /// No catalog entry matched either realized form, but the canonical
    /// foot is present: the foot is reported unchanged.
    RemainedOnOriginal,
}

/// One canonical/realized foot pair with its annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FootPair {
    pub canonical_foot: String,
    pub realized_foot: String,
    pub annotation: Annotation,
}

/// Result of aligning a matched meter's canonical weight against its
/// realized canonical line (spec.md §4.7, §6).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AlignmentResult {
    pub meter_name: String,
    pub pairs: Vec<FootPair>,
}
