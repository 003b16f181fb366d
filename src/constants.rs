//! Arabic script constants: combining marks, letter classes, and fixed strings.
//!
//! Ranges are encoded as explicit predicates rather than raw `char` ranges
//! so that a rule body testing "is this an Arabic letter" can never
//! accidentally match a combining mark that happens to sit in a nearby
//! code point range.

/// Fatha — short vowel /a/.
pub const FATHA: char = '\u{064E}';
/// Damma — short vowel /u/.
pub const DAMMA: char = '\u{064F}';
/// Kasra — short vowel /i/.
pub const KASRA: char = '\u{0650}';
/// Tanwin fatha (nunation /an/).
pub const TANWIN_FATHA: char = '\u{064B}';
/// Tanwin damma (nunation /un/).
pub const TANWIN_DAMMA: char = '\u{064C}';
/// Tanwin kasra (nunation /in/).
pub const TANWIN_KASRA: char = '\u{064D}';
/// Shadda — gemination mark.
pub const SHADDA: char = '\u{0651}';
/// Sukun — absence-of-vowel mark.
pub const SUKUN: char = '\u{0652}';

/// Alif.
pub const ALIF: char = '\u{0627}';
/// Alif maqsura.
pub const ALIF_MAQSURA: char = '\u{0649}';
/// Waw.
pub const WAW: char = '\u{0648}';
/// Ya'.
pub const YA: char = '\u{064A}';
/// Ha'.
pub const HA: char = '\u{0647}';
/// Mim.
pub const MIM: char = '\u{0645}';
/// Nun.
pub const NUN: char = '\u{0646}';
/// Lam.
pub const LAM: char = '\u{0644}';
/// Ta' marbuta.
pub const TA_MARBUTA: char = '\u{0629}';
/// Ta'.
pub const TA: char = '\u{062A}';
/// Madda above alif (آ).
pub const ALIF_MADDA: char = '\u{0622}';
/// Hamza on its own.
pub const HAMZA: char = '\u{0621}';
/// Alef with hamza above (أ) — distinct from bare [`HAMZA`]; rules 15 and
/// 18 prepend this, not the bare hamza.
pub const ALEF_HAMZA_ABOVE: char = '\u{0623}';

/// Literal three-asterisk verse/hemistich delimiter (spec.md §6).
pub const DELIMITER: &str = "***";

/// Punctuation marks stripped by the text cleaner (spec.md §4.2).
pub const STRIPPABLE_PUNCTUATION: &[char] = &[
    ':', '(', ')', '-', '_', '؟', '!', '.', '"', '“', '”', '[', ']', '،', '؛', '*', '«', '»',
];

/// Tatweel (kashida) — prosodically inert elongation character.
pub const TATWEEL: char = '\u{0640}';

/// Whether `ch` is any Arabic combining mark used by this pipeline
/// (harakat, tanwin, shadda, sukun): U+064B..U+0652.
pub fn is_combining_mark(ch: char) -> bool {
    ('\u{064B}'..='\u{0652}').contains(&ch)
}

/// Whether `ch` falls in the Arabic-letter block U+0621..U+064A ("ء-ي"
/// in the rule bodies). Encoded as an explicit predicate per spec.md §9
/// rather than a raw range literal, so call sites read as intent.
pub fn is_arabic_letter(ch: char) -> bool {
    ('\u{0621}'..='\u{064A}').contains(&ch)
}

/// "Moon" letters: the definite article's lam is pronounced, not assimilated.
pub fn is_moon_letter(ch: char) -> bool {
    "آإأئءؤبجحخعغفقكمهوي".contains(ch)
}

/// "Sun" letters: the definite article's lam assimilates into the following
/// consonant (which is geminated).
pub fn is_sun_letter(ch: char) -> bool {
    "تثدذرزسشصضطظلن".contains(ch)
}

/// The seven prefixes carrying an attached, already-vowelled definite article
/// handled by rule 4 (spec.md §4.1).
pub const ARTICLE_PREFIXES: &[&str] = &["كَال", "فَال", "بِال", "وَال", "وَبِال", "فَبِال", "أَبِال"];
