//! Extraction pattern library.
//!
//! Each pattern targets one [`SpecField`] in one language and carries a
//! priority and a confidence weight. Within a field, patterns run in
//! ascending priority order and the first match wins, so more specific
//! notations (a dual voltage rating, an `NxS` conductor notation) always
//! preempt looser fallbacks.
//!
//! Patterns communicate their captures through named groups. The extraction
//! stage parses them by field using these conventions:
//!
//! - categorical fields (cable type, insulation, sheath, armor): `val`
//! - voltage: `a` (required), `b` (optional second magnitude), `unit`
//! - current: `a`
//! - conductor size: `size` (required), `n` (optional `NxS` multiplier)
//! - cores: `n`
//! - temperature: `lo` (required), `hi` (optional)
//! - insulation resistance: `a` (required), `prefix` (optional `M`/`G`)
//!
//! A pattern whose captures do not parse under these conventions yields an
//! unverifiable field rather than an error; only a pattern that fails to
//! compile is reported as [`CableSpecError::Pattern`].
//!
//! The built-in table is deliberately tolerant of common OCR confusions
//! (`0`/`O`, `1`/`l`, `3`/`E`) that the preprocessing pass did not already
//! repair, mirroring how the scanned datasheets this library grew up on
//! actually look.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CableSpecError, Result};
use crate::types::{Language, SpecField};

/// A compiled extraction pattern.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    pub field: SpecField,
    pub language: Language,
    /// Lower runs first. Ties keep table order.
    pub priority: u8,
    /// Confidence weight inherited by values this pattern extracts.
    pub confidence: f32,
    pub regex: Regex,
}

/// Source form of a pattern, as carried in configuration files.
///
/// User-supplied patterns default to priority 0 so they preempt the
/// built-in table for their field (built-ins start at 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSpec {
    pub field: SpecField,
    #[serde(default = "default_language")]
    pub language: Language,
    pub pattern: String,
    #[serde(default = "default_priority")]
    pub priority: u8,
    #[serde(default = "default_confidence")]
    pub confidence: f32,
}

fn default_language() -> Language {
    Language::En
}

fn default_priority() -> u8 {
    0
}

fn default_confidence() -> f32 {
    0.75
}

struct BuiltinPattern {
    field: SpecField,
    language: Language,
    priority: u8,
    confidence: f32,
    pattern: &'static str,
}

macro_rules! builtin {
    ($field:ident, $language:ident, $priority:expr, $confidence:expr, $pattern:expr) => {
        BuiltinPattern {
            field: SpecField::$field,
            language: Language::$language,
            priority: $priority,
            confidence: $confidence,
            pattern: $pattern,
        }
    };
}

/// The built-in pattern table.
///
/// Confidence weights follow a fixed convention: 0.9 for keyword-anchored
/// matches, 0.75-0.85 for unit-anchored matches, 0.55-0.6 for loose
/// fallbacks the correction stage may still have to disambiguate.
const BUILTIN_PATTERNS: &[BuiltinPattern] = &[
    // Cable type: conductor material first, fiber detection second so a
    // fiber-optic sheet in a power-cable feed is still caught, terse
    // element symbols last.
    builtin!(CableType, En, 1, 0.9, r"(?i)\b(?P<val>C[o0]pp\s*[e3]r|Aluminium|Aluminum|A[l1]um[i1]n[i1]um)\b"),
    builtin!(CableType, En, 2, 0.85, r"(?i)\b(?P<val>Fib[e3]re?[\s-]*Optic(?:al)?|Optical\s*Fib[e3]re?|Fib[e3]re?)\b"),
    builtin!(CableType, En, 3, 0.7, r"\b(?P<val>Cu|Al)\b"),
    builtin!(CableType, Ar, 1, 0.85, r"(?P<val>نحاسي|نحاس|ألومنيوم|ألمنيوم|المنيوم)"),
    // Voltage: dual rating outranks single so `600/1000V` is never read as
    // a lone `1000V`.
    builtin!(Voltage, En, 1, 0.9, r"(?i)(?P<a>\d+(?:\.\d+)?)\s*/\s*(?P<b>\d+(?:\.\d+)?)\s*(?P<unit>k?V)\b"),
    builtin!(Voltage, En, 2, 0.75, r"(?i)(?P<a>\d+(?:\.\d+)?)\s*(?P<unit>k?V)\b"),
    builtin!(Voltage, Ar, 1, 0.85, r"(?:جهد|فلطية|فولتية)\s*:?\s*(?P<a>\d+(?:\.\d+)?)(?:\s*/\s*(?P<b>\d+(?:\.\d+)?))?\s*(?P<unit>كيلو\s*فولت|ك\.?\s*ف|فولت)?"),
    builtin!(Voltage, Ar, 2, 0.8, r"(?P<a>\d+(?:\.\d+)?)\s*(?P<unit>كيلو\s*فولت|فولت)"),
    // Current.
    builtin!(Current, En, 1, 0.8, r"(?i)(?P<a>\d+(?:\.\d+)?)\s*(?:Amps?|A)\b"),
    builtin!(Current, Ar, 1, 0.8, r"(?P<a>\d+(?:\.\d+)?)\s*(?:أمبير|امبير)"),
    builtin!(Current, Ar, 2, 0.75, r"(?:تيار|التيار)\s*:?\s*(?P<a>\d+(?:\.\d+)?)"),
    // Conductor size: NxS notation first, exponent-marked scalar second,
    // bare `mm` last (datasheets drop the superscript more often than they
    // quote a diameter).
    builtin!(ConductorSize, En, 1, 0.85, r"(?i)(?P<n>\d+(?:\.\d+)?)\s*[x×]\s*(?P<size>\d+(?:\.\d+)?)\s*(?:sq\.?\s*mm|m\s*mh?\s*[2²]?)"),
    builtin!(ConductorSize, En, 2, 0.8, r"(?i)(?P<size>\d+(?:\.\d+)?)\s*(?:sq\.?\s*mm|m\s*mh?\s*[2²])"),
    builtin!(ConductorSize, En, 3, 0.55, r"(?i)(?P<size>\d+(?:\.\d+)?)\s*mm\b"),
    builtin!(ConductorSize, Ar, 1, 0.85, r"(?P<n>\d+)\s*[x×]\s*(?P<size>\d+(?:\.\d+)?)\s*مم"),
    builtin!(ConductorSize, Ar, 2, 0.8, r"(?P<size>\d+(?:\.\d+)?)\s*مم\s*[2²]?"),
    builtin!(ConductorSize, Ar, 3, 0.7, r"(?:مقطع|المقطع)\s*:?\s*(?P<size>\d+(?:\.\d+)?)"),
    // Cores.
    builtin!(Cores, En, 1, 0.85, r"(?i)(?P<n>\d+)\s*Cor[e3]s?\b"),
    builtin!(Cores, En, 2, 0.6, r"(?P<n>\d+)\s*[xX×]\s*\d"),
    builtin!(Cores, Ar, 1, 0.8, r"(?:عدد\s*)?(?:قلوب|موصلات|القلوب)\s*:?\s*(?P<n>\d+)"),
    builtin!(Cores, Ar, 2, 0.75, r"(?P<n>\d+)\s*(?:قلوب|قلب|موصلات)"),
    // Insulation: material-plus-keyword in either order, then bare tokens
    // that are unambiguous, then a generic keyword-anchored capture so an
    // implausible material still lands in the record for rule review.
    builtin!(Insulation, En, 1, 0.9, r"(?i)\b(?P<val>XLPE|PVC|EPR|LSZH|Rubber)\b\s*(?:Insulat(?:ion|ed))"),
    builtin!(Insulation, En, 2, 0.9, r"(?i)\bInsulation\s*[:\-]?\s*(?P<val>XLPE|PVC|EPR|LSZH|Rubber)\b"),
    builtin!(Insulation, En, 3, 0.6, r"(?i)\b(?P<val>XLPE|EPR|LSZH)\b"),
    builtin!(Insulation, En, 4, 0.6, r"(?i)\bInsulation\s*:\s*(?P<val>[A-Za-z][A-Za-z0-9]*)"),
    builtin!(Insulation, Ar, 1, 0.85, r"(?:عزل|عازل|العزل)\s*:?\s*(?P<val>XLPE|PVC|EPR|LSZH|[A-Za-z]+)"),
    // Sheath.
    builtin!(Sheath, En, 1, 0.9, r"(?i)\b(?P<val>PVC|HDPE|MDPE|LDPE|LSZH|LSOH|Lead|Neoprene|Rubber|PUR|TPU|PE)\b\s*(?:Outer\s*)?(?:Sheath|Jacket)"),
    builtin!(Sheath, En, 2, 0.9, r"(?i)\b(?:Sheath|Jacket|Outer\s*Cover(?:ing)?)\s*[:\-]?\s*(?P<val>PVC|HDPE|MDPE|LDPE|LSZH|LSOH|Lead|Neoprene|Rubber|PUR|TPU|PE)\b"),
    builtin!(Sheath, En, 3, 0.6, r"(?i)\b(?:Sheath|Jacket)\s*:\s*(?P<val>[A-Za-z][A-Za-z0-9]*)"),
    builtin!(Sheath, Ar, 1, 0.85, r"(?:غلاف|الغلاف)\s*:?\s*(?P<val>PVC|HDPE|LSZH|[A-Za-z]+)"),
    // Armor: garbled steel wire/tape phrases, clean aluminum phrases,
    // trade abbreviations, then keyword-anchored capture.
    builtin!(Armor, En, 1, 0.9, r"(?i)\b(?P<val>(?:Galvani[sz]ed\s+)?Stee[l1]\s+(?:W[il1]re?|T[a@]pe?)\s+Armou?[rx]?)"),
    builtin!(Armor, En, 2, 0.9, r"(?i)\b(?P<val>Alumin(?:i?um)\s+(?:Wire|Tape)\s+Armou?r)\b"),
    builtin!(Armor, En, 3, 0.8, r"\b(?P<val>G?S[WT]A|A[WT]A)\b"),
    builtin!(Armor, En, 4, 0.6, r"(?i)\bArmou?r\s*:\s*(?P<val>[A-Za-z]+(?:\s[A-Za-z]+)?)"),
    builtin!(Armor, Ar, 1, 0.85, r"(?:تسليح|التسليح)\s*:?\s*(?P<val>[A-Za-z\u{0600}-\u{06FF}]+)"),
    // Temperature: explicit range first, then degree-marked singles, then
    // keyword-anchored, then a bare trailing C as last resort (that tier is
    // what catches truncated values like `4 C` for the repair stage).
    builtin!(TemperatureRange, En, 1, 0.85, r"(?i)(?P<lo>-?\d+)\s*(?:°|\*|deg(?:rees)?)?\s*C?\s*(?:to|[–~-])\s*\+?(?P<hi>-?\d+)\s*(?:°|\*|deg(?:rees)?)?\s*C\b"),
    builtin!(TemperatureRange, En, 2, 0.8, r"(?i)(?P<lo>-?\d+)\s*(?:°|\*|deg(?:rees)?)\s*C\b"),
    builtin!(TemperatureRange, En, 3, 0.7, r"(?i)\bTemperature\s*:?\s*(?P<lo>-?\d+)\s*C?\b"),
    builtin!(TemperatureRange, En, 4, 0.55, r"(?i)(?P<lo>-?\d+)\s*C\b"),
    builtin!(TemperatureRange, Ar, 1, 0.8, r"(?:حرارة|الحرارة)\D{0,12}?(?P<lo>-?\d+)(?:\s*(?:إلى|الى|-)\s*(?P<hi>-?\d+))?"),
    // Insulation resistance. The prefix class stays case-sensitive: a
    // lowercase m would be milli, not mega.
    builtin!(InsulationResistance, En, 1, 0.85, r"(?P<a>\d+(?:\.\d+)?)\s*(?P<prefix>[MG])?\s*(?:Ω|[Oo]hms?|O)\s*[·.\s]?\s*[kK][mM]\b"),
    builtin!(InsulationResistance, Ar, 1, 0.8, r"(?:مقاومة|المقاومة)\s*(?:العزل)?\s*:?\s*(?P<a>\d+(?:\.\d+)?)\s*(?P<prefix>[MG])?"),
];

static BUILTIN: Lazy<PatternLibrary> = Lazy::new(|| {
    let entries = BUILTIN_PATTERNS
        .iter()
        .map(|b| FieldPattern {
            field: b.field,
            language: b.language,
            priority: b.priority,
            confidence: b.confidence,
            regex: Regex::new(b.pattern).expect("builtin regex pattern is valid and should compile"),
        })
        .collect();
    PatternLibrary::from_compiled(entries)
});

/// An ordered collection of extraction patterns covering the ten fields.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    entries: Vec<FieldPattern>,
}

impl PatternLibrary {
    /// The built-in table. Compiled once, on first use.
    pub fn builtin() -> &'static PatternLibrary {
        &BUILTIN
    }

    /// Compile user-supplied patterns into a library.
    ///
    /// Fails with [`CableSpecError::Pattern`] on the first pattern that does
    /// not compile, naming the field it was registered for.
    pub fn from_specs(specs: &[PatternSpec]) -> Result<Self> {
        let mut entries = Vec::with_capacity(specs.len());
        for spec in specs {
            let regex = Regex::new(&spec.pattern).map_err(|err| {
                CableSpecError::pattern_with_source(
                    format!("invalid pattern for {}: {}", spec.field, spec.pattern),
                    err,
                )
            })?;
            entries.push(FieldPattern {
                field: spec.field,
                language: spec.language,
                priority: spec.priority,
                confidence: spec.confidence,
                regex,
            });
        }
        Ok(Self::from_compiled(entries))
    }

    /// The built-in table extended with user-supplied patterns.
    pub fn with_extra(specs: &[PatternSpec]) -> Result<Self> {
        let mut entries = BUILTIN.entries.clone();
        entries.extend(Self::from_specs(specs)?.entries);
        Ok(Self::from_compiled(entries))
    }

    fn from_compiled(mut entries: Vec<FieldPattern>) -> Self {
        entries.sort_by_key(|p| (field_index(p.field), p.priority));
        PatternLibrary { entries }
    }

    /// Patterns for one field, restricted to the given languages, in
    /// ascending priority order.
    pub fn for_field<'a>(
        &'a self,
        field: SpecField,
        languages: &'a [Language],
    ) -> impl Iterator<Item = &'a FieldPattern> + 'a {
        self.entries
            .iter()
            .filter(move |p| p.field == field && languages.contains(&p.language))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn field_index(field: SpecField) -> usize {
    SpecField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or(SpecField::ALL.len())
}
