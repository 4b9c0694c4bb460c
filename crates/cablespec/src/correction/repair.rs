//! Vocabulary repair for categorical fields and truncated temperatures.
//!
//! Repair is allowed to guess only when the guess is unique. A garbled token
//! is folded through the OCR confusable alphabet and compared against the
//! field's known terms under a bounded edit distance; exactly one surviving
//! candidate means a repair, two or more mean the value is degraded to
//! unverifiable. Zero candidates leave the value alone so validation can
//! judge it as written.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::units;
use crate::core::config::CorrectionConfig;
use crate::types::{
    CompositeValue, CorrectionEntry, CorrectionReason, FieldData, FieldValue, SpecField,
};

/// Known terms for one categorical field, with their expandable aliases.
struct Vocabulary {
    field: SpecField,
    canonical: &'static [&'static str],
    aliases: &'static [(&'static str, &'static str)],
}

const VOCABULARIES: &[Vocabulary] = &[
    Vocabulary {
        field: SpecField::CableType,
        canonical: &["Copper", "Aluminum", "Fiber Optic"],
        aliases: &[
            ("Cu", "Copper"),
            ("Al", "Aluminum"),
            ("Aluminium", "Aluminum"),
            ("Fiber", "Fiber Optic"),
            ("Fibre", "Fiber Optic"),
            ("Fibre Optic", "Fiber Optic"),
            ("Fiber Optical", "Fiber Optic"),
            ("Optical Fiber", "Fiber Optic"),
            ("Optical Fibre", "Fiber Optic"),
            ("نحاس", "Copper"),
            ("نحاسي", "Copper"),
            ("ألومنيوم", "Aluminum"),
            ("ألمنيوم", "Aluminum"),
            ("المنيوم", "Aluminum"),
        ],
    },
    Vocabulary {
        field: SpecField::Insulation,
        canonical: &["XLPE", "PVC", "EPR", "LSZH", "Rubber"],
        aliases: &[("LSOH", "LSZH")],
    },
    Vocabulary {
        field: SpecField::Sheath,
        canonical: &[
            "PVC", "PE", "HDPE", "MDPE", "LDPE", "LSZH", "Lead", "Neoprene", "Rubber", "PUR",
            "TPU",
        ],
        aliases: &[("LSOH", "LSZH"), ("LAZH", "LSZH")],
    },
    Vocabulary {
        field: SpecField::Armor,
        canonical: &[
            "Steel Wire Armor",
            "Steel Tape Armor",
            "Aluminum Wire Armor",
            "Aluminum Tape Armor",
            "Galvanized Steel Wire Armor",
            "Galvanized Steel Tape Armor",
        ],
        aliases: &[
            ("SWA", "Steel Wire Armor"),
            ("STA", "Steel Tape Armor"),
            ("AWA", "Aluminum Wire Armor"),
            ("ATA", "Aluminum Tape Armor"),
            ("GSWA", "Galvanized Steel Wire Armor"),
            ("GSTA", "Galvanized Steel Tape Armor"),
            ("Steel Wire Armour", "Steel Wire Armor"),
            ("Steel Tape Armour", "Steel Tape Armor"),
            ("Galvanised Steel Wire Armor", "Galvanized Steel Wire Armor"),
            ("Galvanised Steel Tape Armor", "Galvanized Steel Tape Armor"),
        ],
    },
];

/// A lone digit read as a temperature, e.g. `4 C`. The trailing zero was
/// dropped somewhere between the page and the OCR output.
static TRUNCATED_TEMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<d>\d)\s*°?\s*[cC]$")
        .expect("truncated temperature regex pattern is valid and should compile")
});

/// Run all repairs in place, appending one entry per change.
pub(super) fn repair_fields(
    fields: &mut IndexMap<SpecField, FieldValue>,
    log: &mut Vec<CorrectionEntry>,
    config: &CorrectionConfig,
) {
    for vocabulary in VOCABULARIES {
        if let Some(value) = fields.get_mut(&vocabulary.field) {
            repair_categorical(vocabulary, value, log, config);
        }
    }
    if config.truncation_repair
        && let Some(value) = fields.get_mut(&SpecField::TemperatureRange)
    {
        repair_truncated_temperature(value, log);
    }
}

fn repair_categorical(
    vocabulary: &Vocabulary,
    value: &mut FieldValue,
    log: &mut Vec<CorrectionEntry>,
    config: &CorrectionConfig,
) {
    let FieldData::Enum { value: term } = &value.data else {
        return;
    };
    let term = term.clone();

    // Exact canonical term, possibly in the wrong case.
    if let Some(canonical) = vocabulary
        .canonical
        .iter()
        .find(|c| c.eq_ignore_ascii_case(&term))
    {
        if *canonical != term {
            log.push(CorrectionEntry::new(
                vocabulary.field,
                &term,
                *canonical,
                CorrectionReason::Formatting,
            ));
            set_term(value, canonical);
        }
        return;
    }

    // Alias expansion. An alias shorter than its target is an abbreviation;
    // anything else is a spelling normalization.
    if config.expand_abbreviations
        && let Some((alias, canonical)) = vocabulary
            .aliases
            .iter()
            .find(|(a, _)| a.eq_ignore_ascii_case(&term))
    {
        let reason = if alias.len() < canonical.len() {
            CorrectionReason::Expansion
        } else {
            CorrectionReason::Formatting
        };
        log.push(CorrectionEntry::new(vocabulary.field, &term, *canonical, reason));
        set_term(value, canonical);
        return;
    }

    // Fuzzy rescue under the confusable alphabet.
    let folded = confusable_fold(&term);
    let budget = edit_budget(folded.chars().count());
    let mut candidates = vocabulary
        .canonical
        .iter()
        .filter(|c| levenshtein(&folded, &confusable_fold(c)) <= budget)
        .copied();
    match (candidates.next(), candidates.next()) {
        (Some(only), None) => {
            log.push(CorrectionEntry::new(
                vocabulary.field,
                &term,
                only,
                CorrectionReason::ConfusableRepair,
            ));
            set_term(value, only);
        }
        (Some(_), Some(_)) => {
            tracing::warn!(field = %vocabulary.field, term = %term, "ambiguous token, degrading");
            log.push(CorrectionEntry::new(
                vocabulary.field,
                &term,
                "unverifiable",
                CorrectionReason::Degraded,
            ));
            *value = FieldValue::unverifiable(term);
        }
        // Unknown term: leave it for validation to judge.
        (None, _) => {}
    }
}

fn set_term(value: &mut FieldValue, term: &str) {
    value.raw = term.to_string();
    value.data = FieldData::Enum {
        value: term.to_string(),
    };
}

fn repair_truncated_temperature(value: &mut FieldValue, log: &mut Vec<CorrectionEntry>) {
    if !matches!(
        value.data,
        FieldData::Composite(CompositeValue::TemperatureRange { .. })
    ) {
        return;
    }
    let Some(caps) = TRUNCATED_TEMP.captures(value.raw.trim()) else {
        return;
    };
    let digit: u32 = caps["d"].parse().unwrap_or(0);
    let before = value.raw.clone();
    if (3..=9).contains(&digit) {
        // 30..90 °C are the plausible operating decades; restore the zero.
        let repaired = f64::from(digit * 10);
        let surface = units::canonical_temperature(repaired, repaired);
        log.push(CorrectionEntry::new(
            SpecField::TemperatureRange,
            before,
            &surface,
            CorrectionReason::TruncationRepair,
        ));
        value.raw = surface;
        value.data = FieldData::Composite(CompositeValue::TemperatureRange {
            min_c: repaired,
            max_c: repaired,
        });
    } else {
        // 0, 1 and 2 are ambiguous: 0/10/20 °C collide with plausible
        // three-digit readings, so no decade can be restored safely.
        tracing::warn!(reading = %before, "ambiguous truncated temperature, degrading");
        log.push(CorrectionEntry::new(
            SpecField::TemperatureRange,
            &before,
            "unverifiable",
            CorrectionReason::Degraded,
        ));
        *value = FieldValue::unverifiable(before);
    }
}

/// Fold OCR-confusable characters onto one representative so `Wlre`, `W1re`
/// and `Wire` compare equal.
fn confusable_fold(term: &str) -> String {
    term.chars()
        .map(|c| match c.to_ascii_lowercase() {
            '0' => 'o',
            '1' | 'i' => 'l',
            '3' => 'e',
            '5' | '$' => 's',
            '8' => 'b',
            '@' => 'a',
            lower => lower,
        })
        .collect()
}

/// Edit tolerance grows slowly with token length; short trade names must
/// stay nearly exact or everything collides with everything.
fn edit_budget(len: usize) -> usize {
    1 + len / 8
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0usize; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}
