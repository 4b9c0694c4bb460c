//! Stage one: turn noisy datasheet text into a raw [`SpecRecord`].
//!
//! Extraction never fails on bad input. A text that matches nothing yields a
//! record of ten unverifiable fields; the only error path is an invalid
//! user-supplied pattern. Within a field, patterns run in priority order and
//! the first match wins, so each field is read at most once per record.
//!
//! The voltage field gets one extra pass: after the winning pattern fixes
//! the primary rating, every other voltage magnitude mentioned anywhere in
//! the text is collected into the same rating. That is deliberate. A 500 kV
//! transmission figure sharing a sheet with a 12 V control circuit is
//! exactly the inconsistency the validation stage needs to see.

mod preprocess;

pub use preprocess::preprocess;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::core::config::PipelineConfig;
use crate::error::Result;
use crate::patterns::PatternLibrary;
use crate::types::{
    CompositeValue, CurrentSystem, FieldValue, Language, RecordStage, SpecField, SpecRecord,
};

/// Every voltage magnitude in the text, with or without a dual-rating slash.
static VOLTAGE_SCAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?P<a>\d+(?:\.\d+)?)\s*(?:/\s*(?P<b>\d+(?:\.\d+)?)\s*)?(?P<unit>k?V)\b")
        .expect("voltage scan regex pattern is valid and should compile")
});

/// AC/DC markers, standalone or glued to a magnitude (`230VAC`).
static SYSTEM_SCAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:AC|DC|VAC|VDC)\b|\d\s*(?:VAC|VDC)")
        .expect("AC/DC scan regex pattern is valid and should compile")
});

/// Extract a raw record from datasheet text.
///
/// Errors only if `config` carries an extra pattern that does not compile.
pub fn extract(text: &str, config: &PipelineConfig) -> Result<SpecRecord> {
    let merged;
    let library = if config.extra_patterns.is_empty() {
        PatternLibrary::builtin()
    } else {
        merged = PatternLibrary::with_extra(&config.extra_patterns)?;
        &merged
    };
    Ok(extract_with_library(text, library, config))
}

/// Extract a raw record using an explicit pattern library.
pub fn extract_with_library(
    text: &str,
    library: &PatternLibrary,
    config: &PipelineConfig,
) -> SpecRecord {
    let cleaned = preprocess(text);
    let mut values = IndexMap::new();
    for field in SpecField::ALL {
        if let Some(value) = extract_field(&cleaned, field, library, &config.languages) {
            tracing::trace!(field = %field, raw = %value.raw, "field matched");
            values.insert(field, value);
        }
    }
    let record = SpecRecord::from_values(RecordStage::Raw, values);
    tracing::debug!(verified = record.verified_count(), "extraction complete");
    record
}

fn extract_field(
    text: &str,
    field: SpecField,
    library: &PatternLibrary,
    languages: &[Language],
) -> Option<FieldValue> {
    for pattern in library.for_field(field, languages) {
        if let Some(caps) = pattern.regex.captures(text)
            && let Some(value) = parse_field(field, &caps, text, pattern.confidence)
        {
            return Some(value);
        }
    }
    None
}

/// Interpret a pattern's named captures for one field.
///
/// Returns `None` when the captures do not follow the library's group
/// conventions, letting the next pattern have its turn.
fn parse_field(
    field: SpecField,
    caps: &Captures<'_>,
    text: &str,
    confidence: f32,
) -> Option<FieldValue> {
    let raw = caps.get(0).map_or("", |m| m.as_str()).trim().to_string();
    match field {
        SpecField::CableType | SpecField::Insulation | SpecField::Sheath | SpecField::Armor => {
            // For categorical fields the raw form is the token itself, not
            // the whole keyword-anchored match, so corrected surfaces stay
            // directly comparable to the value.
            let value = collapse_spaces(named(caps, "val")?);
            Some(FieldValue::enumerated(value.clone(), value, confidence))
        }
        SpecField::Voltage => {
            let primary = named_f64(caps, "a")?;
            let unit = named(caps, "unit");
            let mut volts = vec![to_volts(primary, unit)];
            if let Some(second) = named_f64(caps, "b") {
                push_unique(&mut volts, to_volts(second, unit));
            }
            collect_other_magnitudes(text, &mut volts);
            let system = detect_system(text);
            Some(FieldValue::composite(
                raw,
                CompositeValue::VoltageRating { volts, system },
                confidence,
            ))
        }
        SpecField::Current => {
            let value = named_f64(caps, "a")?;
            Some(FieldValue::numeric(raw, value, Some("A"), confidence))
        }
        SpecField::ConductorSize => {
            let size = named_f64(caps, "size")?;
            match named_f64(caps, "n") {
                Some(multiplier) => Some(FieldValue::composite(
                    raw,
                    CompositeValue::CoreSize {
                        multiplier,
                        size_mm2: size,
                    },
                    confidence,
                )),
                None => Some(FieldValue::numeric(raw, size, Some("mm²"), confidence)),
            }
        }
        SpecField::Cores => {
            let count = named_f64(caps, "n")?;
            Some(FieldValue::numeric(raw, count, None, confidence))
        }
        SpecField::TemperatureRange => {
            let lo = named_f64(caps, "lo")?;
            let hi = named_f64(caps, "hi").unwrap_or(lo);
            Some(FieldValue::composite(
                raw,
                CompositeValue::TemperatureRange { min_c: lo, max_c: hi },
                confidence,
            ))
        }
        SpecField::InsulationResistance => {
            let value = named_f64(caps, "a")?;
            let unit = match named(caps, "prefix") {
                Some("M") => "MΩ·km",
                Some("G") => "GΩ·km",
                _ => "Ω·km",
            };
            Some(FieldValue::numeric(raw, value, Some(unit), confidence))
        }
    }
}

fn named<'t>(caps: &Captures<'t>, name: &str) -> Option<&'t str> {
    caps.name(name).map(|m| m.as_str())
}

fn named_f64(caps: &Captures<'_>, name: &str) -> Option<f64> {
    named(caps, name)?.parse().ok()
}

fn collapse_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Magnitudes are in volts from the moment they are parsed; the slash form
/// and the kilo prefix are notation, not data.
fn to_volts(magnitude: f64, unit: Option<&str>) -> f64 {
    if unit.is_some_and(is_kilo) {
        magnitude * 1000.0
    } else {
        magnitude
    }
}

fn is_kilo(unit: &str) -> bool {
    let unit = unit.trim_start();
    unit.starts_with('k') || unit.starts_with('K') || unit.starts_with('ك')
}

fn collect_other_magnitudes(text: &str, volts: &mut Vec<f64>) {
    for caps in VOLTAGE_SCAN.captures_iter(text) {
        let unit = named(&caps, "unit");
        if let Some(first) = named_f64(&caps, "a") {
            push_unique(volts, to_volts(first, unit));
        }
        if let Some(second) = named_f64(&caps, "b") {
            push_unique(volts, to_volts(second, unit));
        }
    }
}

fn push_unique(volts: &mut Vec<f64>, value: f64) {
    if !volts.contains(&value) {
        volts.push(value);
    }
}

fn detect_system(text: &str) -> CurrentSystem {
    let mut has_ac = false;
    let mut has_dc = false;
    for m in SYSTEM_SCAN.find_iter(text) {
        if m.as_str().contains("AC") {
            has_ac = true;
        } else {
            has_dc = true;
        }
    }
    match (has_ac, has_dc) {
        (true, true) => CurrentSystem::Conflicting,
        (true, false) => CurrentSystem::Ac,
        (false, true) => CurrentSystem::Dc,
        (false, false) => CurrentSystem::Unspecified,
    }
}
