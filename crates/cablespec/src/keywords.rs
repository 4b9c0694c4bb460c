//! Voltage categorization and indexing keywords.
//!
//! Runs only over records that passed validation. The category comes from
//! the highest validated voltage magnitude; the keywords are the verified
//! categorical values plus the category label, emitted in canonical field
//! order so identical records always index identically.

use crate::types::{CableCategory, Classification, SpecField, SpecRecord};

/// Voltage class ceilings in volts. Intervals are half-open on the left so a
/// boundary value belongs to exactly one class: low is (0, 3000], medium is
/// (3000, 30000], high is everything above.
const LOW_VOLTAGE_MAX: f64 = 3_000.0;
const MEDIUM_VOLTAGE_MAX: f64 = 30_000.0;

/// Derive the voltage category and the indexing keywords from a corrected
/// record.
pub fn classify(record: &SpecRecord) -> Classification {
    let category = match record.max_voltage() {
        Some(v) if v > MEDIUM_VOLTAGE_MAX => CableCategory::HighVoltage,
        Some(v) if v > LOW_VOLTAGE_MAX => CableCategory::MediumVoltage,
        Some(v) if v > 0.0 => CableCategory::LowVoltage,
        _ => CableCategory::Uncategorized,
    };

    let mut keywords = Vec::new();
    push_unique(&mut keywords, record.enum_value(SpecField::CableType));
    if category != CableCategory::Uncategorized {
        let label = category.to_string();
        push_unique(&mut keywords, Some(&label));
    }
    push_unique(&mut keywords, record.enum_value(SpecField::Insulation));
    push_unique(&mut keywords, record.enum_value(SpecField::Sheath));
    push_unique(&mut keywords, record.enum_value(SpecField::Armor));

    tracing::debug!(
        category = %category,
        keywords = keywords.len(),
        "classification complete"
    );
    Classification { category, keywords }
}

fn push_unique(keywords: &mut Vec<String>, term: Option<&str>) {
    if let Some(term) = term
        && !term.is_empty()
        && !keywords.iter().any(|k| k == term)
    {
        keywords.push(term.to_string());
    }
}
