//! Stage two: deterministic correction of a raw record.
//!
//! Three sub-steps run in a fixed order so corrections are reproducible:
//! composite decomposition (the `NxS` split), vocabulary and truncation
//! repair, then unit normalization. Every change appends one
//! [`CorrectionEntry`] to the audit log; a value the stage cannot fix safely
//! is degraded to unverifiable rather than guessed at.
//!
//! Correction is idempotent. Each sub-step keys on the typed data, not on
//! the raw string, and every rewrite leaves the canonical surface form
//! behind, so feeding a corrected record back through produces the same
//! record and an empty log.

mod repair;
mod units;

use indexmap::IndexMap;

use crate::core::config::PipelineConfig;
use crate::types::{
    CompositeValue, CorrectionEntry, CorrectionReason, CurrentSystem, FieldData, FieldValue,
    RecordStage, SpecField, SpecRecord,
};

/// Correct a raw record, producing the corrected snapshot and the audit log
/// of everything that changed.
pub fn correct(record: &SpecRecord, config: &PipelineConfig) -> (SpecRecord, Vec<CorrectionEntry>) {
    let mut fields = record.fields.clone();
    let mut log = Vec::new();

    decompose_core_size(&mut fields, &mut log);
    repair::repair_fields(&mut fields, &mut log, &config.correction);
    normalize_units(&mut fields, &mut log);

    let corrected = SpecRecord {
        stage: RecordStage::Corrected,
        fields,
    };
    tracing::debug!(fixes = log.len(), "correction complete");
    (corrected, log)
}

/// Split an `NxS` conductor notation into the cores and conductor-size
/// fields. The notation claims both values at once, so a rejected split
/// degrades both.
fn decompose_core_size(fields: &mut IndexMap<SpecField, FieldValue>, log: &mut Vec<CorrectionEntry>) {
    let Some(size_value) = fields.get(&SpecField::ConductorSize) else {
        return;
    };
    let (multiplier, size_mm2) = match &size_value.data {
        FieldData::Composite(CompositeValue::CoreSize { multiplier, size_mm2 }) => {
            (*multiplier, *size_mm2)
        }
        _ => return,
    };
    let confidence = size_value.confidence;
    let notation = size_value.raw.clone();

    if multiplier >= 1.0 && multiplier.fract() == 0.0 && size_mm2 > 0.0 {
        let size_surface = units::canonical_size(size_mm2);
        log.push(CorrectionEntry::new(
            SpecField::ConductorSize,
            &notation,
            &size_surface,
            CorrectionReason::CompositeSplit,
        ));
        fields.insert(
            SpecField::ConductorSize,
            FieldValue::numeric(size_surface, size_mm2, Some("mm²"), confidence),
        );

        let cores_surface = units::canonical_cores(multiplier);
        // When an independent core count disagrees with the notation, the
        // notation wins; the log keeps the overridden value visible.
        let cores_before = match fields.get(&SpecField::Cores) {
            Some(existing) if !existing.is_unverifiable() && existing.raw != cores_surface => {
                existing.raw.clone()
            }
            _ => notation.clone(),
        };
        log.push(CorrectionEntry::new(
            SpecField::Cores,
            cores_before,
            &cores_surface,
            CorrectionReason::CompositeSplit,
        ));
        fields.insert(
            SpecField::Cores,
            FieldValue::numeric(cores_surface, multiplier, None, confidence),
        );
    } else {
        tracing::warn!(notation = %notation, "rejected core/size notation, degrading both fields");
        for field in [SpecField::ConductorSize, SpecField::Cores] {
            log.push(CorrectionEntry::new(
                field,
                &notation,
                "unverifiable",
                CorrectionReason::Degraded,
            ));
            fields.insert(field, FieldValue::unverifiable(notation.clone()));
        }
    }
}

fn normalize_units(fields: &mut IndexMap<SpecField, FieldValue>, log: &mut Vec<CorrectionEntry>) {
    normalize_voltage(fields, log);

    if let Some(value) = fields.get_mut(&SpecField::Current)
        && let FieldData::Numeric { value: amps, .. } = &value.data
    {
        let surface = units::canonical_current(*amps);
        rewrite_surface(SpecField::Current, value, surface, CorrectionReason::Formatting, log);
    }

    if let Some(value) = fields.get_mut(&SpecField::ConductorSize)
        && let FieldData::Numeric { value: size, .. } = &value.data
    {
        let surface = units::canonical_size(*size);
        rewrite_surface(
            SpecField::ConductorSize,
            value,
            surface,
            CorrectionReason::Formatting,
            log,
        );
    }

    if let Some(value) = fields.get_mut(&SpecField::Cores)
        && let FieldData::Numeric { value: count, .. } = &value.data
    {
        let surface = units::canonical_cores(*count);
        rewrite_surface(SpecField::Cores, value, surface, CorrectionReason::Formatting, log);
    }

    if let Some(value) = fields.get_mut(&SpecField::TemperatureRange)
        && let FieldData::Composite(CompositeValue::TemperatureRange { min_c, max_c }) = &value.data
    {
        let surface = units::canonical_temperature(*min_c, *max_c);
        rewrite_surface(
            SpecField::TemperatureRange,
            value,
            surface,
            CorrectionReason::Formatting,
            log,
        );
    }

    normalize_resistance(fields, log);
}

fn normalize_voltage(fields: &mut IndexMap<SpecField, FieldValue>, log: &mut Vec<CorrectionEntry>) {
    let Some(value) = fields.get_mut(&SpecField::Voltage) else {
        return;
    };
    let FieldData::Composite(CompositeValue::VoltageRating { volts, system }) = &mut value.data
    else {
        return;
    };

    let surface = units::canonical_voltage(volts);
    if value.raw != surface {
        // Magnitudes were already parsed into volts, so a kilo mention in
        // the raw form means this rewrite is the kV -> V conversion.
        let reason = if units::mentions_kilovolts(&value.raw) {
            CorrectionReason::UnitNormalization
        } else {
            CorrectionReason::Formatting
        };
        log.push(CorrectionEntry::new(SpecField::Voltage, &value.raw, &surface, reason));
        value.raw = surface;
    }

    if *system == CurrentSystem::Unspecified && volts.len() >= 2 {
        *system = CurrentSystem::Ac;
        log.push(CorrectionEntry::new(
            SpecField::Voltage,
            "unspecified",
            "AC",
            CorrectionReason::AcImplied,
        ));
    }
}

fn normalize_resistance(fields: &mut IndexMap<SpecField, FieldValue>, log: &mut Vec<CorrectionEntry>) {
    let Some(value) = fields.get_mut(&SpecField::InsulationResistance) else {
        return;
    };
    let FieldData::Numeric { value: reading, unit } = &mut value.data else {
        return;
    };

    let (converted, rescaled) = units::resistance_to_mohm_km(*reading, unit.as_deref());
    if rescaled {
        let surface = units::canonical_resistance(converted);
        log.push(CorrectionEntry::new(
            SpecField::InsulationResistance,
            &value.raw,
            &surface,
            CorrectionReason::UnitNormalization,
        ));
        *reading = converted;
        *unit = Some("MΩ·km".to_string());
        value.raw = surface;
    } else if unit.as_deref() == Some("MΩ·km") {
        let surface = units::canonical_resistance(converted);
        rewrite_surface(
            SpecField::InsulationResistance,
            value,
            surface,
            CorrectionReason::Formatting,
            log,
        );
    }
    // An unrecognized unit is left exactly as extracted.
}

fn rewrite_surface(
    field: SpecField,
    value: &mut FieldValue,
    surface: String,
    reason: CorrectionReason,
    log: &mut Vec<CorrectionEntry>,
) {
    if value.raw != surface {
        log.push(CorrectionEntry::new(field, &value.raw, &surface, reason));
        value.raw = surface;
    }
}
