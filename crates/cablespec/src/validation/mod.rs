//! Stage three: engineering validation of a corrected record.
//!
//! Ten rules run in fixed numeric order over the whole record; every rule
//! always runs, so a single pass surfaces every problem at once. The verdict
//! is computed from error-severity violations alone: warnings flag data
//! gaps and suspect values, errors flag concrete engineering
//! impossibilities.

mod rules;

use crate::types::{Severity, SpecRecord, ValidationResult, Verdict};

/// Run all engineering rules over a corrected record.
///
/// Violations come back in ascending rule order, stable within a rule, so
/// identical inputs produce identical reports.
pub fn validate(record: &SpecRecord) -> ValidationResult {
    let mut violations = Vec::new();
    for rule in &rules::RULES {
        let found = (rule.check)(record);
        if !found.is_empty() {
            tracing::trace!(rule = rule.id.number(), count = found.len(), "rule raised");
        }
        violations.extend(found);
    }

    let verdict = if violations.iter().any(|v| v.severity == Severity::Error) {
        Verdict::Rejected
    } else {
        Verdict::Ready
    };
    tracing::debug!(
        verdict = %verdict,
        violations = violations.len(),
        "validation complete"
    );

    ValidationResult {
        verdict,
        violations,
        record: record.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        CompositeValue, CurrentSystem, FieldValue, RecordStage, RuleId, SpecField,
    };
    use indexmap::IndexMap;

    fn corrected(values: Vec<(SpecField, FieldValue)>) -> SpecRecord {
        SpecRecord::from_values(
            RecordStage::Corrected,
            values.into_iter().collect::<IndexMap<_, _>>(),
        )
    }

    /// A record every rule is happy with.
    fn sound_record() -> SpecRecord {
        corrected(vec![
            (SpecField::CableType, FieldValue::enumerated("Copper", "Copper", 0.9)),
            (
                SpecField::Voltage,
                FieldValue::composite(
                    "600/1000 V",
                    CompositeValue::VoltageRating {
                        volts: vec![600.0, 1000.0],
                        system: CurrentSystem::Ac,
                    },
                    0.9,
                ),
            ),
            (SpecField::Current, FieldValue::numeric("32 A", 32.0, Some("A"), 0.8)),
            (
                SpecField::ConductorSize,
                FieldValue::numeric("16 mm²", 16.0, Some("mm²"), 0.85),
            ),
            (SpecField::Cores, FieldValue::numeric("4", 4.0, None, 0.85)),
            (SpecField::Insulation, FieldValue::enumerated("XLPE", "XLPE", 0.9)),
            (SpecField::Sheath, FieldValue::enumerated("PVC", "PVC", 0.9)),
            (
                SpecField::Armor,
                FieldValue::enumerated("Steel Wire Armor", "Steel Wire Armor", 0.9),
            ),
            (
                SpecField::TemperatureRange,
                FieldValue::composite(
                    "-30 °C to 90 °C",
                    CompositeValue::TemperatureRange { min_c: -30.0, max_c: 90.0 },
                    0.85,
                ),
            ),
            (
                SpecField::InsulationResistance,
                FieldValue::numeric("1.2 MΩ·km", 1.2, Some("MΩ·km"), 0.85),
            ),
        ])
    }

    #[test]
    fn test_sound_record_is_ready_with_no_violations() {
        let result = validate(&sound_record());
        assert_eq!(result.verdict, Verdict::Ready);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_warnings_alone_keep_the_record_ready() {
        let mut record = sound_record();
        record
            .fields
            .insert(SpecField::Armor, FieldValue::unverifiable(""));
        record
            .fields
            .insert(SpecField::Sheath, FieldValue::enumerated("Kevlar", "Kevlar", 0.5));

        let result = validate(&record);
        assert_eq!(result.verdict, Verdict::Ready);
        assert_eq!(result.warnings().count(), 2);
        assert_eq!(result.errors().count(), 0);
    }

    #[test]
    fn test_one_error_rejects_regardless_of_warnings() {
        let mut record = sound_record();
        record
            .fields
            .insert(SpecField::Armor, FieldValue::unverifiable(""));
        record.fields.insert(
            SpecField::TemperatureRange,
            FieldValue::composite(
                "150 °C",
                CompositeValue::TemperatureRange { min_c: 150.0, max_c: 150.0 },
                0.85,
            ),
        );

        let result = validate(&record);
        assert_eq!(result.verdict, Verdict::Rejected);
        assert_eq!(result.errors().count(), 1);
        assert!(result.warnings().count() >= 1);
    }

    #[test]
    fn test_empty_record_warns_on_every_rule_but_stays_ready() {
        let result = validate(&corrected(vec![]));
        assert_eq!(result.verdict, Verdict::Ready);
        // Rule 4 warns twice only under a high-voltage rating, so an empty
        // record yields exactly one warning per rule.
        assert_eq!(result.violations.len(), 10);
        assert!(result.violations.iter().all(|v| v.severity == Severity::Warning));
    }

    #[test]
    fn test_violations_come_out_in_ascending_rule_order() {
        let record = corrected(vec![
            // Rule 10 and rule 1 both fire; order must still be 1 before 10.
            (
                SpecField::CableType,
                FieldValue::enumerated("Fiber Optic", "Fiber Optic", 0.9),
            ),
            (
                SpecField::ConductorSize,
                FieldValue::numeric("0.05 mm²", 0.05, Some("mm²"), 0.85),
            ),
        ]);
        let result = validate(&record);
        let numbers: Vec<u8> = result.violations.iter().map(|v| v.rule.number()).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        assert_eq!(numbers, sorted);
        assert_eq!(result.violations.first().map(|v| v.rule), Some(RuleId::CableType));
        assert_eq!(result.violations.last().map(|v| v.rule), Some(RuleId::ConductorSize));
    }

    #[test]
    fn test_validation_is_deterministic() {
        let record = sound_record();
        let first = validate(&record);
        let second = validate(&record);
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_carries_the_validated_record() {
        let record = sound_record();
        let result = validate(&record);
        assert_eq!(result.record, record);
    }
}
