//! The ten engineering rules and their fixed tables.
//!
//! Every rule follows the same contract: read the corrected record, return
//! the violations it found, never touch anything. A rule whose inputs are
//! unverifiable reports one insufficient-data warning; only a concrete
//! engineering failure is an error.

use crate::types::{
    CompositeValue, CurrentSystem, FieldData, RuleId, SpecField, SpecRecord, Violation,
};

/// Materials that can never insulate, sheathe, or armor a power cable.
/// A match anywhere in the value is a concrete engineering failure.
const NON_ELECTRICAL_MATERIALS: &[&str] = &[
    "PLASTIC", "FOAM", "GLASS", "WOOD", "PAPER", "PAINT", "WATER", "STONE",
];

const APPROVED_INSULATION: &[&str] = &["PVC", "XLPE", "EPR", "RUBBER", "LSZH"];

const APPROVED_SHEATH: &[&str] = &[
    "PVC", "PE", "HDPE", "MDPE", "LDPE", "LSZH", "RUBBER", "LEAD", "NEOPRENE", "PUR", "TPU",
];

/// Metal families an armor value must name to count as metallic.
const METALLIC_ARMOR: &[&str] = &["STEEL", "ALUMINUM", "COPPER"];

/// Construction abbreviations that imply a metallic armor on their own.
const ARMOR_ABBREVIATIONS: &[&str] = &["SWA", "STA", "AWA", "ATA", "GSWA", "GSTA"];

/// Operating temperature limits in Celsius, inclusive on both ends.
const TEMPERATURE_LIMITS: (f64, f64) = (-40.0, 105.0);

/// Plausible current density band in A/mm², inclusive on both ends.
const DENSITY_LIMITS: (f64, f64) = (0.1, 30.0);

/// Smallest believable conductor cross-section in mm².
const MIN_CONDUCTOR_SIZE: f64 = 0.1;

/// Minimum acceptable insulation resistance in MΩ·km.
const MIN_INSULATION_RESISTANCE: f64 = 1.0;

/// PVC insulation is limited to low-voltage service; above this the cable
/// must use XLPE.
const PVC_VOLTAGE_LIMIT: f64 = 3300.0;

/// Above this rating an unverified insulation material is a safety data gap.
const INSULATION_REQUIRED_ABOVE: f64 = 1000.0;

/// A max/min magnitude ratio beyond this means two voltage classes got mixed
/// into one rating.
const MIXED_CLASS_RATIO: f64 = 50.0;

/// IEC 60228 standard conductor cross-sections in mm².
const STANDARD_SIZES: &[f64] = &[
    0.5, 0.75, 1.0, 1.5, 2.5, 4.0, 6.0, 10.0, 16.0, 25.0, 35.0, 50.0, 70.0, 95.0, 120.0, 150.0,
    185.0, 240.0, 300.0, 400.0, 500.0, 630.0, 800.0, 1000.0,
];

/// Relative tolerance for standard-size membership.
const SIZE_TOLERANCE: f64 = 0.05;

pub(super) type RuleCheck = fn(&SpecRecord) -> Vec<Violation>;

pub(super) struct Rule {
    pub id: RuleId,
    pub check: RuleCheck,
}

/// All rules in execution order. Violations come out in this order because
/// validation iterates the table front to back.
pub(super) const RULES: [Rule; 10] = [
    Rule { id: RuleId::CableType, check: check_cable_type },
    Rule { id: RuleId::Voltage, check: check_voltage },
    Rule { id: RuleId::CurrentVsSize, check: check_current_vs_size },
    Rule { id: RuleId::InsulationMaterial, check: check_insulation_material },
    Rule { id: RuleId::ConductorCount, check: check_conductor_count },
    Rule { id: RuleId::SheathMaterial, check: check_sheath_material },
    Rule { id: RuleId::ArmorMaterial, check: check_armor_material },
    Rule { id: RuleId::TemperatureRange, check: check_temperature_range },
    Rule { id: RuleId::InsulationResistance, check: check_insulation_resistance },
    Rule { id: RuleId::ConductorSize, check: check_conductor_size },
];

fn check_cable_type(record: &SpecRecord) -> Vec<Violation> {
    let rule = RuleId::CableType;
    let Some(material) = record.enum_value(SpecField::CableType) else {
        return vec![Violation::warning(rule, "Conductor material could not be verified")];
    };
    let upper = material.to_uppercase();
    if upper.contains("FIBER") || upper.contains("FIBRE") || upper.contains("OPTIC") {
        return vec![Violation::error(
            rule,
            format!("Rejected hybrid fiber-optic/power cable '{material}'"),
        )];
    }
    if !upper.contains("COPPER") && !upper.contains("ALUMINUM") {
        return vec![Violation::warning(
            rule,
            format!("Unrecognized conductor material '{material}'"),
        )];
    }
    Vec::new()
}

fn check_voltage(record: &SpecRecord) -> Vec<Violation> {
    let rule = RuleId::Voltage;
    let Some(value) = record.get(SpecField::Voltage) else {
        return vec![Violation::warning(rule, "Voltage rating could not be verified")];
    };
    let FieldData::Composite(CompositeValue::VoltageRating { volts, system }) = &value.data else {
        return vec![Violation::warning(rule, "Voltage rating could not be verified")];
    };

    let mut violations = Vec::new();
    if *system == CurrentSystem::Conflicting {
        violations.push(Violation::error(rule, "Rejected mixed AC/DC ratings"));
    }
    if volts.len() >= 2 {
        let max = volts.iter().copied().fold(f64::MIN, f64::max);
        let min = volts.iter().copied().fold(f64::MAX, f64::min);
        if max > 0.0 {
            let ratio = max / if min > 0.0 { min } else { 1.0 };
            if ratio > MIXED_CLASS_RATIO {
                violations.push(Violation::error(
                    rule,
                    format!("Rejected mixed voltage levels '{}'", value.raw),
                ));
            }
        }
    }
    violations
}

fn check_current_vs_size(record: &SpecRecord) -> Vec<Violation> {
    let rule = RuleId::CurrentVsSize;
    let (Some((amps, _)), Some((size_mm2, _))) = (
        record.numeric(SpecField::Current),
        record.numeric(SpecField::ConductorSize),
    ) else {
        return vec![Violation::warning(
            rule,
            "Current or conductor size unavailable; density unchecked",
        )];
    };
    // A non-positive size is rejected by rule 10; the density is meaningless.
    if size_mm2 <= 0.0 {
        return Vec::new();
    }

    let density = amps / size_mm2;
    let (low, high) = DENSITY_LIMITS;
    if density > high {
        vec![Violation::error(
            rule,
            format!(
                "{amps} A is physically incompatible with {size_mm2} mm² (density {density:.1} A/mm² too high)"
            ),
        )]
    } else if density < low {
        vec![Violation::error(
            rule,
            format!(
                "{amps} A is too low for {size_mm2} mm² (density {density:.4} A/mm²); likely an OCR misread"
            ),
        )]
    } else {
        Vec::new()
    }
}

fn check_insulation_material(record: &SpecRecord) -> Vec<Violation> {
    let rule = RuleId::InsulationMaterial;
    let max_voltage = record.max_voltage();

    let Some(material) = record.enum_value(SpecField::Insulation) else {
        let mut violations =
            vec![Violation::warning(rule, "Insulation material could not be verified")];
        if max_voltage.is_some_and(|v| v > INSULATION_REQUIRED_ABOVE) {
            violations.push(Violation::warning(
                rule,
                "Voltage rating above 1000 V requires a verified insulation material",
            ));
        }
        return violations;
    };

    let upper = material.to_uppercase();
    let mut violations = Vec::new();
    if NON_ELECTRICAL_MATERIALS.iter().any(|bad| upper.contains(bad)) {
        violations.push(Violation::error(
            rule,
            format!("Rejected non-electrical material '{material}'"),
        ));
    } else if !APPROVED_INSULATION.contains(&upper.as_str()) {
        violations.push(Violation::warning(
            rule,
            format!("Unrecognized insulation material '{material}'"),
        ));
    }
    if upper.contains("PVC") && max_voltage.is_some_and(|v| v > PVC_VOLTAGE_LIMIT) {
        violations.push(Violation::error(
            rule,
            format!(
                "PVC insulation cannot be used above {PVC_VOLTAGE_LIMIT} V; must be XLPE"
            ),
        ));
    }
    violations
}

fn check_conductor_count(record: &SpecRecord) -> Vec<Violation> {
    let rule = RuleId::ConductorCount;
    let Some(value) = record.get(SpecField::Cores) else {
        return vec![Violation::warning(rule, "Conductor count could not be verified")];
    };
    let FieldData::Numeric { value: count, .. } = value.data else {
        return vec![Violation::warning(rule, "Conductor count could not be verified")];
    };

    if count.fract() != 0.0 {
        vec![Violation::error(
            rule,
            format!("Rejected fractional conductor count '{}'", value.raw),
        )]
    } else if count < 1.0 {
        vec![Violation::error(
            rule,
            format!("Conductor count must be a positive integer, got {count}"),
        )]
    } else {
        Vec::new()
    }
}

fn check_sheath_material(record: &SpecRecord) -> Vec<Violation> {
    let rule = RuleId::SheathMaterial;
    let Some(material) = record.enum_value(SpecField::Sheath) else {
        return vec![Violation::warning(rule, "Sheath material could not be verified")];
    };
    let upper = material.to_uppercase();
    if NON_ELECTRICAL_MATERIALS.iter().any(|bad| upper.contains(bad)) {
        vec![Violation::error(
            rule,
            format!("Rejected non-electrical material '{material}'"),
        )]
    } else if !APPROVED_SHEATH.contains(&upper.as_str()) {
        vec![Violation::warning(
            rule,
            format!("Unrecognized sheath material '{material}'"),
        )]
    } else {
        Vec::new()
    }
}

fn check_armor_material(record: &SpecRecord) -> Vec<Violation> {
    let rule = RuleId::ArmorMaterial;
    let Some(material) = record.enum_value(SpecField::Armor) else {
        return vec![Violation::warning(rule, "Armor material could not be verified")];
    };
    let upper = material.to_uppercase();
    let metallic = METALLIC_ARMOR.iter().any(|metal| upper.contains(metal))
        || ARMOR_ABBREVIATIONS.contains(&upper.as_str());
    if metallic {
        Vec::new()
    } else if NON_ELECTRICAL_MATERIALS.iter().any(|bad| upper.contains(bad)) {
        vec![Violation::error(
            rule,
            format!("Rejected non-metallic armor '{material}'"),
        )]
    } else {
        vec![Violation::warning(
            rule,
            format!("Unrecognized armor construction '{material}'"),
        )]
    }
}

fn check_temperature_range(record: &SpecRecord) -> Vec<Violation> {
    let rule = RuleId::TemperatureRange;
    let Some((min_c, max_c)) = record.temperature_range() else {
        return vec![Violation::warning(rule, "Operating temperature could not be verified")];
    };

    let mut violations = Vec::new();
    if min_c > max_c {
        violations.push(Violation::error(
            rule,
            format!("Temperature range is inverted ({min_c} °C to {max_c} °C)"),
        ));
    }
    let (low, high) = TEMPERATURE_LIMITS;
    if !(low..=high).contains(&min_c) {
        violations.push(Violation::error(
            rule,
            format!("{min_c} °C is outside the realistic {low} °C to {high} °C limit"),
        ));
    }
    if max_c != min_c && !(low..=high).contains(&max_c) {
        violations.push(Violation::error(
            rule,
            format!("{max_c} °C is outside the realistic {low} °C to {high} °C limit"),
        ));
    }
    violations
}

fn check_insulation_resistance(record: &SpecRecord) -> Vec<Violation> {
    let rule = RuleId::InsulationResistance;
    let Some((reading, unit)) = record.numeric(SpecField::InsulationResistance) else {
        return vec![Violation::warning(rule, "Insulation resistance could not be verified")];
    };
    if unit != Some("MΩ·km") {
        return vec![Violation::warning(
            rule,
            "Insulation resistance is in an unrecognized unit; minimum unchecked",
        )];
    }
    if reading < MIN_INSULATION_RESISTANCE {
        vec![Violation::error(
            rule,
            format!(
                "Insulation resistance {reading} MΩ·km is below the {MIN_INSULATION_RESISTANCE} MΩ·km minimum"
            ),
        )]
    } else {
        Vec::new()
    }
}

fn check_conductor_size(record: &SpecRecord) -> Vec<Violation> {
    let rule = RuleId::ConductorSize;
    let Some((size_mm2, _)) = record.numeric(SpecField::ConductorSize) else {
        return vec![Violation::warning(rule, "Conductor size could not be verified")];
    };
    if size_mm2 < MIN_CONDUCTOR_SIZE {
        return vec![Violation::error(
            rule,
            format!("Rejected unrealistic conductor size {size_mm2} mm²"),
        )];
    }
    let standard = STANDARD_SIZES
        .iter()
        .any(|s| ((size_mm2 - s).abs() / s) < SIZE_TOLERANCE);
    if standard {
        Vec::new()
    } else {
        vec![Violation::warning(
            rule,
            format!("{size_mm2} mm² is not a standard IEC 60228 cross-section"),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldValue, RecordStage, Severity};
    use indexmap::IndexMap;

    fn corrected(values: Vec<(SpecField, FieldValue)>) -> SpecRecord {
        SpecRecord::from_values(
            RecordStage::Corrected,
            values.into_iter().collect::<IndexMap<_, _>>(),
        )
    }

    fn voltage(volts: &[f64], system: CurrentSystem) -> FieldValue {
        FieldValue::composite(
            "rating",
            CompositeValue::VoltageRating { volts: volts.to_vec(), system },
            0.9,
        )
    }

    #[test]
    fn test_fiber_optic_type_is_an_error() {
        let record = corrected(vec![(
            SpecField::CableType,
            FieldValue::enumerated("Fiber Optic", "Fiber Optic", 0.9),
        )]);
        let violations = check_cable_type(&record);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn test_copper_type_passes() {
        let record = corrected(vec![(
            SpecField::CableType,
            FieldValue::enumerated("Copper", "Copper", 0.9),
        )]);
        assert!(check_cable_type(&record).is_empty());
    }

    #[test]
    fn test_unknown_conductor_is_a_warning() {
        let record = corrected(vec![(
            SpecField::CableType,
            FieldValue::enumerated("Unobtainium", "Unobtainium", 0.5),
        )]);
        let violations = check_cable_type(&record);
        assert_eq!(violations[0].severity, Severity::Warning);
    }

    #[test]
    fn test_missing_field_is_an_insufficient_data_warning() {
        let record = corrected(vec![]);
        for check in [
            check_cable_type as RuleCheck,
            check_voltage,
            check_current_vs_size,
            check_insulation_material,
            check_conductor_count,
            check_sheath_material,
            check_armor_material,
            check_temperature_range,
            check_insulation_resistance,
            check_conductor_size,
        ] {
            let violations = check(&record);
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].severity, Severity::Warning);
        }
    }

    #[test]
    fn test_conflicting_system_is_an_error() {
        let record = corrected(vec![(
            SpecField::Voltage,
            voltage(&[600.0, 1000.0], CurrentSystem::Conflicting),
        )]);
        let violations = check_voltage(&record);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn test_mixed_voltage_classes_are_an_error() {
        let record = corrected(vec![(
            SpecField::Voltage,
            voltage(&[500_000.0, 12.0], CurrentSystem::Ac),
        )]);
        let violations = check_voltage(&record);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Error);
        assert!(violations[0].message.contains("mixed voltage levels"));
    }

    #[test]
    fn test_dual_rating_within_class_passes() {
        let record = corrected(vec![(
            SpecField::Voltage,
            voltage(&[600.0, 1000.0], CurrentSystem::Ac),
        )]);
        assert!(check_voltage(&record).is_empty());
    }

    #[test]
    fn test_density_bounds_are_inclusive() {
        // 480 A over 16 mm² sits exactly on the 30 A/mm² ceiling.
        let at_ceiling = corrected(vec![
            (SpecField::Current, FieldValue::numeric("480 A", 480.0, Some("A"), 0.8)),
            (
                SpecField::ConductorSize,
                FieldValue::numeric("16 mm²", 16.0, Some("mm²"), 0.85),
            ),
        ]);
        assert!(check_current_vs_size(&at_ceiling).is_empty());

        // 1.6 A over 16 mm² sits exactly on the 0.1 A/mm² floor.
        let at_floor = corrected(vec![
            (SpecField::Current, FieldValue::numeric("1.6 A", 1.6, Some("A"), 0.8)),
            (
                SpecField::ConductorSize,
                FieldValue::numeric("16 mm²", 16.0, Some("mm²"), 0.85),
            ),
        ]);
        assert!(check_current_vs_size(&at_floor).is_empty());
    }

    #[test]
    fn test_excessive_density_is_an_error() {
        let record = corrected(vec![
            (SpecField::Current, FieldValue::numeric("500 A", 500.0, Some("A"), 0.8)),
            (
                SpecField::ConductorSize,
                FieldValue::numeric("16 mm²", 16.0, Some("mm²"), 0.85),
            ),
        ]);
        let violations = check_current_vs_size(&record);
        assert_eq!(violations[0].severity, Severity::Error);
        assert!(violations[0].message.contains("too high"));
    }

    #[test]
    fn test_absurdly_low_density_is_an_error() {
        let record = corrected(vec![
            (SpecField::Current, FieldValue::numeric("2 A", 2.0, Some("A"), 0.8)),
            (
                SpecField::ConductorSize,
                FieldValue::numeric("1000 mm²", 1000.0, Some("mm²"), 0.85),
            ),
        ]);
        let violations = check_current_vs_size(&record);
        assert_eq!(violations[0].severity, Severity::Error);
        assert!(violations[0].message.contains("too low"));
    }

    #[test]
    fn test_non_electrical_insulation_is_an_error() {
        let record = corrected(vec![(
            SpecField::Insulation,
            FieldValue::enumerated("Foam", "Foam", 0.6),
        )]);
        let violations = check_insulation_material(&record);
        assert_eq!(violations[0].severity, Severity::Error);
        assert!(violations[0].message.contains("non-electrical"));
    }

    #[test]
    fn test_pvc_above_limit_is_an_error() {
        let record = corrected(vec![
            (SpecField::Insulation, FieldValue::enumerated("PVC", "PVC", 0.9)),
            (SpecField::Voltage, voltage(&[11_000.0], CurrentSystem::Ac)),
        ]);
        let violations = check_insulation_material(&record);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Error);
        assert!(violations[0].message.contains("XLPE"));
    }

    #[test]
    fn test_pvc_at_low_voltage_passes() {
        let record = corrected(vec![
            (SpecField::Insulation, FieldValue::enumerated("PVC", "PVC", 0.9)),
            (SpecField::Voltage, voltage(&[600.0, 1000.0], CurrentSystem::Ac)),
        ]);
        assert!(check_insulation_material(&record).is_empty());
    }

    #[test]
    fn test_high_voltage_with_missing_insulation_adds_safety_warning() {
        let record = corrected(vec![(
            SpecField::Voltage,
            voltage(&[11_000.0], CurrentSystem::Ac),
        )]);
        let violations = check_insulation_material(&record);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| v.severity == Severity::Warning));
        assert!(violations[1].message.contains("1000 V"));
    }

    #[test]
    fn test_fractional_core_count_is_an_error() {
        let record = corrected(vec![(
            SpecField::Cores,
            FieldValue::numeric("4.5", 4.5, None, 0.8),
        )]);
        let violations = check_conductor_count(&record);
        assert_eq!(violations[0].severity, Severity::Error);
        assert!(violations[0].message.contains("fractional"));
    }

    #[test]
    fn test_zero_core_count_is_an_error() {
        let record = corrected(vec![(
            SpecField::Cores,
            FieldValue::numeric("0", 0.0, None, 0.8),
        )]);
        let violations = check_conductor_count(&record);
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn test_unrecognized_sheath_is_a_warning() {
        let record = corrected(vec![(
            SpecField::Sheath,
            FieldValue::enumerated("Kevlar", "Kevlar", 0.6),
        )]);
        let violations = check_sheath_material(&record);
        assert_eq!(violations[0].severity, Severity::Warning);
    }

    #[test]
    fn test_non_metallic_armor_is_an_error() {
        let record = corrected(vec![(
            SpecField::Armor,
            FieldValue::enumerated("Plastic Tape", "Plastic Tape", 0.6),
        )]);
        let violations = check_armor_material(&record);
        assert_eq!(violations[0].severity, Severity::Error);
        assert!(violations[0].message.contains("non-metallic"));
    }

    #[test]
    fn test_armor_abbreviation_counts_as_metallic() {
        let record = corrected(vec![(
            SpecField::Armor,
            FieldValue::enumerated("SWA", "SWA", 0.8),
        )]);
        assert!(check_armor_material(&record).is_empty());
    }

    #[test]
    fn test_expanded_armor_counts_as_metallic() {
        let record = corrected(vec![(
            SpecField::Armor,
            FieldValue::enumerated("Galvanized Steel Wire Armor", "Galvanized Steel Wire Armor", 0.9),
        )]);
        assert!(check_armor_material(&record).is_empty());
    }

    #[test]
    fn test_temperature_bounds_are_inclusive() {
        let record = corrected(vec![(
            SpecField::TemperatureRange,
            FieldValue::composite(
                "-40 °C to 105 °C",
                CompositeValue::TemperatureRange { min_c: -40.0, max_c: 105.0 },
                0.85,
            ),
        )]);
        assert!(check_temperature_range(&record).is_empty());
    }

    #[test]
    fn test_temperature_outside_limits_is_an_error() {
        let record = corrected(vec![(
            SpecField::TemperatureRange,
            FieldValue::composite(
                "-30 °C to 150 °C",
                CompositeValue::TemperatureRange { min_c: -30.0, max_c: 150.0 },
                0.85,
            ),
        )]);
        let violations = check_temperature_range(&record);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Error);
        assert!(violations[0].message.contains("150"));
    }

    #[test]
    fn test_inverted_temperature_range_is_an_error() {
        let record = corrected(vec![(
            SpecField::TemperatureRange,
            FieldValue::composite(
                "90 °C to -30 °C",
                CompositeValue::TemperatureRange { min_c: 90.0, max_c: -30.0 },
                0.85,
            ),
        )]);
        let violations = check_temperature_range(&record);
        assert_eq!(violations[0].severity, Severity::Error);
        assert!(violations[0].message.contains("inverted"));
    }

    #[test]
    fn test_resistance_exactly_at_minimum_passes() {
        let record = corrected(vec![(
            SpecField::InsulationResistance,
            FieldValue::numeric("1 MΩ·km", 1.0, Some("MΩ·km"), 0.85),
        )]);
        assert!(check_insulation_resistance(&record).is_empty());
    }

    #[test]
    fn test_resistance_below_minimum_is_an_error() {
        let record = corrected(vec![(
            SpecField::InsulationResistance,
            FieldValue::numeric("0.5 MΩ·km", 0.5, Some("MΩ·km"), 0.85),
        )]);
        let violations = check_insulation_resistance(&record);
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn test_undersized_conductor_is_an_error() {
        let record = corrected(vec![(
            SpecField::ConductorSize,
            FieldValue::numeric("0.05 mm²", 0.05, Some("mm²"), 0.85),
        )]);
        let violations = check_conductor_size(&record);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn test_nonstandard_size_is_a_warning() {
        let record = corrected(vec![(
            SpecField::ConductorSize,
            FieldValue::numeric("17 mm²", 17.0, Some("mm²"), 0.85),
        )]);
        let violations = check_conductor_size(&record);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert!(violations[0].message.contains("IEC 60228"));
    }

    #[test]
    fn test_standard_size_within_tolerance_passes() {
        let record = corrected(vec![(
            SpecField::ConductorSize,
            FieldValue::numeric("16.2 mm²", 16.2, Some("mm²"), 0.85),
        )]);
        assert!(check_conductor_size(&record).is_empty());
    }

    #[test]
    fn test_rule_table_is_in_numeric_order() {
        let numbers: Vec<u8> = RULES.iter().map(|r| r.id.number()).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<u8>>());
    }
}
