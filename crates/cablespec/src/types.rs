use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Fields
// ============================================================================

/// The ten specification fields tracked for every datasheet.
///
/// Declaration order is the canonical field order: records iterate in this
/// order, validation rules fire in this order, and keywords are emitted in
/// this order. Two runs over the same input therefore always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecField {
    CableType,
    Voltage,
    Current,
    ConductorSize,
    Cores,
    Insulation,
    Sheath,
    Armor,
    TemperatureRange,
    InsulationResistance,
}

impl SpecField {
    /// All fields in canonical order.
    pub const ALL: [SpecField; 10] = [
        SpecField::CableType,
        SpecField::Voltage,
        SpecField::Current,
        SpecField::ConductorSize,
        SpecField::Cores,
        SpecField::Insulation,
        SpecField::Sheath,
        SpecField::Armor,
        SpecField::TemperatureRange,
        SpecField::InsulationResistance,
    ];

    /// Human-readable label used in reports and violation messages.
    pub fn label(&self) -> &'static str {
        match self {
            SpecField::CableType => "Cable Type",
            SpecField::Voltage => "Voltage",
            SpecField::Current => "Current",
            SpecField::ConductorSize => "Conductor Size",
            SpecField::Cores => "Cores",
            SpecField::Insulation => "Insulation",
            SpecField::Sheath => "Sheath",
            SpecField::Armor => "Armor",
            SpecField::TemperatureRange => "Temperature Range",
            SpecField::InsulationResistance => "Insulation Resistance",
        }
    }

    /// The canonical unit this field is normalized to, if it carries one.
    pub fn canonical_unit(&self) -> Option<&'static str> {
        match self {
            SpecField::Voltage => Some("V"),
            SpecField::Current => Some("A"),
            SpecField::ConductorSize => Some("mm²"),
            SpecField::TemperatureRange => Some("°C"),
            SpecField::InsulationResistance => Some("MΩ·km"),
            _ => None,
        }
    }
}

impl fmt::Display for SpecField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Datasheet language a pattern targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => f.write_str("en"),
            Language::Ar => f.write_str("ar"),
        }
    }
}

// ============================================================================
// Field values
// ============================================================================

/// AC/DC designation attached to a voltage rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrentSystem {
    Ac,
    Dc,
    /// Both AC and DC markers were found for the same rating.
    Conflicting,
    Unspecified,
}

impl fmt::Display for CurrentSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrentSystem::Ac => f.write_str("AC"),
            CurrentSystem::Dc => f.write_str("DC"),
            CurrentSystem::Conflicting => f.write_str("AC/DC conflict"),
            CurrentSystem::Unspecified => f.write_str("unspecified"),
        }
    }
}

/// Multi-part value (discriminated union).
///
/// Composite values keep related magnitudes together so validation can reason
/// about them as a unit. `CoreSize` is transient: the correction stage splits
/// it into the conductor-size and cores fields, so it never survives into a
/// corrected record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "composite", rename_all = "snake_case")]
pub enum CompositeValue {
    /// One or more voltage magnitudes in volts, e.g. `600/1000 V`.
    ///
    /// Every distinct magnitude mentioned in the source text is collected
    /// here, which is what lets validation spot a 500 kV rating sharing a
    /// datasheet with a 12 V one.
    VoltageRating { volts: Vec<f64>, system: CurrentSystem },

    /// Operating range in degrees Celsius. A single stated temperature is
    /// stored with `min_c == max_c`.
    TemperatureRange { min_c: f64, max_c: f64 },

    /// An undecomposed `NxS` conductor notation, e.g. `4x16mm2`.
    ///
    /// `multiplier` stays floating-point until the correction stage checks it
    /// is a positive integer; a garbled `4.5x16` must be rejectable, not
    /// silently truncated.
    CoreSize { multiplier: f64, size_mm2: f64 },
}

/// Typed payload of an extracted field (discriminated union).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldData {
    /// Scalar magnitude with an optional unit, e.g. `32 A`.
    Numeric {
        value: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
    },
    /// Categorical value, e.g. `XLPE` or `Steel Wire Armor`.
    Enum { value: String },
    /// Multi-part value, e.g. a dual voltage rating.
    Composite(CompositeValue),
    /// Present in the source but too garbled or ambiguous to trust.
    ///
    /// Fields that never matched at all are also recorded this way, so a
    /// record always carries all ten fields and absence is representable
    /// without optionals.
    Unverifiable,
}

/// One extracted field: the raw matched text, its typed payload, and a
/// confidence weight inherited from the pattern that matched it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldValue {
    /// Source text the value was read from. The correction stage rewrites
    /// this to the canonical surface form so corrected records re-enter the
    /// pipeline unchanged.
    pub raw: String,
    #[serde(flatten)]
    pub data: FieldData,
    pub confidence: f32,
}

impl FieldValue {
    pub fn numeric(raw: impl Into<String>, value: f64, unit: Option<&str>, confidence: f32) -> Self {
        FieldValue {
            raw: raw.into(),
            data: FieldData::Numeric {
                value,
                unit: unit.map(str::to_string),
            },
            confidence,
        }
    }

    pub fn enumerated(raw: impl Into<String>, value: impl Into<String>, confidence: f32) -> Self {
        FieldValue {
            raw: raw.into(),
            data: FieldData::Enum { value: value.into() },
            confidence,
        }
    }

    pub fn composite(raw: impl Into<String>, value: CompositeValue, confidence: f32) -> Self {
        FieldValue {
            raw: raw.into(),
            data: FieldData::Composite(value),
            confidence,
        }
    }

    /// An absent or untrustworthy field. Confidence is zero by definition.
    pub fn unverifiable(raw: impl Into<String>) -> Self {
        FieldValue {
            raw: raw.into(),
            data: FieldData::Unverifiable,
            confidence: 0.0,
        }
    }

    pub fn is_unverifiable(&self) -> bool {
        matches!(self.data, FieldData::Unverifiable)
    }
}

// ============================================================================
// Records
// ============================================================================

/// Which pipeline stage produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStage {
    Raw,
    Corrected,
}

/// A complete snapshot of all ten fields at one pipeline stage.
///
/// Records are immutable between stages: correction consumes a raw record and
/// produces a new corrected one rather than mutating in place. Iteration
/// order is the canonical field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecRecord {
    pub stage: RecordStage,
    pub fields: IndexMap<SpecField, FieldValue>,
}

impl SpecRecord {
    /// Build a record from per-field values, filling any field not supplied
    /// with an unverifiable placeholder so all ten are always present.
    pub fn from_values(stage: RecordStage, mut values: IndexMap<SpecField, FieldValue>) -> Self {
        let mut fields = IndexMap::with_capacity(SpecField::ALL.len());
        for field in SpecField::ALL {
            let value = values
                .swap_remove(&field)
                .unwrap_or_else(|| FieldValue::unverifiable(""));
            fields.insert(field, value);
        }
        SpecRecord { stage, fields }
    }

    pub fn get(&self, field: SpecField) -> Option<&FieldValue> {
        self.fields.get(&field)
    }

    /// Number of fields that carry a verified value.
    pub fn verified_count(&self) -> usize {
        self.fields.values().filter(|v| !v.is_unverifiable()).count()
    }

    /// Scalar magnitude of a field, with its unit, when verified and numeric.
    pub fn numeric(&self, field: SpecField) -> Option<(f64, Option<&str>)> {
        match &self.get(field)?.data {
            FieldData::Numeric { value, unit } => Some((*value, unit.as_deref())),
            _ => None,
        }
    }

    /// Categorical value of a field when verified and enumerated.
    pub fn enum_value(&self, field: SpecField) -> Option<&str> {
        match &self.get(field)?.data {
            FieldData::Enum { value } => Some(value.as_str()),
            _ => None,
        }
    }

    /// Voltage magnitudes and AC/DC designation, when the voltage field holds
    /// a verified rating.
    pub fn voltage_rating(&self) -> Option<(&[f64], CurrentSystem)> {
        match &self.get(SpecField::Voltage)?.data {
            FieldData::Composite(CompositeValue::VoltageRating { volts, system }) => {
                Some((volts.as_slice(), *system))
            }
            _ => None,
        }
    }

    /// Highest voltage magnitude in the rating, if any.
    pub fn max_voltage(&self) -> Option<f64> {
        let (volts, _) = self.voltage_rating()?;
        volts.iter().copied().reduce(f64::max)
    }

    /// Operating temperature bounds in Celsius, when verified.
    pub fn temperature_range(&self) -> Option<(f64, f64)> {
        match &self.get(SpecField::TemperatureRange)?.data {
            FieldData::Composite(CompositeValue::TemperatureRange { min_c, max_c }) => {
                Some((*min_c, *max_c))
            }
            _ => None,
        }
    }
}

// ============================================================================
// Correction log
// ============================================================================

/// Why a correction entry was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionReason {
    /// An `NxS` notation was split into cores and conductor size.
    CompositeSplit,
    /// A truncated value was repaired from a known-safe pattern.
    TruncationRepair,
    /// A garbled token matched exactly one known term under the OCR
    /// confusable alphabet.
    ConfusableRepair,
    /// An abbreviation was expanded to its full form.
    Expansion,
    /// A value was rescaled or rewritten into its canonical unit.
    UnitNormalization,
    /// Surface form was cleaned up without changing the value.
    Formatting,
    /// A dual-magnitude rating with no AC/DC marker was taken to be AC.
    AcImplied,
    /// The value was too ambiguous to repair and was degraded to
    /// unverifiable instead of guessed at.
    Degraded,
}

impl fmt::Display for CorrectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CorrectionReason::CompositeSplit => "composite split",
            CorrectionReason::TruncationRepair => "truncation repair",
            CorrectionReason::ConfusableRepair => "confusable repair",
            CorrectionReason::Expansion => "expansion",
            CorrectionReason::UnitNormalization => "unit normalization",
            CorrectionReason::Formatting => "formatting",
            CorrectionReason::AcImplied => "AC implied",
            CorrectionReason::Degraded => "degraded",
        };
        f.write_str(s)
    }
}

/// One audited change made by the correction stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionEntry {
    pub field: SpecField,
    pub before: String,
    pub after: String,
    pub reason: CorrectionReason,
}

impl CorrectionEntry {
    pub fn new(
        field: SpecField,
        before: impl Into<String>,
        after: impl Into<String>,
        reason: CorrectionReason,
    ) -> Self {
        CorrectionEntry {
            field,
            before: before.into(),
            after: after.into(),
            reason,
        }
    }
}

impl fmt::Display for CorrectionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: changed '{}' to '{}' ({})",
            self.field, self.before, self.after, self.reason
        )
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Identifier of an engineering rule. Rules always run in numeric order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    CableType = 1,
    Voltage = 2,
    CurrentVsSize = 3,
    InsulationMaterial = 4,
    ConductorCount = 5,
    SheathMaterial = 6,
    ArmorMaterial = 7,
    TemperatureRange = 8,
    InsulationResistance = 9,
    ConductorSize = 10,
}

impl RuleId {
    /// All rules in execution order.
    pub const ALL: [RuleId; 10] = [
        RuleId::CableType,
        RuleId::Voltage,
        RuleId::CurrentVsSize,
        RuleId::InsulationMaterial,
        RuleId::ConductorCount,
        RuleId::SheathMaterial,
        RuleId::ArmorMaterial,
        RuleId::TemperatureRange,
        RuleId::InsulationResistance,
        RuleId::ConductorSize,
    ];

    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// The field a violation of this rule is attributed to.
    pub fn field(&self) -> SpecField {
        match self {
            RuleId::CableType => SpecField::CableType,
            RuleId::Voltage => SpecField::Voltage,
            RuleId::CurrentVsSize => SpecField::Current,
            RuleId::InsulationMaterial => SpecField::Insulation,
            RuleId::ConductorCount => SpecField::Cores,
            RuleId::SheathMaterial => SpecField::Sheath,
            RuleId::ArmorMaterial => SpecField::Armor,
            RuleId::TemperatureRange => SpecField::TemperatureRange,
            RuleId::InsulationResistance => SpecField::InsulationResistance,
            RuleId::ConductorSize => SpecField::ConductorSize,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule {}", self.number())
    }
}

/// How bad a violation is.
///
/// `Warning` flags data quality problems (missing or unrecognized values)
/// that a reviewer should look at. `Error` flags a concrete engineering
/// impossibility and forces rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("WARNING"),
            Severity::Error => f.write_str("ERROR"),
        }
    }
}

/// Final verdict over a record: rejected when any rule raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Ready,
    Rejected,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ready => f.write_str("READY"),
            Verdict::Rejected => f.write_str("REJECTED"),
        }
    }
}

/// One finding raised by an engineering rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub rule: RuleId,
    pub field: SpecField,
    pub message: String,
    pub severity: Severity,
}

impl Violation {
    pub fn warning(rule: RuleId, message: impl Into<String>) -> Self {
        Violation {
            rule,
            field: rule.field(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(rule: RuleId, message: impl Into<String>) -> Self {
        Violation {
            rule,
            field: rule.field(),
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.severity, self.rule, self.field, self.message
        )
    }
}

/// Outcome of running all engineering rules over a corrected record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub verdict: Verdict,
    pub violations: Vec<Violation>,
    /// The record the rules ran over.
    pub record: SpecRecord,
}

impl ValidationResult {
    pub fn is_ready(&self) -> bool {
        self.verdict == Verdict::Ready
    }

    pub fn errors(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| v.severity == Severity::Warning)
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Voltage class of a validated cable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CableCategory {
    LowVoltage,
    MediumVoltage,
    HighVoltage,
    /// No verified voltage rating to categorize by.
    Uncategorized,
}

impl fmt::Display for CableCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CableCategory::LowVoltage => f.write_str("Low Voltage"),
            CableCategory::MediumVoltage => f.write_str("Medium Voltage"),
            CableCategory::HighVoltage => f.write_str("High Voltage"),
            CableCategory::Uncategorized => f.write_str("Uncategorized"),
        }
    }
}

/// Catalog keywords derived from a validated record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub category: CableCategory,
    /// Duplicate-free, in canonical field order.
    pub keywords: Vec<String>,
}

// ============================================================================
// Pipeline report
// ============================================================================

/// Everything the pipeline produced for one datasheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecReport {
    pub raw: SpecRecord,
    pub corrected: SpecRecord,
    pub issues_fixed: Vec<CorrectionEntry>,
    pub verdict: Verdict,
    pub violations: Vec<Violation>,
    /// Present only when the record validated as ready and classification
    /// was enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
}

impl SpecReport {
    pub fn is_ready(&self) -> bool {
        self.verdict == Verdict::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_is_stable() {
        assert_eq!(SpecField::ALL[0], SpecField::CableType);
        assert_eq!(SpecField::ALL[9], SpecField::InsulationResistance);
        assert_eq!(SpecField::ALL.len(), 10);
    }

    #[test]
    fn test_rule_numbers_are_one_through_ten() {
        let numbers: Vec<u8> = RuleId::ALL.iter().map(|r| r.number()).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<u8>>());
    }

    #[test]
    fn test_from_values_fills_missing_fields() {
        let mut values = IndexMap::new();
        values.insert(SpecField::Voltage, FieldValue::numeric("450 V", 450.0, Some("V"), 0.8));
        let record = SpecRecord::from_values(RecordStage::Raw, values);

        assert_eq!(record.fields.len(), 10);
        assert!(record.get(SpecField::Sheath).unwrap().is_unverifiable());
        assert_eq!(record.verified_count(), 1);
    }

    #[test]
    fn test_record_iterates_in_canonical_order() {
        let mut values = IndexMap::new();
        // Insert out of order on purpose.
        values.insert(SpecField::Armor, FieldValue::enumerated("SWA", "SWA", 0.8));
        values.insert(SpecField::CableType, FieldValue::enumerated("Copper", "Copper", 0.9));
        let record = SpecRecord::from_values(RecordStage::Raw, values);

        let order: Vec<SpecField> = record.fields.keys().copied().collect();
        assert_eq!(order, SpecField::ALL.to_vec());
    }

    #[test]
    fn test_max_voltage_over_dual_rating() {
        let mut values = IndexMap::new();
        values.insert(
            SpecField::Voltage,
            FieldValue::composite(
                "600/1000 V",
                CompositeValue::VoltageRating {
                    volts: vec![600.0, 1000.0],
                    system: CurrentSystem::Ac,
                },
                0.9,
            ),
        );
        let record = SpecRecord::from_values(RecordStage::Corrected, values);
        assert_eq!(record.max_voltage(), Some(1000.0));
    }

    #[test]
    fn test_field_value_json_shape() {
        let value = FieldValue::numeric("32A", 32.0, Some("A"), 0.8);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["raw"], "32A");
        assert_eq!(json["kind"], "numeric");
        assert_eq!(json["value"], 32.0);
        assert_eq!(json["unit"], "A");
    }

    #[test]
    fn test_field_value_roundtrip_through_json() {
        let value = FieldValue::composite(
            "4x16mm2",
            CompositeValue::CoreSize {
                multiplier: 4.0,
                size_mm2: 16.0,
            },
            0.85,
        );
        let json = serde_json::to_string(&value).unwrap();
        let back: FieldValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_unverifiable_serializes_without_value() {
        let value = FieldValue::unverifiable("W@t3r");
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["kind"], "unverifiable");
        assert!(json.get("value").is_none());
    }

    #[test]
    fn test_violation_display() {
        let violation = Violation::error(RuleId::Voltage, "mixed AC and DC markers");
        assert_eq!(
            violation.to_string(),
            "[ERROR] Rule 2 (Voltage): mixed AC and DC markers"
        );
    }

    #[test]
    fn test_correction_entry_display() {
        let entry = CorrectionEntry::new(
            SpecField::ConductorSize,
            "4x16mm2",
            "16 mm²",
            CorrectionReason::CompositeSplit,
        );
        assert_eq!(
            entry.to_string(),
            "Conductor Size: changed '4x16mm2' to '16 mm²' (composite split)"
        );
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Warning < Severity::Error);
    }
}
