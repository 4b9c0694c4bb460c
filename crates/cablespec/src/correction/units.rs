//! Canonical units and surface forms.
//!
//! Each field normalizes to exactly one unit: volts, amperes, mm², °C and
//! MΩ·km. The formatters here produce the surface strings written back into
//! corrected records, which is what makes correction idempotent: a canonical
//! surface fed back through the pipeline parses to the same value and
//! triggers no further rewrites.

use once_cell::sync::Lazy;
use regex::Regex;

/// `k`/`K` immediately before the voltage unit, or the Arabic kilo word.
static KILO_MARK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[kK]\s*[vV]|كيلو").expect("kilo marker regex pattern is valid and should compile")
});

pub(super) fn mentions_kilovolts(raw: &str) -> bool {
    KILO_MARK.is_match(raw)
}

/// Render a magnitude without float artifacts (`16`, not `16.0`).
pub(super) fn format_number(value: f64) -> String {
    format!("{value}")
}

pub(super) fn canonical_voltage(volts: &[f64]) -> String {
    let joined = volts
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join("/");
    format!("{joined} V")
}

pub(super) fn canonical_current(amps: f64) -> String {
    format!("{} A", format_number(amps))
}

pub(super) fn canonical_size(size_mm2: f64) -> String {
    format!("{} mm²", format_number(size_mm2))
}

pub(super) fn canonical_cores(count: f64) -> String {
    format_number(count)
}

pub(super) fn canonical_temperature(min_c: f64, max_c: f64) -> String {
    if min_c == max_c {
        format!("{} °C", format_number(min_c))
    } else {
        format!("{} °C to {} °C", format_number(min_c), format_number(max_c))
    }
}

pub(super) fn canonical_resistance(mohm_km: f64) -> String {
    format!("{} MΩ·km", format_number(mohm_km))
}

/// Rescale a resistance reading into MΩ·km.
///
/// Returns the converted value and whether the magnitude actually changed
/// scale (as opposed to only needing its unit respelled).
pub(super) fn resistance_to_mohm_km(value: f64, unit: Option<&str>) -> (f64, bool) {
    match unit {
        Some("GΩ·km") => (value * 1000.0, true),
        Some("Ω·km") => (value / 1_000_000.0, true),
        // Already mega, or an unknown unit we must not rescale blindly.
        _ => (value, false),
    }
}
