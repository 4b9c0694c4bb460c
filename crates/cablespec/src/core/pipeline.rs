//! Pipeline orchestration.
//!
//! Runs the stages in their fixed order: extraction, correction, validation,
//! and classification for records that validate ready. Each stage is a pure
//! function of its input, so the pipeline is just composition plus report
//! assembly.

use crate::core::config::PipelineConfig;
use crate::correction::correct;
use crate::error::Result;
use crate::extraction::extract;
use crate::keywords::classify;
use crate::types::SpecReport;
use crate::validation::validate;

/// Process one document's OCR text end to end.
///
/// Data-quality problems never error: a hopeless input comes back as a
/// report full of unverifiable fields and warnings. The only error path is
/// a configured extra pattern that fails to compile.
pub fn process(text: &str, config: &PipelineConfig) -> Result<SpecReport> {
    let raw = extract(text, config)?;
    let (corrected, issues_fixed) = correct(&raw, config);
    let result = validate(&corrected);

    let classification = if result.is_ready() && config.classify {
        Some(classify(&corrected))
    } else {
        None
    };

    tracing::debug!(
        verdict = %result.verdict,
        fixes = issues_fixed.len(),
        violations = result.violations.len(),
        "pipeline complete"
    );

    Ok(SpecReport {
        raw,
        corrected,
        issues_fixed,
        verdict: result.verdict,
        violations: result.violations,
        classification,
    })
}
