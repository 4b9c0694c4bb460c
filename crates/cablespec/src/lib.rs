//! Cablespec - Cable Datasheet Specification Pipeline
//!
//! Cablespec turns noisy OCR text from electrical-cable datasheets into
//! validated, classified specification records. The pipeline has three
//! stages: pattern-driven extraction, deterministic correction with a full
//! audit log, and engineering validation against a fixed rule table.
//!
//! # Quick Start
//!
//! ```rust
//! use cablespec::{PipelineConfig, Verdict, process};
//!
//! # fn main() -> cablespec::Result<()> {
//! let config = PipelineConfig::default();
//! let report = process("600/1000V, 4x16mm2, XLPE insulation", &config)?;
//! assert_eq!(report.verdict, Verdict::Ready);
//! for entry in &report.issues_fixed {
//!     println!("{entry}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Extraction** (`extraction`): applies the pattern library to raw OCR
//!   text; first match per field wins, misses become unverifiable fields
//! - **Correction** (`correction`): composite decomposition, vocabulary and
//!   truncation repair, unit normalization; ambiguous values degrade to
//!   unverifiable instead of being guessed at
//! - **Validation** (`validation`): ten ordered engineering rules producing
//!   a READY/REJECTED verdict plus a structured violation list
//! - **Keywords** (`keywords`): voltage categorization and indexing terms
//!   for records that validated READY
//!
//! Each stage is independently callable and pure; the only shared state is
//! the immutable built-in pattern library, so documents can be processed
//! concurrently without locking.

#![deny(unsafe_code)]

pub mod core;
pub mod correction;
pub mod error;
pub mod extraction;
pub mod keywords;
pub mod patterns;
pub mod types;
pub mod validation;

pub use error::{CableSpecError, Result};
pub use types::*;

pub use core::config::{CorrectionConfig, PipelineConfig};
pub use core::pipeline::process;
pub use correction::correct;
pub use extraction::{extract, extract_with_library, preprocess};
pub use keywords::classify;
pub use patterns::{FieldPattern, PatternLibrary, PatternSpec};
pub use validation::validate;
