//! Pipeline orchestration and configuration.
//!
//! This module wires the three processing stages together and owns the
//! configuration surface:
//! - **Entry point**: the [`pipeline::process`] function running extraction,
//!   correction, validation, and classification in order
//! - **Configuration**: loading [`config::PipelineConfig`] from TOML or JSON
//!   files, or discovering one in the project hierarchy

pub mod config;
pub mod pipeline;

pub use config::{CorrectionConfig, PipelineConfig};
pub use pipeline::process;
