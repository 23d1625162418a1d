//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait that enables easy
//! and flexible pipeline creation; [AlignConll] is the realignment pipeline
//! run by the binary.
mod align_conll;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use align_conll::AlignConll;
pub use pipeline::Pipeline;
