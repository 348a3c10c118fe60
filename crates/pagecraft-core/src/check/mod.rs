//! Conformance checks over the registered templates and themes
//!
//! `pagecraft check` runs these to catch template or theme definitions that
//! would fail at render time: invalid schemas, incomplete themes, templates
//! referencing tokens no theme declares, non-deterministic output.

pub mod checks;
pub mod engine;
pub mod report;

pub use engine::{CheckContext, CheckEngine, CheckResult, ConformanceCheck};
pub use report::{Check, CheckReport, CheckStatus};
