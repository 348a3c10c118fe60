//! Builtin conformance checks

mod coverage;
mod determinism;
mod schema;
mod themes;

pub use coverage::{undeclared_tokens, CoverageCheck};
pub use determinism::DeterminismCheck;
pub use schema::SchemaCheck;
pub use themes::ThemeCheck;

use crate::theme::ColorMode;

pub(crate) const MODES: [ColorMode; 3] = [ColorMode::Light, ColorMode::Dark, ColorMode::Auto];
