//! Themes: token model, registry and CSS compiler

pub mod animations;
pub mod compile;
pub mod model;
pub mod registry;
pub mod tokens;

#[cfg(test)]
pub(crate) mod fixtures;

pub use compile::{compile, extra_table};
pub use model::{ColorMode, ColorVariant, Palette, TextColors, Theme, ThemeSummary, TokenScale};
pub use registry::{ThemeRegistry, DEFAULT_THEME_ID};
pub use tokens::{var_table, CssVar, TokenBucket};
