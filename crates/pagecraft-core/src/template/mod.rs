//! Markup module - text substitution engine for template markup
//!
//! Template structure functions keep their HTML and CSS in `.tmp.html` /
//! `.tmp.css` sources and render them through this engine with the resolved
//! customization data as context.
//!
//! ## Syntax
//!
//! - Placeholders: `{{key}}` or `{{ nested.key }}`, HTML-escaped on output
//! - Lists: `{{each items |item|}} ... {{/each}}`
//! - Optional sections: `{{if key}} ... {{/if}}` (skipped when empty/missing)
//! - Escapes: `\{{literal}}`
//!
//! A placeholder that does not resolve is an error, never an empty string:
//! this is what makes a misspelled `{{var.*}}` token fail loudly.

pub mod engine;
pub mod error;

pub use engine::{escape_html, render, Escape, TemplateContext, TemplateEngine};
pub use error::TemplateError;
