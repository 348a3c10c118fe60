//! pagecraft core: themes, field schemas, site templates, rendering and
//! export packaging

// Core modules
pub mod check;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod project;
pub mod render;
pub mod schema;
pub mod site;
pub mod template;
pub mod theme;

// Re-export commonly used types
pub use error::{PagecraftError, Result};
pub use render::{RenderedDocument, Renderer};
pub use theme::ColorMode;
