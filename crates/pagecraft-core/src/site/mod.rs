//! Site templates
//!
//! A template is a registered value: metadata, a field schema and a
//! structure function that turns resolved customization data into body
//! markup. Builtin templates keep their markup in embedded `.tmp.html` and
//! `.tmp.css` sources rendered by the markup engine.

pub mod builtin;
pub mod registry;
pub mod template;

mod markup;

pub use registry::{TemplateRegistry, TemplateSummary};
pub use template::{Body, ComposeContext, Composition, Page, SiteTemplate, TemplateDefinition, TemplateMeta};

pub(crate) use markup::render_markup;
