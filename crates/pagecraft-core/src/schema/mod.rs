//! Field schema model
//!
//! A template declares the fields a user may customize. The schema drives
//! default data, the editing UI's grouping into sections, lenient value
//! resolution at render time, and the typed edit operations.

pub mod defaults;
pub mod model;
pub mod path;
pub mod section;
pub mod validate;

pub use defaults::{compute_defaults, default_for, seed_group_item};
pub use model::{CustomizationData, Field, FieldType, Schema};
pub use path::{apply_edit, apply_op, EditOp, FieldPath};
pub use section::{resolve_section_for, sections, Section};
pub use validate::validate_schema;
