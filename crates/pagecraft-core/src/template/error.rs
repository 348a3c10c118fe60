//! Markup engine errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A placeholder or `each` list did not resolve in the render context
    #[error("Undefined key '{key}' at line {line}")]
    UndefinedKey { key: String, line: usize },

    #[error("Malformed syntax at line {line}: {message}")]
    MalformedSyntax { message: String, line: usize },

    /// Lists are only reachable through `{{each}}`
    #[error("Array '{key}' used outside of {{{{each}}}}; iterate it with {{{{each {key} |item|}}}} ... {{{{/each}}}}")]
    ArrayInNonEachContext { key: String },

    #[error("Object '{key}' cannot be written directly; reference a field such as {key}.name")]
    ObjectInPlaceholder { key: String },
}
