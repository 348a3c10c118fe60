use std::path::PathBuf;
use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum PagecraftError {
    // Template errors
    #[error("TEMPLATE_UNKNOWN: template '{0}' is not registered")]
    UnknownTemplate(String),

    #[error("TEMPLATE_DUPLICATE: template '{0}' is already registered")]
    DuplicateTemplate(String),

    #[error("TEMPLATE_MARKUP_FAILED: template '{template}' ({source_name}): {error}")]
    Markup {
        template: String,
        source_name: String,
        error: TemplateError,
    },

    // Theme errors
    #[error("THEME_TOKEN_MISSING: theme '{theme}' does not define required token '{token}'")]
    ThemeTokenMissing { theme: String, token: String },

    #[error("THEME_UNKNOWN_ANIMATION: theme '{theme}' declares unknown animation '{animation}'")]
    UnknownAnimation { theme: String, animation: String },

    #[error("THEME_INVALID: theme '{theme}': {reason}")]
    ThemeInvalid { theme: String, reason: String },

    // Schema errors
    #[error("SCHEMA_INVALID: template '{template}', field '{field}': {reason}")]
    SchemaInvalid {
        template: String,
        field: String,
        reason: String,
    },

    #[error(
        "SCHEMA_NESTED_GROUP: template '{template}', group '{field}' contains nested group '{nested}'"
    )]
    NestedGroup {
        template: String,
        field: String,
        nested: String,
    },

    // Customization data errors
    #[error("EDIT_PATH_INVALID: '{path}': {reason}")]
    InvalidEditPath { path: String, reason: String },

    #[error("DATA_INVALID: customization data must be a JSON object: {0}")]
    DataInvalid(String),

    // Project / config errors
    #[error("PROJECT_NOT_FOUND: pagecraft.toml not found in current or parent directories")]
    ProjectNotFound,

    #[error("PROJECT_EXISTS: {0} already exists")]
    ProjectExists(PathBuf),

    #[error("ASSET_UNREADABLE: asset '{key}' ({path}): {reason}")]
    AssetUnreadable {
        key: String,
        path: PathBuf,
        reason: String,
    },

    #[error("CONFIG_PARSE_ERROR: {path}: {reason}")]
    ConfigParseError { path: PathBuf, reason: String },

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Export errors
    #[error("EXPORT_FAILED: {0}")]
    ExportFailed(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for PagecraftError {
    fn from(err: serde_json::Error) -> Self {
        PagecraftError::Generic(format!("JSON error: {}", err))
    }
}

impl From<zip::result::ZipError> for PagecraftError {
    fn from(err: zip::result::ZipError) -> Self {
        PagecraftError::ExportFailed(format!("zip: {}", err))
    }
}

impl PagecraftError {
    /// True for errors caused by registrations or theme/schema definitions
    /// rather than by the caller's data or environment
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            PagecraftError::UnknownTemplate(_)
                | PagecraftError::DuplicateTemplate(_)
                | PagecraftError::Markup { .. }
                | PagecraftError::ThemeTokenMissing { .. }
                | PagecraftError::UnknownAnimation { .. }
                | PagecraftError::ThemeInvalid { .. }
                | PagecraftError::SchemaInvalid { .. }
                | PagecraftError::NestedGroup { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PagecraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_prefix_messages() {
        let err = PagecraftError::ThemeTokenMissing {
            theme: "neon".to_string(),
            token: "--color-border".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "THEME_TOKEN_MISSING: theme 'neon' does not define required token '--color-border'"
        );
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_data_errors_are_not_configuration_errors() {
        let err = PagecraftError::InvalidEditPath {
            path: "a[".to_string(),
            reason: "unclosed index".to_string(),
        };
        assert!(!err.is_configuration_error());
        assert!(err.to_string().starts_with("EDIT_PATH_INVALID"));
    }
}
