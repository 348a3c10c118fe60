use crate::error::{PagecraftError, Result};
use crate::export::ReadmeFormat;
use crate::theme::ColorMode;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// pagecraft.toml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<AssetEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub template: String,
    /// Falls back to the template's default theme when absent or unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Unrecognized values read as `light`
    #[serde(default, deserialize_with = "lenient_color_mode")]
    pub color_mode: ColorMode,
    #[serde(default = "default_data_path")]
    pub data: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_path")]
    pub output: PathBuf,
    #[serde(default)]
    pub readme: ReadmeFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: default_output_path(),
            readme: ReadmeFormat::default(),
        }
    }
}

/// An uploaded image, keyed for the export packager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub key: String,
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("content.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("dist/site.zip")
}

fn lenient_color_mode<'de, D>(deserializer: D) -> std::result::Result<ColorMode, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(ColorMode::parse_lenient(&value))
}

impl Config {
    /// Config for a new site
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            site: SiteConfig {
                name: name.into(),
                template: template.into(),
                theme: None,
                color_mode: ColorMode::default(),
                data: default_data_path(),
            },
            export: ExportConfig::default(),
            assets: Vec::new(),
        }
    }

    /// Read pagecraft.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content, path)
    }

    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| PagecraftError::ConfigParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write pagecraft.toml
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| PagecraftError::ConfigParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.site.name.trim().is_empty() {
            return Err(PagecraftError::ConfigInvalidValue {
                field: "site.name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.site.template.trim().is_empty() {
            return Err(PagecraftError::ConfigInvalidValue {
                field: "site.template".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        let mut keys = std::collections::BTreeSet::new();
        for asset in &self.assets {
            if !keys.insert(asset.key.as_str()) {
                return Err(PagecraftError::ConfigInvalidValue {
                    field: "assets".to_string(),
                    reason: format!("duplicate asset key '{}'", asset.key),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config> {
        Config::from_toml_str(toml, Path::new("pagecraft.toml"))
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = parse(
            r#"
[site]
name = "my-site"
template = "portfolio"
"#,
        )
        .unwrap();
        assert_eq!(config.site.template, "portfolio");
        assert_eq!(config.site.theme, None);
        assert_eq!(config.site.color_mode, ColorMode::Light);
        assert_eq!(config.site.data, PathBuf::from("content.json"));
        assert_eq!(config.export.output, PathBuf::from("dist/site.zip"));
        assert_eq!(config.export.readme, ReadmeFormat::Markdown);
        assert!(config.assets.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse(
            r#"
[site]
name = "my-site"
template = "portfolio"
theme = "midnight"
color_mode = "Auto"
data = "site.json"

[export]
output = "out/bundle.zip"
readme = "text"

[[assets]]
key = "avatar"
path = "images/me.png"
"#,
        )
        .unwrap();
        assert_eq!(config.site.theme.as_deref(), Some("midnight"));
        assert_eq!(config.site.color_mode, ColorMode::Auto);
        assert_eq!(config.export.readme, ReadmeFormat::Text);
        assert_eq!(
            config.assets,
            vec![AssetEntry {
                key: "avatar".into(),
                path: "images/me.png".into()
            }]
        );
    }

    #[test]
    fn test_unknown_color_mode_reads_as_light() {
        let config = parse(
            r#"
[site]
name = "s"
template = "portfolio"
color_mode = "sepia"
"#,
        )
        .unwrap();
        assert_eq!(config.site.color_mode, ColorMode::Light);
    }

    #[test]
    fn test_missing_site_is_parse_error() {
        assert!(matches!(
            parse("[export]\nreadme = \"text\"\n"),
            Err(PagecraftError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_duplicate_asset_keys_rejected() {
        let result = parse(
            r#"
[site]
name = "s"
template = "portfolio"

[[assets]]
key = "a"
path = "x.png"

[[assets]]
key = "a"
path = "y.png"
"#,
        );
        assert!(matches!(
            result,
            Err(PagecraftError::ConfigInvalidValue { .. })
        ));
    }

    #[test]
    fn test_round_trip_through_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("pagecraft.toml");
        let mut config = Config::new("demo", "business-card");
        config.site.color_mode = ColorMode::Dark;
        config.to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.site.name, "demo");
        assert_eq!(loaded.site.color_mode, ColorMode::Dark);
    }
}
