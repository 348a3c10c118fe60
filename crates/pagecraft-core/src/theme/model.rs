//! Theme definition model
//!
//! Themes are plain data. Every bucket is optional at parse time so a theme
//! file with a gap still loads far enough to produce a precise
//! [`PagecraftError::ThemeTokenMissing`] from [`Theme::validate`].

use crate::error::{PagecraftError, Result};
use crate::theme::animations;
use crate::theme::tokens::{gradient_property_name, property_name, CssVar, TokenBucket};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Named scale of token values (`sm = "4px"`)
pub type TokenScale = BTreeMap<String, String>;

/// A visual theme: typography, spacing, radius, shadows and two palettes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Theme {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fonts: TokenScale,
    #[serde(default)]
    pub font_sizes: TokenScale,
    #[serde(default)]
    pub spacing: TokenScale,
    #[serde(default)]
    pub radius: TokenScale,
    /// `sm`..`xl` plus optional theme-specific extras such as `glow`
    #[serde(default)]
    pub shadows: TokenScale,
    #[serde(default)]
    pub colors: ColorVariants,
    #[serde(default)]
    pub gradients: TokenScale,
    /// Keyframe animations this theme uses, by library name
    #[serde(default)]
    pub animations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ColorVariants {
    #[serde(default)]
    pub light: Option<Palette>,
    #[serde(default)]
    pub dark: Option<Palette>,
}

/// Closed color record for one color mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Palette {
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub surface: Option<String>,
    #[serde(default)]
    pub surface_alt: Option<String>,
    #[serde(default)]
    pub text: Option<TextColors>,
    #[serde(default)]
    pub border: Option<String>,
    #[serde(default)]
    pub border_hover: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextColors {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub tertiary: Option<String>,
}

impl Palette {
    fn get(&self, key: &str) -> Option<&str> {
        let text = self.text.as_ref();
        match key {
            "background" => self.background.as_deref(),
            "surface" => self.surface.as_deref(),
            "surface_alt" => self.surface_alt.as_deref(),
            "text.primary" => text.and_then(|t| t.primary.as_deref()),
            "text.secondary" => text.and_then(|t| t.secondary.as_deref()),
            "text.tertiary" => text.and_then(|t| t.tertiary.as_deref()),
            "border" => self.border.as_deref(),
            "border_hover" => self.border_hover.as_deref(),
            _ => None,
        }
    }
}

/// Requested color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
    /// Light by default, dark under `prefers-color-scheme: dark`
    Auto,
}

impl ColorMode {
    /// Case-insensitive parse; anything unrecognized is `Light`
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => ColorMode::Dark,
            "auto" => ColorMode::Auto,
            _ => ColorMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
            ColorMode::Auto => "auto",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two palettes a theme carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorVariant {
    Light,
    Dark,
}

impl ColorVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorVariant::Light => "light",
            ColorVariant::Dark => "dark",
        }
    }
}

/// Public description of a theme for selection UIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeSummary {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl Theme {
    /// Parse a theme from TOML text
    pub fn from_toml_str(source: &str, origin: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| PagecraftError::ThemeInvalid {
            theme: origin.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn summary(&self) -> ThemeSummary {
        ThemeSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Non-color scale for a bucket
    pub fn scale(&self, bucket: TokenBucket) -> Option<&TokenScale> {
        match bucket {
            TokenBucket::Fonts => Some(&self.fonts),
            TokenBucket::FontSizes => Some(&self.font_sizes),
            TokenBucket::Spacing => Some(&self.spacing),
            TokenBucket::Radius => Some(&self.radius),
            TokenBucket::Shadows => Some(&self.shadows),
            TokenBucket::Colors => None,
        }
    }

    pub fn palette(&self, variant: ColorVariant) -> Option<&Palette> {
        match variant {
            ColorVariant::Light => self.colors.light.as_ref(),
            ColorVariant::Dark => self.colors.dark.as_ref(),
        }
    }

    /// Value of a token; color tokens are read from `variant`'s palette
    pub fn token(&self, var: CssVar, variant: ColorVariant) -> Option<&str> {
        match self.scale(var.bucket()) {
            Some(scale) => scale.get(var.key()).map(String::as_str),
            None => self.palette(variant).and_then(|p| p.get(var.key())),
        }
    }

    /// Like [`Theme::token`] but a missing value is a configuration error
    pub fn require(&self, var: CssVar, variant: ColorVariant) -> Result<&str> {
        self.token(var, variant)
            .ok_or_else(|| PagecraftError::ThemeTokenMissing {
                theme: self.id.clone(),
                token: if var.is_color() {
                    format!("colors.{}.{}", variant.as_str(), var.key())
                } else {
                    format!("{}.{}", var.bucket().as_str(), var.key())
                },
            })
    }

    /// Check that the full token set exists in both palettes, that every
    /// value is safe to place inside a declaration, and that declared
    /// animations exist
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(PagecraftError::ThemeInvalid {
                theme: self.name.clone(),
                reason: "theme id must not be empty".to_string(),
            });
        }
        if !is_slug(&self.id) {
            return Err(PagecraftError::ThemeInvalid {
                theme: self.id.clone(),
                reason: "theme id may only contain a-z, 0-9 and '-'".to_string(),
            });
        }

        for var in CssVar::ALL {
            for variant in [ColorVariant::Light, ColorVariant::Dark] {
                let value = self.require(var, variant)?;
                self.check_value(&var.name(), value)?;
                if !var.is_color() {
                    break;
                }
            }
        }

        let mut emitted: BTreeSet<String> = CssVar::ALL.iter().map(|v| v.name()).collect();
        let buckets = [
            TokenBucket::Fonts,
            TokenBucket::FontSizes,
            TokenBucket::Spacing,
            TokenBucket::Radius,
            TokenBucket::Shadows,
        ];
        for bucket in buckets {
            let Some(scale) = self.scale(bucket) else {
                continue;
            };
            for (key, value) in scale {
                self.check_key(bucket.as_str(), key)?;
                self.check_value(key, value)?;
                let required = CssVar::ALL
                    .iter()
                    .any(|v| v.bucket() == bucket && v.key() == key);
                if !required {
                    self.claim(&mut emitted, property_name(bucket, key), bucket.as_str(), key)?;
                }
            }
        }
        for (key, value) in &self.gradients {
            self.check_key("gradients", key)?;
            self.check_value(key, value)?;
            self.claim(&mut emitted, gradient_property_name(key), "gradients", key)?;
        }

        for name in &self.animations {
            if animations::keyframes(name).is_none() {
                return Err(PagecraftError::UnknownAnimation {
                    theme: self.id.clone(),
                    animation: name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Scale keys become part of a property name: `[a-z0-9_-]+`
    fn check_key(&self, bucket: &str, key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
        if valid {
            Ok(())
        } else {
            Err(PagecraftError::ThemeInvalid {
                theme: self.id.clone(),
                reason: format!("key '{}.{}' may only contain a-z, 0-9, '_' and '-'", bucket, key),
            })
        }
    }

    /// Record an extra property, rejecting one that another token already emits
    fn claim(&self, emitted: &mut BTreeSet<String>, name: String, bucket: &str, key: &str) -> Result<()> {
        if emitted.insert(name.clone()) {
            return Ok(());
        }
        Err(PagecraftError::ThemeInvalid {
            theme: self.id.clone(),
            reason: format!("key '{}.{}' emits {}, which another token already defines", bucket, key, name),
        })
    }

    fn check_value(&self, token: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(PagecraftError::ThemeInvalid {
                theme: self.id.clone(),
                reason: format!("token '{}' is empty", token),
            });
        }
        if value.contains([';', '{', '}', '<', '>']) {
            return Err(PagecraftError::ThemeInvalid {
                theme: self.id.clone(),
                reason: format!("token '{}' contains a forbidden character", token),
            });
        }
        Ok(())
    }

    /// Font stacks declared by this theme, heading first
    pub fn font_stacks(&self) -> Vec<&str> {
        [CssVar::FontHeading, CssVar::FontBody, CssVar::FontMono]
            .iter()
            .filter_map(|var| self.token(*var, ColorVariant::Light))
            .collect()
    }
}

/// Lowercase ASCII letters, digits and dashes
pub(crate) fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
