//! Design token names shared by the compiler and every template
//!
//! [`CssVar`] is the only place a CSS custom property name is spelled. The
//! compiler emits exactly these names, and templates reach them through the
//! `var` table of their render context, so a template cannot reference a
//! token the compiler does not produce.

use serde_json::{Map, Value};

/// Token bucket a variable belongs to
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum TokenBucket {
    Fonts,
    FontSizes,
    Spacing,
    Radius,
    Shadows,
    Colors,
}

impl TokenBucket {
    /// Field name of the bucket in a theme definition
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenBucket::Fonts => "fonts",
            TokenBucket::FontSizes => "font_sizes",
            TokenBucket::Spacing => "spacing",
            TokenBucket::Radius => "radius",
            TokenBucket::Shadows => "shadows",
            TokenBucket::Colors => "colors",
        }
    }

    /// CSS custom property prefix for the bucket
    pub(crate) fn prefix(&self) -> &'static str {
        match self {
            TokenBucket::Fonts => "font",
            TokenBucket::FontSizes => "font-size",
            TokenBucket::Spacing => "space",
            TokenBucket::Radius => "radius",
            TokenBucket::Shadows => "shadow",
            TokenBucket::Colors => "color",
        }
    }
}

/// Every CSS custom property a template may reference
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum CssVar {
    // Fonts
    FontHeading,
    FontBody,
    FontMono,

    // Type scale
    FontSizeHero,
    FontSizeH1,
    FontSizeH2,
    FontSizeH3,
    FontSizeBody,
    FontSizeSmall,

    // Spacing scale
    SpaceXs,
    SpaceSm,
    SpaceMd,
    SpaceLg,
    SpaceXl,
    SpaceXxl,

    // Corner radius scale
    RadiusSm,
    RadiusMd,
    RadiusLg,
    RadiusFull,

    // Shadow scale
    ShadowSm,
    ShadowMd,
    ShadowLg,
    ShadowXl,

    // Color palette (per color mode)
    ColorBackground,
    ColorSurface,
    ColorSurfaceAlt,
    ColorTextPrimary,
    ColorTextSecondary,
    ColorTextTertiary,
    ColorBorder,
    ColorBorderHover,
}

impl CssVar {
    /// All variables, in emission order
    pub const ALL: [CssVar; 31] = [
        CssVar::FontHeading,
        CssVar::FontBody,
        CssVar::FontMono,
        CssVar::FontSizeHero,
        CssVar::FontSizeH1,
        CssVar::FontSizeH2,
        CssVar::FontSizeH3,
        CssVar::FontSizeBody,
        CssVar::FontSizeSmall,
        CssVar::SpaceXs,
        CssVar::SpaceSm,
        CssVar::SpaceMd,
        CssVar::SpaceLg,
        CssVar::SpaceXl,
        CssVar::SpaceXxl,
        CssVar::RadiusSm,
        CssVar::RadiusMd,
        CssVar::RadiusLg,
        CssVar::RadiusFull,
        CssVar::ShadowSm,
        CssVar::ShadowMd,
        CssVar::ShadowLg,
        CssVar::ShadowXl,
        CssVar::ColorBackground,
        CssVar::ColorSurface,
        CssVar::ColorSurfaceAlt,
        CssVar::ColorTextPrimary,
        CssVar::ColorTextSecondary,
        CssVar::ColorTextTertiary,
        CssVar::ColorBorder,
        CssVar::ColorBorderHover,
    ];

    pub fn bucket(&self) -> TokenBucket {
        use CssVar::*;
        match self {
            FontHeading | FontBody | FontMono => TokenBucket::Fonts,
            FontSizeHero | FontSizeH1 | FontSizeH2 | FontSizeH3 | FontSizeBody | FontSizeSmall => {
                TokenBucket::FontSizes
            }
            SpaceXs | SpaceSm | SpaceMd | SpaceLg | SpaceXl | SpaceXxl => TokenBucket::Spacing,
            RadiusSm | RadiusMd | RadiusLg | RadiusFull => TokenBucket::Radius,
            ShadowSm | ShadowMd | ShadowLg | ShadowXl => TokenBucket::Shadows,
            ColorBackground | ColorSurface | ColorSurfaceAlt | ColorTextPrimary
            | ColorTextSecondary | ColorTextTertiary | ColorBorder | ColorBorderHover => {
                TokenBucket::Colors
            }
        }
    }

    /// Key of the token inside its bucket (`text.primary` for colors)
    pub fn key(&self) -> &'static str {
        use CssVar::*;
        match self {
            FontHeading => "heading",
            FontBody => "body",
            FontMono => "mono",
            FontSizeHero => "hero",
            FontSizeH1 => "h1",
            FontSizeH2 => "h2",
            FontSizeH3 => "h3",
            FontSizeBody => "body",
            FontSizeSmall => "small",
            SpaceXs => "xs",
            SpaceSm => "sm",
            SpaceMd => "md",
            SpaceLg => "lg",
            SpaceXl => "xl",
            SpaceXxl => "xxl",
            RadiusSm => "sm",
            RadiusMd => "md",
            RadiusLg => "lg",
            RadiusFull => "full",
            ShadowSm => "sm",
            ShadowMd => "md",
            ShadowLg => "lg",
            ShadowXl => "xl",
            ColorBackground => "background",
            ColorSurface => "surface",
            ColorSurfaceAlt => "surface_alt",
            ColorTextPrimary => "text.primary",
            ColorTextSecondary => "text.secondary",
            ColorTextTertiary => "text.tertiary",
            ColorBorder => "border",
            ColorBorderHover => "border_hover",
        }
    }

    /// Custom property name, e.g. `--color-text-primary`
    pub fn name(&self) -> String {
        property_name(self.bucket(), self.key())
    }

    /// `var(--...)` reference for use in CSS values
    pub fn var(&self) -> String {
        format!("var({})", self.name())
    }

    /// Identifier used in markup sources: `{{var.color_text_primary}}`
    pub fn ident(&self) -> String {
        self.name()
            .trim_start_matches("--")
            .replace('-', "_")
    }

    /// Whether the value differs between light and dark palettes
    pub fn is_color(&self) -> bool {
        self.bucket() == TokenBucket::Colors
    }
}

/// Build a custom property name from a bucket and a token key
pub(crate) fn property_name(bucket: TokenBucket, key: &str) -> String {
    let key = key.replace(['.', '_'], "-");
    format!("--{}-{}", bucket.prefix(), key)
}

/// Custom property name of a theme gradient, e.g. `--gradient-hero`
pub(crate) fn gradient_property_name(key: &str) -> String {
    format!("--gradient-{}", key.replace(['.', '_'], "-"))
}

/// The `var` table exposed to markup sources
pub fn var_table() -> Value {
    let map: Map<String, Value> = CssVar::ALL
        .iter()
        .map(|v| (v.ident(), Value::String(v.var())))
        .collect();
    Value::Object(map)
}
