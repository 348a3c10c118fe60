//! Theme CSS compiler: (theme, color mode) → custom properties + keyframes

use crate::error::Result;
use crate::theme::animations;
use crate::theme::model::{ColorMode, ColorVariant, Theme};
use crate::theme::tokens::{gradient_property_name, property_name, CssVar, TokenBucket};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fmt::Write;

const NON_COLOR_BUCKETS: [TokenBucket; 5] = [
    TokenBucket::Fonts,
    TokenBucket::FontSizes,
    TokenBucket::Spacing,
    TokenBucket::Radius,
    TokenBucket::Shadows,
];

/// Compile a theme into a CSS block for `mode`
///
/// Output layout:
///
/// ```text
/// :root { color-scheme; scale tokens; extras; gradients; palette }
/// @media (prefers-color-scheme: dark) { :root { dark palette } }   // auto only
/// @keyframes ...                                                   // declared only
/// ```
///
/// The theme is validated first, so a missing token is an error rather than
/// an empty declaration. Identical inputs give byte-identical output.
pub fn compile(theme: &Theme, mode: ColorMode) -> Result<String> {
    theme.validate()?;

    let root_variant = match mode {
        ColorMode::Dark => ColorVariant::Dark,
        ColorMode::Light | ColorMode::Auto => ColorVariant::Light,
    };
    let color_scheme = match mode {
        ColorMode::Light => "light",
        ColorMode::Dark => "dark",
        ColorMode::Auto => "light dark",
    };

    let mut css = String::new();
    css.push_str(":root {\n");
    let _ = writeln!(css, "  color-scheme: {};", color_scheme);

    for var in CssVar::ALL.iter().filter(|v| !v.is_color()) {
        declare(&mut css, 2, &var.name(), theme.require(*var, root_variant)?);
    }

    for (name, value) in extras(theme) {
        declare(&mut css, 2, &name, value);
    }

    write_palette(&mut css, 2, theme, root_variant)?;
    css.push_str("}\n");

    if mode == ColorMode::Auto {
        css.push_str("@media (prefers-color-scheme: dark) {\n  :root {\n");
        css.push_str("    color-scheme: dark;\n");
        write_palette(&mut css, 4, theme, ColorVariant::Dark)?;
        css.push_str("  }\n}\n");
    }

    let mut seen = BTreeSet::new();
    for name in &theme.animations {
        if !seen.insert(name.as_str()) {
            continue;
        }
        if let Some(keyframes) = animations::keyframes(name) {
            css.push_str(keyframes);
            css.push('\n');
        }
    }

    Ok(css)
}

/// Theme-specific properties beyond the shared token set: extra scale
/// entries (e.g. `--shadow-glow`) followed by `--gradient-*`
pub fn extras(theme: &Theme) -> Vec<(String, &str)> {
    let mut out = Vec::new();
    for bucket in NON_COLOR_BUCKETS {
        let required: BTreeSet<&str> = CssVar::ALL
            .iter()
            .filter(|v| v.bucket() == bucket)
            .map(|v| v.key())
            .collect();
        if let Some(scale) = theme.scale(bucket) {
            for (key, value) in scale.iter().filter(|(k, _)| !required.contains(k.as_str())) {
                out.push((property_name(bucket, key), value.as_str()));
            }
        }
    }
    for (key, value) in &theme.gradients {
        out.push((gradient_property_name(key), value.as_str()));
    }
    out
}

/// `extra` table for theme override sources: ident → `var(--...)` for every
/// property in [`extras`]
pub fn extra_table(theme: &Theme) -> Value {
    let map: Map<String, Value> = extras(theme)
        .into_iter()
        .map(|(name, _)| {
            let ident = name.trim_start_matches("--").replace('-', "_");
            (ident, Value::String(format!("var({})", name)))
        })
        .collect();
    Value::Object(map)
}

fn write_palette(css: &mut String, indent: usize, theme: &Theme, variant: ColorVariant) -> Result<()> {
    for var in CssVar::ALL.iter().filter(|v| v.is_color()) {
        declare(css, indent, &var.name(), theme.require(*var, variant)?);
    }
    Ok(())
}

fn declare(css: &mut String, indent: usize, name: &str, value: &str) {
    let _ = writeln!(css, "{:indent$}{}: {};", "", name, value.trim(), indent = indent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PagecraftError;
    use crate::theme::fixtures::complete_theme_toml;

    fn theme() -> Theme {
        Theme::from_toml_str(&complete_theme_toml("test"), "test").unwrap()
    }

    #[test]
    fn test_light_mode_emits_every_token() {
        let css = compile(&theme(), ColorMode::Light).unwrap();
        for var in CssVar::ALL {
            assert!(css.contains(&format!("{}: ", var.name())), "missing {}", var.name());
        }
        assert!(css.contains("--color-background: #fff;"));
        assert!(!css.contains("prefers-color-scheme"));
        assert!(!css.contains("undefined"));
    }

    #[test]
    fn test_dark_mode_uses_dark_palette() {
        let css = compile(&theme(), ColorMode::Dark).unwrap();
        assert!(css.contains("--color-background: #000;"));
        assert!(css.contains("color-scheme: dark;"));
        assert!(!css.contains("#fff;"));
    }

    #[test]
    fn test_auto_mode_guards_dark_palette() {
        let css = compile(&theme(), ColorMode::Auto).unwrap();
        let (root, guarded) = css.split_once("@media (prefers-color-scheme: dark)").unwrap();
        assert!(root.contains("--color-background: #fff;"));
        assert!(guarded.contains("--color-background: #000;"));
        assert!(guarded.contains("--color-text-primary: #eee;"));
    }

    #[test]
    fn test_only_declared_keyframes_emitted() {
        let css = compile(&theme(), ColorMode::Light).unwrap();
        assert!(css.contains("@keyframes fade-in"));
        assert!(!css.contains("@keyframes glitch"));
    }

    #[test]
    fn test_duplicate_animation_emitted_once() {
        let mut theme = theme();
        theme.animations = vec!["glitch".to_string(), "glitch".to_string()];
        let css = compile(&theme, ColorMode::Light).unwrap();
        assert_eq!(css.matches("@keyframes glitch").count(), 1);
    }

    #[test]
    fn test_extra_tokens_and_gradients() {
        let mut theme = theme();
        theme.shadows.insert("glow".to_string(), "0 0 12px #0ff".to_string());
        theme
            .gradients
            .insert("hero".to_string(), "linear-gradient(#000, #111)".to_string());
        let css = compile(&theme, ColorMode::Light).unwrap();
        assert!(css.contains("--shadow-glow: 0 0 12px #0ff;"));
        assert!(css.contains("--gradient-hero: linear-gradient(#000, #111);"));

        let table = extra_table(&theme);
        assert_eq!(table["shadow_glow"], Value::String("var(--shadow-glow)".into()));
        assert_eq!(table["gradient_hero"], Value::String("var(--gradient-hero)".into()));
    }

    #[test]
    fn test_compile_is_deterministic() {
        let theme = theme();
        let a = compile(&theme, ColorMode::Auto).unwrap();
        let b = compile(&theme, ColorMode::Auto).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_palette_fails_even_in_light_mode() {
        let mut theme = theme();
        theme.colors.dark = None;
        match compile(&theme, ColorMode::Light) {
            Err(PagecraftError::ThemeTokenMissing { token, .. }) => {
                assert_eq!(token, "colors.dark.background")
            }
            other => panic!("Expected ThemeTokenMissing, got {:?}", other),
        }
    }
}
