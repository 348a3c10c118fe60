//! Rendering properties across the builtin catalog

use pagecraft_core::check::checks::undeclared_tokens;
use pagecraft_core::schema::CustomizationData;
use pagecraft_core::{ColorMode, PagecraftError, RenderedDocument, Renderer};
use serde_json::{json, Value};

const MODES: [ColorMode; 3] = [ColorMode::Light, ColorMode::Dark, ColorMode::Auto];

fn renderer() -> Renderer {
    Renderer::builtin().expect("builtin catalog is valid")
}

fn data(value: Value) -> CustomizationData {
    value.as_object().cloned().unwrap()
}

#[test]
fn test_every_combination_declares_every_token_it_uses() {
    let renderer = renderer();
    for template in renderer.templates().iter() {
        let id = &template.meta().id;
        let defaults = renderer.defaults(id).unwrap();
        for theme in renderer.themes().iter() {
            for mode in MODES {
                let document = renderer
                    .render_document(id, &defaults, Some(&theme.id), mode)
                    .unwrap_or_else(|e| panic!("{} / {} / {}: {}", id, theme.id, mode, e));
                for (name, html) in document.files() {
                    let missing = undeclared_tokens(html).unwrap();
                    assert!(
                        missing.is_empty(),
                        "{} / {} / {} / {}: {:?}",
                        id,
                        theme.id,
                        mode,
                        name,
                        missing
                    );
                    assert!(!html.contains("undefined"));
                }
            }
        }
    }
}

#[test]
fn test_render_is_deterministic() {
    let renderer = renderer();
    let content = data(json!({ "name": "Grace Hopper", "skills": ["COBOL", "Compilers"] }));
    let a = renderer
        .render("portfolio", &content, Some("terminal"), ColorMode::Auto)
        .unwrap();
    let b = renderer
        .render("portfolio", &content, Some("terminal"), ColorMode::Auto)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_empty_data_renders_defaults() {
    let renderer = renderer();
    for template in renderer.templates().iter() {
        let id = &template.meta().id;
        let empty = renderer
            .render(id, &CustomizationData::new(), None, ColorMode::Light)
            .unwrap();
        let defaults = renderer
            .render(id, &renderer.defaults(id).unwrap(), None, ColorMode::Light)
            .unwrap();
        assert_eq!(empty, defaults, "{}", id);
    }

    let html = renderer
        .render("business-card", &CustomizationData::new(), None, ColorMode::Light)
        .unwrap();
    assert!(html.contains("Alex Morgan"));
}

#[test]
fn test_user_text_is_escaped() {
    let renderer = renderer();
    let payload = "<script>alert(1)</script>";
    for (template, key) in [
        ("business-card", "name"),
        ("portfolio", "bio"),
        ("restaurant-menu", "restaurant_name"),
        ("saas-landing", "headline"),
    ] {
        let content = data(json!({ key: payload }));
        let out = renderer
            .render(template, &content, None, ColorMode::Light)
            .unwrap();
        assert!(!out.contains(payload), "{} leaked raw markup", template);
        assert!(out.contains("&lt;script&gt;alert(1)&lt;/script&gt;"), "{}", template);
    }
}

#[test]
fn test_script_urls_never_reach_attributes() {
    let renderer = renderer();
    let cases = [
        ("business-card", json!({
            "website": "javascript:alert(1)",
            "avatar": "javascript:alert(2)",
            "socials": [{ "platform": "GitHub", "url": "JavaScript:alert(3)" }]
        })),
        ("portfolio", json!({
            "github_url": " javascript:alert(1)",
            "projects": [{ "title": "x", "link": "javascript:alert(2)", "image": "data:text/html,x" }]
        })),
        ("restaurant-menu", json!({ "instagram_url": "javascript:alert(1)", "logo": "javascript:x" })),
        ("saas-landing", json!({ "cta_url": "java\tscript:alert(1)", "hero_image": "javascript:x" })),
    ];
    for (template, content) in cases {
        let out = renderer
            .render(template, &data(content), None, ColorMode::Light)
            .unwrap();
        let lowered = out.to_ascii_lowercase().replace('\t', "");
        assert!(!lowered.contains("javascript:"), "{} kept a script URL", template);
        assert!(!lowered.contains("data:text/html"), "{} kept a data document", template);
    }

    let safe = data(json!({ "website": "https://ada.dev" }));
    let out = renderer
        .render("business-card", &safe, None, ColorMode::Light)
        .unwrap();
    assert!(out.contains("href=\"https://ada.dev\""));
}

#[test]
fn test_auto_mode_guards_dark_values() {
    let renderer = renderer();
    let defaults = renderer.defaults("business-card").unwrap();
    let auto = renderer
        .render("business-card", &defaults, Some("midnight"), ColorMode::Auto)
        .unwrap();
    let dark = renderer
        .render("business-card", &defaults, Some("midnight"), ColorMode::Dark)
        .unwrap();
    let light = renderer
        .render("business-card", &defaults, Some("midnight"), ColorMode::Light)
        .unwrap();

    let (_, guarded) = auto
        .split_once("@media (prefers-color-scheme: dark)")
        .expect("auto mode has a dark block");
    for name in ["--color-background", "--color-surface", "--color-text-primary", "--color-border"] {
        assert_eq!(
            declaration(guarded, name),
            declaration(&dark, name),
            "{} differs between auto (dark block) and dark",
            name
        );
        assert_eq!(declaration(&auto, name), declaration(&light, name));
    }
}

/// Value of the first `name: value;` declaration in `css`
fn declaration<'a>(css: &'a str, name: &str) -> &'a str {
    let start = css
        .find(&format!("{}: ", name))
        .unwrap_or_else(|| panic!("{} not declared", name))
        + name.len()
        + 2;
    let end = css[start..].find(';').unwrap() + start;
    &css[start..end]
}

#[test]
fn test_unknown_theme_falls_back_unknown_template_errors() {
    let renderer = renderer();
    let content = CustomizationData::new();

    let fallback = renderer
        .render("portfolio", &content, Some("does-not-exist"), ColorMode::Light)
        .unwrap();
    let default = renderer
        .render("portfolio", &content, None, ColorMode::Light)
        .unwrap();
    assert_eq!(fallback, default);
    assert!(default.contains("theme-midnight"));

    assert!(matches!(
        renderer.render("nope", &content, None, ColorMode::Light),
        Err(PagecraftError::UnknownTemplate(id)) if id == "nope"
    ));
}

#[test]
fn test_multi_page_template_renders_pages() {
    let renderer = renderer();
    let document = renderer
        .render_document("saas-landing", &CustomizationData::new(), None, ColorMode::Light)
        .unwrap();
    let RenderedDocument::Pages(pages) = &document else {
        panic!("saas-landing renders multiple pages");
    };
    let names: Vec<&str> = pages.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["index.html", "pricing.html"]);
    assert!(pages[1].1.contains("<title>Pricing | Beacon</title>"));

    let stream = document.to_stream();
    assert!(stream.starts_with("<!-- FILE: index.html -->\n"));
    assert_eq!(RenderedDocument::from_stream(&stream), document);
}
