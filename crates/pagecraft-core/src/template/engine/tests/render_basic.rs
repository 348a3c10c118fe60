//! Basic rendering tests for the markup engine

use super::helpers::{portfolio_context, simple_context};
use super::*;

#[test]
fn test_render_simple_placeholder() {
    let result = render("Title: {{title}}", &simple_context()).unwrap();
    assert_eq!(result, "Title: My Title");
}

#[test]
fn test_render_placeholder_with_spaces() {
    let result = render("Title: {{  title  }}", &simple_context()).unwrap();
    assert_eq!(result, "Title: My Title");
}

#[test]
fn test_render_scalar_kinds() {
    let context = simple_context();
    assert_eq!(render("{{count}}", &context).unwrap(), "42");
    assert_eq!(render("{{price}}", &context).unwrap(), "9.99");
    assert_eq!(render("{{enabled}}", &context).unwrap(), "true");
}

#[test]
fn test_render_null_is_empty() {
    let result = render("[{{missing}}]", &simple_context()).unwrap();
    assert_eq!(result, "[]");
}

#[test]
fn test_render_css_variable_table() {
    let template = "h1 { color: {{var.color_text_primary}}; }";
    let result = render(template, &portfolio_context()).unwrap();
    assert_eq!(result, "h1 { color: var(--color-text-primary); }");
}

#[test]
fn test_single_braces_pass_through() {
    let template = ".card{padding:0}@media (min-width:40rem){.card{padding:1rem}}";
    let result = render(template, &simple_context()).unwrap();
    assert_eq!(result, template);
}

#[test]
fn test_no_placeholders() {
    let result = render("plain text", &simple_context()).unwrap();
    assert_eq!(result, "plain text");
}
