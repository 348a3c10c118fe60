//! Schema command - a template's fields grouped into editor sections

use crate::output::print_json;
use anyhow::Result;
use colored::Colorize;
use pagecraft_core::Renderer;
use pagecraft_core::schema::{sections, Field};
use serde_json::json;

pub fn run(template_id: String, json: bool) -> Result<()> {
    let renderer = Renderer::builtin()?;
    let template = renderer.templates().get(&template_id)?;
    let grouped = sections(template.schema());

    if json {
        let output: Vec<_> = grouped
            .iter()
            .map(|(section, fields)| {
                json!({
                    "section": section.as_str(),
                    "label": section.label(),
                    "fields": fields,
                })
            })
            .collect();
        return print_json(&json!({
            "template": template.meta(),
            "sections": output,
        }));
    }

    let meta = template.meta();
    println!("{} {}", meta.display_name.bold(), format!("({})", meta.id).dimmed());
    for (section, fields) in &grouped {
        println!("\n{}", section.label().bold());
        for field in fields {
            print_field(field, 1);
        }
    }
    Ok(())
}

fn print_field(field: &Field, depth: usize) {
    let indent = "  ".repeat(depth);
    let required = if field.required { " *" } else { "" };
    println!(
        "{}{:<16} {:<14} {}{}",
        indent,
        field.key.cyan(),
        field.kind.as_str(),
        field.label,
        required.red()
    );
    if !field.options.is_empty() {
        println!("{}  {} {}", indent, "options:".dimmed(), field.options.join(", "));
    }
    for nested in &field.fields {
        print_field(nested, depth + 2);
    }
}
