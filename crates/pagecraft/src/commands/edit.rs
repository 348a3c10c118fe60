//! Edit commands - change customization data one field at a time

use crate::context::Context;
use anyhow::{Result, bail};
use colored::Colorize;
use pagecraft_core::schema::{apply_op, seed_group_item, EditOp, Field, FieldPath, FieldType};
use pagecraft_core::schema::CustomizationData;
use serde_json::Value;

/// `pagecraft set <path> <value>`
pub fn run_set(path: String, value: String) -> Result<()> {
    let ctx = Context::new()?;
    let path: FieldPath = path.parse()?;
    if declared_field(&ctx, path.key())?.is_none() {
        eprintln!(
            "{} '{}' is not a field of this template and will be ignored when rendering",
            "⚠".yellow(),
            path.key()
        );
    }

    let value = parse_value(&value);
    let data = ctx.project.load_data()?;
    let data = apply_op(&data, path.clone().into_op(value.clone()))?;
    ctx.project.save_data(&data)?;

    println!("{} {} = {}", "✓".green().bold(), path, value);
    Ok(())
}

/// `pagecraft add <group>`
pub fn run_add(key: String) -> Result<()> {
    let ctx = Context::new()?;
    let field = group_field(&ctx, &key)?;
    let default_theme = default_theme(&ctx)?;

    let data = ctx.project.load_data()?;
    let count = list_len(&data, &key);
    if field.max.is_some_and(|max| count >= max) {
        bail!("'{}' already has the maximum of {} items", key, count);
    }

    let item = seed_group_item(&field, &default_theme);
    let data = apply_op(&data, EditOp::AppendGroupItem { key: key.clone(), item })?;
    ctx.project.save_data(&data)?;

    println!("{} Added {}[{}]", "✓".green().bold(), key, count);
    Ok(())
}

/// `pagecraft remove <group> <index>`
pub fn run_remove(key: String, index: usize) -> Result<()> {
    let ctx = Context::new()?;
    group_field(&ctx, &key)?;

    let data = ctx.project.load_data()?;
    let data = apply_op(&data, EditOp::RemoveGroupItem { key: key.clone(), index })?;
    ctx.project.save_data(&data)?;

    println!("{} Removed {}[{}]", "✓".green().bold(), key, index);
    Ok(())
}

/// JSON when the text parses as JSON, otherwise the text itself
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn declared_field(ctx: &Context, key: &str) -> Result<Option<Field>> {
    let template = ctx.renderer.templates().get(&ctx.project.config.site.template)?;
    Ok(template.schema().field(key).cloned())
}

fn group_field(ctx: &Context, key: &str) -> Result<Field> {
    match declared_field(ctx, key)? {
        Some(field) if field.kind == FieldType::Group => Ok(field),
        Some(field) => bail!("'{}' is a {} field, not a group", key, field.kind),
        None => bail!("'{}' is not a field of this template", key),
    }
}

fn default_theme(ctx: &Context) -> Result<String> {
    let template = ctx.renderer.templates().get(&ctx.project.config.site.template)?;
    Ok(template.meta().default_theme_id.clone())
}

fn list_len(data: &CustomizationData, key: &str) -> usize {
    data.get(key)
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}
