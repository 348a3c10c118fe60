//! Markup engine implementation

mod blocks;
mod helpers;
mod tokenize;

use crate::template::error::TemplateError;
use serde_json::Value;

use blocks::find_block_end;
use helpers::{create_loop_context, is_truthy, resolve_key, stringify_value};
use tokenize::{Token, TokenKind, TokenStream};

pub use helpers::escape_html;

/// How placeholder values are written into the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// HTML-escape every interpolated value (markup and CSS sources)
    Html,
    /// Write values verbatim (plain-text outputs such as the export README)
    None,
}

/// Context holding JSON data for rendering
#[derive(Debug, Clone)]
pub struct TemplateContext {
    data: Value,
}

impl TemplateContext {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &Value {
        &self.data
    }
}

/// Text substitution engine: `{{key}}`, `{{each list |item|}}`, `{{if key}}`
#[derive(Debug, Clone, Copy)]
pub struct TemplateEngine {
    escape: Escape,
}

impl TemplateEngine {
    /// Engine that HTML-escapes every interpolated value
    pub fn new() -> Self {
        Self {
            escape: Escape::Html,
        }
    }

    /// Engine that writes values verbatim
    pub fn plain() -> Self {
        Self {
            escape: Escape::None,
        }
    }

    /// Render a template with the given context
    pub fn render(&self, template: &str, context: &TemplateContext) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(template.len());
        let mut cursor = 0;
        let mut line = 1;

        loop {
            let rest = &template[cursor..];
            let Some(token) = TokenStream::new(rest).next() else {
                if let Some(open) = rest.find("{{") {
                    return Err(TemplateError::MalformedSyntax {
                        message: "Unclosed {{ with no matching }}".to_string(),
                        line: line + count_newlines(&rest[..open]),
                    });
                }
                out.push_str(rest);
                return Ok(out);
            };

            // `\\{{x}}` keeps one backslash and still renders `x`
            out.push_str(&rest[..token.start - token.backslash_count]);
            out.extend(std::iter::repeat('\\').take(token.backslash_count / 2));

            let token_line = line + token.line - 1;
            let consumed = if token.is_escaped() {
                out.push_str(&rest[token.start..token.start + token.length]);
                token.start + token.length
            } else {
                self.render_token(rest, &token, token_line, context, &mut out)?
            };

            line += count_newlines(&rest[..consumed]);
            cursor += consumed;
        }
    }

    /// Render one live token; returns the offset in `rest` where text resumes
    fn render_token(
        &self,
        rest: &str,
        token: &Token,
        line: usize,
        context: &TemplateContext,
        out: &mut String,
    ) -> Result<usize, TemplateError> {
        let after = token.start + token.length;

        match &token.kind {
            TokenKind::Placeholder { key } => {
                let value = resolve_key(context.data(), key).ok_or_else(|| {
                    TemplateError::UndefinedKey {
                        key: key.clone(),
                        line,
                    }
                })?;
                out.push_str(&stringify_value(value, key, self.escape)?);
                Ok(after)
            }
            TokenKind::BlockStart { keyword, args } => {
                let (body_len, end_len) = find_block_end(&rest[after..], keyword).ok_or_else(|| {
                    TemplateError::MalformedSyntax {
                        message: format!("Unclosed {} block for '{}'", keyword, args),
                        line,
                    }
                })?;
                let body = &rest[after..after + body_len];

                if keyword == "each" {
                    let (list, binding) = split_each_args(args, line)?;
                    for item in resolve_list(context.data(), list, line)? {
                        let scope = create_loop_context(context.data(), binding, item.clone());
                        out.push_str(&self.render(body, &scope)?);
                    }
                } else if is_truthy(resolve_key(context.data(), args)) {
                    out.push_str(&self.render(body, context)?);
                }

                Ok(after + body_len + end_len)
            }
            TokenKind::BlockEnd { keyword } => Err(TemplateError::MalformedSyntax {
                message: format!("Unexpected {{{{/{}}}}} without matching opener", keyword),
                line,
            }),
        }
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// `items |item|` → (`items`, `item`)
fn split_each_args(args: &str, line: usize) -> Result<(&str, &str), TemplateError> {
    let malformed = || TemplateError::MalformedSyntax {
        message: format!("Invalid each syntax: expected 'each <list> |<name>|', got 'each {}'", args),
        line,
    };

    let (list, binding) = args.split_once('|').ok_or_else(malformed)?;
    let (binding, _) = binding.split_once('|').ok_or_else(malformed)?;
    let (list, binding) = (list.trim(), binding.trim());

    if list.is_empty() || binding.is_empty() {
        return Err(malformed());
    }
    Ok((list, binding))
}

fn resolve_list<'a>(data: &'a Value, key: &str, line: usize) -> Result<&'a Vec<Value>, TemplateError> {
    match resolve_key(data, key) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(TemplateError::MalformedSyntax {
            message: format!("Key '{}' is not an array", key),
            line,
        }),
        None => Err(TemplateError::UndefinedKey {
            key: key.to_string(),
            line,
        }),
    }
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

/// Render a template with HTML escaping
pub fn render(template: &str, context: &TemplateContext) -> Result<String, TemplateError> {
    TemplateEngine::new().render(template, context)
}

#[cfg(test)]
mod tests;
