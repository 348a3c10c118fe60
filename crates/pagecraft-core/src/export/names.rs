//! Bundle file names

use std::collections::HashSet;

/// Reduce a file name to `[A-Za-z0-9._-]`, keeping its extension
///
/// Path separators and other characters become `-`, runs of `-` collapse and
/// leading dots are dropped so no entry is hidden or escapes `images/`.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let mut out = String::with_capacity(base.len());
    for c in base.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
            c
        } else {
            '-'
        };
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }

    let trimmed = out.trim_start_matches(['.', '-']).trim_end_matches('-');
    if trimmed.is_empty() || trimmed.chars().all(|c| c == '.') {
        "asset".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Hands out unique names, suffixing `-2`, `-3`... before the extension
#[derive(Debug, Default)]
pub struct UniqueNames {
    taken: HashSet<String>,
}

impl UniqueNames {
    pub fn claim(&mut self, name: &str) -> String {
        if self.taken.insert(name.to_ascii_lowercase()) {
            return name.to_string();
        }

        let (stem, ext) = match name.rfind('.') {
            Some(dot) if dot > 0 => (&name[..dot], &name[dot..]),
            _ => (name, ""),
        };
        let mut n = 2;
        loop {
            let candidate = format!("{}-{}{}", stem, n, ext);
            if self.taken.insert(candidate.to_ascii_lowercase()) {
                return candidate;
            }
            n += 1;
        }
    }
}
