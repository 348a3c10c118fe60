//! Markup token scanner
//!
//! Walks a template once, left to right, and yields each `{{...}}` site it
//! finds. A site ends at the first `}}` after its opening braces, so CSS rules
//! such as `a{b{c}}` never produce tokens.

/// Keywords that open a `{{keyword args}} ... {{/keyword}}` section
const BLOCK_KEYWORDS: [&str; 2] = ["each", "if"];

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    /// `{{site.title}}`
    Placeholder { key: String },
    /// `{{each items |item|}}`, `{{if key}}`
    BlockStart { keyword: String, args: String },
    /// `{{/each}}`, `{{/if}}`
    BlockEnd { keyword: String },
}

impl TokenKind {
    fn classify(inner: &str) -> Self {
        let inner = inner.trim();

        if let Some(keyword) = inner.strip_prefix('/') {
            return TokenKind::BlockEnd {
                keyword: keyword.trim().to_string(),
            };
        }

        let opened = BLOCK_KEYWORDS.iter().find_map(|keyword| {
            let args = inner.strip_prefix(*keyword)?.strip_prefix(' ')?;
            Some((*keyword, args))
        });

        match opened {
            Some((keyword, args)) => TokenKind::BlockStart {
                keyword: keyword.to_string(),
                args: args.trim().to_string(),
            },
            None => TokenKind::Placeholder {
                key: inner.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Byte offset of the opening `{{`
    pub start: usize,
    /// Byte length from `{{` through `}}`
    pub length: usize,
    /// Backslashes immediately before `{{`
    pub backslash_count: usize,
    /// 1-based line of the opening `{{`
    pub line: usize,
}

impl Token {
    /// An odd run of backslashes turns the site into literal text
    pub fn is_escaped(&self) -> bool {
        self.backslash_count % 2 == 1
    }
}

pub(crate) struct TokenStream<'a> {
    text: &'a str,
    cursor: usize,
    line: usize,
}

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            cursor: 0,
            line: 1,
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let rest = &self.text[self.cursor..];
        let open = rest.find(OPEN)?;
        let inner_from = open + OPEN.len();
        let Some(close) = rest[inner_from..].find(CLOSE) else {
            self.cursor = self.text.len();
            return None;
        };
        let end = inner_from + close + CLOSE.len();

        let before = &rest[..open];
        let backslash_count = before.len() - before.trim_end_matches('\\').len();
        let line = self.line + before.matches('\n').count();

        let token = Token {
            kind: TokenKind::classify(&rest[inner_from..inner_from + close]),
            start: self.cursor + open,
            length: end - open,
            backslash_count,
            line,
        };

        self.line = line + rest[open..end].matches('\n').count();
        self.cursor += end;
        Some(token)
    }
}
