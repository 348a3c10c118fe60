//! Unit tests for TokenStream

use super::tokenize::{TokenKind, TokenStream};

#[test]
fn test_tokenstream_single_placeholder() {
    let mut stream = TokenStream::new("Hello {{name}} world");

    let token = stream.next().unwrap();
    assert_eq!(token.start, 6);
    assert_eq!(token.length, 8);
    assert!(!token.is_escaped());
    assert_eq!(
        token.kind,
        TokenKind::Placeholder {
            key: "name".to_string()
        }
    );
    assert!(stream.next().is_none());
}

#[test]
fn test_tokenstream_block_kinds() {
    let kinds: Vec<TokenKind> = TokenStream::new("{{each xs |x|}}{{if x}}{{x}}{{/if}}{{/each}}")
        .map(|t| t.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::BlockStart {
                keyword: "each".to_string(),
                args: "xs |x|".to_string()
            },
            TokenKind::BlockStart {
                keyword: "if".to_string(),
                args: "x".to_string()
            },
            TokenKind::Placeholder {
                key: "x".to_string()
            },
            TokenKind::BlockEnd {
                keyword: "if".to_string()
            },
            TokenKind::BlockEnd {
                keyword: "each".to_string()
            },
        ]
    );
}

#[test]
fn test_keyword_prefix_is_not_a_block() {
    let token = TokenStream::new("{{iffy}}").next().unwrap();
    assert_eq!(
        token.kind,
        TokenKind::Placeholder {
            key: "iffy".to_string()
        }
    );
}

#[test]
fn test_tokenstream_escaped_tokens() {
    let mut stream = TokenStream::new(r"\{{escaped}} {{real}}");
    assert!(stream.next().unwrap().is_escaped());
    assert!(!stream.next().unwrap().is_escaped());
    assert!(stream.next().is_none());
}

#[test]
fn test_tokenstream_tracks_lines() {
    let tokens: Vec<usize> = TokenStream::new("{{a}}\n\n{{b}}").map(|t| t.line).collect();
    assert_eq!(tokens, vec![1, 3]);
}

#[test]
fn test_css_braces_yield_no_tokens() {
    let css = "@keyframes pulse{0%{opacity:1}50%{opacity:.5}}";
    assert_eq!(TokenStream::new(css).count(), 0);
}
