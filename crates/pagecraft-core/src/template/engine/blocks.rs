//! Block matching utilities (finding closing tags for `each`/`if`)

use super::tokenize::{TokenKind, TokenStream};

/// Find the matching closing tag for a block opened with `keyword`
///
/// Returns (position, length) of the closing tag token. Nested blocks of the
/// same keyword are skipped and escaped tokens (`\{{/each}}`) never close.
pub(crate) fn find_block_end(text: &str, keyword: &str) -> Option<(usize, usize)> {
    let mut depth = 0;

    for token in TokenStream::new(text) {
        if token.is_escaped() {
            continue;
        }

        match &token.kind {
            TokenKind::BlockStart { keyword: k, .. } if k == keyword => depth += 1,
            TokenKind::BlockEnd { keyword: k } if k == keyword => {
                if depth == 0 {
                    return Some((token.start, token.length));
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    None
}
