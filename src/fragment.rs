use crate::content::{HeadingContent, InlineNode};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// An inline fragment-override marker like `[#custom-id]`. A display artifact
// only: it must never reach rendered output. One or more word/hyphen
// characters, so a bare `[#]` or an unclosed `[#oops` is not a token.
static FRAGMENT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[#[\w-]+\]").expect("unreachable"));

/// Removes every fragment token from a single text segment. Surrounding
/// whitespace is preserved as-is.
pub fn strip(text: &str) -> Cow<'_, str> {
    FRAGMENT_TOKEN.replace_all(text, "")
}

/// Removes fragment tokens from every text segment of the content. Opaque
/// nodes pass through unchanged, in their original positions. The input is
/// never mutated.
pub fn strip_tokens(content: &HeadingContent) -> HeadingContent {
    match content {
        HeadingContent::Text(text) => HeadingContent::Text(strip(text).into_owned()),
        HeadingContent::Nodes(nodes) => HeadingContent::Nodes(
            nodes
                .iter()
                .map(|node| match node {
                    InlineNode::Text(content) => InlineNode::Text(strip(content).into_owned()),
                    opaque => opaque.clone(),
                })
                .collect(),
        ),
    }
}
