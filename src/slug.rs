use crate::content::HeadingContent;
use crate::fragment;
use itertools::Itertools;

/// Derives a URL-fragment-safe identifier from the text-bearing segments of
/// the content. Pure: the same segments always produce the same slug, no
/// matter the call site, which is what lets the rendered `id` and the
/// navigation target agree without caching.
///
/// Fragment-override tokens are dropped before slugification, so
/// `"Getting Started [#gs]"` derives `getting-started`. Content with no text
/// (or no slug characters at all) derives the empty string.
pub fn derive(content: &HeadingContent) -> String {
    let text = content.text_segments().map(fragment::strip).join(" ");

    slugify(&text)
}

// Lowercase ASCII alphanumerics and underscores survive; every other run of
// characters becomes a single hyphen, with leading/trailing hyphens trimmed.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
