//! Renders markdown-derived headlines as anchored HTML heading elements.
//!
//! Each headline gets an `id` derived from its text, a composed style-class
//! list, and an activation contract that rewrites the current page address's
//! fragment to that same id. Inline fragment-override markers (`[#custom-id]`)
//! are stripped from the displayed text.

pub mod content;
pub mod fragment;
pub mod navigation;
pub mod options;
pub mod render;
pub mod slug;

pub use content::{HeadingContent, InlineNode};
pub use navigation::{Navigate, PageAddress};
pub use options::HeadingLevel;
pub use render::{Attributes, Headline};

/// Builds [`Headline`]s against the current page address. Stateless per
/// render: every headline derives its slug and display content fresh from its
/// own input.
pub struct HeadlineRenderer {
    pub address: PageAddress,
}

impl HeadlineRenderer {
    pub fn new(address: PageAddress) -> Self {
        HeadlineRenderer { address }
    }

    pub fn render_heading(
        &self,
        level: HeadingLevel,
        content: impl Into<HeadingContent>,
        attributes: Attributes,
    ) -> Headline {
        Headline {
            level,
            content: content.into(),
            attributes,
            address: self.address.clone(),
        }
    }
}
