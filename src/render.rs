use crate::content::{HeadingContent, InlineNode};
use crate::fragment;
use crate::navigation::{Navigate, PageAddress};
use crate::options::HeadingLevel;
use crate::slug;
use anyhow::{Context, Result};
use maud::{Escaper, Render};
use std::fmt::Write;

// Shared by every level; the level preset and any caller classes are appended.
const BASE_CLASSES: &str = "group cursor-pointer hover:underline";

// Trailing pilcrow, invisible until the heading is hovered.
const MARKER: &str =
    r#"<span class="text-slate-300 inline-block ml-2 opacity-0 group-hover:opacity-100">¶</span>"#;

/// Caller-supplied additions to a headline's attribute set. Classes are
/// appended to the built-in list, never replacing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    pub class: Option<String>,
    pub extra: Vec<(String, String)>,
}

/// A headline ready to render: an `h1`-`h4` element whose `id` is the slug
/// derived from its content, with fragment-override tokens stripped from the
/// displayed text.
#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub(crate) level: HeadingLevel,
    pub(crate) content: HeadingContent,
    pub(crate) attributes: Attributes,
    pub(crate) address: PageAddress,
}

impl Headline {
    /// The identifier this headline renders with. Derived fresh from the
    /// content, so it always agrees with what [`Headline::activate`] computes.
    pub fn slug(&self) -> String {
        slug::derive(&self.content)
    }

    /// The click side effect: re-derives the slug from the current content
    /// (never a snapshot taken at render time) and asks the routing
    /// collaborator to move to the page address with that fragment. Safe to
    /// repeat; every invocation is independent.
    pub fn activate(&self, navigator: &mut dyn Navigate) -> Result<()> {
        let slug = slug::derive(&self.content);

        navigator
            .navigate(&self.address.with_fragment(&slug))
            .with_context(|| format!("Failed to navigate to anchor #{}", slug))
    }

    fn class_list(&self) -> String {
        let mut classes = String::from(BASE_CLASSES);
        if let Some(extra) = &self.attributes.class {
            classes.push(' ');
            classes.push_str(extra);
        }
        classes.push(' ');
        classes.push_str(self.level.preset_classes());

        classes
    }
}

impl Render for Headline {
    fn render_to(&self, buffer: &mut String) {
        let tag = self.level.tag();

        buffer.push('<');
        buffer.push_str(tag);
        push_attribute(buffer, "id", &self.slug());
        push_attribute(buffer, "class", &self.class_list());
        for (name, value) in &self.attributes.extra {
            push_attribute(buffer, name, value);
        }
        buffer.push('>');

        match fragment::strip_tokens(&self.content) {
            HeadingContent::Text(text) => push_escaped(buffer, &text),
            HeadingContent::Nodes(nodes) => {
                for node in nodes {
                    match node {
                        InlineNode::Text(content) => push_escaped(buffer, &content),
                        // Already escaped by the markdown collaborator
                        InlineNode::Html { html } => buffer.push_str(&html),
                    }
                }
            }
        }

        buffer.push_str(MARKER);
        buffer.push_str("</");
        buffer.push_str(tag);
        buffer.push('>');
    }
}

fn push_escaped(buffer: &mut String, text: &str) {
    Escaper::new(buffer).write_str(text).expect("unreachable");
}

fn push_attribute(buffer: &mut String, name: &str, value: &str) {
    buffer.push(' ');
    buffer.push_str(name);
    buffer.push_str("=\"");
    Escaper::new(buffer).write_str(value).expect("unreachable");
    buffer.push('"');
}
