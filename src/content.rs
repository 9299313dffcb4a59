use either::Either;
use serde::Deserialize;
use std::iter;

// ------------------ HEADING CONTENT ------------------
// The shape the markdown collaborator hands us: either a bare string or an
// ordered list of inline nodes. Order is significant and preserved everywhere.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HeadingContent {
    Text(String),
    Nodes(Vec<InlineNode>),
}

/// A single inline child of a heading.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InlineNode {
    /// A plain text segment, escaped when rendered.
    Text(String),
    /// Markup already rendered by the markdown collaborator. Opaque to us:
    /// passed through verbatim, never inspected for text.
    Html { html: String },
}

impl HeadingContent {
    /// Iterates the text-bearing segments in order, skipping opaque nodes.
    pub fn text_segments(&self) -> impl Iterator<Item = &str> {
        match self {
            HeadingContent::Text(text) => Either::Left(iter::once(text.as_str())),
            HeadingContent::Nodes(nodes) => {
                Either::Right(nodes.iter().filter_map(|node| match node {
                    InlineNode::Text(content) => Some(content.as_str()),
                    InlineNode::Html { .. } => None,
                }))
            }
        }
    }
}

impl From<&str> for HeadingContent {
    fn from(text: &str) -> Self {
        HeadingContent::Text(text.to_string())
    }
}

impl From<String> for HeadingContent {
    fn from(text: String) -> Self {
        HeadingContent::Text(text)
    }
}

impl From<Vec<InlineNode>> for HeadingContent {
    fn from(nodes: Vec<InlineNode>) -> Self {
        HeadingContent::Nodes(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::{HeadingContent, InlineNode};
    use pretty_assertions::assert_eq;

    #[test]
    fn deserialize_plain_text() {
        let content: HeadingContent = serde_json::from_str(r#""Getting Started""#).unwrap();

        assert_eq!(content, HeadingContent::Text("Getting Started".to_string()));
    }

    #[test]
    fn deserialize_node_sequence() {
        let content: HeadingContent = serde_json::from_str(
            r#"["Reading ", { "html": "<code>Cargo.toml</code>" }, " files"]"#,
        )
        .unwrap();

        assert_eq!(
            content,
            HeadingContent::Nodes(vec![
                InlineNode::Text("Reading ".to_string()),
                InlineNode::Html {
                    html: "<code>Cargo.toml</code>".to_string(),
                },
                InlineNode::Text(" files".to_string()),
            ])
        );
    }

    #[test]
    fn text_segments_skip_opaque_nodes() {
        let content = HeadingContent::Nodes(vec![
            InlineNode::Text("Hello ".to_string()),
            InlineNode::Html {
                html: "<em>there</em>".to_string(),
            },
            InlineNode::Text(" world".to_string()),
        ]);

        assert_eq!(
            content.text_segments().collect::<Vec<_>>(),
            vec!["Hello ", " world"]
        );
    }
}
