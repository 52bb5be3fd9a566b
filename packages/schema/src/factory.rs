//! Node factory: type-specific defaults for every node variant.
//!
//! Composite types (`card`, `columns2`, `hero`) recursively create and nest
//! their child nodes. All builders are deterministic apart from the fresh
//! ids they mint.

use crate::document::{now_ms, PageDocument, PageSettings};
use crate::id::generate_id;
use crate::node::{
    HeadingTag, LinkTarget, Node, NodeContent, NodeMeta, NodeStyles, NodeType, StyleMap,
};

pub(crate) fn style_map(entries: &[(&str, &str)]) -> StyleMap {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn bare(node_type: NodeType) -> Node {
    Node {
        id: generate_id(),
        node_type,
        children: None,
        content: None,
        styles: NodeStyles {
            default: style_map(&[("padding", "8px")]),
            hover: None,
        },
        meta: None,
    }
}

/// Build a node of `node_type` with a fresh id and type-specific defaults.
///
/// Unrecognized (forward-compatible) types fall back to a minimal
/// structural node so the editor stays usable.
pub fn create_node(node_type: NodeType) -> Node {
    let mut node = bare(node_type);
    match node_type {
        NodeType::Header => {
            node.children = Some(Vec::new());
            node.styles.default = style_map(&[
                ("padding", "24px"),
                ("backgroundColor", "#0f172a"),
                ("color", "#ffffff"),
                ("display", "grid"),
                ("gap", "12px"),
            ]);
            node.meta = Some(NodeMeta::named("Header"));
        }
        NodeType::Footer => {
            node.children = Some(Vec::new());
            node.styles.default = style_map(&[
                ("padding", "24px"),
                ("backgroundColor", "#0f172a"),
                ("color", "#cbd5f5"),
                ("display", "grid"),
                ("gap", "8px"),
            ]);
            node.meta = Some(NodeMeta::named("Footer"));
        }
        NodeType::Section => {
            node.children = Some(Vec::new());
            node.styles.default = style_map(&[
                ("display", "block"),
                ("padding", "32px"),
                ("margin", "16px 0"),
                ("backgroundColor", "#ffffff"),
                ("borderRadius", "12px"),
            ]);
            node.meta = Some(NodeMeta::named("Section"));
        }
        NodeType::Container => {
            node.children = Some(Vec::new());
            node.styles.default = style_map(&[("display", "block"), ("padding", "16px")]);
            node.meta = Some(NodeMeta::named("Container"));
        }
        NodeType::Heading => {
            node.content = Some(NodeContent {
                text: Some("Heading".to_string()),
                tag: Some(HeadingTag::H2),
                ..Default::default()
            });
            node.styles.default = style_map(&[
                ("margin", "0 0 12px 0"),
                ("fontSize", "32px"),
                ("fontWeight", "700"),
            ]);
            node.meta = Some(NodeMeta::named("Heading"));
        }
        NodeType::Text => {
            node.content = Some(NodeContent {
                text: Some("Add your text here.".to_string()),
                tag: Some(HeadingTag::P),
                ..Default::default()
            });
            node.styles.default = style_map(&[
                ("margin", "0 0 16px 0"),
                ("fontSize", "16px"),
                ("lineHeight", "1.6"),
            ]);
            node.meta = Some(NodeMeta::named("Text"));
        }
        NodeType::Image => {
            node.content = Some(NodeContent {
                src: Some(
                    "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?auto=format&fit=crop&w=1200&q=80"
                        .to_string(),
                ),
                alt: Some("Placeholder image".to_string()),
                ..Default::default()
            });
            node.styles.default = style_map(&[
                ("display", "block"),
                ("width", "100%"),
                ("borderRadius", "12px"),
            ]);
            node.meta = Some(NodeMeta::named("Image"));
        }
        NodeType::Button => {
            node.content = Some(NodeContent {
                text: Some("Button".to_string()),
                href: Some("#".to_string()),
                target: Some(LinkTarget::SelfTarget),
                ..Default::default()
            });
            node.styles.default = style_map(&[
                ("display", "inline-block"),
                ("padding", "12px 24px"),
                ("backgroundColor", "#1b1f3b"),
                ("color", "#ffffff"),
                ("borderRadius", "999px"),
                ("textAlign", "center"),
            ]);
            node.styles.hover = Some(style_map(&[("backgroundColor", "#4f46e5")]));
            node.meta = Some(NodeMeta::named("Button"));
        }
        NodeType::Divider => {
            node.styles.default = style_map(&[
                ("height", "1px"),
                ("backgroundColor", "#e2e8f0"),
                ("margin", "24px 0"),
            ]);
            node.meta = Some(NodeMeta::named("Divider"));
        }
        NodeType::Spacer => {
            node.styles.default = style_map(&[("height", "24px")]);
            node.meta = Some(NodeMeta::named("Spacer"));
        }
        NodeType::List => {
            node.content = Some(NodeContent {
                text: Some("First item\nSecond item\nThird item".to_string()),
                tag: Some(HeadingTag::P),
                ..Default::default()
            });
            node.styles.default = style_map(&[("paddingLeft", "20px"), ("margin", "0 0 16px 0")]);
            node.meta = Some(NodeMeta::named("List"));
        }
        NodeType::Card => {
            let mut image = create_node(NodeType::Image);
            image
                .styles
                .default
                .insert("height".to_string(), "180px".to_string());
            image
                .styles
                .default
                .insert("objectFit".to_string(), "cover".to_string());
            node.children = Some(vec![
                image,
                create_node(NodeType::Heading),
                create_node(NodeType::Text),
                create_node(NodeType::Button),
            ]);
            node.styles.default = style_map(&[
                ("padding", "20px"),
                ("borderRadius", "16px"),
                ("backgroundColor", "#ffffff"),
                ("boxShadow", "0 12px 30px rgba(15, 23, 42, 0.08)"),
                ("display", "grid"),
                ("gap", "16px"),
            ]);
            node.meta = Some(NodeMeta::named("Card"));
        }
        NodeType::Columns2 => {
            let mut col1 = create_node(NodeType::Container);
            let mut col2 = create_node(NodeType::Container);
            col1.meta = Some(NodeMeta::named("Column 1"));
            col2.meta = Some(NodeMeta::named("Column 2"));
            node.children = Some(vec![col1, col2]);
            node.styles.default = style_map(&[
                ("display", "grid"),
                ("gridTemplateColumns", "1fr 1fr"),
                ("gap", "24px"),
            ]);
            node.meta = Some(NodeMeta::named("Columns"));
        }
        NodeType::Hero => {
            let mut heading = create_node(NodeType::Heading);
            heading.content = Some(NodeContent {
                text: Some("Hero headline".to_string()),
                tag: Some(HeadingTag::H1),
                ..Default::default()
            });
            heading
                .styles
                .default
                .insert("fontSize".to_string(), "48px".to_string());
            let mut text = create_node(NodeType::Text);
            text.content = Some(NodeContent {
                text: Some(
                    "Describe your product or service with a bold, compelling statement."
                        .to_string(),
                ),
                tag: Some(HeadingTag::P),
                ..Default::default()
            });
            let mut button = create_node(NodeType::Button);
            button.content = Some(NodeContent {
                text: Some("Get started".to_string()),
                href: Some("#".to_string()),
                target: Some(LinkTarget::SelfTarget),
                ..Default::default()
            });
            node.children = Some(vec![heading, text, button]);
            node.styles.default = style_map(&[
                ("padding", "64px"),
                ("borderRadius", "24px"),
                ("backgroundColor", "#1f2937"),
                ("color", "#ffffff"),
                ("display", "grid"),
                ("gap", "20px"),
            ]);
            node.meta = Some(NodeMeta::named("Hero"));
        }
        NodeType::Unknown => {}
    }
    node
}

/// The distinguished root of every fresh document: a full-width section.
pub fn create_default_root() -> Node {
    Node {
        id: generate_id(),
        node_type: NodeType::Section,
        children: Some(Vec::new()),
        content: Some(NodeContent::default()),
        styles: NodeStyles {
            default: style_map(&[
                ("padding", "40px"),
                ("minHeight", "400px"),
                ("backgroundColor", "#ffffff"),
            ]),
            hover: None,
        },
        meta: Some(NodeMeta::named("Root Section")),
    }
}

/// Build a new page document with a default section root and default settings.
pub fn create_page_document(name: impl Into<String>) -> PageDocument {
    let now = now_ms();
    PageDocument {
        id: generate_id(),
        name: name.into(),
        root: create_default_root(),
        settings: PageSettings::default(),
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collect_ids(node: &Node, out: &mut Vec<String>) {
        out.push(node.id.clone());
        for child in node.children.iter().flatten() {
            collect_ids(child, out);
        }
    }

    #[test]
    fn test_card_composite_shape() {
        let card = create_node(NodeType::Card);
        let children = card.children.as_ref().unwrap();
        assert_eq!(children.len(), 4);
        assert_eq!(children[0].node_type, NodeType::Image);
        assert_eq!(children[0].styles.default["objectFit"], "cover");
        assert_eq!(children[0].styles.default["height"], "180px");
        assert_eq!(children[1].node_type, NodeType::Heading);
        assert_eq!(children[2].node_type, NodeType::Text);
        assert_eq!(children[3].node_type, NodeType::Button);
    }

    #[test]
    fn test_hero_composite_overrides() {
        let hero = create_node(NodeType::Hero);
        let children = hero.children.as_ref().unwrap();
        assert_eq!(children.len(), 3);
        let heading = &children[0];
        assert_eq!(heading.content.as_ref().unwrap().tag, Some(HeadingTag::H1));
        assert_eq!(heading.styles.default["fontSize"], "48px");
        assert_eq!(children[2].content.as_ref().unwrap().text.as_deref(), Some("Get started"));
    }

    #[test]
    fn test_columns_have_named_containers() {
        let columns = create_node(NodeType::Columns2);
        let children = columns.children.as_ref().unwrap();
        assert_eq!(children[0].label(), "Column 1");
        assert_eq!(children[1].label(), "Column 2");
    }

    #[test]
    fn test_leaf_types_start_without_children() {
        for leaf in [
            NodeType::Heading,
            NodeType::Text,
            NodeType::Image,
            NodeType::Button,
            NodeType::Divider,
            NodeType::Spacer,
            NodeType::List,
        ] {
            assert!(create_node(leaf).children.is_none());
        }
    }

    #[test]
    fn test_unknown_type_falls_back_to_minimal_node() {
        let node = create_node(NodeType::Unknown);
        assert!(node.children.is_none());
        assert_eq!(node.styles.default["padding"], "8px");
    }

    #[test]
    fn test_composite_ids_are_unique() {
        let card = create_node(NodeType::Card);
        let mut ids = Vec::new();
        collect_ids(&card, &mut ids);
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_page_document_defaults() {
        let page = create_page_document("Landing");
        assert_eq!(page.root.node_type, NodeType::Section);
        assert_eq!(page.root.label(), "Root Section");
        assert_eq!(page.settings.primary_font, "Inter, Segoe UI, sans-serif");
        assert_eq!(page.created_at, page.updated_at);
    }
}
