use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Style property map: camelCase CSS property names to string values.
///
/// Keys may be shorthands (`margin`, `padding`, `border`) or carry a
/// breakpoint prefix (`bp-tablet-<prop>`, `bp-mobile-<prop>`) that scopes
/// the value to one viewport.
pub type StyleMap = BTreeMap<String, String>;

/// The closed set of node variants the editor understands.
///
/// The `Unknown` variant absorbs unrecognized type strings from
/// forward-compatible documents; the factory and renderer treat it as a
/// minimal structural node instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Section,
    Container,
    Heading,
    Text,
    Image,
    Button,
    Divider,
    Spacer,
    List,
    Card,
    Columns2,
    Hero,
    Header,
    Footer,
    #[serde(other)]
    Unknown,
}

impl NodeType {
    /// Container-like types may hold children; leaf types never acquire them.
    pub fn accepts_children(&self) -> bool {
        matches!(
            self,
            NodeType::Header
                | NodeType::Footer
                | NodeType::Section
                | NodeType::Container
                | NodeType::Card
                | NodeType::Columns2
                | NodeType::Hero
        )
    }
}

/// Heading element tag carried by `heading` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
}

impl HeadingTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingTag::H1 => "h1",
            HeadingTag::H2 => "h2",
            HeadingTag::H3 => "h3",
            HeadingTag::H4 => "h4",
            HeadingTag::H5 => "h5",
            HeadingTag::H6 => "h6",
            HeadingTag::P => "p",
        }
    }
}

/// Link target carried by `button` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_self")]
    SelfTarget,
    #[serde(rename = "_blank")]
    Blank,
}

impl LinkTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkTarget::SelfTarget => "_self",
            LinkTarget::Blank => "_blank",
        }
    }
}

/// Typed content payload over the closed field set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<HeadingTag>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
}

/// One quick-edit assignment to a content field.
///
/// Tagged variant over the closed field set; callers dispatch on the edit
/// instead of on stringly-typed field names.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentEdit {
    Text(String),
    Tag(HeadingTag),
    Src(String),
    Alt(String),
    Href(String),
    Target(LinkTarget),
}

impl NodeContent {
    pub fn apply(&mut self, edit: ContentEdit) {
        match edit {
            ContentEdit::Text(text) => self.text = Some(text),
            ContentEdit::Tag(tag) => self.tag = Some(tag),
            ContentEdit::Src(src) => self.src = Some(src),
            ContentEdit::Alt(alt) => self.alt = Some(alt),
            ContentEdit::Href(href) => self.href = Some(href),
            ContentEdit::Target(target) => self.target = Some(target),
        }
    }
}

/// Per-state style maps for one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeStyles {
    pub default: StyleMap,

    /// Applied only on pointer hover; never breakpoint-prefixed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<StyleMap>,
}

/// Editor-facing metadata (layers panel label, edit lock).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
}

impl NodeMeta {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            locked: None,
        }
    }
}

/// One element of the page tree.
///
/// `id` is unique within a document and immutable after creation. `children`
/// is present (possibly empty) only for container-like types; ordering is
/// meaningful insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,

    #[serde(rename = "type")]
    pub node_type: NodeType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<NodeContent>,

    pub styles: NodeStyles,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<NodeMeta>,
}

impl Node {
    /// Layers-panel label: the meta name when present, the type otherwise.
    pub fn label(&self) -> String {
        self.meta
            .as_ref()
            .and_then(|meta| meta.name.clone())
            .unwrap_or_else(|| format!("{:?}", self.node_type).to_lowercase())
    }

    pub fn content_text(&self) -> &str {
        self.content
            .as_ref()
            .and_then(|content| content.text.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&NodeType::Columns2).unwrap(),
            "\"columns2\""
        );
        assert_eq!(
            serde_json::to_string(&NodeType::Section).unwrap(),
            "\"section\""
        );
    }

    #[test]
    fn test_unknown_node_type_round_trips_forward_compatible_data() {
        let parsed: NodeType = serde_json::from_str("\"marquee\"").unwrap();
        assert_eq!(parsed, NodeType::Unknown);
        assert!(!parsed.accepts_children());
    }

    #[test]
    fn test_container_types_accept_children() {
        for container in [
            NodeType::Header,
            NodeType::Footer,
            NodeType::Section,
            NodeType::Container,
            NodeType::Card,
            NodeType::Columns2,
            NodeType::Hero,
        ] {
            assert!(container.accepts_children());
        }
        for leaf in [
            NodeType::Heading,
            NodeType::Text,
            NodeType::Image,
            NodeType::Button,
            NodeType::Divider,
            NodeType::Spacer,
            NodeType::List,
        ] {
            assert!(!leaf.accepts_children());
        }
    }

    #[test]
    fn test_link_target_wire_format() {
        assert_eq!(
            serde_json::to_string(&LinkTarget::SelfTarget).unwrap(),
            "\"_self\""
        );
        assert_eq!(serde_json::to_string(&LinkTarget::Blank).unwrap(), "\"_blank\"");
    }

    #[test]
    fn test_node_omits_absent_fields() {
        let node = Node {
            id: "n1".to_string(),
            node_type: NodeType::Divider,
            children: None,
            content: None,
            styles: NodeStyles::default(),
            meta: None,
        };
        let json = serde_json::to_value(&node).unwrap();
        assert!(json.get("children").is_none());
        assert!(json.get("content").is_none());
        assert!(json.get("meta").is_none());
        assert_eq!(json["type"], "divider");
    }
}
