//! CSS text generation for a node tree.
//!
//! Each node contributes one `.node-<id>` rule from its non-prefixed
//! default entries; breakpoint-prefixed entries are grouped into tablet and
//! mobile media blocks with prefixes stripped; hover maps produce separate
//! `.node-<id>:hover` rules that are never segmented by breakpoint.

use crate::breakpoints::{MOBILE_MAX_WIDTH, MOBILE_PREFIX, TABLET_MAX_WIDTH, TABLET_PREFIX};
use pagecraft_schema::Node;
use tracing::debug;

/// camelCase property name to kebab-case: uppercase letters get a preceding
/// hyphen and are lowercased (`backgroundColor` -> `background-color`).
pub fn to_kebab_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for ch in value.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Pre-order traversal of the tree.
pub fn collect_nodes(root: &Node) -> Vec<&Node> {
    let mut nodes = Vec::new();
    fn walk<'a>(node: &'a Node, out: &mut Vec<&'a Node>) {
        out.push(node);
        for child in node.children.iter().flatten() {
            walk(child, out);
        }
    }
    walk(root, &mut nodes);
    nodes
}

fn declarations(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{}: {};", to_kebab_case(key), value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Default + breakpoint CSS for every node under `root`.
pub fn build_default_styles(root: &Node) -> String {
    let mut base_rules = Vec::new();
    let mut tablet_rules = Vec::new();
    let mut mobile_rules = Vec::new();

    for node in collect_nodes(root) {
        let mut base_entries = Vec::new();
        let mut tablet_entries = Vec::new();
        let mut mobile_entries = Vec::new();
        for (key, value) in &node.styles.default {
            if value.is_empty() {
                continue;
            }
            if let Some(stripped) = key.strip_prefix(TABLET_PREFIX) {
                tablet_entries.push((stripped.to_string(), value.clone()));
            } else if let Some(stripped) = key.strip_prefix(MOBILE_PREFIX) {
                mobile_entries.push((stripped.to_string(), value.clone()));
            } else {
                base_entries.push((key.clone(), value.clone()));
            }
        }

        if !base_entries.is_empty() {
            base_rules.push(format!(".node-{} {{ {} }}", node.id, declarations(&base_entries)));
        }
        if !tablet_entries.is_empty() {
            tablet_rules.push(format!(".node-{} {{ {} }}", node.id, declarations(&tablet_entries)));
        }
        if !mobile_entries.is_empty() {
            mobile_rules.push(format!(".node-{} {{ {} }}", node.id, declarations(&mobile_entries)));
        }
    }

    debug!(
        base = base_rules.len(),
        tablet = tablet_rules.len(),
        mobile = mobile_rules.len(),
        "built default style rules"
    );

    let tablet_block = if tablet_rules.is_empty() {
        String::new()
    } else {
        format!(
            "@media (max-width: {TABLET_MAX_WIDTH}px) {{ {} }}",
            tablet_rules.join(" ")
        )
    };
    let mobile_block = if mobile_rules.is_empty() {
        String::new()
    } else {
        format!(
            "@media (max-width: {MOBILE_MAX_WIDTH}px) {{ {} }}",
            mobile_rules.join(" ")
        )
    };

    [base_rules.join("\n"), tablet_block, mobile_block]
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Hover CSS for every node under `root` with a non-empty hover map.
pub fn build_hover_styles(root: &Node) -> String {
    collect_nodes(root)
        .into_iter()
        .filter_map(|node| {
            let hover = node.styles.hover.as_ref()?;
            let entries: Vec<(String, String)> = hover
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            if entries.is_empty() {
                return None;
            }
            Some(format!(".node-{}:hover {{ {} }}", node.id, declarations(&entries)))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_schema::{create_node, NodeType};

    #[test]
    fn test_kebab_case_conversion() {
        assert_eq!(to_kebab_case("backgroundColor"), "background-color");
        assert_eq!(to_kebab_case("gridTemplateColumns"), "grid-template-columns");
        assert_eq!(to_kebab_case("color"), "color");
    }

    #[test]
    fn test_default_rule_per_node() {
        let mut node = create_node(NodeType::Heading);
        node.styles.default.insert("color".to_string(), "#333333".to_string());
        let css = build_default_styles(&node);
        assert!(css.contains(&format!(".node-{} {{", node.id)));
        assert!(css.contains("font-size: 32px;"));
        assert!(css.contains("color: #333333;"));
        assert!(!css.contains("@media"));
    }

    #[test]
    fn test_breakpoint_entries_move_into_media_blocks() {
        let mut node = create_node(NodeType::Text);
        node.styles
            .default
            .insert("bp-tablet-fontSize".to_string(), "14px".to_string());
        node.styles
            .default
            .insert("bp-mobile-fontSize".to_string(), "12px".to_string());
        let css = build_default_styles(&node);
        assert!(css.contains("@media (max-width: 1024px) {"));
        assert!(css.contains("@media (max-width: 640px) {"));
        // Prefix is stripped inside the media blocks.
        assert!(!css.contains("bp-tablet"));
        assert!(!css.contains("bp-mobile"));
        assert!(css.contains("font-size: 14px;"));
        assert!(css.contains("font-size: 12px;"));
    }

    #[test]
    fn test_empty_values_are_dropped() {
        let mut node = create_node(NodeType::Spacer);
        node.styles.default.insert("color".to_string(), String::new());
        let css = build_default_styles(&node);
        assert!(!css.contains("color"));
    }

    #[test]
    fn test_hover_rules() {
        let button = create_node(NodeType::Button);
        let css = build_hover_styles(&button);
        assert!(css.contains(&format!(".node-{}:hover {{ background-color: #4f46e5; }}", button.id)));
    }

    #[test]
    fn test_nodes_without_hover_emit_nothing() {
        let text = create_node(NodeType::Text);
        assert!(build_hover_styles(&text).is_empty());
    }

    #[test]
    fn test_collect_nodes_is_pre_order() {
        let card = create_node(NodeType::Card);
        let nodes = collect_nodes(&card);
        assert_eq!(nodes[0].id, card.id);
        assert_eq!(nodes.len(), 5);
    }
}
