//! Layout presets: pure builders that assemble factory nodes into fixed
//! compositions with explicit style overrides. Deterministic apart from ids,
//! no external state.

use crate::factory::{create_node, style_map};
use crate::node::{HeadingTag, LinkTarget, Node, NodeContent, NodeMeta, NodeType};

fn link_button(label: &str) -> Node {
    let mut button = create_node(NodeType::Button);
    button.content = Some(NodeContent {
        text: Some(label.to_string()),
        href: Some("#".to_string()),
        target: Some(LinkTarget::SelfTarget),
        ..Default::default()
    });
    button.styles.default = style_map(&[
        ("display", "inline-block"),
        ("padding", "8px 12px"),
        ("backgroundColor", "transparent"),
        ("color", "#ffffff"),
        ("borderRadius", "8px"),
    ]);
    button
}

/// Header with a brand heading and a row of link-style buttons.
pub fn navbar() -> Node {
    let mut header = create_node(NodeType::Header);
    header.meta = Some(NodeMeta::named("Navbar"));
    header.styles.default = style_map(&[
        ("padding", "16px 32px"),
        ("backgroundColor", "#0f172a"),
        ("color", "#ffffff"),
        ("display", "flex"),
        ("alignItems", "center"),
        ("justifyContent", "space-between"),
        ("gap", "24px"),
    ]);

    let mut brand = create_node(NodeType::Heading);
    brand.content = Some(NodeContent {
        text: Some("Brand".to_string()),
        tag: Some(HeadingTag::H3),
        ..Default::default()
    });
    brand.styles.default = style_map(&[("margin", "0"), ("fontSize", "20px"), ("fontWeight", "700")]);

    let mut links = create_node(NodeType::Container);
    links.meta = Some(NodeMeta::named("Nav Links"));
    links.styles.default = style_map(&[("display", "flex"), ("gap", "8px"), ("padding", "0")]);
    links.children = Some(vec![
        link_button("Features"),
        link_button("Pricing"),
        link_button("Contact"),
    ]);

    header.children = Some(vec![brand, links]);
    header
}

/// Hero section with oversized type and a centered call to action.
pub fn hero_banner() -> Node {
    let mut hero = create_node(NodeType::Hero);
    hero.meta = Some(NodeMeta::named("Hero Banner"));
    hero.styles
        .default
        .insert("textAlign".to_string(), "center".to_string());
    hero.styles
        .default
        .insert("padding".to_string(), "96px 48px".to_string());
    if let Some(children) = hero.children.as_mut() {
        if let Some(heading) = children.first_mut() {
            heading
                .styles
                .default
                .insert("fontSize".to_string(), "56px".to_string());
        }
    }
    hero
}

/// Footer with two text columns and a divider above the fine print.
pub fn footer_columns() -> Node {
    let mut footer = create_node(NodeType::Footer);
    footer.meta = Some(NodeMeta::named("Footer Columns"));

    let mut columns = create_node(NodeType::Columns2);
    if let Some(cols) = columns.children.as_mut() {
        for (col, copy) in cols.iter_mut().zip(["About us", "Links"]) {
            let mut heading = create_node(NodeType::Heading);
            heading.content = Some(NodeContent {
                text: Some(copy.to_string()),
                tag: Some(HeadingTag::H4),
                ..Default::default()
            });
            heading
                .styles
                .default
                .insert("fontSize".to_string(), "18px".to_string());
            let text = create_node(NodeType::Text);
            col.children = Some(vec![heading, text]);
        }
    }

    let divider = create_node(NodeType::Divider);
    let mut fine_print = create_node(NodeType::Text);
    fine_print.content = Some(NodeContent {
        text: Some("© All rights reserved.".to_string()),
        tag: Some(HeadingTag::P),
        ..Default::default()
    });
    fine_print
        .styles
        .default
        .insert("fontSize".to_string(), "13px".to_string());

    footer.children = Some(vec![columns, divider, fine_print]);
    footer
}

/// Section holding a heading and a two-column grid of cards.
pub fn feature_grid() -> Node {
    let mut section = create_node(NodeType::Section);
    section.meta = Some(NodeMeta::named("Feature Grid"));

    let mut heading = create_node(NodeType::Heading);
    heading.content = Some(NodeContent {
        text: Some("Features".to_string()),
        tag: Some(HeadingTag::H2),
        ..Default::default()
    });
    heading
        .styles
        .default
        .insert("textAlign".to_string(), "center".to_string());

    let mut grid = create_node(NodeType::Columns2);
    grid.meta = Some(NodeMeta::named("Grid"));
    if let Some(cols) = grid.children.as_mut() {
        for col in cols.iter_mut() {
            col.children = Some(vec![create_node(NodeType::Card)]);
        }
    }

    section.children = Some(vec![heading, grid]);
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_nodes(node: &Node) -> usize {
        1 + node
            .children
            .iter()
            .flatten()
            .map(count_nodes)
            .sum::<usize>()
    }

    #[test]
    fn test_navbar_shape() {
        let nav = navbar();
        assert_eq!(nav.node_type, NodeType::Header);
        let children = nav.children.as_ref().unwrap();
        assert_eq!(children[0].node_type, NodeType::Heading);
        assert_eq!(children[1].children.as_ref().unwrap().len(), 3);
    }

    #[test]
    fn test_hero_banner_overrides_type_scale() {
        let hero = hero_banner();
        assert_eq!(hero.styles.default["textAlign"], "center");
        let heading = &hero.children.as_ref().unwrap()[0];
        assert_eq!(heading.styles.default["fontSize"], "56px");
    }

    #[test]
    fn test_feature_grid_nests_cards() {
        let grid = feature_grid();
        // section + heading + columns2(+2 containers) + 2 cards of 5 nodes each
        assert!(count_nodes(&grid) >= 14);
    }

    #[test]
    fn test_footer_columns_shape() {
        let footer = footer_columns();
        let children = footer.children.as_ref().unwrap();
        assert_eq!(children.len(), 3);
        assert_eq!(children[1].node_type, NodeType::Divider);
    }
}
