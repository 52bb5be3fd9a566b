//! Structural tree operations.
//!
//! All operations are silent no-ops on invalid input: a stale id from a
//! previously-cached UI reference must never make the editor throw. Callers
//! re-render from the authoritative document state after every mutation.
//!
//! Invariants enforced here:
//! - the root is never detached or reparented
//! - a node never becomes a descendant of itself (cycle guard on move)
//! - leaf types never acquire children

use pagecraft_schema::Node;

/// Depth-first pre-order search.
pub fn find<'a>(node: &'a Node, id: &str) -> Option<&'a Node> {
    if node.id == id {
        return Some(node);
    }
    for child in node.children.iter().flatten() {
        if let Some(found) = find(child, id) {
            return Some(found);
        }
    }
    None
}

/// Mutable depth-first pre-order search.
pub fn find_mut<'a>(node: &'a mut Node, id: &str) -> Option<&'a mut Node> {
    if node.id == id {
        return Some(node);
    }
    if let Some(children) = node.children.as_mut() {
        for child in children {
            if let Some(found) = find_mut(child, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Locate the immediate parent of `child_id` and the child's position.
/// The root itself has no parent entry.
pub fn find_parent<'a>(node: &'a Node, child_id: &str) -> Option<(&'a Node, usize)> {
    if let Some(children) = node.children.as_ref() {
        if let Some(index) = children.iter().position(|child| child.id == child_id) {
            return Some((node, index));
        }
        for child in children {
            if let Some(found) = find_parent(child, child_id) {
                return Some(found);
            }
        }
    }
    None
}

/// Whether `id` is reachable from `subtree` (the subtree root included).
pub fn is_descendant(subtree: &Node, id: &str) -> bool {
    find(subtree, id).is_some()
}

/// Insert `node` into `parent.children` at a clamped index, lazily
/// initializing the children sequence.
pub fn insert_child(parent: &mut Node, node: Node, index: usize) {
    let children = parent.children.get_or_insert_with(Vec::new);
    let index = index.min(children.len());
    children.insert(index, node);
}

/// Detach the node with `id` from the tree, returning the removed subtree.
/// Returns `None` when the id is absent or names the root itself.
pub fn remove_node(root: &mut Node, id: &str) -> Option<Node> {
    if root.id == id {
        return None;
    }
    remove_from_children(root, id)
}

fn remove_from_children(node: &mut Node, id: &str) -> Option<Node> {
    let children = node.children.as_mut()?;
    if let Some(index) = children.iter().position(|child| child.id == id) {
        return Some(children.remove(index));
    }
    for child in children {
        if let Some(removed) = remove_from_children(child, id) {
            return Some(removed);
        }
    }
    None
}

/// Relocate an existing node under a new parent at a new position.
///
/// Returns whether the move happened. Silent no-op when the node is the
/// root or missing, the target parent is missing or cannot hold children,
/// or the move would make the node an ancestor of its own container
/// (cycle guard). Removal happens before insertion: `target_index` is
/// interpreted against the sibling list with the node already detached, so
/// the node lands at exactly that (clamped) position. Within one parent
/// this absorbs the leftward shift a forward move causes; backward moves
/// need no adjustment.
pub fn move_node(root: &mut Node, node_id: &str, target_parent_id: &str, target_index: usize) -> bool {
    if root.id == node_id {
        return false;
    }
    if find_parent(root, node_id).is_none() {
        return false;
    }

    let Some(target_parent) = find(root, target_parent_id) else {
        return false;
    };
    if !target_parent.node_type.accepts_children() {
        return false;
    }

    // Cycle guard: the target may not live inside the moving subtree.
    let Some(moving) = find(root, node_id) else {
        return false;
    };
    if is_descendant(moving, target_parent_id) {
        return false;
    }

    let Some(detached) = remove_node(root, node_id) else {
        return false;
    };

    match find_mut(root, target_parent_id) {
        Some(parent) => {
            insert_child(parent, detached, target_index);
            true
        }
        None => false,
    }
}

/// Pre-order ids of the whole tree.
pub fn collect_ids(root: &Node) -> Vec<String> {
    let mut ids = Vec::new();
    fn walk(node: &Node, out: &mut Vec<String>) {
        out.push(node.id.clone());
        for child in node.children.iter().flatten() {
            walk(child, out);
        }
    }
    walk(root, &mut ids);
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_schema::{create_node, NodeType};

    fn section_with(children: Vec<Node>) -> Node {
        let mut section = create_node(NodeType::Section);
        section.children = Some(children);
        section
    }

    #[test]
    fn test_find_is_depth_first() {
        let a = create_node(NodeType::Text);
        let a_id = a.id.clone();
        let inner = section_with(vec![a]);
        let root = section_with(vec![inner, create_node(NodeType::Text)]);
        assert_eq!(find(&root, &a_id).map(|node| node.id.as_str()), Some(a_id.as_str()));
        assert!(find(&root, "missing").is_none());
    }

    #[test]
    fn test_find_parent_reports_position() {
        let a = create_node(NodeType::Text);
        let b = create_node(NodeType::Text);
        let b_id = b.id.clone();
        let root = section_with(vec![a, b]);
        let (parent, index) = find_parent(&root, &b_id).unwrap();
        assert_eq!(parent.id, root.id);
        assert_eq!(index, 1);
        assert!(find_parent(&root, &root.id).is_none());
    }

    #[test]
    fn test_insert_child_clamps_and_initializes() {
        let mut leafless = create_node(NodeType::Heading);
        leafless.children = None;
        insert_child(&mut leafless, create_node(NodeType::Text), 99);
        assert_eq!(leafless.children.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_node_refuses_root() {
        let mut root = section_with(vec![create_node(NodeType::Text)]);
        let root_id = root.id.clone();
        assert!(remove_node(&mut root, &root_id).is_none());
        assert_eq!(root.children.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_remove_node_detaches_subtree() {
        let card = create_node(NodeType::Card);
        let card_id = card.id.clone();
        let mut root = section_with(vec![card]);
        let removed = remove_node(&mut root, &card_id).unwrap();
        assert_eq!(removed.id, card_id);
        assert!(root.children.as_ref().unwrap().is_empty());
        assert!(remove_node(&mut root, &card_id).is_none());
    }

    #[test]
    fn test_move_same_parent_forward_lands_at_final_index() {
        // [A, B, C]: moving A to index 2 yields [B, C, A].
        let (a, b, c) = (
            create_node(NodeType::Text),
            create_node(NodeType::Text),
            create_node(NodeType::Text),
        );
        let (a_id, b_id, c_id) = (a.id.clone(), b.id.clone(), c.id.clone());
        let mut root = section_with(vec![a, b, c]);
        let root_id = root.id.clone();

        assert!(move_node(&mut root, &a_id, &root_id, 2));
        let order: Vec<&str> = root
            .children
            .as_ref()
            .unwrap()
            .iter()
            .map(|node| node.id.as_str())
            .collect();
        assert_eq!(order, vec![b_id.as_str(), c_id.as_str(), a_id.as_str()]);
    }

    #[test]
    fn test_move_same_parent_backward_lands_at_final_index() {
        // [A, B, C]: moving C to index 0 yields [C, A, B].
        let (a, b, c) = (
            create_node(NodeType::Text),
            create_node(NodeType::Text),
            create_node(NodeType::Text),
        );
        let (a_id, b_id, c_id) = (a.id.clone(), b.id.clone(), c.id.clone());
        let mut root = section_with(vec![a, b, c]);
        let root_id = root.id.clone();

        assert!(move_node(&mut root, &c_id, &root_id, 0));
        let order: Vec<&str> = root
            .children
            .as_ref()
            .unwrap()
            .iter()
            .map(|node| node.id.as_str())
            .collect();
        assert_eq!(order, vec![c_id.as_str(), a_id.as_str(), b_id.as_str()]);
    }

    #[test]
    fn test_move_rejects_cycles() {
        let inner = create_node(NodeType::Container);
        let inner_id = inner.id.clone();
        let mut outer = create_node(NodeType::Container);
        let outer_id = outer.id.clone();
        outer.children = Some(vec![inner]);
        let mut root = section_with(vec![outer]);

        // Moving a container into its own child must leave the tree unchanged.
        assert!(!move_node(&mut root, &outer_id, &inner_id, 0));
        // Moving a node into itself is equally rejected.
        assert!(!move_node(&mut root, &outer_id, &outer_id, 0));
        assert_eq!(root.children.as_ref().unwrap()[0].id, outer_id);
        assert!(find(&root, &inner_id).is_some());
    }

    #[test]
    fn test_move_rejects_root_and_missing_targets() {
        let child = create_node(NodeType::Text);
        let child_id = child.id.clone();
        let mut root = section_with(vec![child]);
        let root_id = root.id.clone();

        assert!(!move_node(&mut root, &root_id, &child_id, 0));
        assert!(!move_node(&mut root, &child_id, "missing", 0));
        assert!(!move_node(&mut root, "missing", &root_id, 0));
    }

    #[test]
    fn test_move_rejects_leaf_targets() {
        let text = create_node(NodeType::Text);
        let text_id = text.id.clone();
        let button = create_node(NodeType::Button);
        let button_id = button.id.clone();
        let mut root = section_with(vec![text, button]);

        assert!(!move_node(&mut root, &text_id, &button_id, 0));
        assert!(find(&root, &button_id).unwrap().children.is_none());
    }

    #[test]
    fn test_move_across_parents() {
        let x = create_node(NodeType::Text);
        let x_id = x.id.clone();
        let y = create_node(NodeType::Text);
        let y_id = y.id.clone();
        let p1 = section_with(vec![x]);
        let p1_id = p1.id.clone();
        let p2 = section_with(vec![y]);
        let p2_id = p2.id.clone();
        let mut root = section_with(vec![p1, p2]);

        assert!(move_node(&mut root, &x_id, &p2_id, 1));
        let p1 = find(&root, &p1_id).unwrap();
        assert!(p1.children.as_ref().unwrap().is_empty());
        let p2 = find(&root, &p2_id).unwrap();
        let order: Vec<&str> = p2
            .children
            .as_ref()
            .unwrap()
            .iter()
            .map(|node| node.id.as_str())
            .collect();
        assert_eq!(order, vec![y_id.as_str(), x_id.as_str()]);
    }

    #[test]
    fn test_move_clamps_target_index() {
        let a = create_node(NodeType::Text);
        let a_id = a.id.clone();
        let p1 = section_with(vec![a]);
        let p2 = section_with(vec![]);
        let p2_id = p2.id.clone();
        let mut root = section_with(vec![p1, p2]);

        assert!(move_node(&mut root, &a_id, &p2_id, 42));
        assert_eq!(find(&root, &p2_id).unwrap().children.as_ref().unwrap()[0].id, a_id);
    }
}
