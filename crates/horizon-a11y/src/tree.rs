//! The accessible tree: one root container and a flat list of children.
//!
//! Nodes are attached under the root in the order they were added. There is
//! no nesting and no re-ordering; the tree mirrors the order of add
//! notifications.

use std::collections::HashMap;

use accesskit::NodeId;
use horizon_a11y_core::WidgetId;
use horizon_a11y_core::logging::targets;

use crate::node::{AccessibleNode, NodeKey};

/// The single container every accessible node is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootContainer {
    id: NodeId,
    label: String,
    active_descendant: Option<WidgetId>,
    children: Vec<NodeKey>,
}

impl RootContainer {
    /// The externally supplied id of the root.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The root's accessible label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The widget currently reported as the active descendant.
    pub fn active_descendant(&self) -> Option<WidgetId> {
        self.active_descendant
    }

    /// Attached nodes, in attach order.
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }
}

/// Storage for the accessible tree.
///
/// Every attached node gets an AccessKit [`NodeId`] that stays stable while it
/// is attached. Ids are never handed out twice and never equal the root's.
#[derive(Debug, Clone)]
pub struct AccessibleTree {
    root: RootContainer,
    nodes: HashMap<NodeKey, AccessibleNode>,
    node_ids: HashMap<NodeKey, NodeId>,
    keys: HashMap<NodeId, NodeKey>,
    next_node_id: u64,
}

impl AccessibleTree {
    /// Create an empty tree whose root container has the given id and label.
    pub fn new(root_id: NodeId, label: impl Into<String>) -> Self {
        Self {
            root: RootContainer {
                id: root_id,
                label: label.into(),
                active_descendant: None,
                children: Vec::new(),
            },
            nodes: HashMap::new(),
            node_ids: HashMap::new(),
            keys: HashMap::new(),
            next_node_id: 1,
        }
    }

    /// The root container.
    pub fn root(&self) -> &RootContainer {
        &self.root
    }

    /// Attach `node` under the root as its last child.
    ///
    /// Returns `false` without touching the tree if `key` is already attached.
    pub fn attach(&mut self, key: NodeKey, node: AccessibleNode) -> bool {
        if self.nodes.contains_key(&key) {
            tracing::trace!(target: targets::TREE, node = %key, "node already attached");
            return false;
        }

        let node_id = self.allocate_id();
        self.nodes.insert(key, node);
        self.node_ids.insert(key, node_id);
        self.keys.insert(node_id, key);
        self.root.children.push(key);
        tracing::trace!(target: targets::TREE, node = %key, id = node_id.0, "attached node");
        true
    }

    /// Detach the node with `key`, returning it if it was attached.
    pub fn detach(&mut self, key: NodeKey) -> Option<AccessibleNode> {
        let node = self.nodes.remove(&key)?;
        if let Some(node_id) = self.node_ids.remove(&key) {
            self.keys.remove(&node_id);
        }
        self.root.children.retain(|child| *child != key);
        tracing::trace!(target: targets::TREE, node = %key, "detached node");
        Some(node)
    }

    /// Detach every child of the root. Returns how many were detached.
    pub fn detach_all(&mut self) -> usize {
        let count = self.root.children.len();
        self.root.children.clear();
        self.nodes.clear();
        self.node_ids.clear();
        self.keys.clear();
        count
    }

    /// The node with `key`.
    pub fn node(&self, key: NodeKey) -> Option<&AccessibleNode> {
        self.nodes.get(&key)
    }

    /// The node with `key`, mutably.
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut AccessibleNode> {
        self.nodes.get_mut(&key)
    }

    /// Whether a node with `key` is attached.
    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(&key)
    }

    /// Number of attached nodes, not counting the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the root has no children.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attached nodes in attach order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &AccessibleNode)> + '_ {
        self.root
            .children
            .iter()
            .filter_map(|key| self.nodes.get(key).map(|node| (*key, node)))
    }

    /// The AccessKit id assigned to `key`.
    pub fn node_id(&self, key: NodeKey) -> Option<NodeId> {
        self.node_ids.get(&key).copied()
    }

    /// The key of the node with AccessKit id `id`.
    pub fn key_for(&self, id: NodeId) -> Option<NodeKey> {
        self.keys.get(&id).copied()
    }

    /// Point the root's active descendant at `widget`, or clear it.
    pub fn set_active_descendant(&mut self, widget: Option<WidgetId>) {
        self.root.active_descendant = widget;
    }

    fn allocate_id(&mut self) -> NodeId {
        loop {
            let id = NodeId(self.next_node_id);
            self.next_node_id += 1;
            if id != self.root.id {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::AccessibleRole;

    fn key(raw: u64) -> NodeKey {
        NodeKey::Widget(WidgetId::new(raw))
    }

    #[test]
    fn test_attach_preserves_order() {
        let mut tree = AccessibleTree::new(NodeId(0), "root");
        for raw in [30, 10, 20] {
            assert!(tree.attach(key(raw), AccessibleNode::new(AccessibleRole::Button)));
        }

        assert_eq!(tree.root().children(), &[key(30), key(10), key(20)]);
        let order: Vec<_> = tree.iter().map(|(key, _)| key).collect();
        assert_eq!(order, vec![key(30), key(10), key(20)]);
    }

    #[test]
    fn test_attach_rejects_duplicates() {
        let mut tree = AccessibleTree::new(NodeId(0), "root");
        assert!(tree.attach(key(1), AccessibleNode::new(AccessibleRole::Button)));
        assert!(!tree.attach(key(1), AccessibleNode::new(AccessibleRole::List)));

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(key(1)).unwrap().role(), AccessibleRole::Button);
    }

    #[test]
    fn test_detach() {
        let mut tree = AccessibleTree::new(NodeId(0), "root");
        tree.attach(key(1), AccessibleNode::new(AccessibleRole::Button));
        tree.attach(key(2), AccessibleNode::new(AccessibleRole::Button));
        let id = tree.node_id(key(1)).unwrap();

        assert!(tree.detach(key(1)).is_some());
        assert!(tree.detach(key(1)).is_none());
        assert_eq!(tree.root().children(), &[key(2)]);
        assert!(tree.key_for(id).is_none());
    }

    #[test]
    fn test_node_ids_skip_root_and_are_not_reused() {
        let mut tree = AccessibleTree::new(NodeId(2), "root");
        tree.attach(key(1), AccessibleNode::new(AccessibleRole::Button));
        tree.attach(key(2), AccessibleNode::new(AccessibleRole::Button));
        assert_eq!(tree.node_id(key(1)), Some(NodeId(1)));
        assert_eq!(tree.node_id(key(2)), Some(NodeId(3)));

        tree.detach(key(1));
        tree.attach(key(1), AccessibleNode::new(AccessibleRole::Button));
        assert_eq!(tree.node_id(key(1)), Some(NodeId(4)));
        assert_eq!(tree.key_for(NodeId(4)), Some(key(1)));
    }

    #[test]
    fn test_detach_all() {
        let mut tree = AccessibleTree::new(NodeId(0), "root");
        for raw in 0..4 {
            tree.attach(key(raw), AccessibleNode::new(AccessibleRole::Cell));
        }

        assert_eq!(tree.detach_all(), 4);
        assert!(tree.is_empty());
        assert!(tree.root().children().is_empty());
        assert_eq!(tree.detach_all(), 0);
    }

    #[test]
    fn test_active_descendant() {
        let mut tree = AccessibleTree::new(NodeId(0), "root");
        tree.set_active_descendant(Some(WidgetId::new(5)));
        assert_eq!(tree.root().active_descendant(), Some(WidgetId::new(5)));
        tree.set_active_descendant(None);
        assert!(tree.root().active_descendant().is_none());
    }
}
