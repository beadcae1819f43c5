//! AccessKit export and action routing.
//!
//! The accessible tree is exported as a full [`TreeUpdate`]: the root
//! container first, then every attached node. Action requests coming back
//! from assistive technology are resolved to a widget and an [`Activation`],
//! returned as a [`PendingActivation`]. The host runs it after releasing the
//! bridge, so a widget may notify the bridge from inside
//! [`Item::activate`].

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use accesskit::{Action, ActionRequest, Live, Node, NodeId, Role, Toggled, Tree, TreeUpdate};
use horizon_a11y_core::logging::{span_names, targets};
use horizon_a11y_core::{Activation, Item, WidgetId};

use crate::bridge::Bridge;
use crate::error::{Error, Result};
use crate::node::{AccessibleNode, NodeKey, Politeness};

impl From<Politeness> for Live {
    fn from(politeness: Politeness) -> Self {
        match politeness {
            Politeness::Polite => Live::Polite,
            Politeness::Assertive => Live::Assertive,
        }
    }
}

impl Bridge {
    /// Build a complete tree update from the accessible tree.
    ///
    /// Focus is reported on the focused widget's node when it exists,
    /// otherwise on the root container.
    pub fn tree_update(&self) -> TreeUpdate {
        let _span = tracing::trace_span!(target: targets::TREE, span_names::EXPORT).entered();

        let tree = &self.tree;
        let root = tree.root();
        let focused = self
            .focus
            .and_then(|id| tree.node_id(NodeKey::Widget(id)));

        let mut root_builder = NodeBuilder::new(Role::GenericContainer)
            .label(root.label())
            .children(root.children().iter().filter_map(|key| tree.node_id(*key)));
        if let Some(active) = root
            .active_descendant()
            .and_then(|id| tree.node_id(NodeKey::Widget(id)))
        {
            root_builder = root_builder.active_descendant(active);
        }

        let radio_groups = self.radio_groups();

        let mut nodes = Vec::with_capacity(tree.len() + 1);
        nodes.push((root.id(), root_builder.build()));
        for (key, node) in tree.iter() {
            let Some(node_id) = tree.node_id(key) else {
                continue;
            };
            let mut builder = NodeBuilder::from_node(node);
            if let Some(owner) = node.companion_of().and_then(|owner| tree.node_id(owner)) {
                builder = builder.labelled_by(owner);
            }
            if let Some(group) = node.group_name().and_then(|name| radio_groups.get(name)) {
                builder = builder.radio_group(group.clone());
            }
            nodes.push((node_id, builder.build()));
        }

        TreeUpdate {
            nodes,
            tree: Some(Tree::new(root.id())),
            focus: focused.unwrap_or(root.id()),
        }
    }

    /// Build an update that only changes focus.
    pub fn focus_update(&self) -> TreeUpdate {
        let root_id = self.tree.root().id();
        let focus = self
            .focus
            .and_then(|id| self.tree.node_id(NodeKey::Widget(id)))
            .unwrap_or(root_id);
        TreeUpdate {
            nodes: vec![],
            tree: None,
            focus,
        }
    }

    /// Resolve an action request from assistive technology.
    ///
    /// Requests that cannot be routed are dropped with a trace.
    #[must_use = "the activation only reaches the widget once it is run"]
    pub fn handle_action(&self, request: &ActionRequest) -> Option<PendingActivation> {
        self.try_handle_action(request)
            .map_err(|err| {
                tracing::debug!(target: targets::TREE, target_node = request.target.0, "{err}");
            })
            .ok()
    }

    /// Resolve an action request, reporting why it could not be routed.
    ///
    /// Only [`Action::Click`] on an activatable node resolves to an
    /// activation.
    pub fn try_handle_action(&self, request: &ActionRequest) -> Result<PendingActivation> {
        if request.action != Action::Click {
            return Err(Error::UnsupportedAction(request.action));
        }
        let key = self
            .tree
            .key_for(request.target)
            .ok_or(Error::UnknownNode(request.target))?;
        let NodeKey::Widget(id) = key else {
            return Err(Error::NotActivatable(key));
        };
        let activation = self
            .tree
            .node(key)
            .and_then(AccessibleNode::activation)
            .ok_or(Error::NotActivatable(key))?;
        let item = self.registry.get(id).ok_or(Error::WidgetDropped(id))?;

        tracing::debug!(target: targets::TREE, widget = %id, ?activation, "routing activation");
        Ok(PendingActivation { item, activation })
    }

    /// Node ids of every radio button, grouped by group name.
    fn radio_groups(&self) -> HashMap<&str, Vec<NodeId>> {
        let mut groups: HashMap<&str, Vec<NodeId>> = HashMap::new();
        for (key, node) in self.tree.iter() {
            if let Some(name) = node.group_name()
                && let Some(node_id) = self.tree.node_id(key)
            {
                groups.entry(name).or_default().push(node_id);
            }
        }
        groups
    }
}

/// An activation resolved from an action request, not yet delivered.
///
/// Holds a strong reference to the widget, so it is delivered even if the
/// widget is removed from the bridge in the meantime.
#[must_use = "the activation only reaches the widget once it is run"]
pub struct PendingActivation {
    item: Rc<dyn Item>,
    activation: Activation,
}

impl PendingActivation {
    /// The widget that will be activated.
    pub fn widget(&self) -> WidgetId {
        self.item.id()
    }

    /// How the widget will be activated.
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Deliver the activation to the widget.
    pub fn run(self) {
        self.item.activate(self.activation);
    }
}

impl fmt::Debug for PendingActivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingActivation")
            .field("widget", &self.item.id())
            .field("activation", &self.activation)
            .finish()
    }
}

/// Builder for constructing AccessKit nodes.
///
/// This helper simplifies building nodes with common patterns.
pub struct NodeBuilder {
    node: Node,
    children: Vec<NodeId>,
}

impl NodeBuilder {
    /// Create a new node builder with the given role.
    pub fn new(role: Role) -> Self {
        Self {
            node: Node::new(role),
            children: Vec::new(),
        }
    }

    /// Start from an accessible node's attributes.
    pub fn from_node(source: &AccessibleNode) -> Self {
        let mut builder = Self::new(source.role().to_accesskit_role());
        if !source.label().is_empty() {
            builder = builder.label(source.label());
        }
        if !source.description().is_empty() {
            builder = builder.description(source.description());
        }
        if let Some(description) = source.role_description() {
            builder.node.set_role_description(description);
        }
        if let Some(value) = source.value() {
            builder.node.set_value(value);
        }
        if let Some(value) = source.numeric_value() {
            builder.node.set_numeric_value(value);
        }
        if let Some(toggled) = source.toggled() {
            builder.node.set_toggled(if toggled {
                Toggled::True
            } else {
                Toggled::False
            });
        }
        if let Some(expanded) = source.expanded() {
            builder.node.set_expanded(expanded);
        }

        // A pending announcement turns the node into a live region for it.
        let live = source
            .announcement()
            .map(|announcement| announcement.politeness)
            .or(source.live());
        if let Some(live) = live {
            builder.node.set_live(live.into());
        }

        if source.is_activatable() {
            builder = builder.action(Action::Click);
        }
        builder
    }

    /// Set the node's label (accessible name).
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.node.set_label(label.into());
        self
    }

    /// Set the node's description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.node.set_description(description.into());
        self
    }

    /// Add an action that this node supports.
    pub fn action(mut self, action: Action) -> Self {
        self.node.add_action(action);
        self
    }

    /// Add multiple child node IDs.
    pub fn children(mut self, ids: impl IntoIterator<Item = NodeId>) -> Self {
        self.children.extend(ids);
        self
    }

    /// Report `id` as the focused descendant of this node.
    pub fn active_descendant(mut self, id: NodeId) -> Self {
        self.node.set_active_descendant(id);
        self
    }

    /// Label this node by another node.
    pub fn labelled_by(mut self, id: NodeId) -> Self {
        self.node.set_labelled_by(vec![id]);
        self
    }

    /// Set the members of this node's radio group.
    pub fn radio_group(mut self, ids: Vec<NodeId>) -> Self {
        self.node.set_radio_group(ids);
        self
    }

    /// Build the final node.
    pub fn build(mut self) -> Node {
        if !self.children.is_empty() {
            self.node.set_children(self.children);
        }
        self.node
    }
}
