//! Accessible nodes and the keys that identify them.

use std::fmt;

use horizon_a11y_core::{Activation, NotificationKind, WidgetId};

use crate::role::AccessibleRole;

/// Suffix of the derived id of a text field's selection companion.
pub const SELECTION_SUFFIX: &str = "-selection";

/// Key of a node in the accessible tree.
///
/// Every widget owns at most one primary node. Text fields additionally own a
/// companion node whose id is derived from the widget's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKey {
    /// The primary node for a widget.
    Widget(WidgetId),
    /// The live selection companion of a text field.
    Selection(WidgetId),
}

impl NodeKey {
    /// The widget this node belongs to.
    pub const fn widget(self) -> WidgetId {
        match self {
            NodeKey::Widget(id) | NodeKey::Selection(id) => id,
        }
    }

    /// Whether this is a primary node.
    pub const fn is_primary(self) -> bool {
        matches!(self, NodeKey::Widget(_))
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Widget(id) => write!(f, "{id}"),
            NodeKey::Selection(id) => write!(f, "{id}{SELECTION_SUFFIX}"),
        }
    }
}

/// How eagerly changes to a live region are announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Politeness {
    /// Wait until the user is idle.
    #[default]
    Polite,
    /// Interrupt the user.
    Assertive,
}

impl From<NotificationKind> for Politeness {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Polite => Politeness::Polite,
            NotificationKind::Assertive => Politeness::Assertive,
        }
    }
}

/// A message announced on behalf of a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// What to announce.
    pub text: String,
    /// How urgently.
    pub politeness: Politeness,
}

/// A node in the accessible tree.
///
/// Nodes are only created by the bridge. Hosts read them through the
/// accessors below or through the exported AccessKit tree.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibleNode {
    pub(crate) role: AccessibleRole,
    pub(crate) label: String,
    pub(crate) description: String,
    pub(crate) role_description: Option<String>,
    pub(crate) group_name: Option<String>,
    pub(crate) activation: Option<Activation>,
    pub(crate) live: Option<Politeness>,
    pub(crate) value: Option<String>,
    pub(crate) numeric_value: Option<f64>,
    pub(crate) toggled: Option<bool>,
    pub(crate) expanded: Option<bool>,
    pub(crate) announcement: Option<Announcement>,
    pub(crate) companion: Option<NodeKey>,
    pub(crate) companion_of: Option<NodeKey>,
}

impl AccessibleNode {
    /// Create an empty node with the given role.
    pub fn new(role: AccessibleRole) -> Self {
        Self {
            role,
            label: String::new(),
            description: String::new(),
            role_description: None,
            group_name: None,
            activation: None,
            live: None,
            value: None,
            numeric_value: None,
            toggled: None,
            expanded: None,
            announcement: None,
            companion: None,
            companion_of: None,
        }
    }

    /// Create the live selection companion for the text field `owner`.
    pub(crate) fn selection_companion(owner: WidgetId) -> Self {
        let mut node = Self::new(AccessibleRole::Generic);
        node.live = Some(Politeness::Polite);
        node.companion_of = Some(NodeKey::Widget(owner));
        node
    }

    /// The node's role.
    pub fn role(&self) -> AccessibleRole {
        self.role
    }

    /// The accessible label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The accessible description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Custom role description, for custom-drawn widgets.
    pub fn role_description(&self) -> Option<&str> {
        self.role_description.as_deref()
    }

    /// Group name shared by mutually exclusive radio buttons.
    pub fn group_name(&self) -> Option<&str> {
        self.group_name.as_deref()
    }

    /// The activation routed to the widget when this node is clicked.
    pub fn activation(&self) -> Option<Activation> {
        self.activation
    }

    /// Whether this node accepts activation.
    pub fn is_activatable(&self) -> bool {
        self.activation.is_some()
    }

    /// Whether this node is part of the default tab order.
    ///
    /// Always `false`: focus reaches accessible nodes only through the root
    /// container's active descendant, following the widget framework's focus.
    pub const fn is_keyboard_focusable(&self) -> bool {
        false
    }

    /// Live region politeness, if this node is a live region.
    pub fn live(&self) -> Option<Politeness> {
        self.live
    }

    /// Current text value. For a selection companion, the selected text.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Current numeric value, for progress bars.
    pub fn numeric_value(&self) -> Option<f64> {
        self.numeric_value
    }

    /// Toggled state, for checkboxes, radio and toggle buttons.
    pub fn toggled(&self) -> Option<bool> {
        self.toggled
    }

    /// Expanded state, for menu items, tree items and tree table rows.
    pub fn expanded(&self) -> Option<bool> {
        self.expanded
    }

    /// The most recent announcement made for this node.
    pub fn announcement(&self) -> Option<&Announcement> {
        self.announcement.as_ref()
    }

    /// Key of this node's companion, if it has one.
    pub fn companion(&self) -> Option<NodeKey> {
        self.companion
    }

    /// Key of the node this companion belongs to, if it is one.
    pub fn companion_of(&self) -> Option<NodeKey> {
        self.companion_of
    }
}
