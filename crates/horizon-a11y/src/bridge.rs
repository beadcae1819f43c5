//! The bridge context: registry, accessible tree and focus in one place.
//!
//! A [`Bridge`] is created at init and owns all state the bridge needs.
//! Every notification is a method call on it and completes before returning.
//! Nothing is scheduled or deferred.
//!
//! # Per-widget lifecycle
//!
//! ```text
//!   Unregistered --add--> Registered --remove / shutdown--> Unregistered
//! ```
//!
//! `add` while registered and `remove` while unregistered are no-ops, so
//! duplicate notifications are harmless.

use std::fmt;
use std::rc::Rc;

use accesskit::NodeId;
use horizon_a11y_core::logging::{span_names, targets};
use horizon_a11y_core::{
    Item, Selection, SelectionKind, StructureChange, WidgetId, a11y_debug, a11y_trace, a11y_warn,
};

use crate::classifier::{Classification, ConstructionRule, classify};
use crate::config::BridgeConfig;
use crate::node::{AccessibleNode, NodeKey};
use crate::registry::Registry;
use crate::tree::AccessibleTree;

/// Callback invoked for every selection notification with the path it took.
pub type SelectionHook = Box<dyn FnMut(SelectionKind, &Selection)>;

/// Callback invoked for every notification that changes no node.
pub type NotificationHook = Box<dyn FnMut(&HookPoint)>;

/// A notification the bridge acknowledges without touching the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPoint {
    /// A password field's masked contents changed.
    PasswordUpdated(WidgetId),
    /// A button was pressed within the widget framework.
    ButtonActivated(WidgetId),
    /// A control was activated within the widget framework.
    ControlActivated(WidgetId),
    /// The application window gained (`true`) or lost focus.
    WindowFocusChanged(bool),
    /// The text of a control other than a text box or text field changed.
    TextChanged(Option<WidgetId>),
    /// A child was added to or removed from a menu item, tree item or tree
    /// table row.
    StructureChanged {
        /// The item whose children changed.
        widget: WidgetId,
        /// [`StructureChange::ItemAdded`] or [`StructureChange::ItemRemoved`].
        change: StructureChange,
    },
}

impl HookPoint {
    /// The widget this notification is about, if any.
    pub fn widget(self) -> Option<WidgetId> {
        match self {
            HookPoint::PasswordUpdated(id)
            | HookPoint::ButtonActivated(id)
            | HookPoint::ControlActivated(id)
            | HookPoint::StructureChanged { widget: id, .. } => Some(id),
            HookPoint::TextChanged(id) => id,
            HookPoint::WindowFocusChanged(_) => None,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            HookPoint::PasswordUpdated(_) => "password updated",
            HookPoint::ButtonActivated(_) => "button activated",
            HookPoint::ControlActivated(_) => "control activated",
            HookPoint::WindowFocusChanged(_) => "window focus changed",
            HookPoint::TextChanged(_) => "text changed",
            HookPoint::StructureChanged { .. } => "structure changed",
        }
    }
}

/// Keeps an accessible tree in sync with a widget tree.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use horizon_a11y::{AccessibleRole, Bridge, NodeKey};
/// use horizon_a11y_core::{AccessibilityCode, Item, WidgetId};
///
/// struct Button;
///
/// impl Item for Button {
///     fn id(&self) -> WidgetId {
///         WidgetId::new(1)
///     }
///     fn name(&self) -> String {
///         "OK".into()
///     }
///     fn accessibility_code(&self) -> i32 {
///         AccessibilityCode::Button.as_raw()
///     }
/// }
///
/// let mut bridge = Bridge::default();
/// let button: Rc<dyn Item> = Rc::new(Button);
///
/// bridge.add(&button);
/// bridge.add(&button);
///
/// let node = bridge.node(NodeKey::Widget(WidgetId::new(1))).unwrap();
/// assert_eq!(node.role(), AccessibleRole::Button);
/// assert_eq!(node.label(), "OK");
/// assert_eq!(bridge.tree().len(), 1);
///
/// bridge.shutdown();
/// assert!(bridge.tree().is_empty());
/// ```
pub struct Bridge {
    pub(crate) config: BridgeConfig,
    pub(crate) registry: Registry,
    pub(crate) tree: AccessibleTree,
    pub(crate) focus: Option<WidgetId>,
    pub(crate) selection_hooks: Vec<SelectionHook>,
    pub(crate) notification_hooks: Vec<NotificationHook>,
}

impl Bridge {
    /// Create a bridge with no registered widgets and no focus.
    pub fn new(config: BridgeConfig) -> Self {
        let tree = AccessibleTree::new(NodeId(config.root_node_id), config.root_label.clone());
        a11y_debug!(root = config.root_node_id, "accessibility bridge initialized");
        Self {
            config,
            registry: Registry::new(),
            tree,
            focus: None,
            selection_hooks: Vec::new(),
            notification_hooks: Vec::new(),
        }
    }

    /// The configuration this bridge was created with.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// The accessible tree.
    pub fn tree(&self) -> &AccessibleTree {
        &self.tree
    }

    /// The node with `key`.
    pub fn node(&self, key: NodeKey) -> Option<&AccessibleNode> {
        self.tree.node(key)
    }

    /// Whether `id` is registered.
    pub fn is_registered(&self, id: WidgetId) -> bool {
        self.registry.is_registered(id)
    }

    /// Number of registered widgets.
    pub fn registered_count(&self) -> usize {
        self.registry.len()
    }

    /// The currently focused widget.
    pub fn focus(&self) -> Option<WidgetId> {
        self.focus
    }

    /// Subscribe to selection notifications.
    ///
    /// The hook runs once per notification with the handling path taken,
    /// after any node mutation.
    pub fn on_selection<F>(&mut self, hook: F)
    where
        F: FnMut(SelectionKind, &Selection) + 'static,
    {
        self.selection_hooks.push(Box::new(hook));
    }

    /// Subscribe to notifications that change no node.
    ///
    /// The hook runs once per notification. Notifications about widgets
    /// without an accessible node are dropped before reaching it.
    pub fn on_notification<F>(&mut self, hook: F)
    where
        F: FnMut(&HookPoint) + 'static,
    {
        self.notification_hooks.push(Box::new(hook));
    }

    /// A widget was added to the widget tree.
    ///
    /// Creates its accessible node (and companion, for text fields) unless
    /// the widget is not accessible or is already registered.
    pub fn add(&mut self, item: &Rc<dyn Item>) {
        let id = item.id();
        if !item.is_accessible() {
            a11y_trace!(widget = %id, "skipping inaccessible widget");
            return;
        }
        if self.registry.is_registered(id) {
            a11y_trace!(widget = %id, "widget already registered");
            return;
        }

        let _span = tracing::debug_span!(target: targets::BRIDGE, span_names::ADD, widget = %id)
            .entered();

        self.registry.register(id, item);

        let code = item.accessibility_code();
        let Classification { role, rule } = classify(code);
        let name = item.name();

        let mut node = AccessibleNode::new(role);
        node.label = name.clone();
        node.description = item.description();
        node.activation = rule.activation();

        let companion = match rule {
            ConstructionRule::RoleDescription(description) => {
                node.role_description = Some(description.to_string());
                None
            }
            ConstructionRule::RadioGroup => {
                node.group_name = Some(name.clone());
                None
            }
            ConstructionRule::LiveSelection => {
                node.companion = Some(NodeKey::Selection(id));
                Some(AccessibleNode::selection_companion(id))
            }
            ConstructionRule::Plain | ConstructionRule::Activatable(_) => None,
        };

        if !self.tree.attach(NodeKey::Widget(id), node) {
            a11y_warn!(widget = %id, "unregistered widget already had an accessible node");
        }
        if let Some(companion) = companion {
            self.tree.attach(NodeKey::Selection(id), companion);
        }

        a11y_debug!(
            widget = %id,
            code,
            role = role.aria_name(),
            name = %name,
            "added accessible node"
        );
    }

    /// A widget was removed from the widget tree.
    pub fn remove(&mut self, item: &dyn Item) {
        self.remove_id(item.id());
    }

    /// Remove the widget with `id` from the accessible tree.
    ///
    /// Detaches its node and companion, and clears focus if it held it.
    pub fn remove_id(&mut self, id: WidgetId) {
        if !self.registry.is_registered(id) {
            a11y_trace!(widget = %id, "widget not registered");
            return;
        }

        let _span =
            tracing::debug_span!(target: targets::BRIDGE, span_names::REMOVE, widget = %id)
                .entered();

        self.tree.detach(NodeKey::Widget(id));
        self.tree.detach(NodeKey::Selection(id));
        self.registry.unregister(id);

        if self.focus == Some(id) {
            self.focus = None;
            self.tree.set_active_descendant(None);
        }

        a11y_debug!(widget = %id, "removed accessible node");
    }

    /// Tear down all accessibility state.
    ///
    /// Detaches every child of the root even if the registry disagrees, then
    /// clears the registry and focus. Safe to call repeatedly.
    pub fn shutdown(&mut self) {
        let _span = tracing::debug_span!(target: targets::BRIDGE, span_names::SHUTDOWN).entered();

        let detached = self.tree.detach_all();
        let registered = self.registry.len();
        self.registry.clear();
        self.focus = None;
        self.tree.set_active_descendant(None);

        a11y_debug!(detached, registered, "accessibility bridge shut down");
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new(BridgeConfig::default())
    }
}

impl fmt::Debug for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bridge")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("nodes", &self.tree.len())
            .field("focus", &self.focus)
            .field("selection_hooks", &self.selection_hooks.len())
            .field("notification_hooks", &self.notification_hooks.len())
            .finish()
    }
}
