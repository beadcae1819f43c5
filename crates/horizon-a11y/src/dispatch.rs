//! Notification dispatch.
//!
//! Every notification here is one-way: it returns nothing and never fails.
//! Notifications about widgets without an accessible node are dropped, with a
//! trace, because those widgets are invisible to assistive technology.

use horizon_a11y_core::logging::targets;
use horizon_a11y_core::{
    ControlActivationEvent, FocusEvent, Item, MenuChangeEvent, NotificationKind,
    ProgressBarValueChangedEvent, Selection, SelectionEvent, SelectionKind, StructureChange,
    TextBoxSelection, TextChangeEvent, TextControl, TextFieldSelection, TreeChangeEvent,
    TreeTableChangeEvent, WidgetId, WindowFocusEvent,
};

use crate::bridge::{Bridge, HookPoint};
use crate::node::{AccessibleNode, Announcement, NodeKey};

impl Bridge {
    /// A widget's name changed.
    pub fn name_changed(&mut self, item: &dyn Item) {
        let name = item.name();
        self.update_node(item.id(), "name changed", |node| node.label = name);
    }

    /// A widget's description changed.
    pub fn description_changed(&mut self, item: &dyn Item) {
        let description = item.description();
        self.update_node(item.id(), "description changed", |node| {
            node.description = description;
        });
    }

    /// The text of a text box or text field changed.
    ///
    /// Both controls expose their current text as the node's description.
    pub fn text_changed(&mut self, event: &TextChangeEvent) {
        match &event.control {
            TextControl::TextBox { id, text } | TextControl::TextField { id, text } => {
                let text = text.clone();
                self.update_node(*id, "text changed", |node| node.description = text);
            }
            TextControl::Other(id) => {
                self.acknowledge(HookPoint::TextChanged(*id));
            }
        }
    }

    /// A password field's masked contents changed.
    pub fn password_updated(&mut self, item: &dyn Item) {
        self.acknowledge(HookPoint::PasswordUpdated(item.id()));
    }

    /// A progress bar moved.
    pub fn progress_value_changed(&mut self, event: &ProgressBarValueChangedEvent) {
        let value = event.new_value;
        self.update_node(event.progress_bar, "progress value changed", |node| {
            node.numeric_value = Some(value);
        });
    }

    /// A checkbox, radio button or toggle button changed state.
    pub fn toggle_state_changed(&mut self, item: &dyn Item, toggled: bool) {
        self.update_node(item.id(), "toggle state changed", |node| {
            node.toggled = Some(toggled);
        });
    }

    /// A button was pressed within the widget framework.
    pub fn button_activated(&mut self, item: &dyn Item) {
        self.acknowledge(HookPoint::ButtonActivated(item.id()));
    }

    /// A control was activated within the widget framework.
    pub fn control_activated(&mut self, event: &ControlActivationEvent) {
        self.acknowledge(HookPoint::ControlActivated(event.control));
    }

    /// The application window gained or lost focus.
    pub fn window_focus_changed(&mut self, event: &WindowFocusEvent) {
        self.acknowledge(HookPoint::WindowFocusChanged(event.focused));
    }

    /// A menu item changed structurally.
    pub fn menu_changed(&mut self, event: &MenuChangeEvent) {
        self.structure_changed(event.menu_item, event.change, "menu changed");
    }

    /// A tree item changed structurally.
    pub fn tree_changed(&mut self, event: &TreeChangeEvent) {
        self.structure_changed(event.tree_item, event.change, "tree changed");
    }

    /// A tree table row changed structurally.
    pub fn tree_table_changed(&mut self, event: &TreeTableChangeEvent) {
        self.structure_changed(event.row, event.change, "tree table changed");
    }

    /// Announce `text` on behalf of a widget.
    pub fn notify(&mut self, item: &dyn Item, text: &str, kind: NotificationKind) {
        let announcement = Announcement {
            text: text.to_string(),
            politeness: kind.into(),
        };
        self.update_node(item.id(), "notify", |node| {
            node.announcement = Some(announcement);
        });
    }

    /// Keyboard focus moved.
    ///
    /// Records the new focus and points the root container's active
    /// descendant at it. No widget node is modified.
    pub fn focus_changed(&mut self, event: &FocusEvent) {
        self.focus = event.new_focus;
        self.tree.set_active_descendant(event.new_focus);
        tracing::trace!(
            target: targets::DISPATCH,
            focus = ?event.new_focus.map(WidgetId::as_raw),
            "focus changed"
        );
    }

    /// A selection changed.
    ///
    /// Text field selections are mirrored into the field's live companion.
    /// Every other kind reaches its own hook path without touching the tree.
    pub fn selection_changed(&mut self, event: &SelectionEvent) {
        let selection = &event.selection;
        let route = match selection {
            Selection::TextBox(selection) => {
                self.text_box_selection_changed(selection);
                SelectionKind::TextBox
            }
            Selection::TextField(selection) => {
                self.text_field_selection_changed(selection);
                SelectionKind::TextField
            }
            Selection::TabPane(_) => SelectionKind::TabPane,
            Selection::Menu(_) => SelectionKind::Menu,
            Selection::Tree(_) => SelectionKind::Tree,
            Selection::Spreadsheet(_) => SelectionKind::Spreadsheet,
            Selection::List(_) => SelectionKind::List,
            Selection::TreeTable(_) => SelectionKind::TreeTable,
            Selection::ButtonGroup(_) => SelectionKind::ButtonGroup,
            Selection::Other => SelectionKind::Other,
        };

        if self.config.log_notifications {
            tracing::trace!(target: targets::DISPATCH, route = ?route, "selection changed");
        }

        for hook in &mut self.selection_hooks {
            hook(route, selection);
        }
    }

    fn text_box_selection_changed(&self, selection: &TextBoxSelection) {
        if selection.text_box.is_none() {
            tracing::trace!(target: targets::DISPATCH, "text box selection without a text box");
        }
    }

    fn text_field_selection_changed(&mut self, selection: &TextFieldSelection) {
        let Some(field) = selection.text_field else {
            tracing::trace!(target: targets::DISPATCH, "text field selection without a text field");
            return;
        };
        if !self.registry.is_registered(field) {
            self.dropped("text field selection", field);
            return;
        }

        let text = selection.text.clone();
        match self.tree.node_mut(NodeKey::Selection(field)) {
            Some(companion) => companion.value = Some(text),
            None => tracing::trace!(
                target: targets::DISPATCH,
                widget = %field,
                "selected widget has no selection companion"
            ),
        }
    }

    fn structure_changed(&mut self, id: WidgetId, change: StructureChange, what: &'static str) {
        match change {
            StructureChange::Expanded => {
                self.update_node(id, what, |node| node.expanded = Some(true));
            }
            StructureChange::Collapsed => {
                self.update_node(id, what, |node| node.expanded = Some(false));
            }
            StructureChange::ItemAdded | StructureChange::ItemRemoved => {
                self.acknowledge(HookPoint::StructureChanged { widget: id, change });
            }
        }
    }

    /// Apply `update` to the primary node of `id`, or drop the notification.
    fn update_node(
        &mut self,
        id: WidgetId,
        what: &'static str,
        update: impl FnOnce(&mut AccessibleNode),
    ) {
        if !self.registry.is_registered(id) {
            self.dropped(what, id);
            return;
        }
        match self.tree.node_mut(NodeKey::Widget(id)) {
            Some(node) => {
                update(node);
                if self.config.log_notifications {
                    tracing::trace!(target: targets::DISPATCH, widget = %id, "{what}");
                }
            }
            None => self.dropped(what, id),
        }
    }

    /// A notification with no node mutation. Reaches the notification hooks
    /// unless it targets a widget without an accessible node.
    fn acknowledge(&mut self, point: HookPoint) {
        if let Some(id) = point.widget()
            && !self.registry.is_registered(id)
        {
            self.dropped(point.name(), id);
            return;
        }
        if self.config.log_notifications {
            tracing::trace!(target: targets::DISPATCH, ?point, "{}", point.name());
        }
        for hook in &mut self.notification_hooks {
            hook(&point);
        }
    }

    fn dropped(&self, what: &'static str, id: WidgetId) {
        tracing::trace!(
            target: targets::DISPATCH,
            widget = %id,
            "dropping {what} for a widget without an accessible node"
        );
    }
}
