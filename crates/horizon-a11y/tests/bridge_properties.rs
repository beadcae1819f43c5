//! End-to-end properties of the accessibility bridge, driven through the
//! public API only.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use accesskit::{Action, ActionRequest};
use horizon_a11y::{AccessibleRole, Bridge, BridgeConfig, NodeKey, Politeness};
use horizon_a11y_core::{
    AccessibilityCode, Activation, FocusEvent, Item, ItemSelection, NOT_ACCESSIBLE, Selection,
    SelectionEvent, SelectionKind, TextBoxSelection, TextChangeEvent, TextControl,
    TextFieldSelection, WidgetId,
};

struct Widget {
    id: WidgetId,
    name: String,
    code: i32,
    activations: RefCell<Vec<Activation>>,
}

impl Item for Widget {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn accessibility_code(&self) -> i32 {
        self.code
    }

    fn activate(&self, activation: Activation) {
        self.activations.borrow_mut().push(activation);
    }
}

fn widget(raw: u64, name: &str, code: i32) -> Rc<Widget> {
    Rc::new(Widget {
        id: WidgetId::new(raw),
        name: name.to_string(),
        code,
        activations: RefCell::new(Vec::new()),
    })
}

fn as_item(widget: &Rc<Widget>) -> Rc<dyn Item> {
    widget.clone()
}

fn setup() -> Bridge {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_a11y=trace")
        .with_test_writer()
        .try_init();
    Bridge::new(BridgeConfig::with_root(u64::MAX))
}

#[test]
fn test_idempotent_add() {
    let mut bridge = setup();
    let button = widget(1, "Apply", AccessibilityCode::Button.as_raw());
    let item = as_item(&button);

    bridge.add(&item);
    let first = bridge.tree_update();
    bridge.add(&item);
    bridge.add(&item);

    assert_eq!(bridge.registered_count(), 1);
    assert_eq!(bridge.tree().len(), 1);
    assert_eq!(bridge.tree_update().nodes, first.nodes);
}

#[test]
fn test_idempotent_remove() {
    let mut bridge = setup();
    let list = widget(1, "Inbox", AccessibilityCode::List.as_raw());
    let other = widget(2, "Outbox", AccessibilityCode::List.as_raw());
    bridge.add(&as_item(&list));
    bridge.add(&as_item(&other));

    bridge.remove(list.as_ref());
    bridge.remove(list.as_ref());
    bridge.remove_id(WidgetId::new(404));

    assert!(!bridge.is_registered(list.id));
    assert_eq!(
        bridge.tree().root().children(),
        &[NodeKey::Widget(other.id)]
    );
}

#[test]
fn test_accessibility_gating() {
    let mut bridge = setup();
    let hidden = widget(1, "Spacer", NOT_ACCESSIBLE);
    bridge.add(&as_item(&hidden));

    bridge.name_changed(hidden.as_ref());
    bridge.text_changed(&TextChangeEvent {
        control: TextControl::TextField {
            id: hidden.id,
            text: "ignored".into(),
        },
    });
    bridge.focus_changed(&FocusEvent::gained(hidden.id));
    bridge.remove(hidden.as_ref());

    assert!(bridge.tree().is_empty());
    assert_eq!(bridge.registered_count(), 0);
    assert_eq!(bridge.tree_update().nodes.len(), 1);
}

#[test]
fn test_role_totality() {
    let mut bridge = setup();
    let codes = AccessibilityCode::ALL
        .iter()
        .map(|code| code.as_raw())
        .filter(|code| *code != NOT_ACCESSIBLE)
        .chain([0, 26, 1000, i32::MAX]);

    let mut expected = 0;
    for (raw, code) in codes.enumerate() {
        let item = widget(raw as u64, "w", code);
        bridge.add(&as_item(&item));
        assert!(bridge.node(NodeKey::Widget(item.id)).is_some(), "code {code}");
        expected += if code == AccessibilityCode::TextField.as_raw() { 2 } else { 1 };
    }
    assert_eq!(bridge.tree().len(), expected);

    for unknown in [0, 26, 1000, i32::MAX] {
        assert_eq!(horizon_a11y::classify(unknown).role, AccessibleRole::Region);
    }
}

#[test]
fn test_text_field_has_two_nodes() {
    let mut bridge = setup();
    let field = widget(9, "Email", AccessibilityCode::TextField.as_raw());
    bridge.add(&as_item(&field));

    let companion = NodeKey::Selection(field.id);
    assert_eq!(
        bridge.tree().root().children(),
        &[NodeKey::Widget(field.id), companion]
    );
    assert_eq!(companion.to_string(), "9-selection");
    assert_eq!(
        bridge.node(companion).and_then(|node| node.live()),
        Some(Politeness::Polite)
    );

    bridge.remove(field.as_ref());
    assert!(bridge.tree().is_empty());
}

#[test]
fn test_focus_routing() {
    let mut bridge = setup();
    let first = widget(1, "First", AccessibilityCode::Button.as_raw());
    let second = widget(2, "Second", AccessibilityCode::Button.as_raw());
    bridge.add(&as_item(&first));
    bridge.add(&as_item(&second));
    let before = bridge.tree_update().nodes;

    bridge.focus_changed(&FocusEvent::gained(first.id));
    bridge.focus_changed(&FocusEvent {
        old_focus: Some(first.id),
        new_focus: Some(second.id),
    });

    assert_eq!(bridge.focus(), Some(second.id));
    assert_eq!(bridge.tree().root().active_descendant(), Some(second.id));
    for key in [NodeKey::Widget(first.id), NodeKey::Widget(second.id)] {
        assert!(!bridge.node(key).unwrap().is_keyboard_focusable());
    }

    let update = bridge.tree_update();
    let second_id = bridge.tree().node_id(NodeKey::Widget(second.id)).unwrap();
    assert_eq!(update.focus, second_id);
    // Only the root changes.
    assert_eq!(update.nodes[1..], before[1..]);
}

#[test]
fn test_shutdown_completeness() {
    let mut empty = setup();
    empty.shutdown();
    assert!(empty.tree().is_empty());

    let mut bridge = setup();
    let widgets: Vec<_> = (0..25)
        .map(|raw| widget(raw, "w", AccessibilityCode::TextField.as_raw()))
        .collect();
    for w in &widgets {
        bridge.add(&as_item(w));
    }
    bridge.focus_changed(&FocusEvent::gained(widgets[3].id));
    assert_eq!(bridge.tree().len(), 50);

    bridge.shutdown();

    assert!(bridge.tree().root().children().is_empty());
    assert_eq!(bridge.registered_count(), 0);
    assert!(bridge.focus().is_none());
    let update = bridge.tree_update();
    assert_eq!(update.nodes.len(), 1);
    assert_eq!(update.focus, bridge.tree().root().id());
}

#[test]
fn test_selection_dispatch_coverage() {
    let mut bridge = setup();
    let field = widget(1, "Find", AccessibilityCode::TextField.as_raw());
    let text_box = widget(2, "Notes", AccessibilityCode::TextBox.as_raw());
    bridge.add(&as_item(&field));
    bridge.add(&as_item(&text_box));

    let routes = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&routes);
    bridge.on_selection(move |route, _| recorded.borrow_mut().push(route));

    let item = ItemSelection::default();
    let selections = [
        Selection::TextBox(TextBoxSelection {
            text_box: Some(text_box.id),
            start: 0,
            end: 2,
            text: "no".into(),
        }),
        Selection::TextField(TextFieldSelection {
            text_field: Some(field.id),
            start: 1,
            end: 3,
            text: "in".into(),
        }),
        Selection::TabPane(item),
        Selection::Menu(item),
        Selection::Tree(item),
        Selection::Spreadsheet(item),
        Selection::List(item),
        Selection::TreeTable(item),
        Selection::ButtonGroup(item),
        Selection::Other,
    ];

    for selection in selections {
        let kind = selection.kind();
        let before = routes.borrow().len();
        bridge.selection_changed(&SelectionEvent::new(selection));
        assert_eq!(routes.borrow()[before..], [kind]);
    }
    assert_eq!(*routes.borrow(), SelectionKind::ALL);

    let companion = bridge.node(NodeKey::Selection(field.id)).unwrap();
    assert_eq!(companion.value(), Some("in"));
    let field_node = bridge.node(NodeKey::Widget(field.id)).unwrap();
    assert_eq!(field_node.description(), "");
    let text_box_node = bridge.node(NodeKey::Widget(text_box.id)).unwrap();
    assert_eq!(text_box_node.description(), "");
    assert!(text_box_node.value().is_none());
}

#[test]
fn test_activation_routing() {
    let mut bridge = setup();
    let toggle = widget(1, "Bold", AccessibilityCode::ToggleButton.as_raw());
    let label = widget(2, "Title", AccessibilityCode::Pane.as_raw());
    bridge.add(&as_item(&toggle));
    bridge.add(&as_item(&label));

    let click = |key| ActionRequest {
        action: Action::Click,
        target: bridge.tree().node_id(key).unwrap(),
        data: None,
    };

    let pending = bridge.handle_action(&click(NodeKey::Widget(toggle.id)));
    assert!(bridge.try_handle_action(&click(NodeKey::Widget(label.id))).is_err());
    assert!(toggle.activations.borrow().is_empty());

    pending.unwrap().run();

    assert_eq!(*toggle.activations.borrow(), vec![Activation::Toggle]);
    assert!(label.activations.borrow().is_empty());
}

/// A toggle that reports its new state to the bridge while being activated.
struct SelfReportingToggle {
    id: WidgetId,
    checked: Cell<bool>,
    bridge: Weak<RefCell<Bridge>>,
}

impl Item for SelfReportingToggle {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn name(&self) -> String {
        "Wrap lines".into()
    }

    fn accessibility_code(&self) -> i32 {
        AccessibilityCode::CheckBox.as_raw()
    }

    fn activate(&self, _activation: Activation) {
        self.checked.set(!self.checked.get());
        if let Some(bridge) = self.bridge.upgrade() {
            bridge.borrow_mut().toggle_state_changed(self, self.checked.get());
        }
    }
}

#[test]
fn test_activation_may_notify_the_bridge() {
    let bridge = Rc::new(RefCell::new(setup()));
    let toggle = Rc::new(SelfReportingToggle {
        id: WidgetId::new(1),
        checked: Cell::new(false),
        bridge: Rc::downgrade(&bridge),
    });
    let item: Rc<dyn Item> = toggle.clone();
    bridge.borrow_mut().add(&item);

    let key = NodeKey::Widget(toggle.id);
    let request = ActionRequest {
        action: Action::Click,
        target: bridge.borrow().tree().node_id(key).unwrap(),
        data: None,
    };

    for expected in [true, false] {
        let pending = bridge.borrow().handle_action(&request);
        pending.unwrap().run();

        assert_eq!(toggle.checked.get(), expected);
        assert_eq!(bridge.borrow().node(key).unwrap().toggled(), Some(expected));
    }
}
