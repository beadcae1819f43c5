//! Horizon accessibility bridge.
//!
//! Keeps an accessible tree in sync with a live widget tree. The widget
//! framework reports what happens (widgets added and removed, text edited,
//! focus moved, selections changed) and the bridge maintains one accessible
//! node per accessible widget under a single root container.
//!
//! The tree can be exported as an AccessKit [`TreeUpdate`](accesskit::TreeUpdate)
//! with [`Bridge::tree_update`]. Action requests coming back from assistive
//! technology are resolved with [`Bridge::handle_action`] into a
//! [`PendingActivation`], which the host runs once it has released the
//! bridge. With the `platform` feature, `PlatformAdapter` wires both ends to a
//! winit window.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use horizon_a11y::{Bridge, BridgeConfig, NodeKey};
//! use horizon_a11y_core::{AccessibilityCode, Item, Selection, SelectionEvent,
//!     TextFieldSelection, WidgetId};
//!
//! struct Field;
//!
//! impl Item for Field {
//!     fn id(&self) -> WidgetId {
//!         WidgetId::new(7)
//!     }
//!     fn name(&self) -> String {
//!         "Search".into()
//!     }
//!     fn accessibility_code(&self) -> i32 {
//!         AccessibilityCode::TextField.as_raw()
//!     }
//! }
//!
//! let mut bridge = Bridge::new(BridgeConfig::with_root(1000));
//! let field: Rc<dyn Item> = Rc::new(Field);
//! bridge.add(&field);
//!
//! bridge.selection_changed(&SelectionEvent::new(Selection::TextField(TextFieldSelection {
//!     text_field: Some(field.id()),
//!     start: 0,
//!     end: 4,
//!     text: "rust".into(),
//! })));
//!
//! let companion = bridge.node(NodeKey::Selection(field.id())).unwrap();
//! assert_eq!(companion.value(), Some("rust"));
//! assert_eq!(bridge.tree_update().nodes.len(), 3);
//! ```

mod bridge;
mod classifier;
mod config;
mod dispatch;
mod error;
mod export;
mod node;
#[cfg(feature = "platform")]
mod platform;
mod registry;
mod role;
mod tree;

pub use bridge::{Bridge, HookPoint, NotificationHook, SelectionHook};
pub use classifier::{
    CUSTOM_ROLE_DESCRIPTION, Classification, ConstructionRule, classify, classify_code,
    classify_strict,
};
pub use config::{BridgeConfig, DEFAULT_ROOT_LABEL};
pub use error::{Error, Result};
pub use export::{NodeBuilder, PendingActivation};
pub use node::{AccessibleNode, Announcement, NodeKey, Politeness, SELECTION_SUFFIX};
#[cfg(feature = "platform")]
pub use platform::PlatformAdapter;
pub use registry::Registry;
pub use role::AccessibleRole;
pub use tree::{AccessibleTree, RootContainer};

pub use accesskit;
pub use horizon_a11y_core;
