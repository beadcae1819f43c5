//! Boundary types for the Horizon accessibility bridge.
//!
//! This crate describes everything the bridge consumes from the widget
//! framework, without depending on the bridge itself:
//!
//! - **Identity**: [`WidgetId`], the stable key for a widget
//! - **Classification**: [`AccessibilityCode`], the closed set of widget kinds
//! - **Widgets**: the [`Item`] trait and the [`Activation`]s routed back to them
//! - **Notifications**: selection, text, focus and structure payloads in [`event`]
//! - **Logging**: tracing targets and helper macros in [`logging`]
//!
//! # Example
//!
//! ```
//! use horizon_a11y_core::event::{Selection, SelectionEvent, SelectionKind, TextFieldSelection};
//! use horizon_a11y_core::WidgetId;
//!
//! let event = SelectionEvent::new(Selection::TextField(TextFieldSelection {
//!     text_field: Some(WidgetId::new(12)),
//!     start: 0,
//!     end: 5,
//!     text: "hello".into(),
//! }));
//!
//! assert_eq!(event.selection.kind(), SelectionKind::TextField);
//! ```

pub mod event;
mod item;
pub mod logging;

pub use event::{
    ControlActivationEvent, FocusEvent, ItemSelection, MenuChangeEvent, NotificationKind,
    ProgressBarValueChangedEvent, Selection, SelectionEvent, SelectionKind, StructureChange,
    TextBoxSelection, TextChangeEvent, TextControl, TextFieldSelection, TreeChangeEvent,
    TreeTableChangeEvent, WindowFocusEvent,
};
pub use item::{
    AccessibilityCode, Activation, Item, NOT_ACCESSIBLE, UnknownAccessibilityCode, WidgetId,
};
