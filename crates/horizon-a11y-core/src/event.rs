//! Notification payloads raised by the widget framework.
//!
//! Selection and change payloads form closed sets, so they are modelled as
//! enums and consumers match on them exhaustively.

use crate::item::WidgetId;

/// Which concrete selection shape a [`Selection`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionKind {
    /// Text selected in a multi-line text box.
    TextBox,
    /// Text selected in a single-line text field.
    TextField,
    /// The selected tab changed.
    TabPane,
    /// The highlighted menu item changed.
    Menu,
    /// The selected tree item changed.
    Tree,
    /// The selected spreadsheet cell changed.
    Spreadsheet,
    /// The selected list item changed.
    List,
    /// The selected tree table row changed.
    TreeTable,
    /// The checked button in a button group changed.
    ButtonGroup,
    /// A selection the bridge has no specific handling for.
    Other,
}

impl SelectionKind {
    /// Every kind, including [`SelectionKind::Other`].
    pub const ALL: [Self; 10] = [
        Self::TextBox,
        Self::TextField,
        Self::TabPane,
        Self::Menu,
        Self::Tree,
        Self::Spreadsheet,
        Self::List,
        Self::TreeTable,
        Self::ButtonGroup,
        Self::Other,
    ];
}

/// Selection inside a text box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBoxSelection {
    /// The text box, if the selection is still attached to one.
    pub text_box: Option<WidgetId>,
    /// Start offset of the selection.
    pub start: usize,
    /// End offset of the selection.
    pub end: usize,
    /// The selected text.
    pub text: String,
}

/// Selection inside a text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFieldSelection {
    /// The text field, if the selection is still attached to one.
    pub text_field: Option<WidgetId>,
    /// Start offset of the selection.
    pub start: usize,
    /// End offset of the selection.
    pub end: usize,
    /// The selected text.
    pub text: String,
}

/// Selection of an item within a container widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemSelection {
    /// The container that owns the selection.
    pub container: Option<WidgetId>,
    /// The newly selected item, if any.
    pub selected: Option<WidgetId>,
}

/// A selection payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// See [`SelectionKind::TextBox`].
    TextBox(TextBoxSelection),
    /// See [`SelectionKind::TextField`].
    TextField(TextFieldSelection),
    /// See [`SelectionKind::TabPane`].
    TabPane(ItemSelection),
    /// See [`SelectionKind::Menu`].
    Menu(ItemSelection),
    /// See [`SelectionKind::Tree`].
    Tree(ItemSelection),
    /// See [`SelectionKind::Spreadsheet`].
    Spreadsheet(ItemSelection),
    /// See [`SelectionKind::List`].
    List(ItemSelection),
    /// See [`SelectionKind::TreeTable`].
    TreeTable(ItemSelection),
    /// See [`SelectionKind::ButtonGroup`].
    ButtonGroup(ItemSelection),
    /// See [`SelectionKind::Other`].
    Other,
}

impl Selection {
    /// The discriminant of this selection.
    pub fn kind(&self) -> SelectionKind {
        match self {
            Self::TextBox(_) => SelectionKind::TextBox,
            Self::TextField(_) => SelectionKind::TextField,
            Self::TabPane(_) => SelectionKind::TabPane,
            Self::Menu(_) => SelectionKind::Menu,
            Self::Tree(_) => SelectionKind::Tree,
            Self::Spreadsheet(_) => SelectionKind::Spreadsheet,
            Self::List(_) => SelectionKind::List,
            Self::TreeTable(_) => SelectionKind::TreeTable,
            Self::ButtonGroup(_) => SelectionKind::ButtonGroup,
            Self::Other => SelectionKind::Other,
        }
    }
}

/// A selection changed somewhere in the widget tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEvent {
    /// The new selection.
    pub selection: Selection,
}

impl SelectionEvent {
    /// Wrap a selection payload.
    pub fn new(selection: Selection) -> Self {
        Self { selection }
    }
}

/// The control whose text changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextControl {
    /// A multi-line text box and its current text.
    TextBox {
        /// The text box.
        id: WidgetId,
        /// The full current text.
        text: String,
    },
    /// A single-line text field and its current text.
    TextField {
        /// The text field.
        id: WidgetId,
        /// The full current text.
        text: String,
    },
    /// Some other control, if any.
    Other(Option<WidgetId>),
}

/// The text of an editable control changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChangeEvent {
    /// The control that changed.
    pub control: TextControl,
}

/// A progress bar moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressBarValueChangedEvent {
    /// The progress bar.
    pub progress_bar: WidgetId,
    /// The previous value.
    pub old_value: f64,
    /// The new value.
    pub new_value: f64,
}

/// Keyboard focus moved between widgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusEvent {
    /// The widget that lost focus.
    pub old_focus: Option<WidgetId>,
    /// The widget that gained focus.
    pub new_focus: Option<WidgetId>,
}

impl FocusEvent {
    /// Focus moved to `widget`.
    pub fn gained(widget: WidgetId) -> Self {
        Self {
            old_focus: None,
            new_focus: Some(widget),
        }
    }
}

/// The application window gained or lost focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFocusEvent {
    /// Whether the window now has focus.
    pub focused: bool,
}

/// A control was activated from within the widget framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlActivationEvent {
    /// The activated control.
    pub control: WidgetId,
}

/// Structural change to a menu, tree or tree table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureChange {
    /// The item was expanded.
    Expanded,
    /// The item was collapsed.
    Collapsed,
    /// A child was added to the item.
    ItemAdded,
    /// A child was removed from the item.
    ItemRemoved,
}

/// A menu item changed structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuChangeEvent {
    /// The affected menu item.
    pub menu_item: WidgetId,
    /// What happened.
    pub change: StructureChange,
}

/// A tree item changed structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeChangeEvent {
    /// The affected tree item.
    pub tree_item: WidgetId,
    /// What happened.
    pub change: StructureChange,
}

/// A tree table row changed structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeTableChangeEvent {
    /// The affected row.
    pub row: WidgetId,
    /// What happened.
    pub change: StructureChange,
}

/// How urgently an announcement should interrupt the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Announce when the assistive technology is idle.
    #[default]
    Polite,
    /// Announce immediately.
    Assertive,
}
