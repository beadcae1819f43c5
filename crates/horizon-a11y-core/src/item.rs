//! Widget identity and classification as seen from the accessibility side.
//!
//! The widget framework owns its widgets. The bridge only ever sees them
//! through the [`Item`] trait: a stable [`WidgetId`], a name, a description
//! and a raw accessibility code drawn from [`AccessibilityCode`].

use std::fmt;

/// Raw code reported by widgets that must never appear in the accessibility tree.
pub const NOT_ACCESSIBLE: i32 = -1;

/// Stable identity of a widget.
///
/// This is the widget framework's hash code for the item. It stays the same
/// for the lifetime of the widget and is the only key the bridge uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Create a widget id from the framework's raw identity.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw identity.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for WidgetId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of accessibility classifications a widget can report.
///
/// Discriminants are the raw codes used on the wire between the widget
/// framework and the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum AccessibilityCode {
    /// The widget opts out of the accessibility tree.
    NotAccessible = -1,
    /// A custom-drawn widget.
    Custom = 1,
    /// A checkbox.
    CheckBox = 2,
    /// A radio button within a group.
    RadioButton = 3,
    /// A push button.
    Button = 4,
    /// A button that stays pressed.
    ToggleButton = 5,
    /// A multi-line text box.
    TextBox = 6,
    /// A menu bar.
    MenuBar = 7,
    /// An item within a menu.
    MenuItem = 8,
    /// A layout pane.
    Pane = 9,
    /// A tree view.
    Tree = 10,
    /// An item within a tree.
    TreeItem = 11,
    /// A toolbar.
    ToolBar = 12,
    /// A single tab.
    Tab = 13,
    /// A tab pane.
    TabPane = 14,
    /// A table.
    Table = 15,
    /// A cell within a table.
    Cell = 16,
    /// A single-line text field.
    TextField = 17,
    /// A list.
    List = 18,
    /// An item within a list.
    ListItem = 19,
    /// A tree table.
    TreeTable = 20,
    /// A dialog.
    Dialog = 21,
    /// A popup menu.
    PopupMenu = 22,
    /// A progress bar.
    ProgressBar = 23,
    /// A cell within a tree table.
    TreeTableCell = 24,
    /// A group of related widgets.
    Group = 25,
}

impl AccessibilityCode {
    /// Every classification, in code order.
    pub const ALL: [Self; 26] = [
        Self::NotAccessible,
        Self::Custom,
        Self::CheckBox,
        Self::RadioButton,
        Self::Button,
        Self::ToggleButton,
        Self::TextBox,
        Self::MenuBar,
        Self::MenuItem,
        Self::Pane,
        Self::Tree,
        Self::TreeItem,
        Self::ToolBar,
        Self::Tab,
        Self::TabPane,
        Self::Table,
        Self::Cell,
        Self::TextField,
        Self::List,
        Self::ListItem,
        Self::TreeTable,
        Self::Dialog,
        Self::PopupMenu,
        Self::ProgressBar,
        Self::TreeTableCell,
        Self::Group,
    ];

    /// Look up the classification for a raw code.
    ///
    /// Returns `None` for codes outside the enumeration.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        Some(match raw {
            -1 => Self::NotAccessible,
            1 => Self::Custom,
            2 => Self::CheckBox,
            3 => Self::RadioButton,
            4 => Self::Button,
            5 => Self::ToggleButton,
            6 => Self::TextBox,
            7 => Self::MenuBar,
            8 => Self::MenuItem,
            9 => Self::Pane,
            10 => Self::Tree,
            11 => Self::TreeItem,
            12 => Self::ToolBar,
            13 => Self::Tab,
            14 => Self::TabPane,
            15 => Self::Table,
            16 => Self::Cell,
            17 => Self::TextField,
            18 => Self::List,
            19 => Self::ListItem,
            20 => Self::TreeTable,
            21 => Self::Dialog,
            22 => Self::PopupMenu,
            23 => Self::ProgressBar,
            24 => Self::TreeTableCell,
            25 => Self::Group,
            _ => return None,
        })
    }

    /// Get the raw code.
    #[inline]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Whether widgets with this classification get an accessible node.
    #[inline]
    pub const fn is_accessible(self) -> bool {
        !matches!(self, Self::NotAccessible)
    }
}

impl TryFrom<i32> for AccessibilityCode {
    type Error = UnknownAccessibilityCode;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or(UnknownAccessibilityCode(raw))
    }
}

impl From<AccessibilityCode> for i32 {
    fn from(code: AccessibilityCode) -> Self {
        code.as_raw()
    }
}

/// A raw accessibility code outside the known enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownAccessibilityCode(pub i32);

impl fmt::Display for UnknownAccessibilityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown accessibility code {}", self.0)
    }
}

impl std::error::Error for UnknownAccessibilityCode {}

/// An activation the bridge routes back to a widget.
///
/// This is the only direction in which the bridge originates a call toward
/// the widget framework: an assistive technology clicked an accessible node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    /// Press a push button.
    Invoke,
    /// Flip a checkbox, radio button or toggle button.
    Toggle,
}

/// A widget as exposed to the accessibility bridge.
///
/// # Example
///
/// ```
/// use horizon_a11y_core::{AccessibilityCode, Item, WidgetId};
///
/// struct Label {
///     id: WidgetId,
///     text: String,
/// }
///
/// impl Item for Label {
///     fn id(&self) -> WidgetId {
///         self.id
///     }
///
///     fn name(&self) -> String {
///         self.text.clone()
///     }
///
///     fn accessibility_code(&self) -> i32 {
///         AccessibilityCode::Group.as_raw()
///     }
/// }
///
/// let label = Label { id: WidgetId::new(7), text: "Status".into() };
/// assert!(label.is_accessible());
/// assert_eq!(label.accessibility_kind(), Some(AccessibilityCode::Group));
/// ```
pub trait Item {
    /// Stable identity of this widget.
    fn id(&self) -> WidgetId;

    /// Human-readable name, announced as the accessible label.
    fn name(&self) -> String;

    /// Longer description of the widget.
    fn description(&self) -> String {
        String::new()
    }

    /// Raw accessibility code. [`NOT_ACCESSIBLE`] keeps the widget out of the tree.
    fn accessibility_code(&self) -> i32;

    /// Route an activation from the accessibility tree back into the widget.
    fn activate(&self, activation: Activation) {
        let _ = activation;
    }

    /// The classification for [`Item::accessibility_code`], if it is a known code.
    fn accessibility_kind(&self) -> Option<AccessibilityCode> {
        AccessibilityCode::from_raw(self.accessibility_code())
    }

    /// Whether this widget participates in the accessibility tree.
    fn is_accessible(&self) -> bool {
        self.accessibility_code() != NOT_ACCESSIBLE
    }
}
