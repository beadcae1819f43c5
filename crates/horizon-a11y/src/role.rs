//! Accessibility roles for accessible nodes.

use accesskit::Role;

/// The accessibility role of an accessible node.
///
/// This is the small set of roles the bridge assigns. Each role has a stable
/// ARIA name and maps onto AccessKit's `Role` for the platform surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessibleRole {
    /// A generic region. Used for unknown kinds and plain containers.
    #[default]
    Region,

    /// A checkbox that can be checked or unchecked.
    CheckBox,

    /// A radio button (mutually exclusive selection).
    Radio,

    /// A push or toggle button.
    Button,

    /// A text input, single or multi-line.
    TextBox,

    /// A menu bar.
    MenuBar,

    /// A menu item.
    MenuItem,

    /// A tree view.
    Tree,

    /// An item within a tree.
    TreeItem,

    /// A toolbar.
    ToolBar,

    /// A single tab.
    Tab,

    /// The content panel of a tab.
    TabPanel,

    /// A table.
    Table,

    /// A cell within a table.
    Cell,

    /// A list of items.
    List,

    /// An item within a list.
    ListItem,

    /// A tree table.
    TreeGrid,

    /// A dialog box.
    Dialog,

    /// A progress indicator.
    ProgressBar,

    /// A group of related widgets.
    Group,

    /// A node with no semantics of its own, such as a live companion.
    Generic,
}

impl AccessibleRole {
    /// The ARIA role name.
    pub const fn aria_name(self) -> &'static str {
        match self {
            AccessibleRole::Region => "region",
            AccessibleRole::CheckBox => "checkbox",
            AccessibleRole::Radio => "radio",
            AccessibleRole::Button => "button",
            AccessibleRole::TextBox => "textbox",
            AccessibleRole::MenuBar => "menubar",
            AccessibleRole::MenuItem => "menuitem",
            AccessibleRole::Tree => "tree",
            AccessibleRole::TreeItem => "treeitem",
            AccessibleRole::ToolBar => "toolbar",
            AccessibleRole::Tab => "tab",
            AccessibleRole::TabPanel => "tabpanel",
            AccessibleRole::Table => "table",
            AccessibleRole::Cell => "cell",
            AccessibleRole::List => "list",
            AccessibleRole::ListItem => "listitem",
            AccessibleRole::TreeGrid => "treegrid",
            AccessibleRole::Dialog => "dialog",
            AccessibleRole::ProgressBar => "progressbar",
            AccessibleRole::Group => "group",
            AccessibleRole::Generic => "generic",
        }
    }

    /// Convert to AccessKit's Role enum.
    pub fn to_accesskit_role(self) -> Role {
        match self {
            AccessibleRole::Region => Role::Region,
            AccessibleRole::CheckBox => Role::CheckBox,
            AccessibleRole::Radio => Role::RadioButton,
            AccessibleRole::Button => Role::Button,
            AccessibleRole::TextBox => Role::TextInput,
            AccessibleRole::MenuBar => Role::MenuBar,
            AccessibleRole::MenuItem => Role::MenuItem,
            AccessibleRole::Tree => Role::Tree,
            AccessibleRole::TreeItem => Role::TreeItem,
            AccessibleRole::ToolBar => Role::Toolbar,
            AccessibleRole::Tab => Role::Tab,
            AccessibleRole::TabPanel => Role::TabPanel,
            AccessibleRole::Table => Role::Table,
            AccessibleRole::Cell => Role::Cell,
            AccessibleRole::List => Role::List,
            AccessibleRole::ListItem => Role::ListItem,
            AccessibleRole::TreeGrid => Role::TreeGrid,
            AccessibleRole::Dialog => Role::Dialog,
            AccessibleRole::ProgressBar => Role::ProgressIndicator,
            AccessibleRole::Group => Role::Group,
            AccessibleRole::Generic => Role::GenericContainer,
        }
    }
}

impl From<AccessibleRole> for Role {
    fn from(role: AccessibleRole) -> Self {
        role.to_accesskit_role()
    }
}
