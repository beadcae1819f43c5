//! Maps widget accessibility codes to roles and construction rules.
//!
//! Most kinds become a single node with a plain role. A few need more:
//! text fields get a live companion node that mirrors their selection, radio
//! buttons carry a group name, and interactive kinds accept activation.

use horizon_a11y_core::{AccessibilityCode, Activation};

use crate::error::Result;
use crate::role::AccessibleRole;

/// Role description attached to custom-drawn widgets.
pub const CUSTOM_ROLE_DESCRIPTION: &str = "custom";

/// Extra construction steps for a node beyond its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConstructionRule {
    /// Nothing beyond role, label and description.
    #[default]
    Plain,
    /// Announce a custom role description.
    RoleDescription(&'static str),
    /// Accept activation from the accessibility tree.
    Activatable(Activation),
    /// Carry the widget name as a group name and accept toggling.
    RadioGroup,
    /// Add a polite live companion node mirroring the text selection.
    LiveSelection,
}

impl ConstructionRule {
    /// The activation routed to the widget when its node is clicked, if any.
    pub const fn activation(self) -> Option<Activation> {
        match self {
            ConstructionRule::Activatable(activation) => Some(activation),
            ConstructionRule::RadioGroup => Some(Activation::Toggle),
            ConstructionRule::Plain
            | ConstructionRule::RoleDescription(_)
            | ConstructionRule::LiveSelection => None,
        }
    }

    /// Whether this rule adds a companion node.
    pub const fn has_companion(self) -> bool {
        matches!(self, ConstructionRule::LiveSelection)
    }
}

/// The outcome of classifying a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Classification {
    /// The node's role.
    pub role: AccessibleRole,
    /// Extra construction steps.
    pub rule: ConstructionRule,
}

impl Classification {
    const fn plain(role: AccessibleRole) -> Self {
        Self {
            role,
            rule: ConstructionRule::Plain,
        }
    }

    const fn with_rule(role: AccessibleRole, rule: ConstructionRule) -> Self {
        Self { role, rule }
    }
}

/// Classify a raw accessibility code.
///
/// Total over every `i32`: codes outside the enumeration, and the
/// not-accessible sentinel, classify as a plain region.
pub fn classify(code: i32) -> Classification {
    match AccessibilityCode::from_raw(code) {
        Some(code) => classify_code(code),
        None => Classification::default(),
    }
}

/// Classify a raw accessibility code, rejecting codes outside the enumeration.
pub fn classify_strict(code: i32) -> Result<Classification> {
    let code = AccessibilityCode::try_from(code)?;
    Ok(classify_code(code))
}

/// Classify a known accessibility code.
pub const fn classify_code(code: AccessibilityCode) -> Classification {
    use AccessibleRole as R;
    use ConstructionRule as C;

    match code {
        AccessibilityCode::NotAccessible => Classification::plain(R::Region),
        AccessibilityCode::Custom => {
            Classification::with_rule(R::Region, C::RoleDescription(CUSTOM_ROLE_DESCRIPTION))
        }
        AccessibilityCode::CheckBox => {
            Classification::with_rule(R::CheckBox, C::Activatable(Activation::Toggle))
        }
        AccessibilityCode::RadioButton => Classification::with_rule(R::Radio, C::RadioGroup),
        AccessibilityCode::Button => {
            Classification::with_rule(R::Button, C::Activatable(Activation::Invoke))
        }
        AccessibilityCode::ToggleButton => {
            Classification::with_rule(R::Button, C::Activatable(Activation::Toggle))
        }
        AccessibilityCode::TextBox => Classification::plain(R::TextBox),
        AccessibilityCode::MenuBar => Classification::plain(R::MenuBar),
        AccessibilityCode::MenuItem => Classification::plain(R::MenuItem),
        AccessibilityCode::Pane => Classification::plain(R::Region),
        AccessibilityCode::Tree => Classification::plain(R::Tree),
        AccessibilityCode::TreeItem => Classification::plain(R::TreeItem),
        AccessibilityCode::ToolBar => Classification::plain(R::ToolBar),
        AccessibilityCode::Tab => Classification::plain(R::Tab),
        AccessibilityCode::TabPane => Classification::plain(R::TabPanel),
        AccessibilityCode::Table => Classification::plain(R::Table),
        AccessibilityCode::Cell => Classification::plain(R::Cell),
        AccessibilityCode::TextField => Classification::with_rule(R::TextBox, C::LiveSelection),
        AccessibilityCode::List => Classification::plain(R::List),
        AccessibilityCode::ListItem => Classification::plain(R::ListItem),
        AccessibilityCode::TreeTable => Classification::plain(R::TreeGrid),
        AccessibilityCode::Dialog => Classification::plain(R::Dialog),
        AccessibilityCode::PopupMenu => Classification::plain(R::Region),
        AccessibilityCode::ProgressBar => Classification::plain(R::ProgressBar),
        AccessibilityCode::TreeTableCell => Classification::plain(R::Region),
        AccessibilityCode::Group => Classification::plain(R::Group),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_every_code_has_a_role() {
        for code in AccessibilityCode::ALL {
            let classification = classify(code.as_raw());
            assert_eq!(classification, classify_code(code));
            assert!(!classification.role.aria_name().is_empty());
        }
    }

    #[test]
    fn test_unknown_codes_fall_back_to_region() {
        for raw in [0, 26, 100, -2, i32::MIN, i32::MAX] {
            assert_eq!(classify(raw), Classification::default());
            assert_eq!(classify(raw).role, AccessibleRole::Region);
            assert_eq!(classify(raw).rule, ConstructionRule::Plain);
        }
    }

    #[test]
    fn test_strict_classification() {
        assert_eq!(
            classify_strict(AccessibilityCode::Tab.as_raw()).unwrap().role,
            AccessibleRole::Tab
        );
        assert!(matches!(classify_strict(0), Err(Error::UnknownCode(_))));
    }

    #[test]
    fn test_roles_by_code() {
        let expected = [
            (AccessibilityCode::Custom, "region"),
            (AccessibilityCode::CheckBox, "checkbox"),
            (AccessibilityCode::RadioButton, "radio"),
            (AccessibilityCode::Button, "button"),
            (AccessibilityCode::ToggleButton, "button"),
            (AccessibilityCode::TextBox, "textbox"),
            (AccessibilityCode::MenuBar, "menubar"),
            (AccessibilityCode::MenuItem, "menuitem"),
            (AccessibilityCode::Pane, "region"),
            (AccessibilityCode::Tree, "tree"),
            (AccessibilityCode::TreeItem, "treeitem"),
            (AccessibilityCode::ToolBar, "toolbar"),
            (AccessibilityCode::Tab, "tab"),
            (AccessibilityCode::TabPane, "tabpanel"),
            (AccessibilityCode::Table, "table"),
            (AccessibilityCode::Cell, "cell"),
            (AccessibilityCode::TextField, "textbox"),
            (AccessibilityCode::List, "list"),
            (AccessibilityCode::ListItem, "listitem"),
            (AccessibilityCode::TreeTable, "treegrid"),
            (AccessibilityCode::Dialog, "dialog"),
            (AccessibilityCode::PopupMenu, "region"),
            (AccessibilityCode::ProgressBar, "progressbar"),
            (AccessibilityCode::TreeTableCell, "region"),
            (AccessibilityCode::Group, "group"),
        ];
        for (code, role) in expected {
            assert_eq!(classify_code(code).role.aria_name(), role, "{code:?}");
        }
    }

    #[test]
    fn test_compound_rules() {
        let field = classify_code(AccessibilityCode::TextField);
        assert!(field.rule.has_companion());
        assert_eq!(field.rule.activation(), None);

        let radio = classify_code(AccessibilityCode::RadioButton);
        assert_eq!(radio.rule, ConstructionRule::RadioGroup);
        assert_eq!(radio.rule.activation(), Some(Activation::Toggle));

        let custom = classify_code(AccessibilityCode::Custom);
        assert_eq!(
            custom.rule,
            ConstructionRule::RoleDescription(CUSTOM_ROLE_DESCRIPTION)
        );
    }

    #[test]
    fn test_interactive_kinds() {
        assert_eq!(
            classify_code(AccessibilityCode::Button).rule.activation(),
            Some(Activation::Invoke)
        );
        for code in [AccessibilityCode::CheckBox, AccessibilityCode::ToggleButton] {
            assert_eq!(classify_code(code).rule.activation(), Some(Activation::Toggle));
        }
        assert_eq!(classify_code(AccessibilityCode::List).rule.activation(), None);
    }
}
