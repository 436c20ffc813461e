//! Shared types describing the page contract under test

use serde::{Deserialize, Serialize};

/// Visibility state of the collapsible control panel
///
/// The panel is a two-state machine: `collapsed --expand--> expanded`,
/// `expanded --collapse--> collapsed`. A freshly loaded page starts
/// collapsed, and exactly one of the two toggle affordances is visible
/// in either state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    #[default]
    Collapsed,
    Expanded,
}

impl PanelState {
    /// The state reached by activating the currently visible toggle
    pub fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

impl std::fmt::Display for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collapsed => write!(f, "collapsed"),
            Self::Expanded => write!(f, "expanded"),
        }
    }
}

impl std::str::FromStr for PanelState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "collapsed" => Ok(Self::Collapsed),
            "expanded" => Ok(Self::Expanded),
            _ => Err(format!("Invalid panel state: {}", s)),
        }
    }
}

/// Positional identifier of a todo entry
///
/// The page assigns ids in insertion order starting at 1 and never
/// reuses them within a single page load, even after deletions. The
/// entry element and its delete button share the number (`item3` is
/// deleted through `button3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    /// DOM id of the entry element
    pub fn element_id(self) -> String {
        format!("item{}", self.0)
    }

    /// DOM id of the entry's delete button
    pub fn delete_button_id(self) -> String {
        format!("button{}", self.0)
    }

    /// The id assigned to the entry added right after this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item{}", self.0)
    }
}
