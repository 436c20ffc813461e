//! Page object for the todo-list page under test
//!
//! Encapsulates the page's element contract (stable ids for the control
//! panel, input, submit button, list entries, and per-entry delete
//! buttons) so scenarios never repeat low-level lookups. State lives
//! entirely in the page's DOM; this type only interacts and observes.

use crate::driver::Driver;
use crate::error::{Result, TodoCheckError};
use serde_json::Value;
use todocheck_core::{ItemId, PanelState};
use tracing::debug;

/// Content region of the collapsible control panel
pub const CONTROL_PANEL: &str = "#controls1";
/// Toggle shown while the panel is collapsed
pub const EXPAND_TOGGLE: &str = "#controls1plus";
/// Toggle shown while the panel is expanded
pub const COLLAPSE_TOGGLE: &str = "#controls1minus";
/// Text input for a new entry
pub const ITEM_INPUT: &str = "#itemtoadd";
/// Submit button; hidden once the list is at capacity
pub const ADD_BUTTON: &str = "#addbutton";
/// All list entries, in DOM order
pub const LIST_ENTRIES: &str = "#thelist li";

/// Label the expand toggle carries in its collapsed state
pub const EXPAND_LABEL: &str = "+";
/// Label of each entry's delete button; entry text is rendered as the
/// user's text followed by this label
pub const DELETE_LABEL: &str = "Delete";

/// Interaction helper over the todo page's element contract
pub struct TodoPage<'a, D: Driver> {
    driver: &'a D,
}

impl<'a, D: Driver> TodoPage<'a, D> {
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// Navigate the session to the page under test
    pub async fn open(&self, url: &str) -> Result<()> {
        self.driver.navigate(url).await
    }

    /// Add one entry with the given text (empty permitted)
    ///
    /// Engages the expand toggle only when it is both displayed and still
    /// carrying its collapsed-state label, so the call is idempotent with
    /// respect to panel state. Clears any pre-existing input value before
    /// typing. Does not verify that an entry appeared; callers assert the
    /// result. Lookup failures propagate unretried.
    pub async fn add_item(&self, text: &str) -> Result<()> {
        debug!("Adding item {:?}", text);

        if self.driver.is_displayed(EXPAND_TOGGLE).await?
            && self.driver.text(EXPAND_TOGGLE).await?.trim() == EXPAND_LABEL
        {
            self.driver.click(EXPAND_TOGGLE).await?;
        }

        self.driver.clear(ITEM_INPUT).await?;
        if !text.is_empty() {
            self.driver.type_into(ITEM_INPUT, text).await?;
        }
        self.driver.click(ADD_BUTTON).await
    }

    /// Delete the entry with the given positional id through its delete button
    pub async fn delete_item(&self, id: ItemId) -> Result<()> {
        debug!("Deleting {}", id);
        self.driver.click(&format!("#{}", id.delete_button_id())).await
    }

    /// Transition the panel `collapsed -> expanded`
    pub async fn expand(&self) -> Result<()> {
        self.driver.click(EXPAND_TOGGLE).await
    }

    /// Transition the panel `expanded -> collapsed`
    pub async fn collapse(&self) -> Result<()> {
        self.driver.click(COLLAPSE_TOGGLE).await
    }

    /// Current panel state, read off which toggle is showing
    pub async fn panel_state(&self) -> Result<PanelState> {
        if self.driver.is_displayed(COLLAPSE_TOGGLE).await? {
            Ok(PanelState::Expanded)
        } else {
            Ok(PanelState::Collapsed)
        }
    }

    pub async fn panel_content_visible(&self) -> Result<bool> {
        self.driver.is_displayed(CONTROL_PANEL).await
    }

    pub async fn expand_toggle_visible(&self) -> Result<bool> {
        self.driver.is_displayed(EXPAND_TOGGLE).await
    }

    pub async fn collapse_toggle_visible(&self) -> Result<bool> {
        self.driver.is_displayed(COLLAPSE_TOGGLE).await
    }

    /// Whether the submit affordance is currently visible; the page hides
    /// it while the list is at capacity
    pub async fn add_button_visible(&self) -> Result<bool> {
        self.driver.is_displayed(ADD_BUTTON).await
    }

    /// Number of entries currently in the list
    pub async fn item_count(&self) -> Result<usize> {
        self.driver.count(LIST_ENTRIES).await
    }

    /// Whether the entry with this id is present in the DOM
    pub async fn item_present(&self, id: ItemId) -> Result<bool> {
        self.driver.exists(&format!("#{}", id.element_id())).await
    }

    /// Rendered text of the entry, user text followed by the delete label
    pub async fn item_text(&self, id: ItemId) -> Result<String> {
        self.driver.text(&format!("#{}", id.element_id())).await
    }

    /// Element ids of all entries in DOM order
    pub async fn item_ids_in_order(&self) -> Result<Vec<String>> {
        // Stringified in-page so the result comes back by value.
        let script = format!(
            "JSON.stringify(Array.from(document.querySelectorAll('{}')).map(el => el.id))",
            LIST_ENTRIES
        );

        match self.driver.evaluate(&script).await? {
            Value::String(json) => Ok(serde_json::from_str(&json)?),
            Value::Array(values) => Ok(serde_json::from_value(Value::Array(values))?),
            other => Err(TodoCheckError::Script(format!(
                "Unexpected entry id listing: {}",
                other
            ))),
        }
    }
}
