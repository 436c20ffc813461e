//! Driver capability trait
//!
//! The suite needs a small, fixed capability set from whatever automation
//! technology drives the browser: navigate, look elements up by selector,
//! read text/visibility/attributes, click, clear, type, and evaluate a
//! script. Any stack exposing these operations can sit behind this trait;
//! [`crate::session::BrowserSession`] is the CDP-backed implementation.

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Capability set required of a browser automation backend.
///
/// Element lookups are bounded by the backend's configured implicit wait;
/// a lookup that does not resolve within the bound fails with
/// `ElementNotFound` and is never retried by callers.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Load the given URL and wait for the navigation to settle.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Whether an element matching `selector` is currently in the DOM.
    ///
    /// This is an immediate check without the implicit wait; use it for
    /// asserting absence.
    async fn exists(&self, selector: &str) -> Result<bool>;

    /// Whether the element is rendered visible (not `display:none`,
    /// `visibility:hidden`, or the `hidden` attribute).
    async fn is_displayed(&self, selector: &str) -> Result<bool>;

    /// Rendered text of the element, including descendant controls.
    async fn text(&self, selector: &str) -> Result<String>;

    /// Value of an attribute, or `None` when the attribute is absent.
    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>>;

    /// Number of elements matching `selector` right now.
    async fn count(&self, selector: &str) -> Result<usize>;

    /// Click the element.
    async fn click(&self, selector: &str) -> Result<()>;

    /// Clear a text input's current value.
    async fn clear(&self, selector: &str) -> Result<()>;

    /// Type `text` into the element. Does not clear first; empty input is
    /// permitted and is a no-op at the keyboard level.
    async fn type_into(&self, selector: &str, text: &str) -> Result<()>;

    /// Evaluate a script in the page and return its value.
    ///
    /// The structured reads above are built on this; it is also the
    /// escape hatch for one-off observations.
    async fn evaluate(&self, script: &str) -> Result<Value>;
}
