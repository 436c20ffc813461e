//! Browser driver error types - re-exports the unified TodoCheckError from todocheck-core
//!
//! All driver errors use the unified TodoCheckError type:
//! - Session(String) - launch and tab acquisition failures
//! - Navigation(String) - page load failures
//! - ElementNotFound { selector } - lookup timed out within the wait bound
//! - Interaction { selector, reason } - click/clear/type failures on a found element
//! - Script(String) - in-page evaluation failures

pub use todocheck_core::{Result, TodoCheckError};
