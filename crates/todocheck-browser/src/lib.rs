//! Browser driver and page object for the todocheck end-to-end suite
//!
//! This crate provides the automation layer the scenario set runs on:
//!
//! - **Driver trait**: the capability set the suite needs from any
//!   automation backend (navigate, lookup, read, click, type)
//! - **Session management**: launch and release of Chrome/Chromium via the
//!   Chrome DevTools Protocol, with a bounded implicit wait on lookups
//! - **Page object**: the todo page's element contract behind domain
//!   operations (add an item, delete an item, toggle the control panel)
//!
//! # Example
//!
//! ```no_run
//! use todocheck_browser::{BrowserSession, Driver, TodoPage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = BrowserSession::launch().await?;
//!     let page = TodoPage::new(&session);
//!
//!     page.open("file:///srv/todo/index.html").await?;
//!     page.add_item("First task").await?;
//!     assert_eq!(page.item_count().await?, 1);
//!
//!     session.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Requirements
//!
//! - Chrome or Chromium installed; headless by default
//! - The page under test reachable at a file path or URL

pub mod driver;
pub mod error;
pub mod page;
pub mod session;

// Re-export commonly used types
pub use driver::Driver;
pub use error::{Result, TodoCheckError};
pub use page::TodoPage;
pub use session::{BrowserSession, SessionConfig};
