//! # todocheck-e2e
//!
//! The scenario set for the todo page under test lives in this crate's
//! `tests/` directory; the library half is the fixture that gives every
//! scenario its own configured browser session.
//!
//! Scenarios are independent and serially safe: each acquires a fresh
//! session against a fresh page load and releases it when its scope ends,
//! success or failure. They are `#[ignore]`d by default because they need
//! a local Chrome/Chromium and a reachable copy of the page under test
//! (`TODOCHECK_PAGE_URL` or `page_url` in `todocheck.toml`):
//!
//! ```text
//! TODOCHECK_PAGE_URL=file:///srv/todo/index.html cargo test -- --ignored
//! ```

mod fixture;

pub use fixture::{init_tracing, Fixture};
