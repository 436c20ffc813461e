//! Suite configuration
//!
//! Loaded from `todocheck.toml` in the workspace root when present,
//! otherwise defaults are used. The page URL is the one external
//! configuration point every scenario needs; it can also be supplied
//! through the `TODOCHECK_PAGE_URL` environment variable, which takes
//! precedence over the file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Result, TodoCheckError};

/// Environment variable naming the page under test (path or URL).
pub const PAGE_URL_ENV: &str = "TODOCHECK_PAGE_URL";

/// Environment variable that forces a headed browser when set to a
/// non-empty value other than `0`.
pub const HEADED_ENV: &str = "TODOCHECK_HEADED";

/// Configuration for a suite run
///
/// All fields except `page_url` have working defaults; the page under
/// test has no sensible default location and must be supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Location of the page under test (file:// path or http(s) URL)
    #[serde(default)]
    pub page_url: Option<String>,

    /// Implicit wait bound for element lookups, in seconds
    #[serde(default = "default_implicit_wait_secs")]
    pub implicit_wait_secs: u64,

    /// Run the browser headless
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Browser window width
    #[serde(default = "default_window_width")]
    pub window_width: u32,

    /// Browser window height
    #[serde(default = "default_window_height")]
    pub window_height: u32,

    /// Maximum number of simultaneously active items the page permits
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            page_url: None,
            implicit_wait_secs: default_implicit_wait_secs(),
            headless: default_headless(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            capacity: default_capacity(),
        }
    }
}

// Default value providers
fn default_implicit_wait_secs() -> u64 {
    2
}

fn default_headless() -> bool {
    true
}

fn default_window_width() -> u32 {
    1280
}

fn default_window_height() -> u32 {
    800
}

fn default_capacity() -> usize {
    3
}

impl SuiteConfig {
    /// Load configuration from `todocheck.toml` in `root` or use defaults
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let config_path = root.join("todocheck.toml");

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)
                .map_err(|e| TodoCheckError::Config(format!("Failed to parse {}: {}", config_path.display(), e)))
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment-variable overrides on top of the loaded values
    pub fn apply_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(PAGE_URL_ENV) {
            if !url.is_empty() {
                self.page_url = Some(url);
            }
        }

        if let Ok(headed) = std::env::var(HEADED_ENV) {
            if !headed.is_empty() && headed != "0" {
                self.headless = false;
            }
        }

        self
    }

    /// The page URL, or a configuration error naming how to supply it
    pub fn resolved_page_url(&self) -> Result<&str> {
        self.page_url.as_deref().ok_or_else(|| {
            TodoCheckError::Config(format!(
                "No page under test configured; set page_url in todocheck.toml or {}",
                PAGE_URL_ENV
            ))
        })
    }
}
