//! Browser session lifecycle using Chrome DevTools Protocol

use crate::driver::Driver;
use crate::error::{Result, TodoCheckError};
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions, Tab};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use todocheck_core::SuiteConfig;
use tracing::{debug, info};

/// Configuration for session launch
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Run in headless mode (default: true)
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Implicit wait bound applied to element lookups
    pub implicit_wait: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1280,
            window_height: 800,
            implicit_wait: Duration::from_secs(2),
        }
    }
}

impl SessionConfig {
    /// Derive a session configuration from the suite configuration
    pub fn from_suite(config: &SuiteConfig) -> Self {
        Self {
            headless: config.headless,
            window_width: config.window_width,
            window_height: config.window_height,
            implicit_wait: Duration::from_secs(config.implicit_wait_secs),
        }
    }
}

/// One browser automation instance, scoped to a single scenario
///
/// Acquisition is all-or-nothing: if the tab cannot be created the browser
/// process is torn down before the error propagates, so a failed launch
/// never leaks a session. Release is tied to drop, which also covers the
/// panic-unwind path out of a failed scenario assertion.
pub struct BrowserSession {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    /// Current active tab
    tab: Arc<Tab>,
    /// Configuration
    config: SessionConfig,
}

impl BrowserSession {
    /// Launch a new browser instance with default configuration
    pub async fn launch() -> Result<Self> {
        Self::launch_with_config(SessionConfig::default()).await
    }

    /// Launch browser with custom configuration
    pub async fn launch_with_config(config: SessionConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{}, implicit wait: {:?})",
            config.headless, config.window_width, config.window_height, config.implicit_wait
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .build()
            .map_err(|e| TodoCheckError::Session(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| TodoCheckError::Session(format!("Failed to launch browser: {}", e)))?;

        // A failure here drops `browser`, and the process with it, before
        // the error propagates.
        let tab = browser
            .new_tab()
            .map_err(|e| TodoCheckError::Session(format!("Failed to create tab: {}", e)))?;

        info!("Browser launched successfully");

        Ok(Self {
            browser,
            tab,
            config,
        })
    }

    /// Wait for an element to be present, bounded by the implicit wait
    fn wait_for(&self, selector: &str) -> Result<headless_chrome::Element<'_>> {
        debug!(
            "Waiting for element: {} (timeout: {:?})",
            selector, self.config.implicit_wait
        );

        self.tab
            .wait_for_element_with_custom_timeout(selector, self.config.implicit_wait)
            .map_err(|_e| TodoCheckError::ElementNotFound {
                selector: selector.to_string(),
            })
    }

    /// Evaluate a script and return its value (null when the script
    /// produced no value)
    fn eval(&self, script: &str) -> Result<Value> {
        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| TodoCheckError::Script(format!("{}: {}", script, e)))?;

        Ok(result.value.unwrap_or(Value::Null))
    }

    /// Session configuration in effect
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Close the browser session
    ///
    /// Dropping the session has the same effect; this exists so callers
    /// can release eagerly and by name.
    pub async fn close(self) -> Result<()> {
        info!("Closing browser session");
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        debug!("BrowserSession dropped, browser will be cleaned up");
    }
}

#[async_trait]
impl Driver for BrowserSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab
            .navigate_to(url)
            .map_err(|e| TodoCheckError::Navigation(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| TodoCheckError::Navigation(format!("Navigation timeout for {}: {}", url, e)))?;

        info!("Successfully navigated to {}", url);
        Ok(())
    }

    async fn exists(&self, selector: &str) -> Result<bool> {
        let value = self.eval(&format!(
            "document.querySelector('{}') !== null",
            selector
        ))?;
        Ok(value.as_bool().unwrap_or(false))
    }

    async fn is_displayed(&self, selector: &str) -> Result<bool> {
        // Presence first, so a missing element surfaces as ElementNotFound
        // rather than as "not displayed".
        self.wait_for(selector)?;

        let script = format!(
            r#"(() => {{
                const el = document.querySelector('{}');
                if (!el) return false;
                const style = window.getComputedStyle(el);
                return style.display !== 'none'
                    && style.visibility !== 'hidden'
                    && el.getClientRects().length > 0;
            }})()"#,
            selector
        );

        let value = self.eval(&script)?;
        Ok(value.as_bool().unwrap_or(false))
    }

    async fn text(&self, selector: &str) -> Result<String> {
        let element = self.wait_for(selector)?;

        element
            .get_inner_text()
            .map_err(|e| TodoCheckError::Interaction {
                selector: selector.to_string(),
                reason: format!("Failed to read text: {}", e),
            })
    }

    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        self.wait_for(selector)?;

        let script = format!(
            "document.querySelector('{}')?.getAttribute('{}')",
            selector, name
        );

        let value = self.eval(&script)?;
        Ok(value.as_str().map(str::to_string))
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        let value = self.eval(&format!(
            "document.querySelectorAll('{}').length",
            selector
        ))?;

        Ok(value.as_u64().unwrap_or(0) as usize)
    }

    async fn click(&self, selector: &str) -> Result<()> {
        debug!("Clicking {}", selector);

        let element = self.wait_for(selector)?;

        element.click().map_err(|e| TodoCheckError::Interaction {
            selector: selector.to_string(),
            reason: format!("Click failed: {}", e),
        })?;

        Ok(())
    }

    async fn clear(&self, selector: &str) -> Result<()> {
        debug!("Clearing {}", selector);

        let element = self.wait_for(selector)?;

        element
            .call_js_fn("function() { this.value = ''; }", vec![], false)
            .map_err(|e| TodoCheckError::Interaction {
                selector: selector.to_string(),
                reason: format!("Clear failed: {}", e),
            })?;

        Ok(())
    }

    async fn type_into(&self, selector: &str, text: &str) -> Result<()> {
        debug!("Typing {:?} into {}", text, selector);

        let element = self.wait_for(selector)?;

        element
            .type_into(text)
            .map_err(|e| TodoCheckError::Interaction {
                selector: selector.to_string(),
                reason: format!("Typing failed: {}", e),
            })?;

        Ok(())
    }

    async fn evaluate(&self, script: &str) -> Result<Value> {
        self.eval(script)
    }
}
