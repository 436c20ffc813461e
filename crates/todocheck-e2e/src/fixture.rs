//! Per-scenario session fixture
//!
//! Every scenario owns exactly one session: acquired here, navigated to
//! the page under test, and released by drop when the scenario's scope
//! ends. Drop runs on the panic-unwind path too, so a failed assertion
//! still tears the browser down. Sessions are never reused across
//! scenarios; the only way the suite resets page state is a fresh
//! navigation in a fresh session.

use std::path::Path;
use std::sync::Once;
use todocheck_browser::{BrowserSession, Driver, SessionConfig};
use todocheck_core::{Result, SuiteConfig, TodoCheckError};
use tracing::info;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install the fmt subscriber once for the whole test process
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .try_init();
    });
}

/// Suite configuration plus session acquisition for one scenario
pub struct Fixture {
    config: SuiteConfig,
}

impl Fixture {
    /// Load configuration from the workspace root and the environment
    pub fn from_workspace() -> Result<Self> {
        init_tracing();

        let root = Path::new(env!("CARGO_MANIFEST_DIR"))
            .ancestors()
            .nth(2)
            .ok_or_else(|| {
                TodoCheckError::Config("Cannot locate workspace root".to_string())
            })?;

        let config = SuiteConfig::load_or_default(root)?.apply_env_overrides();
        Ok(Self { config })
    }

    /// Suite configuration in effect
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Maximum number of simultaneously active items the page permits
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Acquire a fresh session already navigated to the page under test
    ///
    /// Fails immediately when no page is configured or the browser cannot
    /// start; a navigation failure drops the just-launched session before
    /// the error propagates, so no scenario ever sees a half-acquired
    /// session.
    pub async fn acquire(&self) -> Result<BrowserSession> {
        let url = self.config.resolved_page_url()?.to_string();

        let session =
            BrowserSession::launch_with_config(SessionConfig::from_suite(&self.config)).await?;
        session.navigate(&url).await?;

        info!("Session ready on {}", url);
        Ok(session)
    }
}
