//! Scoped browser session
//!
//! One isolated headless Chromium session per operation: launch, navigate,
//! act, close. `with_session` guarantees the session is released on every
//! path before control returns.

use chromiumoxide::browser::{Browser, BrowserConfig as ChromeConfig};
use chromiumoxide::Page;
use futures::future::BoxFuture;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

use crate::core::{BrowserConfig, CloudpilotError, Result};

/// An active browser session with a single page
pub struct Session {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl Session {
    /// Launch a fresh Chromium instance with one blank page
    pub async fn launch(cfg: &BrowserConfig) -> Result<Self> {
        let mut builder = ChromeConfig::builder()
            .no_sandbox()
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .window_size(cfg.window_width, cfg.window_height);
        if cfg.headed {
            builder = builder.with_head();
        }
        let config = builder.build().map_err(CloudpilotError::browser)?;

        let (mut browser, mut events) = Browser::launch(config)
            .await
            .map_err(|e| CloudpilotError::browser(format!("Failed to launch browser: {}", e)))?;

        // The CDP message loop must be polled for the browser to function.
        let handler = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                if event.is_err() {
                    debug!("CDP event loop ended");
                    break;
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                // Launched but unusable: tear the process down before failing.
                if let Err(close_err) = browser.close().await {
                    warn!("error closing browser: {}", close_err);
                }
                handler.abort();
                return Err(CloudpilotError::browser(format!(
                    "Failed to open page: {}",
                    e
                )));
            }
        };

        Ok(Self {
            browser,
            page,
            handler,
        })
    }

    /// The session's page
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Navigate to a URL and wait for network activity to settle
    pub async fn goto_idle(&self, url: &str) -> Result<()> {
        let target =
            Url::parse(url).map_err(|_| CloudpilotError::InvalidUrl(url.to_string()))?;
        debug!(url = %target, "navigating");

        self.page
            .goto(target.as_str())
            .await
            .map_err(|e| CloudpilotError::browser(format!("Navigation to '{}' failed: {}", url, e)))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| CloudpilotError::browser(format!("Page did not settle: {}", e)))?;

        Ok(())
    }

    /// Shut the browser down
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("error closing browser: {}", e);
        }
        self.handler.abort();
    }
}

/// Run one operation inside a fresh session
///
/// The session is closed after the operation on success and failure alike.
pub async fn with_session<T, F>(cfg: &BrowserConfig, op: F) -> Result<T>
where
    F: for<'a> FnOnce(&'a Session) -> BoxFuture<'a, Result<T>>,
{
    let session = Session::launch(cfg).await?;
    let result = op(&session).await;
    session.close().await;
    result
}
