//! Browser session abstraction.
//!
//! Defines the `PageSession` trait that abstracts over the browser engine
//! (currently Chromium via chromiumoxide). The locator and extractor only
//! talk to this seam, so tests can script a session without a browser.

pub mod chromium;

use anyhow::Result;
use async_trait::async_trait;

/// A single browser page, reused for the whole run.
#[async_trait]
pub trait PageSession: Send {
    /// Navigate the page to a URL and wait for the load to settle.
    async fn navigate(&mut self, url: &str) -> Result<()>;

    /// Wait for an element matching `selector` to be present.
    ///
    /// Returns `Ok(false)` if it never appeared within `timeout_secs`;
    /// `Err` is reserved for session faults.
    async fn wait_for_selector(&mut self, selector: &str, timeout_secs: u64) -> Result<bool>;

    /// Type text into the first element matching `selector`.
    async fn type_into(&mut self, selector: &str, text: &str) -> Result<()>;

    /// Click the first element matching `selector`.
    async fn click(&mut self, selector: &str) -> Result<()>;

    /// Visible text of the first element matching `selector`.
    ///
    /// `None` means no such element; an element with no text yields an
    /// empty string.
    async fn inner_text(&mut self, selector: &str) -> Result<Option<String>>;

    /// `href` targets of every element matching `selector`, in page order.
    async fn link_targets(&mut self, selector: &str) -> Result<Vec<String>>;

    /// Tear down the session. Safe to call more than once.
    async fn close(&mut self) -> Result<()>;
}
