//! Chromium-backed session using chromiumoxide.

use super::PageSession;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Duration;

/// How often `wait_for_selector` re-polls the page.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Find the Chromium binary path.
pub fn find_chromium() -> Option<PathBuf> {
    // 1. DENTIST_SCAN_CHROMIUM_PATH env
    if let Ok(p) = std::env::var("DENTIST_SCAN_CHROMIUM_PATH") {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }

    // 2. System PATH
    if let Ok(path) = which::which("google-chrome") {
        return Some(path);
    }
    if let Ok(path) = which::which("chromium") {
        return Some(path);
    }
    if let Ok(path) = which::which("chromium-browser") {
        return Some(path);
    }

    // 3. Common macOS locations
    if cfg!(target_os = "macos") {
        let common =
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if common.exists() {
            return Some(common);
        }
    }

    None
}

/// A live Chromium instance with one page, reused for the whole scan.
pub struct ChromiumSession {
    browser: Browser,
    /// `None` once the session has been closed.
    page: Option<Page>,
}

impl ChromiumSession {
    /// Launch Chromium and open a blank page.
    pub async fn launch(headless: bool) -> Result<Self> {
        let chrome_path = find_chromium().context(
            "Chromium not found. Install Chrome/Chromium or set DENTIST_SCAN_CHROMIUM_PATH.",
        )?;

        let mut builder = BrowserConfig::builder()
            .chrome_executable(chrome_path)
            .window_size(800, 600)
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .arg("--disable-background-networking");
        if headless {
            builder = builder.arg("--headless=new");
        } else {
            builder = builder.with_head();
        }
        let config = builder
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build browser config: {e}"))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch Chromium")?;

        // Drain CDP events for the lifetime of the browser
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .context("failed to open page")?;

        Ok(Self {
            browser,
            page: Some(page),
        })
    }

    fn page(&self) -> Result<&Page> {
        self.page.as_ref().context("session already closed")
    }
}

#[async_trait]
impl PageSession for ChromiumSession {
    async fn navigate(&mut self, url: &str) -> Result<()> {
        let page = self.page()?;
        page.goto(url)
            .await
            .with_context(|| format!("navigation to {url} failed"))?;
        let _ = page.wait_for_navigation().await;
        Ok(())
    }

    async fn wait_for_selector(&mut self, selector: &str, timeout_secs: u64) -> Result<bool> {
        let page = self.page()?;
        let appeared = tokio::time::timeout(Duration::from_secs(timeout_secs), async {
            loop {
                if page.find_element(selector).await.is_ok() {
                    return;
                }
                tokio::time::sleep(POLL_INTERVAL).await;
            }
        })
        .await;
        Ok(appeared.is_ok())
    }

    async fn type_into(&mut self, selector: &str, text: &str) -> Result<()> {
        let element = self
            .page()?
            .find_element(selector)
            .await
            .with_context(|| format!("element '{selector}' not present"))?;
        element.click().await.context("failed to focus input")?;
        element
            .type_str(text)
            .await
            .with_context(|| format!("failed to type into '{selector}'"))?;
        Ok(())
    }

    async fn click(&mut self, selector: &str) -> Result<()> {
        let element = self
            .page()?
            .find_element(selector)
            .await
            .with_context(|| format!("element '{selector}' not present"))?;
        element
            .click()
            .await
            .with_context(|| format!("failed to click '{selector}'"))?;
        Ok(())
    }

    async fn inner_text(&mut self, selector: &str) -> Result<Option<String>> {
        let element = match self.page()?.find_element(selector).await {
            Ok(el) => el,
            Err(_) => return Ok(None),
        };
        let text = element
            .inner_text()
            .await
            .with_context(|| format!("failed to read text of '{selector}'"))?;
        Ok(Some(text.unwrap_or_default()))
    }

    async fn link_targets(&mut self, selector: &str) -> Result<Vec<String>> {
        let elements = self
            .page()?
            .find_elements(selector)
            .await
            .unwrap_or_default();
        let mut targets = Vec::with_capacity(elements.len());
        for element in elements {
            if let Some(href) = element
                .attribute("href")
                .await
                .context("failed to read href")?
            {
                targets.push(href);
            }
        }
        Ok(targets)
    }

    async fn close(&mut self) -> Result<()> {
        let Some(page) = self.page.take() else {
            return Ok(());
        };
        let _ = page.close().await;
        self.browser
            .close()
            .await
            .context("failed to close browser")?;
        let _ = self.browser.wait().await;
        Ok(())
    }
}
