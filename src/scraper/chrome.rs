use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::app::{FarescoutError, Result};
use crate::domain::CardQuery;
use crate::scraper::config::ScraperConfig;
use crate::scraper::{CardSnapshot, PageDriver};

/// Single-tab Chrome session driven through chromiumoxide
pub struct ChromeDriver {
    browser: Browser,
    page: Page,
    handler: HandlerTask,
    timeout_secs: u64,
}

/// Browser event loop task, aborted when dropped
struct HandlerTask(JoinHandle<()>);

impl HandlerTask {
    fn abort(&self) {
        self.0.abort();
    }
}

impl Drop for HandlerTask {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl ChromeDriver {
    /// Launch Chrome and open the one tab every page load goes through
    pub async fn launch(config: &ScraperConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .arg("--start-maximized")
            .arg("--disable-popup-blocking")
            .arg("--disable-dev-shm-usage")
            .request_timeout(config.timeout());

        if !config.headless {
            builder = builder.with_head();
        }

        if let Some(ref path) = config.chrome_executable {
            builder = builder.chrome_executable(path);
        }

        let browser_config = builder
            .build()
            .map_err(|e| FarescoutError::Browser(format!("Failed to build browser config: {}", e)))?;

        let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
            FarescoutError::Browser(format!(
                "Failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            ))
        })?;

        let handler = HandlerTask(tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler event error: {}", e);
                }
            }
        }));

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| FarescoutError::Browser(format!("Failed to create page: {}", e)))?;

        if let Some(ref ua) = config.user_agent {
            page.set_user_agent(ua)
                .await
                .map_err(|e| FarescoutError::Browser(format!("Failed to set user agent: {}", e)))?;
        }

        info!("Browser session started");

        Ok(Self {
            browser,
            page,
            handler,
            timeout_secs: config.timeout_secs,
        })
    }

    fn more_controls_xpath(text: &str) -> String {
        format!("//button[contains(., {})]", xpath_literal(text))
    }
}

/// Quote a string for use inside an XPath expression
fn xpath_literal(text: &str) -> String {
    if !text.contains('\'') {
        format!("'{}'", text)
    } else if !text.contains('"') {
        format!("\"{}\"", text)
    } else {
        let parts = text
            .split('\'')
            .map(|p| format!("'{}'", p))
            .collect::<Vec<_>>()
            .join(", \"'\", ");
        format!("concat({})", parts)
    }
}

/// Quote a string for use inside a JavaScript single-quoted literal
fn js_literal(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// JavaScript that reads every result card in one round trip.
///
/// Each per-card lookup is wrapped so a missing label or image only blanks
/// that field.
pub(crate) fn card_snapshot_script(query: &CardQuery) -> String {
    let card = js_literal(query.card);
    let label = js_literal(query.label);
    let image = js_literal(query.image);
    let limit = query
        .limit
        .map(|n| n.to_string())
        .unwrap_or_else(|| "-1".to_string());

    format!(
        r#"
        (() => {{
            const cards = Array.from(document.querySelectorAll({card}));
            const limit = {limit};
            const selected = limit >= 0 ? cards.slice(0, limit) : cards;

            return selected.map(card => {{
                let label = null;
                try {{
                    const el = card.querySelector({label});
                    label = el ? el.innerText : null;
                }} catch (e) {{}}

                let image_alt = null;
                try {{
                    const img = card.querySelector({image});
                    image_alt = img ? img.getAttribute('alt') : null;
                }} catch (e) {{}}

                let text = '';
                try {{
                    text = card.innerText || '';
                }} catch (e) {{}}

                return {{ label, image_alt, text }};
            }});
        }})()
        "#
    )
}

#[async_trait]
impl PageDriver for ChromeDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        let load = self.page.goto(url);
        match tokio::time::timeout(Duration::from_secs(self.timeout_secs), load).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(FarescoutError::Navigation {
                url: url.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Err(FarescoutError::Timeout {
                url: url.to_string(),
                secs: self.timeout_secs,
            }),
        }
    }

    async fn scroll_to_end(&self) -> Result<()> {
        let body = self
            .page
            .find_element("body")
            .await
            .map_err(|e| FarescoutError::Browser(format!("No document body: {}", e)))?;

        body.press_key("End")
            .await
            .map_err(|e| FarescoutError::Browser(format!("Failed to press End: {}", e)))?;

        Ok(())
    }

    async fn click_controls(&self, text: &str, pause: Duration) -> Result<usize> {
        let controls = self
            .page
            .find_xpaths(Self::more_controls_xpath(text))
            .await
            .map_err(|e| FarescoutError::Browser(format!("Control lookup failed: {}", e)))?;

        let mut clicked = 0;
        for (index, control) in controls.iter().enumerate() {
            match control.click().await {
                Ok(_) => clicked += 1,
                Err(e) => debug!("Click on '{}' #{} failed: {}", text, index + 1, e),
            }
            tokio::time::sleep(pause).await;
        }

        Ok(clicked)
    }

    async fn card_snapshots(&self, query: &CardQuery) -> Result<Vec<CardSnapshot>> {
        let script = card_snapshot_script(query);
        let cards: Vec<CardSnapshot> = self
            .page
            .evaluate(script)
            .await
            .map_err(|e| FarescoutError::Script(format!("Script execution failed: {}", e)))?
            .into_value()
            .map_err(|e| FarescoutError::Script(format!("Failed to parse result: {:?}", e)))?;

        Ok(cards)
    }

    async fn close(&mut self) -> Result<()> {
        let _ = self.page.clone().close().await;

        let closed = self.browser.close().await;
        if closed.is_ok() {
            let _ = self.browser.wait().await;
        }
        self.handler.abort();

        closed.map_err(|e| FarescoutError::Browser(format!("Failed to close browser: {}", e)))?;

        info!("Browser session closed");
        Ok(())
    }
}
