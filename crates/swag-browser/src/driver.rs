//! Tab lifecycle and DOM actions over the Chrome DevTools Protocol

use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::{Duration, Instant};
use swag_core::{BrowserKind, Config, Result, SwagError};
use tracing::{debug, info};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// One live browser tab plus the configuration that bounds its waits
pub struct PageDriver {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    tab: Arc<Tab>,
    default_timeout: Duration,
    page_load_timeout: Duration,
}

impl std::fmt::Debug for PageDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageDriver")
            .field("default_timeout", &self.default_timeout)
            .field("page_load_timeout", &self.page_load_timeout)
            .finish_non_exhaustive()
    }
}

impl PageDriver {
    /// Launch a browser and open a fresh tab
    ///
    /// Only the chromium engine can be driven over CDP; selecting another
    /// engine in the configuration is reported as an error here rather
    /// than silently substituted.
    pub fn launch(config: &Config) -> Result<Self> {
        if config.browser != BrowserKind::Chromium {
            return Err(SwagError::UnsupportedEngine(config.browser.to_string()));
        }

        info!(
            "Launching browser (headless: {}, default timeout: {:?})",
            config.headless, config.default_timeout
        );

        let launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((1920, 1080)))
            .build()
            .map_err(|e| SwagError::Browser(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| SwagError::Browser(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| SwagError::Browser(format!("Failed to create tab: {}", e)))?;

        tab.set_default_timeout(config.default_timeout);

        Ok(Self {
            browser,
            tab,
            default_timeout: config.default_timeout,
            page_load_timeout: config.page_load_timeout,
        })
    }

    /// Navigate to a URL and wait for the navigation to settle
    ///
    /// Navigation is bounded by the page-load timeout, not the shorter
    /// per-action default.
    pub fn goto(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab.set_default_timeout(self.page_load_timeout);
        let navigated = self
            .tab
            .navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated());
        self.tab.set_default_timeout(self.default_timeout);

        navigated
            .map(|_| ())
            .map_err(|e| SwagError::Browser(format!("Failed to navigate to {}: {}", url, e)))
    }

    /// Click the first element matching a selector
    pub fn click(&self, selector: &str) -> Result<()> {
        debug!("Clicking {}", selector);

        let element = self
            .tab
            .wait_for_element(selector)
            .map_err(|_e| SwagError::ElementNotFound {
                selector: selector.to_string(),
            })?;

        element
            .click()
            .map_err(|e| SwagError::Browser(format!("Click failed on {}: {}", selector, e)))?;

        Ok(())
    }

    /// Click the element at `index` among all matches for a selector
    pub fn click_nth(&self, selector: &str, index: usize) -> Result<()> {
        debug!("Clicking {}[{}]", selector, index);

        // The nth match has no direct CDP handle, so the click is
        // dispatched in page context.
        let script = format!(
            r#"(() => {{
                const els = document.querySelectorAll({sel});
                if ({index} >= els.length) return false;
                els[{index}].click();
                return true;
            }})()"#,
            sel = js_str(selector),
            index = index,
        );

        self.wait_visible(selector)?;
        let clicked = self.evaluate(&script)?;

        if clicked.as_bool() != Some(true) {
            return Err(SwagError::ElementNotFound {
                selector: format!("{}[{}]", selector, index),
            });
        }

        Ok(())
    }

    /// Fill a text input, replacing any existing content
    ///
    /// Existing content is selected before typing, so the first
    /// keystroke overwrites it with real key events intact.
    pub fn fill(&self, selector: &str, text: &str) -> Result<()> {
        debug!("Filling {} with {} chars", selector, text.len());

        let element = self
            .tab
            .wait_for_element(selector)
            .map_err(|_e| SwagError::ElementNotFound {
                selector: selector.to_string(),
            })?;

        element
            .click()
            .map_err(|e| SwagError::Browser(format!("Focus failed on {}: {}", selector, e)))?;

        self.evaluate(&format!(
            "document.querySelector({})?.select()",
            js_str(selector)
        ))?;

        element
            .type_into(text)
            .map_err(|e| SwagError::Browser(format!("Typing failed on {}: {}", selector, e)))?;

        Ok(())
    }

    /// Text content of the first element matching a selector
    pub fn text(&self, selector: &str) -> Result<String> {
        self.tab
            .wait_for_element(selector)
            .map_err(|_e| SwagError::ElementNotFound {
                selector: selector.to_string(),
            })?;

        let script = format!(
            "document.querySelector({})?.textContent",
            js_str(selector)
        );
        let value = self.evaluate(&script)?;

        Ok(value.as_str().unwrap_or("").to_string())
    }

    /// Text content of every element matching a selector, in DOM order
    pub fn texts(&self, selector: &str) -> Result<Vec<String>> {
        let script = format!(
            r#"Array.from(document.querySelectorAll({})).map(el => el.textContent || "")"#,
            js_str(selector)
        );
        let value = self.evaluate(&script)?;

        serde_json::from_value(value)
            .map_err(|e| SwagError::Browser(format!("Unexpected texts() result: {}", e)))
    }

    /// Attribute value of the first element matching a selector
    pub fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        self.tab
            .wait_for_element(selector)
            .map_err(|_e| SwagError::ElementNotFound {
                selector: selector.to_string(),
            })?;

        let script = format!(
            "document.querySelector({})?.getAttribute({})",
            js_str(selector),
            js_str(name)
        );
        let value = self.evaluate(&script)?;

        Ok(value.as_str().map(str::to_string))
    }

    /// Number of elements currently matching a selector (zero is not an
    /// error; counts are legitimate assertions on their own)
    pub fn count(&self, selector: &str) -> Result<usize> {
        let script = format!(
            "document.querySelectorAll({}).length",
            js_str(selector)
        );
        let value = self.evaluate(&script)?;

        Ok(value.as_u64().unwrap_or(0) as usize)
    }

    /// Whether an element becomes visible within the timeout
    ///
    /// A timeout converts to `false` rather than an error, by contract:
    /// visibility checks are expected to sometimes legitimately say no.
    pub fn is_visible(&self, selector: &str, timeout: Option<Duration>) -> bool {
        let deadline = Instant::now() + timeout.unwrap_or(self.default_timeout);

        loop {
            if self.visible_now(selector) {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    /// Wait until an element is visible, failing on timeout
    pub fn wait_visible(&self, selector: &str) -> Result<()> {
        if self.is_visible(selector, None) {
            Ok(())
        } else {
            Err(SwagError::Timeout {
                what: format!("{} to become visible", selector),
                timeout_secs: self.default_timeout.as_secs(),
            })
        }
    }

    /// Wait until an element is hidden or detached, failing on timeout
    pub fn wait_hidden(&self, selector: &str) -> Result<()> {
        let deadline = Instant::now() + self.default_timeout;

        loop {
            if !self.visible_now(selector) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(SwagError::Timeout {
                    what: format!("{} to become hidden", selector),
                    timeout_secs: self.default_timeout.as_secs(),
                });
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }

    /// Capture a full-page PNG screenshot of the tab's current state
    pub fn screenshot_full_page(&self) -> Result<Vec<u8>> {
        self.tab
            .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, true)
            .map_err(|e| SwagError::ScreenshotFailed(format!("CDP capture failed: {}", e)))
    }

    /// Current URL of the tab
    pub fn url(&self) -> String {
        self.tab.get_url()
    }

    /// Document title of the tab
    pub fn title(&self) -> Result<String> {
        let value = self.evaluate("document.title")?;
        Ok(value.as_str().unwrap_or("").to_string())
    }

    /// Execute JavaScript in page context and return its JSON value
    fn evaluate(&self, script: &str) -> Result<serde_json::Value> {
        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| SwagError::Browser(format!("JavaScript evaluation failed: {}", e)))?;

        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// One-shot visibility check: present in the DOM and laid out
    fn visible_now(&self, selector: &str) -> bool {
        let script = format!(
            r#"(() => {{
                const el = document.querySelector({});
                return !!el && !!(el.offsetWidth || el.offsetHeight || el.getClientRects().length);
            }})()"#,
            js_str(selector)
        );

        match self.evaluate(&script) {
            Ok(value) => value.as_bool() == Some(true),
            Err(_) => false,
        }
    }
}

impl Drop for PageDriver {
    fn drop(&mut self) {
        debug!("PageDriver dropped, browser will be cleaned up");
    }
}

/// Quote a string as a JavaScript string literal
///
/// Selectors routinely contain single quotes (`[data-test='error']`), so
/// interpolating them raw would break the script.
fn js_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| String::from("\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_str_quotes_plain_selectors() {
        assert_eq!(js_str(".inventory_item"), r#"".inventory_item""#);
    }

    #[test]
    fn test_js_str_preserves_single_quotes() {
        assert_eq!(js_str("[data-test='error']"), r#""[data-test='error']""#);
    }

    #[test]
    fn test_js_str_escapes_double_quotes() {
        assert_eq!(js_str(r#"a"b"#), r#""a\"b""#);
    }

    #[test]
    fn test_launch_rejects_non_chromium_engine() {
        let config = Config {
            browser: BrowserKind::Firefox,
            ..Config::default()
        };
        let err = PageDriver::launch(&config).unwrap_err();
        assert!(matches!(err, SwagError::UnsupportedEngine(_)));
    }
}
