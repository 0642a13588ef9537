//! Shared screen capability composed into every page wrapper

use std::rc::Rc;
use std::time::Duration;
use swag_browser::PageDriver;
use swag_core::Result;

/// Selectors shared by every demo-shop screen
const PAGE_TITLE: &str = ".title";
const SHOPPING_CART_BADGE: &str = ".shopping_cart_badge";

/// Generic actions over one browser tab, shared by all page wrappers
///
/// Holds the driver handle and exposes the capability surface once, so
/// screen wrappers compose it instead of inheriting it.
#[derive(Clone)]
pub struct Screen {
    driver: Rc<PageDriver>,
}

impl Screen {
    pub fn new(driver: Rc<PageDriver>) -> Self {
        Self { driver }
    }

    /// The underlying driver (used by artifact capture at teardown)
    pub fn driver(&self) -> &Rc<PageDriver> {
        &self.driver
    }

    pub fn goto(&self, url: &str) -> Result<()> {
        self.driver.goto(url)
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        self.driver.click(selector)
    }

    pub fn click_nth(&self, selector: &str, index: usize) -> Result<()> {
        self.driver.click_nth(selector, index)
    }

    pub fn fill(&self, selector: &str, text: &str) -> Result<()> {
        self.driver.fill(selector, text)
    }

    pub fn text(&self, selector: &str) -> Result<String> {
        self.driver.text(selector)
    }

    pub fn texts(&self, selector: &str) -> Result<Vec<String>> {
        self.driver.texts(selector)
    }

    pub fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        self.driver.attribute(selector, name)
    }

    pub fn count(&self, selector: &str) -> Result<usize> {
        self.driver.count(selector)
    }

    pub fn is_visible(&self, selector: &str, timeout: Option<Duration>) -> bool {
        self.driver.is_visible(selector, timeout)
    }

    pub fn wait_visible(&self, selector: &str) -> Result<()> {
        self.driver.wait_visible(selector)
    }

    pub fn wait_hidden(&self, selector: &str) -> Result<()> {
        self.driver.wait_hidden(selector)
    }

    pub fn current_url(&self) -> String {
        self.driver.url()
    }

    pub fn document_title(&self) -> Result<String> {
        self.driver.title()
    }

    /// The heading text at the top of the current screen
    pub fn page_title(&self) -> Result<String> {
        self.text(PAGE_TITLE)
    }

    /// Number shown on the cart badge; an absent badge counts as zero
    pub fn cart_badge_count(&self) -> usize {
        if !self.is_visible(SHOPPING_CART_BADGE, Some(Duration::from_secs(2))) {
            return 0;
        }
        self.text(SHOPPING_CART_BADGE)
            .ok()
            .and_then(|t| t.trim().parse().ok())
            .unwrap_or(0)
    }
}

/// Convert a product name to its `data-test` attribute slug
/// ("Sauce Labs Backpack" -> "sauce-labs-backpack")
pub fn item_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Parse a displayed money label ("Item total: $39.98", "$29.99") into
/// its numeric value, defaulting to 0.0 when no amount is present
pub fn money_value(label: &str) -> f64 {
    label
        .split('$')
        .nth(1)
        .and_then(|amount| amount.trim().parse().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_slug() {
        assert_eq!(item_slug("Sauce Labs Backpack"), "sauce-labs-backpack");
        assert_eq!(item_slug("Test.allTheThings() T-Shirt (Red)").contains(' '), false);
    }

    #[test]
    fn test_money_value_plain_price() {
        assert_eq!(money_value("$29.99"), 29.99);
    }

    #[test]
    fn test_money_value_labeled() {
        assert_eq!(money_value("Item total: $39.98"), 39.98);
        assert_eq!(money_value("Tax: $3.20"), 3.20);
        assert_eq!(money_value("Total: $43.18"), 43.18);
    }

    #[test]
    fn test_money_value_missing_amount() {
        assert_eq!(money_value(""), 0.0);
        assert_eq!(money_value("free"), 0.0);
    }
}
