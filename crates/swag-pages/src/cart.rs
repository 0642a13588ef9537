//! Shopping cart screen wrapper

use crate::screen::{item_slug, Screen};
use std::rc::Rc;
use std::time::Duration;
use swag_browser::PageDriver;
use swag_core::{Result, BASE_URL};

const CART_LIST: &str = ".cart_list";
const CART_ITEM: &str = ".cart_item";
const CART_ITEM_NAME: &str = ".inventory_item_name";
const CART_ITEM_PRICE: &str = ".inventory_item_price";
const CART_ITEM_QUANTITY: &str = ".cart_quantity";
const CART_ITEM_DESC: &str = ".inventory_item_desc";
const CONTINUE_SHOPPING_BUTTON: &str = "[data-test='continue-shopping']";
const CHECKOUT_BUTTON: &str = "[data-test='checkout']";

/// The cart screen at `/cart.html`
pub struct CartPage {
    screen: Screen,
}

impl CartPage {
    pub fn new(driver: Rc<PageDriver>) -> Self {
        Self {
            screen: Screen::new(driver),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Navigate directly to the cart screen
    pub fn open(&self) -> Result<()> {
        self.screen.goto(&format!("{}/cart.html", BASE_URL))
    }

    pub fn is_cart_page(&self) -> bool {
        self.screen
            .is_visible(CART_LIST, Some(Duration::from_secs(5)))
    }

    pub fn page_title(&self) -> Result<String> {
        self.screen.page_title()
    }

    pub fn item_count(&self) -> Result<usize> {
        self.screen.count(CART_ITEM)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.item_count()? == 0)
    }

    pub fn item_names(&self) -> Result<Vec<String>> {
        self.screen.texts(CART_ITEM_NAME)
    }

    pub fn item_prices(&self) -> Result<Vec<String>> {
        self.screen.texts(CART_ITEM_PRICE)
    }

    pub fn item_quantities(&self) -> Result<Vec<usize>> {
        let texts = self.screen.texts(CART_ITEM_QUANTITY)?;
        Ok(texts
            .iter()
            .map(|t| t.trim().parse().unwrap_or(0))
            .collect())
    }

    /// Open the product detail screen by clicking an item name
    pub fn click_item_by_index(&self, index: usize) -> Result<()> {
        self.screen.click_nth(CART_ITEM_NAME, index)
    }

    pub fn item_description_by_index(&self, index: usize) -> Result<String> {
        let descriptions = self.screen.texts(CART_ITEM_DESC)?;
        Ok(descriptions.get(index).cloned().unwrap_or_default())
    }

    /// Remove the item at an index among current Remove buttons
    pub fn remove_by_index(&self, index: usize) -> Result<()> {
        self.screen.click_nth("button[data-test^='remove']", index)
    }

    /// Remove an item by its displayed name
    pub fn remove_by_name(&self, name: &str) -> Result<()> {
        let selector = format!("[data-test='remove-{}']", item_slug(name));
        self.screen.click(&selector)
    }

    pub fn continue_shopping(&self) -> Result<()> {
        self.screen.click(CONTINUE_SHOPPING_BUTTON)
    }

    pub fn checkout(&self) -> Result<()> {
        self.screen.click(CHECKOUT_BUTTON)
    }
}
