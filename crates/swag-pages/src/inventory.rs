//! Inventory (product list) screen wrapper

use crate::screen::{item_slug, Screen};
use std::rc::Rc;
use std::time::Duration;
use swag_browser::PageDriver;
use swag_core::Result;

const INVENTORY_LIST: &str = ".inventory_list";
const INVENTORY_ITEM: &str = ".inventory_item";
const INVENTORY_ITEM_NAME: &str = ".inventory_item_name";
const INVENTORY_ITEM_PRICE: &str = ".inventory_item_price";
const INVENTORY_ITEM_IMAGE: &str = ".inventory_item_img img";
const ADD_TO_CART_BUTTON: &str = "button[data-test^='add-to-cart']";
const REMOVE_BUTTON: &str = "button[data-test^='remove']";
const SHOPPING_CART_LINK: &str = ".shopping_cart_link";
const BURGER_MENU_BUTTON: &str = "#react-burger-menu-btn";
const LOGOUT_LINK: &str = "#logout_sidebar_link";

/// The product catalog screen shown after a successful login
pub struct InventoryPage {
    screen: Screen,
}

impl InventoryPage {
    pub fn new(driver: Rc<PageDriver>) -> Self {
        Self {
            screen: Screen::new(driver),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_inventory_page(&self) -> bool {
        self.screen
            .is_visible(INVENTORY_LIST, Some(Duration::from_secs(5)))
    }

    pub fn page_title(&self) -> Result<String> {
        self.screen.page_title()
    }

    pub fn inventory_count(&self) -> Result<usize> {
        self.screen.count(INVENTORY_ITEM)
    }

    pub fn item_names(&self) -> Result<Vec<String>> {
        self.screen.texts(INVENTORY_ITEM_NAME)
    }

    pub fn item_prices(&self) -> Result<Vec<String>> {
        self.screen.texts(INVENTORY_ITEM_PRICE)
    }

    /// Add the item at a catalog index to the cart
    ///
    /// The index counts remaining add-to-cart buttons, so it shifts as
    /// items are added (their button turns into Remove). Adding by name
    /// avoids the shift.
    pub fn add_to_cart_by_index(&self, index: usize) -> Result<()> {
        self.screen.click_nth(ADD_TO_CART_BUTTON, index)
    }

    /// Add an item to the cart by its displayed name
    pub fn add_to_cart_by_name(&self, name: &str) -> Result<()> {
        let selector = format!("[data-test='add-to-cart-{}']", item_slug(name));
        self.screen.click(&selector)
    }

    /// Remove the item at an index among current Remove buttons
    pub fn remove_by_index(&self, index: usize) -> Result<()> {
        self.screen.click_nth(REMOVE_BUTTON, index)
    }

    pub fn cart_badge_count(&self) -> usize {
        self.screen.cart_badge_count()
    }

    /// Number of Remove buttons currently shown in the catalog
    pub fn remove_button_count(&self) -> Result<usize> {
        self.screen.count(REMOVE_BUTTON)
    }

    /// Open the product detail screen by clicking a product name
    pub fn click_product_by_index(&self, index: usize) -> Result<()> {
        self.screen.click_nth(INVENTORY_ITEM_NAME, index)
    }

    /// Open the product detail screen by clicking a product image
    pub fn click_product_image_by_index(&self, index: usize) -> Result<()> {
        self.screen.click_nth(INVENTORY_ITEM_IMAGE, index)
    }

    pub fn open_shopping_cart(&self) -> Result<()> {
        self.screen.click(SHOPPING_CART_LINK)
    }

    pub fn open_menu(&self) -> Result<()> {
        self.screen.click(BURGER_MENU_BUTTON)
    }

    /// Log out through the burger menu
    pub fn logout(&self) -> Result<()> {
        self.open_menu()?;
        // The sidebar animates in; the link is present but not yet visible.
        self.screen.wait_visible(LOGOUT_LINK)?;
        self.screen.click(LOGOUT_LINK)
    }
}
