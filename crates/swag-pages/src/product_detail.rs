//! Product detail screen wrapper

use crate::screen::{money_value, Screen};
use std::rc::Rc;
use std::time::Duration;
use swag_browser::PageDriver;
use swag_core::Result;

const INVENTORY_DETAILS: &str = ".inventory_details";
const PRODUCT_NAME: &str = ".inventory_details_name";
const PRODUCT_DESC: &str = ".inventory_details_desc";
const PRODUCT_PRICE: &str = ".inventory_details_price";
const PRODUCT_IMAGE: &str = ".inventory_details_img";
const ADD_TO_CART_BUTTON: &str = "[data-test^='add-to-cart']";
const REMOVE_BUTTON: &str = "[data-test^='remove']";
const BACK_BUTTON: &str = "[data-test='back-to-products']";
const SHOPPING_CART_LINK: &str = ".shopping_cart_link";

/// The single-product screen at `/inventory-item.html`
pub struct ProductDetailPage {
    screen: Screen,
}

impl ProductDetailPage {
    pub fn new(driver: Rc<PageDriver>) -> Self {
        Self {
            screen: Screen::new(driver),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_product_detail_page(&self) -> bool {
        self.screen
            .is_visible(INVENTORY_DETAILS, Some(Duration::from_secs(5)))
    }

    pub fn product_name(&self) -> Result<String> {
        self.screen.text(PRODUCT_NAME)
    }

    pub fn product_description(&self) -> Result<String> {
        self.screen.text(PRODUCT_DESC)
    }

    pub fn product_price(&self) -> Result<String> {
        self.screen.text(PRODUCT_PRICE)
    }

    pub fn product_price_value(&self) -> Result<f64> {
        Ok(money_value(&self.product_price()?))
    }

    pub fn is_product_image_displayed(&self) -> bool {
        self.screen
            .is_visible(PRODUCT_IMAGE, Some(Duration::from_secs(3)))
    }

    pub fn product_image_src(&self) -> Result<String> {
        Ok(self
            .screen
            .attribute(PRODUCT_IMAGE, "src")?
            .unwrap_or_default())
    }

    pub fn add_to_cart(&self) -> Result<()> {
        self.screen.click(ADD_TO_CART_BUTTON)
    }

    pub fn remove_from_cart(&self) -> Result<()> {
        self.screen.click(REMOVE_BUTTON)
    }

    pub fn is_add_to_cart_visible(&self) -> bool {
        self.screen
            .is_visible(ADD_TO_CART_BUTTON, Some(Duration::from_secs(2)))
    }

    pub fn is_remove_visible(&self) -> bool {
        self.screen
            .is_visible(REMOVE_BUTTON, Some(Duration::from_secs(2)))
    }

    pub fn back_to_products(&self) -> Result<()> {
        self.screen.click(BACK_BUTTON)
    }

    pub fn cart_badge_count(&self) -> usize {
        self.screen.cart_badge_count()
    }

    pub fn open_shopping_cart(&self) -> Result<()> {
        self.screen.click(SHOPPING_CART_LINK)
    }
}
