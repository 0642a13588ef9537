//! Checkout screen wrappers: information entry, order overview, completion

use crate::screen::{money_value, Screen};
use std::rc::Rc;
use std::time::Duration;
use swag_browser::PageDriver;
use swag_core::Result;

/// Step one: customer information entry at `/checkout-step-one.html`
pub struct CheckoutStepOnePage {
    screen: Screen,
}

const FIRST_NAME_INPUT: &str = "[data-test='firstName']";
const LAST_NAME_INPUT: &str = "[data-test='lastName']";
const POSTAL_CODE_INPUT: &str = "[data-test='postalCode']";
const CONTINUE_BUTTON: &str = "[data-test='continue']";
const CANCEL_BUTTON: &str = "[data-test='cancel']";
const ERROR_MESSAGE: &str = "[data-test='error']";
const ERROR_BUTTON: &str = ".error-button";

impl CheckoutStepOnePage {
    pub fn new(driver: Rc<PageDriver>) -> Self {
        Self {
            screen: Screen::new(driver),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_checkout_step_one_page(&self) -> bool {
        self.screen
            .is_visible(FIRST_NAME_INPUT, Some(Duration::from_secs(5)))
    }

    pub fn page_title(&self) -> Result<String> {
        self.screen.page_title()
    }

    pub fn enter_first_name(&self, first_name: &str) -> Result<()> {
        self.screen.fill(FIRST_NAME_INPUT, first_name)
    }

    pub fn enter_last_name(&self, last_name: &str) -> Result<()> {
        self.screen.fill(LAST_NAME_INPUT, last_name)
    }

    pub fn enter_postal_code(&self, postal_code: &str) -> Result<()> {
        self.screen.fill(POSTAL_CODE_INPUT, postal_code)
    }

    /// Fill all three information fields
    pub fn fill_checkout_info(
        &self,
        first_name: &str,
        last_name: &str,
        postal_code: &str,
    ) -> Result<()> {
        self.enter_first_name(first_name)?;
        self.enter_last_name(last_name)?;
        self.enter_postal_code(postal_code)
    }

    pub fn click_continue(&self) -> Result<()> {
        self.screen.click(CONTINUE_BUTTON)
    }

    pub fn click_cancel(&self) -> Result<()> {
        self.screen.click(CANCEL_BUTTON)
    }

    pub fn is_error_displayed(&self) -> bool {
        self.screen
            .is_visible(ERROR_MESSAGE, Some(Duration::from_secs(3)))
    }

    pub fn error_message(&self) -> Result<String> {
        self.screen.text(ERROR_MESSAGE)
    }

    /// Dismiss the error banner and wait for it to disappear
    pub fn close_error(&self) -> Result<()> {
        self.screen.click(ERROR_BUTTON)?;
        self.screen.wait_hidden(ERROR_MESSAGE)
    }
}

/// Step two: order overview at `/checkout-step-two.html`
pub struct CheckoutStepTwoPage {
    screen: Screen,
}

const CART_ITEM: &str = ".cart_item";
const CART_ITEM_NAME: &str = ".inventory_item_name";
const CART_ITEM_PRICE: &str = ".inventory_item_price";
const SUMMARY_INFO: &str = ".summary_info";
const SUMMARY_SUBTOTAL: &str = ".summary_subtotal_label";
const SUMMARY_TAX: &str = ".summary_tax_label";
const SUMMARY_TOTAL: &str = ".summary_total_label";
const FINISH_BUTTON: &str = "[data-test='finish']";
const OVERVIEW_CANCEL_BUTTON: &str = "[data-test='cancel']";

impl CheckoutStepTwoPage {
    pub fn new(driver: Rc<PageDriver>) -> Self {
        Self {
            screen: Screen::new(driver),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_checkout_step_two_page(&self) -> bool {
        self.screen
            .is_visible(SUMMARY_INFO, Some(Duration::from_secs(5)))
    }

    pub fn page_title(&self) -> Result<String> {
        self.screen.page_title()
    }

    pub fn item_count(&self) -> Result<usize> {
        self.screen.count(CART_ITEM)
    }

    pub fn item_names(&self) -> Result<Vec<String>> {
        self.screen.texts(CART_ITEM_NAME)
    }

    pub fn item_prices(&self) -> Result<Vec<String>> {
        self.screen.texts(CART_ITEM_PRICE)
    }

    /// Displayed subtotal label, without the "Item total: " prefix
    pub fn subtotal(&self) -> Result<String> {
        let text = self.screen.text(SUMMARY_SUBTOTAL)?;
        Ok(text.replace("Item total: ", ""))
    }

    pub fn tax(&self) -> Result<String> {
        let text = self.screen.text(SUMMARY_TAX)?;
        Ok(text.replace("Tax: ", ""))
    }

    pub fn total(&self) -> Result<String> {
        let text = self.screen.text(SUMMARY_TOTAL)?;
        Ok(text.replace("Total: ", ""))
    }

    pub fn subtotal_value(&self) -> Result<f64> {
        Ok(money_value(&self.subtotal()?))
    }

    pub fn tax_value(&self) -> Result<f64> {
        Ok(money_value(&self.tax()?))
    }

    pub fn total_value(&self) -> Result<f64> {
        Ok(money_value(&self.total()?))
    }

    pub fn click_finish(&self) -> Result<()> {
        self.screen.click(FINISH_BUTTON)
    }

    pub fn click_cancel(&self) -> Result<()> {
        self.screen.click(OVERVIEW_CANCEL_BUTTON)
    }
}

/// Completion screen at `/checkout-complete.html`
pub struct CheckoutCompletePage {
    screen: Screen,
}

const COMPLETE_CONTAINER: &str = ".checkout_complete_container";
const COMPLETE_HEADER: &str = ".complete-header";
const COMPLETE_TEXT: &str = ".complete-text";
const PONY_EXPRESS_IMAGE: &str = ".pony_express";
const BACK_HOME_BUTTON: &str = "[data-test='back-to-products']";

impl CheckoutCompletePage {
    pub fn new(driver: Rc<PageDriver>) -> Self {
        Self {
            screen: Screen::new(driver),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_checkout_complete_page(&self) -> bool {
        self.screen
            .is_visible(COMPLETE_CONTAINER, Some(Duration::from_secs(5)))
    }

    pub fn page_title(&self) -> Result<String> {
        self.screen.page_title()
    }

    pub fn complete_header(&self) -> Result<String> {
        self.screen.text(COMPLETE_HEADER)
    }

    pub fn complete_text(&self) -> Result<String> {
        self.screen.text(COMPLETE_TEXT)
    }

    pub fn is_pony_express_displayed(&self) -> bool {
        self.screen
            .is_visible(PONY_EXPRESS_IMAGE, Some(Duration::from_secs(3)))
    }

    pub fn click_back_home(&self) -> Result<()> {
        self.screen.click(BACK_HOME_BUTTON)
    }
}
