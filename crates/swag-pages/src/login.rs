//! Login screen wrapper

use crate::screen::Screen;
use std::rc::Rc;
use std::time::Duration;
use swag_browser::PageDriver;
use swag_core::{Result, BASE_URL};
use tracing::info;

const USERNAME_INPUT: &str = "#user-name";
const PASSWORD_INPUT: &str = "#password";
const LOGIN_BUTTON: &str = "#login-button";
const ERROR_MESSAGE: &str = "[data-test='error']";
const ERROR_BUTTON: &str = ".error-button";

/// The login screen at the demo-shop root
pub struct LoginPage {
    screen: Screen,
}

impl LoginPage {
    pub fn new(driver: Rc<PageDriver>) -> Self {
        Self {
            screen: Screen::new(driver),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Navigate to the login screen
    pub fn open(&self) -> Result<()> {
        self.screen.goto(BASE_URL)
    }

    pub fn enter_username(&self, username: &str) -> Result<()> {
        self.screen.fill(USERNAME_INPUT, username)
    }

    pub fn enter_password(&self, password: &str) -> Result<()> {
        self.screen.fill(PASSWORD_INPUT, password)
    }

    pub fn click_login(&self) -> Result<()> {
        self.screen.click(LOGIN_BUTTON)
    }

    /// Submit a full set of credentials
    pub fn login(&self, username: &str, password: &str) -> Result<()> {
        info!("Logging in as {}", username);
        self.enter_username(username)?;
        self.enter_password(password)?;
        self.click_login()
    }

    pub fn error_message(&self) -> Result<String> {
        self.screen.text(ERROR_MESSAGE)
    }

    pub fn is_error_displayed(&self) -> bool {
        self.screen
            .is_visible(ERROR_MESSAGE, Some(Duration::from_secs(3)))
    }

    /// Dismiss the error banner and wait for it to disappear
    pub fn close_error(&self) -> Result<()> {
        self.screen.click(ERROR_BUTTON)?;
        self.screen.wait_hidden(ERROR_MESSAGE)
    }

    pub fn is_login_page(&self) -> bool {
        self.screen
            .is_visible(LOGIN_BUTTON, Some(Duration::from_secs(3)))
    }
}
