//! Fixture definitions for the demo-shop suites
//!
//! The dependency graph is rooted at `page` (one fresh browser tab per
//! test). Screen fixtures wrap the same tab; `login_page` additionally
//! navigates to the login screen, and `logged_in_page` performs a full
//! standard-user login so its callers start on the inventory screen
//! without re-checking.

use std::rc::Rc;
use swag_browser::PageDriver;
use swag_core::{Config, Identity};
use swag_harness::{FixtureRegistry, PAGE_FIXTURE};
use swag_pages::{
    CartPage, CheckoutCompletePage, CheckoutStepOnePage, CheckoutStepTwoPage, InventoryPage,
    LoginPage, ProductDetailPage,
};

/// Build the fixture registry used by every suite
pub fn registry(config: &Config) -> FixtureRegistry {
    let mut registry = FixtureRegistry::new();

    let launch_config = config.clone();
    registry.register(PAGE_FIXTURE, &[], move |_| PageDriver::launch(&launch_config));

    // Navigates before returning: the caller is guaranteed to already
    // see the login screen.
    registry.register("login_page", &[PAGE_FIXTURE], |scope| {
        let driver: Rc<PageDriver> = scope.get(PAGE_FIXTURE)?;
        let login = LoginPage::new(driver);
        login.open()?;
        Ok(login)
    });

    // Wraps without navigating: the caller arrives via a prior action.
    registry.register("inventory_page", &[PAGE_FIXTURE], |scope| {
        let driver: Rc<PageDriver> = scope.get(PAGE_FIXTURE)?;
        Ok(InventoryPage::new(driver))
    });

    // Fully authenticated inventory screen: navigate, log in as the
    // standard identity, return the post-login wrapper.
    registry.register("logged_in_page", &[PAGE_FIXTURE], |scope| {
        let driver: Rc<PageDriver> = scope.get(PAGE_FIXTURE)?;
        let login = LoginPage::new(Rc::clone(&driver));
        login.open()?;
        login.login(Identity::STANDARD.username, Identity::STANDARD.password)?;
        Ok(InventoryPage::new(driver))
    });

    registry.register("cart_page", &[PAGE_FIXTURE], |scope| {
        let driver: Rc<PageDriver> = scope.get(PAGE_FIXTURE)?;
        Ok(CartPage::new(driver))
    });

    registry.register("checkout_step_one_page", &[PAGE_FIXTURE], |scope| {
        let driver: Rc<PageDriver> = scope.get(PAGE_FIXTURE)?;
        Ok(CheckoutStepOnePage::new(driver))
    });

    registry.register("checkout_step_two_page", &[PAGE_FIXTURE], |scope| {
        let driver: Rc<PageDriver> = scope.get(PAGE_FIXTURE)?;
        Ok(CheckoutStepTwoPage::new(driver))
    });

    registry.register("checkout_complete_page", &[PAGE_FIXTURE], |scope| {
        let driver: Rc<PageDriver> = scope.get(PAGE_FIXTURE)?;
        Ok(CheckoutCompletePage::new(driver))
    });

    registry.register("product_detail_page", &[PAGE_FIXTURE], |scope| {
        let driver: Rc<PageDriver> = scope.get(PAGE_FIXTURE)?;
        Ok(ProductDetailPage::new(driver))
    });

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_declares_all_screen_fixtures() {
        let registry = registry(&Config::default());

        for name in [
            PAGE_FIXTURE,
            "login_page",
            "inventory_page",
            "logged_in_page",
            "cart_page",
            "checkout_step_one_page",
            "checkout_step_two_page",
            "checkout_complete_page",
            "product_detail_page",
        ] {
            assert!(registry.contains(name), "missing fixture: {name}");
        }
    }
}
