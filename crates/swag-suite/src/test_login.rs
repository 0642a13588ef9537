//! Login flow tests: valid identities, locked-out identities, and
//! credential validation messages

use anyhow::ensure;
use swag_browser::PageDriver;
use swag_core::{Identity, PASSWORD};
use swag_harness::{TestItem, PAGE_FIXTURE};
use swag_pages::{InventoryPage, LoginPage};

const SUITE: &str = "test_login";

pub fn suite() -> Vec<TestItem> {
    let mut items = Vec::new();

    // One case per login-capable identity.
    for user in Identity::login_capable() {
        items.push(TestItem::new(
            SUITE,
            format!("test_valid_user_login[{}]", user.username),
            &["login_page", "inventory_page"],
            move |scope| {
                let login = scope.get::<LoginPage>("login_page")?;
                let inventory = scope.get::<InventoryPage>("inventory_page")?;

                login.login(user.username, user.password)?;

                ensure!(
                    inventory.is_inventory_page(),
                    "{}: inventory page should be displayed after login",
                    user.username
                );
                ensure!(
                    inventory.inventory_count()? > 0,
                    "{}: products should be displayed",
                    user.username
                );
                Ok(())
            },
        ));
    }

    // One case per login-incapable identity.
    for user in Identity::login_incapable() {
        items.push(TestItem::new(
            SUITE,
            format!("test_invalid_user_login[{}]", user.username),
            &["login_page"],
            move |scope| {
                let login = scope.get::<LoginPage>("login_page")?;

                login.login(user.username, user.password)?;

                ensure!(
                    login.is_error_displayed(),
                    "{}: an error message should be displayed",
                    user.username
                );
                let message = login.error_message()?;
                let expected = user.expected_error.unwrap_or_default();
                ensure!(
                    message.contains(expected),
                    "{}: expected error '{}', got '{}'",
                    user.username,
                    expected,
                    message
                );
                Ok(())
            },
        ));
    }

    items.push(TestItem::new(
        SUITE,
        "test_empty_username",
        &["login_page"],
        |scope| {
            let login = scope.get::<LoginPage>("login_page")?;

            login.enter_password(PASSWORD)?;
            login.click_login()?;

            ensure!(login.is_error_displayed());
            let message = login.error_message()?;
            ensure!(
                message.contains("Username is required"),
                "expected username-required error, got '{message}'"
            );
            Ok(())
        },
    ));

    items.push(TestItem::new(
        SUITE,
        "test_empty_password",
        &["login_page"],
        |scope| {
            let login = scope.get::<LoginPage>("login_page")?;

            login.enter_username(Identity::STANDARD.username)?;
            login.click_login()?;

            ensure!(login.is_error_displayed());
            let message = login.error_message()?;
            ensure!(
                message.contains("Password is required"),
                "expected password-required error, got '{message}'"
            );
            Ok(())
        },
    ));

    items.push(TestItem::new(
        SUITE,
        "test_empty_credentials",
        &["login_page"],
        |scope| {
            let login = scope.get::<LoginPage>("login_page")?;

            login.click_login()?;

            ensure!(login.is_error_displayed());
            ensure!(login.error_message()?.contains("Username is required"));
            Ok(())
        },
    ));

    items.push(TestItem::new(
        SUITE,
        "test_invalid_username",
        &["login_page"],
        |scope| {
            let login = scope.get::<LoginPage>("login_page")?;

            login.login("invalid_user", PASSWORD)?;

            ensure!(login.is_error_displayed());
            ensure!(login.error_message()?.contains("do not match"));
            Ok(())
        },
    ));

    items.push(TestItem::new(
        SUITE,
        "test_invalid_password",
        &["login_page"],
        |scope| {
            let login = scope.get::<LoginPage>("login_page")?;

            login.login(Identity::STANDARD.username, "wrong_password")?;

            ensure!(login.is_error_displayed());
            ensure!(login.error_message()?.contains("do not match"));
            Ok(())
        },
    ));

    items.push(TestItem::new(
        SUITE,
        "test_close_login_error_message",
        &["login_page"],
        |scope| {
            let login = scope.get::<LoginPage>("login_page")?;

            login.login("invalid_user", PASSWORD)?;
            ensure!(login.is_error_displayed());

            // close_error waits for the banner to disappear.
            login.close_error()?;
            Ok(())
        },
    ));

    items.push(TestItem::new(
        SUITE,
        "test_standard_user_can_see_all_products",
        &["login_page", "inventory_page"],
        |scope| {
            let login = scope.get::<LoginPage>("login_page")?;
            let inventory = scope.get::<InventoryPage>("inventory_page")?;

            login.login(Identity::STANDARD.username, Identity::STANDARD.password)?;

            ensure!(inventory.is_inventory_page());
            ensure!(
                inventory.inventory_count()? == 6,
                "the catalog should show 6 products"
            );
            ensure!(inventory.page_title()? == "Products");
            Ok(())
        },
    ));

    items.push(TestItem::new(
        SUITE,
        "test_locked_out_user_cannot_login",
        &["login_page"],
        |scope| {
            let login = scope.get::<LoginPage>("login_page")?;
            let user = Identity::LOCKED_OUT;

            login.login(user.username, user.password)?;

            ensure!(login.is_error_displayed());
            let message = login.error_message()?;
            ensure!(
                message.to_lowercase().contains("locked out"),
                "expected locked-out error, got '{message}'"
            );
            Ok(())
        },
    ));

    items.push(TestItem::new(
        SUITE,
        "test_logout_returns_to_login_page",
        &["logged_in_page"],
        |scope| {
            let inventory = scope.get::<InventoryPage>("logged_in_page")?;

            inventory.logout()?;

            // Wrap the same tab without navigating; logout itself must
            // have landed us on the login screen.
            let driver = scope.get::<PageDriver>(PAGE_FIXTURE)?;
            let login = LoginPage::new(driver);
            ensure!(login.is_login_page(), "should be back on the login screen");
            Ok(())
        },
    ));

    items
}
