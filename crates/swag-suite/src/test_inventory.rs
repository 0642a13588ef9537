//! Inventory screen tests: catalog contents and cart badge behavior

use anyhow::ensure;
use swag_core::Identity;
use swag_harness::TestItem;
use swag_pages::{InventoryPage, LoginPage};

const SUITE: &str = "test_inventory";

pub fn suite() -> Vec<TestItem> {
    vec![
        TestItem::new(
            SUITE,
            "test_inventory_displays_six_products",
            &["logged_in_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                ensure!(
                    inventory.inventory_count()? == 6,
                    "the catalog should show 6 products"
                );
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_inventory_page_title",
            &["logged_in_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                ensure!(inventory.page_title()? == "Products");
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_all_products_have_names",
            &["logged_in_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let names = inventory.item_names()?;
                ensure!(names.len() == 6);
                for name in &names {
                    ensure!(!name.is_empty(), "every product should have a name");
                }
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_all_products_have_prices",
            &["logged_in_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let prices = inventory.item_prices()?;
                ensure!(prices.len() == 6);
                for price in &prices {
                    ensure!(
                        price.starts_with('$'),
                        "every price should start with $, got '{price}'"
                    );
                }
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_add_item_to_cart",
            &["logged_in_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;

                // A fresh logged_in_page never carries cart state over
                // from a previous test.
                ensure!(inventory.cart_badge_count() == 0, "cart should start empty");

                inventory.add_to_cart_by_index(0)?;
                ensure!(inventory.cart_badge_count() == 1);
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_add_multiple_items_to_cart",
            &["logged_in_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;

                let names = inventory.item_names()?;
                // Add by name: the index shifts as buttons turn into Remove.
                inventory.add_to_cart_by_name(&names[0])?;
                inventory.add_to_cart_by_name(&names[1])?;
                inventory.add_to_cart_by_name(&names[2])?;

                ensure!(inventory.cart_badge_count() == 3);
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_add_two_then_remove_one",
            &["logged_in_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;

                inventory.add_to_cart_by_index(0)?;
                inventory.add_to_cart_by_index(1)?;
                ensure!(inventory.cart_badge_count() == 2);

                inventory.remove_by_index(0)?;
                ensure!(inventory.cart_badge_count() == 1);
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_problem_user_sees_products",
            &["login_page", "inventory_page"],
            |scope| {
                let login = scope.get::<LoginPage>("login_page")?;
                let inventory = scope.get::<InventoryPage>("inventory_page")?;
                let user = Identity::PROBLEM;

                login.login(user.username, user.password)?;

                ensure!(inventory.is_inventory_page());
                ensure!(inventory.inventory_count()? == 6);
                Ok(())
            },
        ),
    ]
}
