//! Cart screen tests: contents, removal, and navigation

use anyhow::ensure;
use swag_harness::TestItem;
use swag_pages::{CartPage, CheckoutStepOnePage, InventoryPage, ProductDetailPage};

const SUITE: &str = "test_cart";

pub fn suite() -> Vec<TestItem> {
    vec![
        TestItem::new(
            SUITE,
            "test_empty_cart_page",
            &["logged_in_page", "cart_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;

                inventory.open_shopping_cart()?;

                ensure!(cart.is_cart_page(), "should be on the cart page");
                ensure!(cart.page_title()? == "Your Cart");
                ensure!(cart.is_empty()?, "cart should be empty");
                ensure!(cart.item_count()? == 0);
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_cart_page_url_is_correct",
            &["logged_in_page", "cart_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;

                inventory.open_shopping_cart()?;
                let url = cart.screen().current_url();

                ensure!(
                    url.contains("cart.html"),
                    "URL should contain 'cart.html', got '{url}'"
                );
                ensure!(cart.screen().document_title()? == "Swag Labs");
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_single_item_in_cart",
            &["logged_in_page", "cart_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;

                let names = inventory.item_names()?;
                let prices = inventory.item_prices()?;

                inventory.add_to_cart_by_index(0)?;
                inventory.open_shopping_cart()?;

                ensure!(cart.item_count()? == 1, "cart should have 1 item");
                ensure!(
                    cart.item_names()?.contains(&names[0]),
                    "'{}' should be in the cart",
                    names[0]
                );
                ensure!(
                    cart.item_prices()?.contains(&prices[0]),
                    "'{}' should be in the cart",
                    prices[0]
                );
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_multiple_items_in_cart",
            &["logged_in_page", "cart_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;

                let names = inventory.item_names()?;
                inventory.add_to_cart_by_name(&names[0])?;
                inventory.add_to_cart_by_name(&names[1])?;
                inventory.add_to_cart_by_name(&names[2])?;
                inventory.open_shopping_cart()?;

                ensure!(cart.item_count()? == 3, "cart should have 3 items");
                let cart_names = cart.item_names()?;
                for name in &names[..3] {
                    ensure!(cart_names.contains(name), "'{name}' should be in the cart");
                }
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_all_items_in_cart",
            &["logged_in_page", "cart_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;

                // Index 0 always targets the first remaining add button.
                for _ in 0..6 {
                    inventory.add_to_cart_by_index(0)?;
                }
                inventory.open_shopping_cart()?;

                ensure!(cart.item_count()? == 6, "cart should have all 6 items");
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_item_quantity_is_one",
            &["logged_in_page", "cart_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;

                let names = inventory.item_names()?;
                inventory.add_to_cart_by_name(&names[0])?;
                inventory.add_to_cart_by_name(&names[1])?;
                inventory.open_shopping_cart()?;

                for qty in cart.item_quantities()? {
                    ensure!(qty == 1, "each item quantity should be 1, got {qty}");
                }
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_item_description_is_displayed",
            &["logged_in_page", "cart_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;

                inventory.add_to_cart_by_index(0)?;
                inventory.open_shopping_cart()?;

                let description = cart.item_description_by_index(0)?;
                ensure!(!description.is_empty(), "cart item should show a description");
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_remove_item_by_index",
            &["logged_in_page", "cart_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;

                let names = inventory.item_names()?;
                inventory.add_to_cart_by_name(&names[0])?;
                inventory.add_to_cart_by_name(&names[1])?;
                inventory.open_shopping_cart()?;

                ensure!(cart.item_count()? == 2);
                cart.remove_by_index(0)?;
                ensure!(cart.item_count()? == 1, "one item should remain");
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_remove_all_items",
            &["logged_in_page", "cart_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;

                inventory.add_to_cart_by_index(0)?;
                inventory.add_to_cart_by_index(0)?;
                inventory.open_shopping_cart()?;

                // Removal shifts indexes too, so always remove the first.
                cart.remove_by_index(0)?;
                cart.remove_by_index(0)?;

                ensure!(cart.is_empty()?, "cart should be empty after removing everything");
                ensure!(cart.screen().cart_badge_count() == 0);
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_remove_item_by_name",
            &["logged_in_page", "cart_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;

                let names = inventory.item_names()?;
                inventory.add_to_cart_by_name(&names[0])?;
                inventory.open_shopping_cart()?;

                cart.remove_by_name(&names[0])?;
                ensure!(cart.is_empty()?, "cart should be empty after removal");
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_continue_shopping_returns_to_inventory",
            &["logged_in_page", "cart_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;

                inventory.open_shopping_cart()?;
                cart.continue_shopping()?;

                ensure!(
                    inventory.is_inventory_page(),
                    "should return to the inventory page"
                );
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_cart_state_persists_after_continue_shopping",
            &["logged_in_page", "cart_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;

                inventory.add_to_cart_by_index(0)?;
                inventory.add_to_cart_by_index(0)?;
                inventory.open_shopping_cart()?;
                ensure!(cart.item_count()? == 2);

                cart.continue_shopping()?;
                ensure!(inventory.is_inventory_page());

                inventory.add_to_cart_by_index(0)?;
                inventory.open_shopping_cart()?;
                ensure!(
                    cart.item_count()? == 3,
                    "cart contents should survive the round trip"
                );
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_prices_match_inventory_prices",
            &["logged_in_page", "cart_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;

                let names = inventory.item_names()?;
                let prices = inventory.item_prices()?;

                // Add by name so the captured prices match the chosen items.
                inventory.add_to_cart_by_name(&names[0])?;
                inventory.add_to_cart_by_name(&names[1])?;
                inventory.open_shopping_cart()?;

                let cart_prices = cart.item_prices()?;
                ensure!(
                    cart_prices.contains(&prices[0]),
                    "cart should show the inventory price '{}'",
                    prices[0]
                );
                ensure!(cart_prices.contains(&prices[1]));
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_checkout_with_empty_cart",
            &["logged_in_page", "cart_page", "checkout_step_one_page"],
            |scope| {
                scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;
                let step_one = scope.get::<CheckoutStepOnePage>("checkout_step_one_page")?;

                // Navigate straight to the cart screen.
                cart.open()?;
                ensure!(cart.is_empty()?);

                // The shop lets an empty cart proceed to step one.
                cart.checkout()?;
                ensure!(step_one.is_checkout_step_one_page());
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_click_item_name_navigates_to_detail",
            &["logged_in_page", "cart_page", "product_detail_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;
                let detail = scope.get::<ProductDetailPage>("product_detail_page")?;

                let names = inventory.item_names()?;
                inventory.add_to_cart_by_index(0)?;
                inventory.open_shopping_cart()?;

                cart.click_item_by_index(0)?;

                ensure!(detail.is_product_detail_page());
                ensure!(
                    cart.screen().current_url().contains("inventory-item.html"),
                    "should navigate to the product detail page"
                );
                ensure!(detail.product_name()? == names[0]);
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_checkout_navigates_to_step_one",
            &["logged_in_page", "cart_page", "checkout_step_one_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;
                let step_one = scope.get::<CheckoutStepOnePage>("checkout_step_one_page")?;

                inventory.add_to_cart_by_index(0)?;
                inventory.open_shopping_cart()?;
                cart.checkout()?;

                ensure!(
                    step_one.is_checkout_step_one_page(),
                    "should be on checkout step one"
                );
                Ok(())
            },
        ),
    ]
}
