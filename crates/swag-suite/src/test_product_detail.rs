//! Product detail screen tests: navigation, content, and cart actions

use anyhow::ensure;
use swag_harness::TestItem;
use swag_pages::{CartPage, InventoryPage, ProductDetailPage};

const SUITE: &str = "test_product_detail";

pub fn suite() -> Vec<TestItem> {
    let mut items = vec![
        TestItem::new(
            SUITE,
            "test_click_product_name_navigates_to_detail",
            &["logged_in_page", "product_detail_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let detail = scope.get::<ProductDetailPage>("product_detail_page")?;

                let names = inventory.item_names()?;
                inventory.click_product_by_index(0)?;

                ensure!(
                    detail.is_product_detail_page(),
                    "should navigate to the product detail page"
                );
                ensure!(detail.product_name()? == names[0]);
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_click_product_image_navigates_to_detail",
            &["logged_in_page", "product_detail_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let detail = scope.get::<ProductDetailPage>("product_detail_page")?;

                let names = inventory.item_names()?;
                inventory.click_product_image_by_index(0)?;

                ensure!(detail.is_product_detail_page());
                ensure!(detail.product_name()? == names[0]);
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_back_to_products_returns_to_inventory",
            &["logged_in_page", "product_detail_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let detail = scope.get::<ProductDetailPage>("product_detail_page")?;

                inventory.click_product_by_index(0)?;
                ensure!(detail.is_product_detail_page());

                detail.back_to_products()?;
                ensure!(
                    inventory.is_inventory_page(),
                    "should return to the inventory page"
                );
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_detail_shows_product_content",
            &["logged_in_page", "product_detail_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let detail = scope.get::<ProductDetailPage>("product_detail_page")?;

                let names = inventory.item_names()?;
                let prices = inventory.item_prices()?;
                inventory.click_product_by_index(0)?;

                ensure!(detail.product_name()? == names[0]);
                ensure!(detail.product_price()? == prices[0]);
                ensure!(!detail.product_description()?.is_empty());
                ensure!(
                    detail.product_price_value()? > 0.0,
                    "displayed price should parse to a positive value"
                );
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_detail_shows_product_image",
            &["logged_in_page", "product_detail_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let detail = scope.get::<ProductDetailPage>("product_detail_page")?;

                inventory.click_product_by_index(0)?;

                ensure!(detail.is_product_image_displayed());
                ensure!(
                    !detail.product_image_src()?.is_empty(),
                    "product image should have a src"
                );
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_add_and_remove_from_detail",
            &["logged_in_page", "product_detail_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let detail = scope.get::<ProductDetailPage>("product_detail_page")?;

                inventory.click_product_by_index(0)?;
                ensure!(detail.is_add_to_cart_visible());

                detail.add_to_cart()?;
                ensure!(detail.cart_badge_count() == 1);
                ensure!(detail.is_remove_visible());

                detail.remove_from_cart()?;
                ensure!(detail.cart_badge_count() == 0);
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_item_added_from_detail_appears_in_cart",
            &["logged_in_page", "product_detail_page", "cart_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let detail = scope.get::<ProductDetailPage>("product_detail_page")?;
                let cart = scope.get::<CartPage>("cart_page")?;

                inventory.click_product_by_index(0)?;
                let name = detail.product_name()?;

                detail.add_to_cart()?;
                detail.open_shopping_cart()?;

                ensure!(cart.is_cart_page());
                ensure!(
                    cart.item_names()?.contains(&name),
                    "'{name}' should be in the cart"
                );
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_cart_state_persists_when_returning_to_inventory",
            &["logged_in_page", "product_detail_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let detail = scope.get::<ProductDetailPage>("product_detail_page")?;

                inventory.click_product_by_index(0)?;
                detail.add_to_cart()?;
                detail.back_to_products()?;

                ensure!(
                    inventory.cart_badge_count() == 1,
                    "cart state should persist across the detail round trip"
                );
                ensure!(
                    inventory.remove_button_count()? == 1,
                    "the added item should show a Remove button"
                );
                Ok(())
            },
        ),
        TestItem::new(
            SUITE,
            "test_add_multiple_from_different_detail_pages",
            &["logged_in_page", "product_detail_page"],
            |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let detail = scope.get::<ProductDetailPage>("product_detail_page")?;

                for index in 0..3 {
                    inventory.click_product_by_index(index)?;
                    detail.add_to_cart()?;
                    if index < 2 {
                        detail.back_to_products()?;
                    }
                }

                ensure!(
                    detail.cart_badge_count() == 3,
                    "cart should count items added from each detail screen"
                );
                Ok(())
            },
        ),
    ];

    // One case per catalog slot.
    for index in 0..6 {
        items.push(TestItem::new(
            SUITE,
            format!("test_each_product_has_valid_detail_page[{index}]"),
            &["logged_in_page", "product_detail_page"],
            move |scope| {
                let inventory = scope.get::<InventoryPage>("logged_in_page")?;
                let detail = scope.get::<ProductDetailPage>("product_detail_page")?;

                inventory.click_product_by_index(index)?;

                ensure!(
                    detail.is_product_detail_page(),
                    "product {index} should have a detail page"
                );
                ensure!(!detail.product_name()?.is_empty());
                ensure!(!detail.product_description()?.is_empty());
                ensure!(detail.product_price()?.starts_with('$'));
                ensure!(detail.is_product_image_displayed());
                Ok(())
            },
        ));
    }

    items
}
