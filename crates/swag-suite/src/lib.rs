//! # swag-suite
//!
//! The end-to-end suites for the Swag Labs demo shop, plus the fixture
//! definitions they run against.
//!
//! Suites are collected in module-name order; the harness's ordering
//! policy then moves `test_login` and `test_inventory` to the front and
//! leaves everything else in collection order.

mod fixtures;
mod test_cart;
mod test_checkout;
mod test_inventory;
mod test_login;
mod test_product_detail;

pub use fixtures::registry;

use swag_harness::TestItem;

/// Collect every suite's test items, in collection order
pub fn collect() -> Vec<TestItem> {
    let mut items = Vec::new();
    items.extend(test_cart::suite());
    items.extend(test_checkout::suite());
    items.extend(test_inventory::suite());
    items.extend(test_login::suite());
    items.extend(test_product_detail::suite());
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use swag_harness::{order_items, SUITE_PRIORITY};

    #[test]
    fn test_collection_is_nonempty_per_suite() {
        let items = collect();
        for suite in [
            "test_login",
            "test_inventory",
            "test_cart",
            "test_checkout",
            "test_product_detail",
        ] {
            assert!(
                items.iter().any(|i| i.suite == suite),
                "no items collected for {suite}"
            );
        }
    }

    #[test]
    fn test_every_item_uses_registered_fixtures() {
        let registry = registry(&swag_core::Config::default());
        for item in collect() {
            for name in item.uses {
                assert!(
                    registry.contains(name),
                    "{} uses unregistered fixture '{}'",
                    item.id(),
                    name
                );
            }
        }
    }

    #[test]
    fn test_ordered_run_starts_with_login_suite() {
        let mut items = collect();
        order_items(&mut items);

        assert_eq!(items[0].suite, SUITE_PRIORITY[0]);

        // Every login item precedes every inventory item, which precedes
        // everything else.
        let first_inventory = items.iter().position(|i| i.suite == "test_inventory").unwrap();
        let last_login = items.iter().rposition(|i| i.suite == "test_login").unwrap();
        assert!(last_login < first_inventory);

        let first_unlisted = items
            .iter()
            .position(|i| !SUITE_PRIORITY.contains(&i.suite))
            .unwrap();
        let last_inventory = items.iter().rposition(|i| i.suite == "test_inventory").unwrap();
        assert!(last_inventory < first_unlisted);
    }

    #[test]
    fn test_detail_cases_are_parametrized_per_product() {
        let items = collect();
        let detail_cases = items
            .iter()
            .filter(|i| i.name.starts_with("test_each_product_has_valid_detail_page["))
            .count();
        assert_eq!(detail_cases, 6);
    }

    #[test]
    fn test_navigation_and_state_cases_are_collected() {
        let items = collect();
        for id in [
            "test_cart::test_remove_all_items",
            "test_cart::test_cart_state_persists_after_continue_shopping",
            "test_cart::test_prices_match_inventory_prices",
            "test_cart::test_checkout_with_empty_cart",
            "test_cart::test_click_item_name_navigates_to_detail",
            "test_checkout::test_tax_is_calculated",
            "test_checkout::test_cancel_returns_to_inventory",
            "test_checkout::test_checkout_complete_page_title",
            "test_checkout::test_order_dispatched_message_displayed",
            "test_checkout::test_cart_is_empty_after_checkout",
            "test_checkout::test_error_user_checkout_flow",
            "test_checkout::test_performance_glitch_user_checkout",
            "test_login::test_close_login_error_message",
            "test_product_detail::test_cart_state_persists_when_returning_to_inventory",
            "test_product_detail::test_add_multiple_from_different_detail_pages",
        ] {
            assert!(
                items.iter().any(|i| i.id() == id),
                "missing collected case: {id}"
            );
        }
    }

    #[test]
    fn test_parametrized_login_cases_cover_the_catalog() {
        let items = collect();
        let valid: Vec<_> = items
            .iter()
            .filter(|i| i.name.starts_with("test_valid_user_login["))
            .collect();
        assert_eq!(valid.len(), swag_core::Identity::login_capable().len());
    }
}
