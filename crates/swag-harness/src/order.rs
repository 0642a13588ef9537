//! Collection-time ordering policy
//!
//! Authentication must be exercised before anything that assumes a
//! session, so listed suites sort to the front in list order. Every
//! unlisted suite gets the same sentinel key; the sort being stable is
//! what keeps their mutual collection order intact.

use crate::item::TestItem;

/// Suites that must run first, in priority order
pub const SUITE_PRIORITY: &[&str] = &["test_login", "test_inventory"];

/// Order key for a suite: its priority-list index, or the list length
/// as a trailing sentinel when the suite is unlisted
pub fn order_key(suite: &str) -> usize {
    SUITE_PRIORITY
        .iter()
        .position(|s| *s == suite)
        .unwrap_or(SUITE_PRIORITY.len())
}

/// Reorder the collected items in place
///
/// `sort_by_key` is stable, so items sharing a key keep their relative
/// collection order. Nothing is filtered, skipped, or mutated.
pub fn order_items(items: &mut [TestItem]) {
    items.sort_by_key(|item| order_key(item.suite));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(suite: &'static str, name: &str) -> TestItem {
        TestItem::new(suite, name, &[], |_| Ok(()))
    }

    fn ids(items: &[TestItem]) -> Vec<String> {
        items.iter().map(TestItem::id).collect()
    }

    #[test]
    fn test_listed_suites_run_first_in_priority_order() {
        let mut items = vec![
            item("test_cart", "c1"),
            item("test_cart", "c2"),
            item("test_inventory", "i1"),
            item("test_cart", "c3"),
            item("test_login", "l1"),
            item("test_inventory", "i2"),
            item("test_cart", "c4"),
            item("test_login", "l2"),
            item("test_login", "l3"),
        ];

        order_items(&mut items);

        assert_eq!(
            ids(&items),
            vec![
                "test_login::l1",
                "test_login::l2",
                "test_login::l3",
                "test_inventory::i1",
                "test_inventory::i2",
                "test_cart::c1",
                "test_cart::c2",
                "test_cart::c3",
                "test_cart::c4",
            ]
        );
    }

    #[test]
    fn test_unlisted_suites_keep_collection_order() {
        let mut items = vec![
            item("test_checkout", "k1"),
            item("test_product_detail", "p1"),
            item("test_checkout", "k2"),
            item("test_login", "l1"),
        ];

        order_items(&mut items);

        assert_eq!(
            ids(&items),
            vec![
                "test_login::l1",
                "test_checkout::k1",
                "test_product_detail::p1",
                "test_checkout::k2",
            ]
        );
    }

    #[test]
    fn test_ordering_is_idempotent() {
        let mut items = vec![
            item("test_cart", "c1"),
            item("test_login", "l1"),
            item("test_inventory", "i1"),
            item("test_other", "o1"),
        ];

        order_items(&mut items);
        let first_pass = ids(&items);

        order_items(&mut items);
        assert_eq!(ids(&items), first_pass);
    }

    #[test]
    fn test_unknown_suite_gets_sentinel_key() {
        assert_eq!(order_key("test_login"), 0);
        assert_eq!(order_key("test_inventory"), 1);
        assert_eq!(order_key("test_cart"), SUITE_PRIORITY.len());
        assert_eq!(order_key("anything_else"), SUITE_PRIORITY.len());
    }
}
