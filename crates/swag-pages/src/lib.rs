//! # swag-pages
//!
//! Typed screen wrappers for the Swag Labs demo shop. Each wrapper
//! composes the shared [`Screen`] capability (click/fill/read/wait over
//! one tab) with its own selectors and semantic actions; there is no
//! base/derived hierarchy.
//!
//! Wrappers never own the tab lifecycle; the harness's fixture provider
//! does. A wrapper is valid only for the test invocation that created it.

mod cart;
mod checkout;
mod inventory;
mod login;
mod product_detail;
mod screen;

pub use cart::CartPage;
pub use checkout::{CheckoutCompletePage, CheckoutStepOnePage, CheckoutStepTwoPage};
pub use inventory::InventoryPage;
pub use login::LoginPage;
pub use product_detail::ProductDetailPage;
pub use screen::{item_slug, money_value, Screen};
