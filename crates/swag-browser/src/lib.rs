//! # swag-browser
//!
//! A blocking browser driver for the swagsuite harness, built on the
//! Chrome DevTools Protocol via `headless_chrome`.
//!
//! One [`PageDriver`] owns exactly one browser tab. Every action carries
//! an implicit wait-for-element precondition bounded by the configured
//! default timeout; an action whose precondition cannot be satisfied in
//! time fails with [`swag_core::SwagError`]. The two visibility checks
//! that return `bool` convert a timeout into `false` by contract.

mod driver;

pub use driver::PageDriver;
