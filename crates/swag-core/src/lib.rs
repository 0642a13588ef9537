//! # swag-core
//!
//! Core types for the swagsuite end-to-end harness: the unified error
//! type, environment-driven configuration, and the fixed catalog of
//! test identities for the Swag Labs demo shop.

mod config;
mod error;
mod identity;

pub use config::{BrowserKind, Config, BASE_URL};
pub use error::{Result, SwagError};
pub use identity::{Identity, IdentityCategory, PASSWORD};
