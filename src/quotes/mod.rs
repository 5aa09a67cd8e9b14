//! Quote catalog module

mod builtin;
pub mod catalog;
pub mod models;

pub use catalog::QuoteCatalog;
pub use models::*;
