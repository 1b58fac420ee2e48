//! Core types for quotebook
//!
//! Domain types shared across all other crates: the quote value, the ordered
//! store, the derived category index and the reconciliation engine.

mod category;
pub mod constants;
mod env_config;
mod error;
mod identity;
mod quote;
mod reconcile;
mod store;

pub use category::*;
pub use env_config::env_parse_with_default;
pub use error::*;
pub use identity::*;
pub use quote::*;
pub use reconcile::*;
pub use store::*;
