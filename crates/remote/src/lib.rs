//! Remote quote endpoint client
//!
//! Fetches externally shaped records and maps them into quotes, and mirrors
//! locally added quotes outward. Failures are typed so callers can degrade
//! to "local only" without touching local state.

mod client;
mod error;
mod source;
mod wire_types;


pub use client::{QUOTES_PATH, RemoteClient, truncate};
pub use error::RemoteError;
pub use source::RemoteSource;
pub use wire_types::{NewRemoteRecord, RemoteRecord};
