#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod categories;
pub mod events;
pub mod quotes;
pub mod sync;
pub mod transfer;
