//! Service layer for quotebook
//!
//! Every user or timer event maps to one `QuoteService` operation. The
//! service owns the quote store and category index, persists after each
//! mutation and serialises mutations so they never interleave.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod error;
mod events;
mod quote_service;
mod scheduler;
mod types;

pub use error::ServiceError;
pub use events::QuoteEvent;
pub use quote_service::QuoteService;
pub use scheduler::spawn_sync_scheduler;
pub use types::{AddOutcome, CategoriesView, FilteredView, ImportReport, SyncReport, SyncStatus};
