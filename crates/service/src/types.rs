//! Results returned by service operations.

use chrono::{DateTime, Utc};
use quotebook_core::{CategorySelection, Quote, ReconcileOutcome};
use serde::Serialize;

/// Outcome of mirroring a local add to the remote endpoint. Never affects
/// local state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SyncStatus {
    /// Remote accepted the quote.
    Synced,
    /// Saved locally; the remote call failed.
    LocalOnly { error: String },
    /// No remote endpoint configured.
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddOutcome {
    pub quote: Quote,
    pub sync: SyncStatus,
}

/// Quotes under one selection. An empty view is the "no quotes found in
/// this category" state, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredView {
    pub selection: CategorySelection,
    pub quotes: Vec<Quote>,
}

impl FilteredView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoriesView {
    pub categories: Vec<String>,
    pub selected: CategorySelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Array elements in the file.
    pub parsed: usize,
    /// Quotes appended to the store.
    pub added: usize,
    /// Elements that were not valid quotes.
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub outcome: ReconcileOutcome,
    pub total: usize,
    pub finished_at: DateTime<Utc>,
}
