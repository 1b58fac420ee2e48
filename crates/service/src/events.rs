//! Change notifications broadcast to observers (HTTP SSE, UI).

use quotebook_core::{CategorySelection, Quote, ReconcileOutcome};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuoteEvent {
    QuoteAdded { quote: Quote },
    QuotesImported { added: usize, skipped: usize },
    QuotesSynced { outcome: ReconcileOutcome },
    CategorySelected { selection: CategorySelection },
}

impl QuoteEvent {
    pub(crate) fn to_json(&self) -> Option<String> {
        match serde_json::to_string(self) {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize quote event");
                None
            },
        }
    }
}
