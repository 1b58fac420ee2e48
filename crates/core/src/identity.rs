//! Identity functions used to decide whether two quotes are the same.

use serde::{Deserialize, Serialize};

use crate::Quote;

/// Which fields make two quotes "the same" during a merge.
///
/// Comparisons are exact and case-sensitive; no trimming is applied beyond
/// what the source provided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteIdentity {
    /// Same `text`, regardless of category. Used for reconciliation and import.
    #[default]
    Text,
    /// Same `text` and same `category`.
    TextAndCategory,
}

impl QuoteIdentity {
    #[must_use]
    pub fn matches(self, existing: &Quote, candidate: &Quote) -> bool {
        match self {
            Self::Text => existing.text == candidate.text,
            Self::TextAndCategory => {
                existing.text == candidate.text && existing.category == candidate.category
            },
        }
    }
}
