//! Merging externally sourced quote batches into the local store.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Quote, QuoteIdentity, QuoteStore};

/// Quote-shaped records obtained from outside the session. Lives for one
/// reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteQuoteBatch(Vec<Quote>);

impl RemoteQuoteBatch {
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Quote] {
        &self.0
    }
}

impl From<Vec<Quote>> for RemoteQuoteBatch {
    fn from(quotes: Vec<Quote>) -> Self {
        Self(quotes)
    }
}

impl IntoIterator for RemoteQuoteBatch {
    type Item = Quote;
    type IntoIter = std::vec::IntoIter<Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Result of one reconciliation pass.
///
/// `SourceEmpty` (nothing arrived, including transport failure) is distinct
/// from `Merged { added: 0 }` (records arrived, all already known).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReconcileOutcome {
    SourceEmpty,
    Merged { added: usize },
}

impl ReconcileOutcome {
    #[must_use]
    pub const fn added_count(&self) -> usize {
        match self {
            Self::SourceEmpty => 0,
            Self::Merged { added } => *added,
        }
    }

    #[must_use]
    pub const fn is_source_empty(&self) -> bool {
        matches!(self, Self::SourceEmpty)
    }

    /// Whether the store was mutated by the pass.
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.added_count() > 0
    }
}

/// Merges remote batches into a [`QuoteStore`] without duplicating entries.
///
/// Safe to run repeatedly: a batch already merged adds nothing on the next
/// pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconciliationEngine {
    identity: QuoteIdentity,
}

impl ReconciliationEngine {
    #[must_use]
    pub const fn new(identity: QuoteIdentity) -> Self {
        Self { identity }
    }

    #[must_use]
    pub const fn identity(&self) -> QuoteIdentity {
        self.identity
    }

    pub fn reconcile(&self, store: &mut QuoteStore, batch: RemoteQuoteBatch) -> ReconcileOutcome {
        if batch.is_empty() {
            return ReconcileOutcome::SourceEmpty;
        }
        let identity = self.identity;
        let added = store.merge(batch, |existing, candidate| identity.matches(existing, candidate));
        ReconcileOutcome::Merged { added }
    }

    /// Reconciles the result of a fetch. A transport failure is logged and
    /// treated as an empty batch; this never fails.
    pub fn reconcile_fetched<E: fmt::Display>(
        &self,
        store: &mut QuoteStore,
        fetched: Result<RemoteQuoteBatch, E>,
    ) -> ReconcileOutcome {
        match fetched {
            Ok(batch) => self.reconcile(store, batch),
            Err(e) => {
                tracing::warn!(error = %e, "remote fetch failed, treating as empty batch");
                ReconcileOutcome::SourceEmpty
            },
        }
    }
}
