use std::sync::Arc;

use chrono::Utc;
use quotebook_core::{
    CategoryIndex, CategorySelection, Quote, QuoteError, QuoteStore, ReconciliationEngine,
};
use quotebook_remote::RemoteSource;
use quotebook_storage::{ExportFile, PersistenceAdapter};
use tokio::sync::{Mutex, broadcast};

use crate::{
    AddOutcome, CategoriesView, FilteredView, ImportReport, QuoteEvent, ServiceError, SyncReport,
    SyncStatus,
};

/// Mutable session state. Only touched while holding the service lock.
#[derive(Debug)]
struct QuoteBook {
    store: QuoteStore,
    index: CategoryIndex,
    last_sync: Option<SyncReport>,
}

impl QuoteBook {
    /// Installs a store that has already been persisted.
    fn commit(&mut self, store: QuoteStore) {
        self.store = store;
        self.index.rebuild(&self.store);
    }
}

pub struct QuoteService {
    book: Mutex<QuoteBook>,
    persistence: PersistenceAdapter,
    remote: Option<Arc<dyn RemoteSource>>,
    engine: ReconciliationEngine,
    event_tx: broadcast::Sender<String>,
}

impl std::fmt::Debug for QuoteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteService")
            .field("remote", &self.remote.is_some())
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

impl QuoteService {
    /// Restores the store and the last selected category from `persistence`.
    pub async fn load(
        persistence: PersistenceAdapter,
        remote: Option<Arc<dyn RemoteSource>>,
        event_tx: broadcast::Sender<String>,
    ) -> Result<Self, ServiceError> {
        let adapter = persistence.clone();
        let (store, persisted_selection) = tokio::task::spawn_blocking(move || {
            Ok::<_, ServiceError>((adapter.load()?, adapter.load_selected_category()?))
        })
        .await??;

        let mut index = CategoryIndex::from_store(&store);
        if let Some(selection) = persisted_selection {
            let restored = index.restore_selection(&selection);
            if *restored != selection {
                tracing::info!(persisted = %selection, "Persisted category no longer exists, showing all");
            }
        }

        tracing::info!(
            quotes = store.len(),
            categories = index.len(),
            selected = %index.selected(),
            remote = remote.is_some(),
            "Quote service ready"
        );

        Ok(Self {
            book: Mutex::new(QuoteBook { store, index, last_sync: None }),
            persistence,
            remote,
            engine: ReconciliationEngine::default(),
            event_tx,
        })
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.event_tx.subscribe()
    }

    #[must_use]
    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Adds a quote from user input, persists, then mirrors it to the remote
    /// endpoint if one is configured.
    pub async fn add(&self, text: &str, category: &str) -> Result<AddOutcome, ServiceError> {
        let quote = Quote::new(text, category)?;

        {
            let mut book = self.book.lock().await;
            let mut next = book.store.clone();
            next.add(quote.clone())?;
            self.persist(&next).await?;
            book.commit(next);
        }

        tracing::info!(category = %quote.category, "Quote added");
        self.emit(&QuoteEvent::QuoteAdded { quote: quote.clone() });

        let sync = self.mirror(&quote).await;
        Ok(AddOutcome { quote, sync })
    }

    /// Persists `selection`, then makes it the active filter. A failed save
    /// keeps the previous selection.
    pub async fn select(
        &self,
        selection: CategorySelection,
    ) -> Result<CategorySelection, ServiceError> {
        let selected = {
            let mut book = self.book.lock().await;
            if !book.index.is_known(&selection) {
                return Err(QuoteError::Validation(format!("unknown category: {selection}")).into());
            }
            let adapter = self.persistence.clone();
            let to_save = selection.clone();
            tokio::task::spawn_blocking(move || adapter.save_selected_category(&to_save))
                .await??;
            book.index.select(selection)?.clone()
        };

        tracing::debug!(selection = %selected, "Category selected");
        self.emit(&QuoteEvent::CategorySelected { selection: selected.clone() });
        Ok(selected)
    }

    /// Quotes under `category`, or under the active selection when `None`.
    pub async fn filtered(&self, category: Option<CategorySelection>) -> FilteredView {
        let book = self.book.lock().await;
        let selection = category.unwrap_or_else(|| book.index.selected().clone());
        let quotes = book.store.by_category(&selection).into_iter().cloned().collect();
        FilteredView { selection, quotes }
    }

    /// A random quote from the filtered view; `None` when the view is empty.
    pub async fn random(
        &self,
        category: Option<CategorySelection>,
    ) -> Result<Option<Quote>, ServiceError> {
        let book = self.book.lock().await;
        let selection = category.unwrap_or_else(|| book.index.selected().clone());
        let candidates = book.store.by_category(&selection);
        if candidates.is_empty() {
            return Ok(None);
        }
        Ok(Some(QuoteStore::pick_random(&candidates)?.clone()))
    }

    pub async fn categories(&self) -> CategoriesView {
        let book = self.book.lock().await;
        CategoriesView { categories: book.index.to_vec(), selected: book.index.selected().clone() }
    }

    /// Snapshot of the full store in insertion order.
    pub async fn quotes(&self) -> Vec<Quote> {
        self.book.lock().await.store.as_slice().to_vec()
    }

    pub async fn export(&self) -> Result<ExportFile, ServiceError> {
        let book = self.book.lock().await;
        Ok(PersistenceAdapter::export_to_file(&book.store)?)
    }

    /// Parses an import file and merges it with the same duplicate policy as
    /// remote reconciliation. A rejected file leaves the store untouched.
    pub async fn import(&self, bytes: &[u8]) -> Result<ImportReport, ServiceError> {
        let batch = PersistenceAdapter::import_from_file(bytes)?;
        let parsed = batch.parsed();
        let skipped = batch.skipped;
        let identity = self.engine.identity();

        let added = {
            let mut book = self.book.lock().await;
            let mut next = book.store.clone();
            let added = next.merge(batch.quotes, |a, b| identity.matches(a, b));
            if added > 0 {
                self.persist(&next).await?;
                book.commit(next);
            }
            added
        };

        tracing::info!(parsed, added, skipped, "Quotes imported");
        self.emit(&QuoteEvent::QuotesImported { added, skipped });
        Ok(ImportReport { parsed, added, skipped })
    }

    /// One reconciliation pass against the remote endpoint.
    ///
    /// The fetch happens outside the lock; identity is re-checked under the
    /// lock so quotes added meanwhile are never duplicated. A fetch failure
    /// is reported as `SourceEmpty`.
    pub async fn sync(&self) -> Result<SyncReport, ServiceError> {
        let Some(remote) = self.remote.as_ref() else {
            return Err(ServiceError::NotConfigured("remote endpoint URL not set".to_owned()));
        };

        let fetched = remote.fetch_quotes().await;

        let report = {
            let mut book = self.book.lock().await;
            let mut next = book.store.clone();
            let outcome = self.engine.reconcile_fetched(&mut next, fetched);
            if outcome.changed() {
                self.persist(&next).await?;
                book.commit(next);
            }
            let report = SyncReport { outcome, total: book.store.len(), finished_at: Utc::now() };
            book.last_sync = Some(report);
            report
        };

        if report.outcome.is_source_empty() {
            tracing::info!("Remote sync: nothing received");
        } else {
            tracing::info!(added = report.outcome.added_count(), total = report.total, "Remote sync complete");
        }
        self.emit(&QuoteEvent::QuotesSynced { outcome: report.outcome });
        Ok(report)
    }

    pub async fn last_sync(&self) -> Option<SyncReport> {
        self.book.lock().await.last_sync
    }

    async fn persist(&self, store: &QuoteStore) -> Result<(), ServiceError> {
        let adapter = self.persistence.clone();
        let snapshot = store.clone();
        tokio::task::spawn_blocking(move || adapter.save(&snapshot)).await??;
        Ok(())
    }

    async fn mirror(&self, quote: &Quote) -> SyncStatus {
        let Some(remote) = self.remote.as_ref() else {
            return SyncStatus::Disabled;
        };
        match remote.push_quote(quote).await {
            Ok(()) => SyncStatus::Synced,
            Err(e) => {
                tracing::warn!(error = %e, "Quote saved locally but not synced");
                SyncStatus::LocalOnly { error: e.to_string() }
            },
        }
    }

    fn emit(&self, event: &QuoteEvent) {
        if let Some(json) = event.to_json() {
            // No subscribers is fine.
            let _ = self.event_tx.send(json);
        }
    }
}

#[cfg(test)]
#[path = "quote_service_tests.rs"]
mod tests;
