#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use async_trait::async_trait;
use quotebook_core::{
    CategorySelection, Quote, QuoteError, QuoteStore, ReconcileOutcome, RemoteQuoteBatch, seed_quotes,
};
use quotebook_remote::{RemoteError, RemoteSource};
use quotebook_storage::{KeyValueStore, MemoryStore, PersistenceAdapter, StorageError};
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::{QuoteService, ServiceError, SyncStatus, spawn_sync_scheduler};

fn quote(text: &str, category: &str) -> Quote {
    Quote { text: text.to_owned(), category: category.to_owned() }
}

#[derive(Default)]
struct FakeRemote {
    batch: StdMutex<Vec<Quote>>,
    fail_fetch: bool,
    fail_push: bool,
    fetches: AtomicUsize,
    pushed: StdMutex<Vec<Quote>>,
}

impl FakeRemote {
    fn serving(quotes: Vec<Quote>) -> Self {
        Self { batch: StdMutex::new(quotes), ..Self::default() }
    }

    fn failing() -> Self {
        Self { fail_fetch: true, fail_push: true, ..Self::default() }
    }
}

#[async_trait]
impl RemoteSource for FakeRemote {
    async fn fetch_quotes(&self) -> Result<RemoteQuoteBatch, RemoteError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_fetch {
            return Err(RemoteError::HttpStatus { code: 503, body: "unavailable".to_owned() });
        }
        Ok(RemoteQuoteBatch::from(self.batch.lock().unwrap().clone()))
    }

    async fn push_quote(&self, quote: &Quote) -> Result<(), RemoteError> {
        if self.fail_push {
            return Err(RemoteError::HttpStatus { code: 500, body: "boom".to_owned() });
        }
        self.pushed.lock().unwrap().push(quote.clone());
        Ok(())
    }
}

/// Reads succeed, writes always fail.
#[derive(Default)]
struct ReadOnlyStore(MemoryStore);

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::LockPoisoned("read only".to_owned()))
    }
}

fn adapter_with(quotes: &[Quote]) -> PersistenceAdapter {
    let adapter = PersistenceAdapter::new(Arc::new(MemoryStore::new()));
    adapter.save(&QuoteStore::from_quotes(quotes.to_vec())).unwrap();
    adapter
}

async fn service(
    quotes: &[Quote],
    remote: Option<Arc<dyn RemoteSource>>,
) -> (PersistenceAdapter, QuoteService) {
    let adapter = adapter_with(quotes);
    let (tx, _rx) = broadcast::channel(16);
    let service = QuoteService::load(adapter.clone(), remote, tx).await.unwrap();
    (adapter, service)
}

#[tokio::test]
async fn load_falls_back_to_seed_quotes() {
    let adapter = PersistenceAdapter::new(Arc::new(MemoryStore::new()));
    let (tx, _rx) = broadcast::channel(4);
    let service = QuoteService::load(adapter, None, tx).await.unwrap();
    assert_eq!(service.quotes().await, seed_quotes());
}

#[tokio::test]
async fn add_persists_and_reports_disabled_sync() {
    let (adapter, service) = service(&[quote("A", "X")], None).await;

    let outcome = service.add("  New one ", " Wisdom ").await.unwrap();
    assert_eq!(outcome.quote, quote("New one", "Wisdom"));
    assert_eq!(outcome.sync, SyncStatus::Disabled);

    let persisted = adapter.load().unwrap();
    assert_eq!(persisted.len(), 2);
    assert!(service.categories().await.categories.contains(&"Wisdom".to_owned()));
}

#[tokio::test]
async fn add_with_blank_text_leaves_store_unchanged() {
    let (adapter, service) = service(&[quote("A", "X")], None).await;

    let err = service.add("   ", "Motivation").await.unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(service.quotes().await.len(), 1);
    assert_eq!(adapter.load().unwrap().len(), 1);
}

#[tokio::test]
async fn add_failed_save_leaves_state_unchanged() {
    let kv = Arc::new(ReadOnlyStore::default());
    let adapter = PersistenceAdapter::new(kv);
    let (tx, _rx) = broadcast::channel(4);
    let service = QuoteService::load(adapter, None, tx).await.unwrap();
    let before = service.quotes().await;

    let err = service.add("Fresh", "New").await.unwrap_err();
    assert!(matches!(err, ServiceError::Storage(_)));
    assert_eq!(service.quotes().await, before);
    assert!(!service.categories().await.categories.contains(&"New".to_owned()));
}

#[tokio::test]
async fn select_failed_save_keeps_previous_selection() {
    let adapter = PersistenceAdapter::new(Arc::new(ReadOnlyStore::default()));
    let (tx, _rx) = broadcast::channel(4);
    let service = QuoteService::load(adapter.clone(), None, tx).await.unwrap();

    let err = service.select(CategorySelection::from("Life")).await.unwrap_err();
    assert!(matches!(err, ServiceError::Storage(_)));
    assert_eq!(service.categories().await.selected, CategorySelection::All);
    assert_eq!(adapter.load_selected_category().unwrap(), None);
    assert_eq!(service.filtered(None).await.quotes, seed_quotes());
}

#[tokio::test]
async fn committed_changes_refresh_categories() {
    let remote = Arc::new(FakeRemote::serving(vec![quote("R1", "Server")]));
    let (_adapter, service) = service(&[quote("A", "Life")], Some(remote)).await;

    service.import(br#"[{"text":"B","category":"Humor"}]"#).await.unwrap();
    service.sync().await.unwrap();

    let categories = service.categories().await.categories;
    assert_eq!(categories, vec!["Humor".to_owned(), "Life".to_owned(), "Server".to_owned()]);
}

#[tokio::test]
async fn add_mirrors_to_remote() {
    let remote = Arc::new(FakeRemote::default());
    let (_adapter, service) = service(&[], Some(remote.clone())).await;

    let outcome = service.add("Hello", "Greeting").await.unwrap();
    assert_eq!(outcome.sync, SyncStatus::Synced);
    assert_eq!(*remote.pushed.lock().unwrap(), vec![quote("Hello", "Greeting")]);
}

#[tokio::test]
async fn add_remote_failure_is_local_only() {
    let remote = Arc::new(FakeRemote::failing());
    let (adapter, service) = service(&[], Some(remote)).await;

    let outcome = service.add("Hello", "Greeting").await.unwrap();
    assert!(matches!(outcome.sync, SyncStatus::LocalOnly { .. }));
    assert_eq!(adapter.load().unwrap().len(), 1);
}

#[tokio::test]
async fn select_persists_and_filters() {
    let (adapter, service) =
        service(&[quote("A", "Life"), quote("B", "Humor"), quote("C", "Life")], None).await;

    let selected = service.select(CategorySelection::from("Life")).await.unwrap();
    assert_eq!(selected, CategorySelection::from("Life"));
    assert_eq!(adapter.load_selected_category().unwrap(), Some(selected.clone()));

    let view = service.filtered(None).await;
    assert_eq!(view.quotes, vec![quote("A", "Life"), quote("C", "Life")]);

    let random = service.random(None).await.unwrap().unwrap();
    assert_eq!(random.category, "Life");
}

#[tokio::test]
async fn select_unknown_category_is_rejected() {
    let (_adapter, service) = service(&[quote("A", "Life")], None).await;

    let err = service.select(CategorySelection::from("Humor")).await.unwrap_err();
    assert!(err.is_invalid_input());
    assert_eq!(service.categories().await.selected, CategorySelection::All);
}

#[tokio::test]
async fn stale_persisted_selection_resets_to_all() {
    let adapter = adapter_with(&[quote("A", "Life")]);
    adapter.save_selected_category(&CategorySelection::from("Humor")).unwrap();
    let (tx, _rx) = broadcast::channel(4);

    let service = QuoteService::load(adapter, None, tx).await.unwrap();
    assert_eq!(service.categories().await.selected, CategorySelection::All);
}

#[tokio::test]
async fn padded_stored_category_matches_its_filter() {
    let (_adapter, service) = service(&[quote("A", " Life ")], None).await;

    assert_eq!(service.categories().await.categories, vec!["Life".to_owned()]);
    let view = service.filtered(Some(CategorySelection::from("Life"))).await;
    assert_eq!(view.quotes, vec![quote("A", "Life")]);
}

#[tokio::test]
async fn random_on_empty_filter_is_none() {
    let (_adapter, service) = service(&[quote("A", "Life")], None).await;
    let pick = service.random(Some(CategorySelection::from("Nope"))).await.unwrap();
    assert!(pick.is_none());
    assert!(service.filtered(Some(CategorySelection::from("Nope"))).await.is_empty());
}

#[tokio::test]
async fn import_merges_without_duplicates() {
    let (adapter, service) = service(&[quote("A", "X")], None).await;
    let body = br#"[{"text":"A","category":"Y"},{"text":"B","category":"Y"},{"text":""},42]"#;

    let report = service.import(body).await.unwrap();
    assert_eq!(report.parsed, 4);
    assert_eq!(report.added, 1);
    assert_eq!(report.skipped, 2);
    assert_eq!(adapter.load().unwrap().len(), 2);
}

#[tokio::test]
async fn import_of_non_array_is_format_error() {
    let (_adapter, service) = service(&[quote("A", "X")], None).await;

    let err = service.import(br#"{"text":"A","category":"X"}"#).await.unwrap_err();
    assert!(matches!(err, ServiceError::Quote(QuoteError::Format(_))));
    assert_eq!(service.quotes().await, vec![quote("A", "X")]);
}

#[tokio::test]
async fn export_round_trips_through_import() {
    let (_adapter, service) = service(&[quote("A", "X"), quote("B", "Y")], None).await;
    let file = service.export().await.unwrap();
    assert_eq!(file.file_name, "quotes.json");

    let report = service.import(&file.bytes).await.unwrap();
    assert_eq!(report.added, 0);
    assert_eq!(report.parsed, 2);
}

#[tokio::test]
async fn sync_without_remote_is_not_configured() {
    let (_adapter, service) = service(&[], None).await;
    assert!(matches!(service.sync().await, Err(ServiceError::NotConfigured(_))));
}

#[tokio::test]
async fn sync_is_idempotent() {
    let remote = Arc::new(FakeRemote::serving(vec![quote("R1", "Server"), quote("A", "Y")]));
    let (adapter, service) = service(&[quote("A", "X")], Some(remote)).await;

    let first = service.sync().await.unwrap();
    assert_eq!(first.outcome, ReconcileOutcome::Merged { added: 1 });
    assert_eq!(first.total, 2);

    let second = service.sync().await.unwrap();
    assert_eq!(second.outcome, ReconcileOutcome::Merged { added: 0 });
    assert_eq!(adapter.load().unwrap().len(), 2);
    assert_eq!(service.last_sync().await, Some(second));
}

#[tokio::test]
async fn sync_transport_failure_is_source_empty() {
    let remote = Arc::new(FakeRemote::failing());
    let (_adapter, service) = service(&[quote("A", "X")], Some(remote)).await;

    let report = service.sync().await.unwrap();
    assert_eq!(report.outcome, ReconcileOutcome::SourceEmpty);
    assert_eq!(service.quotes().await, vec![quote("A", "X")]);
}

#[tokio::test]
async fn sync_emits_event() {
    let remote = Arc::new(FakeRemote::serving(vec![quote("R1", "Server")]));
    let (_adapter, service) = service(&[], Some(remote)).await;
    let mut rx = service.subscribe();

    service.sync().await.unwrap();
    let event = rx.recv().await.unwrap();
    assert!(event.contains("quotes_synced"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_add_and_sync_never_duplicate() {
    let remote = Arc::new(FakeRemote::serving(vec![quote("Shared", "Server")]));
    let (_adapter, service) = service(&[], Some(remote)).await;
    let service = Arc::new(service);

    let adder = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.add("Shared", "Mine").await })
    };
    let syncer = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.sync().await })
    };
    adder.await.unwrap().unwrap();
    syncer.await.unwrap().unwrap();

    // A local add never dedupes, so the remote copy lands only if sync ran first.
    let shared = service.quotes().await.iter().filter(|q| q.text == "Shared").count();
    assert!((1..=2).contains(&shared));

    let again = service.sync().await.unwrap();
    assert_eq!(again.outcome, ReconcileOutcome::Merged { added: 0 });
    let after = service.quotes().await.iter().filter(|q| q.text == "Shared").count();
    assert_eq!(after, shared);
}

#[tokio::test]
async fn scheduler_syncs_immediately_and_stops_on_shutdown() {
    let remote = Arc::new(FakeRemote::serving(vec![quote("R1", "Server")]));
    let (_adapter, service) = service(&[], Some(remote.clone())).await;
    let service = Arc::new(service);
    let shutdown = CancellationToken::new();

    let handle =
        spawn_sync_scheduler(Arc::clone(&service), Duration::from_secs(3600), shutdown.clone());

    tokio::time::timeout(Duration::from_secs(5), async {
        while service.last_sync().await.is_none() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .unwrap();

    shutdown.cancel();
    handle.await.unwrap();
    assert_eq!(remote.fetches.load(Ordering::SeqCst), 1);
    assert_eq!(service.quotes().await, vec![quote("R1", "Server")]);
}
