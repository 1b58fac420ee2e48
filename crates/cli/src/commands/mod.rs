use std::sync::Arc;

use anyhow::Result;
use quotebook_remote::{RemoteClient, RemoteSource};
use quotebook_service::QuoteService;
use quotebook_storage::{PersistenceAdapter, SqliteStore};
use tokio::sync::broadcast;

use crate::config::{Config, ensure_db_dir};

pub(crate) mod quotes;
pub(crate) mod serve;
pub(crate) mod sync;
pub(crate) mod transfer;

/// Opens the database and restores the service from it.
pub(crate) async fn open_service(config: &Config) -> Result<Arc<QuoteService>> {
    ensure_db_dir(&config.db_path)?;
    let db_path = config.db_path.clone();
    let kv = tokio::task::spawn_blocking(move || SqliteStore::new(&db_path)).await??;
    let persistence = PersistenceAdapter::new(Arc::new(kv));

    let remote = match config.remote_url.as_deref() {
        Some(url) => {
            let client = RemoteClient::new(url, config.remote_timeout)?
                .with_limit(config.remote_limit);
            tracing::debug!(url = client.base_url(), limit = client.limit(), "Remote sync enabled");
            Some(Arc::new(client) as Arc<dyn RemoteSource>)
        },
        None => None,
    };

    // Initial receiver dropped - subscribers use subscribe()
    let (event_tx, _initial_rx) = broadcast::channel(100);
    Ok(Arc::new(QuoteService::load(persistence, remote, event_tx).await?))
}
