//! Maps the quote store and the selected category onto a key/value slot,
//! and converts the store to and from user-facing JSON files.

use std::sync::Arc;

use quotebook_core::constants::{EXPORT_FILE_NAME, LAST_SELECTED_CATEGORY_KEY, QUOTES_KEY};
use quotebook_core::{CategorySelection, Quote, QuoteError, QuoteStore, seed_quotes};
use serde_json::Value;

use crate::{KeyValueStore, StorageError};

/// A file ready to be offered to the user for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Quotes parsed from an import file, not yet merged into any store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    /// Valid records, in file order, category trimmed.
    pub quotes: Vec<Quote>,
    /// Array elements that were not `{text, category}` objects with
    /// non-blank string fields.
    pub skipped: usize,
}

impl ImportBatch {
    /// Number of array elements in the file.
    #[must_use]
    pub fn parsed(&self) -> usize {
        self.quotes.len().saturating_add(self.skipped)
    }
}

/// Persistence adapter between the in-memory store and a durable slot.
#[derive(Clone)]
pub struct PersistenceAdapter {
    kv: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistenceAdapter").finish_non_exhaustive()
    }
}

impl PersistenceAdapter {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Restores the persisted quote store.
    ///
    /// Falls back to the built-in seed quotes when nothing is stored or the
    /// stored payload is not a JSON array of quotes; a corrupt payload never
    /// surfaces as an error.
    ///
    /// # Errors
    /// Returns an error only if the backend itself cannot be read.
    pub fn load(&self) -> Result<QuoteStore, StorageError> {
        let Some(raw) = self.kv.get(QUOTES_KEY)? else {
            tracing::info!("No stored quotes, starting from seed list");
            return Ok(QuoteStore::from_quotes(seed_quotes()));
        };

        match serde_json::from_str::<Vec<Quote>>(&raw) {
            Ok(mut quotes) => {
                tracing::debug!(count = quotes.len(), "Restored quotes from storage");
                // Category filters and the index compare trimmed names.
                for quote in &mut quotes {
                    if quote.category.trim().len() != quote.category.len() {
                        quote.category = quote.category.trim().to_owned();
                    }
                }
                Ok(QuoteStore::from_quotes(quotes))
            },
            Err(e) => {
                tracing::warn!(error = %e, "Stored quotes are corrupt, falling back to seed list");
                Ok(QuoteStore::from_quotes(seed_quotes()))
            },
        }
    }

    /// Overwrites the persisted slot with the full store.
    ///
    /// # Errors
    /// Returns an error if serialization or the backend write fails.
    pub fn save(&self, store: &QuoteStore) -> Result<(), StorageError> {
        let json = serde_json::to_string(store)?;
        self.kv.set(QUOTES_KEY, &json)
    }

    /// The last selected category, if one was persisted.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read.
    pub fn load_selected_category(&self) -> Result<Option<CategorySelection>, StorageError> {
        Ok(self.kv.get(LAST_SELECTED_CATEGORY_KEY)?.map(CategorySelection::from))
    }

    /// # Errors
    /// Returns an error if the backend write fails.
    pub fn save_selected_category(&self, selection: &CategorySelection) -> Result<(), StorageError> {
        self.kv.set(LAST_SELECTED_CATEGORY_KEY, selection.as_str())
    }

    /// Pretty-printed JSON array of the full store, named `quotes.json`.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn export_to_file(store: &QuoteStore) -> Result<ExportFile, StorageError> {
        let mut bytes = serde_json::to_vec_pretty(store)?;
        bytes.push(b'\n');
        Ok(ExportFile { file_name: EXPORT_FILE_NAME, content_type: "application/json", bytes })
    }

    /// Parses an import file. Nothing is merged here; the caller applies the
    /// batch with its own duplicate policy.
    ///
    /// # Errors
    /// Returns `QuoteError::Format` for malformed JSON or a top-level value
    /// that is not an array.
    pub fn import_from_file(bytes: &[u8]) -> Result<ImportBatch, QuoteError> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| QuoteError::Format(format!("error parsing JSON: {e}")))?;

        let Value::Array(items) = value else {
            return Err(QuoteError::Format(
                "invalid JSON format: expected an array of quotes".to_owned(),
            ));
        };

        let mut batch = ImportBatch::default();
        for item in items {
            match serde_json::from_value::<Quote>(item) {
                Ok(mut quote) if quote.validate().is_ok() => {
                    quote.category = quote.category.trim().to_owned();
                    batch.quotes.push(quote);
                },
                _ => batch.skipped = batch.skipped.saturating_add(1),
            }
        }

        if batch.skipped > 0 {
            tracing::warn!(skipped = batch.skipped, "Import skipped malformed records");
        }
        Ok(batch)
    }
}
