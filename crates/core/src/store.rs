//! Ordered, insertion-preserving quote collection.

use rand::Rng;
use rand::seq::SliceRandom as _;
use serde::{Deserialize, Serialize};

use crate::{CategorySelection, Quote, QuoteError, Result};

/// The in-memory list of quotes for one session.
///
/// Duplicates are allowed; only [`QuoteStore::merge`] filters them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { quotes: Vec::new() }
    }

    #[must_use]
    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Quote] {
        &self.quotes
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Quote> {
        self.quotes
    }

    /// Appends `quote` to the end of the store.
    ///
    /// # Errors
    /// Returns `QuoteError::Validation` if text or category is empty after
    /// trimming; the store is left unchanged.
    pub fn add(&mut self, quote: Quote) -> Result<()> {
        quote.validate()?;
        self.quotes.push(quote);
        Ok(())
    }

    /// Appends every candidate that no existing quote matches under `is_same`.
    ///
    /// Batch order is preserved and candidates appended earlier in the same
    /// batch count as existing, so the first occurrence wins. Returns the
    /// number of quotes appended.
    pub fn merge<I, F>(&mut self, batch: I, is_same: F) -> usize
    where
        I: IntoIterator<Item = Quote>,
        F: Fn(&Quote, &Quote) -> bool,
    {
        let mut added = 0_usize;
        for candidate in batch {
            if self.quotes.iter().any(|existing| is_same(existing, &candidate)) {
                continue;
            }
            self.quotes.push(candidate);
            added = added.saturating_add(1);
        }
        added
    }

    /// Quotes whose category equals `selection`, or all of them for
    /// [`CategorySelection::All`].
    #[must_use]
    pub fn by_category(&self, selection: &CategorySelection) -> Vec<&Quote> {
        match selection {
            CategorySelection::All => self.quotes.iter().collect(),
            CategorySelection::Category(category) => {
                self.quotes.iter().filter(|q| q.category == *category).collect()
            },
        }
    }

    /// Picks one quote uniformly at random.
    ///
    /// # Errors
    /// Returns `QuoteError::EmptyCollection` for an empty subsequence.
    pub fn pick_random<'a>(subsequence: &[&'a Quote]) -> Result<&'a Quote> {
        Self::pick_random_with(subsequence, &mut rand::thread_rng())
    }

    /// Same as [`QuoteStore::pick_random`] with a caller-supplied RNG.
    ///
    /// # Errors
    /// Returns `QuoteError::EmptyCollection` for an empty subsequence.
    pub fn pick_random_with<'a, R: Rng + ?Sized>(
        subsequence: &[&'a Quote],
        rng: &mut R,
    ) -> Result<&'a Quote> {
        subsequence.choose(rng).copied().ok_or(QuoteError::EmptyCollection)
    }
}

impl<'a> IntoIterator for &'a QuoteStore {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}
