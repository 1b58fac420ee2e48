//! Category index derived from the quote store, plus the active filter.

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::ALL_CATEGORIES;
use crate::{QuoteError, QuoteStore, Result};

/// The active filter: either the "all" sentinel or one category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategorySelection {
    #[default]
    All,
    Category(String),
}

impl CategorySelection {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(name) => name,
        }
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// `"all"` and blank input map to [`CategorySelection::All`].
impl FromStr for CategorySelection {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == ALL_CATEGORIES {
            Ok(Self::All)
        } else {
            Ok(Self::Category(trimmed.to_owned()))
        }
    }
}

impl From<String> for CategorySelection {
    fn from(value: String) -> Self {
        let Ok(selection) = value.parse::<Self>();
        selection
    }
}

impl From<&str> for CategorySelection {
    fn from(value: &str) -> Self {
        let Ok(selection) = value.parse::<Self>();
        selection
    }
}

impl From<CategorySelection> for String {
    fn from(value: CategorySelection) -> Self {
        match value {
            CategorySelection::All => ALL_CATEGORIES.to_owned(),
            CategorySelection::Category(name) => name,
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sorted set of distinct, trimmed, non-empty categories and the current
/// selection.
///
/// The selection always names a category in the set or is `All`; every
/// rebuild re-validates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    categories: BTreeSet<String>,
    selected: CategorySelection,
}

impl CategoryIndex {
    #[must_use]
    pub fn from_store(store: &QuoteStore) -> Self {
        let mut index = Self::default();
        index.rebuild(store);
        index
    }

    /// Recomputes the category set from `store` and drops a selection that
    /// no longer exists.
    pub fn rebuild(&mut self, store: &QuoteStore) {
        self.categories = store
            .iter()
            .map(|q| q.category.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_owned)
            .collect();

        if !self.is_known(&self.selected) {
            tracing::debug!(selected = %self.selected, "selected category vanished, resetting to all");
            self.selected = CategorySelection::All;
        }
    }

    /// Applies a persisted selection if it is still valid, otherwise falls
    /// back to `All`. Returns the resulting selection.
    pub fn restore_selection(&mut self, persisted: &CategorySelection) -> &CategorySelection {
        self.selected = if self.is_known(persisted) {
            persisted.clone()
        } else {
            CategorySelection::All
        };
        &self.selected
    }

    /// Makes `selection` active.
    ///
    /// # Errors
    /// Returns `QuoteError::Validation` for a category not in the index.
    pub fn select(&mut self, selection: CategorySelection) -> Result<&CategorySelection> {
        if !self.is_known(&selection) {
            return Err(QuoteError::Validation(format!("unknown category: {selection}")));
        }
        self.selected = selection;
        Ok(&self.selected)
    }

    #[must_use]
    pub fn selected(&self) -> &CategorySelection {
        &self.selected
    }

    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    #[must_use]
    pub fn is_known(&self, selection: &CategorySelection) -> bool {
        match selection {
            CategorySelection::All => true,
            CategorySelection::Category(name) => self.contains(name),
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.categories.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
