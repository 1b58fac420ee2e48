//! The quote value type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::SEED_QUOTES;
use crate::{QuoteError, Result};

/// A `{text, category}` pair. Quotes carry no id and are compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    /// Builds a quote from user input, trimming both fields.
    ///
    /// # Errors
    /// Returns `QuoteError::Validation` if either field is empty after trimming.
    pub fn new(text: impl AsRef<str>, category: impl AsRef<str>) -> Result<Self> {
        let quote = Self {
            text: text.as_ref().trim().to_owned(),
            category: category.as_ref().trim().to_owned(),
        };
        quote.validate()?;
        Ok(quote)
    }

    /// Checks that neither field is blank. The stored values are not modified.
    ///
    /// # Errors
    /// Returns `QuoteError::Validation` naming the blank field.
    pub fn validate(&self) -> Result<()> {
        match (self.text.trim().is_empty(), self.category.trim().is_empty()) {
            (false, false) => Ok(()),
            (true, true) => {
                Err(QuoteError::Validation("quote text and category must not be empty".to_owned()))
            },
            (true, false) => Err(QuoteError::Validation("quote text must not be empty".to_owned())),
            (false, true) => {
                Err(QuoteError::Validation("quote category must not be empty".to_owned()))
            },
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.category)
    }
}

/// Fresh copy of the built-in quotes.
#[must_use]
pub fn seed_quotes() -> Vec<Quote> {
    SEED_QUOTES
        .iter()
        .map(|(text, category)| Quote { text: (*text).to_owned(), category: (*category).to_owned() })
        .collect()
}
