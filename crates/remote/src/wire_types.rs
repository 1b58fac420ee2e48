use quotebook_core::Quote;
use quotebook_core::constants::SERVER_CATEGORY;
use serde::{Deserialize, Serialize};

/// A record as served by the remote endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
}

impl RemoteRecord {
    /// `title` becomes the quote text and the author id becomes the category.
    /// Records with a blank title carry no quote.
    #[must_use]
    pub fn into_quote(self) -> Option<Quote> {
        if self.title.trim().is_empty() {
            return None;
        }
        let category = self
            .user_id
            .map_or_else(|| SERVER_CATEGORY.to_owned(), |id| format!("User {id}"));
        Some(Quote { text: self.title, category })
    }
}

/// Body of the POST that mirrors a local quote outward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRemoteRecord<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

impl<'a> From<&'a Quote> for NewRemoteRecord<'a> {
    fn from(quote: &'a Quote) -> Self {
        Self { title: &quote.text, body: &quote.category }
    }
}
