//! Request/query types (Deserialize)

use quotebook_core::CategorySelection;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

impl CategoryQuery {
    /// Explicit filter, or `None` to use the active selection.
    pub fn selection(&self) -> Option<CategorySelection> {
        self.category.as_deref().map(CategorySelection::from)
    }
}

#[derive(Debug, Deserialize)]
pub struct AddQuoteRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectCategoryRequest {
    pub category: CategorySelection,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_query_all_keyword() {
        let q: CategoryQuery = serde_json::from_value(json!({"category": "all"})).unwrap();
        assert_eq!(q.selection(), Some(CategorySelection::All));
    }

    #[test]
    fn test_category_query_missing() {
        let q: CategoryQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(q.selection(), None);
    }

    #[test]
    fn test_add_request_missing_fields_default_to_blank() {
        let req: AddQuoteRequest = serde_json::from_value(json!({"text": "x"})).unwrap();
        assert!(req.category.is_empty());
    }

    #[test]
    fn test_select_request_named_category() {
        let req: SelectCategoryRequest =
            serde_json::from_value(json!({"category": "Life"})).unwrap();
        assert_eq!(req.category, CategorySelection::Category("Life".to_owned()));
    }
}
