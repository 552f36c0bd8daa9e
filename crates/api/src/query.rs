//! Shared query parameter types for API handlers.

use catalog_core::pagination::PageRequest;

use crate::extract::LenientQuery;

/// Query parameters for `GET /products` (`?page=&limit=&search=`).
///
/// Kept as raw strings so malformed numbers fall back to defaults instead
/// of rejecting the request.
#[derive(Debug, Default)]
pub struct ProductListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

impl From<&LenientQuery> for ProductListParams {
    fn from(query: &LenientQuery) -> Self {
        let value = |key: &str| query.get(key).map(str::to_string);
        Self {
            page: value("page"),
            limit: value("limit"),
            search: value("search"),
        }
    }
}

impl ProductListParams {
    /// Resolve the page/limit pair.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_raw(self.page.as_deref(), self.limit.as_deref())
    }
}
