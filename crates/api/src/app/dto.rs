use serde::Deserialize;

use storefront_products::PageParams;

// -------------------------
// Query-string DTOs
// -------------------------

/// `GET /api/products?category=&page=&limit=`
///
/// `page` and `limit` stay raw strings so that junk falls back to the defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl ListProductsQuery {
    pub fn page_params(&self) -> PageParams {
        PageParams::parse(self.page.as_deref(), self.limit.as_deref())
    }
}

/// `GET /api/products/search?q=`
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn junk_paging_values_use_defaults() {
        let query = ListProductsQuery {
            page: Some("two".to_string()),
            limit: Some("5".to_string()),
            ..Default::default()
        };
        assert_eq!(query.page_params(), PageParams { page: 1, limit: 5 });
    }
}
