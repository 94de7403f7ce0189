//! Stateless queries over a product listing: filter, search, paginate, aggregate.

use std::collections::BTreeMap;

use serde::Serialize;

use storefront_core::{DomainError, DomainResult};

use crate::product::Product;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Message returned when a search is issued without a query string.
pub const SEARCH_QUERY_REQUIRED: &str = r#"Query parameter "q" is required"#;

/// Products whose category equals `category`, ignoring case. Input order is kept.
pub fn filter_by_category(products: &[Product], category: &str) -> Vec<Product> {
    let wanted = category.to_lowercase();
    products
        .iter()
        .filter(|p| p.category().to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Products whose name contains `query`, ignoring case.
///
/// An absent or empty query is a validation error; no matches is an empty vec.
pub fn search_by_name(products: &[Product], query: Option<&str>) -> DomainResult<Vec<Product>> {
    let needle = match query {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return Err(DomainError::validation(SEARCH_QUERY_REQUIRED)),
    };

    Ok(products
        .iter()
        .filter(|p| p.name().to_lowercase().contains(&needle))
        .cloned()
        .collect())
}

/// Number of products per category, keyed by the category exactly as stored.
pub fn count_by_category(products: &[Product]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for p in products {
        *counts.entry(p.category().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Requested page window, already resolved against the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageParams {
    /// Resolve raw query-string values.
    ///
    /// Each value is read as an integer prefix (`"2abc"` is 2, `"2.7"` is 2). Missing,
    /// non-numeric and zero values fall back to the default; negatives are kept.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        let resolve = |raw: Option<&str>, default: i64| match raw.and_then(parse_int_prefix) {
            Some(0) | None => default,
            Some(n) => n,
        };

        Self {
            page: resolve(page, DEFAULT_PAGE),
            limit: resolve(limit, DEFAULT_LIMIT),
        }
    }

    /// Zero-based offset of the first item, `None` when the window is out of range.
    fn offset(&self) -> Option<usize> {
        if self.page < 1 || self.limit < 1 {
            return None;
        }
        let offset = (self.page - 1).checked_mul(self.limit)?;
        usize::try_from(offset).ok()
    }
}

/// One page of results plus the pre-pagination total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: i64,
    pub limit: i64,
}

/// Slice `items` to the requested window. Out-of-range windows yield an empty page.
pub fn paginate<T>(items: Vec<T>, params: PageParams) -> Page<T> {
    let total = items.len();
    let data = match params.offset() {
        Some(offset) => {
            let limit = usize::try_from(params.limit).unwrap_or(usize::MAX);
            items.into_iter().skip(offset).take(limit).collect()
        }
        None => Vec::new(),
    };

    Page {
        data,
        total,
        page: params.page,
        limit: params.limit,
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits. Trailing junk is ignored.
fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProductStore;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name()).collect()
    }

    #[test]
    fn filter_by_category_is_case_insensitive_and_ordered() {
        let store = ProductStore::seeded();
        let hits = filter_by_category(store.list(), "ELECTRONICS");
        assert_eq!(names(&hits), vec!["Laptop", "Smartphone"]);
        assert!(filter_by_category(store.list(), "garden").is_empty());
    }

    #[test]
    fn search_by_name_matches_substrings_ignoring_case() {
        let store = ProductStore::seeded();
        let hits = search_by_name(store.list(), Some("coffee")).unwrap();
        assert_eq!(names(&hits), vec!["Coffee Maker"]);

        let hits = search_by_name(store.list(), Some("P")).unwrap();
        assert_eq!(names(&hits), vec!["Laptop", "Smartphone"]);

        assert!(search_by_name(store.list(), Some("zz-no-match")).unwrap().is_empty());
    }

    #[test]
    fn search_without_query_is_a_validation_error() {
        let store = ProductStore::seeded();
        for q in [None, Some("")] {
            assert_eq!(
                search_by_name(store.list(), q).unwrap_err(),
                DomainError::validation(SEARCH_QUERY_REQUIRED)
            );
        }
    }

    #[test]
    fn count_by_category_over_seed_data() {
        let store = ProductStore::seeded();
        let counts = count_by_category(store.list());
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["electronics"], 2);
        assert_eq!(counts["kitchen"], 1);
        assert!(count_by_category(&[]).is_empty());
    }

    #[test]
    fn page_params_fall_back_to_defaults() {
        assert_eq!(PageParams::parse(None, None), PageParams::default());
        assert_eq!(PageParams::parse(Some("abc"), Some("")), PageParams::default());
        assert_eq!(PageParams::parse(Some("0"), Some("0")), PageParams::default());
        assert_eq!(
            PageParams::parse(Some("2abc"), Some(" 5.9")),
            PageParams { page: 2, limit: 5 }
        );
        assert_eq!(
            PageParams::parse(Some("-1"), None),
            PageParams { page: -1, limit: 10 }
        );
    }

    #[test]
    fn second_page_of_filtered_set_reports_filtered_total() {
        let mut store = ProductStore::seeded();
        store.append(crate::Product::new(
            crate::ProductId::generate(),
            crate::NewProduct {
                name: "Tablet".to_string(),
                description: "10-inch tablet".to_string(),
                price: serde_json::Number::from(450),
                category: "Electronics".to_string(),
                in_stock: true,
            },
        ));

        let filtered = filter_by_category(store.list(), "electronics");
        assert_eq!(filtered.len(), 3);

        let page = paginate(filtered, PageParams { page: 2, limit: 1 });
        assert_eq!(names(&page.data), vec!["Smartphone"]);
        assert_eq!(page.total, 3);
        assert_eq!((page.page, page.limit), (2, 1));
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..3).collect();
        assert!(paginate(items.clone(), PageParams { page: 9, limit: 10 }).data.is_empty());
        assert!(paginate(items.clone(), PageParams { page: -1, limit: 10 }).data.is_empty());
        let page = paginate(items, PageParams { page: 1, limit: -3 });
        assert!(page.data.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn huge_values_do_not_overflow() {
        let params = PageParams::parse(Some("99999999999999999999"), Some("99999999999999999999"));
        let page = paginate(vec![1, 2, 3], params);
        assert!(page.data.is_empty());
        assert_eq!(page.total, 3);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: walking every page reproduces the input exactly once, in order.
            #[test]
            fn pages_partition_the_input(len in 0usize..60, limit in 1i64..15) {
                let items: Vec<usize> = (0..len).collect();
                let pages = (len as i64 + limit - 1) / limit;

                let mut seen = Vec::new();
                for page in 1..=pages.max(1) {
                    let p = paginate(items.clone(), PageParams { page, limit });
                    prop_assert_eq!(p.total, len);
                    prop_assert!(p.data.len() as i64 <= limit);
                    seen.extend(p.data);
                }
                prop_assert_eq!(seen, items);
            }
        }
    }
}
