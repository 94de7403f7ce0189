//! Products catalog: the product record, its in-memory store, and the query engine.
//!
//! Pure domain logic (no IO, no HTTP). The API crate owns the store instance and
//! decides how absent records and validation failures map to responses.

pub mod product;
pub mod query;
pub mod store;

pub use product::{INVALID_PRODUCT_FIELDS, NewProduct, Product, ProductPatch};
pub use query::{
    DEFAULT_LIMIT, DEFAULT_PAGE, Page, PageParams, SEARCH_QUERY_REQUIRED, count_by_category,
    filter_by_category, paginate, search_by_name,
};
pub use store::ProductStore;
pub use storefront_core::ProductId;
