//! Service layer between handlers and the product store.
//!
//! The server runs on a multi-threaded runtime, so the store sits behind an
//! `RwLock`. Every lookup-then-mutate sequence holds the write lock for its
//! whole duration.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use storefront_core::{DomainError, ProductId};
use storefront_products::{
    NewProduct, Page, PageParams, Product, ProductPatch, ProductStore, count_by_category,
    filter_by_category, paginate, search_by_name,
};

use crate::app::errors::ApiError;

#[derive(Debug)]
pub struct AppServices {
    store: RwLock<ProductStore>,
}

impl AppServices {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ProductStore>, ApiError> {
        self.store
            .read()
            .map_err(|_| ApiError::internal("product store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ProductStore>, ApiError> {
        self.store
            .write()
            .map_err(|_| ApiError::internal("product store lock poisoned"))
    }

    /// Listing with an optional category filter; an empty category means no filter.
    pub fn products_page(
        &self,
        category: Option<&str>,
        params: PageParams,
    ) -> Result<Page<Product>, ApiError> {
        let store = self.read()?;
        let products = match category.filter(|c| !c.is_empty()) {
            Some(category) => filter_by_category(store.list(), category),
            None => store.list().to_vec(),
        };
        Ok(paginate(products, params))
    }

    pub fn products_search(&self, query: Option<&str>) -> Result<Vec<Product>, ApiError> {
        let store = self.read()?;
        Ok(search_by_name(store.list(), query)?)
    }

    pub fn products_stats(&self) -> Result<BTreeMap<String, usize>, ApiError> {
        let store = self.read()?;
        Ok(count_by_category(store.list()))
    }

    pub fn products_get(&self, id: &ProductId) -> Result<Product, ApiError> {
        let store = self.read()?;
        Ok(store.find_by_id(id).cloned().ok_or_else(DomainError::not_found)?)
    }

    pub fn products_create(&self, input: NewProduct) -> Result<Product, ApiError> {
        let product = Product::new(ProductId::generate(), input);
        self.write()?.append(product.clone());
        tracing::info!(product_id = %product.id_typed(), "product created");
        Ok(product)
    }

    pub fn products_update(&self, id: &ProductId, patch: ProductPatch) -> Result<Product, ApiError> {
        let mut store = self.write()?;
        let updated = store
            .find_by_id(id)
            .ok_or_else(DomainError::not_found)?
            .merged(patch);

        if !store.replace_at(id, updated.clone()) {
            return Err(DomainError::not_found().into());
        }
        tracing::info!(product_id = %id, "product updated");
        Ok(updated)
    }

    pub fn products_delete(&self, id: &ProductId) -> Result<(), ApiError> {
        let mut store = self.write()?;
        store.remove_by_id(id).ok_or_else(DomainError::not_found)?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }

    pub fn products_count(&self) -> Result<usize, ApiError> {
        Ok(self.read()?.len())
    }
}
