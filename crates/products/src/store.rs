//! In-memory, insertion-ordered product store.

use serde_json::Number;

use storefront_core::{Entity, ProductId};

use crate::product::{NewProduct, Product};

/// Ordered collection of products held in process memory.
///
/// Sole owner of every [`Product`]. Lookups are linear scans; absent ids are not
/// errors here, callers decide what "missing" means for them.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the sample catalog (ids `"1"`..`"3"`).
    pub fn seeded() -> Self {
        let seed = [
            ("1", "Laptop", "High-performance laptop with 16GB RAM", 1200, "electronics", true),
            ("2", "Smartphone", "Latest model with 128GB storage", 800, "electronics", true),
            ("3", "Coffee Maker", "Programmable coffee maker with timer", 50, "kitchen", false),
        ];

        let products = seed
            .into_iter()
            .map(|(id, name, description, price, category, in_stock)| {
                Product::new(
                    ProductId::from_string(id),
                    NewProduct {
                        name: name.to_string(),
                        description: description.to_string(),
                        price: Number::from(price),
                        category: category.to_string(),
                        in_stock,
                    },
                )
            })
            .collect();

        Self { products }
    }

    /// All products, in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }

    /// Append to the end. The caller has already assigned a fresh id.
    pub fn append(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Replace the product stored under `id`, keeping its position.
    ///
    /// Returns `false` (and changes nothing) when `id` is absent.
    pub fn replace_at(&mut self, id: &ProductId, product: Product) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.products[idx] = product;
                true
            }
            None => false,
        }
    }

    /// Remove the first product matching `id`, returning it. No-op when absent.
    pub fn remove_by_id(&mut self, id: &ProductId) -> Option<Product> {
        let idx = self.position(id)?;
        Some(self.products.remove(idx))
    }
}
