use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

/// Message carried by every rejected product payload. It never names the failing field.
pub const INVALID_PRODUCT_FIELDS: &str = "Validation failed: Invalid product fields";

/// A catalog product.
///
/// The `id` is assigned once at creation and never changes; every other field is
/// replaced through [`Product::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Number,
    category: String,
    in_stock: bool,
}

impl Product {
    /// Build a stored product from a validated payload and a freshly assigned id.
    pub fn new(id: ProductId, input: NewProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
        }
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &Number {
        &self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    /// Shallow merge: fields present in `patch` overwrite, absent ones are kept.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
    }

    /// Returns a copy with `patch` applied, leaving `self` untouched.
    pub fn merged(&self, patch: ProductPatch) -> Self {
        let mut next = self.clone();
        next.apply(patch);
        next
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Create payload: all five fields required and type-correct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub category: String,
    pub in_stock: bool,
}

impl NewProduct {
    /// Decode and validate a raw JSON body.
    ///
    /// Strings must be JSON strings, `price` a JSON number and `inStock` a JSON boolean;
    /// no coercion happens. Unknown keys (including `id`) are dropped.
    pub fn from_json(value: Value) -> DomainResult<Self> {
        let input: Self = serde_json::from_value(value).map_err(|_| invalid_fields())?;
        input.validate()?;
        Ok(input)
    }

    pub fn validate(&self) -> DomainResult<()> {
        let ok = !self.name.is_empty() && !self.description.is_empty() && !self.category.is_empty();
        if ok { Ok(()) } else { Err(invalid_fields()) }
    }
}

/// Update payload: every field optional; present fields follow the create rules.
///
/// JSON `null` is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl ProductPatch {
    pub fn from_json(value: Value) -> DomainResult<Self> {
        // A patch must be an object; `[]` or `"x"` would otherwise fail with a serde message.
        if !value.is_object() {
            return Err(invalid_fields());
        }
        let patch: Self = serde_json::from_value(value).map_err(|_| invalid_fields())?;
        patch.validate()?;
        Ok(patch)
    }

    pub fn validate(&self) -> DomainResult<()> {
        let empty = |s: &Option<String>| s.as_deref().is_some_and(str::is_empty);
        if empty(&self.name) || empty(&self.description) || empty(&self.category) {
            return Err(invalid_fields());
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn invalid_fields() -> DomainError {
    DomainError::validation(INVALID_PRODUCT_FIELDS)
}
