//! In-memory product catalog store.
//!
//! `Catalog` owns the ordered product sequence and every operation on it;
//! `CatalogHandle` is the shared, lock-guarded reference that request handlers
//! clone into their state. Each handle operation takes the lock exactly once,
//! so a find-then-mutate sequence can never interleave with another writer.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::product::{Product, ProductId, ProductPatch};
use crate::errors::CatalogError;

#[derive(Default)]
pub struct Catalog {
    products: Vec<Product>,
    last_issued_id: i64,
}

/// Derived price aggregates over the whole catalog.
///
/// The aggregates are `None` while the catalog is empty; on the wire that
/// serializes to `null`, which is what clients of the original stats endpoint
/// already expect for an empty catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_products: usize,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub average_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub min_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub max_price: Option<Decimal>,
}

fn seed_products() -> Vec<Product> {
    [
        (1, "Smartphone XYZ Pro", 29_990),
        (2, "Laptop ABC Air", 54_990),
        (3, "SoundMax Headphones", 4_990),
        (4, "Tablet Tab Ultra", 19_990),
        (5, "Smart Watch Pro", 8_990),
    ]
    .into_iter()
    .map(|(id, name, price)| Product {
        id: ProductId(id),
        name: name.to_string(),
        price: Decimal::from(price),
    })
    .collect()
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        let last_issued_id = products.iter().map(|product| product.id.0).max().unwrap_or(0);
        Self { products, last_issued_id }
    }

    /// The fixed five-product dataset every catalog starts from.
    pub fn with_seed_products() -> Self {
        Self::new(seed_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Append a new product under a fresh id.
    ///
    /// Ids are derived from the current Unix time in milliseconds but clamped
    /// to `last issued + 1`, so two creates inside the same millisecond still
    /// receive distinct, strictly increasing ids.
    pub fn create(&mut self, name: String, price: Decimal) -> Product {
        let product = Product { id: self.next_id(), name, price };
        self.products.push(product.clone());
        product
    }

    pub fn update(&mut self, id: ProductId, patch: ProductPatch) -> Result<Product, CatalogError> {
        let product =
            self.products.iter_mut().find(|product| product.id == id).ok_or(CatalogError::NotFound)?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }

        Ok(product.clone())
    }

    pub fn remove(&mut self, id: ProductId) -> Result<Product, CatalogError> {
        let index = self
            .products
            .iter()
            .position(|product| product.id == id)
            .ok_or(CatalogError::NotFound)?;

        Ok(self.products.remove(index))
    }

    pub fn stats(&self) -> CatalogStats {
        if self.products.is_empty() {
            return CatalogStats {
                total_products: 0,
                average_price: None,
                min_price: None,
                max_price: None,
            };
        }

        let sum: Decimal = self.products.iter().map(|product| product.price).sum();
        let count = Decimal::from(self.products.len() as u64);

        CatalogStats {
            total_products: self.products.len(),
            average_price: Some((sum / count).normalize()),
            min_price: self.products.iter().map(|product| product.price).min(),
            max_price: self.products.iter().map(|product| product.price).max(),
        }
    }

    fn next_id(&mut self) -> ProductId {
        let now_ms = Utc::now().timestamp_millis();
        let candidate = now_ms.max(self.last_issued_id + 1);
        self.last_issued_id = candidate;
        ProductId(candidate)
    }
}

/// Thread-safe handle to the process-wide catalog.
#[derive(Clone)]
pub struct CatalogHandle {
    inner: Arc<RwLock<Catalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self { inner: Arc::new(RwLock::new(catalog)) }
    }

    pub fn seeded() -> Self {
        Self::new(Catalog::with_seed_products())
    }

    pub fn products(&self) -> Vec<Product> {
        self.inner.read().products().to_vec()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.inner.read().get(id).cloned()
    }

    pub fn create(&self, name: String, price: Decimal) -> Product {
        self.inner.write().create(name, price)
    }

    pub fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, CatalogError> {
        self.inner.write().update(id, patch)
    }

    pub fn remove(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.inner.write().remove(id)
    }

    pub fn stats(&self) -> CatalogStats {
        self.inner.read().stats()
    }
}
