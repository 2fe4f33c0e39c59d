//! Persistence boundary for products.
//!
//! Absence is reported structurally (`Option`/`bool`); the error channel only
//! carries storage failures.

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::models::{NewProduct, Product, ProductChanges};

pub mod product_repository;

pub use product_repository::SeaOrmProductRepository;

pub type StorageResult<T> = Result<T, DbErr>;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every stored product, in no particular order.
    async fn get_all(&self) -> StorageResult<Vec<Product>>;

    async fn get_by_id(&self, id: i32) -> StorageResult<Option<Product>>;

    /// Persist a new product and return it with its store-assigned id.
    async fn add(&self, product: NewProduct) -> StorageResult<Product>;

    /// Overwrite the mutable fields of an existing product. Returns `None`
    /// without writing when `id` does not exist.
    async fn update(&self, id: i32, changes: ProductChanges) -> StorageResult<Option<Product>>;

    /// Hard delete. Returns `false` when nothing matched.
    async fn delete(&self, id: i32) -> StorageResult<bool>;
}
