use async_trait::async_trait;
use chrono::Utc;

use crate::{
    dto::products::{CreateProductInput, ProductView, UpdateProductInput},
    models::NewProduct,
    repository::{ProductRepository, StorageResult},
};

/// Use cases exposed to the HTTP layer. "Not found" is never an error here:
/// lookups return `None` and removal returns `false`.
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn list_all(&self) -> StorageResult<Vec<ProductView>>;

    async fn get_one(&self, id: i32) -> StorageResult<Option<ProductView>>;

    async fn create(&self, input: CreateProductInput) -> StorageResult<ProductView>;

    async fn replace(
        &self,
        id: i32,
        input: UpdateProductInput,
    ) -> StorageResult<Option<ProductView>>;

    async fn remove(&self, id: i32) -> StorageResult<bool>;
}

pub struct DefaultProductService<R> {
    repository: R,
}

impl<R: ProductRepository> DefaultProductService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProductRepository> ProductService for DefaultProductService<R> {
    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> StorageResult<Vec<ProductView>> {
        let items: Vec<ProductView> = self
            .repository
            .get_all()
            .await?
            .into_iter()
            .map(ProductView::from)
            .collect();
        tracing::debug!(count = items.len(), "listed products");
        Ok(items)
    }

    #[tracing::instrument(skip(self))]
    async fn get_one(&self, id: i32) -> StorageResult<Option<ProductView>> {
        let product = self.repository.get_by_id(id).await?;
        Ok(product.map(ProductView::from))
    }

    #[tracing::instrument(skip(self, input), fields(name = %input.name))]
    async fn create(&self, input: CreateProductInput) -> StorageResult<ProductView> {
        let product = NewProduct {
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            created_date: Utc::now(),
        };
        let created = self.repository.add(product).await?;
        tracing::info!(product_id = created.id, "product created");
        Ok(created.into())
    }

    #[tracing::instrument(skip(self, input))]
    async fn replace(
        &self,
        id: i32,
        input: UpdateProductInput,
    ) -> StorageResult<Option<ProductView>> {
        let updated = self.repository.update(id, input.into()).await?;
        if updated.is_none() {
            tracing::debug!("replace targeted a missing product");
        }
        Ok(updated.map(ProductView::from))
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: i32) -> StorageResult<bool> {
        self.repository.delete(id).await
    }
}
