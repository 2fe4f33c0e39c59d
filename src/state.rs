use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    repository::SeaOrmProductRepository,
    services::{DefaultProductService, ProductService},
};

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductService>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductService>) -> Self {
        Self { products }
    }

    /// Composition root: the SeaORM repository behind the default service.
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        let repository = SeaOrmProductRepository::new(conn);
        Self::new(Arc::new(DefaultProductService::new(repository)))
    }
}
