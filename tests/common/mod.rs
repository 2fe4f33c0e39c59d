#![allow(dead_code)]

use async_trait::async_trait;
use products_api::{
    db::run_migrations,
    models::{NewProduct, Product, ProductChanges},
    repository::{ProductRepository, SeaOrmProductRepository, StorageResult},
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Fresh in-memory SQLite database with the schema applied. A single
/// connection keeps every query on the same in-memory database.
pub async fn setup_conn() -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(options).await?;
    run_migrations(&conn).await?;
    Ok(conn)
}

pub async fn setup_repository() -> anyhow::Result<SeaOrmProductRepository> {
    Ok(SeaOrmProductRepository::new(setup_conn().await?))
}

/// Repository whose store is permanently unreachable.
pub struct UnreachableRepository;

fn unreachable() -> DbErr {
    DbErr::Custom("connection refused".into())
}

#[async_trait]
impl ProductRepository for UnreachableRepository {
    async fn get_all(&self) -> StorageResult<Vec<Product>> {
        Err(unreachable())
    }

    async fn get_by_id(&self, _id: i32) -> StorageResult<Option<Product>> {
        Err(unreachable())
    }

    async fn add(&self, _product: NewProduct) -> StorageResult<Product> {
        Err(unreachable())
    }

    async fn update(&self, _id: i32, _changes: ProductChanges) -> StorageResult<Option<Product>> {
        Err(unreachable())
    }

    async fn delete(&self, _id: i32) -> StorageResult<bool> {
        Err(unreachable())
    }
}
