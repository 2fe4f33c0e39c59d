use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use super::{ProductRepository, StorageResult};
use crate::{
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    models::{NewProduct, Product, ProductChanges},
};

#[derive(Clone)]
pub struct SeaOrmProductRepository {
    conn: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn get_all(&self) -> StorageResult<Vec<Product>> {
        let items = Products::find()
            .all(&self.conn)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect();
        Ok(items)
    }

    async fn get_by_id(&self, id: i32) -> StorageResult<Option<Product>> {
        let result = Products::find_by_id(id)
            .one(&self.conn)
            .await?
            .map(product_from_entity);
        Ok(result)
    }

    async fn add(&self, product: NewProduct) -> StorageResult<Product> {
        let active = ActiveModel {
            id: NotSet,
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            stock: Set(product.stock),
            created_date: Set(product.created_date),
        };
        let model = active.insert(&self.conn).await?;
        tracing::debug!(product_id = model.id, "product inserted");
        Ok(product_from_entity(model))
    }

    async fn update(&self, id: i32, changes: ProductChanges) -> StorageResult<Option<Product>> {
        // Single statement keyed by id; existence is decided by the affected row count.
        let result = Products::update_many()
            .col_expr(Column::Name, Expr::value(changes.name))
            .col_expr(Column::Description, Expr::value(changes.description))
            .col_expr(Column::Price, Expr::value(changes.price))
            .col_expr(Column::Stock, Expr::value(changes.stock))
            .filter(Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }
        tracing::debug!(product_id = id, "product updated");

        // A concurrent delete between the write and this read surfaces as absent.
        self.get_by_id(id).await
    }

    async fn delete(&self, id: i32) -> StorageResult<bool> {
        let result = Products::delete_by_id(id).exec(&self.conn).await?;
        if result.rows_affected > 0 {
            tracing::debug!(product_id = id, "product deleted");
        }
        Ok(result.rows_affected > 0)
    }
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        stock: model.stock,
        created_date: model.created_date,
    }
}
