use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Product, ProductChanges};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProductInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

/// Full replacement of the mutable fields. A missing description clears it.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProductInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}

impl From<UpdateProductInput> for ProductChanges {
    fn from(input: UpdateProductInput) -> Self {
        Self {
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn view_omits_created_date() {
        let product = Product {
            id: 7,
            name: "Widget".into(),
            description: Some("blue".into()),
            price: Decimal::new(999, 2),
            stock: 5,
            created_date: Utc::now(),
        };

        let json = serde_json::to_value(ProductView::from(product)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "name": "Widget",
                "description": "blue",
                "price": 9.99,
                "stock": 5
            })
        );
    }

    #[test]
    fn update_input_without_description_clears_it() {
        let input: UpdateProductInput =
            serde_json::from_str(r#"{"name":"Widget","price":12.5,"stock":3}"#).unwrap();
        let changes = ProductChanges::from(input);

        assert_eq!(changes.description, None);
        assert_eq!(changes.price, Decimal::new(1250, 2));
    }

    #[test]
    fn create_input_accepts_integer_price() {
        let input: CreateProductInput =
            serde_json::from_str(r#"{"name":"Mug","description":"","price":10,"stock":1}"#)
                .unwrap();

        assert_eq!(input.price, Decimal::from(10));
        assert_eq!(input.description.as_deref(), Some(""));
    }
}
