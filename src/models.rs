use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// A stored product. `id` and `created_date` are fixed once the store has
/// accepted the record.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub created_date: DateTime<Utc>,
}

/// A product that has not been persisted yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub created_date: DateTime<Utc>,
}

/// The mutable fields of a product, written as a whole on update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChanges {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
}
