use chrono::Utc;
use products_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    models::NewProduct,
    repository::{ProductRepository, SeaOrmProductRepository},
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let conn = create_orm_conn(&config).await?;
    // Ensure migrations are applied.
    run_migrations(&conn).await?;

    let repository = SeaOrmProductRepository::new(conn);
    seed_products(&repository).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_products(repository: &SeaOrmProductRepository) -> anyhow::Result<()> {
    if !repository.get_all().await?.is_empty() {
        println!("Products already present, skipping");
        return Ok(());
    }

    let products = vec![
        ("Axum Hoodie", "Warm hoodie for Rustaceans", Decimal::new(5500, 2), 50),
        ("Ferris Mug", "Coffee tastes better with Ferris", Decimal::new(1200, 2), 100),
        ("Rust Sticker Pack", "Decorate your laptop", Decimal::new(500, 2), 200),
        ("E-book: Async Rust", "Learn async Rust patterns", Decimal::new(2500, 2), 75),
    ];

    for (name, desc, price, stock) in products {
        let product = repository
            .add(NewProduct {
                name: name.to_string(),
                description: Some(desc.to_string()),
                price,
                stock,
                created_date: Utc::now(),
            })
            .await?;
        println!("Seeded product {} ({})", product.id, product.name);
    }

    Ok(())
}
