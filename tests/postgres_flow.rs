use products_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::products::{CreateProductInput, UpdateProductInput},
    repository::{ProductRepository, SeaOrmProductRepository},
    services::{DefaultProductService, ProductService},
};
use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, Statement};

// Integration flow against a real Postgres: create -> read -> replace -> remove.
#[tokio::test]
async fn product_lifecycle_on_postgres() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run the postgres flow test."
            );
            return Ok(());
        }
    };

    let config = AppConfig::from_lookup(|key| match key {
        "DATABASE_URL" => Some(database_url.clone()),
        _ => None,
    })?;
    let conn = create_orm_conn(&config).await?;
    run_migrations(&conn).await?;

    // Clean the table between runs
    let backend = conn.get_database_backend();
    conn.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE products RESTART IDENTITY",
    ))
    .await?;

    let repo = SeaOrmProductRepository::new(conn);
    let service = DefaultProductService::new(repo.clone());

    let created = service
        .create(CreateProductInput {
            name: "Widget".into(),
            description: Some(String::new()),
            price: Decimal::new(999, 2),
            stock: 5,
        })
        .await?;
    assert_eq!(created.id, 1);
    assert_eq!(service.get_one(created.id).await?, Some(created.clone()));

    let created_date = repo
        .get_by_id(created.id)
        .await?
        .expect("stored product")
        .created_date;

    let replaced = service
        .replace(
            created.id,
            UpdateProductInput {
                name: "Widget".into(),
                description: Some("v2".into()),
                price: Decimal::new(1250, 2),
                stock: 3,
            },
        )
        .await?
        .expect("existing product");
    assert_eq!(replaced.description.as_deref(), Some("v2"));
    assert_eq!(replaced.price, Decimal::new(1250, 2));
    assert_eq!(replaced.stock, 3);

    let stored = repo.get_by_id(created.id).await?.expect("stored product");
    assert_eq!(stored.created_date, created_date);

    assert!(service.remove(created.id).await?);
    assert!(service.get_one(created.id).await?.is_none());
    assert!(!service.remove(created.id).await?);

    Ok(())
}
