//! Animal API server: loads config, prepares the database, serves the router.

use animal_api::{
    build_router, ensure_animals_table, ensure_database_exists, AppState, IndexPicker, PgAnimalStore,
    SeededPicker, ServiceConfig,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("animal_api=info,tower_http=info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    ensure_animals_table(&pool, &config.db_schema).await?;

    let picker: Arc<dyn IndexPicker> = match config.random_seed {
        Some(seed) => {
            tracing::info!(seed, "random pick is seeded");
            Arc::new(SeededPicker::seeded(seed))
        }
        None => Arc::new(SeededPicker::from_entropy()),
    };
    let state = AppState::new(
        Arc::new(PgAnimalStore::new(pool, &config.db_schema)),
        picker,
        config.api_prefix.clone(),
    );
    let app = build_router(state, &config);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(prefix = %config.api_prefix, "listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
