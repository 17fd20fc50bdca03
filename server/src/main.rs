//! Server: reads settings from the environment, connects to PostgreSQL, ensures tables, serves the API.
//!
//! Run from repo root: `cargo run -p starwars-server`

use axum::extract::Request;
use axum::ServiceExt;
use starwars_api::{app, ensure_database_exists, ensure_tables, AppState, PgStore, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("starwars_api=info,starwars_server=info,tower_http=info")
            }),
        )
        .init();

    let config = ServerConfig::from_env()?;
    if config.ensure_database {
        ensure_database_exists(&config.database_url).await?;
    }
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    if config.ensure_database {
        ensure_tables(&pool).await?;
    }

    let state = AppState::new(PgStore::new(pool));
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app(state))).await?;
    Ok(())
}
