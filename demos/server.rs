//! Server wiring: env settings, Postgres-backed stores, airport + common routes.

use airport_registry::{
    airport_routes, common_routes, ensure_tables, AirportService, AppState, LinkBuilder,
    PgAirportStore, PgTerminalStore, Settings,
};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("airport_registry=info".parse()?),
        )
        .init();

    let settings = Settings::from_env();
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&settings.database_url)
        .await?;
    ensure_tables(&pool).await?;

    let service = AirportService::new(
        Arc::new(PgAirportStore::new(pool.clone())),
        Arc::new(PgTerminalStore::new(pool)),
        LinkBuilder::new(settings.public_base_url.clone()),
    );
    let state = AppState { service };

    let app = Router::new()
        .merge(common_routes())
        .merge(airport_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
