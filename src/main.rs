mod api;
mod config;
mod domain;
mod storage;

use std::{path::Path, sync::Arc, time::Duration};

use anyhow::Context;
use config::Config;
use migration::MigratorTrait;
use poem::{
    EndpointExt, Route, Server,
    listener::TcpListener,
    middleware::{Cors, Tracing as PoemTracing},
};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt::SubscriberBuilder, prelude::*};

type VirtuosoResult<T> = anyhow::Result<T>;

#[tokio::main]
async fn main() -> VirtuosoResult<()> {
    // RUST_LOG wins; otherwise info for this crate and quiet database logs
    let default_filter = format!(
        "{}=info,poem=info,sea_orm=warn,sqlx=warn",
        env!("CARGO_PKG_NAME")
    );
    let env_filter = std::env::var("RUST_LOG").unwrap_or(default_filter);
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_target(false)
        .with_level(true)
        .pretty()
        .finish()
        .with(ErrorLayer::default())
        .init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting Virtuoso");

    if Path::new(".env.local").exists() {
        dotenvy::from_filename(".env.local")?;
    } else if Path::new(".env").exists() {
        dotenvy::from_filename(".env")?;
    };
    let config = Config::load()?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    let db_conn = Database::connect(&config.db_connection_string)
        .await
        .with_context(|| "Failed to connect to database")?;

    migration::Migrator::up(&db_conn, None)
        .await
        .with_context(|| "Failed to run database migrations")?;

    if config.seed_catalog {
        storage::seed::seed_catalog(&db_conn).await?;
    }

    run_poem(Arc::new(config), Arc::new(db_conn)).await
}

pub async fn run_poem(config: Arc<Config>, db: Arc<DatabaseConnection>) -> VirtuosoResult<()> {
    let version = env!("CARGO_PKG_VERSION");
    let api = api::VirtuosoApi::new(db.clone());
    let api_service = OpenApiService::new(api, "Virtuoso - Violin Learning API", version)
        .server(format!("{}/api", config.public_url));
    let ui = api_service.rapidoc();
    let spec = api_service.spec();
    let route = Route::new()
        .nest("/api", api_service)
        .nest("/ui", ui)
        .nest("/spec", poem::endpoint::make_sync(move |_| spec.clone()))
        .with(Cors::new())
        .with(PoemTracing);

    tracing::info!(bind_addr = %config.bind_addr, public_url = %config.public_url, "starting HTTP server");
    Server::new(TcpListener::bind(config.bind_addr.as_str()))
        .run_with_graceful_shutdown(
            route,
            async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("shutdown requested");
            },
            Some(Duration::from_secs(5)),
        )
        .await?;

    // the API held the other handles; they are gone once the server stops
    match Arc::try_unwrap(db) {
        Ok(db) => db.close().await.with_context(|| "Failed to close database")?,
        Err(_) => tracing::warn!("database still referenced at shutdown"),
    }
    Ok(())
}
