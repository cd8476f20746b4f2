use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use hrms_lite::config::Config;
use hrms_lite::db::init_db;
use hrms_lite::routes;
use hrms_lite::store::Stores;

use tracing::{info, warn};
use tracing_appender::rolling;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!("Server starting...");

    let stores = match &config.database_url {
        Some(url) => Stores::mysql(init_db(url, config.db_max_connections).await?),
        None => {
            warn!("DATABASE_URL not set, using the in-memory store; data is lost on exit");
            Stores::in_memory()
        }
    };

    let limiter = Arc::new(routes::build_limiter(config.rate_api_per_min)?);
    let api_prefix = config.api_prefix.clone();

    info!(addr = %config.server_addr, prefix = %api_prefix, "Listening");

    HttpServer::new(move || {
        let stores = stores.clone();
        let limiter = limiter.clone();
        let api_prefix = api_prefix.clone();
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .wrap(NormalizePath::trim())
            .configure(|cfg| stores.register(cfg))
            .configure(|cfg| routes::configure(cfg, &api_prefix, limiter))
    })
    .bind(&config.server_addr)
    .with_context(|| format!("Failed to bind {}", config.server_addr))?
    .run()
    .await
    .context("Server error")
}
