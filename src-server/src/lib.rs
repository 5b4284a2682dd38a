//! Hello Items Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - http: axum router, handlers and middleware

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

pub mod config;
pub mod domain;
pub mod http;
pub mod repository;

use config::Settings;
use repository::{init_db, ItemRepository};

/// Application state shared across handlers
pub struct AppState {
    pub items: ItemRepository,
}

/// Load settings, open the database and serve until the process is stopped
pub async fn run() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let settings = Settings::from_env().context("invalid configuration")?;

    // Dropping the guard flushes the file writer
    let _log_guard = rolling_logger::init_logger(&settings.log_dir, "hello-items")
        .context("failed to init rolling logger")?;

    let db_state = match init_db(&settings.database_path).await {
        Ok(state) => state,
        Err(e) => {
            rolling_logger::error(&format!("DB init failed: {}", e));
            return Err(e).context("failed to open database");
        }
    };
    let state = Arc::new(AppState {
        items: ItemRepository::new(db_state.connection()),
    });

    let app = http::router(state, &settings);
    let listener = TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;

    rolling_logger::info(&format!("Listening on {}", settings.bind_addr));
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")?;

    Ok(())
}
