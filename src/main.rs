use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use activities::config::Config;
use activities::web::{self, AppState};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting activities service");

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let store = match config.load_store() {
        Ok(s) => s,
        Err(e) => {
            error!("Seed error: {}", e);
            std::process::exit(1);
        }
    };
    let activity_count = store.activity_count().await;
    info!(
        activities = activity_count,
        capacity_policy = %config.capacity_policy,
        "Activity catalog ready"
    );

    let state = AppState {
        store,
        capacity_policy: config.capacity_policy,
    };
    let app = web::build_router(state, &config.static_dir);

    let address = config.bind_address();
    let listener = match TcpListener::bind(&address).await {
        Ok(l) => l,
        Err(e) => {
            error!("Could not bind {}: {}", address, e);
            std::process::exit(1);
        }
    };
    info!("Server running on http://{}", address);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
