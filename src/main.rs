use std::env;

use todo_api::api::{AppState, create_router};
use todo_api::infrastructure::{AppConfig, RepositoryFactory};
use todo_api::server::Server;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    init_tracing();

    tracing::info!("Starting Todo API");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Configuration error: {}", error);
            std::process::exit(1);
        }
    };

    tracing::info!(
        storage_mode = ?config.storage_mode,
        address = %config.server.socket_addr(),
        "Configuration loaded"
    );

    let server_config = config.server.clone();
    let factory = RepositoryFactory::new(config);
    let repository = match factory.create().await {
        Ok(repository) => repository,
        Err(error) => {
            tracing::error!("Failed to initialize repository: {}", error);
            std::process::exit(1);
        }
    };

    let router = create_router(AppState::new(repository.clone()));

    let result = Server::new(server_config).run(router).await;

    repository.close().await;

    if let Err(error) = result {
        tracing::error!(%error, "Server error");
        std::process::exit(1);
    }
}

/// Installs the global subscriber. `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("todo_api=debug,tower_http=debug,info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
}
