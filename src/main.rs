use holocron::server::{config::Config, model::app::AppState, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to prepare database: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting server");

    let state = AppState::new(&config, db);

    if let Err(e) = startup::serve(&config, state).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
