use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use woodpellet_server::{AppState, Config, create_router, repositories::WoodpelletRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Inizializza la configurazione
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .init();

    config.log_summary();

    // Il repository viene creato una sola volta e condiviso tramite lo stato
    let repository = if config.seed_sample_data {
        WoodpelletRepository::with_sample_data()
    } else {
        WoodpelletRepository::new()
    };
    info!("Repository ready with {} woodpellets", repository.len());

    let state = Arc::new(AppState::new(repository));
    let app = create_router(state);

    // Crea il listener TCP
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    // Avvia il server
    axum::serve(listener, app).await?;

    Ok(())
}
