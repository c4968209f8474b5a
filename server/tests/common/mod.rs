#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use woodpellet_server::AppState;
use woodpellet_server::repositories::WoodpelletRepository;

/// Crea un AppState per i test con i dati di esempio
///
/// # Returns
/// Arc<AppState> con le sette righe del seed
pub fn create_seeded_state() -> Arc<AppState> {
    Arc::new(AppState::new(WoodpelletRepository::with_sample_data()))
}

/// Crea un AppState per i test senza alcun record
pub fn create_empty_state() -> Arc<AppState> {
    Arc::new(AppState::new(WoodpelletRepository::new()))
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = woodpellet_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Server con i dati di esempio, il caso più comune
pub fn seeded_server() -> TestServer {
    create_test_server(create_seeded_state())
}
