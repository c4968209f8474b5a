//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, Config};
pub use services::root;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/woodpellet", configure_woodpellet_routes())
        .layer(cors_layer())
        .with_state(state)
}

/// Configura le routes CRUD dei woodpellet
fn configure_woodpellet_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(list_woodpellets).post(create_woodpellet))
        .route(
            "/{id}",
            get(get_woodpellet)
                .put(update_woodpellet)
                .delete(delete_woodpellet),
        )
}

/// Qualsiasi origine, metodo e header
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
