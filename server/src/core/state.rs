//! Application State - Stato globale dell'applicazione
//!
//! Contiene il repository condiviso tra tutte le route.

use crate::repositories::WoodpelletRepository;
use tokio::sync::RwLock;

/// Stato globale dell'applicazione condiviso tra tutte le route
pub struct AppState {
    /// Repository dei woodpellet. Il repository non è thread-safe: letture
    /// con `read()`, mutazioni con `write()`.
    pub woodpellets: RwLock<WoodpelletRepository>,
}

impl AppState {
    /// Crea una nuova istanza di AppState attorno al repository fornito
    ///
    /// # Arguments
    /// * `repository` - Repository già popolato (o vuoto)
    pub fn new(repository: WoodpelletRepository) -> Self {
        Self {
            woodpellets: RwLock::new(repository),
        }
    }
}
