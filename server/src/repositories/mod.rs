//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Il repository possiede la collezione in memoria e non è sincronizzato:
//! chi lo condivide tra più richieste deve proteggerlo con un lock (vedi `AppState`).

pub mod error;
pub mod traits;
pub mod woodpellet;

// Re-esportazione dei trait per facilitare l'import
pub use error::RepositoryError;
pub use traits::{Create, Delete, Read, ReadAll, Update};

pub use woodpellet::WoodpelletRepository;
