//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità (models) gestite dal repository in memoria.

pub mod enums;
pub mod woodpellet;

// Re-exports per facilitare l'import
pub use enums::{Quality, UnknownQuality};
pub use woodpellet::{ValidationError, Woodpellet};
