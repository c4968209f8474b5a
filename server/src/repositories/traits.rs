//! Common repository traits
//!
//! This module defines generic interfaces for the in-memory store operations.

use super::RepositoryError;

/// Trait for creating new entities in the store
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the repository)
/// * `CreateDTO` - Candidate record sent by the client
pub trait Create<Entity, CreateDTO> {
    /// Inserts a new entity
    ///
    /// # Returns
    /// * `Ok(Entity)` - Stored entity with the ID assigned by the repository
    /// * `Err(RepositoryError)` - Duplicate ID or invalid candidate
    fn create(&mut self, data: CreateDTO) -> Result<Entity, RepositoryError>;
}

/// Trait for reading a single entity by primary key
pub trait Read<Entity, Id> {
    /// Reads an entity by its primary key
    ///
    /// # Returns
    /// * `Some(Entity)` - Owned copy of the first entity with that ID
    /// * `None` - No entity with that ID
    fn read(&self, id: &Id) -> Option<Entity>;
}

/// Trait for reading the whole collection
pub trait ReadAll<Entity> {
    /// Returns a snapshot of every entity, in insertion order
    fn read_all(&self) -> Vec<Entity>;
}

/// Trait for updating existing entities
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `UpdateDTO` - Candidate record carrying the ID of the target
pub trait Update<Entity, UpdateDTO> {
    /// Replaces the mutable fields of an existing entity
    ///
    /// # Returns
    /// * `Ok(Entity)` - Updated entity
    /// * `Err(RepositoryError)` - Entity not found or invalid candidate
    fn update(&mut self, data: &UpdateDTO) -> Result<Entity, RepositoryError>;
}

/// Trait for deleting entities
pub trait Delete<Id> {
    /// Deletes an entity by primary key
    ///
    /// # Returns
    /// * `Ok(())` - Deletion successful
    /// * `Err(RepositoryError::NotFound)` - No entity with that ID
    fn delete(&mut self, id: &Id) -> Result<(), RepositoryError>;
}
