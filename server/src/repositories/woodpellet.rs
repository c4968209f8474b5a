//! WoodpelletRepository - Repository in memoria per i woodpellet

use super::{Create, Delete, Read, ReadAll, RepositoryError, Update};
use crate::dtos::WoodpelletDTO;
use crate::entities::{Quality, Woodpellet};

/// Owns the ordered collection of woodpellets (insertion order).
///
/// Lookups are linear scans and return the first match, so duplicated ids
/// (possible only through seeding) resolve to the earliest record.
#[derive(Debug, Default, Clone)]
pub struct WoodpelletRepository {
    woodpellets: Vec<Woodpellet>,
}

impl WoodpelletRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository over the given records as-is, without validation
    /// or uniqueness checks. Once a record holds `i32::MAX`, no further id
    /// can be assigned and `create` fails with `DuplicateId`.
    pub fn from_records(woodpellets: Vec<Woodpellet>) -> Self {
        Self { woodpellets }
    }

    /// Repository seeded with one sample per grade. Id 5 appears twice.
    pub fn with_sample_data() -> Self {
        Self::from_records(vec![
            Woodpellet::new(1, "EcoPellet", 200.0, Quality::Medium),
            Woodpellet::new(2, "TopPellet", 300.0, Quality::High),
            Woodpellet::new(3, "GreenFire", 250.0, Quality::Low),
            Woodpellet::new(4, "PureHeat", 180.0, Quality::Medium),
            Woodpellet::new(5, "WarmGlow", 220.0, Quality::High),
            Woodpellet::new(5, "KingHeat", 220.0, Quality::Premium),
            Woodpellet::new(6, "ChernobylFire", 190.0, Quality::BasicallyNapalm),
        ])
    }

    /// One past the highest id in the collection, or 1 when empty.
    /// Saturates at `i32::MAX`.
    pub fn next_id(&self) -> i32 {
        self.woodpellets
            .iter()
            .map(|w| w.id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    pub fn len(&self) -> usize {
        self.woodpellets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.woodpellets.is_empty()
    }

    fn position(&self, id: i32) -> Option<usize> {
        self.woodpellets.iter().position(|w| w.id == id)
    }
}

impl ReadAll<Woodpellet> for WoodpelletRepository {
    fn read_all(&self) -> Vec<Woodpellet> {
        self.woodpellets.clone()
    }
}

impl Read<Woodpellet, i32> for WoodpelletRepository {
    fn read(&self, id: &i32) -> Option<Woodpellet> {
        self.woodpellets.iter().find(|w| w.id == *id).cloned()
    }
}

impl Create<Woodpellet, WoodpelletDTO> for WoodpelletRepository {
    fn create(&mut self, mut data: WoodpelletDTO) -> Result<Woodpellet, RepositoryError> {
        // il controllo usa l'id del client, che viene poi sostituito
        if self.position(data.id).is_some() {
            return Err(RepositoryError::DuplicateId(data.id));
        }

        data.id = self.next_id();
        if self.position(data.id).is_some() {
            return Err(RepositoryError::DuplicateId(data.id));
        }
        let woodpellet = data.validate()?;
        self.woodpellets.push(woodpellet.clone());

        Ok(woodpellet)
    }
}

impl Update<Woodpellet, WoodpelletDTO> for WoodpelletRepository {
    fn update(&mut self, data: &WoodpelletDTO) -> Result<Woodpellet, RepositoryError> {
        let idx = self
            .position(data.id)
            .ok_or(RepositoryError::NotFound(data.id))?;

        let validated = data.validate()?;

        let existing = &mut self.woodpellets[idx];
        existing.brand = validated.brand;
        existing.price = validated.price;
        existing.quality = validated.quality;

        Ok(existing.clone())
    }
}

impl Delete<i32> for WoodpelletRepository {
    fn delete(&mut self, id: &i32) -> Result<(), RepositoryError> {
        let idx = self.position(*id).ok_or(RepositoryError::NotFound(*id))?;
        self.woodpellets.remove(idx);
        Ok(())
    }
}
