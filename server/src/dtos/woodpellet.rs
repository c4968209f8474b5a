//! Woodpellet DTOs - Data Transfer Objects per i woodpellet

use crate::entities::{Quality, ValidationError, Woodpellet};
use serde::{Deserialize, Serialize};

/// Quality as sent by the client: either the grade name or its integer code.
///
/// Unknown values are kept as-is so that the validator, not the JSON
/// extractor, decides they are invalid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum QualityInput {
    Code(i64),
    Name(String),
}

impl QualityInput {
    pub fn resolve(&self) -> Option<Quality> {
        match self {
            QualityInput::Code(code) => Quality::from_code(*code),
            QualityInput::Name(name) => name.parse().ok(),
        }
    }
}

impl Default for QualityInput {
    fn default() -> Self {
        QualityInput::Name(Quality::Undefined.name().to_string())
    }
}

impl From<Quality> for QualityInput {
    fn from(value: Quality) -> Self {
        QualityInput::Name(value.name().to_string())
    }
}

/// Struct per gestire io col client
///
/// Missing fields fall back to the zero value, so an empty object is a
/// well-formed (but invalid) record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WoodpelletDTO {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quality: QualityInput,
}

impl WoodpelletDTO {
    /// Checks the candidate record and returns the typed entity.
    ///
    /// Rules run in order (id, brand, price, quality) and the first
    /// violation is returned.
    pub fn validate(&self) -> Result<Woodpellet, ValidationError> {
        if self.id <= 0 {
            return Err(ValidationError::NonPositiveId);
        }

        let brand = match self.brand.as_deref() {
            Some(brand) if !brand.trim().is_empty() => brand,
            _ => return Err(ValidationError::MissingBrand),
        };

        if self.price.is_nan() || self.price <= 0.0 {
            return Err(ValidationError::NonPositivePrice);
        }

        let quality = self.quality.resolve().ok_or(ValidationError::InvalidQuality)?;

        Ok(Woodpellet::new(self.id, brand, self.price, quality))
    }
}

impl From<Woodpellet> for WoodpelletDTO {
    fn from(value: Woodpellet) -> Self {
        Self {
            id: value.id,
            brand: Some(value.brand),
            price: value.price,
            quality: value.quality.into(),
        }
    }
}
