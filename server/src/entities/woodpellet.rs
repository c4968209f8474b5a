//! Woodpellet entity - Record gestito dal repository in memoria

use super::Quality;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A stored woodpellet record.
///
/// Records reaching the repository through `add`/`update` have already
/// passed [`crate::dtos::WoodpelletDTO::validate`]; seed records are built
/// directly.
#[derive(Serialize, Debug, Clone)]
pub struct Woodpellet {
    pub id: i32,
    pub brand: String,
    pub price: f64,
    pub quality: Quality,
}

impl Woodpellet {
    pub fn new(id: i32, brand: impl Into<String>, price: f64, quality: Quality) -> Self {
        Self {
            id,
            brand: brand.into(),
            price,
            quality,
        }
    }
}

/// Field-level rule violated by a candidate record. Only the first failing
/// rule is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("id must be positive")]
    NonPositiveId,
    #[error("brand required")]
    MissingBrand,
    #[error("price must be positive")]
    NonPositivePrice,
    #[error("quality invalid")]
    InvalidQuality,
}

// -0.0 e 0.0 devono coincidere, come con ==
fn price_bits(price: f64) -> u64 {
    if price == 0.0 { 0.0f64.to_bits() } else { price.to_bits() }
}

// uguaglianza su tutti e quattro i campi, price confrontato per bit
impl PartialEq for Woodpellet {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.brand == other.brand
            && price_bits(self.price) == price_bits(other.price)
            && self.quality == other.quality
    }
}

impl Eq for Woodpellet {}

impl Hash for Woodpellet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.brand.hash(state);
        price_bits(self.price).hash(state);
        self.quality.hash(state);
    }
}

impl fmt::Display for Woodpellet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}, Brand: {}, Price: {}, Quality: {}",
            self.id, self.brand, self.price, self.quality
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(pellet: &Woodpellet) -> u64 {
        let mut hasher = DefaultHasher::new();
        pellet.hash(&mut hasher);
        hasher.finish()
    }

    fn eco() -> Woodpellet {
        Woodpellet::new(1, "EcoPellet", 200.0, Quality::Medium)
    }

    #[test]
    fn test_display_format() {
        let pellet = Woodpellet::new(1, "EcoPellet", 200.0, Quality::Premium);
        assert_eq!(
            pellet.to_string(),
            "Id: 1, Brand: EcoPellet, Price: 200, Quality: Premium"
        );

        let cheap = Woodpellet::new(2, "Budget", 0.01, Quality::Low);
        assert_eq!(
            cheap.to_string(),
            "Id: 2, Brand: Budget, Price: 0.01, Quality: Low"
        );
    }

    #[test]
    fn test_equal_records_share_hash() {
        let a = eco();
        let b = eco();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_any_field_change_breaks_equality() {
        let base = eco();

        let mut other = eco();
        other.id = 2;
        assert_ne!(base, other);

        let mut other = eco();
        other.brand = "TopPellet".to_string();
        assert_ne!(base, other);

        let mut other = eco();
        other.price = 200.5;
        assert_ne!(base, other);

        let mut other = eco();
        other.quality = Quality::High;
        assert_ne!(base, other);
    }

    #[test]
    fn test_signed_zero_prices_are_equal() {
        let positive = Woodpellet::new(1, "Zero", 0.0, Quality::Low);
        let negative = Woodpellet::new(1, "Zero", -0.0, Quality::Low);
        assert_eq!(positive, negative);
        assert_eq!(hash_of(&positive), hash_of(&negative));
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::NonPositiveId.to_string(), "id must be positive");
        assert_eq!(ValidationError::MissingBrand.to_string(), "brand required");
        assert_eq!(
            ValidationError::NonPositivePrice.to_string(),
            "price must be positive"
        );
        assert_eq!(ValidationError::InvalidQuality.to_string(), "quality invalid");
    }
}
