use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::catalog::Dimension;
use super::InputError;

/// Broad product category; gates the privacy-risk override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    #[default]
    Digital,
    Appliance,
    Fitness,
    Luxury,
    Other,
}

impl ProductType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Digital,
            Self::Appliance,
            Self::Fitness,
            Self::Luxury,
            Self::Other,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Digital => "digital",
            Self::Appliance => "appliance",
            Self::Fitness => "fitness",
            Self::Luxury => "luxury",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Digital => "Digital and electronics",
            Self::Appliance => "Home appliance",
            Self::Fitness => "Fitness equipment",
            Self::Luxury => "Luxury goods",
            Self::Other => "Other",
        }
    }

    /// Only digital products carry privacy exposure; every other type is
    /// scored as if the privacy-risk dimension were rated at its maximum.
    pub const fn overrides_privacy_risk(self) -> bool {
        !matches!(self, Self::Digital)
    }

    /// Returns `Some(rating)` when this product type pins `dimension` to a fixed rating.
    pub fn pinned_rating(self, dimension: Dimension) -> Option<u8> {
        (dimension == Dimension::PrivacyRisk && self.overrides_privacy_risk()).then_some(5)
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|product_type| product_type.as_str() == normalized)
            .ok_or_else(|| InputError::UnknownProductType(value.trim().to_string()))
    }
}
