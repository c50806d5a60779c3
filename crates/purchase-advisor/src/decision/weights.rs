use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use super::catalog::{Category, Dimension};

/// Spending style selecting which weight profile applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    #[default]
    Standard,
    Conservative,
    Efficiency,
    Quality,
}

impl Personality {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Standard,
            Self::Conservative,
            Self::Efficiency,
            Self::Quality,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Conservative => "conservative",
            Self::Efficiency => "efficiency",
            Self::Quality => "quality",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Conservative => "Conservative",
            Self::Efficiency => "Efficiency-minded",
            Self::Quality => "Quality-minded",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Standard => "Balanced across all factors",
            Self::Conservative => "Emphasises necessity and economics",
            Self::Efficiency => "Willing to pay for efficiency",
            Self::Quality => "Pursues long-term value",
        }
    }

    /// Resolves a personality name, falling back to [`Personality::Standard`]
    /// when the name is not recognised.
    pub fn from_name_or_standard(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(personality = name, "unrecognised personality, using standard weights");
            Self::Standard
        })
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown personality '{0}'")]
pub struct UnknownPersonality(pub String);

impl FromStr for Personality {
    type Err = UnknownPersonality;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|personality| personality.as_str() == normalized)
            .ok_or_else(|| UnknownPersonality(value.trim().to_string()))
    }
}

// Weights in catalog order: A1 A2 A3 | B1 B2 B3 B4 | C1 C2 C3 | D1 D2 |
// E1 E2 E3 | F1 F2 F3 | G1 G2 | H1 H2 H3.
const STANDARD_WEIGHTS: [f64; Dimension::COUNT] = [
    2.0, 2.0, 0.6, //
    2.0, 2.0, 0.4, 0.2, //
    2.0, 0.8, 0.8, //
    1.0, 0.8, //
    1.0, 0.8, 0.4, //
    0.4, 0.8, 0.8, //
    0.6, 0.6, //
    0.4, 0.4, 0.2,
];

const CONSERVATIVE_WEIGHTS: [f64; Dimension::COUNT] = [
    2.5, 2.5, 0.8, //
    2.5, 2.5, 0.6, 0.4, //
    2.5, 1.0, 1.0, //
    0.5, 0.4, //
    0.5, 0.4, 0.2, //
    0.6, 1.0, 1.0, //
    0.4, 0.4, //
    0.2, 0.2, 0.1,
];

const EFFICIENCY_WEIGHTS: [f64; Dimension::COUNT] = [
    1.5, 1.5, 0.4, //
    1.5, 1.5, 0.3, 0.1, //
    1.5, 0.6, 0.6, //
    2.0, 1.6, //
    1.5, 1.2, 0.6, //
    0.4, 0.8, 0.8, //
    0.8, 0.8, //
    0.4, 0.4, 0.2,
];

const QUALITY_WEIGHTS: [f64; Dimension::COUNT] = [
    1.8, 1.8, 0.5, //
    1.5, 1.5, 0.3, 0.1, //
    2.5, 1.0, 1.0, //
    1.0, 0.8, //
    1.5, 1.2, 0.6, //
    0.2, 0.6, 0.6, //
    0.5, 0.5, //
    0.3, 0.3, 0.1,
];

/// Complete per-dimension weight assignment for one personality.
///
/// Backed by a fixed-size array indexed by [`Dimension::index`], so every
/// profile is total over the catalog by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightProfile {
    personality: Personality,
    weights: [f64; Dimension::COUNT],
}

impl WeightProfile {
    pub const fn for_personality(personality: Personality) -> Self {
        let weights = match personality {
            Personality::Standard => STANDARD_WEIGHTS,
            Personality::Conservative => CONSERVATIVE_WEIGHTS,
            Personality::Efficiency => EFFICIENCY_WEIGHTS,
            Personality::Quality => QUALITY_WEIGHTS,
        };
        Self {
            personality,
            weights,
        }
    }

    pub const fn standard() -> Self {
        Self::for_personality(Personality::Standard)
    }

    /// Looks up a profile by personality name; unknown names get the standard profile.
    pub fn for_name(name: &str) -> Self {
        Self::for_personality(Personality::from_name_or_standard(name))
    }

    pub const fn personality(&self) -> Personality {
        self.personality
    }

    pub const fn weight(&self, dimension: Dimension) -> f64 {
        self.weights[dimension.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.weight(dimension)))
    }

    /// Sum of weights for the dimensions in `category`.
    pub fn category_weight(&self, category: Category) -> f64 {
        category
            .dimensions()
            .map(|dimension| self.weight(dimension))
            .sum()
    }

    pub fn view(&self) -> WeightProfileView {
        WeightProfileView {
            personality: self.personality,
            label: self.personality.label(),
            description: self.personality.description(),
            weights: self
                .iter()
                .map(|(dimension, weight)| DimensionWeight { dimension, weight })
                .collect(),
        }
    }
}

impl Default for WeightProfile {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionWeight {
    pub dimension: Dimension,
    pub weight: f64,
}

/// Serializable description of a weight profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightProfileView {
    pub personality: Personality,
    pub label: &'static str,
    pub description: &'static str,
    pub weights: Vec<DimensionWeight>,
}

/// Every registered profile, standard first.
pub fn weight_profiles() -> Vec<WeightProfileView> {
    Personality::ordered()
        .into_iter()
        .map(|personality| WeightProfile::for_personality(personality).view())
        .collect()
}
