use serde::{Deserialize, Serialize};

/// Discrete outcome derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    Excellent,
    Good,
    Caution,
    Wait,
    Avoid,
}

impl RecommendationTier {
    /// Lower bound (inclusive) of each tier, highest first.
    const THRESHOLDS: [(f64, Self); 4] = [
        (85.0, Self::Excellent),
        (75.0, Self::Good),
        (65.0, Self::Caution),
        (50.0, Self::Wait),
    ];

    pub fn from_score(score: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, tier)| *tier)
            .unwrap_or(Self::Avoid)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Buy without hesitation",
            Self::Good => "Safe to buy",
            Self::Caution => "Buy at the right moment",
            Self::Wait => "Hold and keep watching",
            Self::Avoid => "Consider letting it go",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Excellent => "No need to hesitate; order as soon as a good price appears",
            Self::Good => "Safe to buy; compare prices before ordering",
            Self::Caution => "Wait for a sale, comparison shop, and consider alternatives",
            Self::Wait => "Keep researching, delay about 3 months, and look for alternatives",
            Self::Avoid => "Defer the purchase and re-examine the real need",
        }
    }
}

/// Tier plus the display text that goes with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub tier: RecommendationTier,
    pub label: String,
    pub description: String,
}

impl Recommendation {
    pub fn summary(&self) -> String {
        format!("{}: {}", self.label, self.description)
    }
}

pub fn classify_recommendation(score: f64) -> Recommendation {
    let tier = RecommendationTier::from_score(score);
    Recommendation {
        tier,
        label: tier.label().to_string(),
        description: tier.description().to_string(),
    }
}
