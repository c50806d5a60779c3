use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::InputError;

/// Number of rating options every dimension offers (values 0 through 5).
pub const OPTIONS_PER_DIMENSION: usize = 6;

/// Grouping of dimensions shown together when collecting ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Necessity,
    Economics,
    Lifecycle,
    Efficiency,
    Wellbeing,
    Risk,
    Timing,
    LearningAndHealth,
}

impl Category {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Necessity,
            Self::Economics,
            Self::Lifecycle,
            Self::Efficiency,
            Self::Wellbeing,
            Self::Risk,
            Self::Timing,
            Self::LearningAndHealth,
        ]
    }

    pub const fn code(self) -> char {
        match self {
            Self::Necessity => 'A',
            Self::Economics => 'B',
            Self::Lifecycle => 'C',
            Self::Efficiency => 'D',
            Self::Wellbeing => 'E',
            Self::Risk => 'F',
            Self::Timing => 'G',
            Self::LearningAndHealth => 'H',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Necessity => "Functional necessity",
            Self::Economics => "Economic rationality",
            Self::Lifecycle => "Lifecycle return",
            Self::Efficiency => "Efficiency and time value",
            Self::Wellbeing => "Psychological and quality-of-life value",
            Self::Risk => "Risk and pressure",
            Self::Timing => "Timing and environment fit",
            Self::LearningAndHealth => "Learning and health cost",
        }
    }

    pub fn dimensions(self) -> impl Iterator<Item = Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(move |dimension| dimension.category() == self)
    }
}

/// One of the fixed evaluation axes a purchase is rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "A1")]
    BaseNeedMatch,
    #[serde(rename = "A2")]
    UsageFrequency,
    #[serde(rename = "A3")]
    Replaceability,
    #[serde(rename = "B1")]
    ValueForMoney,
    #[serde(rename = "B2")]
    LifecycleCost,
    #[serde(rename = "B3")]
    CashFlowImpact,
    #[serde(rename = "B4")]
    OpportunityCost,
    #[serde(rename = "C1")]
    ServiceLife,
    #[serde(rename = "C2")]
    ResaleValue,
    #[serde(rename = "C3")]
    ObsolescenceRisk,
    #[serde(rename = "D1")]
    DirectEfficiency,
    #[serde(rename = "D2")]
    IndirectBenefit,
    #[serde(rename = "E1")]
    EmotionalValue,
    #[serde(rename = "E2")]
    SocialImage,
    #[serde(rename = "E3")]
    HouseholdAcceptance,
    #[serde(rename = "F1")]
    UpfrontPressure,
    #[serde(rename = "F2")]
    MaintenanceRisk,
    #[serde(rename = "F3")]
    PriceVolatility,
    #[serde(rename = "G1")]
    PurchaseTiming,
    #[serde(rename = "G2")]
    SpaceFit,
    #[serde(rename = "H1")]
    LearningCost,
    #[serde(rename = "H2")]
    HealthImpact,
    #[serde(rename = "H3")]
    PrivacyRisk,
}

impl Dimension {
    pub const COUNT: usize = 23;

    /// Catalog order; scores are always accumulated in this order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::BaseNeedMatch,
        Self::UsageFrequency,
        Self::Replaceability,
        Self::ValueForMoney,
        Self::LifecycleCost,
        Self::CashFlowImpact,
        Self::OpportunityCost,
        Self::ServiceLife,
        Self::ResaleValue,
        Self::ObsolescenceRisk,
        Self::DirectEfficiency,
        Self::IndirectBenefit,
        Self::EmotionalValue,
        Self::SocialImage,
        Self::HouseholdAcceptance,
        Self::UpfrontPressure,
        Self::MaintenanceRisk,
        Self::PriceVolatility,
        Self::PurchaseTiming,
        Self::SpaceFit,
        Self::LearningCost,
        Self::HealthImpact,
        Self::PrivacyRisk,
    ];

    /// Position of the dimension in [`Dimension::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::BaseNeedMatch => "A1",
            Self::UsageFrequency => "A2",
            Self::Replaceability => "A3",
            Self::ValueForMoney => "B1",
            Self::LifecycleCost => "B2",
            Self::CashFlowImpact => "B3",
            Self::OpportunityCost => "B4",
            Self::ServiceLife => "C1",
            Self::ResaleValue => "C2",
            Self::ObsolescenceRisk => "C3",
            Self::DirectEfficiency => "D1",
            Self::IndirectBenefit => "D2",
            Self::EmotionalValue => "E1",
            Self::SocialImage => "E2",
            Self::HouseholdAcceptance => "E3",
            Self::UpfrontPressure => "F1",
            Self::MaintenanceRisk => "F2",
            Self::PriceVolatility => "F3",
            Self::PurchaseTiming => "G1",
            Self::SpaceFit => "G2",
            Self::LearningCost => "H1",
            Self::HealthImpact => "H2",
            Self::PrivacyRisk => "H3",
        }
    }

    pub const fn category(self) -> Category {
        match self {
            Self::BaseNeedMatch | Self::UsageFrequency | Self::Replaceability => {
                Category::Necessity
            }
            Self::ValueForMoney
            | Self::LifecycleCost
            | Self::CashFlowImpact
            | Self::OpportunityCost => Category::Economics,
            Self::ServiceLife | Self::ResaleValue | Self::ObsolescenceRisk => Category::Lifecycle,
            Self::DirectEfficiency | Self::IndirectBenefit => Category::Efficiency,
            Self::EmotionalValue | Self::SocialImage | Self::HouseholdAcceptance => {
                Category::Wellbeing
            }
            Self::UpfrontPressure | Self::MaintenanceRisk | Self::PriceVolatility => Category::Risk,
            Self::PurchaseTiming | Self::SpaceFit => Category::Timing,
            Self::LearningCost | Self::HealthImpact | Self::PrivacyRisk => {
                Category::LearningAndHealth
            }
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BaseNeedMatch => "Basic need match",
            Self::UsageFrequency => "Expected usage frequency",
            Self::Replaceability => "Replaceability",
            Self::ValueForMoney => "Price-to-value",
            Self::LifecycleCost => "Total lifecycle cost",
            Self::CashFlowImpact => "Cash-flow impact",
            Self::OpportunityCost => "Investment opportunity cost",
            Self::ServiceLife => "Service life and depreciation",
            Self::ResaleValue => "Resale value retention",
            Self::ObsolescenceRisk => "Technology iteration risk",
            Self::DirectEfficiency => "Direct efficiency gain",
            Self::IndirectBenefit => "Indirect benefit",
            Self::EmotionalValue => "Emotional value",
            Self::SocialImage => "Social and image value",
            Self::HouseholdAcceptance => "Family or partner acceptance",
            Self::UpfrontPressure => "One-time funding pressure",
            Self::MaintenanceRisk => "Maintenance risk",
            Self::PriceVolatility => "Price volatility risk",
            Self::PurchaseTiming => "Purchase timing",
            Self::SpaceFit => "Space and environment fit",
            Self::LearningCost => "Learning and adaptation cost",
            Self::HealthImpact => "Health and safety impact",
            Self::PrivacyRisk => "Privacy and data risk",
        }
    }

    /// Textual anchors for ratings 0 through 5, least to most favourable.
    pub const fn option_labels(self) -> [&'static str; OPTIONS_PER_DIMENSION] {
        match self {
            Self::BaseNeedMatch => [
                "Pure want",
                "Nice to have",
                "Somewhat useful",
                "Fairly practical",
                "Very useful",
                "Hard necessity",
            ],
            Self::UsageFrequency => [
                "Almost never",
                "Occasionally (1-2 times a month)",
                "Regularly (1-2 times a week)",
                "Often (every other day)",
                "Daily",
                "Several times a day",
            ],
            Self::Replaceability => [
                "Several free alternatives",
                "Cheap alternatives exist",
                "Alternatives are adequate",
                "Alternatives are poor",
                "Few alternatives",
                "Irreplaceable",
            ],
            Self::ValueForMoney => [
                "Clearly overpriced",
                "On the expensive side",
                "Average price",
                "Acceptable value",
                "Good value",
                "Outstanding value",
            ],
            Self::LifecycleCost => [
                "More than 20% of annual income",
                "15-20% of annual income",
                "10-15% of annual income",
                "6-10% of annual income",
                "3-6% of annual income",
                "Under 3% of annual income",
            ],
            Self::CashFlowImpact => [
                "Hurts quality of life",
                "Uses emergency funds",
                "Requires instalments",
                "Slight pressure",
                "Some room to spare",
                "No pressure at all",
            ],
            Self::OpportunityCost => [
                "Misses a high-yield investment",
                "Disrupts regular investing",
                "Delays financial plans",
                "Ordinary opportunity cost",
                "Minimal opportunity cost",
                "No opportunity cost",
            ],
            Self::ServiceLife => [
                "Under 1 year",
                "1-2 years",
                "2-3 years",
                "3-5 years",
                "5-8 years",
                "Over 8 years",
            ],
            Self::ResaleValue => [
                "Retains under 10%",
                "Retains 10-20%",
                "Retains 20-30%",
                "Retains 30-50%",
                "Retains 50-70%",
                "Retains over 70%",
            ],
            Self::ObsolescenceRisk => [
                "New model every six months",
                "Yearly refresh",
                "New generation every 2 years",
                "Fairly mature technology",
                "Slow iteration",
                "Very stable technology",
            ],
            Self::DirectEfficiency => [
                "No efficiency gain",
                "Marginal gain",
                "Small gain",
                "Noticeable gain",
                "Large gain",
                "Dramatic gain",
            ],
            Self::IndirectBenefit => [
                "No benefit",
                "Minor improvement",
                "Improves health",
                "Builds skills",
                "Saves money",
                "Generates income",
            ],
            Self::EmotionalValue => [
                "Indifferent",
                "Mildly pleasant",
                "Fairly happy",
                "Very happy",
                "Deeply satisfied",
                "Tremendous joy",
            ],
            Self::SocialImage => [
                "Negative effect",
                "No effect",
                "Slight help",
                "Some help",
                "Clear boost",
                "Significant boost",
            ],
            Self::HouseholdAcceptance => [
                "Strongly opposed",
                "Not very supportive",
                "Neutral",
                "Fairly supportive",
                "Very supportive",
                "Fully supportive",
            ],
            Self::UpfrontPressure => [
                "Over 150% of monthly income",
                "120-150% of monthly income",
                "80-120% of monthly income",
                "50-80% of monthly income",
                "30-50% of monthly income",
                "Under 30% of monthly income",
            ],
            Self::MaintenanceRisk => [
                "Fails often and repairs are costly",
                "High upkeep cost",
                "Average upkeep cost",
                "Cheap upkeep",
                "Rarely needs maintenance",
                "Practically maintenance-free",
            ],
            Self::PriceVolatility => [
                "Certain to drop soon",
                "May drop 20% or more",
                "Minor fluctuation",
                "Stable price",
                "Price keeps rising",
                "Limited and scarce",
            ],
            Self::PurchaseTiming => [
                "Very poor timing",
                "Poor timing",
                "Average timing",
                "Good timing",
                "Very good timing",
                "Best possible timing",
            ],
            Self::SpaceFit => [
                "Does not fit at all",
                "Barely fits",
                "Basically suitable",
                "Fairly suitable",
                "Very suitable",
                "Perfect fit",
            ],
            Self::LearningCost => [
                "Very hard to learn",
                "Needs dedicated training",
                "Needs study",
                "Fairly easy to pick up",
                "Very easy to use",
                "No learning needed",
            ],
            Self::HealthImpact => [
                "Clearly harmful",
                "Possibly harmful",
                "Health neutral",
                "Slightly beneficial",
                "Fairly beneficial",
                "Clearly beneficial",
            ],
            Self::PrivacyRisk => [
                "High privacy risk",
                "Moderate privacy risk",
                "Low privacy risk",
                "Relatively safe",
                "Very safe",
                "Completely safe",
            ],
        }
    }

    pub fn options(self) -> [RatingOption; OPTIONS_PER_DIMENSION] {
        let labels = self.option_labels();
        std::array::from_fn(|value| RatingOption {
            value: value as u8,
            label: labels[value],
        })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Dimension {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InputError::UnknownDimension(trimmed.to_string()))
    }
}

/// A single selectable rating with its descriptive anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingOption {
    pub value: u8,
    pub label: &'static str,
}

/// Serializable view of one dimension for rendering input controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionView {
    pub code: &'static str,
    pub label: &'static str,
    pub options: Vec<RatingOption>,
}

/// Serializable view of one category and its dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    pub code: char,
    pub category: Category,
    pub label: &'static str,
    pub dimensions: Vec<DimensionView>,
}

/// Full catalog grouped by category, in display order.
pub fn catalog() -> Vec<CategoryView> {
    Category::ordered()
        .into_iter()
        .map(|category| CategoryView {
            code: category.code(),
            category,
            label: category.label(),
            dimensions: category
                .dimensions()
                .map(|dimension| DimensionView {
                    code: dimension.code(),
                    label: dimension.label(),
                    options: dimension.options().to_vec(),
                })
                .collect(),
        })
        .collect()
}
