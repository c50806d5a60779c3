use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::adjustments::Adjustments;
use super::catalog::Dimension;
use super::cooldown::parse_price;
use super::product::ProductType;
use super::ratings::RatingSet;
use super::scoring::compute_total_score;
use super::weights::{Personality, WeightProfile};

/// Rejections raised while turning raw input into an [`EvaluationContext`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown dimension code '{0}'")]
    UnknownDimension(String),
    #[error("rating {value} for {dimension} is outside 0-5")]
    RatingOutOfRange { dimension: Dimension, value: i64 },
    #[error("dimension {0} is rated more than once")]
    DuplicateDimension(Dimension),
    #[error("unknown product type '{0}'")]
    UnknownProductType(String),
}

/// Everything that determines one evaluation. Owned by the caller for the
/// lifetime of a session and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationContext {
    pub product_name: String,
    pub price: Option<String>,
    pub product_type: ProductType,
    pub personality: Personality,
    pub ratings: RatingSet,
    pub adjustments: Adjustments,
}

impl EvaluationContext {
    pub fn new(product_type: ProductType, personality: Personality) -> Self {
        Self {
            product_type,
            personality,
            ..Self::default()
        }
    }

    pub fn weights(&self) -> WeightProfile {
        WeightProfile::for_personality(self.personality)
    }

    pub fn price_value(&self) -> u64 {
        parse_price(self.price.as_deref())
    }

    pub fn total_score(&self) -> f64 {
        compute_total_score(
            &self.ratings,
            &self.weights(),
            self.product_type,
            &self.adjustments,
        )
    }

    /// Clears every rating and adjustment; product details are kept.
    pub fn reset(&mut self) {
        self.ratings.reset();
        self.adjustments.reset();
    }
}

/// Raw evaluation input as it arrives over HTTP or from the CLI.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub personality: Option<String>,
    #[serde(default)]
    pub ratings: BTreeMap<String, i64>,
    #[serde(default)]
    pub adjustments: Adjustments,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Number(f64),
    Other(IgnoredAny),
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawPrice>::deserialize(deserializer)?;
    Ok(raw.and_then(|price| match price {
        RawPrice::Text(text) => Some(text),
        RawPrice::Number(number) => Some(number.to_string()),
        RawPrice::Other(_) => None,
    }))
}
