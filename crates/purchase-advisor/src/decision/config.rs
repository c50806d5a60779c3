use serde::{Deserialize, Serialize};

use super::product::ProductType;
use super::weights::Personality;

/// Defaults applied when a request leaves a selector blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionConfig {
    pub default_personality: Personality,
    pub default_product_type: ProductType,
}
