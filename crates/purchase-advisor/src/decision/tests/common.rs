use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::decision::{
    Adjustments, DecisionConfig, DecisionEngine, Dimension, EvaluationRequest, Personality,
    ProductType, RatingSet,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 11).expect("valid date")
}

pub(super) fn engine() -> DecisionEngine {
    DecisionEngine::new(DecisionConfig::default())
}

pub(super) fn uniform_ratings(value: u8) -> RatingSet {
    RatingSet::from_values(Dimension::ALL.into_iter().map(|dimension| (dimension, value)))
        .expect("uniform ratings are valid")
}

/// A well-rated laptop scoring 75.8 under the standard profile.
pub(super) fn laptop_ratings() -> BTreeMap<String, i64> {
    [
        ("A1", 5),
        ("A2", 5),
        ("A3", 3),
        ("B1", 4),
        ("B2", 4),
        ("B3", 3),
        ("B4", 3),
        ("C1", 4),
        ("C2", 2),
        ("C3", 2),
        ("D1", 4),
        ("D2", 3),
        ("E1", 3),
        ("E2", 2),
        ("E3", 3),
        ("F1", 2),
        ("F2", 3),
        ("F3", 2),
        ("G1", 3),
        ("G2", 5),
        ("H1", 4),
        ("H2", 2),
        ("H3", 4),
    ]
    .into_iter()
    .map(|(code, value)| (code.to_string(), value))
    .collect()
}

pub(super) fn laptop_request() -> EvaluationRequest {
    EvaluationRequest {
        product_name: Some("Work laptop".to_string()),
        price: Some("12999".to_string()),
        product_type: Some("digital".to_string()),
        personality: Some("standard".to_string()),
        ratings: laptop_ratings(),
        adjustments: Adjustments::default(),
        today: None,
    }
}

pub(super) fn all_profiles() -> [Personality; 4] {
    Personality::ordered()
}

pub(super) fn all_product_types() -> [ProductType; 5] {
    ProductType::ordered()
}
