use serde::{Deserialize, Serialize};

use super::adjustments::Adjustments;
use super::catalog::{Category, Dimension};
use super::product::ProductType;
use super::ratings::RatingSet;
use super::weights::WeightProfile;

/// Upper bound of the total score.
pub const MAX_SCORE: f64 = 100.0;

/// Weighted contribution of one category, for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub label: String,
    pub score: f64,
    pub max_score: f64,
}

/// Full result of aggregating one rating set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base_score: f64,
    pub adjustment_bonus: f64,
    pub total_score: f64,
    pub categories: Vec<CategoryScore>,
}

/// Rating actually used for `dimension` once product-type overrides apply.
pub fn effective_rating(ratings: &RatingSet, product_type: ProductType, dimension: Dimension) -> f64 {
    product_type
        .pinned_rating(dimension)
        .map(f64::from)
        .unwrap_or_else(|| f64::from(ratings.get(dimension)))
}

/// Weighted sum of effective ratings over the whole catalog, before bonuses.
pub fn base_score(ratings: &RatingSet, weights: &WeightProfile, product_type: ProductType) -> f64 {
    Dimension::ALL
        .into_iter()
        .map(|dimension| effective_rating(ratings, product_type, dimension) * weights.weight(dimension))
        .sum()
}

/// Combines ratings, weights, the product-type override and adjustment
/// bonuses into a total in `[0, 100]`.
pub fn compute_total_score(
    ratings: &RatingSet,
    weights: &WeightProfile,
    product_type: ProductType,
    adjustments: &Adjustments,
) -> f64 {
    let total = base_score(ratings, weights, product_type) + adjustments.bonus_total();
    total.min(MAX_SCORE)
}

/// Same aggregation as [`compute_total_score`], keeping the intermediate terms.
pub fn score_breakdown(
    ratings: &RatingSet,
    weights: &WeightProfile,
    product_type: ProductType,
    adjustments: &Adjustments,
) -> ScoreBreakdown {
    let categories = Category::ordered()
        .into_iter()
        .map(|category| {
            let score = category
                .dimensions()
                .map(|dimension| {
                    effective_rating(ratings, product_type, dimension) * weights.weight(dimension)
                })
                .sum();
            CategoryScore {
                category,
                label: format!("{}. {}", category.code(), category.label()),
                score,
                max_score: weights.category_weight(category) * 5.0,
            }
        })
        .collect();

    let base_score = base_score(ratings, weights, product_type);
    let adjustment_bonus = adjustments.bonus_total();

    ScoreBreakdown {
        base_score,
        adjustment_bonus,
        total_score: (base_score + adjustment_bonus).min(MAX_SCORE),
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::adjustments::Adjustment;
    use crate::decision::weights::Personality;

    fn all_fives() -> RatingSet {
        RatingSet::from_values(Dimension::ALL.into_iter().map(|dimension| (dimension, 5)))
            .expect("valid ratings")
    }

    #[test]
    fn zero_ratings_on_digital_score_zero() {
        let total = compute_total_score(
            &RatingSet::new(),
            &WeightProfile::standard(),
            ProductType::Digital,
            &Adjustments::default(),
        );
        assert_eq!(total, 0.0);
    }

    #[test]
    fn non_digital_products_floor_at_privacy_weight() {
        for personality in Personality::ordered() {
            let weights = WeightProfile::for_personality(personality);
            let total = compute_total_score(
                &RatingSet::new(),
                &weights,
                ProductType::Appliance,
                &Adjustments::default(),
            );
            assert_eq!(total, weights.weight(Dimension::PrivacyRisk) * 5.0);
        }
    }

    #[test]
    fn privacy_rating_is_ignored_for_non_digital_products() {
        let weights = WeightProfile::standard();
        let low = RatingSet::from_values([(Dimension::PrivacyRisk, 0)]).expect("valid");
        let high = RatingSet::from_values([(Dimension::PrivacyRisk, 5)]).expect("valid");
        let none = Adjustments::default();

        assert_eq!(
            compute_total_score(&low, &weights, ProductType::Fitness, &none),
            compute_total_score(&high, &weights, ProductType::Fitness, &none)
        );
        assert!(
            compute_total_score(&low, &weights, ProductType::Digital, &none)
                < compute_total_score(&high, &weights, ProductType::Digital, &none)
        );
    }

    #[test]
    fn total_is_capped_at_one_hundred() {
        let gifts = Adjustment::ordered()
            .into_iter()
            .fold(Adjustments::default(), Adjustments::with);
        let breakdown = score_breakdown(
            &all_fives(),
            &WeightProfile::standard(),
            ProductType::Digital,
            &gifts,
        );
        assert!((breakdown.base_score - 105.0).abs() < 1e-9);
        assert_eq!(breakdown.total_score, MAX_SCORE);
    }

    #[test]
    fn adjustments_add_flat_bonus_regardless_of_profile() {
        let ratings = RatingSet::from_values([(Dimension::BaseNeedMatch, 3)]).expect("valid");
        let gift = Adjustments::default().with(Adjustment::Gift);

        for personality in Personality::ordered() {
            let weights = WeightProfile::for_personality(personality);
            let without =
                compute_total_score(&ratings, &weights, ProductType::Digital, &Adjustments::default());
            let with = compute_total_score(&ratings, &weights, ProductType::Digital, &gift);
            assert!((with - without - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn breakdown_categories_sum_to_base_score() {
        let ratings = RatingSet::from_values([
            (Dimension::BaseNeedMatch, 4),
            (Dimension::ValueForMoney, 3),
            (Dimension::ServiceLife, 5),
            (Dimension::SpaceFit, 2),
        ])
        .expect("valid");
        let breakdown = score_breakdown(
            &ratings,
            &WeightProfile::for_personality(Personality::Quality),
            ProductType::Luxury,
            &Adjustments::default(),
        );

        let summed: f64 = breakdown.categories.iter().map(|category| category.score).sum();
        assert!((summed - breakdown.base_score).abs() < 1e-9);
        assert_eq!(breakdown.categories.len(), 8);
        assert_eq!(breakdown.categories[0].label, "A. Functional necessity");
    }
}
