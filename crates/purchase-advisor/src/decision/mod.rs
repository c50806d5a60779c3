//! Purchase decision rules: dimension catalog, weight profiles, score
//! aggregation, recommendation tiers, and cooling-off prompts.
//!
//! Every rule here is a pure function of its inputs. [`DecisionEngine`] only
//! resolves request defaults and bundles the individual rule outputs into a
//! [`DecisionReport`].

mod adjustments;
mod catalog;
mod checklist;
mod config;
mod context;
mod cooldown;
mod import;
mod product;
mod ratings;
mod recommendation;
pub mod router;
mod scoring;
mod weights;

#[cfg(test)]
mod tests;

pub use adjustments::{Adjustment, Adjustments, ADJUSTMENT_BONUSES};
pub use catalog::{
    catalog, Category, CategoryView, Dimension, DimensionView, RatingOption,
    OPTIONS_PER_DIMENSION,
};
pub use checklist::{rational_checklist, ChecklistCategory, RationalCheckItem};
pub use config::DecisionConfig;
pub use context::{EvaluationContext, EvaluationRequest, InputError};
pub use cooldown::{
    cooldown_checks, parse_price, recommended_wait_time, score_based_reminders, CooldownCheck,
    Severity, WaitPeriod,
};
pub use import::{RatingImportError, RatingImporter};
pub use product::ProductType;
pub use ratings::{Rating, RatingSet};
pub use recommendation::{classify_recommendation, Recommendation, RecommendationTier};
pub use router::decision_router;
pub use scoring::{
    base_score, compute_total_score, effective_rating, score_breakdown, CategoryScore,
    ScoreBreakdown, MAX_SCORE,
};
pub use weights::{
    weight_profiles, DimensionWeight, Personality, UnknownPersonality, WeightProfile,
    WeightProfileView,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless evaluator that applies the decision rules to a context.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    config: DecisionConfig,
}

impl DecisionEngine {
    pub fn new(config: DecisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Validates raw input at the boundary. Ratings must be known codes in
    /// 0-5 and the product type must be recognised; an unrecognised
    /// personality falls back to the standard profile.
    pub fn context_from_request(
        &self,
        request: &EvaluationRequest,
    ) -> Result<EvaluationContext, InputError> {
        let product_type = match request.product_type.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => self.config.default_product_type,
        };
        let personality = match request.personality.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Personality::from_name_or_standard(raw),
            _ => self.config.default_personality,
        };
        let ratings = RatingSet::from_codes(
            request
                .ratings
                .iter()
                .map(|(code, value)| (code.as_str(), *value)),
        )?;

        Ok(EvaluationContext {
            product_name: request.product_name.clone().unwrap_or_default(),
            price: request.price.clone(),
            product_type,
            personality,
            ratings,
            adjustments: request.adjustments,
        })
    }

    pub fn evaluate(&self, context: &EvaluationContext, today: NaiveDate) -> DecisionReport {
        let weights = context.weights();
        let breakdown = score_breakdown(
            &context.ratings,
            &weights,
            context.product_type,
            &context.adjustments,
        );
        let score = breakdown.total_score;
        let price = context.price_value();
        let recommendation = classify_recommendation(score);
        let wait_period = recommended_wait_time(price, score);

        debug!(
            product = %context.product_name,
            price,
            score,
            tier = ?recommendation.tier,
            personality = %context.personality,
            "purchase evaluated"
        );

        DecisionReport {
            product_name: context.product_name.clone(),
            price,
            product_type: context.product_type,
            personality: context.personality,
            evaluated_on: today,
            base_score: breakdown.base_score,
            adjustment_bonus: breakdown.adjustment_bonus,
            total_score: score,
            categories: breakdown.categories,
            recommendation,
            cooldown_checks: cooldown_checks(context.price.as_deref(), &context.adjustments, score),
            wait_period,
            wait_time: wait_period.label().to_string(),
            revisit_on: today + wait_period.duration(),
            reminders: score_based_reminders(score)
                .into_iter()
                .map(str::to_string)
                .collect(),
            checklist: rational_checklist(),
        }
    }

    /// Validates `request` and evaluates it. The request's own date wins over `today`.
    pub fn evaluate_request(
        &self,
        request: &EvaluationRequest,
        today: NaiveDate,
    ) -> Result<DecisionReport, InputError> {
        let context = self.context_from_request(request)?;
        Ok(self.evaluate(&context, request.today.unwrap_or(today)))
    }
}

/// Everything derived from one evaluation, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionReport {
    pub product_name: String,
    pub price: u64,
    pub product_type: ProductType,
    pub personality: Personality,
    pub evaluated_on: NaiveDate,
    pub base_score: f64,
    pub adjustment_bonus: f64,
    pub total_score: f64,
    pub categories: Vec<CategoryScore>,
    pub recommendation: Recommendation,
    pub cooldown_checks: Vec<CooldownCheck>,
    pub wait_period: WaitPeriod,
    pub wait_time: String,
    pub revisit_on: NaiveDate,
    pub reminders: Vec<String>,
    pub checklist: Vec<RationalCheckItem>,
}

impl DecisionReport {
    /// One-line digest: product, price, score and tier label.
    pub fn summary(&self) -> String {
        let name = if self.product_name.is_empty() {
            "Unnamed purchase"
        } else {
            self.product_name.as_str()
        };
        if self.price > 0 {
            format!(
                "{name} - {} | total {:.1} | {}",
                self.price, self.total_score, self.recommendation.label
            )
        } else {
            format!(
                "{name} | total {:.1} | {}",
                self.total_score, self.recommendation.label
            )
        }
    }
}
