use super::common::*;
use chrono::Duration;

use crate::decision::{
    Adjustment, DecisionConfig, DecisionEngine, Dimension, InputError, Personality, ProductType,
    RecommendationTier, Severity, WaitPeriod,
};

#[test]
fn engine_reports_good_tier_for_well_rated_laptop() {
    let engine = engine();
    let request = laptop_request();

    let report = engine
        .evaluate_request(&request, today())
        .expect("laptop request is valid");

    assert!((report.total_score - 75.8).abs() < 1e-9, "{}", report.total_score);
    assert_eq!(report.recommendation.tier, RecommendationTier::Good);
    assert_eq!(report.price, 12_999);
    assert_eq!(report.wait_period, WaitPeriod::ThreeDays);
    assert_eq!(report.wait_time, "3 days");
    assert_eq!(report.revisit_on, today() + Duration::days(3));
    assert_eq!(report.cooldown_checks.len(), 1);
    assert_eq!(report.cooldown_checks[0].severity, Severity::Info);
    assert!(report.reminders.is_empty());
    assert_eq!(report.checklist.len(), 6);
    assert_eq!(report.summary(), "Work laptop - 12999 | total 75.8 | Safe to buy");
}

#[test]
fn engine_pins_privacy_rating_for_non_digital_products() {
    let engine = engine();
    let mut request = laptop_request();
    request.product_type = Some("appliance".to_string());
    request.ratings.insert("H3".to_string(), 0);

    let report = engine
        .evaluate_request(&request, today())
        .expect("valid request");

    // H3 forced from 4 to 5 adds one step of its 0.2 weight.
    assert!((report.total_score - 76.0).abs() < 1e-9);
    let learning = report
        .categories
        .iter()
        .find(|category| category.label.starts_with('H'))
        .expect("learning and health category present");
    assert!((learning.score - 3.4).abs() < 1e-9);
}

#[test]
fn engine_falls_back_to_standard_for_unknown_personality() {
    let engine = engine();
    let mut request = laptop_request();
    request.personality = Some("impulsive".to_string());

    let context = engine
        .context_from_request(&request)
        .expect("unknown personality is not an error");
    assert_eq!(context.personality, Personality::Standard);
}

#[test]
fn engine_rejects_unknown_product_types_and_bad_ratings() {
    let engine = engine();

    let mut unknown_type = laptop_request();
    unknown_type.product_type = Some("vehicle".to_string());
    assert_eq!(
        engine.evaluate_request(&unknown_type, today()),
        Err(InputError::UnknownProductType("vehicle".to_string()))
    );

    let mut out_of_range = laptop_request();
    out_of_range.ratings.insert("D1".to_string(), 9);
    assert_eq!(
        engine.evaluate_request(&out_of_range, today()),
        Err(InputError::RatingOutOfRange {
            dimension: Dimension::DirectEfficiency,
            value: 9,
        })
    );

    let mut unknown_code = laptop_request();
    unknown_code.ratings.insert("I1".to_string(), 2);
    assert!(matches!(
        engine.evaluate_request(&unknown_code, today()),
        Err(InputError::UnknownDimension(code)) if code == "I1"
    ));
}

#[test]
fn blank_selectors_use_configured_defaults() {
    let engine = DecisionEngine::new(DecisionConfig {
        default_personality: Personality::Conservative,
        default_product_type: ProductType::Fitness,
    });
    let mut request = laptop_request();
    request.personality = None;
    request.product_type = Some("  ".to_string());

    let context = engine
        .context_from_request(&request)
        .expect("valid request");
    assert_eq!(context.personality, Personality::Conservative);
    assert_eq!(context.product_type, ProductType::Fitness);
}

#[test]
fn request_date_overrides_evaluation_date() {
    let engine = engine();
    let mut request = laptop_request();
    let requested = today() + Duration::days(30);
    request.today = Some(requested);

    let report = engine
        .evaluate_request(&request, today())
        .expect("valid request");
    assert_eq!(report.evaluated_on, requested);
    assert_eq!(report.revisit_on, requested + Duration::days(3));
}

#[test]
fn expensive_discounted_purchase_collects_every_check() {
    let engine = engine();
    let mut request = laptop_request();
    request.price = Some("25000".to_string());
    request.adjustments.set(Adjustment::Discount, true);

    let report = engine
        .evaluate_request(&request, today())
        .expect("valid request");

    // Discount bonus lifts 75.8 to 77.8, still inside the 75-85 band.
    assert!((report.total_score - 77.8).abs() < 1e-9);
    let severities: Vec<Severity> = report
        .cooldown_checks
        .iter()
        .map(|check| check.severity)
        .collect();
    assert_eq!(
        severities,
        vec![Severity::Error, Severity::Warning, Severity::Info]
    );
    assert_eq!(report.wait_time, "1 week");
}

#[test]
fn unpriced_low_score_suggests_cooling_off() {
    let engine = engine();
    let mut request = laptop_request();
    request.price = None;
    request.ratings.clear();

    let report = engine
        .evaluate_request(&request, today())
        .expect("valid request");
    assert_eq!(report.total_score, 0.0);
    assert_eq!(report.recommendation.tier, RecommendationTier::Avoid);
    assert!(report.cooldown_checks.is_empty());
    assert_eq!(report.wait_period, WaitPeriod::CoolOffDay);
    assert_eq!(report.reminders.len(), 1);
    assert_eq!(report.summary(), "Work laptop | total 0.0 | Consider letting it go");
}
