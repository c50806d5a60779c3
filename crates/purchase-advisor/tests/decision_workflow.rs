use chrono::{Duration, NaiveDate};
use purchase_advisor::decision::{
    classify_recommendation, compute_total_score, cooldown_checks, rational_checklist,
    recommended_wait_time, score_based_reminders, Adjustment, Adjustments, ChecklistCategory,
    DecisionConfig, DecisionEngine, Dimension, EvaluationContext, Personality, ProductType,
    RatingImporter, RecommendationTier, Severity, WeightProfile,
};
use std::io::Cursor;

fn evaluation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 18).expect("valid evaluation date")
}

const TREADMILL_CSV: &str = "\
Dimension,Rating
A1,4
A2,3
A3,2
B1,3
B2,3
B3,2
B4,2
C1,4
C2,2
C3,4
D1,2
D2,2
E1,3
E2,1
E3,2
F1,2
F2,3
F3,3
G1,2
G2,1
H1,4
H2,5
H3,0
";

#[test]
fn imported_ratings_flow_through_the_full_evaluation() {
    let ratings =
        RatingImporter::from_reader(Cursor::new(TREADMILL_CSV)).expect("treadmill csv imports");
    let mut context = EvaluationContext::new(ProductType::Fitness, Personality::Standard);
    context.product_name = "Treadmill".to_string();
    context.price = Some("6800".to_string());
    context.ratings = ratings;

    let engine = DecisionEngine::new(DecisionConfig::default());
    let report = engine.evaluate(&context, evaluation_date());

    // 60.4 from the ratings plus 1.0 from H3, pinned to 5 for non-digital products.
    assert!((report.base_score - 61.4).abs() < 1e-9, "{}", report.base_score);
    assert_eq!(report.recommendation.tier, RecommendationTier::Wait);
    assert_eq!(report.wait_time, "24 hours");
    assert_eq!(report.revisit_on, evaluation_date() + Duration::days(1));
    assert!(report.cooldown_checks.is_empty());
    assert_eq!(report.reminders.len(), 1);
    assert!(report.reminders[0].contains("better timing"));
}

#[test]
fn gift_adjustment_can_lift_a_purchase_into_the_next_tier() {
    let ratings =
        RatingImporter::from_reader(Cursor::new(TREADMILL_CSV)).expect("treadmill csv imports");
    let weights = WeightProfile::standard();
    let plain = compute_total_score(
        &ratings,
        &weights,
        ProductType::Fitness,
        &Adjustments::default(),
    );
    let gifted = compute_total_score(
        &ratings,
        &weights,
        ProductType::Fitness,
        &Adjustments::default()
            .with(Adjustment::Gift)
            .with(Adjustment::Urgent)
            .with(Adjustment::Discount),
    );

    assert_eq!(classify_recommendation(plain).tier, RecommendationTier::Wait);
    assert!((gifted - plain - 9.0).abs() < 1e-9);
    assert_eq!(
        classify_recommendation(gifted).tier,
        RecommendationTier::Caution
    );
}

#[test]
fn personality_changes_the_weighting_of_the_same_ratings() {
    let ratings =
        RatingImporter::from_reader(Cursor::new(TREADMILL_CSV)).expect("treadmill csv imports");
    let scores: Vec<f64> = Personality::ordered()
        .into_iter()
        .map(|personality| {
            compute_total_score(
                &ratings,
                &WeightProfile::for_personality(personality),
                ProductType::Fitness,
                &Adjustments::default(),
            )
        })
        .collect();

    assert!(scores.iter().all(|score| (0.0..=100.0).contains(score)));
    // The conservative profile rewards this treadmill's solid necessity ratings.
    assert!(scores[1] > scores[0]);
}

#[test]
fn cooldown_rules_match_documented_examples() {
    let discount = Adjustments::default().with(Adjustment::Discount);
    let checks = cooldown_checks(Some("25000"), &discount, 80.0);
    assert_eq!(checks.len(), 3);
    assert_eq!(checks[0].severity, Severity::Error);
    assert_eq!(checks[1].severity, Severity::Warning);
    assert_eq!(checks[2].severity, Severity::Info);

    assert!(cooldown_checks(None, &discount, 80.0).is_empty());
    assert!(cooldown_checks(Some("0"), &discount, 80.0).is_empty());

    assert_eq!(recommended_wait_time(60_000, 90.0).label(), "2 weeks");
    assert_eq!(recommended_wait_time(3_000, 60.0).label(), "1 day to cool off");
    assert_eq!(recommended_wait_time(3_000, 90.0).label(), "decide immediately");

    assert!(score_based_reminders(70.0).is_empty());
}

#[test]
fn checklist_and_catalog_are_static_reference_data() {
    let checklist = rational_checklist();
    assert_eq!(checklist, rational_checklist());
    assert_eq!(
        checklist
            .iter()
            .filter(|item| item.category == ChecklistCategory::Financial)
            .count(),
        2
    );
    assert_eq!(Dimension::ALL.len(), 23);
    assert_eq!(Dimension::PrivacyRisk.options()[5].label, "Completely safe");
}
