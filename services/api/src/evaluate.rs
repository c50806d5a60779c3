use crate::infra::parse_rating_arg;
use chrono::{Local, NaiveDate};
use clap::Args;
use purchase_advisor::config::AppConfig;
use purchase_advisor::decision::{
    catalog, rational_checklist, Adjustment, Adjustments, DecisionEngine, DecisionReport,
    Dimension, EvaluationRequest, RatingImporter, Severity, WeightProfile,
};
use purchase_advisor::error::AppError;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct EvaluateArgs {
    /// Product name shown in the report
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Price as typed; leading digits are used, anything else counts as unpriced
    #[arg(long)]
    pub(crate) price: Option<String>,
    /// digital, appliance, fitness, luxury or other (defaults to APP_DEFAULT_PRODUCT_TYPE)
    #[arg(long)]
    pub(crate) product_type: Option<String>,
    /// standard, conservative, efficiency or quality (defaults to APP_DEFAULT_PERSONALITY)
    #[arg(long)]
    pub(crate) personality: Option<String>,
    /// Rating for one dimension as CODE=VALUE, e.g. A1=3. Repeatable.
    #[arg(long = "rating", value_parser = parse_rating_arg)]
    pub(crate) ratings: Vec<(Dimension, u8)>,
    /// CSV file with Dimension,Rating columns; --rating values override it
    #[arg(long)]
    pub(crate) ratings_csv: Option<PathBuf>,
    /// Urgent need
    #[arg(long)]
    pub(crate) urgent: bool,
    /// Limited-time offer
    #[arg(long)]
    pub(crate) discount: bool,
    /// Brand loyalty
    #[arg(long)]
    pub(crate) brand: bool,
    /// Buying as a gift
    #[arg(long)]
    pub(crate) gift: bool,
    /// Investment value
    #[arg(long)]
    pub(crate) investment: bool,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Also print the weight of each dimension for this personality
    #[arg(long)]
    pub(crate) weights: Option<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ChecklistArgs {}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = DecisionEngine::new(config.decision);
    let json = args.json;
    let request = build_request(args)?;

    let report = engine.evaluate_request(&request, Local::now().date_naive())?;

    if json {
        let rendered = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        for line in report_lines(&report) {
            println!("{line}");
        }
    }

    Ok(())
}

/// Merges CSV ratings with `--rating` overrides into a request. Range checks
/// happen in the engine so both sources fail the same way.
pub(crate) fn build_request(args: EvaluateArgs) -> Result<EvaluationRequest, AppError> {
    let mut ratings = BTreeMap::new();
    if let Some(path) = args.ratings_csv {
        let imported = RatingImporter::from_path(path)?;
        for (dimension, rating) in imported.iter() {
            ratings.insert(dimension.code().to_string(), i64::from(rating.value()));
        }
    }
    for (dimension, value) in args.ratings {
        ratings.insert(dimension.code().to_string(), i64::from(value));
    }

    let mut adjustments = Adjustments::default();
    adjustments.set(Adjustment::Urgent, args.urgent);
    adjustments.set(Adjustment::Discount, args.discount);
    adjustments.set(Adjustment::Brand, args.brand);
    adjustments.set(Adjustment::Gift, args.gift);
    adjustments.set(Adjustment::Investment, args.investment);

    Ok(EvaluationRequest {
        product_name: args.name,
        price: args.price,
        product_type: args.product_type,
        personality: args.personality,
        ratings,
        adjustments,
        today: args.today,
    })
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "ERROR",
        Severity::Warning => "WARN",
        Severity::Info => "INFO",
    }
}

pub(crate) fn report_lines(report: &DecisionReport) -> Vec<String> {
    let mut lines = vec![
        "Purchase decision report".to_string(),
        report.summary(),
        format!(
            "Product type: {} | Profile: {} | Evaluated {}",
            report.product_type.label(),
            report.personality.label(),
            report.evaluated_on
        ),
        format!(
            "Score: {:.1} base + {:.1} adjustments = {:.1} / 100",
            report.base_score, report.adjustment_bonus, report.total_score
        ),
        String::new(),
        "Category breakdown".to_string(),
    ];

    for category in &report.categories {
        lines.push(format!(
            "- {}: {:.1} of {:.1}",
            category.label, category.score, category.max_score
        ));
    }

    lines.push(String::new());
    lines.push(format!("Recommendation: {}", report.recommendation.summary()));

    if report.cooldown_checks.is_empty() {
        lines.push("Cooldown checks: none".to_string());
    } else {
        lines.push("Cooldown checks".to_string());
        for check in &report.cooldown_checks {
            lines.push(format!(
                "- [{}] {}",
                severity_tag(check.severity),
                check.message
            ));
        }
    }

    lines.push(format!(
        "Suggested wait: {} (revisit on {})",
        report.wait_time, report.revisit_on
    ));

    for reminder in &report.reminders {
        lines.push(format!("Reminder: {reminder}"));
    }

    lines.push(String::new());
    lines.push("Before you buy, ask yourself".to_string());
    for item in &report.checklist {
        lines.push(format!("- {}", item.question));
    }

    lines
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let weights = args.weights.as_deref().map(WeightProfile::for_name);

    if let Some(profile) = &weights {
        println!(
            "Weights: {} ({})",
            profile.personality().label(),
            profile.personality().description()
        );
    }

    for category in catalog() {
        println!("\n{}. {}", category.code, category.label);
        for dimension in &category.dimensions {
            match &weights {
                Some(profile) => {
                    let weight = dimension
                        .code
                        .parse::<Dimension>()
                        .map(|dimension| profile.weight(dimension))?;
                    println!("  {} {} (weight {:.2})", dimension.code, dimension.label, weight);
                }
                None => println!("  {} {}", dimension.code, dimension.label),
            }
            for option in &dimension.options {
                println!("    {} = {}", option.value, option.label);
            }
        }
    }

    Ok(())
}

pub(crate) fn run_checklist(_args: ChecklistArgs) -> Result<(), AppError> {
    println!("Rational checklist");
    for (index, item) in rational_checklist().iter().enumerate() {
        println!("{}. {}", index + 1, item.question);
    }
    Ok(())
}
