use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::adjustments::Adjustments;

pub const EXTREME_PRICE: u64 = 20_000;

/// Severity of a cooldown check; `Error` ranks highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A situational prompt advising the user to pause before purchasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownCheck {
    pub severity: Severity,
    pub message: String,
}

impl CooldownCheck {
    fn new(severity: Severity, message: &str) -> Self {
        Self {
            severity,
            message: message.to_string(),
        }
    }
}

/// Parses a raw price the way form input is read: leading whitespace is
/// skipped, an optional `+` is accepted and the leading run of digits is
/// taken. Absent, empty, non-numeric or negative input yields 0.
pub fn parse_price(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return 0;
    };
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

/// Price- and score-driven warnings, ordered by severity (error first).
///
/// A price that parses to 0 suppresses every check.
pub fn cooldown_checks(
    price_input: Option<&str>,
    adjustments: &Adjustments,
    score: f64,
) -> Vec<CooldownCheck> {
    let price = parse_price(price_input);
    let mut checks = Vec::new();
    if price == 0 {
        return checks;
    }

    if price > EXTREME_PRICE {
        checks.push(CooldownCheck::new(
            Severity::Error,
            "Extremely high price: wait a week and consult a professional",
        ));
    }

    if adjustments.discount {
        checks.push(CooldownCheck::new(
            Severity::Warning,
            "Limited-time promotion: verify it is genuine and check the return policy",
        ));
    }

    if (75.0..85.0).contains(&score) {
        checks.push(CooldownCheck::new(
            Severity::Info,
            "High score but not in the automatic-buy range: ask a friend for an independent rating",
        ));
    }

    checks.sort_by(|left, right| right.severity.cmp(&left.severity));
    checks
}

/// Suggested cooling-off period before committing to the purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaitPeriod {
    TwoWeeks,
    OneWeek,
    ThreeDays,
    OneDay,
    CoolOffDay,
    Immediate,
}

impl WaitPeriod {
    pub const fn label(self) -> &'static str {
        match self {
            Self::TwoWeeks => "2 weeks",
            Self::OneWeek => "1 week",
            Self::ThreeDays => "3 days",
            Self::OneDay => "24 hours",
            Self::CoolOffDay => "1 day to cool off",
            Self::Immediate => "decide immediately",
        }
    }

    pub fn duration(self) -> Duration {
        match self {
            Self::TwoWeeks => Duration::days(14),
            Self::OneWeek => Duration::days(7),
            Self::ThreeDays => Duration::days(3),
            Self::OneDay | Self::CoolOffDay => Duration::days(1),
            Self::Immediate => Duration::zero(),
        }
    }
}

impl fmt::Display for WaitPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// First matching rule wins; price thresholds take priority over the score fallback.
pub fn recommended_wait_time(price: u64, score: f64) -> WaitPeriod {
    match price {
        p if p > 50_000 => WaitPeriod::TwoWeeks,
        p if p > EXTREME_PRICE => WaitPeriod::OneWeek,
        p if p > 10_000 => WaitPeriod::ThreeDays,
        p if p > 5_000 => WaitPeriod::OneDay,
        _ if score < 65.0 => WaitPeriod::CoolOffDay,
        _ => WaitPeriod::Immediate,
    }
}

/// Score-banded reminders, independent of price. Nothing for 65 <= score < 85.
pub fn score_based_reminders(score: f64) -> Vec<&'static str> {
    let mut reminders = Vec::new();

    if score < 50.0 {
        reminders.push("Low score: reconsider whether you really need this");
    }

    if (50.0..65.0).contains(&score) {
        reminders.push("Middling score: wait for better timing or a better price");
    }

    if score >= 85.0 {
        reminders.push("Very high score, but confirm your budget is still sufficient");
    }

    reminders
}
