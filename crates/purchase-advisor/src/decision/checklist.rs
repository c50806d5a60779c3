use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistCategory {
    Financial,
    Necessity,
    Social,
    Risk,
}

/// A reflection question shown next to the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RationalCheckItem {
    pub question: String,
    pub category: ChecklistCategory,
}

const CHECKLIST: [(&str, ChecklistCategory); 6] = [
    (
        "How long can what you already own keep going if you don't buy this?",
        ChecklistCategory::Necessity,
    ),
    (
        "What would this money be worth after a year invested?",
        ChecklistCategory::Financial,
    ),
    (
        "What would your family say about the price?",
        ChecklistCategory::Social,
    ),
    (
        "After buying, would you still have money for emergencies?",
        ChecklistCategory::Risk,
    ),
    (
        "Will you still want this product a month from now?",
        ChecklistCategory::Necessity,
    ),
    (
        "Is there a cheaper alternative?",
        ChecklistCategory::Financial,
    ),
];

pub fn rational_checklist() -> Vec<RationalCheckItem> {
    CHECKLIST
        .iter()
        .map(|(question, category)| RationalCheckItem {
            question: (*question).to_string(),
            category: *category,
        })
        .collect()
}
