use serde::{Deserialize, Serialize};

/// Situational flag that adds a flat bonus to the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjustment {
    Urgent,
    Discount,
    Brand,
    Gift,
    Investment,
}

/// Flat bonus per adjustment. Applied to the aggregate score, never scaled by weights.
pub const ADJUSTMENT_BONUSES: [(Adjustment, f64); 5] = [
    (Adjustment::Urgent, 2.0),
    (Adjustment::Discount, 2.0),
    (Adjustment::Brand, 0.8),
    (Adjustment::Gift, 5.0),
    (Adjustment::Investment, 0.8),
];

impl Adjustment {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Urgent,
            Self::Discount,
            Self::Brand,
            Self::Gift,
            Self::Investment,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent need",
            Self::Discount => "Limited-time offer",
            Self::Brand => "Brand loyalty",
            Self::Gift => "Buying as a gift",
            Self::Investment => "Investment value",
        }
    }

    pub fn bonus(self) -> f64 {
        ADJUSTMENT_BONUSES
            .iter()
            .find(|(adjustment, _)| *adjustment == self)
            .map(|(_, bonus)| *bonus)
            .unwrap_or_default()
    }
}

/// Independent boolean toggles for every [`Adjustment`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Adjustments {
    pub urgent: bool,
    pub discount: bool,
    pub brand: bool,
    pub gift: bool,
    pub investment: bool,
}

impl Adjustments {
    pub const fn is_set(&self, adjustment: Adjustment) -> bool {
        match adjustment {
            Adjustment::Urgent => self.urgent,
            Adjustment::Discount => self.discount,
            Adjustment::Brand => self.brand,
            Adjustment::Gift => self.gift,
            Adjustment::Investment => self.investment,
        }
    }

    pub fn set(&mut self, adjustment: Adjustment, enabled: bool) {
        let flag = match adjustment {
            Adjustment::Urgent => &mut self.urgent,
            Adjustment::Discount => &mut self.discount,
            Adjustment::Brand => &mut self.brand,
            Adjustment::Gift => &mut self.gift,
            Adjustment::Investment => &mut self.investment,
        };
        *flag = enabled;
    }

    pub fn toggle(&mut self, adjustment: Adjustment) {
        self.set(adjustment, !self.is_set(adjustment));
    }

    pub fn with(mut self, adjustment: Adjustment) -> Self {
        self.set(adjustment, true);
        self
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn active(&self) -> impl Iterator<Item = Adjustment> + '_ {
        Adjustment::ordered()
            .into_iter()
            .filter(move |adjustment| self.is_set(*adjustment))
    }

    /// Sum of the flat bonuses for every enabled flag.
    pub fn bonus_total(&self) -> f64 {
        ADJUSTMENT_BONUSES
            .iter()
            .filter(|(adjustment, _)| self.is_set(*adjustment))
            .map(|(_, bonus)| bonus)
            .sum()
    }
}
