use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BuyerProfile, TaxBracket};

/// The three acquisition-tax schedules in force for 2025 purchases.
///
/// Bracket values follow the Israel Tax Authority tables (single-home
/// thresholds frozen until 15.01.2028; new-immigrant relief as amended
/// August 2024).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BracketSchedule {
    /// Israeli resident purchasing their only home.
    SingleHome,
    /// Additional property, or a non-resident buyer.
    AdditionalProperty,
    /// New immigrant purchasing their only home.
    NewImmigrant,
}

impl BracketSchedule {
    /// Selects the schedule for a buyer profile.
    ///
    /// Rules are evaluated top to bottom; the first match wins:
    /// 1. new immigrant buying their only home → `NewImmigrant`
    /// 2. resident buying their only home → `SingleHome`
    /// 3. everyone else → `AdditionalProperty`
    pub fn for_profile(profile: &BuyerProfile) -> Self {
        if profile.is_new_immigrant && profile.is_only_home {
            return Self::NewImmigrant;
        }
        if profile.is_resident && profile.is_only_home {
            return Self::SingleHome;
        }
        Self::AdditionalProperty
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleHome => "single-home",
            Self::AdditionalProperty => "additional-property",
            Self::NewImmigrant => "new-immigrant",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single-home" => Some(Self::SingleHome),
            "additional-property" => Some(Self::AdditionalProperty),
            "new-immigrant" => Some(Self::NewImmigrant),
            _ => None,
        }
    }

    /// Human-readable description for report output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SingleHome => "Israeli resident, only home",
            Self::AdditionalProperty => "additional property / non-resident",
            Self::NewImmigrant => "new immigrant, only home",
        }
    }

    /// The ordered, contiguous bracket table for this schedule.
    pub fn brackets(&self) -> Vec<TaxBracket> {
        match self {
            Self::SingleHome => vec![
                bracket(0, Some(1_978_745), Decimal::ZERO),
                bracket(1_978_745, Some(2_347_040), Decimal::new(35, 3)),
                bracket(2_347_040, Some(6_055_070), Decimal::new(5, 2)),
                bracket(6_055_070, Some(20_183_565), Decimal::new(8, 2)),
                bracket(20_183_565, None, Decimal::new(10, 2)),
            ],
            Self::AdditionalProperty => vec![
                bracket(0, Some(6_055_070), Decimal::new(8, 2)),
                bracket(6_055_070, None, Decimal::new(10, 2)),
            ],
            Self::NewImmigrant => vec![
                bracket(0, Some(1_978_745), Decimal::ZERO),
                bracket(1_978_745, Some(6_055_070), Decimal::new(5, 3)),
                bracket(6_055_070, Some(20_183_565), Decimal::new(8, 2)),
                bracket(20_183_565, None, Decimal::new(10, 2)),
            ],
        }
    }
}

fn bracket(
    lower: i64,
    upper: Option<i64>,
    rate: Decimal,
) -> TaxBracket {
    TaxBracket {
        lower: Decimal::from(lower),
        upper: upper.map(Decimal::from),
        rate,
    }
}
