use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market constants used by the budget worksheet.
///
/// These are conventions and rules of thumb rather than law; they change
/// over time, so they are carried as data instead of being buried in the
/// calculation code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Default VAT rate applied to service fees (18% as of 2025).
    pub vat_rate: Decimal,

    /// Flat fee for the developer's lawyer, always charged on a
    /// new-build purchase.
    pub contractor_lawyer_fee: Decimal,

    /// Minimum mortgage-consultant fee regardless of the percentage.
    pub consultant_min_fee: Decimal,

    /// Rule-of-thumb monthly repayment per million shekels borrowed,
    /// 30-year term.
    pub monthly_per_million_30yr: Decimal,

    /// Rule-of-thumb monthly repayment per million shekels borrowed for
    /// any term other than 30 years (calibrated on a 20-year loan).
    pub monthly_per_million_other: Decimal,
}

impl BudgetConfig {
    /// Constants for the Israeli market, 2025.
    pub fn israel_2025() -> Self {
        Self {
            vat_rate: Decimal::new(18, 2),
            contractor_lawyer_fee: Decimal::from(5_500),
            consultant_min_fee: Decimal::from(7_500),
            monthly_per_million_30yr: Decimal::from(5_550),
            monthly_per_million_other: Decimal::from(6_700),
        }
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self::israel_2025()
    }
}
