use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{BracketSchedule, FeeBreakdown, UpgradeLine};

/// Complete output of the budget worksheet.
///
/// A pure function of the worksheet input; recomputed in full whenever
/// any input changes, with no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Acquisition tax on the purchase price.
    pub purchase_tax: Decimal,

    /// Which bracket schedule the tax was computed under.
    pub bracket_schedule: BracketSchedule,

    /// Priced upgrade lines after quantity inference. Lines for amenities
    /// the developer already supplies are omitted entirely.
    pub upgrade_lines: Vec<UpgradeLine>,

    /// Sum of all upgrade lines.
    pub upgrade_total: Decimal,

    pub fees: FeeBreakdown,

    /// Sum of all fees including their VAT.
    pub total_fees: Decimal,

    /// Permitted loan-to-value ceiling as a fraction of the price.
    pub max_ltv: Decimal,

    /// Maximum mortgage the LTV ceiling allows (price × max_ltv).
    pub max_mortgage: Decimal,

    /// Mortgage used downstream, after clamping to the ceiling.
    pub mortgage: Decimal,

    /// True when the requested mortgage exceeded the ceiling and was
    /// reduced. The clamp is silent; this flag is how the caller is told.
    pub mortgage_clamped: bool,

    /// Price + tax + upgrades + fees.
    pub total_cost: Decimal,

    /// max(0, total cost − mortgage): the buyer's own-funds requirement.
    pub required_equity: Decimal,

    /// Rule-of-thumb monthly repayment on a 30-year term.
    pub monthly_30yr: Decimal,

    /// Rule-of-thumb monthly repayment on a 20-year term.
    pub monthly_20yr: Decimal,
}
