use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One range of a progressive acquisition-tax schedule.
///
/// Brackets are ordered and contiguous: each bracket's `upper` equals the
/// next bracket's `lower`, the first `lower` is zero, and the last bracket
/// has `upper == None` (unbounded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower: Decimal,

    /// Upper bound of the bracket; `None` for the top bracket.
    pub upper: Option<Decimal>,

    /// Marginal rate applied to the slice of the price inside this
    /// bracket, as a fraction in `[0, 1)`.
    pub rate: Decimal,
}
