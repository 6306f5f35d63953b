use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A service fee together with the VAT charged on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeLine {
    pub amount: Decimal,
    pub vat: Decimal,
}

impl FeeLine {
    pub const ZERO: Self = Self {
        amount: Decimal::ZERO,
        vat: Decimal::ZERO,
    };

    pub fn total(&self) -> Decimal {
        self.amount + self.vat
    }
}

/// All transaction fees, each carrying its own VAT line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    pub broker: FeeLine,
    pub buyer_lawyer: FeeLine,
    /// Developer's (contractor's) lawyer, a flat statutory-style charge.
    pub contractor_lawyer: FeeLine,
    pub mortgage_consultant: FeeLine,
}

impl FeeBreakdown {
    /// Sum of every fee and every VAT line.
    pub fn total(&self) -> Decimal {
        self.broker.total()
            + self.buyer_lawyer.total()
            + self.contractor_lawyer.total()
            + self.mortgage_consultant.total()
    }
}
