use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Buyer characteristics that determine the acquisition-tax schedule and
/// the permitted loan-to-value ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerProfile {
    /// The buyer is an Israeli resident.
    pub is_resident: bool,

    /// This is the buyer's only home (or an existing home will be sold
    /// within the statutory window).
    pub is_only_home: bool,

    /// The buyer is a new immigrant (oleh).
    pub is_new_immigrant: bool,
}

impl BuyerProfile {
    /// Maximum mortgage as a fraction of the purchase price.
    ///
    /// Bank of Israel rules: 75% for a resident buying their only home,
    /// 50% for everyone else (additional property or non-resident).
    pub fn max_ltv(&self) -> Decimal {
        if self.is_resident && self.is_only_home {
            Decimal::new(75, 2)
        } else {
            Decimal::new(50, 2)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn max_ltv_is_75_percent_for_resident_only_home() {
        let profile = BuyerProfile {
            is_resident: true,
            is_only_home: true,
            is_new_immigrant: false,
        };

        assert_eq!(profile.max_ltv(), dec!(0.75));
    }

    #[test]
    fn max_ltv_is_50_percent_for_additional_property() {
        let profile = BuyerProfile {
            is_resident: true,
            is_only_home: false,
            is_new_immigrant: false,
        };

        assert_eq!(profile.max_ltv(), dec!(0.50));
    }

    #[test]
    fn max_ltv_is_50_percent_for_non_resident() {
        let profile = BuyerProfile {
            is_resident: false,
            is_only_home: true,
            is_new_immigrant: false,
        };

        assert_eq!(profile.max_ltv(), dec!(0.50));
    }
}
