//! Progressive acquisition-tax calculation.
//!
//! Israeli acquisition tax (mas rechisha) is a marginal-rate tax: each
//! bracket taxes only the slice of the price that falls inside it. Which
//! bracket schedule applies depends on the buyer profile; see
//! [`BracketSchedule::for_profile`] for the selection policy.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use budget_core::calculations::purchase_tax::purchase_tax;
//! use budget_core::models::{BracketSchedule, BuyerProfile};
//!
//! let profile = BuyerProfile {
//!     is_resident: true,
//!     is_only_home: true,
//!     is_new_immigrant: false,
//! };
//! let result = purchase_tax(dec!(2400000), &profile);
//!
//! assert_eq!(result.schedule, BracketSchedule::SingleHome);
//! assert_eq!(result.amount, dec!(15538.33));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{max, round_half_up};
use crate::models::{BracketSchedule, BuyerProfile, TaxBracket};

/// Acquisition tax together with the schedule it was computed under, so
/// the caller can display which relief applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTax {
    pub amount: Decimal,
    pub schedule: BracketSchedule,
}

/// Marginal tax over an ordered, contiguous bracket table.
///
/// For each bracket, the taxable slice is `min(amount, upper) - lower`;
/// brackets entirely above `amount` contribute nothing. No boundary
/// special-casing is needed: the slice width is zero or the correct
/// partial width by construction. Negative inputs yield zero.
pub fn progressive_tax(
    amount: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    let mut tax = Decimal::ZERO;
    for bracket in brackets {
        if amount <= bracket.lower {
            break;
        }
        let capped = match bracket.upper {
            Some(upper) => amount.min(upper),
            None => amount,
        };
        let taxable = capped - bracket.lower;
        if taxable > Decimal::ZERO {
            tax += taxable * bracket.rate;
        }
    }
    round_half_up(max(tax, Decimal::ZERO))
}

/// Acquisition tax for a purchase price under the buyer's schedule.
pub fn purchase_tax(
    price: Decimal,
    profile: &BuyerProfile,
) -> PurchaseTax {
    let schedule = BracketSchedule::for_profile(profile);
    let amount = progressive_tax(price, &schedule.brackets());
    PurchaseTax { amount, schedule }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::{prop_assert, proptest};
    use rust_decimal_macros::dec;

    use super::*;

    fn single_home_resident() -> BuyerProfile {
        BuyerProfile {
            is_resident: true,
            is_only_home: true,
            is_new_immigrant: false,
        }
    }

    const ALL_SCHEDULES: [BracketSchedule; 3] = [
        BracketSchedule::SingleHome,
        BracketSchedule::AdditionalProperty,
        BracketSchedule::NewImmigrant,
    ];

    #[test]
    fn zero_price_is_taxed_zero_under_every_schedule() {
        for schedule in ALL_SCHEDULES {
            assert_eq!(progressive_tax(dec!(0), &schedule.brackets()), dec!(0));
        }
    }

    #[test]
    fn negative_amount_is_taxed_zero() {
        for schedule in ALL_SCHEDULES {
            assert_eq!(progressive_tax(dec!(-100000), &schedule.brackets()), dec!(0));
        }
    }

    #[test]
    fn price_inside_exempt_bracket_owes_nothing() {
        let brackets = BracketSchedule::SingleHome.brackets();

        assert_eq!(progressive_tax(dec!(1500000), &brackets), dec!(0));
    }

    #[test]
    fn price_at_exempt_upper_bound_owes_nothing() {
        let brackets = BracketSchedule::SingleHome.brackets();

        assert_eq!(progressive_tax(dec!(1978745), &brackets), dec!(0));
    }

    #[test]
    fn single_home_price_spanning_three_brackets() {
        let brackets = BracketSchedule::SingleHome.brackets();

        let result = progressive_tax(dec!(2400000), &brackets);

        // (2,347,040 - 1,978,745) * 0.035 + (2,400,000 - 2,347,040) * 0.05
        //  = 12,890.325 + 2,648 = 15,538.325 -> 15,538.33
        assert_eq!(result, dec!(15538.33));
    }

    #[test]
    fn investor_pays_eight_percent_from_the_first_shekel() {
        let brackets = BracketSchedule::AdditionalProperty.brackets();

        assert_eq!(progressive_tax(dec!(1000000), &brackets), dec!(80000.00));
    }

    #[test]
    fn new_immigrant_pays_half_a_percent_above_the_exemption() {
        let brackets = BracketSchedule::NewImmigrant.brackets();

        let result = progressive_tax(dec!(2400000), &brackets);

        // (2,400,000 - 1,978,745) * 0.005 = 2,106.275 -> 2,106.28
        assert_eq!(result, dec!(2106.28));
    }

    #[test]
    fn top_bracket_applies_above_twenty_million() {
        let brackets = BracketSchedule::SingleHome.brackets();

        let at_top = progressive_tax(dec!(20183565), &brackets);
        let above_top = progressive_tax(dec!(21183565), &brackets);

        // One million more, all of it in the 10% bracket.
        assert_eq!(above_top - at_top, dec!(100000.00));
    }

    #[test]
    fn no_jump_at_any_bracket_boundary() {
        for schedule in ALL_SCHEDULES {
            let brackets = schedule.brackets();
            for bracket in &brackets {
                let Some(upper) = bracket.upper else { continue };
                let below = progressive_tax(upper - dec!(0.01), &brackets);
                let at = progressive_tax(upper, &brackets);

                // A one-agora step can move the tax by at most one agora
                // times the top marginal rate, plus rounding.
                assert!(
                    at - below <= dec!(0.02),
                    "discontinuity at {upper} under {schedule:?}: {below} -> {at}"
                );
            }
        }
    }

    #[test]
    fn purchase_tax_reports_selected_schedule() {
        let result = purchase_tax(dec!(2400000), &single_home_resident());

        assert_eq!(result.schedule, BracketSchedule::SingleHome);
        assert_eq!(result.amount, dec!(15538.33));
    }

    #[test]
    fn purchase_tax_uses_investor_schedule_for_second_home() {
        let profile = BuyerProfile {
            is_resident: true,
            is_only_home: false,
            is_new_immigrant: false,
        };

        let result = purchase_tax(dec!(2400000), &profile);

        assert_eq!(result.schedule, BracketSchedule::AdditionalProperty);
        assert_eq!(result.amount, dec!(192000.00));
    }

    proptest! {
        #[test]
        fn tax_is_monotone_in_price(a in 0u64..50_000_000, b in 0u64..50_000_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for schedule in ALL_SCHEDULES {
                let brackets = schedule.brackets();
                let tax_lo = progressive_tax(Decimal::from(lo), &brackets);
                let tax_hi = progressive_tax(Decimal::from(hi), &brackets);
                prop_assert!(tax_lo <= tax_hi);
            }
        }

        #[test]
        fn tax_never_exceeds_top_rate_times_price(price in 0u64..50_000_000) {
            for schedule in ALL_SCHEDULES {
                let brackets = schedule.brackets();
                let top_rate = brackets.last().unwrap().rate;
                let tax = progressive_tax(Decimal::from(price), &brackets);
                prop_assert!(tax <= Decimal::from(price) * top_rate);
            }
        }
    }
}
