//! Budget aggregation worksheet.
//!
//! Combines the purchase price, acquisition tax, upgrade estimates,
//! service fees (with VAT) and the loan-to-value mortgage ceiling into a
//! total-cost and required-equity summary.
//!
//! # Worksheet structure
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Acquisition tax under the buyer's bracket schedule |
//! | 2    | Upgrade lines: inferred quantities for AC / screens / showers, user quantities elsewhere |
//! | 3    | LTV ceiling (75% resident-only-home, else 50%) and mortgage clamp |
//! | 4    | Broker, buyer-lawyer, contractor-lawyer and consultant fees, each with VAT |
//! | 5    | Total cost = price + tax + upgrades + fees |
//! | 6    | Required equity = max(0, total cost − mortgage) |
//! | 7    | Rule-of-thumb monthly repayments (30-year and 20-year) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use budget_core::calculations::{BudgetInput, BudgetWorksheet};
//! use budget_core::models::{BudgetConfig, BuyerProfile, UpgradeItem};
//!
//! let input = BudgetInput {
//!     price: dec!(2400000),
//!     profile: BuyerProfile {
//!         is_resident: true,
//!         is_only_home: true,
//!         is_new_immigrant: false,
//!     },
//!     rooms: 4,
//!     has_air_conditioning: false,
//!     has_window_screens: false,
//!     has_shower_enclosures: false,
//!     upgrades: UpgradeItem::default_basket(),
//!     broker_enabled: true,
//!     broker_rate: dec!(0.02),
//!     lawyer_enabled: true,
//!     lawyer_rate: dec!(0.01),
//!     consultant_enabled: true,
//!     consultant_rate: dec!(0.005),
//!     vat_rate: dec!(0.18),
//!     desired_mortgage: dec!(1800000),
//! };
//!
//! let worksheet = BudgetWorksheet::new(BudgetConfig::israel_2025());
//! let summary = worksheet.calculate(&input).unwrap();
//!
//! assert_eq!(summary.purchase_tax, dec!(15538.33));
//! assert_eq!(summary.total_cost, dec!(2621708.33));
//! assert_eq!(summary.required_equity, dec!(821708.33));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{max, round_half_up};
use crate::calculations::purchase_tax::purchase_tax;
use crate::models::{
    BudgetConfig, BudgetSummary, BuyerProfile, FeeBreakdown, FeeLine, UpgradeCategory, UpgradeItem,
    UpgradeLine,
};

/// Input-domain violations caught at the worksheet boundary.
///
/// The arithmetic itself is total; these only reject inputs that the
/// presentation layer should already have clamped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount {
        field: &'static str,
        value: Decimal,
    },

    #[error("{field} must be between 0 and 1, got {value}")]
    RateOutOfRange {
        field: &'static str,
        value: Decimal,
    },
}

/// All inputs to one budget calculation.
///
/// Every rate is an explicit field; the worksheet never reads ambient
/// state, so a rate is either supplied or the calculation does not run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetInput {
    /// Purchase price of the apartment in shekels.
    pub price: Decimal,

    pub profile: BuyerProfile,

    /// Number of rooms; drives the inferred AC and screen quantities.
    pub rooms: u32,

    /// The developer supplies air conditioning.
    pub has_air_conditioning: bool,

    /// The developer supplies window screens.
    pub has_window_screens: bool,

    /// The apartment comes with shower enclosures.
    pub has_shower_enclosures: bool,

    /// Upgrade basket; quantities for the three inferred categories are
    /// overridden from the apartment details.
    pub upgrades: Vec<UpgradeItem>,

    pub broker_enabled: bool,

    /// Broker commission as a fraction of the price (typically 0–3%).
    pub broker_rate: Decimal,

    pub lawyer_enabled: bool,

    /// Buyer's lawyer fee as a fraction of the price (typically 0–2%).
    pub lawyer_rate: Decimal,

    pub consultant_enabled: bool,

    /// Mortgage-consultant fee as a fraction of the mortgage, subject to
    /// the configured minimum.
    pub consultant_rate: Decimal,

    /// VAT rate applied to every service fee.
    pub vat_rate: Decimal,

    /// Requested mortgage; clamped to the LTV ceiling before use.
    pub desired_mortgage: Decimal,
}

impl BudgetInput {
    fn validate(&self) -> Result<(), BudgetError> {
        non_negative("price", self.price)?;
        non_negative("desired_mortgage", self.desired_mortgage)?;
        rate_in_range("broker_rate", self.broker_rate)?;
        rate_in_range("lawyer_rate", self.lawyer_rate)?;
        rate_in_range("consultant_rate", self.consultant_rate)?;
        rate_in_range("vat_rate", self.vat_rate)?;
        for item in &self.upgrades {
            non_negative("upgrade quantity", item.quantity)?;
            non_negative("upgrade unit cost", item.unit_cost)?;
        }
        Ok(())
    }
}

fn non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<(), BudgetError> {
    if value < Decimal::ZERO {
        return Err(BudgetError::NegativeAmount { field, value });
    }
    Ok(())
}

fn rate_in_range(
    field: &'static str,
    value: Decimal,
) -> Result<(), BudgetError> {
    if value < Decimal::ZERO || value >= Decimal::ONE {
        return Err(BudgetError::RateOutOfRange { field, value });
    }
    Ok(())
}

impl BudgetConfig {
    /// Checks the market constants, which may come from a user-edited
    /// config file rather than the built-in defaults.
    pub fn validate(&self) -> Result<(), BudgetError> {
        rate_in_range("vat_rate", self.vat_rate)?;
        non_negative("contractor_lawyer_fee", self.contractor_lawyer_fee)?;
        non_negative("consultant_min_fee", self.consultant_min_fee)?;
        non_negative("monthly_per_million_30yr", self.monthly_per_million_30yr)?;
        non_negative("monthly_per_million_other", self.monthly_per_million_other)?;
        Ok(())
    }
}

/// Calculator for the full purchase budget.
#[derive(Debug, Clone)]
pub struct BudgetWorksheet {
    config: BudgetConfig,
}

impl BudgetWorksheet {
    pub fn new(config: BudgetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BudgetConfig {
        &self.config
    }

    /// Runs the complete worksheet.
    ///
    /// Stateless: identical inputs always produce an identical summary.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError`] when an input or configured amount is
    /// negative or a rate falls outside `[0, 1)`.
    pub fn calculate(
        &self,
        input: &BudgetInput,
    ) -> Result<BudgetSummary, BudgetError> {
        self.config.validate()?;
        input.validate()?;

        let tax = purchase_tax(input.price, &input.profile);

        let upgrade_lines = self.upgrade_lines(input);
        // Line amounts are already rounded; the sum needs no rounding.
        let upgrade_total: Decimal = upgrade_lines.iter().map(|line| line.amount).sum();

        let max_ltv = input.profile.max_ltv();
        let max_mortgage = round_half_up(input.price * max_ltv);
        let (mortgage, mortgage_clamped) =
            self.clamp_mortgage(input.desired_mortgage, max_mortgage);
        if mortgage_clamped {
            warn!(
                requested = %input.desired_mortgage,
                ceiling = %max_mortgage,
                "requested mortgage exceeds the LTV ceiling; reduced to the ceiling"
            );
        }

        let fees = self.fee_breakdown(input, mortgage);
        let total_fees = fees.total();

        let total_cost =
            round_half_up(input.price + tax.amount + upgrade_total + total_fees);
        let required_equity = max(round_half_up(total_cost - mortgage), Decimal::ZERO);

        Ok(BudgetSummary {
            purchase_tax: tax.amount,
            bracket_schedule: tax.schedule,
            upgrade_lines,
            upgrade_total,
            fees,
            total_fees,
            max_ltv,
            max_mortgage,
            mortgage,
            mortgage_clamped,
            total_cost,
            required_equity,
            monthly_30yr: self.rule_of_thumb_monthly(mortgage, 30),
            monthly_20yr: self.rule_of_thumb_monthly(mortgage, 20),
        })
    }

    /// Prices the upgrade basket.
    ///
    /// The three amenity-driven categories are special: when the
    /// developer already supplies the amenity the line is omitted
    /// entirely, otherwise the quantity is inferred from the apartment
    /// (AC units = rooms, screens = rooms + 1, shower enclosures = 2)
    /// and overrides whatever quantity the item carries. Every other
    /// line is quantity × unit cost as supplied.
    fn upgrade_lines(
        &self,
        input: &BudgetInput,
    ) -> Vec<UpgradeLine> {
        input
            .upgrades
            .iter()
            .filter_map(|item| {
                let quantity = match item.category {
                    UpgradeCategory::AirConditioning if input.has_air_conditioning => return None,
                    UpgradeCategory::AirConditioning => Decimal::from(input.rooms),
                    UpgradeCategory::WindowScreens if input.has_window_screens => return None,
                    UpgradeCategory::WindowScreens => {
                        Decimal::from(input.rooms.saturating_add(1))
                    }
                    UpgradeCategory::ShowerEnclosures if input.has_shower_enclosures => {
                        return None;
                    }
                    UpgradeCategory::ShowerEnclosures => Decimal::TWO,
                    _ => item.quantity,
                };
                Some(UpgradeLine {
                    category: item.category,
                    quantity,
                    amount: round_half_up(quantity * item.unit_cost),
                })
            })
            .collect()
    }

    /// Clamps the requested mortgage to the LTV ceiling.
    ///
    /// This is a hard limit, not a recommendation: the clamped value is
    /// what every downstream figure uses. The flag tells the caller the
    /// request was reduced.
    fn clamp_mortgage(
        &self,
        desired: Decimal,
        ceiling: Decimal,
    ) -> (Decimal, bool) {
        if desired > ceiling {
            (ceiling, true)
        } else {
            (desired, false)
        }
    }

    fn fee_breakdown(
        &self,
        input: &BudgetInput,
        mortgage: Decimal,
    ) -> FeeBreakdown {
        FeeBreakdown {
            broker: self.percentage_fee(
                input.price,
                input.broker_rate,
                input.broker_enabled,
                input.vat_rate,
            ),
            buyer_lawyer: self.percentage_fee(
                input.price,
                input.lawyer_rate,
                input.lawyer_enabled,
                input.vat_rate,
            ),
            contractor_lawyer: self.flat_fee(self.config.contractor_lawyer_fee, input.vat_rate),
            mortgage_consultant: self.consultant_fee(
                mortgage,
                input.consultant_rate,
                input.consultant_enabled,
                input.vat_rate,
            ),
        }
    }

    /// A price-percentage fee; exactly zero (fee and VAT) when disabled.
    fn percentage_fee(
        &self,
        base: Decimal,
        rate: Decimal,
        enabled: bool,
        vat_rate: Decimal,
    ) -> FeeLine {
        if !enabled {
            return FeeLine::ZERO;
        }
        let amount = round_half_up(base * rate);
        FeeLine {
            amount,
            vat: round_half_up(amount * vat_rate),
        }
    }

    /// The contractor-lawyer flat fee, always charged on a new build.
    fn flat_fee(
        &self,
        amount: Decimal,
        vat_rate: Decimal,
    ) -> FeeLine {
        FeeLine {
            amount,
            vat: round_half_up(amount * vat_rate),
        }
    }

    /// Consultant fee: percentage of the (clamped) mortgage, floored at
    /// the configured minimum.
    fn consultant_fee(
        &self,
        mortgage: Decimal,
        rate: Decimal,
        enabled: bool,
        vat_rate: Decimal,
    ) -> FeeLine {
        if !enabled {
            return FeeLine::ZERO;
        }
        let amount = round_half_up(max(mortgage * rate, self.config.consultant_min_fee));
        FeeLine {
            amount,
            vat: round_half_up(amount * vat_rate),
        }
    }

    /// Rule-of-thumb monthly repayment.
    ///
    /// A two-point lookup, not an amortization formula: ₪5,550 per
    /// million on a 30-year term and ₪6,700 per million for any other
    /// term. Kept deliberately crude; the figure is a planning aid, not
    /// a quote.
    pub fn rule_of_thumb_monthly(
        &self,
        mortgage: Decimal,
        term_years: u32,
    ) -> Decimal {
        let per_million = if term_years == 30 {
            self.config.monthly_per_million_30yr
        } else {
            self.config.monthly_per_million_other
        };
        round_half_up(mortgage / Decimal::from(1_000_000) * per_million)
    }
}
