//! Budget calculation modules.
//!
//! Two cooperating worksheets: the progressive acquisition-tax calculator
//! and the budget aggregator that turns price, tax, upgrades, fees and
//! mortgage limits into a total-cost / required-equity summary.

pub mod budget;
pub mod common;
pub mod purchase_tax;

pub use budget::{BudgetError, BudgetInput, BudgetWorksheet};
pub use purchase_tax::{PurchaseTax, progressive_tax, purchase_tax};
