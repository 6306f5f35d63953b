pub mod calculations;
pub mod models;

pub use calculations::{BudgetError, BudgetInput, BudgetWorksheet, PurchaseTax};
pub use models::*;
