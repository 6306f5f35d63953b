mod bracket_schedule;
mod budget_config;
mod budget_summary;
mod buyer_profile;
mod fee;
mod tax_bracket;
mod upgrade;

pub use bracket_schedule::BracketSchedule;
pub use budget_config::BudgetConfig;
pub use budget_summary::BudgetSummary;
pub use buyer_profile::BuyerProfile;
pub use fee::{FeeBreakdown, FeeLine};
pub use tax_bracket::TaxBracket;
pub use upgrade::{UpgradeCategory, UpgradeItem, UpgradeLine};
