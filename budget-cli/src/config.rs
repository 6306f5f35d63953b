//! Optional TOML overrides for the market constants and upgrade basket.
//!
//! Every field is optional; anything omitted keeps the built-in 2025
//! defaults. Example:
//!
//! ```toml
//! vat_rate = 0.17
//! consultant_min_fee = 8000
//!
//! [[upgrades]]
//! category = "kitchen-upgrade"
//! unit_cost = 65000
//!
//! [[upgrades]]
//! category = "power-outlets"
//! quantity = 6
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use budget_core::models::{BudgetConfig, UpgradeCategory, UpgradeItem};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub vat_rate: Option<Decimal>,
    pub contractor_lawyer_fee: Option<Decimal>,
    pub consultant_min_fee: Option<Decimal>,
    pub monthly_per_million_30yr: Option<Decimal>,
    pub monthly_per_million_other: Option<Decimal>,
    pub upgrades: Vec<UpgradeOverride>,
}

/// One upgrade-basket override, keyed by category slug.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpgradeOverride {
    pub category: String,
    pub quantity: Option<Decimal>,
    pub unit_cost: Option<Decimal>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("invalid config file '{}'", path.display()))
    }

    /// Applies the constant overrides onto the built-in defaults.
    pub fn apply_to(
        &self,
        config: &mut BudgetConfig,
    ) {
        if let Some(vat_rate) = self.vat_rate {
            config.vat_rate = vat_rate;
        }
        if let Some(fee) = self.contractor_lawyer_fee {
            config.contractor_lawyer_fee = fee;
        }
        if let Some(fee) = self.consultant_min_fee {
            config.consultant_min_fee = fee;
        }
        if let Some(per_million) = self.monthly_per_million_30yr {
            config.monthly_per_million_30yr = per_million;
        }
        if let Some(per_million) = self.monthly_per_million_other {
            config.monthly_per_million_other = per_million;
        }
    }

    /// The default upgrade basket with any per-category overrides applied.
    pub fn upgrade_basket(&self) -> Result<Vec<UpgradeItem>> {
        let mut basket = UpgradeItem::default_basket();
        for over in &self.upgrades {
            let category = UpgradeCategory::parse(&over.category)
                .with_context(|| format!("unknown upgrade category '{}'", over.category))?;
            if let Some(item) = basket.iter_mut().find(|item| item.category == category) {
                if let Some(quantity) = over.quantity {
                    item.quantity = quantity;
                }
                if let Some(unit_cost) = over.unit_cost {
                    item.unit_cost = unit_cost;
                }
            }
        }
        Ok(basket)
    }
}
