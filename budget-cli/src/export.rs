//! CSV summary export.
//!
//! Six `item,amount` rows after a header; amounts are truncated to whole
//! shekels in the export only.

use std::path::Path;

use anyhow::{Context, Result};
use budget_core::models::BudgetSummary;
use rust_decimal::Decimal;

pub fn write_summary_csv(
    summary: &BudgetSummary,
    price: Decimal,
    path: &Path,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot create export file '{}'", path.display()))?;

    writer.write_record(["item", "amount"])?;
    for (item, amount) in summary_rows(summary, price) {
        writer.write_record([item, amount.trunc().to_string().as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

fn summary_rows(
    summary: &BudgetSummary,
    price: Decimal,
) -> [(&'static str, Decimal); 6] {
    [
        ("apartment price", price),
        ("purchase tax", summary.purchase_tax),
        ("upgrades", summary.upgrade_total),
        ("fees incl. VAT", summary.total_fees),
        ("mortgage", summary.mortgage),
        ("required equity", summary.required_equity),
    ]
}
