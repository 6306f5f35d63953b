mod cli;
mod config;
mod export;
mod logging;
mod report;

use anyhow::Result;
use budget_core::calculations::{BudgetInput, BudgetWorksheet};
use budget_core::models::{BudgetConfig, BuyerProfile};
use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::config::FileConfig;

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let mut market = BudgetConfig::israel_2025();
    file_config.apply_to(&mut market);
    let upgrades = file_config.upgrade_basket()?;

    let profile = BuyerProfile {
        is_resident: !cli.non_resident,
        is_only_home: !cli.additional_property,
        is_new_immigrant: cli.new_immigrant,
    };
    let desired_mortgage = cli
        .mortgage
        .unwrap_or_else(|| cli.price * profile.max_ltv());

    let input = BudgetInput {
        price: cli.price,
        profile,
        rooms: cli.rooms,
        has_air_conditioning: cli.has_ac,
        has_window_screens: cli.has_screens,
        has_shower_enclosures: cli.has_showers,
        upgrades,
        broker_enabled: !cli.no_broker,
        broker_rate: cli.broker_rate,
        lawyer_enabled: !cli.no_lawyer,
        lawyer_rate: cli.lawyer_rate,
        consultant_enabled: !cli.no_consultant,
        consultant_rate: cli.consultant_rate,
        vat_rate: cli.vat.unwrap_or(market.vat_rate),
        desired_mortgage,
    };

    let worksheet = BudgetWorksheet::new(market);
    let summary = worksheet.calculate(&input)?;

    report::print(&summary, input.price);

    if let Some(path) = &cli.export {
        export::write_summary_csv(&summary, input.price, path)?;
        info!(path = %path.display(), "summary exported");
    }

    Ok(())
}
