use std::path::PathBuf;

use clap::Parser;
use rust_decimal::Decimal;

/// Budget estimator for buying a new-build apartment from a developer
/// in Israel: acquisition tax, fees with VAT, upgrade estimates,
/// mortgage sizing under LTV limits and required equity.
///
/// All figures are planning estimates, not quotes.
#[derive(Debug, Parser)]
#[command(name = "budget", version)]
pub struct Cli {
    /// Apartment price in shekels.
    #[arg(long)]
    pub price: Decimal,

    /// Number of rooms; drives the inferred AC and screen quantities.
    #[arg(long, default_value_t = 4)]
    pub rooms: u32,

    /// The buyer is not an Israeli resident.
    #[arg(long)]
    pub non_resident: bool,

    /// This is an additional property, not the buyer's only home.
    #[arg(long)]
    pub additional_property: bool,

    /// The buyer is a new immigrant (oleh).
    #[arg(long)]
    pub new_immigrant: bool,

    /// The developer supplies air conditioning.
    #[arg(long)]
    pub has_ac: bool,

    /// The developer supplies window screens.
    #[arg(long)]
    pub has_screens: bool,

    /// The apartment comes with shower enclosures.
    #[arg(long)]
    pub has_showers: bool,

    /// Skip the broker fee.
    #[arg(long)]
    pub no_broker: bool,

    /// Broker commission as a fraction of the price.
    #[arg(long, default_value = "0.02")]
    pub broker_rate: Decimal,

    /// Skip the buyer-lawyer fee.
    #[arg(long)]
    pub no_lawyer: bool,

    /// Buyer's lawyer fee as a fraction of the price.
    #[arg(long, default_value = "0.01")]
    pub lawyer_rate: Decimal,

    /// Skip the mortgage consultant.
    #[arg(long)]
    pub no_consultant: bool,

    /// Consultant fee as a fraction of the mortgage.
    #[arg(long, default_value = "0.005")]
    pub consultant_rate: Decimal,

    /// VAT rate on service fees; defaults to the configured rate (18%).
    #[arg(long)]
    pub vat: Option<Decimal>,

    /// Requested mortgage; defaults to the maximum the LTV ceiling
    /// allows. Amounts above the ceiling are reduced to it.
    #[arg(long)]
    pub mortgage: Option<Decimal>,

    /// TOML file overriding market constants and the upgrade basket.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the six-row `item,amount` CSV summary to this path.
    #[arg(long)]
    pub export: Option<PathBuf>,
}
