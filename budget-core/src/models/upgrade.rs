use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The renovation/upgrade lines a new-build apartment typically needs.
///
/// The first three categories are estimated from the apartment itself
/// (room count and which amenities the developer already supplies); the
/// rest are priced directly from quantity × unit cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeCategory {
    AirConditioning,
    WindowScreens,
    ShowerEnclosures,
    KitchenUpgrade,
    LightFixtures,
    PowerOutlets,
    FlooringUpgrade,
    WallChanges,
}

impl UpgradeCategory {
    pub const ALL: [Self; 8] = [
        Self::AirConditioning,
        Self::WindowScreens,
        Self::ShowerEnclosures,
        Self::KitchenUpgrade,
        Self::LightFixtures,
        Self::PowerOutlets,
        Self::FlooringUpgrade,
        Self::WallChanges,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AirConditioning => "air-conditioning",
            Self::WindowScreens => "window-screens",
            Self::ShowerEnclosures => "shower-enclosures",
            Self::KitchenUpgrade => "kitchen-upgrade",
            Self::LightFixtures => "light-fixtures",
            Self::PowerOutlets => "power-outlets",
            Self::FlooringUpgrade => "flooring-upgrade",
            Self::WallChanges => "wall-changes",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "air-conditioning" => Some(Self::AirConditioning),
            "window-screens" => Some(Self::WindowScreens),
            "shower-enclosures" => Some(Self::ShowerEnclosures),
            "kitchen-upgrade" => Some(Self::KitchenUpgrade),
            "light-fixtures" => Some(Self::LightFixtures),
            "power-outlets" => Some(Self::PowerOutlets),
            "flooring-upgrade" => Some(Self::FlooringUpgrade),
            "wall-changes" => Some(Self::WallChanges),
            _ => None,
        }
    }

    /// Human-readable description for report output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AirConditioning => "Air conditioning (per room)",
            Self::WindowScreens => "Window screens (units)",
            Self::ShowerEnclosures => "Shower enclosures (units)",
            Self::KitchenUpgrade => "Kitchen upgrade",
            Self::LightFixtures => "Light fixtures",
            Self::PowerOutlets => "Extra power outlets (units)",
            Self::FlooringUpgrade => "Flooring upgrade",
            Self::WallChanges => "Wall changes / layout",
        }
    }

    /// Ballpark unit cost in shekels. Indicative only.
    pub fn default_unit_cost(&self) -> Decimal {
        let cost = match self {
            Self::AirConditioning => 6_000,
            Self::WindowScreens => 300,
            Self::ShowerEnclosures => 1_800,
            Self::KitchenUpgrade => 50_000,
            Self::LightFixtures => 5_000,
            Self::PowerOutlets => 500,
            Self::FlooringUpgrade => 12_000,
            Self::WallChanges => 8_000,
        };
        Decimal::from(cost)
    }

    /// Default quantity when the user supplies nothing.
    ///
    /// Zero for the three inferred categories (their quantity comes from
    /// the apartment details), one for the whole-apartment upgrades, zero
    /// for per-unit extras.
    pub fn default_quantity(&self) -> Decimal {
        match self {
            Self::KitchenUpgrade | Self::LightFixtures | Self::FlooringUpgrade | Self::WallChanges => {
                Decimal::ONE
            }
            _ => Decimal::ZERO,
        }
    }
}

/// A user-adjustable upgrade line: what, how many, at what unit cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeItem {
    pub category: UpgradeCategory,
    pub quantity: Decimal,
    pub unit_cost: Decimal,
}

impl UpgradeItem {
    /// The full default basket, one item per category.
    pub fn default_basket() -> Vec<Self> {
        UpgradeCategory::ALL
            .iter()
            .map(|category| Self {
                category: *category,
                quantity: category.default_quantity(),
                unit_cost: category.default_unit_cost(),
            })
            .collect()
    }
}

/// A priced upgrade line after quantity inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeLine {
    pub category: UpgradeCategory,
    pub quantity: Decimal,
    pub amount: Decimal,
}
