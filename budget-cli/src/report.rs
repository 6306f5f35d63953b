//! Human-readable summary report.

use budget_core::models::BudgetSummary;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole shekels with thousands separators.
pub fn format_ils(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let raw = rounded.trunc().to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}₪{grouped}")
}

/// Formats a fraction as a percentage with one decimal place.
pub fn format_pct(rate: Decimal) -> String {
    let mut value = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(1);
    format!("{value}%")
}

/// Renders the full report.
pub fn render(
    summary: &BudgetSummary,
    price: Decimal,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Purchase".to_string());
    lines.push(format!("  Apartment price:      {}", format_ils(price)));
    lines.push(format!(
        "  Purchase tax:         {}  ({})",
        format_ils(summary.purchase_tax),
        summary.bracket_schedule.label()
    ));
    lines.push(format!(
        "  Upgrades (estimated): {}",
        format_ils(summary.upgrade_total)
    ));
    for line in &summary.upgrade_lines {
        lines.push(format!(
            "    {:<30} x {:<4} {}",
            line.category.label(),
            line.quantity.to_string(),
            format_ils(line.amount)
        ));
    }

    lines.push(String::new());
    lines.push("Fees (incl. VAT)".to_string());
    for (name, fee) in [
        ("Broker:", summary.fees.broker),
        ("Buyer's lawyer:", summary.fees.buyer_lawyer),
        ("Developer's lawyer:", summary.fees.contractor_lawyer),
        ("Mortgage consultant:", summary.fees.mortgage_consultant),
    ] {
        lines.push(format!(
            "  {:<21} {} + VAT {}",
            name,
            format_ils(fee.amount),
            format_ils(fee.vat)
        ));
    }
    lines.push(format!(
        "  Total fees:           {}",
        format_ils(summary.total_fees)
    ));

    lines.push(String::new());
    lines.push("Mortgage".to_string());
    lines.push(format!(
        "  LTV ceiling:          {} of price -> {}",
        format_pct(summary.max_ltv),
        format_ils(summary.max_mortgage)
    ));
    lines.push(format!(
        "  Mortgage:             {}",
        format_ils(summary.mortgage)
    ));
    if summary.mortgage_clamped {
        lines.push(
            "  note: the requested amount exceeded the ceiling and was reduced".to_string(),
        );
    }
    lines.push(format!(
        "  Monthly (30-year):    {}  (~5,550 per million)",
        format_ils(summary.monthly_30yr)
    ));
    lines.push(format!(
        "  Monthly (20-year):    {}  (~6,700 per million)",
        format_ils(summary.monthly_20yr)
    ));

    lines.push(String::new());
    lines.push("Summary".to_string());
    lines.push(format!(
        "  Total cost:           {}",
        format_ils(summary.total_cost)
    ));
    lines.push(format!(
        "  Required equity:      {}",
        format_ils(summary.required_equity)
    ));
    lines.push(String::new());
    lines.push(
        "All figures are planning estimates; verify rates and taxes with a professional."
            .to_string(),
    );
    lines.push(String::new());

    lines.join("\n")
}

pub fn print(
    summary: &BudgetSummary,
    price: Decimal,
) {
    print!("{}", render(summary, price));
}

#[cfg(test)]
mod tests {
    use budget_core::calculations::{BudgetInput, BudgetWorksheet};
    use budget_core::models::{BudgetConfig, BuyerProfile, UpgradeItem};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_ils_groups_thousands() {
        assert_eq!(format_ils(dec!(0)), "₪0");
        assert_eq!(format_ils(dec!(999)), "₪999");
        assert_eq!(format_ils(dec!(1500000)), "₪1,500,000");
    }

    #[test]
    fn format_ils_rounds_to_whole_shekels() {
        assert_eq!(format_ils(dec!(821708.33)), "₪821,708");
        assert_eq!(format_ils(dec!(821708.50)), "₪821,709");
    }

    #[test]
    fn format_ils_handles_negative_amounts() {
        assert_eq!(format_ils(dec!(-1234.5)), "-₪1,235");
    }

    #[test]
    fn format_pct_shows_one_decimal() {
        assert_eq!(format_pct(dec!(0.75)), "75.0%");
        assert_eq!(format_pct(dec!(0.035)), "3.5%");
    }

    #[test]
    fn report_contains_the_headline_figures() {
        let input = BudgetInput {
            price: dec!(2400000),
            profile: BuyerProfile {
                is_resident: true,
                is_only_home: true,
                is_new_immigrant: false,
            },
            rooms: 4,
            has_air_conditioning: false,
            has_window_screens: false,
            has_shower_enclosures: false,
            upgrades: UpgradeItem::default_basket(),
            broker_enabled: true,
            broker_rate: dec!(0.02),
            lawyer_enabled: true,
            lawyer_rate: dec!(0.01),
            consultant_enabled: true,
            consultant_rate: dec!(0.005),
            vat_rate: dec!(0.18),
            desired_mortgage: dec!(1800000),
        };
        let summary = BudgetWorksheet::new(BudgetConfig::israel_2025())
            .calculate(&input)
            .unwrap();

        let report = render(&summary, input.price);

        assert!(report.contains("₪15,538"));
        assert!(report.contains("Israeli resident, only home"));
        assert!(report.contains("₪821,708"));
        assert!(!report.contains("exceeded the ceiling"));
    }
}
