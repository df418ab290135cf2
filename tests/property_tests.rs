//! Property-based tests for the cost and allocation calculators.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use cost_engine::calculation::{
    allocation_slices, build_cost_demonstrative, calculate_quote_totals,
    compute_budget_allocation, compute_employee_cost, employee_cost_audit_steps,
};
use cost_engine::config::{DemonstrativePolicy, EmployeeChargeRates};
use cost_engine::models::{BudgetAllocationResult, ItemKind, QuoteItem};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn budget_components(result: &BudgetAllocationResult) -> [(&'static str, Decimal); 8] {
    [
        ("service_value", result.service_value),
        ("material_value", result.material_value),
        ("service_profit", result.service_profit),
        ("material_profit", result.material_profit),
        ("gross_labor_value", result.gross_labor_value),
        ("net_employee_pay", result.net_employee_pay),
        ("total_labor_cost", result.total_labor_cost),
        ("service_tax", result.service_tax),
    ]
}

// Amounts in cents, up to one billion.
prop_compose! {
    fn arb_amount()(cents in 0i64..=100_000_000_000i64) -> Decimal {
        Decimal::new(cents, 2)
    }
}

prop_compose! {
    fn arb_quote_item()(
        is_service in any::<bool>(),
        quantity in 1u32..=500,
        cents in 0i64..=1_000_000i64
    ) -> QuoteItem {
        QuoteItem {
            kind: if is_service { ItemKind::Service } else { ItemKind::Material },
            code: "ITEM".to_string(),
            description: "Generated item".to_string(),
            quantity,
            unit_price: Decimal::new(cents, 2),
        }
    }
}

proptest! {
    #[test]
    fn test_total_cost_is_fixed_multiple_of_salary(gross in arb_amount()) {
        let breakdown = compute_employee_cost(gross);

        prop_assert_eq!(breakdown.total_cost, gross * dec("1.489952"));
        prop_assert_eq!(
            breakdown.total_cost,
            breakdown.gross_salary + breakdown.total_charges()
        );
    }

    #[test]
    fn test_total_cost_strictly_increases(low in arb_amount(), extra_cents in 1i64..=100_000_000i64) {
        let high = low + Decimal::new(extra_cents, 2);

        prop_assert!(compute_employee_cost(low).total_cost < compute_employee_cost(high).total_cost);
    }

    #[test]
    fn test_employee_cost_is_deterministic(gross in arb_amount()) {
        prop_assert_eq!(compute_employee_cost(gross), compute_employee_cost(gross));
    }

    #[test]
    fn test_audit_total_matches_breakdown(gross in arb_amount()) {
        let breakdown = compute_employee_cost(gross);
        let steps = employee_cost_audit_steps(&breakdown, &EmployeeChargeRates::default(), 1);

        let last = steps.last().unwrap();
        prop_assert_eq!(
            dec(last.output["total_cost"].as_str().unwrap()),
            breakdown.total_cost
        );
    }

    #[test]
    fn test_annual_cost_is_twelve_months(gross in arb_amount()) {
        let breakdown = compute_employee_cost(gross);
        let demonstrative = build_cost_demonstrative(&breakdown, &DemonstrativePolicy::default());

        prop_assert_eq!(demonstrative.annual_cost, breakdown.total_cost * Decimal::from(12));
        prop_assert!(demonstrative.hourly_cost >= Decimal::ZERO);
    }

    #[test]
    fn test_budget_split_is_exact(total in arb_amount()) {
        let result = compute_budget_allocation(total);

        prop_assert_eq!(result.service_value + result.material_value, total);
        prop_assert_eq!(
            result.total_profit + result.net_service_cost + result.net_material_cost,
            total
        );
    }

    #[test]
    fn test_budget_components_strictly_increase(
        low in arb_amount(),
        extra_cents in 1i64..=100_000_000i64
    ) {
        let high = low + Decimal::new(extra_cents, 2);
        let small = budget_components(&compute_budget_allocation(low));
        let large = budget_components(&compute_budget_allocation(high));

        for ((name, before), (_, after)) in small.iter().zip(large.iter()) {
            prop_assert!(before < after, "{} did not increase: {} -> {}", name, before, after);
        }
    }

    #[test]
    fn test_budget_components_scale_linearly(total in arb_amount()) {
        let single = budget_components(&compute_budget_allocation(total));
        let doubled = budget_components(&compute_budget_allocation(total * Decimal::TWO));

        for ((name, once), (_, twice)) in single.iter().zip(doubled.iter()) {
            let difference = (*twice - *once * Decimal::TWO).abs();
            prop_assert!(difference < dec("0.000001"), "{} off by {}", name, difference);
        }
    }

    #[test]
    fn test_labor_cost_reconstructs_gross_labor(total in arb_amount()) {
        let result = compute_budget_allocation(total);

        let difference = (result.total_labor_cost - result.gross_labor_value).abs();
        prop_assert!(difference < dec("0.000001"), "difference was {}", difference);
    }

    #[test]
    fn test_residual_margin_identity(total in arb_amount()) {
        let result = compute_budget_allocation(total);

        prop_assert_eq!(
            result.residual_margin,
            result.net_service_cost - result.total_labor_cost - result.service_tax
        );
    }

    #[test]
    fn test_slices_are_non_negative(total in arb_amount()) {
        let result = compute_budget_allocation(total);

        for slice in allocation_slices(&result) {
            prop_assert!(slice.value >= Decimal::ZERO);
            prop_assert!(slice.share_percent >= Decimal::ZERO);
            prop_assert!(slice.share_percent <= Decimal::ONE_HUNDRED);
        }
    }

    #[test]
    fn test_quote_totals_add_up(
        items in prop::collection::vec(arb_quote_item(), 1..20),
        discount_ratio in 0u32..=100
    ) {
        let subtotal: Decimal = items.iter().map(|item| item.line_total().unwrap()).sum();
        let discount = (subtotal * Decimal::from(discount_ratio) / Decimal::ONE_HUNDRED).round_dp(2);
        let discount = discount.min(subtotal);

        let totals = calculate_quote_totals(&items, discount).unwrap();

        prop_assert_eq!(totals.subtotal, subtotal);
        prop_assert_eq!(totals.service_subtotal + totals.material_subtotal, subtotal);
        prop_assert_eq!(totals.total, subtotal - discount);
        prop_assert!(totals.total >= Decimal::ZERO);
    }
}
