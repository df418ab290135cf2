//! Chart data for a budget allocation.

use rust_decimal::Decimal;

use super::amount::share_percent;
use crate::models::{AllocationCategory, AllocationSlice, BudgetAllocationResult};

/// Expresses an allocation as chart slices with their share of the budget.
///
/// A negative residual margin is shown as zero; the allocation itself keeps
/// the negative value. Shares are rounded to two places and are zero for an
/// empty budget.
pub fn allocation_slices(result: &BudgetAllocationResult) -> Vec<AllocationSlice> {
    let slices = [
        (AllocationCategory::ServiceProfit, result.service_profit),
        (AllocationCategory::MaterialProfit, result.material_profit),
        (AllocationCategory::EmployeePay, result.net_employee_pay),
        (AllocationCategory::LaborCharges, result.labor_charges.total()),
        (AllocationCategory::ServiceTax, result.service_tax),
        (AllocationCategory::MaterialCost, result.net_material_cost),
        (
            AllocationCategory::Residual,
            result.residual_margin.max(Decimal::ZERO),
        ),
    ];

    slices
        .into_iter()
        .map(|(category, value)| AllocationSlice {
            category,
            label: category.label().to_string(),
            value,
            share_percent: share_percent(value, result.total_budget),
        })
        .collect()
}

/// Returns the total profit as a percentage of the budget, rounded to two places.
pub fn profit_percent(result: &BudgetAllocationResult) -> Decimal {
    share_percent(result.total_profit, result.total_budget)
}
