//! Budget allocation (rateio) calculation functionality.
//!
//! This module apportions a budget total across services and materials,
//! profit, labor (net pay plus charges), service tax and the residual
//! margin.

use rust_decimal::Decimal;

use super::amount::{percent_of, round_currency};
use crate::config::AllocationPolicy;
use crate::models::{AuditStep, BudgetAllocationResult, LaborCharges};

/// Apportions a budget total using the default policy.
///
/// Service share 50%, profit 20% on both categories, labor 80% of the
/// service value, charges 44.66% of net pay, service tax 15%.
///
/// # Examples
///
/// ```
/// use cost_engine::calculation::compute_budget_allocation;
/// use rust_decimal::Decimal;
///
/// let allocation = compute_budget_allocation(Decimal::new(10000, 0));
/// assert_eq!(allocation.service_value, Decimal::new(5000, 0));
/// assert_eq!(allocation.gross_labor_value, Decimal::new(4000, 0));
/// assert_eq!(allocation.service_tax, Decimal::new(750, 0));
/// ```
pub fn compute_budget_allocation(total_budget: Decimal) -> BudgetAllocationResult {
    compute_budget_allocation_with_policy(total_budget, &AllocationPolicy::default())
}

/// Apportions a budget total using the given policy.
///
/// The labor charges are percentages of the net pay, so the net pay is
/// obtained by dividing the gross labor value by `1 + charges/100`. Each
/// charge is then taken from the net pay, which makes
/// `total_labor_cost` reconstruct `gross_labor_value`.
///
/// The input is not validated and the residual margin is not clamped.
///
/// # Panics
///
/// Panics on `Decimal` overflow. Any budget up to [`MAX_AMOUNT`] with
/// percentages up to 100% is safe; amounts near `Decimal::MAX` are not.
///
/// [`MAX_AMOUNT`]: crate::calculation::MAX_AMOUNT
pub fn compute_budget_allocation_with_policy(
    total_budget: Decimal,
    policy: &AllocationPolicy,
) -> BudgetAllocationResult {
    let service_value = percent_of(total_budget, policy.service_share);
    let material_value = total_budget - service_value;

    let service_profit = percent_of(service_value, policy.service_profit);
    let material_profit = percent_of(material_value, policy.material_profit);
    let net_service_cost = service_value - service_profit;
    let net_material_cost = material_value - material_profit;

    let gross_labor_value = percent_of(service_value, policy.labor_share);

    let rates = &policy.labor_charges;
    let total_charge_percent = rates.total_percent();

    // Deflate: charges are expressed on the net pay.
    let net_employee_pay =
        gross_labor_value / (Decimal::ONE + total_charge_percent / Decimal::ONE_HUNDRED);

    let labor_charges = LaborCharges {
        social_security: percent_of(net_employee_pay, rates.social_security),
        severance_fund: percent_of(net_employee_pay, rates.severance_fund),
        vacation: percent_of(net_employee_pay, rates.vacation),
        thirteenth_salary: percent_of(net_employee_pay, rates.thirteenth_salary),
        other: percent_of(net_employee_pay, rates.other),
    };
    let total_labor_cost = net_employee_pay + labor_charges.total();

    let service_tax = percent_of(service_value, policy.service_tax);
    let residual_margin = net_service_cost - total_labor_cost - service_tax;

    BudgetAllocationResult {
        total_budget,
        service_value,
        material_value,
        service_profit,
        material_profit,
        total_profit: service_profit + material_profit,
        net_service_cost,
        net_material_cost,
        gross_labor_value,
        total_charge_percent,
        net_employee_pay,
        labor_charges,
        total_labor_cost,
        service_tax_percent: policy.service_tax,
        service_tax,
        residual_margin,
    }
}

fn money(value: Decimal) -> String {
    round_currency(value).normalize().to_string()
}

/// Builds the audit steps explaining an allocation, numbered from `first_step`.
pub fn budget_allocation_audit_steps(
    result: &BudgetAllocationResult,
    policy: &AllocationPolicy,
    first_step: u32,
) -> Vec<AuditStep> {
    let mut steps = Vec::new();
    let mut step_number = first_step;
    let mut push = |rule_id: &str,
                    rule_name: &str,
                    legal_basis: Option<&str>,
                    input: serde_json::Value,
                    output: serde_json::Value,
                    reasoning: String| {
        steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            legal_basis: legal_basis.map(str::to_string),
            input,
            output,
            reasoning,
        });
        step_number += 1;
    };

    push(
        "service_split",
        "Divisão Serviço/Material",
        None,
        serde_json::json!({
            "total_budget": result.total_budget.normalize().to_string(),
            "service_share_percent": policy.service_share.normalize().to_string()
        }),
        serde_json::json!({
            "service_value": result.service_value.normalize().to_string(),
            "material_value": result.material_value.normalize().to_string()
        }),
        format!(
            "R$ {} x {}% = R$ {} for services, R$ {} for materials",
            money(result.total_budget),
            policy.service_share.normalize(),
            money(result.service_value),
            money(result.material_value)
        ),
    );

    push(
        "profit",
        "Lucro",
        None,
        serde_json::json!({
            "service_profit_percent": policy.service_profit.normalize().to_string(),
            "material_profit_percent": policy.material_profit.normalize().to_string()
        }),
        serde_json::json!({
            "service_profit": result.service_profit.normalize().to_string(),
            "material_profit": result.material_profit.normalize().to_string(),
            "net_service_cost": result.net_service_cost.normalize().to_string(),
            "net_material_cost": result.net_material_cost.normalize().to_string()
        }),
        format!(
            "Profit R$ {} on services and R$ {} on materials, R$ {} in total",
            money(result.service_profit),
            money(result.material_profit),
            money(result.total_profit)
        ),
    );

    push(
        "gross_labor",
        "Mão de Obra Bruta",
        None,
        serde_json::json!({
            "service_value": result.service_value.normalize().to_string(),
            "labor_share_percent": policy.labor_share.normalize().to_string()
        }),
        serde_json::json!({
            "gross_labor_value": result.gross_labor_value.normalize().to_string()
        }),
        format!(
            "R$ {} x {}% = R$ {}",
            money(result.service_value),
            policy.labor_share.normalize(),
            money(result.gross_labor_value)
        ),
    );

    push(
        "net_employee_pay",
        "Salário Líquido",
        None,
        serde_json::json!({
            "gross_labor_value": result.gross_labor_value.normalize().to_string(),
            "total_charge_percent": result.total_charge_percent.normalize().to_string()
        }),
        serde_json::json!({
            "net_employee_pay": result.net_employee_pay.normalize().to_string()
        }),
        format!(
            "R$ {} / (1 + {}%) = R$ {}",
            money(result.gross_labor_value),
            result.total_charge_percent.normalize(),
            money(result.net_employee_pay)
        ),
    );

    let charges = &result.labor_charges;
    push(
        "labor_charges",
        "Encargos Trabalhistas",
        None,
        serde_json::json!({
            "net_employee_pay": result.net_employee_pay.normalize().to_string()
        }),
        serde_json::json!({
            "social_security": charges.social_security.normalize().to_string(),
            "severance_fund": charges.severance_fund.normalize().to_string(),
            "vacation": charges.vacation.normalize().to_string(),
            "thirteenth_salary": charges.thirteenth_salary.normalize().to_string(),
            "other": charges.other.normalize().to_string(),
            "total_labor_cost": result.total_labor_cost.normalize().to_string()
        }),
        format!(
            "R$ {} + R$ {} in charges = R$ {}",
            money(result.net_employee_pay),
            money(charges.total()),
            money(result.total_labor_cost)
        ),
    );

    push(
        "service_tax",
        "ISS",
        Some("LC 116/2003"),
        serde_json::json!({
            "service_value": result.service_value.normalize().to_string(),
            "service_tax_percent": result.service_tax_percent.normalize().to_string()
        }),
        serde_json::json!({
            "service_tax": result.service_tax.normalize().to_string()
        }),
        format!(
            "R$ {} x {}% = R$ {}",
            money(result.service_value),
            result.service_tax_percent.normalize(),
            money(result.service_tax)
        ),
    );

    push(
        "residual_margin",
        "Sobra",
        None,
        serde_json::json!({
            "net_service_cost": result.net_service_cost.normalize().to_string(),
            "total_labor_cost": result.total_labor_cost.normalize().to_string(),
            "service_tax": result.service_tax.normalize().to_string()
        }),
        serde_json::json!({
            "residual_margin": result.residual_margin.normalize().to_string()
        }),
        format!(
            "R$ {} - R$ {} - R$ {} = R$ {}",
            money(result.net_service_cost),
            money(result.total_labor_cost),
            money(result.service_tax),
            money(result.residual_margin)
        ),
    );

    steps
}
