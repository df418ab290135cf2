//! Employee cost calculation functionality.
//!
//! This module computes the statutory employer charges and monthly
//! provisions for a gross salary under the Brazilian labor code, and
//! records each figure as an audit step.

use rust_decimal::Decimal;

use super::amount::percent_of;
use crate::config::EmployeeChargeRates;
use crate::models::{AuditStep, EmployeeCostBreakdown};

/// Computes the employer cost of a gross salary using the statutory rates.
///
/// Equivalent to [`compute_employee_cost_with_rates`] with
/// [`EmployeeChargeRates::default`]: INSS patronal 20%, FGTS 8%,
/// thirteenth salary provision 8.33%, vacation provision 11.11%.
///
/// The input is not validated. A negative salary yields negative charges.
/// Overflow panics as described on [`compute_employee_cost_with_rates`].
///
/// # Examples
///
/// ```
/// use cost_engine::calculation::compute_employee_cost;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let cost = compute_employee_cost(Decimal::new(1000, 0));
/// assert_eq!(cost.monthly_severance_fund, Decimal::new(80, 0));
/// assert_eq!(cost.severance_fund_on_vacation, Decimal::from_str("8.888").unwrap());
/// ```
pub fn compute_employee_cost(gross_salary: Decimal) -> EmployeeCostBreakdown {
    compute_employee_cost_with_rates(gross_salary, &EmployeeChargeRates::default())
}

/// Computes the employer cost of a gross salary using the given rates.
///
/// Both provisions are computed from the gross salary directly. The
/// severance fund riders are computed from the provisions, not from the
/// salary. No rounding is applied.
///
/// # Panics
///
/// Panics on `Decimal` overflow. Any salary up to [`MAX_AMOUNT`] with rates
/// up to 100% is safe; amounts near `Decimal::MAX` are not.
///
/// [`MAX_AMOUNT`]: crate::calculation::MAX_AMOUNT
pub fn compute_employee_cost_with_rates(
    gross_salary: Decimal,
    rates: &EmployeeChargeRates,
) -> EmployeeCostBreakdown {
    let employer_social_security = percent_of(gross_salary, rates.employer_social_security);
    let monthly_severance_fund = percent_of(gross_salary, rates.severance_fund);

    let thirteenth_salary_provision = percent_of(gross_salary, rates.thirteenth_salary);
    let severance_fund_on_thirteenth = percent_of(thirteenth_salary_provision, rates.severance_fund);

    let vacation_provision = percent_of(gross_salary, rates.vacation);
    let severance_fund_on_vacation = percent_of(vacation_provision, rates.severance_fund);

    let total_cost = gross_salary
        + employer_social_security
        + monthly_severance_fund
        + thirteenth_salary_provision
        + severance_fund_on_thirteenth
        + vacation_provision
        + severance_fund_on_vacation;

    EmployeeCostBreakdown {
        gross_salary,
        employer_social_security,
        monthly_severance_fund,
        thirteenth_salary_provision,
        severance_fund_on_thirteenth,
        vacation_provision,
        severance_fund_on_vacation,
        total_cost,
    }
}

const SOCIAL_SECURITY_BASIS: &str = "Lei 8.212/1991, art. 22, I";
const SEVERANCE_FUND_BASIS: &str = "Lei 8.036/1990, art. 15";
const THIRTEENTH_SALARY_BASIS: &str = "Lei 4.090/1962";
const VACATION_BASIS: &str = "CF/1988, art. 7º, XVII";

/// Builds the audit steps explaining a cost breakdown.
///
/// Returns one step per charge or provision followed by the total, numbered
/// from `first_step`.
pub fn employee_cost_audit_steps(
    breakdown: &EmployeeCostBreakdown,
    rates: &EmployeeChargeRates,
    first_step: u32,
) -> Vec<AuditStep> {
    let rated = [
        (
            "employer_social_security",
            "INSS Patronal",
            SOCIAL_SECURITY_BASIS,
            breakdown.gross_salary,
            rates.employer_social_security,
            breakdown.employer_social_security,
        ),
        (
            "monthly_severance_fund",
            "FGTS Mensal",
            SEVERANCE_FUND_BASIS,
            breakdown.gross_salary,
            rates.severance_fund,
            breakdown.monthly_severance_fund,
        ),
        (
            "thirteenth_salary_provision",
            "Provisão 13º Salário",
            THIRTEENTH_SALARY_BASIS,
            breakdown.gross_salary,
            rates.thirteenth_salary,
            breakdown.thirteenth_salary_provision,
        ),
        (
            "severance_fund_on_thirteenth",
            "FGTS sobre 13º",
            SEVERANCE_FUND_BASIS,
            breakdown.thirteenth_salary_provision,
            rates.severance_fund,
            breakdown.severance_fund_on_thirteenth,
        ),
        (
            "vacation_provision",
            "Provisão de Férias",
            VACATION_BASIS,
            breakdown.gross_salary,
            rates.vacation,
            breakdown.vacation_provision,
        ),
        (
            "severance_fund_on_vacation",
            "FGTS sobre Férias",
            SEVERANCE_FUND_BASIS,
            breakdown.vacation_provision,
            rates.severance_fund,
            breakdown.severance_fund_on_vacation,
        ),
    ];

    let mut steps: Vec<AuditStep> = rated
        .iter()
        .zip(first_step..)
        .map(|(&(rule_id, rule_name, basis, base, rate, value), step_number)| AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            legal_basis: Some(basis.to_string()),
            input: serde_json::json!({
                "base": base.normalize().to_string(),
                "rate_percent": rate.normalize().to_string()
            }),
            output: serde_json::json!({
                rule_id: value.normalize().to_string()
            }),
            reasoning: format!(
                "R$ {} x {}% = R$ {}",
                base.normalize(),
                rate.normalize(),
                value.normalize()
            ),
        })
        .collect();

    steps.push(AuditStep {
        step_number: first_step + rated.len() as u32,
        rule_id: "total_cost".to_string(),
        rule_name: "Custo Total".to_string(),
        legal_basis: None,
        input: serde_json::json!({
            "gross_salary": breakdown.gross_salary.normalize().to_string(),
            "total_charges": breakdown.total_charges().normalize().to_string()
        }),
        output: serde_json::json!({
            "total_cost": breakdown.total_cost.normalize().to_string()
        }),
        reasoning: format!(
            "R$ {} + R$ {} in charges and provisions = R$ {}",
            breakdown.gross_salary.normalize(),
            breakdown.total_charges().normalize(),
            breakdown.total_cost.normalize()
        ),
    });

    steps
}
