//! Employee cost demonstrative.
//!
//! Turns an [`EmployeeCostBreakdown`] into the monthly, annual and hourly
//! figures, itemized lines and category shares shown on an employee's cost
//! statement.

use rust_decimal::Decimal;

use super::amount::{round_currency, share_percent};
use crate::config::DemonstrativePolicy;
use crate::models::{CostDemonstrative, CostLine, CostShare, EmployeeCostBreakdown};

/// Number of months used to annualize a monthly cost.
pub const MONTHS_PER_YEAR: u32 = 12;

fn line(key: &str, label: &str, value: Decimal) -> CostLine {
    CostLine {
        key: key.to_string(),
        label: label.to_string(),
        value,
    }
}

/// Builds the cost demonstrative for a breakdown.
///
/// The hourly cost divides the monthly cost by the working hours of a month
/// and is rounded to cents; when the policy has no working hours it is zero.
/// Category shares are percentages of the sum of the categories, rounded to
/// two places.
///
/// # Examples
///
/// ```
/// use cost_engine::calculation::{build_cost_demonstrative, compute_employee_cost};
/// use cost_engine::config::DemonstrativePolicy;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_employee_cost(Decimal::new(1000, 0));
/// let demonstrative = build_cost_demonstrative(&breakdown, &DemonstrativePolicy::default());
/// assert_eq!(demonstrative.hourly_cost, Decimal::new(847, 2));
/// ```
pub fn build_cost_demonstrative(
    breakdown: &EmployeeCostBreakdown,
    policy: &DemonstrativePolicy,
) -> CostDemonstrative {
    let months = Decimal::from(MONTHS_PER_YEAR);
    let monthly_cost = breakdown.total_cost;
    let annual_cost = monthly_cost * months;

    let monthly_hours = policy.monthly_hours();
    let hourly_cost = if monthly_hours == 0 {
        Decimal::ZERO
    } else {
        round_currency(monthly_cost / Decimal::from(monthly_hours))
    };

    let line_items = vec![
        line("gross_salary", "Salário Base", breakdown.gross_salary),
        line(
            "employer_social_security",
            "INSS Patronal",
            breakdown.employer_social_security,
        ),
        line(
            "monthly_severance_fund",
            "FGTS Mensal",
            breakdown.monthly_severance_fund,
        ),
        line(
            "thirteenth_salary_provision",
            "Provisão 13º",
            breakdown.thirteenth_salary_provision,
        ),
        line(
            "severance_fund_on_thirteenth",
            "FGTS 13º",
            breakdown.severance_fund_on_thirteenth,
        ),
        line(
            "vacation_provision",
            "Provisão de Férias",
            breakdown.vacation_provision,
        ),
        line(
            "severance_fund_on_vacation",
            "FGTS Férias",
            breakdown.severance_fund_on_vacation,
        ),
    ];

    let categories = [
        ("gross_salary", "Salário Bruto", breakdown.gross_salary),
        (
            "employer_social_security",
            "INSS Patronal",
            breakdown.employer_social_security,
        ),
        (
            "severance_fund",
            "FGTS Total",
            breakdown.total_severance_fund(),
        ),
        ("provisions", "Provisões", breakdown.total_provisions()),
    ];
    let categories_total: Decimal = categories.iter().map(|(_, _, value)| *value).sum();
    let composition = categories
        .iter()
        .map(|&(key, label, value)| CostShare {
            key: key.to_string(),
            label: label.to_string(),
            value,
            percent: share_percent(value, categories_total),
        })
        .collect();

    let annual_by_category = vec![
        line("gross_salary", "Salário Bruto", breakdown.gross_salary * months),
        line(
            "employer_social_security",
            "INSS Patronal",
            breakdown.employer_social_security * months,
        ),
        line(
            "severance_fund",
            "FGTS",
            breakdown.total_severance_fund() * months,
        ),
        line(
            "thirteenth_salary",
            "13º Salário",
            breakdown.thirteenth_salary_provision * months,
        ),
        line("vacation", "Férias", breakdown.vacation_provision * months),
    ];

    CostDemonstrative {
        monthly_cost,
        annual_cost,
        hourly_cost,
        charges_percent: share_percent(breakdown.total_charges(), breakdown.gross_salary),
        line_items,
        composition,
        annual_by_category,
    }
}
