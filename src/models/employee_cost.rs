//! Employee cost models.
//!
//! This module defines the [`EmployeeCostBreakdown`] produced by the cost
//! calculator and the [`CostDemonstrative`] view derived from it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The statutory employer charges and provisions for one month of salary.
///
/// All fields are computed from `gross_salary` in a single pass and the
/// breakdown is never mutated afterwards. `total_cost` is always the exact
/// sum of the other seven fields.
///
/// # Example
///
/// ```
/// use cost_engine::calculation::compute_employee_cost;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_employee_cost(Decimal::new(1000, 0));
/// assert_eq!(breakdown.employer_social_security, Decimal::new(200, 0));
/// assert_eq!(breakdown.total_cost, Decimal::new(1489952, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCostBreakdown {
    /// The base pay before employer charges.
    pub gross_salary: Decimal,
    /// Employer social security contribution (INSS patronal).
    pub employer_social_security: Decimal,
    /// Monthly severance fund deposit (FGTS) on the gross salary.
    pub monthly_severance_fund: Decimal,
    /// Monthly provision for the thirteenth salary.
    pub thirteenth_salary_provision: Decimal,
    /// Severance fund deposit on the thirteenth salary provision.
    pub severance_fund_on_thirteenth: Decimal,
    /// Monthly provision for vacation pay including the one-third bonus.
    pub vacation_provision: Decimal,
    /// Severance fund deposit on the vacation provision.
    pub severance_fund_on_vacation: Decimal,
    /// Gross salary plus every charge and provision.
    pub total_cost: Decimal,
}

impl EmployeeCostBreakdown {
    /// Returns the sum of the three severance fund deposits.
    pub fn total_severance_fund(&self) -> Decimal {
        self.monthly_severance_fund
            + self.severance_fund_on_thirteenth
            + self.severance_fund_on_vacation
    }

    /// Returns the thirteenth salary and vacation provisions combined.
    pub fn total_provisions(&self) -> Decimal {
        self.thirteenth_salary_provision + self.vacation_provision
    }

    /// Returns everything the employer pays on top of the gross salary.
    pub fn total_charges(&self) -> Decimal {
        self.total_cost - self.gross_salary
    }
}

/// A labelled monetary line in a demonstrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLine {
    /// Stable identifier of the line (e.g. "employer_social_security").
    pub key: String,
    /// Display label.
    pub label: String,
    /// The amount for this line.
    pub value: Decimal,
}

/// A cost category with its share of the monthly total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostShare {
    /// Stable identifier of the category.
    pub key: String,
    /// Display label.
    pub label: String,
    /// The amount for this category.
    pub value: Decimal,
    /// Percentage of the monthly total, rounded to two places.
    pub percent: Decimal,
}

/// The employee cost demonstrative.
///
/// Presents a breakdown as monthly, annual and hourly figures together with
/// the itemized lines and category composition used by reports and charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostDemonstrative {
    /// Total monthly cost of the employee.
    pub monthly_cost: Decimal,
    /// Monthly cost times twelve.
    pub annual_cost: Decimal,
    /// Monthly cost spread over the working hours of a month, rounded to cents.
    pub hourly_cost: Decimal,
    /// Charges and provisions as a percentage of the gross salary, rounded to
    /// two places. Zero for a zero salary.
    pub charges_percent: Decimal,
    /// The seven itemized lines of the breakdown.
    pub line_items: Vec<CostLine>,
    /// Gross salary, social security, severance fund and provisions with shares.
    pub composition: Vec<CostShare>,
    /// Annualized amount per category.
    pub annual_by_category: Vec<CostLine>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_breakdown() -> EmployeeCostBreakdown {
        EmployeeCostBreakdown {
            gross_salary: dec("1000"),
            employer_social_security: dec("200"),
            monthly_severance_fund: dec("80"),
            thirteenth_salary_provision: dec("83.3"),
            severance_fund_on_thirteenth: dec("6.664"),
            vacation_provision: dec("111.1"),
            severance_fund_on_vacation: dec("8.888"),
            total_cost: dec("1489.952"),
        }
    }

    #[test]
    fn test_total_severance_fund_sums_three_deposits() {
        assert_eq!(sample_breakdown().total_severance_fund(), dec("95.552"));
    }

    #[test]
    fn test_total_provisions_sums_thirteenth_and_vacation() {
        assert_eq!(sample_breakdown().total_provisions(), dec("194.4"));
    }

    #[test]
    fn test_total_charges_excludes_gross_salary() {
        assert_eq!(sample_breakdown().total_charges(), dec("489.952"));
    }

    #[test]
    fn test_breakdown_serializes_decimals_as_strings() {
        let json = serde_json::to_value(sample_breakdown()).unwrap();
        assert_eq!(json["total_cost"].as_str().unwrap(), "1489.952");
        assert_eq!(json["gross_salary"].as_str().unwrap(), "1000");
    }
}
