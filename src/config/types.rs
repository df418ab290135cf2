//! Configuration types for cost and allocation calculations.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every percentage is a
//! percent number (`20` means 20%). The `Default` implementations carry the
//! statutory rates used when no configuration is supplied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Client, Employee};

/// Employer charge rates applied to a gross salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeChargeRates {
    /// Employer social security (INSS patronal) on the gross salary.
    pub employer_social_security: Decimal,
    /// Severance fund (FGTS) on the salary and on each provision.
    pub severance_fund: Decimal,
    /// Thirteenth salary provision (one twelfth of a salary).
    pub thirteenth_salary: Decimal,
    /// Vacation provision (one twelfth plus the one-third bonus).
    pub vacation: Decimal,
}

impl Default for EmployeeChargeRates {
    fn default() -> Self {
        Self {
            employer_social_security: Decimal::new(20, 0),
            severance_fund: Decimal::new(8, 0),
            thirteenth_salary: Decimal::new(833, 2),
            vacation: Decimal::new(1111, 2),
        }
    }
}

/// Labor charge percentages applied to the net employee pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborChargeRates {
    /// Social security (INSS).
    pub social_security: Decimal,
    /// Severance fund (FGTS).
    pub severance_fund: Decimal,
    /// Vacation provision.
    pub vacation: Decimal,
    /// Thirteenth salary provision.
    pub thirteenth_salary: Decimal,
    /// Other charges.
    pub other: Decimal,
}

impl LaborChargeRates {
    /// Returns the sum of all charge percentages.
    pub fn total_percent(&self) -> Decimal {
        self.social_security + self.severance_fund + self.vacation + self.thirteenth_salary + self.other
    }
}

impl Default for LaborChargeRates {
    fn default() -> Self {
        Self {
            social_security: Decimal::new(15, 0),
            severance_fund: Decimal::new(8, 0),
            vacation: Decimal::new(833, 2),
            thirteenth_salary: Decimal::new(833, 2),
            other: Decimal::new(5, 0),
        }
    }
}

/// Percentages used to apportion a budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationPolicy {
    /// Share of the budget assigned to services; materials get the rest.
    pub service_share: Decimal,
    /// Profit taken from the service value.
    pub service_profit: Decimal,
    /// Profit taken from the material value.
    pub material_profit: Decimal,
    /// Share of the service value that pays for labor.
    pub labor_share: Decimal,
    /// Service tax (ISS) on the service value.
    pub service_tax: Decimal,
    /// Charges embedded in the labor value.
    #[serde(default)]
    pub labor_charges: LaborChargeRates,
}

impl Default for AllocationPolicy {
    fn default() -> Self {
        Self {
            service_share: Decimal::new(50, 0),
            service_profit: Decimal::new(20, 0),
            material_profit: Decimal::new(20, 0),
            labor_share: Decimal::new(80, 0),
            service_tax: Decimal::new(15, 0),
            labor_charges: LaborChargeRates::default(),
        }
    }
}

/// Working time used to turn a monthly cost into an hourly cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemonstrativePolicy {
    /// Working hours per day.
    pub hours_per_day: u32,
    /// Working days per month.
    pub working_days_per_month: u32,
}

impl DemonstrativePolicy {
    /// Returns the working hours in a month.
    ///
    /// Widened to `u64` so any pair of configured values multiplies exactly.
    pub fn monthly_hours(&self) -> u64 {
        u64::from(self.hours_per_day) * u64::from(self.working_days_per_month)
    }
}

impl Default for DemonstrativePolicy {
    fn default() -> Self {
        Self {
            hours_per_day: 8,
            working_days_per_month: 22,
        }
    }
}

/// The complete charge policy from policy.yaml.
///
/// Sections that are omitted from the file take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargePolicy {
    /// Employer charges on a salary.
    #[serde(default)]
    pub employee_cost: EmployeeChargeRates,
    /// Budget apportionment.
    #[serde(default)]
    pub budget_allocation: AllocationPolicy,
    /// Hourly cost basis.
    #[serde(default)]
    pub demonstrative: DemonstrativePolicy,
}

/// Employee roster file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// Every employee in the roster.
    pub employees: Vec<Employee>,
}

/// Client directory file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientsConfig {
    /// Every client in the directory.
    pub clients: Vec<Client>,
}
