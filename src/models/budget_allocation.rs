//! Budget allocation (rateio) models.
//!
//! This module contains the [`BudgetAllocationResult`] produced by the budget
//! allocator, the [`LaborCharges`] embedded in the labor cost, and the
//! [`AllocationSlice`] used to chart the allocation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Statutory charges paid on top of the net employee pay.
///
/// Each charge is a fixed percentage of the net pay, not of the gross labor
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborCharges {
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

impl LaborCharges {
    /// Returns the sum of all charges.
    ///
    /// # Example
    ///
    /// ```
    /// use cost_engine::models::LaborCharges;
    /// use rust_decimal::Decimal;
    ///
    /// let charges = LaborCharges {
    ///     social_security: Decimal::new(15, 0),
    ///     severance_fund: Decimal::new(8, 0),
    ///     vacation: Decimal::new(833, 2),
    ///     thirteenth_salary: Decimal::new(833, 2),
    ///     other: Decimal::new(5, 0),
    /// };
    /// assert_eq!(charges.total(), Decimal::new(4466, 2));
    /// ```
    pub fn total(&self) -> Decimal {
        self.social_security + self.severance_fund + self.vacation + self.thirteenth_salary + self.other
    }
}

/// The apportionment of a budget total across cost categories.
///
/// Computed in one pass from the budget total and the allocation policy.
/// `residual_margin` may be negative; it is never clamped here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAllocationResult {
    /// The budget being apportioned.
    pub total_budget: Decimal,
    /// Share of the budget assigned to services.
    pub service_value: Decimal,
    /// Remainder of the budget assigned to materials.
    pub material_value: Decimal,
    /// Profit taken from the service value.
    pub service_profit: Decimal,
    /// Profit taken from the material value.
    pub material_profit: Decimal,
    /// Service profit plus material profit.
    pub total_profit: Decimal,
    /// Service value minus service profit.
    pub net_service_cost: Decimal,
    /// Material value minus material profit.
    pub net_material_cost: Decimal,
    /// Share of the service value that pays for labor, charges included.
    pub gross_labor_value: Decimal,
    /// Sum of the labor charge percentages.
    pub total_charge_percent: Decimal,
    /// Net pay left once the charges embedded in the gross labor value are removed.
    pub net_employee_pay: Decimal,
    /// Charges computed on the net pay.
    pub labor_charges: LaborCharges,
    /// Net pay plus charges.
    pub total_labor_cost: Decimal,
    /// Service tax rate in percent.
    pub service_tax_percent: Decimal,
    /// Service tax (ISS) on the service value.
    pub service_tax: Decimal,
    /// What is left of the net service cost after labor and tax.
    pub residual_margin: Decimal,
}

/// Categories shown when charting an allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationCategory {
    /// Profit on services.
    ServiceProfit,
    /// Profit on materials.
    MaterialProfit,
    /// Net pay to the employee.
    EmployeePay,
    /// Labor charges on the net pay.
    LaborCharges,
    /// Service tax.
    ServiceTax,
    /// Net material cost.
    MaterialCost,
    /// Residual margin, clamped at zero.
    Residual,
}

impl AllocationCategory {
    /// Returns the display label for the category.
    pub fn label(self) -> &'static str {
        match self {
            AllocationCategory::ServiceProfit => "Lucro Serviço",
            AllocationCategory::MaterialProfit => "Lucro Material",
            AllocationCategory::EmployeePay => "Salário Funcionário",
            AllocationCategory::LaborCharges => "Encargos",
            AllocationCategory::ServiceTax => "ISS",
            AllocationCategory::MaterialCost => "Custo Material",
            AllocationCategory::Residual => "Sobra",
        }
    }
}

/// One slice of a charted allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationSlice {
    /// The category of the slice.
    pub category: AllocationCategory,
    /// Display label.
    pub label: String,
    /// The amount of the slice.
    pub value: Decimal,
    /// Percentage of the budget total, rounded to two places.
    pub share_percent: Decimal,
}
