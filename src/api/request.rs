//! Request types for the Cost Engine API.

use rust_decimal::Decimal;

use crate::models::ActivityEntry;
use serde::{Deserialize, Serialize};

/// Request body for the `/employee-cost` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCostRequest {
    /// The monthly gross salary to cost.
    pub gross_salary: Decimal,
}

/// Request body for the `/budget-allocation` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAllocationRequest {
    /// The budget total to apportion.
    pub total_budget: Decimal,
}

/// Query string for the `/clients` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSearchQuery {
    /// Term matched against code, name, CNPJ and email. Empty returns all.
    #[serde(default)]
    pub search: String,
}

/// Request body for the `/activities/stats` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityStatsRequest {
    /// The time entries to summarize.
    pub entries: Vec<ActivityEntry>,
}
